mod error;
mod health;
mod languages;
mod translate_text;
mod upload;

pub use error::{ApiError, ErrorResponse};
pub use health::health_handler;
pub use languages::languages_handler;
pub use translate_text::{TextPayload, translate_text_handler};
pub use upload::{EXTRACTED_CHARACTERS_HEADER, upload_handler};
