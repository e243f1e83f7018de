mod document;
mod formality;
mod language;
mod staged_file;
mod translation_options;
mod translation_result;

pub use document::{Document, DocumentFormat, DocumentId, sanitize_filename};
pub use formality::Formality;
pub use language::{Language, LanguageCode, LanguageCodeError, LanguageKind};
pub use staged_file::StagedFile;
pub use translation_options::{TranslationOptions, TranslationRequestError};
pub use translation_result::{TranslatedDocument, TranslatedText};

/// Upload ceiling, enforced before any provider call.
pub const MAX_FILE_SIZE_BYTES: u64 = 16 * 1024 * 1024;
