mod deepl_client;
mod deepl_types;
mod mock_translation_provider;
mod provider_factory;

pub use deepl_client::{DeepLClient, FREE_API_URL, PRO_API_URL};
pub use deepl_types::{DocumentState, DocumentStatus, LanguageEntry, TextTranslationResponse};
pub use mock_translation_provider::MockTranslationProvider;
pub use provider_factory::TranslationProviderFactory;
