mod file_loader;
mod staging_store;
mod translation_provider;

pub use file_loader::{FileLoader, FileLoaderError};
pub use staging_store::{StagingStore, StagingStoreError};
pub use translation_provider::{ProviderDocument, ProviderError, TranslationProvider};
