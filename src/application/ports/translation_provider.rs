use std::path::Path;

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::{Document, Language, LanguageKind, TranslatedText, TranslationOptions};

/// External translation API.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// False when the provider credential is missing.
    fn is_configured(&self) -> bool;

    async fn translate_text(
        &self,
        text: &str,
        options: &TranslationOptions,
    ) -> Result<TranslatedText, ProviderError>;

    /// Translates the file at `path` and returns the document in the same
    /// container format.
    async fn translate_document(
        &self,
        path: &Path,
        document: &Document,
        options: &TranslationOptions,
    ) -> Result<ProviderDocument, ProviderError>;

    async fn languages(&self, kind: LanguageKind) -> Result<Vec<Language>, ProviderError>;
}

#[derive(Debug, Clone)]
pub struct ProviderDocument {
    pub data: Bytes,
    pub billed_characters: Option<u64>,
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("translation provider API key is not configured")]
    NotConfigured,
    #[error("authorization failed: invalid API key")]
    AuthorizationFailed,
    #[error("quota exceeded")]
    QuotaExceeded,
    #[error("rate limited")]
    RateLimited,
    #[error("request rejected: {0}")]
    Rejected(String),
    #[error("document translation failed: {0}")]
    DocumentFailed(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
