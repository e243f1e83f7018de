use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError, ProviderError, TranslationProvider};
use crate::domain::{
    Document, Language, LanguageKind, StagedFile, TranslatedDocument, TranslatedText,
    TranslationOptions, TranslationRequestError,
};

pub struct TranslationService<F, P: ?Sized>
where
    F: FileLoader,
    P: TranslationProvider,
{
    file_loader: Arc<F>,
    provider: Arc<P>,
}

impl<F, P: ?Sized> TranslationService<F, P>
where
    F: FileLoader,
    P: TranslationProvider,
{
    pub fn new(file_loader: Arc<F>, provider: Arc<P>) -> Self {
        Self {
            file_loader,
            provider,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_configured()
    }

    fn ensure_configured(&self) -> Result<(), TranslationError> {
        if self.provider.is_configured() {
            Ok(())
        } else {
            Err(TranslationError::NotConfigured)
        }
    }

    #[tracing::instrument(
        skip(self, text, options),
        fields(target = %options.target_lang, formality = %options.formality)
    )]
    pub async fn translate_text(
        &self,
        text: &str,
        options: &TranslationOptions,
    ) -> Result<TranslatedText, TranslationError> {
        if text.trim().is_empty() {
            return Err(TranslationError::InvalidRequest(TranslationRequestError::NoText));
        }
        self.ensure_configured()?;

        let translated = self.provider.translate_text(text, options).await?;

        tracing::info!(
            characters = translated.character_count,
            detected_source = ?translated.detected_source_lang,
            "Text translation completed"
        );

        Ok(translated)
    }

    /// Translates a staged upload.
    ///
    /// Takes ownership of `staged`; the file is deleted when this returns,
    /// whether or not translation succeeded. A document is translated as a
    /// single provider job: any failure fails the whole request.
    #[tracing::instrument(
        skip(self, staged, options),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
            format = %document.format,
            size_bytes = staged.size_bytes(),
            target = %options.target_lang,
        )
    )]
    pub async fn translate_document(
        &self,
        document: &Document,
        staged: StagedFile,
        options: &TranslationOptions,
    ) -> Result<TranslatedDocument, TranslationError> {
        self.ensure_configured()?;

        let text = self
            .file_loader
            .extract_text(staged.path(), document)
            .await?;

        if text.trim().is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()).into());
        }

        let extracted_characters = text.chars().count();
        tracing::debug!(extracted_characters, "Text extracted from staged document");

        let translated = self
            .provider
            .translate_document(staged.path(), document, options)
            .await?;

        let filename = document.translated_filename(&options.target_lang);
        tracing::info!(
            translated_filename = %filename,
            bytes = translated.data.len(),
            "Document translation completed"
        );

        Ok(TranslatedDocument {
            filename,
            format: document.format,
            data: translated.data,
            extracted_characters,
            billed_characters: translated.billed_characters,
        })
    }

    pub async fn languages(
        &self,
    ) -> Result<(Vec<Language>, Vec<Language>), TranslationError> {
        self.ensure_configured()?;

        let source = self.provider.languages(LanguageKind::Source).await?;
        let target = self.provider.languages(LanguageKind::Target).await?;

        tracing::info!(
            source = source.len(),
            target = target.len(),
            "Languages loaded"
        );

        Ok((source, target))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("service not configured: translation provider API key is missing")]
    NotConfigured,
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] TranslationRequestError),
    #[error("extraction: {0}")]
    Extraction(#[from] FileLoaderError),
    #[error("provider: {0}")]
    Provider(ProviderError),
}

impl From<ProviderError> for TranslationError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotConfigured => Self::NotConfigured,
            other => Self::Provider(other),
        }
    }
}
