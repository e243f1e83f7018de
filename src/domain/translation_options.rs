use super::{Formality, LanguageCode, LanguageCodeError};

/// Per-request translation parameters shared by text and document mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationOptions {
    pub source_lang: Option<LanguageCode>,
    pub target_lang: LanguageCode,
    pub formality: Formality,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslationRequestError {
    #[error("No text provided. Please enter some text to translate.")]
    NoText,
    #[error("Target language is required.")]
    MissingTargetLanguage,
    #[error("Invalid target language: {0}")]
    InvalidTargetLanguage(String),
    #[error("Invalid source language: {0}")]
    InvalidSourceLanguage(String),
    #[error("{0}")]
    InvalidFormality(String),
}

impl TranslationOptions {
    pub fn new(target_lang: LanguageCode) -> Self {
        Self {
            source_lang: None,
            target_lang,
            formality: Formality::Default,
        }
    }

    /// Validates raw request fields.
    ///
    /// An empty or `auto` source language means auto-detection.
    pub fn parse(
        target_lang: &str,
        source_lang: Option<&str>,
        formality: Option<&str>,
    ) -> Result<Self, TranslationRequestError> {
        let target_lang = LanguageCode::parse(target_lang).map_err(|e| match e {
            LanguageCodeError::Empty => TranslationRequestError::MissingTargetLanguage,
            LanguageCodeError::Invalid(code) => {
                TranslationRequestError::InvalidTargetLanguage(code)
            }
        })?;

        let source_lang = match source_lang.map(str::trim) {
            None | Some("") => None,
            Some(s) if s.eq_ignore_ascii_case("auto") => None,
            Some(s) => Some(
                LanguageCode::parse(s)
                    .map_err(|_| TranslationRequestError::InvalidSourceLanguage(s.to_string()))?,
            ),
        };

        let formality = formality
            .unwrap_or_default()
            .parse()
            .map_err(TranslationRequestError::InvalidFormality)?;

        Ok(Self {
            source_lang,
            target_lang,
            formality,
        })
    }

    pub fn with_formality(mut self, formality: Formality) -> Self {
        self.formality = formality;
        self
    }
}
