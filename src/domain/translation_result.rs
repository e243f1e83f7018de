use bytes::Bytes;

use super::DocumentFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedText {
    pub text: String,
    pub detected_source_lang: Option<String>,
    pub character_count: usize,
}

/// Translated artifact in the same container format as the upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedDocument {
    pub filename: String,
    pub format: DocumentFormat,
    pub data: Bytes,
    pub extracted_characters: usize,
    pub billed_characters: Option<u64>,
}
