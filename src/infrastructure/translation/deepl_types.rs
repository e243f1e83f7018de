use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct TextTranslationBody<'a> {
    pub text: [&'a str; 1],
    pub target_lang: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_lang: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formality: Option<&'static str>,
}

#[derive(Debug, Deserialize)]
pub struct TextTranslationResponse {
    pub translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
pub struct Translation {
    pub text: String,
    #[serde(default)]
    pub detected_source_language: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DocumentHandle {
    pub document_id: String,
    pub document_key: String,
}

#[derive(Debug, Serialize)]
pub struct DocumentKeyBody<'a> {
    pub document_key: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentState {
    Queued,
    Translating,
    Done,
    Error,
}

#[derive(Debug, Deserialize)]
pub struct DocumentStatus {
    pub status: DocumentState,
    #[serde(default)]
    pub seconds_remaining: Option<u64>,
    #[serde(default)]
    pub billed_characters: Option<u64>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LanguageEntry {
    pub language: String,
    pub name: String,
    #[serde(default)]
    pub supports_formality: bool,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}
