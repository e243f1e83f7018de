use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response, StatusCode};

use crate::application::ports::{ProviderDocument, ProviderError, TranslationProvider};
use crate::domain::{
    Document, Formality, Language, LanguageKind, TranslatedText, TranslationOptions,
};

use super::deepl_types::{
    ApiErrorBody, DocumentHandle, DocumentKeyBody, DocumentState, DocumentStatus, LanguageEntry,
    TextTranslationBody, TextTranslationResponse,
};

pub const FREE_API_URL: &str = "https://api-free.deepl.com";
pub const PRO_API_URL: &str = "https://api.deepl.com";
pub const INITIAL_POLL_INTERVAL: Duration = Duration::from_secs(1);
pub const MAX_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// DeepL returns 456 when the character quota is used up.
const QUOTA_EXCEEDED: u16 = 456;

pub struct DeepLClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    document_timeout: Duration,
}

impl DeepLClient {
    pub fn new(
        api_key: Option<String>,
        base_url: Option<String>,
        request_timeout: Duration,
        document_timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let api_key = api_key.filter(|k| !k.trim().is_empty());
        let base_url = base_url
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| Self::base_url_for_key(api_key.as_deref()).to_string())
            .trim_end_matches('/')
            .to_string();

        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| ProviderError::ApiRequestFailed(format!("failed to build client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url,
            document_timeout,
        })
    }

    /// Free-plan keys carry a `:fx` suffix and use a separate host.
    pub fn base_url_for_key(api_key: Option<&str>) -> &'static str {
        match api_key {
            Some(key) if key.trim_end().ends_with(":fx") => FREE_API_URL,
            _ => PRO_API_URL,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn formality_param(formality: Formality) -> Option<&'static str> {
        match formality {
            Formality::Default => None,
            Formality::Formal => Some("prefer_more"),
            Formality::Informal => Some("prefer_less"),
        }
    }

    fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder, ProviderError> {
        let key = self.api_key.as_deref().ok_or(ProviderError::NotConfigured)?;
        Ok(builder.header("Authorization", format!("DeepL-Auth-Key {key}")))
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ProviderError> {
        let response = self
            .authorized(builder)?
            .send()
            .await
            .map_err(|e| ProviderError::ApiRequestFailed(format!("request failed: {e}")))?;

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(Self::error_for_status(status, &body))
    }

    /// Maps a non-success DeepL response onto the provider error taxonomy.
    pub fn error_for_status(status: StatusCode, body: &str) -> ProviderError {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| match (b.message, b.detail) {
                (Some(m), Some(d)) => Some(format!("{m}: {d}")),
                (m, d) => m.or(d),
            })
            .unwrap_or_else(|| body.trim().to_string());

        match status.as_u16() {
            401 | 403 => ProviderError::AuthorizationFailed,
            QUOTA_EXCEEDED => ProviderError::QuotaExceeded,
            429 => ProviderError::RateLimited,
            400 | 404 | 413 | 415 => ProviderError::Rejected(message),
            _ => ProviderError::ApiRequestFailed(format!("DeepL returned {status}: {message}")),
        }
    }

    async fn upload_document(
        &self,
        path: &Path,
        document: &Document,
        options: &TranslationOptions,
    ) -> Result<DocumentHandle, ProviderError> {
        let data = tokio::fs::read(path).await?;

        let part = Part::bytes(data)
            .file_name(document.filename.clone())
            .mime_str(document.format.as_mime())
            .map_err(|e| ProviderError::ApiRequestFailed(format!("invalid mime type: {e}")))?;

        let mut form = Form::new()
            .part("file", part)
            .text("target_lang", options.target_lang.to_string());
        if let Some(source) = &options.source_lang {
            form = form.text("source_lang", source.to_string());
        }
        if let Some(formality) = Self::formality_param(options.formality) {
            form = form.text("formality", formality);
        }

        let url = format!("{}/v2/document", self.base_url);
        self.send(self.client.post(&url).multipart(form))
            .await?
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("document upload: {e}")))
    }

    async fn poll_until_done(
        &self,
        handle: &DocumentHandle,
    ) -> Result<DocumentStatus, ProviderError> {
        let url = format!("{}/v2/document/{}", self.base_url, handle.document_id);
        let body = DocumentKeyBody {
            document_key: &handle.document_key,
        };

        let poll_future = async {
            let mut interval = INITIAL_POLL_INTERVAL;

            loop {
                let status: DocumentStatus = self
                    .send(self.client.post(&url).json(&body))
                    .await?
                    .json()
                    .await
                    .map_err(|e| ProviderError::InvalidResponse(format!("document status: {e}")))?;

                match status.status {
                    DocumentState::Done => return Ok(status),
                    DocumentState::Error => {
                        return Err(ProviderError::DocumentFailed(
                            status
                                .error_message
                                .unwrap_or_else(|| "unknown error".to_string()),
                        ));
                    }
                    DocumentState::Queued | DocumentState::Translating => {
                        let wait = status
                            .seconds_remaining
                            .map(Duration::from_secs)
                            .unwrap_or(interval)
                            .clamp(INITIAL_POLL_INTERVAL, MAX_POLL_INTERVAL);
                        tracing::debug!(
                            state = ?status.status,
                            wait_secs = wait.as_secs(),
                            "Document still translating"
                        );
                        tokio::time::sleep(wait).await;
                        interval = (interval * 2).min(MAX_POLL_INTERVAL);
                    }
                }
            }
        };

        tokio::time::timeout(self.document_timeout, poll_future)
            .await
            .map_err(|_| {
                ProviderError::DocumentFailed(format!(
                    "document translation timed out after {}s",
                    self.document_timeout.as_secs()
                ))
            })?
    }

    async fn download(&self, handle: &DocumentHandle) -> Result<bytes::Bytes, ProviderError> {
        let url = format!("{}/v2/document/{}/result", self.base_url, handle.document_id);
        let body = DocumentKeyBody {
            document_key: &handle.document_key,
        };

        self.send(self.client.post(&url).json(&body))
            .await?
            .bytes()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("document download: {e}")))
    }
}

#[async_trait]
impl TranslationProvider for DeepLClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    #[tracing::instrument(skip(self, text, options), fields(chars = text.chars().count()))]
    async fn translate_text(
        &self,
        text: &str,
        options: &TranslationOptions,
    ) -> Result<TranslatedText, ProviderError> {
        let body = TextTranslationBody {
            text: [text],
            target_lang: options.target_lang.as_str(),
            source_lang: options.source_lang.as_ref().map(|s| s.as_str()),
            formality: Self::formality_param(options.formality),
        };

        let url = format!("{}/v2/translate", self.base_url);
        let response: TextTranslationResponse = self
            .send(self.client.post(&url).json(&body))
            .await?
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("translate: {e}")))?;

        let translation = response.translations.into_iter().next().ok_or_else(|| {
            ProviderError::InvalidResponse("translate: empty translations list".to_string())
        })?;

        Ok(TranslatedText {
            text: translation.text,
            detected_source_lang: translation.detected_source_language,
            character_count: text.chars().count(),
        })
    }

    #[tracing::instrument(
        skip(self, path, document, options),
        fields(filename = %document.filename, target = %options.target_lang)
    )]
    async fn translate_document(
        &self,
        path: &Path,
        document: &Document,
        options: &TranslationOptions,
    ) -> Result<ProviderDocument, ProviderError> {
        let handle = self.upload_document(path, document, options).await?;
        tracing::info!(document_id = %handle.document_id, "Document submitted to DeepL");

        let status = self.poll_until_done(&handle).await?;
        let data = self.download(&handle).await?;

        Ok(ProviderDocument {
            data,
            billed_characters: status.billed_characters,
        })
    }

    async fn languages(&self, kind: LanguageKind) -> Result<Vec<Language>, ProviderError> {
        let url = format!("{}/v2/languages", self.base_url);
        let entries: Vec<LanguageEntry> = self
            .send(self.client.get(&url).query(&[("type", kind.as_str())]))
            .await?
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("languages: {e}")))?;

        Ok(entries
            .into_iter()
            .map(|e| Language {
                code: e.language,
                name: e.name,
                supports_formality: e.supports_formality,
            })
            .collect())
    }
}
