use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{FileLoaderError, ProviderError, StagingStoreError};
use crate::application::services::TranslationError;
use crate::domain::TranslationRequestError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

/// Every failure a handler can report, mapped onto an HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No file provided. Please select a file to upload.")]
    NoFile,
    #[error("No file selected. Please choose a file.")]
    NoFileSelected,
    #[error("Invalid file type. Supported formats: PDF, DOCX, PPTX, XLSX, TXT, HTML")]
    InvalidFileType,
    #[error("File is too large. Maximum size is {limit_mb}MB per file.")]
    FileTooLarge { limit_mb: u64 },
    #[error("{0}")]
    InvalidRequest(String),
    #[error(transparent)]
    Translation(#[from] TranslationError),
    #[error("Failed to store upload: {0}")]
    Staging(String),
}

impl ApiError {
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NoFile => (StatusCode::BAD_REQUEST, "no_file"),
            Self::NoFileSelected => (StatusCode::BAD_REQUEST, "no_file_selected"),
            Self::InvalidFileType => (StatusCode::BAD_REQUEST, "invalid_file_type"),
            Self::FileTooLarge { .. } => (StatusCode::PAYLOAD_TOO_LARGE, "file_too_large"),
            Self::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            Self::Staging(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
            Self::Translation(e) => match e {
                TranslationError::NotConfigured => {
                    (StatusCode::SERVICE_UNAVAILABLE, "service_not_configured")
                }
                TranslationError::InvalidRequest(TranslationRequestError::NoText) => {
                    (StatusCode::BAD_REQUEST, "no_text")
                }
                TranslationError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
                TranslationError::Extraction(FileLoaderError::NoTextFound(_)) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "no_text_extracted")
                }
                TranslationError::Extraction(FileLoaderError::UnsupportedFormat(_)) => {
                    (StatusCode::BAD_REQUEST, "invalid_file_type")
                }
                TranslationError::Extraction(FileLoaderError::ExtractionFailed(_)) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "extraction_failed")
                }
                TranslationError::Provider(p) => match p {
                    ProviderError::NotConfigured => {
                        (StatusCode::SERVICE_UNAVAILABLE, "service_not_configured")
                    }
                    ProviderError::AuthorizationFailed => {
                        (StatusCode::UNAUTHORIZED, "provider_auth_failed")
                    }
                    ProviderError::QuotaExceeded => {
                        (StatusCode::TOO_MANY_REQUESTS, "provider_quota_exceeded")
                    }
                    ProviderError::RateLimited => {
                        (StatusCode::TOO_MANY_REQUESTS, "provider_rate_limited")
                    }
                    ProviderError::Rejected(_) => (StatusCode::BAD_REQUEST, "provider_rejected"),
                    _ => (StatusCode::BAD_GATEWAY, "translation_failed"),
                },
            },
        }
    }

    /// Message shown to the caller; tells them whether to fix their input,
    /// contact the provider, or fix the deployment.
    pub fn user_message(&self) -> String {
        let Self::Translation(e) = self else {
            return self.to_string();
        };

        match e {
            TranslationError::NotConfigured => {
                "Translation service not configured. Please set DEEPL_API_KEY.".to_string()
            }
            TranslationError::InvalidRequest(r) => r.to_string(),
            TranslationError::Extraction(FileLoaderError::NoTextFound(filename)) => format!(
                "No text could be extracted from {filename}. The document may be scanned or \
                 image-only; run it through an OCR tool first."
            ),
            TranslationError::Extraction(FileLoaderError::UnsupportedFormat(_)) => {
                Self::InvalidFileType.to_string()
            }
            TranslationError::Extraction(FileLoaderError::ExtractionFailed(reason)) => {
                format!("Could not read the document: {reason}")
            }
            TranslationError::Provider(p) => match p {
                ProviderError::AuthorizationFailed => {
                    "Invalid DeepL API key. Please check your credentials.".to_string()
                }
                ProviderError::QuotaExceeded => {
                    "DeepL API quota exceeded. Please upgrade your plan or wait for quota reset."
                        .to_string()
                }
                ProviderError::RateLimited => {
                    "Too many requests to the translation service. Please wait and try again."
                        .to_string()
                }
                ProviderError::Rejected(reason) => {
                    format!("Translation request rejected: {reason}")
                }
                other => format!("Translation failed: {other}"),
            },
        }
    }
}

impl From<TranslationRequestError> for ApiError {
    fn from(err: TranslationRequestError) -> Self {
        Self::Translation(TranslationError::InvalidRequest(err))
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::FileTooLarge {
                limit_mb: crate::domain::MAX_FILE_SIZE_BYTES / (1024 * 1024),
            }
        } else {
            Self::InvalidRequest(format!("Failed to read upload: {}", err.body_text()))
        }
    }
}

impl From<StagingStoreError> for ApiError {
    fn from(err: StagingStoreError) -> Self {
        match err {
            StagingStoreError::TooLarge { limit } => Self::FileTooLarge {
                limit_mb: limit / (1024 * 1024),
            },
            // Body read failures surface here wrapped in io::Error.
            StagingStoreError::Io(io_err)
                if io_err
                    .get_ref()
                    .is_some_and(|inner| inner.is::<MultipartError>()) =>
            {
                match io_err
                    .into_inner()
                    .and_then(|inner| inner.downcast::<MultipartError>().ok())
                {
                    Some(multipart_err) => Self::from(*multipart_err),
                    None => Self::InvalidRequest("Failed to read upload".to_string()),
                }
            }
            other => Self::Staging(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = self.user_message();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), code, error = %self, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), code, error = %self, "Request rejected");
        }

        (
            status,
            Json(ErrorResponse {
                error: message,
                code,
            }),
        )
            .into_response()
    }
}
