use axum::Json;
use axum::extract::{Form, FromRequest, Request, State};
use axum::http::header;
use serde::{Deserialize, Serialize};

use crate::application::ports::{FileLoader, TranslationProvider};
use crate::domain::{TranslationOptions, TranslationRequestError};
use crate::infrastructure::observability::preview_for_log;
use crate::presentation::state::AppState;

use super::error::ApiError;

/// Text translation input, accepted as JSON or as a url-encoded form.
#[derive(Debug, Default, Deserialize)]
pub struct TextPayload {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub target_lang: String,
    #[serde(default)]
    pub source_lang: Option<String>,
    #[serde(default)]
    pub formality: Option<String>,
}

impl<S> FromRequest<S> for TextPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        if is_json {
            let Json(payload) = Json::<TextPayload>::from_request(req, state)
                .await
                .map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
            Ok(payload)
        } else {
            let Form(payload) = Form::<TextPayload>::from_request(req, state)
                .await
                .map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
            Ok(payload)
        }
    }
}

#[derive(Serialize)]
pub struct TranslateTextResponse {
    pub success: bool,
    pub translated_text: String,
    pub detected_source_lang: Option<String>,
    pub character_count: usize,
}

#[tracing::instrument(skip(state, payload), fields(target = %payload.target_lang))]
pub async fn translate_text_handler<F, P>(
    State(state): State<AppState<F, P>>,
    payload: TextPayload,
) -> Result<Json<TranslateTextResponse>, ApiError>
where
    F: FileLoader + 'static,
    P: TranslationProvider + ?Sized + 'static,
{
    if payload.text.trim().is_empty() {
        return Err(TranslationRequestError::NoText.into());
    }

    let options = TranslationOptions::parse(
        &payload.target_lang,
        payload.source_lang.as_deref(),
        payload.formality.as_deref(),
    )?;

    tracing::debug!(text = %preview_for_log(&payload.text), "Translating text");

    let translated = state
        .translation_service
        .translate_text(&payload.text, &options)
        .await?;

    Ok(Json(TranslateTextResponse {
        success: true,
        translated_text: translated.text,
        detected_source_lang: translated.detected_source_lang,
        character_count: translated.character_count,
    }))
}
