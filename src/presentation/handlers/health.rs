use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{FileLoader, TranslationProvider};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub api_configured: bool,
}

pub async fn health_handler<F, P>(State(state): State<AppState<F, P>>) -> impl IntoResponse
where
    F: FileLoader + 'static,
    P: TranslationProvider + ?Sized + 'static,
{
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            api_configured: state.translation_service.is_configured(),
        }),
    )
}
