use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::application::ports::{FileLoader, TranslationProvider};
use crate::domain::Language;
use crate::presentation::state::AppState;

use super::error::ApiError;

#[derive(Serialize)]
pub struct LanguagesResponse {
    pub source_languages: Vec<LanguageView>,
    pub target_languages: Vec<LanguageView>,
}

#[derive(Serialize)]
pub struct LanguageView {
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_formality: Option<bool>,
}

impl LanguageView {
    fn source(language: Language) -> Self {
        Self {
            code: language.code,
            name: language.name,
            supports_formality: None,
        }
    }

    fn target(language: Language) -> Self {
        Self {
            code: language.code,
            name: language.name,
            supports_formality: Some(language.supports_formality),
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn languages_handler<F, P>(
    State(state): State<AppState<F, P>>,
) -> Result<Json<LanguagesResponse>, ApiError>
where
    F: FileLoader + 'static,
    P: TranslationProvider + ?Sized + 'static,
{
    let (source, target) = state.translation_service.languages().await?;

    Ok(Json(LanguagesResponse {
        source_languages: source.into_iter().map(LanguageView::source).collect(),
        target_languages: target.into_iter().map(LanguageView::target).collect(),
    }))
}
