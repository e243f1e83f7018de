use std::io;

use axum::extract::{Multipart, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use futures::{StreamExt, TryStreamExt};

use crate::application::ports::{FileLoader, TranslationProvider};
use crate::domain::{Document, StagedFile, TranslationOptions};
use crate::presentation::state::AppState;

use super::error::ApiError;

pub const EXTRACTED_CHARACTERS_HEADER: &str = "x-extracted-characters";

const FILE_FIELD: &str = "file";

#[derive(Default)]
struct UploadForm {
    staged: Option<(Document, StagedFile)>,
    target_lang: String,
    source_lang: Option<String>,
    formality: Option<String>,
}

/// Accepts a multipart upload, translates it and returns the translated
/// document as an attachment.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<F, P>(
    State(state): State<AppState<F, P>>,
    mut multipart: Multipart,
) -> Result<Response, ApiError>
where
    F: FileLoader + 'static,
    P: TranslationProvider + ?Sized + 'static,
{
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            FILE_FIELD => {
                if form.staged.is_some() {
                    tracing::debug!("Ignoring additional file field");
                    continue;
                }

                let raw_filename = field.file_name().unwrap_or_default().to_string();
                if raw_filename.trim().is_empty() {
                    return Err(ApiError::NoFileSelected);
                }

                let Some(document) = Document::from_upload(&raw_filename) else {
                    tracing::warn!(filename = %raw_filename, "Unsupported file type");
                    return Err(ApiError::InvalidFileType);
                };

                tracing::debug!(
                    document_id = %document.id.as_uuid(),
                    filename = %document.filename,
                    format = %document.format,
                    "Staging upload"
                );

                let stream = field.map_err(io::Error::other).boxed();
                let staged = state.staging_store.stage(&document, stream).await?;
                form.staged = Some((document, staged));
            }
            "target_lang" => form.target_lang = field.text().await?,
            "source_lang" => form.source_lang = Some(field.text().await?),
            "formality" => form.formality = Some(field.text().await?),
            other => tracing::debug!(field = %other, "Ignoring unknown form field"),
        }
    }

    let Some((document, staged)) = form.staged else {
        return Err(ApiError::NoFile);
    };

    let options = TranslationOptions::parse(
        &form.target_lang,
        form.source_lang.as_deref(),
        form.formality.as_deref(),
    )?;

    let translated = state
        .translation_service
        .translate_document(&document, staged, &options)
        .await?;

    let disposition = format!("attachment; filename=\"{}\"", translated.filename);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE.as_str(), translated.format.as_mime().to_string()),
            (header::CONTENT_DISPOSITION.as_str(), disposition),
            (
                EXTRACTED_CHARACTERS_HEADER,
                translated.extracted_characters.to_string(),
            ),
        ],
        translated.data,
    )
        .into_response())
}
