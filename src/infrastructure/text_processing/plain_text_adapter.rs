use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentFormat};

use super::text_sanitizer::sanitize_extracted_text;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(
        &self,
        path: &Path,
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.format != DocumentFormat::Txt {
            return Err(FileLoaderError::UnsupportedFormat(
                document.format.to_string(),
            ));
        }

        let data = tokio::fs::read(path).await.map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read staged file: {e}"))
        })?;

        let body = data.strip_prefix(UTF8_BOM).unwrap_or(&data);
        let text = std::str::from_utf8(body)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("invalid UTF-8: {e}")))?;

        let sanitized = sanitize_extracted_text(text);
        if sanitized.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(sanitized)
    }
}
