use std::path::Path;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::Document;

/// Reads any staged file as lossy UTF-8, regardless of format.
pub struct MockFileLoader;

#[async_trait::async_trait]
impl FileLoader for MockFileLoader {
    async fn extract_text(&self, path: &Path, _doc: &Document) -> Result<String, FileLoaderError> {
        let data = tokio::fs::read(path)
            .await
            .map_err(|e| FileLoaderError::ExtractionFailed(e.to_string()))?;
        Ok(String::from_utf8_lossy(&data).into_owned())
    }
}
