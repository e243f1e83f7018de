use std::path::Path;
use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentFormat};

use super::text_sanitizer::{decode_entities, sanitize_extracted_text};

static HIDDEN_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b.*?</script\s*>|<style\b.*?</style\s*>|<!--.*?-->|<head\b.*?</head\s*>")
        .unwrap()
});

static BLOCK_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)<br\s*/?>|</(?:p|div|h[1-6]|li|tr|td|th|title|section|article|blockquote|pre)\s*>",
    )
    .unwrap()
});

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());

#[derive(Default)]
pub struct HtmlAdapter;

impl HtmlAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Visible text of an HTML page, one block element per line.
    pub fn visible_text(html: &str) -> String {
        let without_hidden = HIDDEN_BLOCK.replace_all(html, " ");
        let with_breaks = BLOCK_BOUNDARY.replace_all(&without_hidden, "\n");
        let without_tags = TAG.replace_all(&with_breaks, " ");
        sanitize_extracted_text(&decode_entities(&without_tags))
    }
}

#[async_trait]
impl FileLoader for HtmlAdapter {
    #[tracing::instrument(skip(self, path), fields(filename = %document.filename))]
    async fn extract_text(
        &self,
        path: &Path,
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.format != DocumentFormat::Html {
            return Err(FileLoaderError::UnsupportedFormat(
                document.format.to_string(),
            ));
        }

        let data = tokio::fs::read(path).await.map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read staged file: {e}"))
        })?;

        let text = Self::visible_text(&String::from_utf8_lossy(&data));
        if text.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(text)
    }
}
