use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentFormat};

use super::text_sanitizer::sanitize_extracted_text;

pub const DEFAULT_EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

pub struct PdfAdapter {
    timeout: Duration,
}

impl Default for PdfAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_EXTRACTION_TIMEOUT)
    }
}

impl PdfAdapter {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn extract_pages(path: &Path) -> Result<Vec<String>, FileLoaderError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        let mut pages = Vec::new();
        let mut failed_pages = 0;

        for page_index in 0..page_count {
            match doc.extract_text(page_index) {
                Ok(text) => {
                    let text = sanitize_extracted_text(&text);
                    if !text.is_empty() {
                        pages.push(text);
                    }
                }
                Err(e) => {
                    tracing::warn!(page = page_index, error = %e, "Failed to extract PDF page");
                    failed_pages += 1;
                }
            }
        }

        // Every page failing points at a damaged or encrypted file, not a scan.
        if page_count > 0 && failed_pages == page_count {
            return Err(FileLoaderError::ExtractionFailed(format!(
                "text extraction failed on all {page_count} pages"
            )));
        }

        Ok(pages)
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(
        skip(self, path, document),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_text(
        &self,
        path: &Path,
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.format != DocumentFormat::Pdf {
            return Err(FileLoaderError::UnsupportedFormat(
                document.format.to_string(),
            ));
        }

        let owned_path: PathBuf = path.to_path_buf();

        let pages = tokio::time::timeout(
            self.timeout,
            tokio::task::spawn_blocking(move || Self::extract_pages(&owned_path)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(pages_with_text = pages.len(), "PDF text extraction complete");

        // Scanned PDFs parse fine but carry no text layer.
        if pages.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(pages.join("\n\n"))
    }
}
