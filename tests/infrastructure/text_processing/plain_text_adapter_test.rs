use doc_translator::application::ports::{FileLoader, FileLoaderError};
use doc_translator::domain::{Document, DocumentFormat};
use doc_translator::infrastructure::text_processing::PlainTextAdapter;

fn write_temp(dir: &tempfile::TempDir, name: &str, data: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, data).unwrap();
    path
}

#[tokio::test]
async fn given_valid_utf8_file_when_extracting_then_returns_string() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_temp(&dir, "readme.txt", b"Hello, this is plain text.");
    let document = Document::new("readme.txt".to_string(), DocumentFormat::Txt);

    let result = PlainTextAdapter.extract_text(&path, &document).await;

    assert_eq!(result.unwrap(), "Hello, this is plain text.");
}

#[tokio::test]
async fn given_byte_order_mark_when_extracting_then_mark_is_stripped() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_temp(&dir, "bom.txt", b"\xEF\xBB\xBFGuten Tag");
    let document = Document::new("bom.txt".to_string(), DocumentFormat::Txt);

    let result = PlainTextAdapter.extract_text(&path, &document).await;

    assert_eq!(result.unwrap(), "Guten Tag");
}

#[tokio::test]
async fn given_invalid_utf8_file_when_extracting_then_returns_extraction_failed() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_temp(&dir, "broken.txt", &[0xFF, 0xFE, 0xFD]);
    let document = Document::new("broken.txt".to_string(), DocumentFormat::Txt);

    let result = PlainTextAdapter.extract_text(&path, &document).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_whitespace_only_file_when_extracting_then_returns_no_text_found() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_temp(&dir, "blank.txt", b" \n\t\n ");
    let document = Document::new("blank.txt".to_string(), DocumentFormat::Txt);

    let result = PlainTextAdapter.extract_text(&path, &document).await;

    assert!(matches!(result, Err(FileLoaderError::NoTextFound(_))));
}

#[tokio::test]
async fn given_non_text_format_when_extracting_then_returns_unsupported() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_temp(&dir, "file.pdf", b"some data");
    let document = Document::new("file.pdf".to_string(), DocumentFormat::Pdf);

    let result = PlainTextAdapter.extract_text(&path, &document).await;

    assert!(matches!(result, Err(FileLoaderError::UnsupportedFormat(_))));
}
