use std::sync::Arc;

use doc_translator::application::ports::FileLoaderError;
use doc_translator::application::services::{TranslationError, TranslationService};
use doc_translator::domain::{
    Document, DocumentFormat, Formality, StagedFile, TranslationOptions, TranslationRequestError,
};
use doc_translator::infrastructure::text_processing::MockFileLoader;
use doc_translator::infrastructure::translation::MockTranslationProvider;

fn create_service(
    provider: MockTranslationProvider,
) -> (
    TranslationService<MockFileLoader, MockTranslationProvider>,
    Arc<MockTranslationProvider>,
) {
    let provider = Arc::new(provider);
    let service = TranslationService::new(Arc::new(MockFileLoader), Arc::clone(&provider));
    (service, provider)
}

fn stage(dir: &tempfile::TempDir, name: &str, contents: &[u8]) -> StagedFile {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    StagedFile::new(path, contents.len() as u64)
}

fn options(target: &str) -> TranslationOptions {
    TranslationOptions::parse(target, None, None).unwrap()
}

#[tokio::test]
async fn given_known_phrase_when_translating_text_then_returns_translation() {
    let (service, provider) = create_service(MockTranslationProvider::default());

    let result = service
        .translate_text("Hello world", &options("DE"))
        .await
        .unwrap();

    assert_eq!(result.text, "Hallo Welt");
    assert_eq!(result.character_count, 11);
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn given_formality_when_translating_text_then_provider_receives_it() {
    let (service, provider) = create_service(MockTranslationProvider::default());
    let opts = options("FR").with_formality(Formality::Informal);

    let result = service.translate_text("Good morning", &opts).await.unwrap();

    assert_eq!(result.text, "Salut");
    assert_eq!(provider.last_options().unwrap().formality, Formality::Informal);
}

#[tokio::test]
async fn given_blank_text_when_translating_then_provider_is_not_called() {
    let (service, provider) = create_service(MockTranslationProvider::default());

    let result = service.translate_text(" \n\t", &options("DE")).await;

    assert!(matches!(
        result,
        Err(TranslationError::InvalidRequest(TranslationRequestError::NoText))
    ));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn given_unconfigured_provider_when_translating_then_returns_not_configured() {
    let (service, _) = create_service(MockTranslationProvider::unconfigured());

    assert!(!service.is_configured());
    let result = service.translate_text("Hello", &options("DE")).await;

    assert!(matches!(result, Err(TranslationError::NotConfigured)));
}

#[tokio::test]
async fn given_staged_text_document_when_translating_then_returns_renamed_document() {
    let (service, _) = create_service(MockTranslationProvider::default());
    let dir = tempfile::TempDir::new().unwrap();
    let staged = stage(&dir, "upload.txt", b"Hello world\nGood morning");
    let staged_path = staged.path().to_path_buf();
    let document = Document::new("greeting.txt".to_string(), DocumentFormat::Txt);

    let translated = service
        .translate_document(&document, staged, &options("DE"))
        .await
        .unwrap();

    assert_eq!(translated.filename, "greeting_DE.txt");
    assert_eq!(translated.format, DocumentFormat::Txt);
    assert_eq!(&translated.data[..], b"Hallo Welt\n[DE] Good morning");
    assert_eq!(translated.extracted_characters, 24);
    assert!(!staged_path.exists());
}

#[tokio::test]
async fn given_document_without_text_when_translating_then_fails_before_provider() {
    let (service, provider) = create_service(MockTranslationProvider::default());
    let dir = tempfile::TempDir::new().unwrap();
    let staged = stage(&dir, "blank.txt", b"  \n ");
    let staged_path = staged.path().to_path_buf();
    let document = Document::new("blank.txt".to_string(), DocumentFormat::Txt);

    let result = service
        .translate_document(&document, staged, &options("DE"))
        .await;

    assert!(matches!(
        result,
        Err(TranslationError::Extraction(FileLoaderError::NoTextFound(_)))
    ));
    assert_eq!(provider.calls(), 0);
    assert!(!staged_path.exists());
}

#[tokio::test]
async fn given_configured_provider_when_listing_languages_then_returns_source_and_target() {
    let (service, _) = create_service(MockTranslationProvider::default());

    let (source, target) = service.languages().await.unwrap();

    assert!(source.iter().all(|l| !l.supports_formality));
    assert!(target.iter().any(|l| l.code == "FR" && l.supports_formality));
}
