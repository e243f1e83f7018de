use doc_translator::application::ports::{ProviderError, TranslationProvider};
use doc_translator::domain::{Formality, LanguageKind, TranslationOptions};
use doc_translator::infrastructure::translation::MockTranslationProvider;

#[tokio::test]
async fn given_unknown_phrase_when_translating_then_prefixes_target() {
    let provider = MockTranslationProvider::new();
    let options = TranslationOptions::parse("IT", None, None).unwrap();

    let result = provider.translate_text("Ciao", &options).await.unwrap();

    assert_eq!(result.text, "[IT] Ciao");
}

#[tokio::test]
async fn given_custom_phrase_when_translating_then_uses_it() {
    let provider =
        MockTranslationProvider::new().with_phrase("Thanks", "es", Formality::Default, "Gracias");
    let options = TranslationOptions::parse("ES", None, Some("formal")).unwrap();

    let result = provider.translate_text("Thanks", &options).await.unwrap();

    assert_eq!(result.text, "Gracias");
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn given_unconfigured_provider_when_listing_languages_then_returns_not_configured() {
    let provider = MockTranslationProvider::unconfigured();

    let result = provider.languages(LanguageKind::Target).await;

    assert!(matches!(result, Err(ProviderError::NotConfigured)));
    assert_eq!(provider.calls(), 0);
}
