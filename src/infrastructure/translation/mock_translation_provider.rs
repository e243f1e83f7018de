use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;

use crate::application::ports::{ProviderDocument, ProviderError, TranslationProvider};
use crate::domain::{
    Document, Formality, Language, LanguageKind, TranslatedText, TranslationOptions,
};

type PhraseKey = (String, String, Formality);

/// In-process provider with a canned phrase book.
///
/// Known phrases are translated from the book; anything else is returned
/// prefixed with the target code, e.g. `[DE] text`. Documents are translated
/// line by line when they are UTF-8 and echoed unchanged otherwise.
pub struct MockTranslationProvider {
    configured: bool,
    phrases: HashMap<PhraseKey, String>,
    calls: AtomicUsize,
    last_options: Mutex<Option<TranslationOptions>>,
}

impl Default for MockTranslationProvider {
    fn default() -> Self {
        Self::new()
            .with_phrase("Hello world", "DE", Formality::Default, "Hallo Welt")
            .with_phrase("Good morning", "FR", Formality::Formal, "Bonjour, Madame, Monsieur")
            .with_phrase("Good morning", "FR", Formality::Informal, "Salut")
            .with_phrase("Good morning", "FR", Formality::Default, "Bonjour")
    }
}

impl MockTranslationProvider {
    pub fn new() -> Self {
        Self {
            configured: true,
            phrases: HashMap::new(),
            calls: AtomicUsize::new(0),
            last_options: Mutex::new(None),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new()
        }
    }

    pub fn with_phrase(
        mut self,
        source: &str,
        target: &str,
        formality: Formality,
        translated: &str,
    ) -> Self {
        self.phrases.insert(
            (source.to_string(), target.to_ascii_uppercase(), formality),
            translated.to_string(),
        );
        self
    }

    /// Number of provider calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_options(&self) -> Option<TranslationOptions> {
        self.last_options
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    fn record(&self, options: &TranslationOptions) -> Result<(), ProviderError> {
        if !self.configured {
            return Err(ProviderError::NotConfigured);
        }
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_options.lock() {
            *last = Some(options.clone());
        }
        Ok(())
    }

    fn translate_phrase(&self, text: &str, options: &TranslationOptions) -> String {
        let target = options.target_lang.as_str().to_string();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return text.to_string();
        }

        self.phrases
            .get(&(trimmed.to_string(), target.clone(), options.formality))
            .or_else(|| {
                self.phrases
                    .get(&(trimmed.to_string(), target.clone(), Formality::Default))
            })
            .cloned()
            .unwrap_or_else(|| format!("[{target}] {trimmed}"))
    }
}

#[async_trait]
impl TranslationProvider for MockTranslationProvider {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn translate_text(
        &self,
        text: &str,
        options: &TranslationOptions,
    ) -> Result<TranslatedText, ProviderError> {
        self.record(options)?;

        Ok(TranslatedText {
            text: self.translate_phrase(text, options),
            detected_source_lang: Some(
                options
                    .source_lang
                    .as_ref()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "EN".to_string()),
            ),
            character_count: text.chars().count(),
        })
    }

    async fn translate_document(
        &self,
        path: &Path,
        _document: &Document,
        options: &TranslationOptions,
    ) -> Result<ProviderDocument, ProviderError> {
        self.record(options)?;

        let data = tokio::fs::read(path).await?;
        let translated = match std::str::from_utf8(&data) {
            Ok(text) => Bytes::from(
                text.lines()
                    .map(|line| self.translate_phrase(line, options))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            Err(_) => Bytes::from(data),
        };

        Ok(ProviderDocument {
            billed_characters: Some(translated.len() as u64),
            data: translated,
        })
    }

    async fn languages(&self, kind: LanguageKind) -> Result<Vec<Language>, ProviderError> {
        if !self.configured {
            return Err(ProviderError::NotConfigured);
        }

        let language = |code: &str, name: &str, formality: bool| Language {
            code: code.to_string(),
            name: name.to_string(),
            supports_formality: formality && kind == LanguageKind::Target,
        };

        Ok(match kind {
            LanguageKind::Source => vec![
                language("DE", "German", false),
                language("EN", "English", false),
                language("FR", "French", false),
            ],
            LanguageKind::Target => vec![
                language("DE", "German", true),
                language("EN-GB", "English (British)", false),
                language("EN-US", "English (American)", false),
                language("FR", "French", true),
            ],
        })
    }
}
