use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{ProviderError, TranslationProvider};
use crate::presentation::config::{ProviderKind, ProviderSettings};

use super::deepl_client::DeepLClient;
use super::mock_translation_provider::MockTranslationProvider;

pub struct TranslationProviderFactory;

impl TranslationProviderFactory {
    pub fn create(
        settings: &ProviderSettings,
    ) -> Result<Arc<dyn TranslationProvider>, ProviderError> {
        match settings.kind {
            ProviderKind::DeepL => {
                let client = DeepLClient::new(
                    settings.api_key.clone(),
                    settings.base_url.clone(),
                    Duration::from_secs(settings.request_timeout_secs),
                    Duration::from_secs(settings.document_timeout_secs),
                )?;
                tracing::info!(base_url = client.base_url(), "Using DeepL translation provider");
                Ok(Arc::new(client))
            }
            ProviderKind::Mock => {
                tracing::warn!("Using mock translation provider; output is not a real translation");
                Ok(Arc::new(MockTranslationProvider::default()))
            }
        }
    }
}
