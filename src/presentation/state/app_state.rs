use std::sync::Arc;

use crate::application::ports::{FileLoader, StagingStore, TranslationProvider};
use crate::application::services::TranslationService;

pub struct AppState<F, P: ?Sized>
where
    F: FileLoader,
    P: TranslationProvider,
{
    pub translation_service: Arc<TranslationService<F, P>>,
    pub staging_store: Arc<dyn StagingStore>,
}

impl<F, P: ?Sized> Clone for AppState<F, P>
where
    F: FileLoader,
    P: TranslationProvider,
{
    fn clone(&self) -> Self {
        Self {
            translation_service: Arc::clone(&self.translation_service),
            staging_store: Arc::clone(&self.staging_store),
        }
    }
}
