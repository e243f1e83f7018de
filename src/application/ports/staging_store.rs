use std::io;

use bytes::Bytes;
use futures::stream::BoxStream;

use crate::domain::{Document, StagedFile};

/// Writes an upload stream to a request-scoped temporary file.
#[async_trait::async_trait]
pub trait StagingStore: Send + Sync {
    /// Stages `stream` for `document`, failing once more than the store's
    /// ceiling has been received. Nothing is left on disk when this errors.
    async fn stage(
        &self,
        document: &Document,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<StagedFile, StagingStoreError>;

    fn max_file_size(&self) -> u64;
}

#[derive(Debug, thiserror::Error)]
pub enum StagingStoreError {
    #[error("file exceeds the {limit} byte limit")]
    TooLarge { limit: u64 },
    #[error("failed to create staged file: {0}")]
    CreateFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
