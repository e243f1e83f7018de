use std::io;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;
use tokio::io::AsyncWriteExt;

use crate::application::ports::{StagingStore, StagingStoreError};
use crate::domain::{Document, StagedFile};

/// Stages uploads as uniquely named files inside a local directory.
pub struct LocalStagingStore {
    base_path: PathBuf,
    max_file_size: u64,
}

impl LocalStagingStore {
    pub fn new(base_path: PathBuf, max_file_size: u64) -> Result<Self, StagingStoreError> {
        std::fs::create_dir_all(&base_path).map_err(StagingStoreError::Io)?;
        Ok(Self {
            base_path,
            max_file_size,
        })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

#[async_trait::async_trait]
impl StagingStore for LocalStagingStore {
    #[tracing::instrument(
        skip(self, document, stream),
        fields(document_id = %document.id.as_uuid(), format = %document.format)
    )]
    async fn stage(
        &self,
        document: &Document,
        mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<StagedFile, StagingStoreError> {
        let named = tempfile::Builder::new()
            .prefix(&format!("{}-", document.id.as_uuid()))
            .suffix(&format!(".{}", document.format.extension()))
            .tempfile_in(&self.base_path)
            .map_err(|e| StagingStoreError::CreateFailed(e.to_string()))?;

        // `temp_path` removes the file on drop until ownership moves to `StagedFile`.
        let (file, temp_path) = named.into_parts();
        let mut file = tokio::fs::File::from_std(file);
        let mut total_bytes: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let bytes = chunk?;
            total_bytes += bytes.len() as u64;

            if total_bytes > self.max_file_size {
                tracing::warn!(
                    received = total_bytes,
                    limit = self.max_file_size,
                    "Upload exceeds size limit"
                );
                return Err(StagingStoreError::TooLarge {
                    limit: self.max_file_size,
                });
            }

            file.write_all(&bytes).await?;
        }

        file.flush().await?;
        drop(file);

        let path = temp_path.keep().map_err(|e| StagingStoreError::Io(e.error))?;
        tracing::debug!(path = %path.display(), bytes = total_bytes, "Upload staged");

        Ok(StagedFile::new(path, total_bytes))
    }

    fn max_file_size(&self) -> u64 {
        self.max_file_size
    }
}
