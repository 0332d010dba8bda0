use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::watch;

use crate::gallery::{ImageRecord, NewImageRecord};
use crate::ports::errors::ImageStoreError;

/// Local catalog of saved photos.
///
/// `subscribe` exposes the reactive accessor: every mutation republishes a
/// fresh whole snapshot of the catalog, ordered by insertion. Subscribers
/// never receive incremental diffs.
#[async_trait]
pub trait ImageRepositoryPort: Send + Sync {
    /// Persist a new row and return its store-generated id.
    async fn insert(&self, record: NewImageRecord) -> Result<i64, ImageStoreError>;

    async fn get_by_id(&self, record_id: i64) -> Result<Option<ImageRecord>, ImageStoreError>;

    /// All rows, ordered by insertion.
    async fn list_all(&self) -> Result<Vec<ImageRecord>, ImageStoreError>;

    /// Remove the row only. The backing file is the caller's separate
    /// responsibility, sequenced after a successful row delete.
    async fn delete(&self, record: &ImageRecord) -> Result<(), ImageStoreError>;

    /// Snapshot-per-change subscription to the catalog.
    fn subscribe(&self) -> watch::Receiver<Vec<ImageRecord>>;
}

#[async_trait]
impl<T: ImageRepositoryPort + ?Sized> ImageRepositoryPort for Arc<T> {
    async fn insert(&self, record: NewImageRecord) -> Result<i64, ImageStoreError> {
        (**self).insert(record).await
    }

    async fn get_by_id(&self, record_id: i64) -> Result<Option<ImageRecord>, ImageStoreError> {
        (**self).get_by_id(record_id).await
    }

    async fn list_all(&self) -> Result<Vec<ImageRecord>, ImageStoreError> {
        (**self).list_all().await
    }

    async fn delete(&self, record: &ImageRecord) -> Result<(), ImageStoreError> {
        (**self).delete(record).await
    }

    fn subscribe(&self) -> watch::Receiver<Vec<ImageRecord>> {
        (**self).subscribe()
    }
}
