use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::gallery::CapturedBitmap;
use crate::ports::errors::PhotoStoreError;

/// Durable storage for user-captured photos.
#[async_trait]
pub trait PhotoStorePort: Send + Sync {
    /// Copy a transient byte source into a uniquely named durable file and
    /// return its absolute path. A failure leaves no partial file behind.
    async fn materialize(&self, bytes: &[u8]) -> Result<PathBuf, PhotoStoreError>;

    /// Camera-capture variant: encode the bitmap to JPEG first, then store
    /// it like `materialize`. Encode failures surface as the same fault.
    async fn materialize_bitmap(&self, bitmap: &CapturedBitmap) -> Result<PathBuf, PhotoStoreError>;

    /// Delete a materialized file. A file that is already gone is not an
    /// error.
    async fn remove(&self, path: &Path) -> Result<(), PhotoStoreError>;
}

#[async_trait]
impl<T: PhotoStorePort + ?Sized> PhotoStorePort for Arc<T> {
    async fn materialize(&self, bytes: &[u8]) -> Result<PathBuf, PhotoStoreError> {
        (**self).materialize(bytes).await
    }

    async fn materialize_bitmap(&self, bitmap: &CapturedBitmap) -> Result<PathBuf, PhotoStoreError> {
        (**self).materialize_bitmap(bitmap).await
    }

    async fn remove(&self, path: &Path) -> Result<(), PhotoStoreError> {
        (**self).remove(path).await
    }
}
