use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use tv_core::gallery::ImageRecord;
use tv_core::ports::{ImageRepositoryPort, PhotoStorePort};

/// Delete a gallery photo: remove the catalog row first, then the backing
/// file. The two are independently failable; the file is only touched once
/// the row delete has succeeded, so a failed row delete never orphans the
/// row. A file that is already gone does not fault the deletion.
pub struct DeleteGalleryImage {
    photo_store: Arc<dyn PhotoStorePort>,
    image_repo: Arc<dyn ImageRepositoryPort>,
}

impl DeleteGalleryImage {
    pub fn from_ports(
        photo_store: Arc<dyn PhotoStorePort>,
        image_repo: Arc<dyn ImageRepositoryPort>,
    ) -> Self {
        Self {
            photo_store,
            image_repo,
        }
    }

    #[tracing::instrument(
        name = "usecase.delete_gallery_image.execute",
        skip(self, record),
        fields(record_id = record.id)
    )]
    pub async fn execute(&self, record: &ImageRecord) -> Result<()> {
        // 1. Row first
        self.image_repo.delete(record).await?;

        // 2. File second, only after the row is gone
        self.photo_store.remove(&record.local_path).await?;

        info!(record_id = record.id, "Gallery image deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::watch;
    use tv_core::gallery::{CapturedBitmap, NewImageRecord};
    use tv_core::ports::{ImageStoreError, PhotoStoreError};

    struct MockPhotoStore {
        remove_called: Arc<AtomicBool>,
    }

    #[async_trait]
    impl PhotoStorePort for MockPhotoStore {
        async fn materialize(&self, _bytes: &[u8]) -> Result<PathBuf, PhotoStoreError> {
            unimplemented!("Not used in tests")
        }

        async fn materialize_bitmap(
            &self,
            _bitmap: &CapturedBitmap,
        ) -> Result<PathBuf, PhotoStoreError> {
            unimplemented!("Not used in tests")
        }

        async fn remove(&self, _path: &Path) -> Result<(), PhotoStoreError> {
            // Mirrors the adapter contract: a missing file is silent.
            self.remove_called.store(true, Ordering::SeqCst);
            Ok(())
        }
    }

    struct MockImageRepo {
        should_fail_delete: bool,
        delete_called: Arc<AtomicBool>,
        snapshot_tx: watch::Sender<Vec<ImageRecord>>,
    }

    impl MockImageRepo {
        fn new(should_fail_delete: bool, delete_called: Arc<AtomicBool>) -> Self {
            let (snapshot_tx, _) = watch::channel(Vec::new());
            Self {
                should_fail_delete,
                delete_called,
                snapshot_tx,
            }
        }
    }

    #[async_trait]
    impl ImageRepositoryPort for MockImageRepo {
        async fn insert(&self, _record: NewImageRecord) -> Result<i64, ImageStoreError> {
            unimplemented!("Not used in tests")
        }

        async fn get_by_id(
            &self,
            _record_id: i64,
        ) -> Result<Option<ImageRecord>, ImageStoreError> {
            unimplemented!("Not used in tests")
        }

        async fn list_all(&self) -> Result<Vec<ImageRecord>, ImageStoreError> {
            unimplemented!("Not used in tests")
        }

        async fn delete(&self, _record: &ImageRecord) -> Result<(), ImageStoreError> {
            self.delete_called.store(true, Ordering::SeqCst);
            if self.should_fail_delete {
                return Err(ImageStoreError::Storage("Mock delete error".to_string()));
            }
            Ok(())
        }

        fn subscribe(&self) -> watch::Receiver<Vec<ImageRecord>> {
            self.snapshot_tx.subscribe()
        }
    }

    fn record() -> ImageRecord {
        ImageRecord {
            id: 7,
            local_path: PathBuf::from("/photos/image_7.jpg"),
            destination_ref: None,
        }
    }

    #[tokio::test]
    async fn deletes_row_then_file() {
        let delete_called = Arc::new(AtomicBool::new(false));
        let remove_called = Arc::new(AtomicBool::new(false));

        let use_case = DeleteGalleryImage::from_ports(
            Arc::new(MockPhotoStore {
                remove_called: remove_called.clone(),
            }),
            Arc::new(MockImageRepo::new(false, delete_called.clone())),
        );

        use_case.execute(&record()).await.unwrap();

        assert!(delete_called.load(Ordering::SeqCst));
        assert!(remove_called.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn failed_row_delete_leaves_the_file_untouched() {
        let delete_called = Arc::new(AtomicBool::new(false));
        let remove_called = Arc::new(AtomicBool::new(false));

        let use_case = DeleteGalleryImage::from_ports(
            Arc::new(MockPhotoStore {
                remove_called: remove_called.clone(),
            }),
            Arc::new(MockImageRepo::new(true, delete_called.clone())),
        );

        let result = use_case.execute(&record()).await;

        assert!(result.is_err());
        assert!(delete_called.load(Ordering::SeqCst));
        assert!(!remove_called.load(Ordering::SeqCst));
    }
}
