use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use tv_core::gallery::NewImageRecord;
use tv_core::ports::{ImageRepositoryPort, PhotoStorePort};

use crate::models::PhotoSource;

/// Save a standalone photo into the gallery: materialize the source, then
/// catalog it without a destination reference.
pub struct AddGalleryImage {
    photo_store: Arc<dyn PhotoStorePort>,
    image_repo: Arc<dyn ImageRepositoryPort>,
}

impl AddGalleryImage {
    pub fn from_ports(
        photo_store: Arc<dyn PhotoStorePort>,
        image_repo: Arc<dyn ImageRepositoryPort>,
    ) -> Self {
        Self {
            photo_store,
            image_repo,
        }
    }

    #[tracing::instrument(name = "usecase.add_gallery_image.execute", skip(self, photo))]
    pub async fn execute(&self, photo: PhotoSource) -> Result<i64> {
        let path = match &photo {
            PhotoSource::Picked(bytes) => self.photo_store.materialize(bytes).await?,
            PhotoSource::Camera(bitmap) => self.photo_store.materialize_bitmap(bitmap).await?,
        };

        let record_id = self
            .image_repo
            .insert(NewImageRecord::new(path, None))
            .await?;

        info!(record_id, "Gallery image saved");
        Ok(record_id)
    }
}
