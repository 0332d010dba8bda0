use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, info};
use uuid::Uuid;

use tv_core::gallery::CapturedBitmap;
use tv_core::ports::{ClockPort, PhotoStoreError, PhotoStorePort};

/// Filesystem implementation of the photo store.
///
/// Saved photos land in the durable photos directory as
/// `image_<timestamp-ms>_<uuid>.jpg`; camera captures are staged in the
/// cache directory as `<uuid>.jpg` before being persisted the same way.
/// Writes go through a `.part` file renamed into place, so a failed write
/// never leaves a partial photo behind.
pub struct FsPhotoStore {
    photos_dir: PathBuf,
    cache_dir: PathBuf,
    clock: Arc<dyn ClockPort>,
}

impl FsPhotoStore {
    pub fn new(photos_dir: PathBuf, cache_dir: PathBuf, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            photos_dir,
            cache_dir,
            clock,
        }
    }

    fn next_photo_path(&self) -> PathBuf {
        let file_name = format!("image_{}_{}.jpg", self.clock.now_ms(), Uuid::new_v4());
        self.photos_dir.join(file_name)
    }

    async fn write_durable(&self, bytes: &[u8]) -> Result<PathBuf, PhotoStoreError> {
        fs::create_dir_all(&self.photos_dir)
            .await
            .map_err(|e| PhotoStoreError::Io(e.to_string()))?;

        let final_path = self.next_photo_path();
        let part_path = final_path.with_extension("jpg.part");

        if let Err(e) = fs::write(&part_path, bytes).await {
            let _ = fs::remove_file(&part_path).await;
            return Err(PhotoStoreError::Io(e.to_string()));
        }

        if let Err(e) = fs::rename(&part_path, &final_path).await {
            let _ = fs::remove_file(&part_path).await;
            return Err(PhotoStoreError::Io(e.to_string()));
        }

        info!("Photo stored at: {:?}", final_path);
        Ok(final_path)
    }
}

fn encode_jpeg(bitmap: &CapturedBitmap) -> Result<Vec<u8>, PhotoStoreError> {
    let rgba = image::RgbaImage::from_raw(bitmap.width, bitmap.height, bitmap.pixels.clone())
        .ok_or_else(|| {
            PhotoStoreError::InvalidBitmap("pixel buffer does not match dimensions".to_string())
        })?;

    // JPEG has no alpha channel
    let rgb = image::DynamicImage::ImageRgba8(rgba).to_rgb8();

    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(rgb)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Jpeg)
        .map_err(|e| PhotoStoreError::Encode(e.to_string()))?;

    Ok(bytes)
}

#[async_trait]
impl PhotoStorePort for FsPhotoStore {
    async fn materialize(&self, bytes: &[u8]) -> Result<PathBuf, PhotoStoreError> {
        self.write_durable(bytes).await
    }

    async fn materialize_bitmap(
        &self,
        bitmap: &CapturedBitmap,
    ) -> Result<PathBuf, PhotoStoreError> {
        let jpeg = encode_jpeg(bitmap)?;

        // Stage the capture in the ephemeral cache dir first, mirroring how
        // a camera capture exists before the user commits it.
        fs::create_dir_all(&self.cache_dir)
            .await
            .map_err(|e| PhotoStoreError::Io(e.to_string()))?;
        let staging_path = self.cache_dir.join(format!("{}.jpg", Uuid::new_v4()));
        if let Err(e) = fs::write(&staging_path, &jpeg).await {
            let _ = fs::remove_file(&staging_path).await;
            return Err(PhotoStoreError::Io(e.to_string()));
        }

        let result = self.write_durable(&jpeg).await;

        // The staging copy is disposable either way.
        if let Err(e) = fs::remove_file(&staging_path).await {
            debug!("Failed to clean capture staging file: {}", e);
        }

        result
    }

    async fn remove(&self, path: &Path) -> Result<(), PhotoStoreError> {
        match fs::remove_file(path).await {
            Ok(()) => {
                info!("Photo deleted: {:?}", path);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PhotoStoreError::Io(e.to_string())),
        }
    }
}
