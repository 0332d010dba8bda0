use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use tv_core::destination::{Destination, ImageRef};
use tv_core::gallery::NewImageRecord;
use tv_core::ports::{
    DestinationStorePort, ImageRepositoryPort, PhotoStorePort, SyncError,
};
use tv_core::sync::UploadState;

use crate::models::PhotoSource;

/// Input for one add-destination submission.
#[derive(Debug, Clone)]
pub struct AddDestinationRequest {
    pub name: String,
    pub description: String,
    pub photo: PhotoSource,
}

/// The add-destination synchronization flow.
///
/// Per submission, in order: materialize the photo, insert the local image
/// row, upsert the remote record referencing the durable path. A failure at
/// any step surfaces the originating fault and does **not** roll back steps
/// that already completed — a failed remote upsert leaves the local file and
/// row behind.
///
/// The flow publishes its [`UploadState`] through a watch channel so a
/// caller can disable the triggering affordance while an upload is in
/// flight. The guard is advisory only: two submissions racing past it
/// resolve last-write-wins at the remote store, with no detection.
pub struct AddDestination {
    photo_store: Arc<dyn PhotoStorePort>,
    image_repo: Arc<dyn ImageRepositoryPort>,
    destination_store: Arc<dyn DestinationStorePort>,
    state_tx: watch::Sender<UploadState>,
}

impl AddDestination {
    pub fn from_ports(
        photo_store: Arc<dyn PhotoStorePort>,
        image_repo: Arc<dyn ImageRepositoryPort>,
        destination_store: Arc<dyn DestinationStorePort>,
    ) -> Self {
        let (state_tx, _) = watch::channel(UploadState::Idle);
        Self {
            photo_store,
            image_repo,
            destination_store,
            state_tx,
        }
    }

    /// Snapshot-per-change subscription to the upload state.
    pub fn subscribe_state(&self) -> watch::Receiver<UploadState> {
        self.state_tx.subscribe()
    }

    #[tracing::instrument(
        name = "usecase.add_destination.execute",
        skip(self, request),
        fields(name = %request.name)
    )]
    pub async fn execute(&self, request: AddDestinationRequest) -> Result<Destination, SyncError> {
        if request.name.trim().is_empty() || request.description.trim().is_empty() {
            return Err(SyncError::InvalidInput(
                "name and description must not be blank".to_string(),
            ));
        }

        let uploading = self
            .state_tx
            .borrow()
            .start_upload()
            .ok_or(SyncError::UploadInProgress)?;
        self.state_tx.send_replace(uploading);

        info!("Starting destination upload");
        let result = self.run(request).await;

        let settled = uploading.on_settled(result.is_ok());
        self.state_tx.send_replace(settled);
        // Terminal states return to idle; the caller's unsaved form input is
        // its own to keep.
        self.state_tx.send_replace(settled.reset());

        match &result {
            Ok(destination) => info!(name = %destination.name, "Destination uploaded"),
            Err(e) => warn!(error = %e, "Destination upload failed"),
        }

        result
    }

    async fn run(&self, request: AddDestinationRequest) -> Result<Destination, SyncError> {
        // 1. Materialize the photo into the durable store.
        let path = match &request.photo {
            PhotoSource::Picked(bytes) => self.photo_store.materialize(bytes).await?,
            PhotoSource::Camera(bitmap) => self.photo_store.materialize_bitmap(bitmap).await?,
        };

        // 2. Record it in the local catalog. From here on, failures leave
        //    the materialized file behind.
        self.image_repo
            .insert(NewImageRecord::new(
                path.clone(),
                Some(request.name.clone()),
            ))
            .await?;

        // 3. Upsert the remote document under the destination name. A prior
        //    document with the same name is silently replaced.
        let destination = Destination::new(
            request.name,
            request.description,
            Some(ImageRef::Saved { path }),
        );
        self.destination_store.upsert(&destination).await?;

        Ok(destination)
    }
}
