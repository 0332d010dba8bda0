use async_trait::async_trait;
use std::sync::Arc;

use crate::destination::Destination;
use crate::ports::errors::RemoteStoreError;

/// Keyed remote collection of destination records.
///
/// Documents are keyed by `Destination::name`. `upsert` performs no
/// existence check, so a second write under the same name silently replaces
/// the first (last-write-wins). Implementations must reject destinations
/// whose image reference is still transient before touching the network.
#[async_trait]
pub trait DestinationStorePort: Send + Sync {
    async fn upsert(&self, destination: &Destination) -> Result<(), RemoteStoreError>;

    /// Remove the document under `name`. An absent document is not an error.
    async fn delete(&self, name: &str) -> Result<(), RemoteStoreError>;

    /// One-shot read of the whole collection; refresh timing is the
    /// caller's concern.
    async fn fetch_all(&self) -> Result<Vec<Destination>, RemoteStoreError>;
}

#[async_trait]
impl<T: DestinationStorePort + ?Sized> DestinationStorePort for Arc<T> {
    async fn upsert(&self, destination: &Destination) -> Result<(), RemoteStoreError> {
        (**self).upsert(destination).await
    }

    async fn delete(&self, name: &str) -> Result<(), RemoteStoreError> {
        (**self).delete(name).await
    }

    async fn fetch_all(&self) -> Result<Vec<Destination>, RemoteStoreError> {
        (**self).fetch_all().await
    }
}
