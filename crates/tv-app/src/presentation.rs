use std::sync::Arc;

use tracing::{info, warn};

use tv_core::destination::Destination;
use tv_core::ports::{DestinationStorePort, RemoteStoreError};

/// Screen-scoped, non-authoritative cache of the remote destination
/// collection.
///
/// Fetched once on screen entry via [`refresh`](Self::refresh) and patched
/// locally on mutations; it never re-fetches on its own. No pagination, no
/// sorting beyond store-return order, and no dedup by name — two entries
/// sharing a name can coexist here even though the remote store holds only
/// one document under that key.
pub struct DestinationList {
    store: Arc<dyn DestinationStorePort>,
    items: Vec<Destination>,
}

impl DestinationList {
    pub fn new(store: Arc<dyn DestinationStorePort>) -> Self {
        Self {
            store,
            items: Vec::new(),
        }
    }

    pub fn items(&self) -> &[Destination] {
        &self.items
    }

    /// One-shot fetch of the whole collection, replacing the cached items.
    pub async fn refresh(&mut self) -> Result<(), RemoteStoreError> {
        self.items = self.store.fetch_all().await?;
        info!(count = self.items.len(), "Destination list refreshed");
        Ok(())
    }

    /// Optimistic local append after a successful upload; no re-fetch.
    pub fn push(&mut self, destination: Destination) {
        self.items.push(destination);
    }

    /// Delete the remote document, then drop **every** cached entry whose
    /// name matches. On failure the cached items are left unchanged.
    pub async fn delete(&mut self, name: &str) -> Result<(), RemoteStoreError> {
        if let Err(e) = self.store.delete(name).await {
            warn!(name, error = %e, "Destination delete failed; list unchanged");
            return Err(e);
        }

        self.items.retain(|d| d.name != name);
        info!(name, "Destination deleted");
        Ok(())
    }
}
