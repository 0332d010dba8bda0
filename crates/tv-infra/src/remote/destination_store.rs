use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use tv_core::destination::{Destination, ImageRef};
use tv_core::ports::{DestinationStorePort, RemoteStoreError};

/// Wire representation of a destination document.
///
/// The document id is the destination name; the collection stores it
/// redundantly in the body as well.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DestinationDoc {
    name: String,
    description: String,
    #[serde(rename = "imageRef")]
    image_ref: Option<String>,
    #[serde(rename = "imageResourceId")]
    image_resource_id: Option<i64>,
}

fn to_doc(destination: &Destination) -> Result<DestinationDoc, RemoteStoreError> {
    let (image_ref, image_resource_id) = match &destination.image {
        None => (None, None),
        Some(ImageRef::Pending { .. }) => return Err(RemoteStoreError::PendingImageRef),
        Some(ImageRef::Saved { path }) => {
            let path = path
                .to_str()
                .ok_or_else(|| {
                    RemoteStoreError::Serialization("photo path must be valid UTF-8".to_string())
                })?
                .to_owned();
            (Some(path), None)
        }
        Some(ImageRef::Bundled { asset_id }) => (None, Some(*asset_id)),
    };

    Ok(DestinationDoc {
        name: destination.name.clone(),
        description: destination.description.clone(),
        image_ref,
        image_resource_id,
    })
}

fn to_domain(doc: DestinationDoc) -> Destination {
    let image = match (doc.image_ref, doc.image_resource_id) {
        (Some(path), _) => Some(ImageRef::saved(path)),
        (None, Some(asset_id)) => Some(ImageRef::Bundled { asset_id }),
        (None, None) => None,
    };

    Destination::new(doc.name, doc.description, image)
}

fn map_reqwest_error(error: reqwest::Error) -> RemoteStoreError {
    if error.is_timeout() {
        RemoteStoreError::Timeout
    } else if error.is_decode() {
        RemoteStoreError::Serialization(error.to_string())
    } else if let Some(status) = error.status() {
        RemoteStoreError::Status(status.as_u16())
    } else {
        RemoteStoreError::Network(error.to_string())
    }
}

/// HTTP implementation of the remote record store.
///
/// One REST document per destination under `/destinations/{name}`. Requests
/// are issued exactly once; transient faults surface to the caller without
/// retry.
pub struct HttpDestinationStore {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpDestinationStore {
    pub fn from_config(config: &tv_core::config::RemoteConfig) -> Result<Self> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let base_url = Url::parse(base_url).context("Invalid remote store base URL")?;

        Ok(Self { client, base_url })
    }

    fn collection_url(&self) -> Result<Url, RemoteStoreError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RemoteStoreError::Network("base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .push("destinations");
        Ok(url)
    }

    fn document_url(&self, name: &str) -> Result<Url, RemoteStoreError> {
        let mut url = self.collection_url()?;
        url.path_segments_mut()
            .map_err(|_| RemoteStoreError::Network("base URL cannot be a base".to_string()))?
            .push(name);
        Ok(url)
    }
}

#[async_trait]
impl DestinationStorePort for HttpDestinationStore {
    async fn upsert(&self, destination: &Destination) -> Result<(), RemoteStoreError> {
        // Reject transient references before any network I/O.
        let doc = to_doc(destination)?;
        let url = self.document_url(&destination.name)?;

        info!("Upserting destination document at {}", url);
        let response = self
            .client
            .put(url)
            .json(&doc)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(RemoteStoreError::Status(status.as_u16()))
        }
    }

    async fn delete(&self, name: &str) -> Result<(), RemoteStoreError> {
        let url = self.document_url(name)?;

        info!("Deleting destination document at {}", url);
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        // An absent document is not an error.
        if status.is_success() || status == StatusCode::NOT_FOUND {
            Ok(())
        } else {
            Err(RemoteStoreError::Status(status.as_u16()))
        }
    }

    async fn fetch_all(&self) -> Result<Vec<Destination>, RemoteStoreError> {
        let url = self.collection_url()?;

        debug!("Fetching destination collection from {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteStoreError::Status(status.as_u16()));
        }

        let docs = response
            .json::<Vec<DestinationDoc>>()
            .await
            .map_err(|e| RemoteStoreError::Serialization(e.to_string()))?;

        Ok(docs.into_iter().map(to_domain).collect())
    }
}
