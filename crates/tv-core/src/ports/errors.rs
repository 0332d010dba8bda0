use thiserror::Error;

/// Faults raised by the photo store (file read/write/encode).
#[derive(Debug, Error)]
pub enum PhotoStoreError {
    #[error("photo i/o failed: {0}")]
    Io(String),

    #[error("bitmap encode failed: {0}")]
    Encode(String),

    #[error("invalid bitmap: {0}")]
    InvalidBitmap(String),
}

/// Faults raised by the local image catalog.
#[derive(Debug, Error)]
pub enum ImageStoreError {
    #[error("image record not found")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(String),
}

/// Faults raised by the remote record store.
///
/// `Timeout` and `Network` are transient connectivity failures; the rest
/// are permanent for the request that produced them. None are retried
/// automatically.
#[derive(Debug, Error)]
pub enum RemoteStoreError {
    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("remote returned status {0}")]
    Status(u16),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("destination holds a transient image reference; only durable references may be persisted")]
    PendingImageRef,
}

impl RemoteStoreError {
    /// Whether the fault is transient connectivity rather than a permanent
    /// rejection of the request.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Timeout | Self::Network(_))
    }
}

/// Faults raised by the authentication boundary.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("email and password must not be blank")]
    MissingCredentials,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("not signed in")]
    NotSignedIn,

    #[error("network error: {0}")]
    Network(String),
}

/// Fault surfaced by the add-destination synchronization flow, carrying the
/// originating step failure. Steps completed before the failure are not
/// rolled back.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("an upload is already in progress")]
    UploadInProgress,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Photo(#[from] PhotoStoreError),

    #[error(transparent)]
    Storage(#[from] ImageStoreError),

    #[error(transparent)]
    Remote(#[from] RemoteStoreError),
}
