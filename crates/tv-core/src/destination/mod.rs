use std::path::PathBuf;

/// Reference to the picture shown for a destination.
///
/// The original field was a single string that sometimes held a transient
/// picker URI and sometimes a durable file path. Modeling it as a tagged
/// variant lets the write boundary reject transient references instead of
/// accidentally persisting them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    /// Transient picker/camera URI. Valid only while the grant that produced
    /// it is alive; must never reach the remote store.
    Pending { uri: String },

    /// Durable app-private file written by the photo store.
    Saved { path: PathBuf },

    /// Built-in asset shipped with the app. Used only by seed entries.
    Bundled { asset_id: i64 },
}

impl ImageRef {
    pub fn saved(path: impl Into<PathBuf>) -> Self {
        Self::Saved { path: path.into() }
    }

    pub fn pending(uri: impl Into<String>) -> Self {
        Self::Pending { uri: uri.into() }
    }

    /// Whether this reference is safe to persist remotely.
    pub fn is_durable(&self) -> bool {
        !matches!(self, Self::Pending { .. })
    }
}

/// A travel-spot record ("tempat wisata").
///
/// The name doubles as the remote store's document key; the store performs
/// no uniqueness check before a write, so two submissions under one name
/// resolve last-write-wins.
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub name: String,
    pub description: String,
    pub image: Option<ImageRef>,
}

impl Destination {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        image: Option<ImageRef>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            image,
        }
    }
}
