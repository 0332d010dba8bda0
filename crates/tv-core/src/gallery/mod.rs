use std::path::PathBuf;

/// A saved photo row in the local image catalog.
///
/// The row and the file it points at are two independently failable
/// resources; deleting a record removes only the row, and the caller
/// reconciles the file afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRecord {
    /// Store-generated identifier, stable for the record's lifetime.
    pub id: i64,
    /// Absolute path to an app-owned JPEG.
    pub local_path: PathBuf,
    /// Weak reference to the destination this photo belongs to, by name.
    /// No referential integrity, no cascade.
    pub destination_ref: Option<String>,
}

/// Insert model for [`ImageRecord`]; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewImageRecord {
    pub local_path: PathBuf,
    pub destination_ref: Option<String>,
}

impl NewImageRecord {
    pub fn new(local_path: impl Into<PathBuf>, destination_ref: Option<String>) -> Self {
        Self {
            local_path: local_path.into(),
            destination_ref,
        }
    }
}

/// An in-memory camera capture, RGBA8 row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedBitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl CapturedBitmap {
    /// Wraps raw RGBA pixels, checking that the buffer matches the claimed
    /// dimensions (4 bytes per pixel).
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)?;
        if pixels.len() != expected {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }
}
