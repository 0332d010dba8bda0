use tv_core::gallery::CapturedBitmap;

/// Where the photo for a new record comes from.
#[derive(Debug, Clone)]
pub enum PhotoSource {
    /// Bytes read from the system picker grant.
    Picked(Vec<u8>),

    /// An in-memory camera capture, encoded to JPEG on materialization.
    Camera(CapturedBitmap),
}
