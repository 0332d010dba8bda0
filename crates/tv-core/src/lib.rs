//! # tv-core
//!
//! Core domain models and business logic for Travelupa.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod destination;
pub mod gallery;
pub mod ids;
pub mod ports;
pub mod sync;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use destination::{Destination, ImageRef};
pub use gallery::{CapturedBitmap, ImageRecord, NewImageRecord};
pub use ids::UserId;
pub use sync::UploadState;
