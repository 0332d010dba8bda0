//! # tv-app
//!
//! Application-layer use cases for Travelupa: the add-destination
//! synchronization flow, gallery management, authentication, the
//! screen-scoped presentation list, and seed data.

pub mod models;
pub mod presentation;
pub mod seed;
pub mod usecases;

pub use models::PhotoSource;
pub use presentation::DestinationList;
