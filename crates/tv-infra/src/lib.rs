//! # tv-infra
//!
//! Infrastructure adapters for Travelupa: the Diesel/SQLite image catalog,
//! the filesystem photo store, the HTTP remote record store and auth
//! client, and platform directories.

pub mod db;
pub mod fs;
pub mod remote;
pub mod time;

pub use time::SystemClock;
