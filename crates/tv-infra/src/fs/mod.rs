pub mod app_dirs;
pub mod photo_store;

pub use photo_store::FsPhotoStore;
