mod state;

pub use state::UploadState;
