pub mod add_destination;
pub mod auth;
pub mod gallery;

pub use add_destination::{AddDestination, AddDestinationRequest};
pub use auth::{SignIn, SignOut};
pub use gallery::{AddGalleryImage, DeleteGalleryImage};
