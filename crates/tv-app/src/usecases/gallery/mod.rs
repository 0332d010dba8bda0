mod add_gallery_image;
mod delete_gallery_image;

pub use add_gallery_image::AddGalleryImage;
pub use delete_gallery_image::DeleteGalleryImage;
