mod image_row;

pub use image_row::{ImageRow, NewImageRow};
