mod image_mapper;

pub use image_mapper::{row_to_record, to_new_row};
