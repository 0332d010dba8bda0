use std::path::PathBuf;

use crate::db::models::{ImageRow, NewImageRow};
use tv_core::gallery::{ImageRecord, NewImageRecord};
use tv_core::ports::errors::ImageStoreError;

pub fn row_to_record(row: ImageRow) -> ImageRecord {
    ImageRecord {
        id: row.id,
        local_path: PathBuf::from(row.local_path),
        destination_ref: row.destination_ref,
    }
}

pub fn to_new_row(record: &NewImageRecord) -> Result<NewImageRow, ImageStoreError> {
    let local_path = record
        .local_path
        .to_str()
        .ok_or_else(|| ImageStoreError::Storage("local path must be valid UTF-8".to_string()))?
        .to_owned();

    Ok(NewImageRow {
        local_path,
        destination_ref: record.destination_ref.clone(),
    })
}
