use crate::db::schema::images;
use diesel::prelude::*;

#[derive(Queryable)]
pub struct ImageRow {
    pub id: i64,
    pub local_path: String,
    pub destination_ref: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = images)]
pub struct NewImageRow {
    pub local_path: String,
    pub destination_ref: Option<String>,
}
