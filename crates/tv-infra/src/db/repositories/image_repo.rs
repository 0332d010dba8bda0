use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use tokio::sync::watch;

use tv_core::gallery::{ImageRecord, NewImageRecord};
use tv_core::ports::{ImageRepositoryPort, ImageStoreError};

use crate::db::mappers::{row_to_record, to_new_row};
use crate::db::models::ImageRow;
use crate::db::pool::DbPool;
use crate::db::schema::images::dsl::*;

/// Diesel/SQLite implementation of the local image catalog.
///
/// Holds a `watch` sender and republishes the full catalog snapshot after
/// every mutation, giving subscribers whole-snapshot-per-change semantics.
pub struct DieselImageRepository {
    pool: DbPool,
    snapshot_tx: watch::Sender<Vec<ImageRecord>>,
}

impl DieselImageRepository {
    /// Builds the repository and publishes the current catalog as the
    /// initial snapshot.
    pub fn new(pool: DbPool) -> Result<Self, ImageStoreError> {
        let initial = {
            let mut conn = pool
                .get()
                .map_err(|e| ImageStoreError::Storage(e.to_string()))?;
            load_all(&mut conn)?
        };
        let (snapshot_tx, _) = watch::channel(initial);

        Ok(Self { pool, snapshot_tx })
    }

    fn conn(
        &self,
    ) -> Result<
        diesel::r2d2::PooledConnection<diesel::r2d2::ConnectionManager<SqliteConnection>>,
        ImageStoreError,
    > {
        self.pool
            .get()
            .map_err(|e| ImageStoreError::Storage(e.to_string()))
    }

    fn publish_snapshot(&self, conn: &mut SqliteConnection) -> Result<(), ImageStoreError> {
        let snapshot = load_all(conn)?;
        self.snapshot_tx.send_replace(snapshot);
        Ok(())
    }
}

fn load_all(conn: &mut SqliteConnection) -> Result<Vec<ImageRecord>, ImageStoreError> {
    let rows = images
        .order(id.asc())
        .load::<ImageRow>(conn)
        .map_err(|e| ImageStoreError::Storage(e.to_string()))?;

    Ok(rows.into_iter().map(row_to_record).collect())
}

#[async_trait]
impl ImageRepositoryPort for DieselImageRepository {
    async fn insert(&self, record: NewImageRecord) -> Result<i64, ImageStoreError> {
        let row = to_new_row(&record)?;
        let mut conn = self.conn()?;

        let new_id = diesel::insert_into(images)
            .values(&row)
            .returning(id)
            .get_result::<i64>(&mut conn)
            .map_err(|e| ImageStoreError::Storage(e.to_string()))?;

        self.publish_snapshot(&mut conn)?;

        Ok(new_id)
    }

    async fn get_by_id(&self, record_id: i64) -> Result<Option<ImageRecord>, ImageStoreError> {
        let mut conn = self.conn()?;

        let row = images
            .filter(id.eq(record_id))
            .first::<ImageRow>(&mut conn)
            .optional()
            .map_err(|e| ImageStoreError::Storage(e.to_string()))?;

        Ok(row.map(row_to_record))
    }

    async fn list_all(&self) -> Result<Vec<ImageRecord>, ImageStoreError> {
        let mut conn = self.conn()?;
        load_all(&mut conn)
    }

    async fn delete(&self, record: &ImageRecord) -> Result<(), ImageStoreError> {
        let mut conn = self.conn()?;

        diesel::delete(images.filter(id.eq(record.id)))
            .execute(&mut conn)
            .map_err(|e| ImageStoreError::Storage(e.to_string()))?;

        self.publish_snapshot(&mut conn)?;

        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<Vec<ImageRecord>> {
        self.snapshot_tx.subscribe()
    }
}
