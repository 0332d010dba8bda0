//! Filesystem photo store tests

use std::sync::Arc;

use tempfile::TempDir;
use tv_core::gallery::CapturedBitmap;
use tv_core::ports::PhotoStorePort;
use tv_infra::fs::FsPhotoStore;
use tv_infra::SystemClock;

fn build_store(temp_dir: &TempDir) -> FsPhotoStore {
    FsPhotoStore::new(
        temp_dir.path().join("photos"),
        temp_dir.path().join("captures"),
        Arc::new(SystemClock),
    )
}

#[tokio::test]
async fn materialize_copies_source_bytes_exactly() {
    let temp_dir = TempDir::new().unwrap();
    let store = build_store(&temp_dir);

    let source = b"0123456789";
    let path = store.materialize(source).await.unwrap();

    assert!(path.is_absolute() || path.starts_with(temp_dir.path()));
    let written = tokio::fs::read(&path).await.unwrap();
    assert_eq!(written, source);
}

#[tokio::test]
async fn materialize_twice_yields_distinct_paths() {
    let temp_dir = TempDir::new().unwrap();
    let store = build_store(&temp_dir);

    let first = store.materialize(b"same bytes").await.unwrap();
    let second = store.materialize(b"same bytes").await.unwrap();

    assert_ne!(first, second, "Two materializations must never overwrite");
    assert!(first.exists());
    assert!(second.exists());
}

#[tokio::test]
async fn materialized_files_use_the_image_prefix() {
    let temp_dir = TempDir::new().unwrap();
    let store = build_store(&temp_dir);

    let path = store.materialize(b"x").await.unwrap();
    let file_name = path.file_name().unwrap().to_str().unwrap();

    assert!(file_name.starts_with("image_"));
    assert!(file_name.ends_with(".jpg"));
}

#[tokio::test]
async fn materialize_leaves_no_staging_file_behind() {
    let temp_dir = TempDir::new().unwrap();
    let store = build_store(&temp_dir);

    store.materialize(b"payload").await.unwrap();

    let mut entries = tokio::fs::read_dir(temp_dir.path().join("photos"))
        .await
        .unwrap();
    while let Some(entry) = entries.next_entry().await.unwrap() {
        let name = entry.file_name();
        assert!(
            !name.to_string_lossy().ends_with(".part"),
            "staging file left behind: {:?}",
            name
        );
    }
}

#[tokio::test]
async fn materialize_bitmap_encodes_a_decodable_jpeg() {
    let temp_dir = TempDir::new().unwrap();
    let store = build_store(&temp_dir);

    // 2x2 opaque red capture
    let pixels = vec![
        255, 0, 0, 255, 255, 0, 0, 255, //
        255, 0, 0, 255, 255, 0, 0, 255,
    ];
    let bitmap = CapturedBitmap::from_rgba(2, 2, pixels).unwrap();

    let path = store.materialize_bitmap(&bitmap).await.unwrap();

    let decoded = image::open(&path).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (2, 2));
}

#[tokio::test]
async fn remove_is_silent_for_missing_files() {
    let temp_dir = TempDir::new().unwrap();
    let store = build_store(&temp_dir);

    let path = store.materialize(b"to delete").await.unwrap();

    store.remove(&path).await.unwrap();
    assert!(!path.exists());

    // Second removal of the same path must not fault.
    store.remove(&path).await.unwrap();
}
