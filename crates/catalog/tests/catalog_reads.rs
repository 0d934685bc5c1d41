use std::path::PathBuf;
use std::time::Duration;

use tempfile::TempDir;

use shopfront_catalog::{CacheOptions, CatalogError, CatalogReader, JsonFileStore};
use shopfront_core::domain::product::ProductId;

const CATALOG: &str = r#"{
  "products": [
    {"id": "alpha", "name": "Alpha", "price": "10.00", "isBestSeller": true},
    {"id": "bravo", "name": "Bravo", "price": "20.00", "isFeatured": true},
    {"id": "charlie", "name": "Charlie", "price": "30.00", "isFeatured": true, "isBestSeller": true},
    {"id": "delta", "name": "Delta", "price": "40.00"}
  ]
}"#;

const NO_FLAGS_CATALOG: &str = r#"{
  "products": [
    {"id": "alpha", "name": "Alpha", "price": "10.00"},
    {"id": "bravo", "name": "Bravo", "price": "20.00"}
  ]
}"#;

async fn write_catalog(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("db.json");
    tokio::fs::write(&path, body).await.expect("write catalog document");
    path
}

fn reader_with_ttl(path: PathBuf, ttl: Duration) -> CatalogReader<JsonFileStore> {
    CatalogReader::new(
        JsonFileStore::new(path),
        CacheOptions { ttl, tags: vec!["products".to_string()] },
    )
}

fn reader(path: PathBuf) -> CatalogReader<JsonFileStore> {
    reader_with_ttl(path, Duration::from_secs(300))
}

#[tokio::test]
async fn fetch_by_id_returns_a_match_for_every_stored_id() {
    let dir = TempDir::new().expect("tempdir");
    let reader = reader(write_catalog(&dir, CATALOG).await);

    for id in ["alpha", "bravo", "charlie", "delta"] {
        let product = reader
            .fetch_by_id(&ProductId(id.to_string()))
            .await
            .unwrap_or_else(|error| panic!("lookup of `{id}` failed: {error}"));
        assert_eq!(product.id.as_str(), id);
    }
}

#[tokio::test]
async fn fetch_by_id_absent_id_fails_not_found() {
    let dir = TempDir::new().expect("tempdir");
    let reader = reader(write_catalog(&dir, CATALOG).await);

    let error = reader
        .fetch_by_id(&ProductId("does-not-exist".to_string()))
        .await
        .expect_err("absent id must fail");

    assert!(matches!(error, CatalogError::NotFound(ref id) if id.as_str() == "does-not-exist"));
}

#[tokio::test]
async fn fetch_featured_returns_first_flagged_record_in_storage_order() {
    let dir = TempDir::new().expect("tempdir");
    let reader = reader(write_catalog(&dir, CATALOG).await);

    // Both `bravo` and `charlie` are flagged; position decides.
    let featured = reader.fetch_featured().await.expect("featured product");
    assert_eq!(featured.id.as_str(), "bravo");
}

#[tokio::test]
async fn fetch_featured_without_flagged_records_fails() {
    let dir = TempDir::new().expect("tempdir");
    let reader = reader(write_catalog(&dir, NO_FLAGS_CATALOG).await);

    let error = reader.fetch_featured().await.expect_err("no featured record");
    assert!(matches!(error, CatalogError::NoFeaturedItem));
}

#[tokio::test]
async fn fetch_best_sellers_returns_exactly_the_flagged_records_in_order() {
    let dir = TempDir::new().expect("tempdir");
    let reader = reader(write_catalog(&dir, CATALOG).await);

    let best_sellers = reader.fetch_best_sellers().await.expect("best sellers");

    assert!(best_sellers.iter().all(|product| product.is_best_seller));
    let ids: Vec<&str> = best_sellers.iter().map(|product| product.id.as_str()).collect();
    assert_eq!(ids, ["alpha", "charlie"]);
}

#[tokio::test]
async fn fetch_best_sellers_without_flagged_records_fails() {
    let dir = TempDir::new().expect("tempdir");
    let reader = reader(write_catalog(&dir, NO_FLAGS_CATALOG).await);

    let error = reader.fetch_best_sellers().await.expect_err("no best sellers");
    assert!(matches!(error, CatalogError::NoBestSellers));
}

#[tokio::test]
async fn second_fetch_within_the_window_skips_the_backing_read() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_catalog(&dir, CATALOG).await;
    let reader = reader(path.clone());

    let first = reader.fetch_all().await.expect("first fetch");

    // Rewriting the document inside the window must stay invisible.
    tokio::fs::write(&path, NO_FLAGS_CATALOG).await.expect("rewrite catalog document");
    let second = reader.fetch_all().await.expect("second fetch");

    assert_eq!(first, second);
    assert_eq!(second.len(), 4);
}

#[tokio::test]
async fn invalidation_signal_forces_a_read_before_expiry() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_catalog(&dir, CATALOG).await;
    let reader = reader(path.clone());

    reader.fetch_all().await.expect("warm the cache");
    tokio::fs::write(&path, NO_FLAGS_CATALOG).await.expect("rewrite catalog document");

    assert!(reader.invalidate("products").await);
    let refreshed = reader.fetch_all().await.expect("fetch after invalidation");
    assert_eq!(refreshed.len(), 2);
}

#[tokio::test]
async fn unregistered_tag_does_not_evict() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_catalog(&dir, CATALOG).await;
    let reader = reader(path.clone());

    reader.fetch_all().await.expect("warm the cache");
    tokio::fs::write(&path, NO_FLAGS_CATALOG).await.expect("rewrite catalog document");

    assert!(!reader.invalidate("customers").await);
    let cached = reader.fetch_all().await.expect("fetch after unrelated tag");
    assert_eq!(cached.len(), 4);
}

#[tokio::test]
async fn expired_window_triggers_a_fresh_read() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_catalog(&dir, CATALOG).await;
    let reader = reader_with_ttl(path.clone(), Duration::ZERO);

    reader.fetch_all().await.expect("first fetch");
    tokio::fs::write(&path, NO_FLAGS_CATALOG).await.expect("rewrite catalog document");

    let refreshed = reader.fetch_all().await.expect("fetch after expiry");
    assert_eq!(refreshed.len(), 2);
}

#[tokio::test]
async fn malformed_document_fails_every_operation() {
    let dir = TempDir::new().expect("tempdir");
    let reader = reader(write_catalog(&dir, "{ definitely not json").await);

    let all = reader.fetch_all().await.expect_err("fetch_all must fail");
    assert!(matches!(all, CatalogError::StorageUnavailable(_)));

    let by_id = reader
        .fetch_by_id(&ProductId("alpha".to_string()))
        .await
        .expect_err("fetch_by_id must fail");
    assert!(matches!(by_id, CatalogError::StorageUnavailable(_)));

    let featured = reader.fetch_featured().await.expect_err("fetch_featured must fail");
    assert!(matches!(featured, CatalogError::StorageUnavailable(_)));

    let best = reader.fetch_best_sellers().await.expect_err("fetch_best_sellers must fail");
    assert!(matches!(best, CatalogError::StorageUnavailable(_)));
}

#[tokio::test]
async fn missing_document_fails_with_storage_unavailable() {
    let dir = TempDir::new().expect("tempdir");
    let reader = reader(dir.path().join("absent.json"));

    let error = reader.fetch_all().await.expect_err("missing document must fail");
    assert!(matches!(error, CatalogError::StorageUnavailable(_)));
    assert_eq!(error.error_class(), "storage_unavailable");
}
