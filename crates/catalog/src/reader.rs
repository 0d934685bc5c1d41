use thiserror::Error;
use tokio::sync::RwLock;

use shopfront_core::domain::product::{Product, ProductId};

use crate::cache::{CacheOptions, CatalogCache};
use crate::store::{ProductStore, StoreError};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product catalog storage is unavailable: {0}")]
    StorageUnavailable(#[from] StoreError),
    #[error("no product found for id `{0}`")]
    NotFound(ProductId),
    #[error("catalog contains no featured product")]
    NoFeaturedItem,
    #[error("catalog contains no best sellers")]
    NoBestSellers,
}

impl CatalogError {
    /// Stable machine-readable label for boundary reporting.
    pub fn error_class(&self) -> &'static str {
        match self {
            Self::StorageUnavailable(_) => "storage_unavailable",
            Self::NotFound(_) => "not_found",
            Self::NoFeaturedItem => "no_featured_item",
            Self::NoBestSellers => "no_best_sellers",
        }
    }

    /// User-safe message for the presentation boundary; never exposes
    /// paths or parser detail.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::StorageUnavailable(_) => {
                "The catalog is temporarily unavailable. Please retry shortly."
            }
            Self::NotFound(_) => "That product could not be found.",
            Self::NoFeaturedItem => "There is no featured product right now.",
            Self::NoBestSellers => "There are no best sellers right now.",
        }
    }
}

/// The four storefront read views over one cached full-collection fetch.
///
/// Every operation is a stateless read modulo cache timing: a cache hit
/// returns the memoized collection, a miss performs one backing read and
/// memoizes it for the window.
pub struct CatalogReader<S> {
    store: S,
    cache: RwLock<CatalogCache>,
}

impl<S: ProductStore> CatalogReader<S> {
    pub fn new(store: S, options: CacheOptions) -> Self {
        Self { store, cache: RwLock::new(CatalogCache::new(options)) }
    }

    /// Full collection in storage order.
    ///
    /// The cache lock is not held across the backing read, so concurrent
    /// cold callers may each read storage independently; whichever write
    /// lands last wins and all of them observe equal collections.
    pub async fn fetch_all(&self) -> Result<Vec<Product>, CatalogError> {
        if let Some(products) = self.cache.read().await.get() {
            return Ok(products.to_vec());
        }

        let products = self.store.load_all().await?;
        self.cache.write().await.store(products.clone());
        Ok(products)
    }

    /// First record whose identifier equals `id`. Identifiers are unique
    /// within a fetch; first match wins if the document violates that.
    pub async fn fetch_by_id(&self, id: &ProductId) -> Result<Product, CatalogError> {
        let products = self.fetch_all().await?;
        products
            .into_iter()
            .find(|product| &product.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }

    /// First featured record. Selection by storage position is declared
    /// behavior, not an accident of iteration order.
    pub async fn fetch_featured(&self) -> Result<Product, CatalogError> {
        let products = self.fetch_all().await?;
        products
            .into_iter()
            .find(|product| product.is_featured)
            .ok_or(CatalogError::NoFeaturedItem)
    }

    /// Every best-seller record, storage order preserved.
    pub async fn fetch_best_sellers(&self) -> Result<Vec<Product>, CatalogError> {
        let products = self.fetch_all().await?;
        let best_sellers: Vec<Product> =
            products.into_iter().filter(|product| product.is_best_seller).collect();

        if best_sellers.is_empty() {
            return Err(CatalogError::NoBestSellers);
        }
        Ok(best_sellers)
    }

    /// External invalidation channel: drops the cached collection when
    /// `tag` is registered, forcing the next call to re-read storage
    /// before natural expiry. Returns whether the tag matched.
    pub async fn invalidate(&self, tag: &str) -> bool {
        self.cache.write().await.invalidate(tag)
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;
    use std::time::Duration;

    use async_trait::async_trait;
    use rust_decimal::Decimal;

    use shopfront_core::domain::product::{Product, ProductId};

    use crate::cache::CacheOptions;
    use crate::store::{InMemoryStore, ProductStore, StoreError};

    use super::{CatalogError, CatalogReader};

    struct FailingStore;

    #[async_trait]
    impl ProductStore for FailingStore {
        async fn load_all(&self) -> Result<Vec<Product>, StoreError> {
            Err(StoreError::Read {
                path: PathBuf::from("db.json"),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
            })
        }
    }

    fn product(id: &str, featured: bool, best_seller: bool) -> Product {
        Product {
            id: ProductId(id.to_string()),
            name: id.to_string(),
            description: String::new(),
            price: Decimal::new(1999, 2),
            image: None,
            category: None,
            is_featured: featured,
            is_best_seller: best_seller,
        }
    }

    fn options(ttl_secs: u64) -> CacheOptions {
        CacheOptions { ttl: Duration::from_secs(ttl_secs), tags: vec!["products".to_string()] }
    }

    #[tokio::test]
    async fn cache_hit_skips_the_backing_store() {
        let store = InMemoryStore::new(vec![product("a", false, false)]);
        let reader = CatalogReader::new(store, options(300));

        let first = reader.fetch_all().await.expect("first fetch");

        // A store mutation inside the window must stay invisible.
        reader.store.replace(vec![product("b", false, false)]).await;
        let second = reader.fetch_all().await.expect("second fetch");

        assert_eq!(first, second);
        assert_eq!(second[0].id.as_str(), "a");
    }

    #[tokio::test]
    async fn invalidation_forces_a_fresh_read() {
        let store = InMemoryStore::new(vec![product("a", false, false)]);
        let reader = CatalogReader::new(store, options(300));

        reader.fetch_all().await.expect("warm the cache");
        reader.store.replace(vec![product("b", false, false)]).await;

        assert!(reader.invalidate("products").await);
        let refreshed = reader.fetch_all().await.expect("fetch after invalidation");
        assert_eq!(refreshed[0].id.as_str(), "b");
    }

    #[tokio::test]
    async fn unknown_tag_keeps_the_cached_collection() {
        let store = InMemoryStore::new(vec![product("a", false, false)]);
        let reader = CatalogReader::new(store, options(300));

        reader.fetch_all().await.expect("warm the cache");
        reader.store.replace(vec![product("b", false, false)]).await;

        assert!(!reader.invalidate("customers").await);
        let cached = reader.fetch_all().await.expect("fetch after unrelated tag");
        assert_eq!(cached[0].id.as_str(), "a");
    }

    #[tokio::test]
    async fn first_featured_by_position_wins() {
        let store = InMemoryStore::new(vec![
            product("plain", false, false),
            product("feat-1", true, false),
            product("feat-2", true, false),
        ]);
        let reader = CatalogReader::new(store, options(300));

        let featured = reader.fetch_featured().await.expect("featured product");
        assert_eq!(featured.id.as_str(), "feat-1");
    }

    #[tokio::test]
    async fn store_failure_surfaces_as_storage_unavailable_everywhere() {
        let reader = CatalogReader::new(FailingStore, options(300));

        let all = reader.fetch_all().await.expect_err("fetch_all must fail");
        assert!(matches!(all, CatalogError::StorageUnavailable(_)));

        let by_id =
            reader.fetch_by_id(&ProductId("a".to_string())).await.expect_err("by id must fail");
        assert!(matches!(by_id, CatalogError::StorageUnavailable(_)));
        assert_eq!(by_id.error_class(), "storage_unavailable");
    }

    #[test]
    fn boundary_labels_are_stable() {
        assert_eq!(CatalogError::NotFound(ProductId("x".to_string())).error_class(), "not_found");
        assert_eq!(CatalogError::NoFeaturedItem.error_class(), "no_featured_item");
        assert_eq!(CatalogError::NoBestSellers.error_class(), "no_best_sellers");
        assert_eq!(
            CatalogError::NoFeaturedItem.user_message(),
            "There is no featured product right now."
        );
    }
}
