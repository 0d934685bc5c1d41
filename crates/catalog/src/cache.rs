use std::collections::HashSet;
use std::time::{Duration, Instant};

use shopfront_core::domain::product::Product;

#[derive(Clone, Debug)]
pub struct CacheOptions {
    pub ttl: Duration,
    /// Tags the cached collection is registered under; an external signal
    /// naming one of them evicts the entry before natural expiry.
    pub tags: Vec<String>,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self { ttl: Duration::from_secs(300), tags: vec!["products".to_string()] }
    }
}

/// Time-bounded memo of the full collection: a stored value with its
/// fetch timestamp, a TTL, and an invalidation-tag set. Expiry is
/// monotonic (`Instant`), so wall-clock adjustments cannot revive or kill
/// an entry.
#[derive(Debug)]
pub struct CatalogCache {
    ttl: Duration,
    tags: HashSet<String>,
    entry: Option<CacheEntry>,
}

#[derive(Debug)]
struct CacheEntry {
    products: Vec<Product>,
    fetched_at: Instant,
}

impl CatalogCache {
    pub fn new(options: CacheOptions) -> Self {
        Self { ttl: options.ttl, tags: options.tags.into_iter().collect(), entry: None }
    }

    /// The cached collection while the entry is younger than the TTL;
    /// an expired entry reads as absent.
    pub fn get(&self) -> Option<&[Product]> {
        let entry = self.entry.as_ref()?;
        (entry.fetched_at.elapsed() < self.ttl).then_some(entry.products.as_slice())
    }

    pub fn store(&mut self, products: Vec<Product>) {
        self.entry = Some(CacheEntry { products, fetched_at: Instant::now() });
    }

    /// Drops the entry iff `tag` is registered on this cache; returns
    /// whether the tag matched. Unknown tags leave the entry alone.
    pub fn invalidate(&mut self, tag: &str) -> bool {
        let matched = self.tags.contains(tag);
        if matched {
            self.entry = None;
        }
        matched
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }
}
