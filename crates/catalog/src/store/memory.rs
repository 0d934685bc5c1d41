use async_trait::async_trait;
use tokio::sync::RwLock;

use shopfront_core::domain::product::Product;

use super::{ProductStore, StoreError};

/// In-memory store for tests and embedding. `replace` swaps the whole
/// collection, the way editing the backing document would.
#[derive(Default)]
pub struct InMemoryStore {
    products: RwLock<Vec<Product>>,
}

impl InMemoryStore {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products: RwLock::new(products) }
    }

    pub async fn replace(&self, products: Vec<Product>) {
        *self.products.write().await = products;
    }
}

#[async_trait]
impl ProductStore for InMemoryStore {
    async fn load_all(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.products.read().await.clone())
    }
}
