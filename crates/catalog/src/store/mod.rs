use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use shopfront_core::domain::product::Product;

pub mod json;
pub mod memory;

pub use json::JsonFileStore;
pub use memory::InMemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not read catalog document `{path}`: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("could not parse catalog document `{path}`: {source}")]
    Parse { path: PathBuf, source: serde_json::Error },
}

/// Read-only seam over the backing store. One operation: a full-collection
/// read, order preserved from storage.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn load_all(&self) -> Result<Vec<Product>, StoreError>;
}
