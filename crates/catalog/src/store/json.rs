use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tracing::error;

use shopfront_core::domain::product::Product;

use super::{ProductStore, StoreError};

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    products: Vec<Product>,
}

/// Reads the catalog from a flat JSON document shaped
/// `{ "products": [ ... ] }`. The document is the system of record; this
/// store never writes it.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProductStore for JsonFileStore {
    // Single log point of the read path; layers above propagate the typed
    // error without logging again.
    async fn load_all(&self) -> Result<Vec<Product>, StoreError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|source| {
            error!(path = %self.path.display(), error = %source, "catalog document read failed");
            StoreError::Read { path: self.path.clone(), source }
        })?;

        let document: CatalogDocument = serde_json::from_str(&raw).map_err(|source| {
            error!(path = %self.path.display(), error = %source, "catalog document parse failed");
            StoreError::Parse { path: self.path.clone(), source }
        })?;

        Ok(document.products)
    }
}
