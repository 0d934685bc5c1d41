use std::path::Path;

use serde::Deserialize;

use shopfront_core::domain::product::Product;

/// Contract for the deterministic demo catalog: every id with its
/// selection flags, in document order.
const DEMO_CONTRACT: &[ProductContract] = &[
    ProductContract { id: "mug-classic", featured: false, best_seller: true },
    ProductContract { id: "tee-logo", featured: false, best_seller: false },
    ProductContract { id: "lamp-brass", featured: true, best_seller: false },
    ProductContract { id: "tote-canvas", featured: false, best_seller: true },
    ProductContract { id: "notebook-dot", featured: false, best_seller: false },
    ProductContract { id: "chair-oak", featured: true, best_seller: false },
    ProductContract { id: "candle-cedar", featured: false, best_seller: true },
    ProductContract { id: "poster-harbor", featured: false, best_seller: false },
];

/// First featured id by document position; `fetch_featured` must return
/// this record even though `chair-oak` is flagged too.
pub const DEMO_FEATURED_ID: &str = "lamp-brass";

pub const DEMO_BEST_SELLER_IDS: &[&str] = &["mug-classic", "tote-canvas", "candle-cedar"];

#[derive(Clone, Copy, Debug)]
struct ProductContract {
    id: &'static str,
    featured: bool,
    best_seller: bool,
}

#[derive(Debug, Deserialize)]
struct DemoDocument {
    products: Vec<Product>,
}

/// Deterministic demo storefront catalog for demos, seeding, and
/// end-to-end tests.
pub struct DemoCatalog;

impl DemoCatalog {
    /// Backing-document content of the demo catalog.
    pub const JSON: &str = include_str!("../../../config/fixtures/demo_catalog.json");

    pub fn product_count() -> usize {
        DEMO_CONTRACT.len()
    }

    /// The demo collection, parsed in document order.
    pub fn products() -> Result<Vec<Product>, serde_json::Error> {
        let document: DemoDocument = serde_json::from_str(Self::JSON)?;
        Ok(document.products)
    }

    /// Write the demo document to `path`. Deterministic and idempotent:
    /// every run produces byte-identical content.
    pub async fn write_to(path: &Path) -> Result<(), std::io::Error> {
        tokio::fs::write(path, Self::JSON).await
    }

    /// Verify a fetched collection against the demo contract.
    pub fn verify(products: &[Product]) -> VerificationResult {
        let mut checks = Vec::new();
        checks.push(("product-count", products.len() == DEMO_CONTRACT.len()));

        for (position, contract) in DEMO_CONTRACT.iter().enumerate() {
            let matches = products.get(position).is_some_and(|product| {
                product.id.as_str() == contract.id
                    && product.is_featured == contract.featured
                    && product.is_best_seller == contract.best_seller
            });
            checks.push((contract.id, matches));
        }

        let first_featured =
            products.iter().find(|product| product.is_featured).map(|product| product.id.as_str());
        checks.push(("first-featured", first_featured == Some(DEMO_FEATURED_ID)));

        let best_sellers: Vec<&str> = products
            .iter()
            .filter(|product| product.is_best_seller)
            .map(|product| product.id.as_str())
            .collect();
        checks.push(("best-sellers", best_sellers == DEMO_BEST_SELLER_IDS));

        let all_present = checks.iter().all(|(_, ok)| *ok);
        VerificationResult { all_present, checks }
    }
}

#[derive(Debug)]
pub struct VerificationResult {
    pub all_present: bool,
    pub checks: Vec<(&'static str, bool)>,
}
