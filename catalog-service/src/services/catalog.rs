use crate::models::Product;
use crate::services::DocumentStore;
use async_trait::async_trait;
use service_core::error::AppError;
use std::sync::Arc;

pub const PRODUCTS_COLLECTION: &str = "products";

/// The asynchronous catalog contract the gateway dispatches through.
///
/// Callers hold an `Arc<dyn CatalogService>` and do not know where the
/// implementation runs; each call resolves exactly once, with a value or
/// with the untransformed failure cause.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// All products, in whatever order the store yields them.
    async fn list_products(&self) -> Result<Vec<Product>, AppError>;

    /// The product whose store key equals `item_id`. Absence is a valid
    /// outcome (`Ok(None)`), not a failure.
    async fn get_product(&self, item_id: &str) -> Result<Option<Product>, AppError>;

    /// Stores the product under its `item_id`, replacing any existing entry,
    /// and returns the assigned identifier. Field values are not validated.
    async fn add_product(&self, product: Product) -> Result<String, AppError>;

    /// Liveness acknowledgment. Completes immediately and does not consult
    /// the document store.
    async fn ping(&self) -> Result<&'static str, AppError>;
}

/// Store-backed implementation of the catalog contract.
pub struct MongoCatalogService {
    store: Arc<dyn DocumentStore>,
}

impl MongoCatalogService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CatalogService for MongoCatalogService {
    async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        let documents = self.store.find_all(PRODUCTS_COLLECTION).await?;
        Ok(documents.iter().map(Product::from_document).collect())
    }

    async fn get_product(&self, item_id: &str) -> Result<Option<Product>, AppError> {
        let document = self.store.find_by_id(PRODUCTS_COLLECTION, item_id).await?;
        Ok(document.as_ref().map(Product::from_document))
    }

    async fn add_product(&self, product: Product) -> Result<String, AppError> {
        let mut document = product.to_document();
        document.insert("_id", product.item_id);
        self.store.upsert(PRODUCTS_COLLECTION, document).await
    }

    async fn ping(&self) -> Result<&'static str, AppError> {
        Ok("OK")
    }
}
