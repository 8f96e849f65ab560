#![allow(dead_code)]

use async_trait::async_trait;
use catalog_service::health::HealthAggregator;
use catalog_service::models::Product;
use catalog_service::services::CatalogService;
use catalog_service::startup::{AppState, Application};
use service_core::error::AppError;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone, Copy)]
pub enum PingBehavior {
    Succeed,
    Fail,
    Hang,
}

/// In-memory stand-in for the catalog facade, with recorded `add_product`
/// calls so tests can assert what reached the service boundary.
pub struct StubCatalog {
    products: Vec<Product>,
    fail_store: bool,
    ping: PingBehavior,
    added: Mutex<Vec<Product>>,
}

impl StubCatalog {
    pub fn empty() -> Self {
        Self::with_products(Vec::new())
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            fail_store: false,
            ping: PingBehavior::Succeed,
            added: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_store: true,
            ..Self::empty()
        }
    }

    pub fn with_ping(ping: PingBehavior) -> Self {
        Self {
            ping,
            ..Self::empty()
        }
    }

    pub fn added(&self) -> Vec<Product> {
        self.added.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogService for StubCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        if self.fail_store {
            return Err(AppError::DatabaseError(anyhow::anyhow!("store down")));
        }
        Ok(self.products.clone())
    }

    async fn get_product(&self, item_id: &str) -> Result<Option<Product>, AppError> {
        if self.fail_store {
            return Err(AppError::DatabaseError(anyhow::anyhow!("store down")));
        }
        Ok(self.products.iter().find(|p| p.item_id == item_id).cloned())
    }

    async fn add_product(&self, product: Product) -> Result<String, AppError> {
        if self.fail_store {
            return Err(AppError::DatabaseError(anyhow::anyhow!("store down")));
        }
        let item_id = product.item_id.clone();
        self.added.lock().unwrap().push(product);
        Ok(item_id)
    }

    async fn ping(&self) -> Result<&'static str, AppError> {
        match self.ping {
            PingBehavior::Succeed => Ok("OK"),
            PingBehavior::Fail => Err(AppError::InternalError(anyhow::anyhow!("ping failed"))),
            PingBehavior::Hang => {
                futures::future::pending::<()>().await;
                unreachable!()
            }
        }
    }
}

pub struct TestApp {
    pub address: String,
    pub catalog: Arc<StubCatalog>,
}

impl TestApp {
    pub async fn spawn(catalog: StubCatalog) -> Self {
        Self::spawn_with_budget(catalog, Duration::from_millis(1000)).await
    }

    pub async fn spawn_with_budget(catalog: StubCatalog, budget: Duration) -> Self {
        let catalog = Arc::new(catalog);
        let state = AppState {
            catalog: catalog.clone() as Arc<dyn CatalogService>,
            health: HealthAggregator::new(budget),
        };

        let app = Application::bind(0, state)
            .await
            .expect("Failed to bind test application");
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp { address, catalog }
    }
}

pub fn product(item_id: &str, name: &str, price: f64) -> Product {
    Product {
        item_id: item_id.to_string(),
        name: name.to_string(),
        desc: "productDescription".to_string(),
        price,
    }
}
