use crate::config::CatalogConfig;
use crate::handlers;
use crate::health::HealthAggregator;
use crate::services::{CatalogService, MongoCatalogService, MongoDb};
use axum::{
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogService>,
    pub health: HealthAggregator,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/products", get(handlers::get_products))
        .route("/product/:item_id", get(handlers::get_product))
        .route("/product", post(handlers::add_product))
        .route("/health/readiness", get(handlers::readiness_check))
        .route("/health/liveness", get(handlers::liveness_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    /// Wires the gateway to a store-backed catalog and binds the listener.
    pub async fn build(config: &CatalogConfig) -> Result<Self, AppError> {
        let db = MongoDb::connect(&config.mongodb.uri, &config.mongodb.database)
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to MongoDB: {}", e);
                e
            })?;

        let catalog: Arc<dyn CatalogService> =
            Arc::new(MongoCatalogService::new(Arc::new(db)));
        let state = AppState {
            catalog,
            health: HealthAggregator::new(config.health.budget()),
        };

        Self::bind(config.common.port, state).await
    }

    /// Binds the gateway to an already-constructed catalog handle. Port 0
    /// picks a free port; tests use this with stub catalogs.
    pub async fn bind(port: u16, state: AppState) -> Result<Self, AppError> {
        let app = router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
