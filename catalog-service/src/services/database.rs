use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::ReplaceOptions,
    Client as MongoClient, Database,
};
use service_core::error::AppError;

/// The narrow document-store capability the catalog facade depends on.
/// Documents are keyed by `_id`; failure characteristics of the backing
/// store pass through unmodified.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, AppError>;

    async fn find_by_id(&self, collection: &str, id: &str) -> Result<Option<Document>, AppError>;

    /// Inserts the document, or replaces an existing one with the same
    /// `_id`. Returns the document's `_id`.
    async fn upsert(&self, collection: &str, document: Document) -> Result<String, AppError>;
}

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    /// Admin-level connectivity probe. Not consulted by the liveness check,
    /// which only pings the facade.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl DocumentStore for MongoDb {
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, AppError> {
        let mut cursor = self
            .db
            .collection::<Document>(collection)
            .find(doc! {}, None)
            .await?;

        let mut documents = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            documents.push(document);
        }
        Ok(documents)
    }

    async fn find_by_id(&self, collection: &str, id: &str) -> Result<Option<Document>, AppError> {
        let document = self
            .db
            .collection::<Document>(collection)
            .find_one(doc! { "_id": id }, None)
            .await?;
        Ok(document)
    }

    async fn upsert(&self, collection: &str, document: Document) -> Result<String, AppError> {
        let id = document.get_str("_id").unwrap_or_default().to_string();
        let options = ReplaceOptions::builder().upsert(true).build();
        self.db
            .collection::<Document>(collection)
            .replace_one(doc! { "_id": &id }, document, options)
            .await?;
        Ok(id)
    }
}
