use std::sync::Arc;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;
use mongodb::options::{ClientOptions, FindOptions};
use mongodb::{Client, Collection, Database};

use crate::utils::error::{AppError, AppResult};

/// Collection-oriented access to the document store.
///
/// Services only ever see this trait, so tests can swap the production
/// MongoDB client for an in-memory double.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn count(&self, collection: &str, filter: Document) -> AppResult<u64>;

    async fn find_one(&self, collection: &str, filter: Document) -> AppResult<Option<Document>>;

    async fn find_many(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> AppResult<Vec<Document>>;

    async fn insert_one(&self, collection: &str, document: Document) -> AppResult<ObjectId>;

    async fn insert_many(&self, collection: &str, documents: Vec<Document>) -> AppResult<()>;

    async fn collection_names(&self) -> AppResult<Vec<String>>;

    fn database_name(&self) -> String;
}

pub type SharedStore = Arc<dyn DocumentStore>;

// Production store backed by MongoDB
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    // Connect once at startup; the handle is shared by all requests
    pub async fn connect(
        database_url: &str,
        database_name: &str,
    ) -> Result<Self, mongodb::error::Error> {
        let mut options = ClientOptions::parse(database_url).await?;
        options.app_name = Some("tour_booking_system".to_string());
        let client = Client::with_options(options)?;

        Ok(MongoStore {
            database: client.database(database_name),
        })
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection::<Document>(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn count(&self, collection: &str, filter: Document) -> AppResult<u64> {
        Ok(self
            .collection(collection)
            .count_documents(filter, None)
            .await?)
    }

    async fn find_one(&self, collection: &str, filter: Document) -> AppResult<Option<Document>> {
        Ok(self.collection(collection).find_one(filter, None).await?)
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> AppResult<Vec<Document>> {
        let options = FindOptions::builder().limit(limit).build();
        let cursor = self.collection(collection).find(filter, options).await?;

        Ok(cursor.try_collect().await?)
    }

    async fn insert_one(&self, collection: &str, document: Document) -> AppResult<ObjectId> {
        let result = self
            .collection(collection)
            .insert_one(document, None)
            .await?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("store returned a non-ObjectId identifier".to_string())
        })
    }

    async fn insert_many(&self, collection: &str, documents: Vec<Document>) -> AppResult<()> {
        self.collection(collection)
            .insert_many(documents, None)
            .await?;

        Ok(())
    }

    async fn collection_names(&self) -> AppResult<Vec<String>> {
        Ok(self.database.list_collection_names(None).await?)
    }

    fn database_name(&self) -> String {
        self.database.name().to_string()
    }
}
