#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, to_document, Bson, Document};
use tokio::sync::Mutex;

use tour_booking_system::db::{DocumentStore, SharedStore};
use tour_booking_system::models::trip::Trip;
use tour_booking_system::utils::error::{AppError, AppResult};

/// In-memory stand-in for the MongoDB adapter. Collections are plain vectors
/// kept in insertion order; filters match on field equality the way the real
/// store does (a filter key absent from a document is a non-match).
pub struct MemoryStore {
    name: String,
    collections: Mutex<BTreeMap<String, Vec<Document>>>,
    fail_with: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            name: "gulf_tours_test".to_string(),
            collections: Mutex::new(BTreeMap::new()),
            fail_with: None,
        }
    }

    /// A store whose every call fails with the given connectivity message.
    pub fn failing(message: &str) -> Self {
        MemoryStore {
            name: "gulf_tours_test".to_string(),
            collections: Mutex::new(BTreeMap::new()),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(self)
    }

    fn check_failure(&self) -> AppResult<()> {
        match &self.fail_with {
            Some(message) => Err(AppError::DatabaseError(message.clone())),
            None => Ok(()),
        }
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn count(&self, collection: &str, filter: Document) -> AppResult<u64> {
        self.check_failure()?;
        let collections = self.collections.lock().await;
        let documents = collections.get(collection).map_or(&[][..], |v| v.as_slice());

        Ok(documents.iter().filter(|d| matches(d, &filter)).count() as u64)
    }

    async fn find_one(&self, collection: &str, filter: Document) -> AppResult<Option<Document>> {
        self.check_failure()?;
        let collections = self.collections.lock().await;
        let documents = collections.get(collection).map_or(&[][..], |v| v.as_slice());

        Ok(documents.iter().find(|d| matches(d, &filter)).cloned())
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> AppResult<Vec<Document>> {
        self.check_failure()?;
        let collections = self.collections.lock().await;
        let documents = collections.get(collection).map_or(&[][..], |v| v.as_slice());

        let mut found: Vec<Document> = documents
            .iter()
            .filter(|d| matches(d, &filter))
            .cloned()
            .collect();
        if let Some(limit) = limit {
            found.truncate(limit as usize);
        }

        Ok(found)
    }

    async fn insert_one(&self, collection: &str, mut document: Document) -> AppResult<ObjectId> {
        self.check_failure()?;
        let id = ObjectId::new();
        document.insert("_id", Bson::ObjectId(id));

        let mut collections = self.collections.lock().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(id)
    }

    async fn insert_many(&self, collection: &str, documents: Vec<Document>) -> AppResult<()> {
        self.check_failure()?;
        let mut collections = self.collections.lock().await;
        let stored = collections.entry(collection.to_string()).or_default();
        for mut document in documents {
            document.insert("_id", Bson::ObjectId(ObjectId::new()));
            stored.push(document);
        }

        Ok(())
    }

    async fn collection_names(&self) -> AppResult<Vec<String>> {
        self.check_failure()?;
        let collections = self.collections.lock().await;

        Ok(collections.keys().cloned().collect())
    }

    fn database_name(&self) -> String {
        self.name.clone()
    }
}

// Document builders for seeding test state directly into the store

pub fn trip_doc(trip_type: &str, capacity: i32, is_active: bool) -> Document {
    let trip = Trip {
        title: format!("{} trip", trip_type),
        trip_type: trip_type.to_string(),
        description: "A test trip".to_string(),
        location: "Muscat, Oman".to_string(),
        price_per_person: 25.0,
        capacity,
        duration_hours: 3.0,
        is_active,
        ..Trip::default()
    };

    to_document(&trip).expect("trip serializes to a document")
}

pub fn faq_doc(question: &str, order: i32) -> Document {
    doc! {
        "question": question,
        "answer": format!("Answer to: {}", question),
        "category": "general",
        "order": order,
    }
}

pub fn review_doc(name: &str, rating: i32) -> Document {
    doc! {
        "name": name,
        "rating": rating,
        "comment": format!("Review from {}", name),
    }
}
