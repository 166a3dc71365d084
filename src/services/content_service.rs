use mongodb::bson::{doc, from_document};

use crate::db::SharedStore;
use crate::models::faq::{Faq, FaqResponse};
use crate::models::review::{Review, ReviewResponse};
use crate::models::trip::{Trip, TripResponse};
use crate::utils::error::AppResult;

const FAQ_LIMIT: i64 = 100;
const REVIEW_LIMIT: i64 = 50;

// Read side of the public content: trips, FAQs, reviews
pub struct ContentService {
    store: SharedStore,
}

impl ContentService {
    pub fn new(store: SharedStore) -> Self {
        ContentService { store }
    }

    // List every trip, active or not; identifiers rendered as strings
    pub async fn list_trips(&self) -> AppResult<Vec<TripResponse>> {
        let documents = self.store.find_many(Trip::COLLECTION, doc! {}, None).await?;

        let mut trips = Vec::with_capacity(documents.len());
        for document in documents {
            let trip: Trip = from_document(document)?;
            trips.push(TripResponse::from(trip));
        }

        Ok(trips)
    }

    pub async fn list_faqs(&self) -> AppResult<Vec<FaqResponse>> {
        let documents = self
            .store
            .find_many(Faq::COLLECTION, doc! {}, Some(FAQ_LIMIT))
            .await?;

        let mut faqs = Vec::with_capacity(documents.len());
        for document in documents {
            let faq: Faq = from_document(document)?;
            faqs.push(faq);
        }

        // Stable two-key display sort: order first, question breaks ties
        faqs.sort_by(|a, b| {
            (a.order, a.question.as_str()).cmp(&(b.order, b.question.as_str()))
        });

        Ok(faqs.into_iter().map(FaqResponse::from).collect())
    }

    // Store-native order, capped at 50
    pub async fn list_reviews(&self) -> AppResult<Vec<ReviewResponse>> {
        let documents = self
            .store
            .find_many(Review::COLLECTION, doc! {}, Some(REVIEW_LIMIT))
            .await?;

        let mut reviews = Vec::with_capacity(documents.len());
        for document in documents {
            let review: Review = from_document(document)?;
            reviews.push(ReviewResponse::from(review));
        }

        Ok(reviews)
    }
}
