use async_trait::async_trait;
use mongodb::bson::doc;
use test_context::{test_context, AsyncTestContext};

use tour_booking_system::{
    db::SharedStore,
    models::faq::Faq,
    models::review::Review,
    models::trip::Trip,
    services::content_service::ContentService,
    utils::error::AppError,
};

mod common {
    pub mod test_utils;
}
use common::test_utils::{faq_doc, review_doc, trip_doc, MemoryStore};

struct ContentServiceContext {
    store: SharedStore,
    content_service: ContentService,
}

#[async_trait]
impl AsyncTestContext for ContentServiceContext {
    async fn setup() -> Self {
        let store = MemoryStore::new().into_shared();
        let content_service = ContentService::new(store.clone());

        ContentServiceContext {
            store,
            content_service,
        }
    }

    async fn teardown(self) {}
}

#[test_context(ContentServiceContext)]
#[tokio::test]
async fn test_trips_listing_includes_inactive_trips(
    ctx: &ContentServiceContext,
) -> Result<(), AppError> {
    ctx.store
        .insert_one(Trip::COLLECTION, trip_doc("dimaniyat", 20, true))
        .await?;
    ctx.store
        .insert_one(Trip::COLLECTION, trip_doc("sunset", 10, false))
        .await?;

    let trips = ctx.content_service.list_trips().await?;

    assert_eq!(trips.len(), 2);
    assert!(trips.iter().any(|t| t.trip_type == "sunset" && !t.is_active));

    // Identifiers are rendered as plain hex strings
    for trip in &trips {
        assert_eq!(trip.id.len(), 24);
        assert!(trip.id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    Ok(())
}

#[test_context(ContentServiceContext)]
#[tokio::test]
async fn test_faqs_sort_by_order_then_question(
    ctx: &ContentServiceContext,
) -> Result<(), AppError> {
    // Two entries share order 1; "b" is inserted before "a"
    ctx.store.insert_one(Faq::COLLECTION, faq_doc("q3", 3)).await?;
    ctx.store.insert_one(Faq::COLLECTION, faq_doc("b", 1)).await?;
    ctx.store.insert_one(Faq::COLLECTION, faq_doc("a", 1)).await?;
    ctx.store.insert_one(Faq::COLLECTION, faq_doc("q2", 2)).await?;

    let faqs = ctx.content_service.list_faqs().await?;

    let questions: Vec<&str> = faqs.iter().map(|f| f.question.as_str()).collect();
    assert_eq!(questions, vec!["a", "b", "q2", "q3"]);

    Ok(())
}

#[test_context(ContentServiceContext)]
#[tokio::test]
async fn test_faq_missing_fields_fall_back_to_defaults(
    ctx: &ContentServiceContext,
) -> Result<(), AppError> {
    ctx.store
        .insert_one(Faq::COLLECTION, doc! { "answer": "Just an answer" })
        .await?;
    ctx.store.insert_one(Faq::COLLECTION, faq_doc("q1", 1)).await?;

    let faqs = ctx.content_service.list_faqs().await?;

    // Missing order sorts as 0, ahead of order 1; missing question reads as ""
    assert_eq!(faqs[0].question, "");
    assert_eq!(faqs[0].order, 0);
    assert_eq!(faqs[0].category, "general");
    assert_eq!(faqs[1].question, "q1");

    Ok(())
}

#[test_context(ContentServiceContext)]
#[tokio::test]
async fn test_faq_listing_caps_at_one_hundred(
    ctx: &ContentServiceContext,
) -> Result<(), AppError> {
    for i in 0..105 {
        ctx.store
            .insert_one(Faq::COLLECTION, faq_doc(&format!("q{:03}", i), i))
            .await?;
    }

    let faqs = ctx.content_service.list_faqs().await?;
    assert_eq!(faqs.len(), 100);

    Ok(())
}

#[test_context(ContentServiceContext)]
#[tokio::test]
async fn test_review_listing_caps_at_fifty_in_store_order(
    ctx: &ContentServiceContext,
) -> Result<(), AppError> {
    for i in 0..55 {
        ctx.store
            .insert_one(Review::COLLECTION, review_doc(&format!("guest-{:02}", i), 4))
            .await?;
    }

    let reviews = ctx.content_service.list_reviews().await?;

    assert_eq!(reviews.len(), 50);
    // Store-native (insertion) order, no sorting applied
    assert_eq!(reviews[0].name, "guest-00");
    assert_eq!(reviews[49].name, "guest-49");

    Ok(())
}

#[test_context(ContentServiceContext)]
#[tokio::test]
async fn test_empty_store_lists_are_empty(ctx: &ContentServiceContext) -> Result<(), AppError> {
    assert!(ctx.content_service.list_trips().await?.is_empty());
    assert!(ctx.content_service.list_faqs().await?.is_empty());
    assert!(ctx.content_service.list_reviews().await?.is_empty());

    Ok(())
}
