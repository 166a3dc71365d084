use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

use crate::models::faq::FaqResponse;
use crate::models::review::ReviewResponse;
use crate::models::trip::TripResponse;
use crate::services::content_service::ContentService;
use crate::utils::error::AppError;

/// List all trips
#[openapi(tag = "Content")]
#[get("/trips")]
pub async fn get_trips(
    content_service: &State<ContentService>,
) -> Result<Json<Vec<TripResponse>>, AppError> {
    let trips = content_service.list_trips().await?;
    Ok(Json(trips))
}

/// List FAQs, sorted for display
#[openapi(tag = "Content")]
#[get("/faqs")]
pub async fn get_faqs(
    content_service: &State<ContentService>,
) -> Result<Json<Vec<FaqResponse>>, AppError> {
    let faqs = content_service.list_faqs().await?;
    Ok(Json(faqs))
}

/// List the most recent reviews
#[openapi(tag = "Content")]
#[get("/reviews")]
pub async fn get_reviews(
    content_service: &State<ContentService>,
) -> Result<Json<Vec<ReviewResponse>>, AppError> {
    let reviews = content_service.list_reviews().await?;
    Ok(Json(reviews))
}
