use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;
use validator::Validate;

use crate::models::booking::BookingRequest;
use crate::models::inquiry::InquiryRequest;
use crate::models::review::ReviewRequest;
use crate::models::SubmissionResponse;
use crate::services::booking_service::BookingService;
use crate::utils::error::AppError;

/// Book a trip
#[openapi(tag = "Bookings")]
#[post("/book", format = "json", data = "<request>")]
pub async fn create_booking(
    request: Json<BookingRequest>,
    booking_service: &State<BookingService>,
) -> Result<Json<SubmissionResponse>, AppError> {
    let request = request.into_inner();
    request
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = booking_service.create_booking(request).await?;
    Ok(Json(response))
}

/// Send a general inquiry
#[openapi(tag = "Bookings")]
#[post("/inquire", format = "json", data = "<request>")]
pub async fn create_inquiry(
    request: Json<InquiryRequest>,
    booking_service: &State<BookingService>,
) -> Result<Json<SubmissionResponse>, AppError> {
    let request = request.into_inner();
    request
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = booking_service.create_inquiry(request).await?;
    Ok(Json(response))
}

/// Leave a review
#[openapi(tag = "Bookings")]
#[post("/review", format = "json", data = "<request>")]
pub async fn add_review(
    request: Json<ReviewRequest>,
    booking_service: &State<BookingService>,
) -> Result<Json<SubmissionResponse>, AppError> {
    let request = request.into_inner();
    request
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = booking_service.create_review(request).await?;
    Ok(Json(response))
}
