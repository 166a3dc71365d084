use mongodb::bson::{doc, from_document, to_document};

use crate::db::SharedStore;
use crate::models::booking::{Booking, BookingRequest};
use crate::models::inquiry::{Inquiry, InquiryRequest};
use crate::models::review::{Review, ReviewRequest};
use crate::models::trip::Trip;
use crate::models::SubmissionResponse;
use crate::utils::error::{AppError, AppResult};

// Write path for guest submissions: bookings, inquiries, reviews.
// Payloads arrive already validated at the route boundary.
pub struct BookingService {
    store: SharedStore,
}

impl BookingService {
    pub fn new(store: SharedStore) -> Self {
        BookingService { store }
    }

    /// Book a trip. Looks up the active trip for the requested `trip_type`,
    /// checks the party size against its capacity, then persists the booking
    /// as `pending`.
    ///
    /// The capacity read and the insert are not serialized against concurrent
    /// bookings; two requests can both pass the check and jointly overbook.
    pub async fn create_booking(&self, request: BookingRequest) -> AppResult<SubmissionResponse> {
        let trip = self
            .store
            .find_one(
                Trip::COLLECTION,
                doc! { "trip_type": request.trip_type.as_str(), "is_active": true },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))?;

        // A trip document missing `capacity` counts as capacity 0
        let trip: Trip = from_document(trip)?;
        if request.people_count > trip.capacity {
            return Err(AppError::ValidationError(format!(
                "Maximum capacity is {} for this trip",
                trip.capacity
            )));
        }

        let booking = Booking::from(request);
        let id = self
            .store
            .insert_one(Booking::COLLECTION, to_document(&booking)?)
            .await?;

        Ok(SubmissionResponse::received(id))
    }

    pub async fn create_inquiry(&self, request: InquiryRequest) -> AppResult<SubmissionResponse> {
        let inquiry = Inquiry::from(request);
        let id = self
            .store
            .insert_one(Inquiry::COLLECTION, to_document(&inquiry)?)
            .await?;

        Ok(SubmissionResponse::received(id))
    }

    pub async fn create_review(&self, request: ReviewRequest) -> AppResult<SubmissionResponse> {
        let review = Review::from(request);
        let id = self
            .store
            .insert_one(Review::COLLECTION, to_document(&review)?)
            .await?;

        Ok(SubmissionResponse::received(id))
    }
}
