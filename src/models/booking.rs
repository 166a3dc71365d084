use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Guest payload for `POST /book`. Field constraints mirror the entity rules;
/// the capacity rule against the referenced trip is checked in the service.
#[derive(Debug, Deserialize, Validate, JsonSchema)]
pub struct BookingRequest {
    pub trip_type: String,
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    #[validate(range(min = 1))]
    pub people_count: i32,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

// Persisted booking document; never mutated after creation
#[derive(Debug, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub trip_type: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub people_count: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: BookingStatus,
}

impl Booking {
    pub const COLLECTION: &'static str = "booking";
}

impl From<BookingRequest> for Booking {
    fn from(request: BookingRequest) -> Self {
        Booking {
            id: None,
            trip_type: request.trip_type,
            name: request.name,
            email: request.email,
            phone: request.phone,
            date: request.date,
            people_count: request.people_count,
            notes: request.notes,
            status: BookingStatus::Pending,
        }
    }
}
