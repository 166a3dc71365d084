use mongodb::bson::oid::ObjectId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A bookable tour offering. `trip_type` is the business key other entities
/// reference; the store-generated `_id` is never used as a reference.
///
/// The store is schemaless, so every non-key field falls back to a default
/// when a document is missing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Trip {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub trip_type: String,
    pub description: String,
    pub location: String,
    pub price_per_person: f64,
    pub capacity: i32,
    pub duration_hours: f64,
    pub highlights: Vec<String>,
    pub includes: Vec<String>,
    pub images: Vec<String>,
    pub is_active: bool,
}

impl Trip {
    pub const COLLECTION: &'static str = "trip";
}

impl Default for Trip {
    fn default() -> Self {
        Trip {
            id: None,
            title: String::new(),
            trip_type: String::new(),
            description: String::new(),
            location: String::new(),
            price_per_person: 0.0,
            capacity: 0,
            duration_hours: 0.0,
            highlights: Vec::new(),
            includes: Vec::new(),
            images: Vec::new(),
            is_active: true,
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct TripResponse {
    pub id: String,
    pub title: String,
    pub trip_type: String,
    pub description: String,
    pub location: String,
    pub price_per_person: f64,
    pub capacity: i32,
    pub duration_hours: f64,
    pub highlights: Vec<String>,
    pub includes: Vec<String>,
    pub images: Vec<String>,
    pub is_active: bool,
}

impl From<Trip> for TripResponse {
    fn from(trip: Trip) -> Self {
        TripResponse {
            id: trip.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: trip.title,
            trip_type: trip.trip_type,
            description: trip.description,
            location: trip.location,
            price_per_person: trip.price_per_person,
            capacity: trip.capacity,
            duration_hours: trip.duration_hours,
            highlights: trip.highlights,
            includes: trip.includes,
            images: trip.images,
            is_active: trip.is_active,
        }
    }
}
