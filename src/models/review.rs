use mongodb::bson::oid::ObjectId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate, JsonSchema)]
pub struct ReviewRequest {
    pub name: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
    pub comment: String,
    pub trip_type: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rating: i32,
    #[serde(default)]
    pub comment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_type: Option<String>,
}

impl Review {
    pub const COLLECTION: &'static str = "review";
}

impl From<ReviewRequest> for Review {
    fn from(request: ReviewRequest) -> Self {
        Review {
            id: None,
            name: request.name,
            rating: request.rating,
            comment: request.comment,
            trip_type: request.trip_type,
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct ReviewResponse {
    pub id: String,
    pub name: String,
    pub rating: i32,
    pub comment: String,
    pub trip_type: Option<String>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        ReviewResponse {
            id: review.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: review.name,
            rating: review.rating,
            comment: review.comment,
            trip_type: review.trip_type,
        }
    }
}
