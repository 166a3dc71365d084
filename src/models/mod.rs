//! Entity schemas. Each persisted type maps to the collection named by the
//! lowercase entity name ("trip", "booking", "review", "faq", "inquiry").

pub mod booking;
pub mod faq;
pub mod inquiry;
pub mod review;
pub mod system;
pub mod trip;

use schemars::JsonSchema;
use serde::Serialize;

// Acknowledgement returned by every guest submission endpoint
#[derive(Debug, Serialize, JsonSchema)]
pub struct SubmissionResponse {
    pub status: String,
    pub id: String,
}

impl SubmissionResponse {
    pub fn received(id: mongodb::bson::oid::ObjectId) -> Self {
        SubmissionResponse {
            status: "received".to_string(),
            id: id.to_hex(),
        }
    }
}
