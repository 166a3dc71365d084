use mongodb::bson::oid::ObjectId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate, JsonSchema)]
pub struct InquiryRequest {
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Inquiry {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Inquiry {
    pub const COLLECTION: &'static str = "inquiry";
}

impl From<InquiryRequest> for Inquiry {
    fn from(request: InquiryRequest) -> Self {
        Inquiry {
            id: None,
            name: request.name,
            email: request.email,
            subject: request.subject,
            message: request.message,
        }
    }
}
