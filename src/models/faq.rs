use mongodb::bson::oid::ObjectId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// FAQ entry. `order` drives the display sort; a document missing `order`
/// sorts as 0 and a missing `question` as the empty string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub order: i32,
}

fn default_category() -> String {
    "general".to_string()
}

impl Faq {
    pub const COLLECTION: &'static str = "faq";
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct FaqResponse {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub order: i32,
}

impl From<Faq> for FaqResponse {
    fn from(faq: Faq) -> Self {
        FaqResponse {
            id: faq.id.map(|id| id.to_hex()).unwrap_or_default(),
            question: faq.question,
            answer: faq.answer,
            category: faq.category,
            order: faq.order,
        }
    }
}
