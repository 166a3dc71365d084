use mongodb::bson::oid::ObjectId;

use crate::utils::error::{AppError, AppResult};

// Parse a client-supplied identifier into a store ObjectId
pub fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| AppError::BadRequest("Invalid id".to_string()))
}
