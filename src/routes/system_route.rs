use rocket::serde::json::{json, Json, Value};
use rocket::State;
use rocket_okapi::openapi;

use crate::db::SharedStore;
use crate::models::system::DiagnosticsResponse;
use crate::services::seed_service::SeedService;
use crate::utils::error::AppError;

/// Service descriptor
#[openapi(tag = "System")]
#[get("/")]
pub fn root() -> Json<Value> {
    Json(json!({
        "service": "Gulf Global Tours API",
        "status": "ok"
    }))
}

/// Store connectivity diagnostic; advisory only, never a hard failure
#[openapi(tag = "System")]
#[get("/test")]
pub async fn test_database(store: &State<SharedStore>) -> Json<DiagnosticsResponse> {
    let mut response = DiagnosticsResponse {
        backend: "✅ Running".to_string(),
        database: "✅ Available".to_string(),
        database_url: Some(
            if std::env::var("DATABASE_URL").is_ok() {
                "✅ Set"
            } else {
                "❌ Not Set"
            }
            .to_string(),
        ),
        database_name: Some(store.database_name()),
        connection_status: "Connected".to_string(),
        collections: Vec::new(),
    };

    match store.collection_names().await {
        Ok(names) => {
            response.collections = names.into_iter().take(10).collect();
            response.database = "✅ Connected & Working".to_string();
        }
        Err(error) => {
            let detail = match error {
                AppError::DatabaseError(detail) => detail,
                other => other.to_string(),
            };
            response.database = format!("⚠️  Connected but Error: {}", truncate(&detail, 50));
        }
    }

    Json(response)
}

/// Populate default trips and FAQs if their collections are empty
#[openapi(tag = "System")]
#[post("/seed")]
pub async fn seed(seed_service: &State<SeedService>) -> Result<Json<Value>, AppError> {
    seed_service.seed_defaults().await?;
    Ok(Json(json!({ "status": "ok" })))
}

fn truncate(message: &str, limit: usize) -> String {
    message.chars().take(limit).collect()
}
