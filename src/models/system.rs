use schemars::JsonSchema;
use serde::Serialize;

/// Advisory connectivity report for `GET /test`.
#[derive(Debug, Serialize, JsonSchema)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}
