use axum::{extract::State, response::Json, routing::get, Router};
use chrono::Utc;
use serde_json::json;

use crate::error::AppError;
use crate::repository::CarRepository;

pub fn router() -> Router<CarRepository> {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/test-db", get(test_db))
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "OK",
        "timestamp": Utc::now().to_rfc3339()
    }))
}

async fn test_db(
    State(repository): State<CarRepository>,
) -> Result<Json<serde_json::Value>, AppError> {
    let probe = repository.probe().await?;
    Ok(Json(json!({
        "message": "Database connection successful",
        "data": [{ "test": probe }]
    })))
}
