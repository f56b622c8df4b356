use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde_json::json;

use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::{Car, CarPayload};
use crate::repository::CarRepository;

pub fn router() -> Router<CarRepository> {
    Router::new()
        .route("/", get(list_cars).post(create_car))
        .route("/{id}", get(get_car).put(update_car).delete(delete_car))
}

async fn list_cars(
    State(repository): State<CarRepository>,
) -> Result<Json<Vec<Car>>, AppError> {
    let cars = repository.list_all().await?;
    Ok(Json(cars))
}

async fn get_car(
    State(repository): State<CarRepository>,
    Path(id): Path<i32>,
) -> Result<Json<Car>, AppError> {
    let car = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;
    Ok(Json(car))
}

async fn create_car(
    State(repository): State<CarRepository>,
    Json(payload): Json<CarPayload>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    if !payload.has_required_fields() {
        return Err(AppError::Validation("Missing required fields".to_string()));
    }

    let id = repository.insert(&payload).await?;
    tracing::info!("{} Created car {}", API_NAME, id);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Car created successfully", "id": id })),
    ))
}

// Unlike create, update applies the body as-is with no required-field check.
async fn update_car(
    State(repository): State<CarRepository>,
    Path(id): Path<i32>,
    Json(payload): Json<CarPayload>,
) -> Result<Json<serde_json::Value>, AppError> {
    let affected = repository.update_by_id(id, &payload).await?;

    if affected == 0 {
        return Err(AppError::NotFound("Car not found".to_string()));
    }

    Ok(Json(json!({ "message": "Car updated successfully" })))
}

async fn delete_car(
    State(repository): State<CarRepository>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let affected = repository.delete_by_id(id).await?;

    if affected == 0 {
        return Err(AppError::NotFound("Car not found".to_string()));
    }

    tracing::info!("{} Deleted car {}", API_NAME, id);
    Ok(Json(json!({ "message": "Car deleted successfully" })))
}
