use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One car listing, as stored in the `cars` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Car {
    pub id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: Decimal,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for create and update. Every field is optional here; create
/// enforces presence of the required ones, update applies the body as-is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CarPayload {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl CarPayload {
    /// True when `make`, `model`, `year` and `price` are all present and
    /// non-falsy (empty strings and zero values count as missing).
    pub fn has_required_fields(&self) -> bool {
        self.make.as_deref().is_some_and(|s| !s.is_empty())
            && self.model.as_deref().is_some_and(|s| !s.is_empty())
            && self.year.is_some_and(|y| y != 0)
            && self.price.is_some_and(|p| !p.is_zero())
    }
}
