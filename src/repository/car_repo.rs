use crate::models::{Car, CarPayload};
use sqlx::PgPool;

/// Data access for the `cars` table. Every operation is a single
/// parameterized statement against the shared pool.
#[derive(Clone)]
pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Car>, sqlx::Error> {
        sqlx::query_as::<_, Car>(
            "SELECT id, make, model, year, price, description, image_url, created_at, updated_at \
             FROM cars ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Car>, sqlx::Error> {
        sqlx::query_as::<_, Car>(
            "SELECT id, make, model, year, price, description, image_url, created_at, updated_at \
             FROM cars WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn insert(&self, car: &CarPayload) -> Result<i32, sqlx::Error> {
        sqlx::query_scalar::<_, i32>(
            "INSERT INTO cars (make, model, year, price, description, image_url) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
        )
        .bind(&car.make)
        .bind(&car.model)
        .bind(car.year)
        .bind(car.price)
        .bind(&car.description)
        .bind(&car.image_url)
        .fetch_one(&self.pool)
        .await
    }

    /// Overwrites all six mutable fields and refreshes `updated_at`.
    /// Returns the number of rows matched (0 or 1).
    pub async fn update_by_id(&self, id: i32, car: &CarPayload) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE cars SET make = $1, model = $2, year = $3, price = $4, \
             description = $5, image_url = $6, updated_at = NOW() WHERE id = $7",
        )
        .bind(&car.make)
        .bind(&car.model)
        .bind(car.year)
        .bind(car.price)
        .bind(&car.description)
        .bind(&car.image_url)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Round-trip probe backing the /api/test-db endpoint.
    pub async fn probe(&self) -> Result<i32, sqlx::Error> {
        sqlx::query_scalar::<_, i32>("SELECT 1 AS test")
            .fetch_one(&self.pool)
            .await
    }
}
