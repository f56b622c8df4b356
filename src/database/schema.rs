use crate::constants::API_NAME;
use sqlx::PgPool;

const CREATE_CARS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS cars (
    id SERIAL PRIMARY KEY,
    make VARCHAR(50) NOT NULL,
    model VARCHAR(50) NOT NULL,
    year INT NOT NULL,
    price DECIMAL(10, 2) NOT NULL,
    description TEXT,
    image_url VARCHAR(255),
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)";

const SEED_CARS: &str = "\
INSERT INTO cars (make, model, year, price, description) VALUES
('BMW', '3 Series', 2022, 45000.00, 'Luxury sedan with advanced features and premium comfort'),
('Mercedes-Benz', 'C-Class', 2023, 52000.00, 'Premium comfort and performance with cutting-edge technology'),
('Audi', 'A4', 2022, 48000.00, 'Elegant design with cutting-edge technology and superior handling'),
('Tesla', 'Model 3', 2023, 55000.00, 'Electric luxury sedan with autopilot and premium interior'),
('Lexus', 'ES', 2022, 42000.00, 'Reliable luxury sedan with exceptional build quality'),
('Porsche', '911', 2023, 125000.00, 'Iconic sports car with unmatched performance and style')";

/// Idempotently creates the `cars` table and, only when the table is empty,
/// inserts the fixed sample listings. Any error is fatal to the caller.
pub async fn init(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_CARS_TABLE).execute(pool).await?;

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cars")
        .fetch_one(pool)
        .await?;

    if count == 0 {
        sqlx::query(SEED_CARS).execute(pool).await?;
        tracing::info!("{} Sample data inserted", API_NAME);
    }

    tracing::info!("{} Database schema initialized", API_NAME);
    Ok(())
}
