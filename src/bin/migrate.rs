//! Standalone schema initialization, for running migrations without
//! starting the server.

use anyhow::Context;
use dealership_api::config::Config;
use dealership_api::constants::API_NAME;
use dealership_api::database::schema;
use sqlx::postgres::PgPoolOptions;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().init();

    let config = Config::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    schema::init(&pool).await.context("Migration failed")?;
    pool.close().await;

    tracing::info!("{} Migration completed successfully", API_NAME);
    Ok(())
}
