use anyhow::Context;
use axum::Router;
use dealership_api::config::Config;
use dealership_api::constants::API_NAME;
use dealership_api::database::schema;
use dealership_api::handlers::{cars, health};
use dealership_api::repository::CarRepository;
use dealership_api::site;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize configuration
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("{} Starting dealership server on port {}", API_NAME, config.server_port);

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("{} Connected to database", API_NAME);

    // Ensure the cars table exists and is seeded; fatal on failure
    schema::init(&pool)
        .await
        .context("Failed to initialize database schema")?;

    // Initialize repository
    let repository = CarRepository::new(pool.clone());

    // Build application router
    let app = Router::new()
        .nest("/api/cars", cars::router())
        .merge(health::router())
        .merge(site::router())
        .layer(CorsLayer::permissive())
        .with_state(repository);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("{} Server listening on {}", API_NAME, addr);
    tracing::info!("{} Health check: http://localhost:{}/health", API_NAME, config.server_port);
    tracing::info!("{} API endpoint: http://localhost:{}/api/cars", API_NAME, config.server_port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("{} Connection pool closed, bye", API_NAME);

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("{} Failed to listen for shutdown signal: {}", API_NAME, e);
    }
}
