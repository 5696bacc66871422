//! Opens a single connection with the service's database settings and runs a
//! trivial query.

use productos_api::{config::DatabaseConfig, database};
use sqlx::{ConnectOptions, Connection};
use tracing::Level;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let config = match DatabaseConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let mut conn = match database::connect_options(&config).connect().await {
        Ok(conn) => conn,
        Err(e) => {
            tracing::error!("Connection error: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Connected to {} at {}:{}", config.name, config.host, config.port);

    match sqlx::query_scalar::<_, i32>("SELECT 1 + 1 AS result")
        .fetch_one(&mut conn)
        .await
    {
        Ok(result) => tracing::info!("Test query succeeded: {}", result),
        Err(e) => {
            tracing::error!("Test query failed: {}", e);
            std::process::exit(1);
        }
    }

    if let Err(e) = conn.close().await {
        tracing::warn!("Failed to close connection cleanly: {}", e);
    }
}
