use std::process;

use tracing_subscriber::EnvFilter;

use uthra_db::{Config, ConnectionManager};

/// Startup check for the Uthra database: connect, enumerate collections,
/// shut down. Exits 1 if the database is unavailable.
#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    let mut manager = ConnectionManager::new(config);

    let db = match manager.get_database().await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("❌ {e}");
            process::exit(1);
        }
    };

    match db.list_collection_names().await {
        Ok(collections) => {
            tracing::info!("📊 Available collections: {:?}", collections);
        }
        Err(e) => {
            tracing::error!("❌ Failed to list collections: {e}");
            manager.close().await;
            process::exit(1);
        }
    }

    manager.close().await;
}
