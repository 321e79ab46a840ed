use mongodb::{Client, Database, bson::doc};

use crate::config::Config;
use crate::error::DbError;

/// Owns at most one live MongoDB client plus the handle to the application
/// database. States are Empty and Connected; `close` returns a Connected
/// manager to Empty.
pub struct ConnectionManager {
    config: Config,
    client: Option<Client>,
    db: Option<Database>,
}

impl ConnectionManager {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: None,
            db: None,
        }
    }

    /// Establish the connection and verify the server is reachable.
    ///
    /// The client and handle are stored only after the ping succeeds, so a
    /// failed call leaves the manager Empty. Reachability is verified at the
    /// moment of the call only.
    pub async fn connect(&mut self) -> Result<Database, DbError> {
        let client = Client::with_uri_str(&self.config.uri).await.map_err(|e| {
            DbError::Unexpected(anyhow::Error::new(e).context("invalid MongoDB URI"))
        })?;

        let admin = client.database("admin");

        // Connection setup in the driver is lazy; the ping is the real
        // liveness check.
        admin
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(DbError::Connection)?;

        let info = admin
            .run_command(doc! { "buildInfo": 1 })
            .await
            .map_err(|e| {
                DbError::Unexpected(
                    anyhow::Error::new(e).context("failed to read server version"),
                )
            })?;
        let version = info.get_str("version").unwrap_or("unknown");

        let db = client.database(&self.config.database);
        tracing::info!(
            "✅ MongoDB connected to database: {} (server version {})",
            self.config.database,
            version
        );

        self.client = Some(client);
        self.db = Some(db.clone());

        Ok(db)
    }

    /// Return the current handle, connecting first if none is held. Never
    /// opens a second client while one is already held.
    pub async fn get_database(&mut self) -> Result<Database, DbError> {
        if let Some(db) = &self.db {
            return Ok(db.clone());
        }
        self.connect().await
    }

    pub fn is_connected(&self) -> bool {
        self.db.is_some()
    }

    /// Release the client and return to the Empty state. No-op when nothing
    /// is held.
    pub async fn close(&mut self) {
        self.db = None;
        if let Some(client) = self.client.take() {
            client.shutdown().await;
            tracing::info!("🛑 MongoDB connection closed");
        }
    }
}
