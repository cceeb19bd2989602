use std::sync::Arc;

use anyhow::Context;
use mongodb::{bson::doc, Client, Database};

use crate::config::AppConfig;

/// Shared state threaded through all handlers. `Database` is a cheap clone
/// of the one process-wide client; the controller never opens or closes
/// connections itself.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let client = Client::with_uri_str(&config.mongodb_uri)
            .await
            .context("parse mongodb uri")?;
        let db = client.database(&config.mongodb_db);

        // The driver connects lazily; ping once so a bad uri or unreachable
        // server fails at startup instead of on the first request.
        db.run_command(doc! { "ping": 1 }, None)
            .await
            .context("connect to mongodb")?;

        Ok(Self { db, config })
    }

    /// State whose store is unreachable (loopback discard port, short server
    /// selection timeout). Nothing connects until a collection call runs, and
    /// any such call fails fast.
    #[cfg(test)]
    pub async fn fake() -> Self {
        let config = Arc::new(AppConfig {
            mongodb_uri: "mongodb://127.0.0.1:9/?serverSelectionTimeoutMS=200&connectTimeoutMS=200"
                .into(),
            mongodb_db: "rolodex_test".into(),
        });
        let client = Client::with_uri_str(&config.mongodb_uri)
            .await
            .expect("parse test mongodb uri");
        let db = client.database(&config.mongodb_db);
        Self { db, config }
    }
}
