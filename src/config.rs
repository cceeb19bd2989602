use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub mongodb_uri: String,
    pub mongodb_db: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let mongodb_uri = std::env::var("MONGODB_URI")?;
        let mongodb_db = std::env::var("MONGODB_DB").unwrap_or_else(|_| "rolodex".into());
        Ok(Self {
            mongodb_uri,
            mongodb_db,
        })
    }
}
