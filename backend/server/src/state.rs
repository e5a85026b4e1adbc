use std::sync::Arc;

use anyhow::{Context, Result};

use super::{
    config::Config,
    database::{RedisUserStore, UserStore, init_redis},
};

pub struct AppState {
    pub config: Config,
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    pub async fn new() -> Result<Arc<Self>> {
        let config = Config::load()?;

        let connection = init_redis(&config.redis_url)
            .await
            .with_context(|| format!("Failed to connect to Redis at {}", config.redis_url))?;

        Ok(Self::with_store(config, Arc::new(RedisUserStore::new(connection))))
    }

    pub fn with_store(config: Config, users: Arc<dyn UserStore>) -> Arc<Self> {
        Arc::new(Self { config, users })
    }
}
