//! # Redis
//!
//! Read-only user storage.
//!
//! ## Layout
//!
//! - One hash, `users`
//! - Field: roll number
//! - Value: JSON encoded [`UserRecord`]
//!
//! Records are written out of band by the `seed` tool, the server only reads.
//!
//! ## Selection
//!
//! The server answers with exactly one user. Hash iteration order is not stable,
//! so the record with the lowest roll number is picked: `HKEYS` for the roll
//! numbers, then a single `HGET` for the smallest one.
use std::{collections::BTreeMap, time::Duration};

use async_trait::async_trait;
use bank::{USERS_KEY, users::UserRecord};
use redis::{
    AsyncCommands, Client, RedisError,
    aio::{ConnectionManager, ConnectionManagerConfig},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] RedisError),

    #[error("Malformed user record: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// User with the lowest roll number, `None` when nothing is stored.
    async fn first_user(&self) -> Result<Option<UserRecord>, StoreError>;
}

pub async fn init_redis(redis_url: &str) -> Result<ConnectionManager, RedisError> {
    let config = ConnectionManagerConfig::new()
        .set_number_of_retries(1)
        .set_connection_timeout(Duration::from_millis(100));

    let client = Client::open(redis_url)?;

    client.get_connection_manager_with_config(config).await
}

pub struct RedisUserStore {
    connection: ConnectionManager,
}

impl RedisUserStore {
    pub fn new(connection: ConnectionManager) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl UserStore for RedisUserStore {
    async fn first_user(&self) -> Result<Option<UserRecord>, StoreError> {
        let mut connection = self.connection.clone();

        let roll_numbers: Vec<String> = connection.hkeys(USERS_KEY).await?;
        let Some(roll_number) = lowest_roll_number(roll_numbers) else {
            return Ok(None);
        };

        // None if the field was removed between HKEYS and HGET
        let raw: Option<String> = connection.hget(USERS_KEY, roll_number).await?;

        raw.as_deref().map(decode_user).transpose()
    }
}

/// In-process store, mostly for tests and local runs without Redis.
#[derive(Default)]
pub struct MemoryUserStore {
    users: BTreeMap<String, String>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: &UserRecord) -> Result<Self, StoreError> {
        self.users
            .insert(user.roll_number.clone(), serde_json::to_string(user)?);

        Ok(self)
    }

    pub fn with_raw(mut self, roll_number: &str, raw: &str) -> Self {
        self.users.insert(roll_number.to_string(), raw.to_string());
        self
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn first_user(&self) -> Result<Option<UserRecord>, StoreError> {
        self.users
            .first_key_value()
            .map(|(_, raw)| decode_user(raw))
            .transpose()
    }
}

fn lowest_roll_number(roll_numbers: impl IntoIterator<Item = String>) -> Option<String> {
    roll_numbers.into_iter().min()
}

fn decode_user(raw: &str) -> Result<UserRecord, StoreError> {
    Ok(serde_json::from_str(raw)?)
}
