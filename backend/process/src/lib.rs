//! # User Seeding
//!
//! Out of band loader for the `users` hash. The server never writes users,
//! this is the only thing that does.
//!
//! ## Input
//! A JSON array of user records.
//! ```json
//! [
//!     {"firstName":"John","lastName":"Doe","dob":"2000-05-09","email":"john@xyz.com","roll_number":"ABCD123"}
//! ]
//! ```
//!
//! ## Steps
//! 1. Read and decode the file.
//! 2. Trim every text field, drop records without a roll number.
//! 3. Collapse duplicate roll numbers, the last one in the file wins.
//! 4. `HSET users <roll_number> <record json>` for each record.
//!
//! Records already stored under the same roll number are overwritten. Anything else
//! in the hash is left alone.
use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use redis::{AsyncCommands, Client};

pub mod utils;

use bank::USERS_KEY;
use utils::{encode_user, read_users, sanitize_users};

pub async fn load_users(path: &Path, redis_url: &str) -> Result<usize> {
    let mut users = read_users(path)?;
    println!("Loaded Users: {}", users.len());

    let dropped = sanitize_users(&mut users);
    if dropped > 0 {
        println!("Dropped Users: {dropped}");
    }

    let client = Client::open(redis_url)?;
    let mut connection = client
        .get_multiplexed_async_connection()
        .await
        .with_context(|| format!("Failed to connect to Redis at {redis_url}"))?;

    let pb = ProgressBar::new(users.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )?
        .progress_chars("=> "),
    );

    for user in &users {
        pb.set_message(format!("Writing {}", user.roll_number));

        let (field, value) = encode_user(user)?;
        let _: () = connection.hset(USERS_KEY, field, value).await?;

        pb.inc(1);
    }

    pb.finish_with_message("Done");
    println!("Stored Users: {}", users.len());

    Ok(users.len())
}
