use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{Context, Result};
use bank::users::UserRecord;

pub fn read_users(path: &Path) -> Result<Vec<UserRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    parse_users(&raw).with_context(|| format!("Failed to decode {}", path.display()))
}

pub fn parse_users(raw: &str) -> Result<Vec<UserRecord>> {
    Ok(serde_json::from_str(raw)?)
}

/// Trims fields, drops records without a roll number and keeps the last record
/// per roll number. Returns how many records were removed.
pub fn sanitize_users(users: &mut Vec<UserRecord>) -> usize {
    let before = users.len();

    let mut by_roll_number = BTreeMap::new();
    for mut user in users.drain(..) {
        sanitize(&mut user);

        if user.roll_number.is_empty() {
            continue;
        }

        by_roll_number.insert(user.roll_number.clone(), user);
    }

    users.extend(by_roll_number.into_values());

    before - users.len()
}

pub fn sanitize(user: &mut UserRecord) {
    for field in [
        &mut user.first_name,
        &mut user.last_name,
        &mut user.email,
        &mut user.roll_number,
    ] {
        *field = field.trim().to_string();
    }
}

pub fn encode_user(user: &UserRecord) -> Result<(String, String)> {
    Ok((user.roll_number.clone(), serde_json::to_string(user)?))
}
