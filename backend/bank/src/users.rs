//! # Users
//!
//! Stored in the Redis hash `users`, keyed by roll number, JSON encoded.
//!
//! ```json
//! {"firstName":"John","lastName":"Doe","dob":"2000-05-09","email":"john@xyz.com","roll_number":"ABCD123"}
//! ```
//!
//! `user_id` is never stored, it is derived from the record every time it is read.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    #[serde(rename = "firstName")]
    pub first_name: String,

    #[serde(rename = "lastName")]
    pub last_name: String,

    pub dob: NaiveDate,
    pub email: String,
    pub roll_number: String,
}

impl UserRecord {
    /// `firstname_lastname_ddmmyyyy`, names lowercased.
    pub fn user_id(&self) -> String {
        format!(
            "{}_{}_{}",
            self.first_name.to_lowercase(),
            self.last_name.to_lowercase(),
            self.dob.format("%d%m%Y")
        )
    }
}
