//! # Payloads
//!
//! JSON bodies exchanged between the client and `/bfhl`.
//!
//! ## Requests
//! - `POST /bfhl`: `{ "data": [...] }`, any JSON values in the array
//!
//! ## Responses
//! - `GET /bfhl`: `{ "operation_code": 1 }`
//! - `POST /bfhl` success: user fields + classification, `is_success: true`
//! - `POST /bfhl` failure: `{ "is_success": false, "message": "..." }`
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::OPERATION_CODE;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InputPayload {
    pub data: Vec<Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub numbers: Vec<String>,
    pub alphabets: Vec<String>,
    pub highest_alphabet: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BfhlResponse {
    pub is_success: bool,
    pub user_id: String,
    pub email: String,
    pub roll_number: String,

    #[serde(flatten)]
    pub classification: Classification,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FailureResponse {
    pub is_success: bool,
    pub message: String,
}

impl FailureResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            message: message.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResponse {
    pub operation_code: u8,
}

impl Default for ProbeResponse {
    fn default() -> Self {
        Self {
            operation_code: OPERATION_CODE,
        }
    }
}
