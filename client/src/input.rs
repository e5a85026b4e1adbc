use bank::payloads::InputPayload;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid JSON input. Please enter valid JSON.")]
    InvalidJson,

    #[error("JSON must have a 'data' property that is an array.")]
    MissingData,
}

/// Checks user input before anything is sent to the server.
pub fn parse_input(raw: &str) -> Result<InputPayload, InputError> {
    let value: Value = serde_json::from_str(raw).map_err(|_| InputError::InvalidJson)?;

    match value.get("data") {
        Some(Value::Array(data)) => Ok(InputPayload { data: data.clone() }),
        _ => Err(InputError::MissingData),
    }
}
