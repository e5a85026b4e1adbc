use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bank::payloads::FailureResponse;
use thiserror::Error;
use tracing::{error, warn};

use crate::database::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input format: 'data' must be an array")]
    InvalidInput,

    #[error("User not found in database")]
    UserNotFound,

    #[error("Internal Server Error")]
    InternalError(#[from] StoreError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput => StatusCode::BAD_REQUEST,
            AppError::UserNotFound => StatusCode::NOT_FOUND,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::InternalError(cause) => error!("Error processing request: {cause}"),
            _ => warn!(status = %status, "{self}"),
        }

        (status, Json(FailureResponse::new(self.to_string()))).into_response()
    }
}
