use std::sync::Arc;

use axum::{Json, body::Bytes, extract::State};
use bank::payloads::{BfhlResponse, ProbeResponse};
use tracing::info;

use crate::{classify::classify, error::AppError, state::AppState, utils::get_data_from_body};

pub async fn probe_handler() -> Json<ProbeResponse> {
    Json(ProbeResponse::default())
}

pub async fn bfhl_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<BfhlResponse>, AppError> {
    let data = get_data_from_body(&body)?;
    let classification = classify(&data);

    let user = state
        .users
        .first_user()
        .await?
        .ok_or(AppError::UserNotFound)?;

    info!(
        items = data.len(),
        numbers = classification.numbers.len(),
        alphabets = classification.alphabets.len(),
        "Classified request"
    );

    Ok(Json(BfhlResponse {
        is_success: true,
        user_id: user.user_id(),
        email: user.email,
        roll_number: user.roll_number,
        classification,
    }))
}
