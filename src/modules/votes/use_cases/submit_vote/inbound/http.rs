use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::modules::votes::core::vote_record::VoteId;
use crate::modules::votes::use_cases::submit_vote::validate::{
    ValidationError, validate_submission,
};
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

const FAILURE: &str = "Failed to submit vote";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitVoteResponse {
    pub message: &'static str,
    pub vote_id: VoteId,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmitVoteResponse>), ApiError> {
    let Json(body) = body.map_err(|rejection| {
        debug!(%rejection, "Rejected vote body");
        ApiError::from_application(ValidationError::MalformedBody.into(), FAILURE)
    })?;

    let command = validate_submission(&body, Utc::now())
        .map_err(|e| ApiError::from_application(e.into(), FAILURE))?;

    let record = state
        .submit_handler
        .handle(command)
        .await
        .map_err(|e| ApiError::from_application(e, FAILURE))?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitVoteResponse {
            message: "Vote submitted successfully",
            vote_id: record.id,
        }),
    ))
}
