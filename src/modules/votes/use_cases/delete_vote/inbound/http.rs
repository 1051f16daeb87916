use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use tracing::info;

use crate::modules::votes::use_cases::errors::{ApplicationError, parse_vote_id};
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

const FAILURE: &str = "Failed to delete vote";

#[derive(Serialize)]
pub struct DeleteVoteResponse {
    pub message: &'static str,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteVoteResponse>, ApiError> {
    let fail = |e: ApplicationError| ApiError::from_application(e, FAILURE);
    let id = parse_vote_id(&id).map_err(fail)?;

    let removed = state
        .store
        .delete(&id)
        .await
        .map_err(|e| fail(e.into()))?
        .ok_or_else(|| fail(ApplicationError::NotFound))?;
    info!(vote_id = %removed.id, "Vote deleted");

    Ok(Json(DeleteVoteResponse {
        message: "Vote deleted successfully",
    }))
}
