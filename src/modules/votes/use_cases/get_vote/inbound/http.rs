use axum::{
    Json,
    extract::{Path, State},
};

use crate::modules::votes::core::vote_record::VoteRecord;
use crate::modules::votes::use_cases::errors::{ApplicationError, parse_vote_id};
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

const FAILURE: &str = "Failed to fetch vote";

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<VoteRecord>, ApiError> {
    let fail = |e: ApplicationError| ApiError::from_application(e, FAILURE);
    let id = parse_vote_id(&id).map_err(fail)?;

    state
        .store
        .get(&id)
        .await
        .map_err(|e| fail(e.into()))?
        .map(Json)
        .ok_or_else(|| fail(ApplicationError::NotFound))
}
