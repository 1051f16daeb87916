use axum::{Json, extract::State};
use serde::Serialize;

use crate::modules::votes::core::vote_record::VoteRecord;
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct VoteListResponse {
    pub count: usize,
    pub votes: Vec<VoteRecord>,
}

pub async fn handle(State(state): State<AppState>) -> Result<Json<VoteListResponse>, ApiError> {
    let votes = state
        .store
        .list_all()
        .await
        .map_err(|e| ApiError::from_application(e.into(), "Failed to fetch votes"))?;

    Ok(Json(VoteListResponse {
        count: votes.len(),
        votes,
    }))
}
