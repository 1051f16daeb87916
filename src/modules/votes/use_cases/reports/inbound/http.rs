// Report endpoints.
//
// Each request takes one snapshot of the store and folds it; nothing is cached between requests.

use axum::{Json, extract::State};

use crate::modules::votes::core::tally::{
    AdminSummary, VotesSummary, WinnerReport, admin_summary, votes_summary, winner_report,
};
use crate::modules::votes::core::vote_record::VoteRecord;
use crate::modules::votes::use_cases::reports::snapshot::load_chronological;
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

async fn snapshot(state: &AppState, failure: &'static str) -> Result<Vec<VoteRecord>, ApiError> {
    load_chronological(state.store.as_ref())
        .await
        .map_err(|e| ApiError::from_application(e.into(), failure))
}

pub async fn winners(State(state): State<AppState>) -> Result<Json<WinnerReport>, ApiError> {
    let records = snapshot(&state, "Failed to generate winner report").await?;
    Ok(Json(winner_report(&records, &state.awards)))
}

pub async fn admin(State(state): State<AppState>) -> Result<Json<AdminSummary>, ApiError> {
    let records = snapshot(&state, "Failed to generate admin summary").await?;
    Ok(Json(admin_summary(&records, &state.awards)))
}

pub async fn summary(State(state): State<AppState>) -> Result<Json<VotesSummary>, ApiError> {
    let records = snapshot(&state, "Failed to generate summary").await?;
    Ok(Json(votes_summary(&records, &state.awards)))
}
