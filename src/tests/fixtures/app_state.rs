// Shared helpers for HTTP handler tests.

use crate::modules::votes::core::award_config::AwardConfig;
use crate::modules::votes::core::vote_record::VoteRecord;
use crate::shared::infrastructure::vote_store::in_memory::InMemoryVoteStore;
use crate::shell::state::AppState;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;

pub fn make_test_state() -> AppState {
    AppState::new(Arc::new(InMemoryVoteStore::new()), AwardConfig::default())
}

pub fn make_offline_state() -> AppState {
    let mut store = InMemoryVoteStore::new();
    store.toggle_offline();
    AppState::new(Arc::new(store), AwardConfig::default())
}

pub async fn seed(state: &AppState, records: impl IntoIterator<Item = VoteRecord>) {
    for record in records {
        state.store.insert_if_absent(record).await.unwrap();
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn read_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}
