// Port for persisting vote records.
//
// Purpose
// - Describe what the vote use cases need from storage, without choosing a backend.
//
// Responsibilities
// - insert_if_absent is the only write: the submitter-name check and the insert are one atomic step.
// - list_all returns the newest submission first.
//
// Adapters
// - in_memory: tests and local development.
// - json_file: a single JSON document on disk, rewritten on every change.

pub mod in_memory;
pub mod json_file;
mod ledger;

use crate::modules::votes::core::vote_record::{VoteId, VoteRecord};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VoteStoreError {
    #[error("a vote from {submitter_name} already exists")]
    DuplicateSubmitter { submitter_name: String },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait VoteStore: Send + Sync {
    async fn insert_if_absent(&self, record: VoteRecord) -> Result<VoteRecord, VoteStoreError>;
    async fn list_all(&self) -> Result<Vec<VoteRecord>, VoteStoreError>;
    async fn get(&self, id: &VoteId) -> Result<Option<VoteRecord>, VoteStoreError>;
    async fn delete(&self, id: &VoteId) -> Result<Option<VoteRecord>, VoteStoreError>;
}
