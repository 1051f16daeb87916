// In memory implementation of the VoteStore port.
//
// Purpose
// - Support use case and HTTP tests and local development without a database.
//
// Responsibilities
// - Keep records behind one RwLock so the duplicate check and the insert cannot interleave.
// - Simulate an unreachable backend through toggle_offline.

use super::ledger::Ledger;
use super::{VoteStore, VoteStoreError};
use crate::modules::votes::core::vote_record::{VoteId, VoteRecord};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryVoteStore {
    ledger: RwLock<Ledger>,
    is_offline: bool,
}

impl InMemoryVoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), VoteStoreError> {
        if self.is_offline {
            return Err(VoteStoreError::Backend("Vote store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl VoteStore for InMemoryVoteStore {
    async fn insert_if_absent(&self, record: VoteRecord) -> Result<VoteRecord, VoteStoreError> {
        self.ensure_online()?;
        self.ledger.write().await.insert_if_absent(record)
    }

    async fn list_all(&self) -> Result<Vec<VoteRecord>, VoteStoreError> {
        self.ensure_online()?;
        Ok(self.ledger.read().await.newest_first())
    }

    async fn get(&self, id: &VoteId) -> Result<Option<VoteRecord>, VoteStoreError> {
        self.ensure_online()?;
        Ok(self.ledger.read().await.get(id))
    }

    async fn delete(&self, id: &VoteId) -> Result<Option<VoteRecord>, VoteStoreError> {
        self.ensure_online()?;
        Ok(self.ledger.write().await.remove(id))
    }
}
