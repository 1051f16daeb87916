// JSON file implementation of the VoteStore port.
//
// Purpose
// - Keep votes across restarts without running a database server.
//
// Responsibilities
// - Load every record from the file on open; a missing file is an empty collection.
// - Apply each change to a copy of the ledger, write the copy to a temporary sibling, rename it over the
//   file, and only then swap the copy in. A failed write leaves both the file and memory untouched.

use super::ledger::Ledger;
use super::{VoteStore, VoteStoreError};
use crate::modules::votes::core::vote_record::{VoteId, VoteRecord};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::RwLock;
use tracing::info;

pub struct JsonFileVoteStore {
    path: PathBuf,
    ledger: RwLock<Ledger>,
}

impl JsonFileVoteStore {
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, VoteStoreError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| backend(&path, "create directory for", e))?;
        }

        let records: Vec<VoteRecord> = match fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| backend(&path, "parse", e))?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(backend(&path, "read", e)),
        };
        info!(path = %path.display(), records = records.len(), "Opened vote file");

        Ok(Self {
            path,
            ledger: RwLock::new(Ledger::from_records(records)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, ledger: &Ledger) -> Result<(), VoteStoreError> {
        let bytes = serde_json::to_vec_pretty(ledger.records())
            .map_err(|e| backend(&self.path, "serialize", e))?;
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, bytes)
            .await
            .map_err(|e| backend(&staging, "write", e))?;
        fs::rename(&staging, &self.path)
            .await
            .map_err(|e| backend(&self.path, "replace", e))
    }
}

fn backend(path: &Path, action: &str, error: impl std::fmt::Display) -> VoteStoreError {
    VoteStoreError::Backend(format!("failed to {action} {}: {error}", path.display()))
}

#[async_trait::async_trait]
impl VoteStore for JsonFileVoteStore {
    async fn insert_if_absent(&self, record: VoteRecord) -> Result<VoteRecord, VoteStoreError> {
        let mut guard = self.ledger.write().await;
        let mut next = guard.clone();
        let stored = next.insert_if_absent(record)?;
        self.persist(&next).await?;
        *guard = next;
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<VoteRecord>, VoteStoreError> {
        Ok(self.ledger.read().await.newest_first())
    }

    async fn get(&self, id: &VoteId) -> Result<Option<VoteRecord>, VoteStoreError> {
        Ok(self.ledger.read().await.get(id))
    }

    async fn delete(&self, id: &VoteId) -> Result<Option<VoteRecord>, VoteStoreError> {
        let mut guard = self.ledger.write().await;
        let mut next = guard.clone();
        let Some(removed) = next.remove(id) else {
            return Ok(None);
        };
        self.persist(&next).await?;
        *guard = next;
        Ok(Some(removed))
    }
}
