// In-process bookkeeping shared by the store adapters.
//
// Holds records in insertion order plus the set of submitter names already used.
// Callers wrap it in their own lock; every method assumes exclusive or shared access is already held.

use super::VoteStoreError;
use crate::modules::votes::core::vote_record::{VoteId, VoteRecord};
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub(crate) struct Ledger {
    records: Vec<VoteRecord>,
    submitters: HashSet<String>,
}

impl Ledger {
    pub(crate) fn from_records(records: Vec<VoteRecord>) -> Self {
        let submitters = records.iter().map(|r| r.submitter_name.clone()).collect();
        Self {
            records,
            submitters,
        }
    }

    pub(crate) fn records(&self) -> &[VoteRecord] {
        &self.records
    }

    pub(crate) fn insert_if_absent(
        &mut self,
        record: VoteRecord,
    ) -> Result<VoteRecord, VoteStoreError> {
        if !self.submitters.insert(record.submitter_name.clone()) {
            return Err(VoteStoreError::DuplicateSubmitter {
                submitter_name: record.submitter_name,
            });
        }
        self.records.push(record.clone());
        Ok(record)
    }

    /// Newest submission first; equal timestamps keep the later insert first.
    pub(crate) fn newest_first(&self) -> Vec<VoteRecord> {
        let mut records: Vec<VoteRecord> = self.records.iter().rev().cloned().collect();
        records.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        records
    }

    pub(crate) fn get(&self, id: &VoteId) -> Option<VoteRecord> {
        self.records.iter().find(|r| r.id == *id).cloned()
    }

    pub(crate) fn remove(&mut self, id: &VoteId) -> Option<VoteRecord> {
        let position = self.records.iter().position(|r| r.id == *id)?;
        let removed = self.records.remove(position);
        if !self
            .records
            .iter()
            .any(|r| r.submitter_name == removed.submitter_name)
        {
            self.submitters.remove(&removed.submitter_name);
        }
        Some(removed)
    }
}
