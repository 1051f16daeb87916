use crate::modules::votes::core::vote_record::VoteRecord;
use crate::modules::votes::use_cases::errors::ApplicationError;
use crate::modules::votes::use_cases::submit_vote::command::SubmitVote;
use crate::shared::infrastructure::vote_store::VoteStore;
use std::sync::Arc;
use tracing::info;

pub struct SubmitVoteHandler<TStore>
where
    TStore: VoteStore + ?Sized,
{
    store: Arc<TStore>,
}

impl<TStore> SubmitVoteHandler<TStore>
where
    TStore: VoteStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: SubmitVote) -> Result<VoteRecord, ApplicationError> {
        let record = VoteRecord::new(
            command.submitter_name,
            command.selections,
            command.submitted_at,
        );
        let stored = self.store.insert_if_absent(record).await?;
        info!(vote_id = %stored.id, categories = stored.selections.len(), "Vote submitted");
        Ok(stored)
    }
}
