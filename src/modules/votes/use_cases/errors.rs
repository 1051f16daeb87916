use crate::modules::votes::core::vote_record::VoteId;
use crate::modules::votes::use_cases::submit_vote::validate::ValidationError;
use crate::shared::infrastructure::vote_store::VoteStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("User has already submitted a vote")]
    Duplicate { submitter_name: String },

    #[error("Vote not found")]
    NotFound,

    #[error(transparent)]
    Store(VoteStoreError),
}

impl From<VoteStoreError> for ApplicationError {
    fn from(error: VoteStoreError) -> Self {
        match error {
            VoteStoreError::DuplicateSubmitter { submitter_name } => {
                Self::Duplicate { submitter_name }
            }
            other => Self::Store(other),
        }
    }
}

/// Ids that cannot name a stored vote are reported the same way as unknown ones.
pub fn parse_vote_id(raw: &str) -> Result<VoteId, ApplicationError> {
    raw.parse().map_err(|_| ApplicationError::NotFound)
}
