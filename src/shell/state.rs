use crate::modules::votes::core::award_config::AwardConfig;
use crate::modules::votes::use_cases::submit_vote::handler::SubmitVoteHandler;
use crate::shared::infrastructure::vote_store::VoteStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn VoteStore>,
    pub submit_handler: Arc<SubmitVoteHandler<dyn VoteStore>>,
    pub awards: Arc<AwardConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn VoteStore>, awards: AwardConfig) -> Self {
        Self {
            submit_handler: Arc::new(SubmitVoteHandler::new(store.clone())),
            store,
            awards: Arc::new(awards),
        }
    }
}
