// Command data type for submitting a vote.
//
// Purpose
// - Carry an already validated submission from the transport layer to the handler.
// - Be independent of HTTP: the submitter name is trimmed and the selections are typed.

use crate::modules::votes::core::selections::Selections;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitVote {
    pub submitter_name: String,
    pub selections: Selections,
    pub submitted_at: DateTime<Utc>,
}
