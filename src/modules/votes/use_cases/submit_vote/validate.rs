// Turn a raw vote body into a SubmitVote command.
//
// Rules
// - `userName` and `votes` must both be present and truthy.
// - `userName` must be a string that is not blank once trimmed; the trimmed value is kept.
// - `votes` must be a non-empty object whose categories are objects of month -> pick.
// - Category and month names and the picks themselves are not checked here; the tallies skip
//   picks that do not name a nominee.

use crate::modules::votes::core::selections::Selections;
use crate::modules::votes::use_cases::submit_vote::command::SubmitVote;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Valid JSON body is required")]
    MalformedBody,

    #[error("Username and votes are required")]
    MissingFields,

    #[error("Valid username is required")]
    InvalidSubmitterName,

    #[error("Valid votes object is required")]
    InvalidSelections,
}

pub fn validate_submission(
    body: &Value,
    submitted_at: DateTime<Utc>,
) -> Result<SubmitVote, ValidationError> {
    let user_name = body.get("userName").filter(|v| is_truthy(v));
    let votes = body.get("votes").filter(|v| is_truthy(v));
    let (Some(user_name), Some(votes)) = (user_name, votes) else {
        return Err(ValidationError::MissingFields);
    };

    let submitter_name = user_name
        .as_str()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or(ValidationError::InvalidSubmitterName)?;

    let selections = match votes {
        Value::Object(map) if !map.is_empty() => {
            Selections::deserialize(votes).map_err(|_| ValidationError::InvalidSelections)?
        }
        _ => return Err(ValidationError::InvalidSelections),
    };

    Ok(SubmitVote {
        submitter_name: submitter_name.to_string(),
        selections,
        submitted_at,
    })
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
