// A stored vote submission.
//
// Purpose
// - The document persisted by the vote store and returned by the read endpoints.
//
// Notes
// - Field names on the wire keep the document shape clients already consume (`_id`, `userName`, `votes`).
// - Records are never updated, so `updated_at` always equals `created_at`.

use crate::modules::votes::core::selections::Selections;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoteId(Uuid);

impl VoteId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for VoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for VoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    #[serde(rename = "_id")]
    pub id: VoteId,
    #[serde(rename = "userName")]
    pub submitter_name: String,
    #[serde(rename = "votes")]
    pub selections: Selections,
    #[serde(rename = "submittedAt")]
    pub submitted_at: DateTime<Utc>,
    #[serde(rename = "isAnonymous", default = "anonymous_by_default")]
    pub is_anonymous: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

fn anonymous_by_default() -> bool {
    true
}

impl VoteRecord {
    pub fn new(submitter_name: String, selections: Selections, submitted_at: DateTime<Utc>) -> Self {
        Self {
            id: VoteId::new(),
            submitter_name,
            selections,
            submitted_at,
            is_anonymous: anonymous_by_default(),
            created_at: submitted_at,
            updated_at: submitted_at,
        }
    }
}

#[cfg(test)]
mod vote_record_tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    fn it_should_default_to_anonymous_with_matching_timestamps() {
        let at = Utc.with_ymd_and_hms(2025, 11, 3, 9, 30, 0).unwrap();
        let record = VoteRecord::new(
            "Ada".to_string(),
            Selections::new().pick("Employee of the Year", "Sept", "Samuel"),
            at,
        );

        assert!(record.is_anonymous);
        assert_eq!(record.submitted_at, at);
        assert_eq!(record.created_at, at);
        assert_eq!(record.updated_at, at);
    }

    #[rstest]
    fn it_should_render_the_document_field_names() {
        let at = Utc.with_ymd_and_hms(2025, 11, 3, 9, 30, 0).unwrap();
        let record = VoteRecord::new(
            "Ada".to_string(),
            Selections::new().pick("Employee of the Year", "Sept", "Samuel"),
            at,
        );

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["_id"], serde_json::json!(record.id.to_string()));
        assert_eq!(json["userName"], "Ada");
        assert_eq!(json["votes"]["Employee of the Year"]["Sept"], "Samuel");
        assert_eq!(json["isAnonymous"], true);
        assert!(json.get("submittedAt").is_some());
    }

    #[rstest]
    fn it_should_parse_its_own_id() {
        let id = VoteId::new();

        assert_eq!(id.to_string().parse::<VoteId>().unwrap(), id);
        assert!("not-an-id".parse::<VoteId>().is_err());
    }
}
