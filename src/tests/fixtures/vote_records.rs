// Shared test fixtures for vote records and selections.

use crate::modules::votes::core::selections::Selections;
use crate::modules::votes::core::vote_record::VoteRecord;
use chrono::{DateTime, Duration, TimeZone, Utc};

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 28, 12, 0, 0).unwrap()
}

pub fn minutes_after_fixed_time(minutes: i64) -> DateTime<Utc> {
    fixed_time() + Duration::minutes(minutes)
}

/// A complete ballot across the three categories and months.
pub fn make_full_selections() -> Selections {
    Selections::new()
        .pick("Employee of the Year", "Sept", "Samuel")
        .pick("Employee of the Year", "Oct", "Elvis")
        .pick("Employee of the Year", "Nov", "Cecilia")
        .pick("Team Spirit & Collaboration", "Sept", "Favour")
        .pick("Team Spirit & Collaboration", "Oct", "Gael")
        .pick("Team Spirit & Collaboration", "Nov", "Love")
        .pick("Innovation & Initiative", "Sept", "Eugene")
        .pick("Innovation & Initiative", "Oct", "Steph")
        .pick("Innovation & Initiative", "Nov", "Partemus")
}

pub struct VoteRecordBuilder {
    inner: VoteRecord,
}

impl Default for VoteRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl VoteRecordBuilder {
    pub fn new() -> Self {
        Self {
            inner: VoteRecord::new("user-fixed-0001".to_string(), Selections::new(), fixed_time()),
        }
    }

    pub fn submitter_name(mut self, v: impl Into<String>) -> Self {
        self.inner.submitter_name = v.into();
        self
    }

    pub fn selections(mut self, v: Selections) -> Self {
        self.inner.selections = v;
        self
    }

    pub fn pick(mut self, category: &str, month: &str, nominee: &str) -> Self {
        self.inner.selections = self.inner.selections.pick(category, month, nominee);
        self
    }

    pub fn submitted_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.submitted_at = v;
        self.inner.created_at = v;
        self.inner.updated_at = v;
        self
    }

    pub fn build(self) -> VoteRecord {
        self.inner
    }
}

#[cfg(test)]
mod vote_record_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_build_a_record_with_fresh_ids() {
        let first = VoteRecordBuilder::new().build();
        let second = VoteRecordBuilder::new().build();

        assert_ne!(first.id, second.id);
        assert_eq!(first.submitter_name, "user-fixed-0001");
        assert!(first.selections.is_empty());
    }

    #[rstest]
    fn setters_override_fields_and_keep_timestamps_aligned() {
        let at = minutes_after_fixed_time(5);
        let record = VoteRecordBuilder::new()
            .submitter_name("Grace")
            .selections(make_full_selections())
            .submitted_at(at)
            .build();

        assert_eq!(record.submitter_name, "Grace");
        assert_eq!(record.selections.len(), 3);
        assert_eq!(record.created_at, at);
        assert_eq!(record.updated_at, at);
    }
}
