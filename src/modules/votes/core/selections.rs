// A submitter's picks: category -> month -> pick.
//
// Keys are free-form here. Matching against the known ballot happens in the tally.
// A pick is stored exactly as sent; only a non-empty string names a nominee.

use crate::shared::core::ordered_map::OrderedMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pick(Value);

impl Pick {
    pub fn nominee(&self) -> Option<&str> {
        self.0.as_str().filter(|name| !name.is_empty())
    }
}

impl From<&str> for Pick {
    fn from(nominee: &str) -> Self {
        Self(Value::String(nominee.to_string()))
    }
}

/// Month label -> pick, in the order the submitter sent them.
pub type MonthPicks = OrderedMap<Pick>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selections(OrderedMap<MonthPicks>);

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pick(mut self, category: &str, month: &str, nominee: &str) -> Self {
        self.0
            .get_or_insert_with(category, MonthPicks::new)
            .insert(month, Pick::from(nominee));
        self
    }

    pub fn category(&self, category: &str) -> Option<&MonthPicks> {
        self.0.get(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MonthPicks)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
