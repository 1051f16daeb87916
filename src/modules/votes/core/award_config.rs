// The award ballot: which categories, months and colleagues the reports know about.
//
// Purpose
// - One declared configuration value handed to the tally functions instead of literals in handlers.
//
// Notes
// - Order matters: reports list categories and months in the order given here.

pub const DEFAULT_CATEGORIES: [&str; 3] = [
    "Employee of the Year",
    "Team Spirit & Collaboration",
    "Innovation & Initiative",
];

pub const DEFAULT_MONTHS: [&str; 3] = ["Sept", "Oct", "Nov"];

pub const DEFAULT_COLLEAGUES: [&str; 11] = [
    "Ebeh", "Samuel", "Elvis", "Cecilia", "Eugene", "Steph", "Favour", "Gael", "Partemus",
    "Marinette", "Love",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardConfig {
    pub categories: Vec<String>,
    pub months: Vec<String>,
    pub colleagues: Vec<String>,
}

impl Default for AwardConfig {
    fn default() -> Self {
        Self {
            categories: to_owned(&DEFAULT_CATEGORIES),
            months: to_owned(&DEFAULT_MONTHS),
            colleagues: to_owned(&DEFAULT_COLLEAGUES),
        }
    }
}

fn to_owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
