// Tally functions: fold a snapshot of vote records into the three reports.
//
// Purpose
// - WinnerReport: monthly and overall leaders per category.
// - AdminSummary: nominee totals per category across every month label in the data.
// - VotesSummary: fixed category x month x colleague count matrix.
//
// Boundaries
// - Pure. No input or output, no clock. Records are counted in slice order.
//
// Rules
// - Only categories named in the AwardConfig are reported; anything else is skipped.
// - A leader is only replaced by a strictly higher count, so the first nominee to reach a count keeps a tie.
// - Only picks holding a non-empty string are counted; null, blank or other values are skipped.

use crate::modules::votes::core::award_config::AwardConfig;
use crate::modules::votes::core::selections::MonthPicks;
use crate::modules::votes::core::vote_record::VoteRecord;
use crate::shared::core::ordered_map::OrderedMap;
use serde::Serialize;

/// Nominee -> number of votes, in first-seen order.
pub type NomineeCounts = OrderedMap<u32>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Winner {
    pub nominee: String,
    pub votes: u32,
}

impl Winner {
    pub fn none() -> Self {
        Self {
            nominee: String::new(),
            votes: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryWinners {
    pub monthly: OrderedMap<Winner>,
    pub overall: Winner,
}

pub type WinnerReport = OrderedMap<CategoryWinners>;

pub type AdminSummary = OrderedMap<NomineeCounts>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VotesSummary {
    pub total_votes: usize,
    pub categories: OrderedMap<OrderedMap<NomineeCounts>>,
    pub months: Vec<String>,
    pub colleagues: Vec<String>,
}

pub fn winner_report(records: &[VoteRecord], awards: &AwardConfig) -> WinnerReport {
    awards
        .categories
        .iter()
        .map(|category| {
            let mut monthly: OrderedMap<NomineeCounts> = awards
                .months
                .iter()
                .map(|month| (month.as_str(), NomineeCounts::new()))
                .collect();
            let mut overall = NomineeCounts::new();

            for picks in records.iter().filter_map(|r| r.selections.category(category)) {
                for (month, nominee) in nominees(picks) {
                    let Some(counts) = monthly.get_mut(month) else {
                        continue;
                    };
                    *counts.get_or_insert_with(nominee, || 0) += 1;
                    *overall.get_or_insert_with(nominee, || 0) += 1;
                }
            }

            let winners = CategoryWinners {
                monthly: monthly
                    .iter()
                    .map(|(month, counts)| (month, leader(counts)))
                    .collect(),
                overall: leader(&overall),
            };
            (category.as_str(), winners)
        })
        .collect()
}

pub fn admin_summary(records: &[VoteRecord], awards: &AwardConfig) -> AdminSummary {
    awards
        .categories
        .iter()
        .map(|category| {
            let mut totals = NomineeCounts::new();
            for picks in records.iter().filter_map(|r| r.selections.category(category)) {
                for (_, nominee) in nominees(picks) {
                    *totals.get_or_insert_with(nominee, || 0) += 1;
                }
            }
            (category.as_str(), totals)
        })
        .collect()
}

pub fn votes_summary(records: &[VoteRecord], awards: &AwardConfig) -> VotesSummary {
    let mut categories: OrderedMap<OrderedMap<NomineeCounts>> = awards
        .categories
        .iter()
        .map(|category| (category.as_str(), zeroed_months(awards)))
        .collect();

    for record in records {
        for (category, picks) in record.selections.iter() {
            let Some(months) = categories.get_mut(category) else {
                continue;
            };
            for (month, nominee) in nominees(picks) {
                if let Some(count) = months.get_mut(month).and_then(|c| c.get_mut(nominee)) {
                    *count += 1;
                }
            }
        }
    }

    VotesSummary {
        total_votes: records.len(),
        categories,
        months: awards.months.clone(),
        colleagues: awards.colleagues.clone(),
    }
}

fn zeroed_months(awards: &AwardConfig) -> OrderedMap<NomineeCounts> {
    awards
        .months
        .iter()
        .map(|month| {
            let counts: NomineeCounts = awards
                .colleagues
                .iter()
                .map(|colleague| (colleague.as_str(), 0))
                .collect();
            (month.as_str(), counts)
        })
        .collect()
}

/// Month and nominee for every pick that names someone.
fn nominees(picks: &MonthPicks) -> impl Iterator<Item = (&str, &str)> {
    picks
        .iter()
        .filter_map(|(month, pick)| pick.nominee().map(|nominee| (month, nominee)))
}

fn leader(counts: &NomineeCounts) -> Winner {
    let mut winner = Winner::none();
    for (nominee, &votes) in counts.iter() {
        if votes > winner.votes {
            winner = Winner {
                nominee: nominee.to_string(),
                votes,
            };
        }
    }
    winner
}
