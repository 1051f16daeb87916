pub mod app_state;
pub mod vote_records;
