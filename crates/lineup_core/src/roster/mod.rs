//! Roster boundary: raw backend records in, validated `Player` snapshots out.

pub mod category;
pub mod csv_roster;
pub mod provider;
pub mod record;

use thiserror::Error;

pub use category::{categories_for_coach, is_club_category, CLUB_CATEGORIES};
pub use csv_roster::CsvRoster;
pub use provider::{InMemoryRoster, Roster, RosterProvider};
pub use record::RawPlayerRecord;

use crate::models::PlayerId;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Invalid player record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error("Duplicate player id in roster: {0}")]
    DuplicatePlayer(PlayerId),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
