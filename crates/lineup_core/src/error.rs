use thiserror::Error;

use crate::callup::SinkError;
use crate::models::SlotId;
use crate::roster::RosterError;

/// Save-time validation failures. User-correctable, never mutate state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing goalkeeper in slot {slot}")]
    MissingGoalkeeper { slot: SlotId },

    #[error("Incomplete lineup: {missing} players missing")]
    IncompleteLineup { missing: usize },
}

#[derive(Error, Debug)]
pub enum LineupError {
    #[error("Unknown formation: {0}")]
    UnknownFormation(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),

    #[error("Persistence failed: {0}")]
    Persistence(#[from] SinkError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LineupError {
    /// Every lineup error leaves the board intact; only some are worth retrying as-is.
    pub fn is_retryable(&self) -> bool {
        match self {
            LineupError::Persistence(err) => err.is_recoverable(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, LineupError>;
