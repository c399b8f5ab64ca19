use chrono::{DateTime, Utc};

use super::board::LineupBoard;
use crate::callup::{CallUp, CallUpEntry};
use crate::error::ValidationError;

impl LineupBoard {
    /// Save-time checks: keeper slots first, then completeness.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(slot) = self.formation().keeper_slots().find(|s| self.occupant(s.id.as_str()).is_none()) {
            return Err(ValidationError::MissingGoalkeeper { slot: slot.id.clone() });
        }

        let missing = self.formation().slot_count().saturating_sub(self.assignments().len());
        if missing > 0 {
            return Err(ValidationError::IncompleteLineup { missing });
        }

        Ok(())
    }

    /// Validate and snapshot the board into a call-up. The board is not modified.
    pub fn build_call_up(&self, category: &str, created_at: DateTime<Utc>) -> Result<CallUp, ValidationError> {
        self.validate()?;

        let assignments = self
            .formation()
            .slots
            .iter()
            .filter_map(|slot| {
                self.occupant(slot.id.as_str())
                    .map(|player| CallUpEntry { slot_id: slot.id.clone(), player_id: player.clone() })
            })
            .collect();

        Ok(CallUp {
            category: category.to_string(),
            formation_id: self.formation().id.clone(),
            assignments,
            created_at,
        })
    }
}
