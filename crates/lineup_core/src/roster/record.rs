use serde::{Deserialize, Serialize};
use validator::Validate;

use super::RosterError;
use crate::models::{Player, PlayerId, PlayerStatus};

/// Player row as stored by the hosted backend (`players` table).
///
/// Field names follow the table columns; nothing here is trusted until
/// [`RawPlayerRecord::into_player`] has run.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RawPlayerRecord {
    #[validate(length(min = 1, max = 64))]
    pub id: String,
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(min = 1, max = 32))]
    pub identification: String,
    #[validate(length(min = 1, max = 32))]
    pub category: String,
    #[serde(default)]
    #[validate(length(max = 16))]
    pub position: Option<String>,
    #[serde(default)]
    #[validate(length(max = 2048))]
    pub image_url: Option<String>,
    /// `active`, `injured`, `suspended`; anything else keeps the player off call-ups.
    #[serde(default = "default_raw_status")]
    pub status: String,
}

fn default_raw_status() -> String {
    "active".to_string()
}

impl RawPlayerRecord {
    /// Maps the backend status column; `None` means "not eligible for call-ups".
    pub fn eligible_status(&self) -> Option<PlayerStatus> {
        match self.status.trim().to_ascii_lowercase().as_str() {
            "active" | "available" => Some(PlayerStatus::Available),
            "injured" => Some(PlayerStatus::Injured),
            "suspended" => Some(PlayerStatus::Suspended),
            _ => None,
        }
    }

    /// Validate and convert. Returns `Ok(None)` for well-formed but ineligible rows.
    pub fn into_player(mut self) -> Result<Option<Player>, RosterError> {
        // Length rules apply to the trimmed values; a blank cell is an empty cell.
        for field in [&mut self.id, &mut self.name, &mut self.identification, &mut self.category] {
            *field = field.trim().to_string();
        }

        if let Err(errors) = self.validate() {
            return Err(RosterError::InvalidRecord { id: self.id.clone(), reason: errors.to_string() });
        }

        let Some(status) = self.eligible_status() else {
            return Ok(None);
        };

        let blank_to_none = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        Ok(Some(Player {
            id: PlayerId::new(self.id),
            name: self.name,
            identification: self.identification,
            category: self.category,
            position: blank_to_none(self.position),
            image: blank_to_none(self.image_url),
            status,
        }))
    }
}
