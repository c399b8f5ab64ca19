use serde::{Deserialize, Serialize};

use super::ids::PlayerId;

/// Intrinsic availability of a player as reported by the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    #[default]
    Available,
    Injured,
    Suspended,
}

/// Status shown next to a roster entry while a lineup is being built.
///
/// `Assigned` only exists here: it is derived from the board, never read
/// from the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerView {
    Available,
    Assigned,
    Injured,
    Suspended,
}

impl From<PlayerStatus> for PlayerView {
    fn from(status: PlayerStatus) -> Self {
        match status {
            PlayerStatus::Available => PlayerView::Available,
            PlayerStatus::Injured => PlayerView::Injured,
            PlayerStatus::Suspended => PlayerView::Suspended,
        }
    }
}

/// Player as consumed by the lineup engine.
///
/// Built only through the roster boundary (`roster::RawPlayerRecord`), so every
/// field here is already validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// National ID / federation code shown on the token when there is no photo.
    pub identification: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub status: PlayerStatus,
}

impl Player {
    pub fn new(
        id: impl Into<PlayerId>,
        name: impl Into<String>,
        identification: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            identification: identification.into(),
            category: category.into(),
            position: None,
            image: None,
            status: PlayerStatus::Available,
        }
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn with_status(mut self, status: PlayerStatus) -> Self {
        self.status = status;
        self
    }

    /// First word of the name, used on field tokens.
    pub fn short_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Last two characters of the identification code (token badge fallback).
    pub fn badge(&self) -> &str {
        let len = self.identification.chars().count();
        let skip = len.saturating_sub(2);
        match self.identification.char_indices().nth(skip) {
            Some((idx, _)) => &self.identification[idx..],
            None => &self.identification,
        }
    }

    /// Case-insensitive name match or substring match on identification.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&term.to_lowercase()) || self.identification.contains(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Player {
        Player::new("p1", "Juan Pablo Rendón", "1020304050", "Sub-14")
    }

    #[test]
    fn test_short_name_and_badge() {
        let player = sample();
        assert_eq!(player.short_name(), "Juan");
        assert_eq!(player.badge(), "50");

        let short = Player::new("p2", "Ana", "7", "Sub-8");
        assert_eq!(short.badge(), "7");
    }

    #[test]
    fn test_search_matches_name_or_identification() {
        let player = sample();
        assert!(player.matches_search("rendón"));
        assert!(player.matches_search("JUAN"));
        assert!(player.matches_search("30405"));
        assert!(player.matches_search("   "));
        assert!(!player.matches_search("Carlos"));
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let player = sample().with_status(PlayerStatus::Suspended);
        let json = serde_json::to_value(&player).unwrap();
        assert_eq!(json["status"], "suspended");
        assert!(json.get("position").is_none());
        assert_eq!(PlayerView::from(PlayerStatus::Injured), PlayerView::Injured);

        let keeper = sample().with_position("POR");
        assert_eq!(serde_json::to_value(&keeper).unwrap()["position"], "POR");
    }
}
