use std::collections::HashSet;

use tracing::debug;

use super::category::is_club_category;
use super::record::RawPlayerRecord;
use super::RosterError;
use crate::models::{Player, PlayerId};

/// Source of eligible players for one category.
///
/// Called once when a board opens; the result is a snapshot and is never
/// re-fetched mid-session.
pub trait RosterProvider {
    fn players_for_category(&self, category: &str) -> Result<Vec<Player>, RosterError>;
}

/// Immutable roster snapshot held by a board session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Result<Self, RosterError> {
        let mut seen = HashSet::new();
        for player in &players {
            if !seen.insert(player.id.clone()) {
                return Err(RosterError::DuplicatePlayer(player.id.clone()));
            }
        }
        Ok(Self { players })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id.as_str() == id)
    }

    pub fn contains(&self, id: &PlayerId) -> bool {
        self.get(id.as_str()).is_some()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Players matching the search box, roster order preserved.
    pub fn search<'a>(&'a self, term: &'a str) -> impl Iterator<Item = &'a Player> + 'a {
        self.players.iter().filter(move |p| p.matches_search(term))
    }
}

/// Provider over records already in memory (tests, JSON imports).
#[derive(Debug, Clone, Default)]
pub struct InMemoryRoster {
    records: Vec<RawPlayerRecord>,
}

impl InMemoryRoster {
    pub fn new(records: Vec<RawPlayerRecord>) -> Self {
        Self { records }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(json)?))
    }
}

impl RosterProvider for InMemoryRoster {
    fn players_for_category(&self, category: &str) -> Result<Vec<Player>, RosterError> {
        collect_category(self.records.iter().cloned(), category)
    }
}

/// Shared filter used by every provider: category match, validation, eligibility.
pub(crate) fn collect_category(
    records: impl IntoIterator<Item = RawPlayerRecord>,
    category: &str,
) -> Result<Vec<Player>, RosterError> {
    if !is_club_category(category) {
        return Err(RosterError::UnknownCategory(category.to_string()));
    }

    let mut players = Vec::new();
    let mut skipped = 0usize;

    for record in records {
        if record.category.trim() != category {
            continue;
        }
        match record.into_player()? {
            Some(player) => players.push(player),
            None => skipped += 1,
        }
    }

    debug!("Roster for {}: {} eligible, {} inactive skipped", category, players.len(), skipped);

    // Duplicate check happens here so providers fail at the boundary.
    Roster::new(players).map(|roster| roster.players)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlayerStatus;

    fn raw(id: &str, category: &str, status: &str) -> RawPlayerRecord {
        RawPlayerRecord {
            id: id.to_string(),
            name: format!("Jugador {}", id),
            identification: format!("10{}", id),
            category: category.to_string(),
            position: None,
            image_url: None,
            status: status.to_string(),
        }
    }

    #[test]
    fn test_provider_filters_category_and_inactive() {
        let provider = InMemoryRoster::new(vec![
            raw("1", "Sub-14", "active"),
            raw("2", "Sub-16", "active"),
            raw("3", "Sub-14", "inactive"),
            raw("4", "Sub-14", "injured"),
        ]);

        let players = provider.players_for_category("Sub-14").unwrap();
        let ids: Vec<_> = players.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
        assert_eq!(players[1].status, PlayerStatus::Injured);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let provider = InMemoryRoster::new(vec![raw("1", "Veteranos", "active")]);
        let err = provider.players_for_category("Veteranos").unwrap_err();
        assert!(matches!(err, RosterError::UnknownCategory(_)));
    }

    #[test]
    fn test_blank_record_is_rejected_at_the_boundary() {
        let mut blank = raw("   ", "Sub-12", "active");
        blank.name = "   ".to_string();
        blank.identification = "   ".to_string();
        let err = InMemoryRoster::new(vec![blank]).players_for_category("Sub-12").unwrap_err();
        assert!(matches!(err, RosterError::InvalidRecord { .. }));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let provider = InMemoryRoster::new(vec![raw("1", "Sub-14", "active"), raw("1", "Sub-14", "active")]);
        let err = provider.players_for_category("Sub-14").unwrap_err();
        assert!(matches!(err, RosterError::DuplicatePlayer(id) if id.as_str() == "1"));
    }

    #[test]
    fn test_from_json_and_search() {
        let provider = InMemoryRoster::from_json(
            r#"[
                {"id":"a","name":"Camilo Rojas","identification":"555111","category":"Sub-20","status":"active"},
                {"id":"b","name":"Andrés Mejía","identification":"777222","category":"Sub-20","status":"active"}
            ]"#,
        )
        .unwrap();

        let roster = Roster::new(provider.players_for_category("Sub-20").unwrap()).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.search("camilo").count(), 1);
        assert_eq!(roster.search("7772").next().map(|p| p.id.as_str()), Some("b"));
        assert_eq!(roster.search("").count(), 2);
        assert!(roster.contains(&PlayerId::from("a")));
    }
}
