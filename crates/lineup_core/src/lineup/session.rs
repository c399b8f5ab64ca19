//! One editing session of the call-up board: roster snapshot, engine and save status.

use serde::Serialize;
use tracing::{info, warn};

use super::board::{BoardMode, BoardSummary, LineupBoard};
use super::confirm::{Confirm, Decision};
use super::drag::{DragGesture, DropOutcome, IgnoreReason};
use crate::callup::{CallUp, CallUpSink, Clock, SaveReceipt, SinkError};
use crate::error::{LineupError, Result};
use crate::models::{Player, PlayerId, PlayerView};
use crate::roster::{Roster, RosterProvider};
use crate::tactics::FormationCatalog;

/// Lifecycle of the explicit save action.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SaveStatus {
    #[default]
    Idle,
    Pending,
    Saved(SaveReceipt),
    Failed(String),
}

/// One row of the roster panel.
#[derive(Debug, Clone, Serialize)]
pub struct RosterEntry<'a> {
    pub player: &'a Player,
    pub view: PlayerView,
    /// Placed players are moved from where they are, not from the list.
    pub draggable: bool,
}

#[derive(Debug, Clone)]
pub struct BoardSession {
    category: String,
    roster: Roster,
    board: LineupBoard,
    status: SaveStatus,
}

impl BoardSession {
    /// Fetch the roster snapshot and open a board on `formation_id`.
    pub fn open(
        provider: &dyn RosterProvider,
        category: &str,
        formation_id: &str,
        mode: BoardMode,
    ) -> Result<Self> {
        let formation = FormationCatalog::lookup(formation_id)?;
        let roster = Roster::new(provider.players_for_category(category)?)?;

        info!("Opened {} board for {} with {} players", formation.id, category, roster.len());
        Ok(Self::with_roster(category, roster, LineupBoard::new(formation.clone(), mode)))
    }

    pub fn with_roster(category: &str, roster: Roster, board: LineupBoard) -> Self {
        Self { category: category.to_string(), roster, board, status: SaveStatus::Idle }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn board(&self) -> &LineupBoard {
        &self.board
    }

    pub fn status(&self) -> &SaveStatus {
        &self.status
    }

    pub fn summary(&self) -> BoardSummary {
        self.board.summary()
    }

    /// Apply a gesture for a player from the roster snapshot.
    pub fn apply_drop(&mut self, gesture: &DragGesture) -> DropOutcome {
        if !self.roster.contains(&gesture.player) {
            return DropOutcome::Ignored(IgnoreReason::UnknownPlayer);
        }
        let outcome = self.board.apply_drop(gesture);
        if outcome.changed() {
            self.mark_edited();
        }
        outcome
    }

    pub fn remove_from_slot(&mut self, slot: &str) -> Option<PlayerId> {
        let removed = self.board.remove_from_slot(slot);
        if removed.is_some() {
            self.mark_edited();
        }
        removed
    }

    /// Any edit invalidates the last save result.
    fn mark_edited(&mut self) {
        self.status = SaveStatus::Idle;
    }

    pub fn player_view(&self, player: &Player) -> PlayerView {
        if self.board.is_used(&player.id) {
            PlayerView::Assigned
        } else {
            player.status.into()
        }
    }

    /// Roster panel rows filtered by the search box.
    pub fn roster_view<'a>(&'a self, search: &'a str) -> Vec<RosterEntry<'a>> {
        self.roster
            .search(search)
            .map(|player| {
                let view = self.player_view(player);
                RosterEntry { player, view, draggable: view != PlayerView::Assigned }
            })
            .collect()
    }

    pub fn reset(&mut self, confirm: &mut impl Confirm) -> Decision {
        let decision = self.board.reset(confirm);
        if decision == Decision::Applied {
            self.mark_edited();
        }
        decision
    }

    pub fn select_formation(&mut self, formation_id: &str, confirm: &mut impl Confirm) -> Result<Decision> {
        let formation = FormationCatalog::lookup(formation_id)?;
        let decision = self.board.select_formation(formation.clone(), confirm);
        if decision == Decision::Applied {
            self.mark_edited();
        }
        Ok(decision)
    }

    /// Validate and build the call-up; marks the save as pending.
    ///
    /// A validation failure leaves the status `Idle`: nothing was sent.
    /// Callers that persist off-thread pair this with [`BoardSession::finish_save`].
    pub fn begin_save(&mut self, clock: &dyn Clock) -> Result<CallUp> {
        match self.board.build_call_up(&self.category, clock.now()) {
            Ok(call_up) => {
                self.status = SaveStatus::Pending;
                Ok(call_up)
            }
            Err(err) => {
                self.status = SaveStatus::Idle;
                Err(err.into())
            }
        }
    }

    pub fn finish_save(&mut self, result: std::result::Result<SaveReceipt, SinkError>) -> Result<SaveReceipt> {
        match result {
            Ok(receipt) => {
                info!("Call-up for {} saved ({})", self.category, receipt.id);
                self.status = SaveStatus::Saved(receipt.clone());
                Ok(receipt)
            }
            Err(err) => {
                warn!("Saving call-up for {} failed: {}", self.category, err);
                self.status = SaveStatus::Failed(err.to_string());
                Err(LineupError::Persistence(err))
            }
        }
    }

    /// Validate, build and persist. The board is left untouched whatever happens.
    pub fn save(&mut self, sink: &mut dyn CallUpSink, clock: &dyn Clock) -> Result<SaveReceipt> {
        let call_up = self.begin_save(clock)?;
        let result = sink.persist(&call_up, clock);
        self.finish_save(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callup::{FixedClock, MemorySink};
    use crate::lineup::{DragOrigin, DropTarget};
    use crate::models::PlayerStatus;
    use crate::roster::{InMemoryRoster, RawPlayerRecord};
    use chrono::{TimeZone, Utc};

    fn provider(count: usize) -> InMemoryRoster {
        let mut records: Vec<RawPlayerRecord> = (1..=count)
            .map(|i| RawPlayerRecord {
                id: format!("p{}", i),
                name: format!("Jugador {}", i),
                identification: format!("900{:02}", i),
                category: "Sub-16".to_string(),
                position: None,
                image_url: None,
                status: "active".to_string(),
            })
            .collect();
        records[0].status = "injured".to_string();
        InMemoryRoster::new(records)
    }

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap())
    }

    fn full_session() -> BoardSession {
        let mut session = BoardSession::open(&provider(11), "Sub-16", "4-3-3", BoardMode::CallUp).unwrap();
        let slots: Vec<String> = session.board().formation().slot_ids().map(|s| s.to_string()).collect();
        for (i, slot) in slots.iter().enumerate() {
            session.apply_drop(&DragGesture::place(format!("p{}", i + 1), slot));
        }
        session
    }

    #[test]
    fn test_open_rejects_unknown_formation() {
        let err = BoardSession::open(&provider(3), "Sub-16", "9-9-9", BoardMode::CallUp).unwrap_err();
        assert!(matches!(err, LineupError::UnknownFormation(_)));
    }

    #[test]
    fn test_unknown_player_is_ignored() {
        let mut session = BoardSession::open(&provider(3), "Sub-16", "4-3-3", BoardMode::CallUp).unwrap();
        let outcome = session.apply_drop(&DragGesture::place("ghost", "gk"));
        assert_eq!(outcome, DropOutcome::Ignored(IgnoreReason::UnknownPlayer));
        assert!(session.board().is_empty());
    }

    #[test]
    fn test_roster_view_marks_assigned_and_keeps_intrinsic_status() {
        let mut session = BoardSession::open(&provider(3), "Sub-16", "4-3-3", BoardMode::WithBench).unwrap();
        session.apply_drop(&DragGesture::place("p2", "gk"));
        session.apply_drop(&DragGesture::new("p3", DragOrigin::Roster, DropTarget::Bench));

        let rows = session.roster_view("");
        let views: Vec<_> = rows.iter().map(|r| (r.player.id.as_str(), r.view, r.draggable)).collect();
        assert_eq!(
            views,
            vec![
                ("p1", PlayerView::Injured, true),
                ("p2", PlayerView::Assigned, false),
                ("p3", PlayerView::Assigned, false),
            ]
        );
        assert_eq!(session.roster().get("p1").map(|p| p.status), Some(PlayerStatus::Injured));
        assert_eq!(session.roster_view("Jugador 2").len(), 1);
    }

    #[test]
    fn test_save_success_emits_full_call_up() {
        let mut session = full_session();
        let mut sink = MemorySink::new();

        let receipt = session.save(&mut sink, &clock()).unwrap();
        assert_eq!(session.status(), &SaveStatus::Saved(receipt));

        let saved = &sink.saved()[0];
        assert_eq!(saved.assignments.len(), 11);
        assert_eq!(saved.category, "Sub-16");
        assert_eq!(saved.created_at, clock().0);
    }

    #[test]
    fn test_validation_failure_does_not_call_sink() {
        let mut session = full_session();
        session.remove_from_slot("st");
        let mut sink = MemorySink::new();

        let err = session.save(&mut sink, &clock()).unwrap_err();
        assert!(matches!(err, LineupError::Validation(_)));
        assert_eq!(sink.attempts(), 0);
        assert_eq!(session.status(), &SaveStatus::Idle);
    }

    #[test]
    fn test_failed_save_keeps_board_and_can_retry() {
        let mut session = full_session();
        let before = session.board().assignments().clone();
        let mut sink = MemorySink::failing("network down");

        let err = session.save(&mut sink, &clock()).unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(session.status(), &SaveStatus::Failed("Rejected by backend: network down".to_string()));
        assert_eq!(session.board().assignments(), &before);

        sink.recover();
        session.save(&mut sink, &clock()).unwrap();
        assert_eq!(sink.saved()[0].assignment_map(), before);
    }

    #[test]
    fn test_edit_after_save_clears_saved_status() {
        let mut session = full_session();
        let mut sink = MemorySink::new();
        session.save(&mut sink, &clock()).unwrap();

        let ignored = session.apply_drop(&DragGesture::place("p1", "st"));
        assert!(!ignored.changed());
        assert!(matches!(session.status(), SaveStatus::Saved(_)));

        session.apply_drop(&DragGesture::drop_outside("p1", "gk"));
        assert_eq!(session.status(), &SaveStatus::Idle);

        let err = session.save(&mut sink, &clock()).unwrap_err();
        assert!(matches!(err, LineupError::Validation(_)));
        assert_eq!(session.status(), &SaveStatus::Idle);
        assert_eq!(sink.attempts(), 1);
    }

    #[test]
    fn test_validation_failure_clears_failed_status() {
        let mut session = full_session();
        let mut sink = MemorySink::failing("offline");
        session.save(&mut sink, &clock()).unwrap_err();
        assert!(matches!(session.status(), SaveStatus::Failed(_)));

        session.remove_from_slot("st");
        assert_eq!(session.status(), &SaveStatus::Idle);
        session.save(&mut sink, &clock()).unwrap_err();
        assert_eq!(session.status(), &SaveStatus::Idle);
    }

    #[test]
    fn test_reset_and_switch_after_save_clear_saved_status() {
        let mut accept = |_: &crate::lineup::DestructiveAction| true;
        let mut decline = |_: &crate::lineup::DestructiveAction| false;

        let mut session = full_session();
        session.save(&mut MemorySink::new(), &clock()).unwrap();
        assert_eq!(session.reset(&mut decline), Decision::Declined);
        assert!(matches!(session.status(), SaveStatus::Saved(_)));
        assert_eq!(session.reset(&mut accept), Decision::Applied);
        assert_eq!(session.status(), &SaveStatus::Idle);

        let mut session = full_session();
        session.save(&mut MemorySink::new(), &clock()).unwrap();
        assert_eq!(session.select_formation("4-3-3", &mut accept).unwrap(), Decision::Unchanged);
        assert!(matches!(session.status(), SaveStatus::Saved(_)));
        assert_eq!(session.select_formation("3-4-3", &mut accept).unwrap(), Decision::Applied);
        assert_eq!(session.status(), &SaveStatus::Idle);
    }

    #[test]
    fn test_begin_save_marks_pending() {
        let mut session = full_session();
        let call_up = session.begin_save(&clock()).unwrap();
        assert_eq!(session.status(), &SaveStatus::Pending);
        assert_eq!(call_up.assignments.len(), 11);

        session.finish_save(Err(SinkError::Rejected("timeout".into()))).unwrap_err();
        assert!(matches!(session.status(), SaveStatus::Failed(_)));
    }

    #[test]
    fn test_select_formation_via_catalog() {
        let mut session = full_session();
        let mut decline = |_: &crate::lineup::DestructiveAction| false;
        assert_eq!(session.select_formation("4-4-2", &mut decline).unwrap(), Decision::Declined);
        assert_eq!(session.board().assignments().len(), 11);

        let mut accept = |_: &crate::lineup::DestructiveAction| true;
        assert!(session.select_formation("5-5-0", &mut accept).is_err());
        assert_eq!(session.select_formation("4-4-2", &mut accept).unwrap(), Decision::Applied);
        assert!(session.board().assignments().is_empty());
    }
}
