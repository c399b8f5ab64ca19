//! The lineup assignment engine.
//!
//! State is `(formation, assignments, bench)`. [`LineupBoard::apply_drop`] is the
//! only mutator for placements; reset and formation switch go through [`Confirm`].
//!
//! Invariants held after every operation:
//! - a player id appears at most once across `assignments` values,
//! - a player is never both on the pitch and on the bench,
//! - every assignment key is a slot of the active formation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::confirm::{Confirm, Decision, DestructiveAction};
use super::drag::{Displaced, DragGesture, DragOrigin, DropOutcome, DropTarget, IgnoreReason};
use crate::models::{PlayerId, SlotId};
use crate::tactics::Formation;

/// Whether the board has a bench. Decides what happens to a bumped occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BoardMode {
    /// No bench: a bumped occupant goes back to the unassigned pool.
    #[default]
    CallUp,
    /// Bench zone present: a bumped occupant is moved to the bench.
    WithBench,
}

impl BoardMode {
    pub fn has_bench(&self) -> bool {
        matches!(self, BoardMode::WithBench)
    }
}

/// Counters shown in the board's summary panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSummary {
    pub keepers_placed: usize,
    pub keeper_slots: usize,
    pub occupied: usize,
    pub total: usize,
    pub benched: usize,
}

impl BoardSummary {
    pub fn missing(&self) -> usize {
        self.total.saturating_sub(self.occupied)
    }

    pub fn is_complete(&self) -> bool {
        self.occupied == self.total && self.keepers_placed == self.keeper_slots
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineupBoard {
    formation: Formation,
    mode: BoardMode,
    assignments: BTreeMap<SlotId, PlayerId>,
    bench: Vec<PlayerId>,
}

impl LineupBoard {
    pub fn new(formation: Formation, mode: BoardMode) -> Self {
        Self { formation, mode, assignments: BTreeMap::new(), bench: Vec::new() }
    }

    pub fn formation(&self) -> &Formation {
        &self.formation
    }

    pub fn mode(&self) -> BoardMode {
        self.mode
    }

    pub fn assignments(&self) -> &BTreeMap<SlotId, PlayerId> {
        &self.assignments
    }

    pub fn bench(&self) -> &[PlayerId] {
        &self.bench
    }

    pub fn occupant(&self, slot: &str) -> Option<&PlayerId> {
        self.assignments.get(slot)
    }

    pub fn slot_of(&self, player: &PlayerId) -> Option<&SlotId> {
        self.assignments.iter().find(|(_, p)| *p == player).map(|(slot, _)| slot)
    }

    pub fn is_benched(&self, player: &PlayerId) -> bool {
        self.bench.contains(player)
    }

    /// On the pitch or on the bench.
    pub fn is_used(&self, player: &PlayerId) -> bool {
        self.slot_of(player).is_some() || self.is_benched(player)
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty() && self.bench.is_empty()
    }

    pub fn summary(&self) -> BoardSummary {
        let keeper_slots: Vec<_> = self.formation.keeper_slots().collect();
        BoardSummary {
            keepers_placed: keeper_slots.iter().filter(|s| self.assignments.contains_key(&s.id)).count(),
            keeper_slots: keeper_slots.len(),
            occupied: self.assignments.len(),
            total: self.formation.slot_count(),
            benched: self.bench.len(),
        }
    }

    /// Apply one drag-and-drop gesture.
    ///
    /// Invalid or stale gestures are ignored, never errors.
    pub fn apply_drop(&mut self, gesture: &DragGesture) -> DropOutcome {
        let outcome = self.transition(gesture);
        if let DropOutcome::Ignored(reason) = &outcome {
            debug!("Ignored drop of {} ({:?} -> {:?}): {:?}", gesture.player, gesture.origin, gesture.target, reason);
        }
        outcome
    }

    fn transition(&mut self, gesture: &DragGesture) -> DropOutcome {
        let player = &gesture.player;

        if let Some(reason) = self.check_origin(player, &gesture.origin) {
            return DropOutcome::Ignored(reason);
        }

        match (&gesture.origin, &gesture.target) {
            (DragOrigin::Slot(source), DropTarget::Outside) => {
                self.assignments.remove(source);
                DropOutcome::Removed { slot: source.clone() }
            }
            (_, DropTarget::Outside) => DropOutcome::Ignored(IgnoreReason::NothingToRemove),

            (_, DropTarget::Slot(target)) if !self.formation.contains(target.as_str()) => {
                DropOutcome::Ignored(IgnoreReason::UnknownSlot(target.clone()))
            }
            (DragOrigin::Slot(source), DropTarget::Slot(target)) if source == target => {
                DropOutcome::Ignored(IgnoreReason::SameSlot)
            }
            (DragOrigin::Slot(source), DropTarget::Slot(target)) => {
                let occupant = self.assignments.insert(target.clone(), player.clone());
                match &occupant {
                    Some(other) => self.assignments.insert(source.clone(), other.clone()),
                    None => self.assignments.remove(source),
                };
                DropOutcome::Moved { from: source.clone(), to: target.clone(), swapped_with: occupant }
            }
            (origin, DropTarget::Slot(target)) => {
                if matches!(origin, DragOrigin::Bench) {
                    self.bench.retain(|p| p != player);
                }
                let displaced = self.assignments.insert(target.clone(), player.clone()).map(|bumped| {
                    if self.mode.has_bench() {
                        self.bench.push(bumped.clone());
                        Displaced::ToBench(bumped)
                    } else {
                        Displaced::ToPool(bumped)
                    }
                });
                DropOutcome::Placed { slot: target.clone(), displaced }
            }

            (_, DropTarget::Bench) if !self.mode.has_bench() => DropOutcome::Ignored(IgnoreReason::NoBench),
            (DragOrigin::Bench, DropTarget::Bench) => DropOutcome::Ignored(IgnoreReason::AlreadyOnBench),
            (DragOrigin::Slot(source), DropTarget::Bench) => {
                self.assignments.remove(source);
                self.push_bench(player);
                DropOutcome::Benched { from: Some(source.clone()) }
            }
            (DragOrigin::Roster, DropTarget::Bench) => {
                self.push_bench(player);
                DropOutcome::Benched { from: None }
            }
        }
    }

    /// Reject gestures whose origin disagrees with the engine's state.
    fn check_origin(&self, player: &PlayerId, origin: &DragOrigin) -> Option<IgnoreReason> {
        match origin {
            DragOrigin::Roster if self.is_used(player) => Some(IgnoreReason::AlreadyPlaced),
            DragOrigin::Roster => None,
            DragOrigin::Bench if !self.is_benched(player) => Some(IgnoreReason::StaleOrigin),
            DragOrigin::Bench => None,
            DragOrigin::Slot(source) if self.assignments.get(source) != Some(player) => {
                Some(IgnoreReason::StaleOrigin)
            }
            DragOrigin::Slot(_) => None,
        }
    }

    fn push_bench(&mut self, player: &PlayerId) {
        if !self.bench.contains(player) {
            self.bench.push(player.clone());
        }
    }

    /// The remove button on a field token.
    ///
    /// With a bench the player goes there; otherwise back to the pool.
    pub fn remove_from_slot(&mut self, slot: &str) -> Option<PlayerId> {
        let player = self.assignments.remove(slot)?;
        if self.mode.has_bench() {
            self.push_bench(&player);
        }
        Some(player)
    }

    /// Take a player off the bench back into the pool.
    pub fn release_from_bench(&mut self, player: &PlayerId) -> bool {
        let before = self.bench.len();
        self.bench.retain(|p| p != player);
        self.bench.len() != before
    }

    /// Clear placements and bench after confirmation.
    pub fn reset(&mut self, confirm: &mut impl Confirm) -> Decision {
        let action = DestructiveAction::Reset { placed: self.assignments.len(), benched: self.bench.len() };
        if !confirm.confirm(&action) {
            return Decision::Declined;
        }
        self.clear();
        info!("Lineup reset ({})", self.formation.id);
        Decision::Applied
    }

    /// Switch formation. Non-empty state needs confirmation and is discarded.
    pub fn select_formation(&mut self, formation: Formation, confirm: &mut impl Confirm) -> Decision {
        if formation.id == self.formation.id {
            return Decision::Unchanged;
        }

        if !self.is_empty() {
            let action = DestructiveAction::SwitchFormation {
                from: self.formation.id.clone(),
                to: formation.id.clone(),
                placed: self.assignments.len(),
                benched: self.bench.len(),
            };
            if !confirm.confirm(&action) {
                return Decision::Declined;
            }
        }

        info!("Formation switched {} -> {}", self.formation.id, formation.id);
        self.clear();
        self.formation = formation;
        Decision::Applied
    }

    fn clear(&mut self) {
        self.assignments.clear();
        self.bench.clear();
    }
}


#[cfg(test)]
mod proptests {
    use std::collections::HashSet;

    use super::*;
    use crate::tactics::FormationCatalog;
    use proptest::prelude::*;

    const SLOTS: [&str; 12] = ["gk", "lb", "lcb", "rcb", "rb", "cdm", "lcm", "rcm", "lw", "st", "rw", "lst"];

    fn slot_id() -> impl Strategy<Value = SlotId> {
        (0..SLOTS.len()).prop_map(|i| SlotId::from(SLOTS[i]))
    }

    fn origin() -> impl Strategy<Value = DragOrigin> {
        prop_oneof![
            Just(DragOrigin::Roster),
            Just(DragOrigin::Bench),
            slot_id().prop_map(DragOrigin::Slot),
        ]
    }

    fn target() -> impl Strategy<Value = DropTarget> {
        prop_oneof![
            Just(DropTarget::Outside),
            Just(DropTarget::Bench),
            slot_id().prop_map(DropTarget::Slot),
        ]
    }

    fn gesture() -> impl Strategy<Value = DragGesture> {
        (0..8u8, origin(), target()).prop_map(|(p, origin, target)| DragGesture::new(format!("p{}", p), origin, target))
    }

    fn assert_invariants(board: &LineupBoard) -> Result<(), TestCaseError> {
        let placed: Vec<&PlayerId> = board.assignments().values().collect();
        let unique: HashSet<&PlayerId> = placed.iter().copied().collect();
        prop_assert_eq!(placed.len(), unique.len(), "player in two slots");

        let bench: HashSet<&PlayerId> = board.bench().iter().collect();
        prop_assert_eq!(bench.len(), board.bench().len(), "duplicate on bench");
        prop_assert!(unique.is_disjoint(&bench), "player on pitch and bench");

        for slot in board.assignments().keys() {
            prop_assert!(board.formation().contains(slot.as_str()));
        }
        Ok(())
    }

    proptest! {
        /// Property: no gesture sequence can break the board invariants
        #[test]
        fn prop_invariants_hold(gestures in prop::collection::vec(gesture(), 0..60), with_bench in any::<bool>()) {
            let mode = if with_bench { BoardMode::WithBench } else { BoardMode::CallUp };
            let mut board = LineupBoard::new(FormationCatalog::lookup("4-3-3").unwrap().clone(), mode);
            for g in &gestures {
                board.apply_drop(g);
                assert_invariants(&board)?;
            }
            if !with_bench {
                prop_assert!(board.bench().is_empty());
            }
        }

        /// Property: ignored gestures leave the board untouched
        #[test]
        fn prop_ignored_is_noop(gestures in prop::collection::vec(gesture(), 1..40)) {
            let mut board = LineupBoard::new(FormationCatalog::lookup("4-3-3").unwrap().clone(), BoardMode::WithBench);
            for g in &gestures {
                let before = board.clone();
                if !board.apply_drop(g).changed() {
                    prop_assert_eq!(&before, &board);
                }
            }
        }

        /// Property: swapping two occupied slots twice restores the board
        #[test]
        fn prop_swap_is_involution(a in 0..11usize, b in 0..11usize) {
            prop_assume!(a != b);
            let mut board = LineupBoard::new(FormationCatalog::lookup("4-3-3").unwrap().clone(), BoardMode::CallUp);
            board.apply_drop(&DragGesture::place("x", SLOTS[a]));
            board.apply_drop(&DragGesture::place("y", SLOTS[b]));
            let start = board.clone();

            board.apply_drop(&DragGesture::shift("x", SLOTS[a], SLOTS[b]));
            prop_assert_eq!(board.occupant(SLOTS[a]), Some(&PlayerId::from("y")));
            board.apply_drop(&DragGesture::shift("x", SLOTS[b], SLOTS[a]));
            prop_assert_eq!(start, board);
        }
    }
}
