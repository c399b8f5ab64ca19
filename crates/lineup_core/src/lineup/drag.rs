//! Drag-and-drop gesture vocabulary.
//!
//! A gesture is a plain value handed to [`LineupBoard::apply_drop`](super::LineupBoard::apply_drop);
//! there is no "currently dragged player" stored anywhere else.

use serde::{Deserialize, Serialize};

use crate::models::{PlayerId, SlotId};

/// Where the token was picked up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragOrigin {
    Roster,
    Bench,
    Slot(SlotId),
}

/// Where the token was released.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropTarget {
    /// Released over no drop zone.
    #[serde(alias = "none")]
    Outside,
    Bench,
    Slot(SlotId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragGesture {
    pub player: PlayerId,
    pub origin: DragOrigin,
    #[serde(alias = "destination")]
    pub target: DropTarget,
}

impl DragGesture {
    pub fn new(player: impl Into<PlayerId>, origin: DragOrigin, target: DropTarget) -> Self {
        Self { player: player.into(), origin, target }
    }

    /// Roster → slot, the most common gesture.
    pub fn place(player: impl Into<PlayerId>, slot: &str) -> Self {
        Self::new(player, DragOrigin::Roster, DropTarget::Slot(SlotId::from(slot)))
    }

    /// Slot → slot.
    pub fn shift(player: impl Into<PlayerId>, from: &str, to: &str) -> Self {
        Self::new(player, DragOrigin::Slot(SlotId::from(from)), DropTarget::Slot(SlotId::from(to)))
    }

    /// Slot → off the pitch.
    pub fn drop_outside(player: impl Into<PlayerId>, from: &str) -> Self {
        Self::new(player, DragOrigin::Slot(SlotId::from(from)), DropTarget::Outside)
    }
}

/// What happened to a player bumped out of a slot by a placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Displaced {
    ToBench(PlayerId),
    ToPool(PlayerId),
}

/// Why a drop left the board untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// Dropped back onto the slot it came from.
    SameSlot,
    /// Roster or bench token released outside any zone.
    NothingToRemove,
    AlreadyOnBench,
    /// Slot id is not part of the active formation.
    UnknownSlot(SlotId),
    /// Bench target on a board without a bench.
    NoBench,
    /// Player is not in the roster snapshot.
    UnknownPlayer,
    /// Origin does not match where the engine has the player.
    StaleOrigin,
    /// Roster token for a player already on the pitch or bench.
    AlreadyPlaced,
}

/// Result of applying one gesture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropOutcome {
    Placed { slot: SlotId, displaced: Option<Displaced> },
    /// Slot to slot; `swapped_with` is the former occupant now in `from`.
    Moved { from: SlotId, to: SlotId, swapped_with: Option<PlayerId> },
    Removed { slot: SlotId },
    Benched { from: Option<SlotId> },
    Ignored(IgnoreReason),
}

impl DropOutcome {
    pub fn changed(&self) -> bool {
        !matches!(self, DropOutcome::Ignored(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesture_json_shape() {
        let gesture: DragGesture = serde_json::from_str(
            r#"{"player":"p4","origin":{"slot":"lb"},"destination":"none"}"#,
        )
        .unwrap();
        assert_eq!(gesture, DragGesture::new("p4", DragOrigin::Slot("lb".into()), DropTarget::Outside));

        let json = serde_json::to_value(DragGesture::place("p1", "gk")).unwrap();
        assert_eq!(json["origin"], "roster");
        assert_eq!(json["target"]["slot"], "gk");
    }

    #[test]
    fn test_ignored_outcome_is_not_a_change() {
        assert!(!DropOutcome::Ignored(IgnoreReason::SameSlot).changed());
        assert!(DropOutcome::Removed { slot: "st".into() }.changed());
    }
}
