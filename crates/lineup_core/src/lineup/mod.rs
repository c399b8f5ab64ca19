//! Lineup assignment engine and the board session around it.

pub mod board;
pub mod confirm;
pub mod drag;
pub mod session;
pub mod validation;

pub use board::{BoardMode, BoardSummary, LineupBoard};
pub use confirm::{Confirm, Decision, DestructiveAction};
pub use drag::{Displaced, DragGesture, DragOrigin, DropOutcome, DropTarget, IgnoreReason};
pub use session::{BoardSession, RosterEntry, SaveStatus};
