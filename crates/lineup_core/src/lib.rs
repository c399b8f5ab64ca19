//! # lineup_core - Call-up board engine for club categories
//!
//! Coaches pick a formation, drag players from a category roster onto the
//! formation slots and save the result as a call-up (convocatoria).
//!
//! ## Features
//! - Drag-and-drop assignment engine with explicit gestures
//! - Built-in formation catalog with pitch coordinates
//! - Save-time validation (goalkeeper first, then completeness)
//! - Pluggable roster providers and call-up sinks (JSON, compressed archive)
//! - JSON API for UI bridges

pub mod api;
pub mod callup;
pub mod config;
pub mod error;
pub mod i18n;
pub mod lineup;
pub mod models;
pub mod roster;
pub mod tactics;

// Re-export main API functions
pub use api::{build_call_up_json, list_formations_json, replay_gestures_json};
pub use error::{LineupError, Result, ValidationError};

// Re-export engine types
pub use lineup::{
    BoardMode, BoardSession, BoardSummary, Confirm, Decision, DestructiveAction, DragGesture,
    DragOrigin, DropOutcome, DropTarget, LineupBoard, SaveStatus,
};

// Re-export domain types
pub use models::{Player, PlayerId, PlayerStatus, SlotId};
pub use tactics::{Formation, FormationCatalog, RoleCategory, Slot};

// Re-export persistence
pub use callup::{ArchiveSink, CallUp, CallUpEntry, CallUpSink, Clock, JsonFileSink, SaveReceipt, SinkError};
pub use config::BoardConfig;
pub use roster::{CsvRoster, InMemoryRoster, Roster, RosterProvider};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
