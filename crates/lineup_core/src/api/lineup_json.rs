//! JSON API for the call-up board
//!
//! String in, string out, for hosts that drive the engine over a bridge
//! (web view, FFI). Every response uses the same `ApiResponse` envelope.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::callup::CallUp;
use crate::error::{LineupError, ValidationError};
use crate::lineup::{BoardMode, BoardSummary, DragGesture, DropOutcome, LineupBoard};
use crate::models::{PlayerId, SlotId};
use crate::tactics::{Formation, FormationCatalog};

pub const API_VERSION: &str = "v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub schema_version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    pub details: Option<HashMap<String, serde_json::Value>>,
}

impl<T: Serialize> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), error: None, schema_version: API_VERSION.to_string() }
    }

    fn err(error: ApiError) -> Self {
        Self { success: false, data: None, error: Some(error), schema_version: API_VERSION.to_string() }
    }

    fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"success":false,"error":{"code":"SERIALIZATION","message":"Serialization failed"}}"#.to_string())
    }
}

impl ApiError {
    fn new(code: &str, message: impl Into<String>) -> Self {
        Self { code: code.to_string(), message: message.into(), details: None }
    }

    fn with_detail(mut self, key: &str, value: serde_json::Value) -> Self {
        self.details.get_or_insert_with(HashMap::new).insert(key.to_string(), value);
        self
    }
}

impl From<&LineupError> for ApiError {
    fn from(error: &LineupError) -> Self {
        match error {
            LineupError::UnknownFormation(id) => {
                ApiError::new("UNKNOWN_FORMATION", error.to_string()).with_detail("formation_id", id.as_str().into())
            }
            LineupError::Validation(ValidationError::MissingGoalkeeper { slot }) => {
                ApiError::new("MISSING_GOALKEEPER", error.to_string()).with_detail("slot_id", slot.as_str().into())
            }
            LineupError::Validation(ValidationError::IncompleteLineup { missing }) => {
                ApiError::new("INCOMPLETE_LINEUP", error.to_string()).with_detail("missing", (*missing).into())
            }
            LineupError::Roster(_) => ApiError::new("ROSTER", error.to_string()),
            LineupError::Persistence(_) => ApiError::new("PERSISTENCE", error.to_string()),
            LineupError::Serialization(_) => ApiError::new("INVALID_REQUEST", error.to_string()),
        }
    }
}

fn parse_request<T: for<'de> Deserialize<'de>>(request_json: &str) -> Result<T, ApiError> {
    serde_json::from_str(request_json).map_err(|e| ApiError::new("INVALID_REQUEST", format!("Invalid request format: {}", e)))
}

/// Formation catalog for the picker.
pub fn list_formations_json() -> String {
    ApiResponse::ok(FormationCatalog::all().to_vec()).to_json()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayRequest {
    pub formation_id: String,
    #[serde(default)]
    pub board_mode: BoardMode,
    pub gestures: Vec<DragGesture>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayResponse {
    pub formation: Formation,
    pub assignments: BTreeMap<SlotId, PlayerId>,
    pub bench: Vec<PlayerId>,
    pub outcomes: Vec<DropOutcome>,
    pub summary: BoardSummary,
}

/// Replay a gesture list on a fresh board and report the resulting state.
pub fn replay_gestures_json(request_json: &str) -> String {
    let request: ReplayRequest = match parse_request(request_json) {
        Ok(req) => req,
        Err(e) => return ApiResponse::<ReplayResponse>::err(e).to_json(),
    };

    match replay(&request) {
        Ok((board, outcomes)) => ApiResponse::ok(ReplayResponse {
            formation: board.formation().clone(),
            assignments: board.assignments().clone(),
            bench: board.bench().to_vec(),
            outcomes,
            summary: board.summary(),
        })
        .to_json(),
        Err(e) => ApiResponse::<ReplayResponse>::err(ApiError::from(&e)).to_json(),
    }
}

fn replay(request: &ReplayRequest) -> Result<(LineupBoard, Vec<DropOutcome>), LineupError> {
    let formation = FormationCatalog::lookup(&request.formation_id)?;
    let mut board = LineupBoard::new(formation.clone(), request.board_mode);
    let outcomes = request.gestures.iter().map(|g| board.apply_drop(g)).collect();
    Ok((board, outcomes))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildCallUpRequest {
    pub category: String,
    pub formation_id: String,
    /// Slot id → player id, as the board UI keeps it.
    pub assignments: BTreeMap<SlotId, PlayerId>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Validate a finished board and return the call-up to persist.
///
/// Duplicate players and unknown slots are rejected up front: a UI map that
/// breaks the board invariants never reaches validation.
pub fn build_call_up_json(request_json: &str) -> String {
    let request: BuildCallUpRequest = match parse_request(request_json) {
        Ok(req) => req,
        Err(e) => return ApiResponse::<CallUp>::err(e).to_json(),
    };

    match build_call_up(&request) {
        Ok(call_up) => {
            debug!("Built call-up for {} ({} entries)", call_up.category, call_up.assignments.len());
            ApiResponse::ok(call_up).to_json()
        }
        Err(e) => {
            warn!("Call-up request for {} rejected: {}", request.category, e.message);
            ApiResponse::<CallUp>::err(e).to_json()
        }
    }
}

fn build_call_up(request: &BuildCallUpRequest) -> Result<CallUp, ApiError> {
    let formation = FormationCatalog::lookup(&request.formation_id).map_err(|e| ApiError::from(&e))?;
    let mut board = LineupBoard::new(formation.clone(), BoardMode::CallUp);

    for (slot, player) in &request.assignments {
        if !formation.contains(slot.as_str()) {
            return Err(ApiError::new("UNKNOWN_SLOT", format!("Slot {} is not part of {}", slot, formation.id))
                .with_detail("slot_id", slot.as_str().into()));
        }
        if board.is_used(player) {
            return Err(ApiError::new("DUPLICATE_PLAYER", format!("Player {} is assigned twice", player))
                .with_detail("player_id", player.as_str().into()));
        }
        board.apply_drop(&DragGesture::place(player.clone(), slot.as_str()));
    }

    let created_at = request.created_at.unwrap_or_else(Utc::now);
    board
        .build_call_up(&request.category, created_at)
        .map_err(|e| ApiError::from(&LineupError::Validation(e)))
}
