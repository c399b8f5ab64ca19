//! Lineup CLI library
//!
//! Gesture plan (JSON) + roster (CSV) → validated call-up → JSON file or archive.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use lineup_core::callup::{ArchiveSink, CallUpSink, Clock, JsonFileSink};
use lineup_core::config::SinkKind;
use lineup_core::i18n::BoardLocalizer;
use lineup_core::roster::{CsvRoster, Roster, RosterProvider};
use lineup_core::{BoardMode, BoardSession, BoardSummary, CallUp, DragGesture, DropOutcome, FormationCatalog, SaveReceipt};

/// Everything `lineup callup` needs.
#[derive(Debug, Clone)]
pub struct CallUpJob {
    pub csv: PathBuf,
    pub category: String,
    pub formation: String,
    pub plan: PathBuf,
    pub out: PathBuf,
    pub sink: SinkKind,
    pub mode: BoardMode,
}

#[derive(Debug, Clone)]
pub struct CallUpReport {
    pub outcomes: Vec<DropOutcome>,
    pub summary: BoardSummary,
    pub call_up: CallUp,
    pub receipt: SaveReceipt,
}

/// One line per catalog formation: id, name, slot labels.
pub fn formation_lines() -> Vec<String> {
    FormationCatalog::all()
        .iter()
        .map(|f| {
            let labels: Vec<&str> = f.slots.iter().map(|s| s.label.as_str()).collect();
            format!("{:<8} {:<16} {}", f.id.as_str(), f.name, labels.join(" "))
        })
        .collect()
}

/// Read a gesture plan: a JSON array of `{player, origin, destination}`.
pub fn load_plan(path: &Path) -> Result<Vec<DragGesture>> {
    let json = fs::read_to_string(path).with_context(|| format!("Failed to read plan file: {}", path.display()))?;
    let gestures: Vec<DragGesture> = serde_json::from_str(&json).context("Failed to parse gesture plan")?;
    debug!("Loaded {} gestures from {}", gestures.len(), path.display());
    Ok(gestures)
}

pub fn load_roster(csv: &Path, category: &str) -> Result<Roster> {
    let provider = CsvRoster::new(csv);
    let players = provider
        .players_for_category(category)
        .with_context(|| format!("Failed to load roster for {} from {}", category, csv.display()))?;
    Ok(Roster::new(players)?)
}

/// Replay the plan on a fresh board, validate and persist.
///
/// Validation and sink failures come back as `lineup_core::LineupError`
/// inside the anyhow error, so callers can localise them.
pub fn run_call_up(job: &CallUpJob, clock: &dyn Clock) -> Result<CallUpReport> {
    let provider = CsvRoster::new(&job.csv);
    let mut session = BoardSession::open(&provider, &job.category, &job.formation, job.mode)?;
    let gestures = load_plan(&job.plan)?;

    let outcomes: Vec<DropOutcome> = gestures.iter().map(|g| session.apply_drop(g)).collect();
    let ignored = outcomes.iter().filter(|o| !o.changed()).count();
    info!("Replayed {} gestures ({} ignored)", outcomes.len(), ignored);

    let summary = session.summary();
    let mut sink: Box<dyn CallUpSink> = match job.sink {
        SinkKind::Json => Box::new(JsonFileSink::new(&job.out)),
        SinkKind::Archive => Box::new(ArchiveSink::new(&job.out)),
    };

    let call_up = session.begin_save(clock)?;
    let receipt = session.finish_save(sink.persist(&call_up, clock))?;

    Ok(CallUpReport { outcomes, summary, call_up, receipt })
}

/// Human-readable notices for the drops that produced one.
pub fn drop_notices(localizer: &BoardLocalizer, outcomes: &[DropOutcome]) -> Vec<String> {
    outcomes.iter().filter_map(|o| localizer.drop_notice(o)).collect()
}
