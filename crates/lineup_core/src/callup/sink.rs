use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use super::artifact::{CallUp, StoredCallUp};
use super::clock::Clock;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] rmp_serde::encode::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] rmp_serde::decode::Error),

    #[error("Decompression error")]
    Decompression,

    #[error("Checksum mismatch")]
    ChecksumMismatch,

    #[error("Corrupted data")]
    Corrupted,

    #[error("Version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },

    #[error("Rejected by backend: {0}")]
    Rejected(String),
}

impl SinkError {
    /// Whether retrying the same save could succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SinkError::Io(_) | SinkError::Rejected(_))
    }
}

/// Acknowledgement returned by a sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveReceipt {
    pub id: Uuid,
    pub stored_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<PathBuf>,
}

impl SaveReceipt {
    pub fn new(stored_at: DateTime<Utc>, location: Option<PathBuf>) -> Self {
        Self { id: Uuid::new_v4(), stored_at, location }
    }
}

/// Destination for finished call-ups. Failures must not touch the caller's board.
///
/// Receipts are stamped with `clock`, so a fixed clock gives fixed receipts.
pub trait CallUpSink {
    fn persist(&mut self, call_up: &CallUp, clock: &dyn Clock) -> Result<SaveReceipt, SinkError>;
}

/// Keeps call-ups in memory. Can be told to reject, to exercise retry paths.
#[derive(Debug, Default)]
pub struct MemorySink {
    saved: Vec<CallUp>,
    attempts: usize,
    reject_with: Option<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every following `persist` fails with `Rejected(reason)` until [`MemorySink::recover`].
    pub fn failing(reason: impl Into<String>) -> Self {
        Self { reject_with: Some(reason.into()), ..Self::default() }
    }

    pub fn recover(&mut self) {
        self.reject_with = None;
    }

    pub fn saved(&self) -> &[CallUp] {
        &self.saved
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }
}

impl CallUpSink for MemorySink {
    fn persist(&mut self, call_up: &CallUp, clock: &dyn Clock) -> Result<SaveReceipt, SinkError> {
        self.attempts += 1;
        if let Some(reason) = &self.reject_with {
            return Err(SinkError::Rejected(reason.clone()));
        }
        self.saved.push(call_up.clone());
        Ok(SaveReceipt::new(clock.now(), None))
    }
}

/// Writes one pretty JSON file per call-up, in the backend's row shape.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    dir: PathBuf,
}

impl JsonFileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn load(path: &Path) -> Result<StoredCallUp, SinkError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl CallUpSink for JsonFileSink {
    fn persist(&mut self, call_up: &CallUp, clock: &dyn Clock) -> Result<SaveReceipt, SinkError> {
        let stored = StoredCallUp::from(call_up);
        let data = serde_json::to_vec_pretty(&stored)?;

        let mut receipt = SaveReceipt::new(clock.now(), None);
        let path = self.dir.join(file_name(call_up, &receipt.id, "json"));
        write_atomic(&path, &data)?;

        info!("Call-up {} saved to {}", call_up.category, path.display());
        receipt.location = Some(path);
        Ok(receipt)
    }
}

/// `sub-14_20260314T150000Z_1a2b3c4d.<ext>`
pub(crate) fn file_name(call_up: &CallUp, id: &Uuid, ext: &str) -> String {
    let slug: String = call_up
        .category
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    let stamp = call_up.created_at.format("%Y%m%dT%H%M%SZ");
    let short = id.simple().to_string();
    format!("{}_{}_{}.{}", slug, stamp, &short[..8], ext)
}

/// Write to a temp file, fsync, then rename into place.
pub(crate) fn write_atomic(path: &Path, data: &[u8]) -> Result<(), SinkError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    {
        let mut file = File::create(&temp_path)?;
        file.write_all(data)?;
        file.flush()?;
        file.sync_all()?;
    }
    fs::rename(&temp_path, path)?;

    debug!("Wrote {} bytes to {:?}", data.len(), path);
    Ok(())
}
