// Compressed call-up archive: MessagePack + LZ4 + trailing SHA256

use std::fs;
use std::path::{Path, PathBuf};

use lz4_flex::{compress_prepend_size, decompress_size_prepended};
use rmp_serde::{from_slice, to_vec_named};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::info;

use super::artifact::CallUp;
use super::clock::Clock;
use super::sink::{file_name, write_atomic, CallUpSink, SaveReceipt, SinkError};

pub const ARCHIVE_VERSION: u32 = 1;
const CHECKSUM_LEN: usize = 32;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ArchivedCallUp {
    version: u32,
    call_up: CallUp,
}

pub fn encode_call_up(call_up: &CallUp) -> Result<Vec<u8>, SinkError> {
    let record = ArchivedCallUp { version: ARCHIVE_VERSION, call_up: call_up.clone() };

    let msgpack = to_vec_named(&record)?;
    let mut result = compress_prepend_size(&msgpack);

    let checksum = Sha256::digest(&result);
    result.extend_from_slice(&checksum);
    Ok(result)
}

pub fn decode_call_up(bytes: &[u8]) -> Result<CallUp, SinkError> {
    if bytes.len() <= CHECKSUM_LEN {
        return Err(SinkError::Corrupted);
    }

    let (payload, checksum) = bytes.split_at(bytes.len() - CHECKSUM_LEN);
    if Sha256::digest(payload).as_slice() != checksum {
        return Err(SinkError::ChecksumMismatch);
    }

    let msgpack = decompress_size_prepended(payload).map_err(|_| SinkError::Decompression)?;
    let record: ArchivedCallUp = from_slice(&msgpack)?;

    if record.version != ARCHIVE_VERSION {
        return Err(SinkError::VersionMismatch { found: record.version, expected: ARCHIVE_VERSION });
    }
    Ok(record.call_up)
}

/// Stores each call-up as a checksummed `.cup` file.
#[derive(Debug, Clone)]
pub struct ArchiveSink {
    dir: PathBuf,
}

impl ArchiveSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn load(path: &Path) -> Result<CallUp, SinkError> {
        decode_call_up(&fs::read(path)?)
    }

    /// All archived call-ups in the directory, oldest first.
    pub fn load_all(&self) -> Result<Vec<CallUp>, SinkError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut call_ups = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) == Some("cup") {
                call_ups.push(Self::load(&path)?);
            }
        }
        call_ups.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(call_ups)
    }
}

impl CallUpSink for ArchiveSink {
    fn persist(&mut self, call_up: &CallUp, clock: &dyn Clock) -> Result<SaveReceipt, SinkError> {
        let data = encode_call_up(call_up)?;

        let mut receipt = SaveReceipt::new(clock.now(), None);
        let path = self.dir.join(file_name(call_up, &receipt.id, "cup"));
        write_atomic(&path, &data)?;

        info!("Archived call-up {} ({} bytes)", call_up.category, data.len());
        receipt.location = Some(path);
        Ok(receipt)
    }
}
