//! Call-up artifact and the sinks that persist it.

pub mod archive;
pub mod artifact;
pub mod clock;
pub mod sink;

pub use archive::{decode_call_up, encode_call_up, ArchiveSink, ARCHIVE_VERSION};
pub use artifact::{CallUp, CallUpEntry, StoredCallUp, StoredEntry};
pub use clock::{Clock, FixedClock, SystemClock};
pub use sink::{CallUpSink, JsonFileSink, MemorySink, SaveReceipt, SinkError};
