//! Record snapshots for Surdex.
//!
//! Persists the record store as a headerless stream of length-prefixed
//! records, replays it at startup, and tops small datasets up with
//! generated customers.

pub mod constants;
pub mod generator;
pub mod loader;
pub mod reader;
pub mod record;
pub mod writer;

pub use generator::{FIRST_NAMES, LAST_NAMES, RecordGenerator};
pub use loader::{LoadOutcome, load_or_generate};
pub use reader::{SnapshotReader, SnapshotScan};
pub use record::{decode_record, encode_all, encode_record};
pub use writer::SnapshotWriter;
