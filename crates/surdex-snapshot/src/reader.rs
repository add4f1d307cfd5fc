//! Snapshot reader for startup recovery.

use crate::record::decode_record;
use bytes::{Buf, Bytes};
use log::{debug, warn};
use std::path::Path;
use surdex_common::{Record, Result, SurdexError};

/// Result of parsing a snapshot stream.
#[derive(Debug, Default)]
pub struct SnapshotScan {
    /// Records decoded before end of stream or the first malformed record.
    pub records: Vec<Record>,
    /// Bytes consumed by the decoded records.
    pub bytes_read: u64,
    /// The error that stopped the scan, if the stream ended in a malformed record.
    pub truncated: Option<SurdexError>,
}

impl SnapshotScan {
    /// Returns true if the whole stream decoded cleanly.
    pub fn is_complete(&self) -> bool {
        self.truncated.is_none()
    }
}

/// Reads record snapshots.
pub struct SnapshotReader;

impl SnapshotReader {
    /// Reads and parses the snapshot at `path`.
    ///
    /// I/O failures (including a missing file) are returned as errors. A
    /// malformed tail is not: it is reported through `SnapshotScan::truncated`.
    pub fn read(path: &Path) -> Result<SnapshotScan> {
        let data = std::fs::read(path)?;
        debug!("Read {} snapshot bytes from {}", data.len(), path.display());

        let scan = Self::parse_all(Bytes::from(data));
        if let Some(err) = &scan.truncated {
            warn!(
                "Snapshot {} ends in a malformed record, keeping {} records: {}",
                path.display(),
                scan.records.len(),
                err
            );
        }
        Ok(scan)
    }

    /// Decodes records until end of stream or the first malformed record.
    pub fn parse_all(mut data: Bytes) -> SnapshotScan {
        let mut scan = SnapshotScan::default();

        while data.has_remaining() {
            let before = data.remaining();
            match decode_record(&mut data, scan.bytes_read) {
                Ok(record) => {
                    scan.bytes_read += (before - data.remaining()) as u64;
                    scan.records.push(record);
                }
                Err(err) => {
                    scan.truncated = Some(err);
                    break;
                }
            }
        }

        scan
    }
}
