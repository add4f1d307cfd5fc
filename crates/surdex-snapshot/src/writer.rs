//! Snapshot writer.

use crate::constants::TEMP_SUFFIX;
use crate::record::encode_all;
use log::debug;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use surdex_common::{Record, Result, SurdexError};

/// Writes record snapshots.
///
/// The stream is written to a temporary sibling file, synced, then renamed
/// over the target so a crash never leaves a half-written snapshot behind.
pub struct SnapshotWriter;

impl SnapshotWriter {
    /// Writes `records` to `path` in iteration order. Returns the byte count.
    pub fn write<'a>(path: &Path, records: impl IntoIterator<Item = &'a Record>) -> Result<u64> {
        let data = encode_all(records);
        let temp = Self::temp_path(path)?;

        let result = Self::write_and_rename(&temp, path, &data);
        if result.is_err() {
            let _ = fs::remove_file(&temp);
        }
        result?;

        debug!("Wrote {} snapshot bytes to {}", data.len(), path.display());
        Ok(data.len() as u64)
    }

    fn write_and_rename(temp: &Path, path: &Path, data: &[u8]) -> Result<()> {
        let mut file = File::create(temp)?;
        file.write_all(data)?;
        file.sync_all()?;
        drop(file);
        fs::rename(temp, path)?;
        Ok(())
    }

    /// Returns the temporary sibling used while writing `path`.
    pub fn temp_path(path: &Path) -> Result<PathBuf> {
        let name = path.file_name().ok_or_else(|| SurdexError::InvalidParameter {
            name: "data_file".to_string(),
            value: path.display().to_string(),
        })?;
        let mut temp_name = name.to_os_string();
        temp_name.push(".");
        temp_name.push(TEMP_SUFFIX);
        Ok(path.with_file_name(temp_name))
    }
}
