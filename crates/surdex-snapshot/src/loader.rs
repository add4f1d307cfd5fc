//! Startup loading: replay the snapshot, top up with generated records, persist.

use crate::generator::RecordGenerator;
use crate::reader::SnapshotReader;
use crate::writer::SnapshotWriter;
use log::{info, warn};
use surdex_common::{CatalogConfig, CustomerId, Result, SurdexError};
use surdex_index::Catalog;

/// What `load_or_generate` did.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Records replayed from the snapshot.
    pub loaded: usize,
    /// Records produced by the generator.
    pub generated: usize,
    /// True if the snapshot was rewritten after generation.
    pub persisted: bool,
    /// Why the snapshot scan stopped early, if it did.
    pub truncated: Option<SurdexError>,
}

/// Populates `catalog` from `config.data_file`.
///
/// A missing or unreadable snapshot starts an empty catalog. When fewer than
/// `config.min_records` records were loaded, generated records top the
/// catalog up to exactly `min_records` and the whole store is written back.
/// A failed write only logs a warning; the catalog remains usable.
pub fn load_or_generate(config: &CatalogConfig, catalog: &mut Catalog) -> Result<LoadOutcome> {
    let mut outcome = LoadOutcome::default();

    match SnapshotReader::read(&config.data_file) {
        Ok(scan) => {
            outcome.loaded = scan.records.len();
            outcome.truncated = scan.truncated;
            catalog.extend(scan.records);
            info!(
                "Loaded {} records from {}",
                outcome.loaded,
                config.data_file.display()
            );
        }
        Err(err) => {
            info!(
                "No usable snapshot at {} ({}), starting empty",
                config.data_file.display(),
                err
            );
        }
    }

    if catalog.len() >= config.min_records {
        return Ok(outcome);
    }

    let missing = config.min_records - catalog.len();
    let first_id = match catalog.store().max_customer_id() {
        Some(max) => max.0.checked_add(1).map(CustomerId).ok_or_else(|| {
            SurdexError::InvalidParameter {
                name: "customer_id".to_string(),
                value: max.to_string(),
            }
        })?,
        None => config.first_customer_id,
    };

    let mut generator = RecordGenerator::new(first_id, config.seed);
    let records = generator.generate_batch(missing)?;
    outcome.generated = records.len();
    catalog.extend(records);
    info!(
        "Generated {} records (ids {} to {})",
        outcome.generated,
        first_id,
        generator.next_id().0 - 1
    );

    match SnapshotWriter::write(&config.data_file, catalog.store()) {
        Ok(bytes) => {
            outcome.persisted = true;
            info!(
                "Saved {} records ({} bytes) to {}",
                catalog.len(),
                bytes,
                config.data_file.display()
            );
        }
        Err(err) => {
            warn!(
                "Could not save snapshot to {}: {}; continuing in memory",
                config.data_file.display(),
                err
            );
        }
    }

    Ok(outcome)
}
