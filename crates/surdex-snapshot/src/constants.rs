//! Snapshot constants for the record stream format.

// Record field layout

/// Size of the length prefix in front of each name field (u64, little-endian).
pub const LENGTH_PREFIX_SIZE: usize = 8;

/// Size of the trailing customer id (i32, little-endian).
pub const CUSTOMER_ID_SIZE: usize = surdex_common::CustomerId::SIZE;

/// Smallest possible encoded record: two empty names and an id.
pub const MIN_RECORD_SIZE: usize = 2 * LENGTH_PREFIX_SIZE + CUSTOMER_ID_SIZE;

/// Maximum accepted name length (64 KB). Longer prefixes are treated as corruption.
pub const MAX_FIELD_LEN: usize = 64 * 1024;

// File handling

/// Suffix of the temporary file a snapshot is written to before the rename.
pub const TEMP_SUFFIX: &str = "tmp";
