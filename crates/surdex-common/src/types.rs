//! Customer record definitions shared by every Surdex component.

use serde::{Deserialize, Serialize};

/// Customer identifier.
///
/// Persisted as a fixed-width little-endian `i32`. Uniqueness is the
/// responsibility of whoever assigns ids; the catalog never checks it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct CustomerId(pub i32);

impl CustomerId {
    /// Size of the persisted id in bytes.
    pub const SIZE: usize = 4;

    /// Returns the id that follows this one.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for CustomerId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// A customer record.
///
/// Records are immutable once created. The record store keeps the canonical
/// copy and every index keeps its own clone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Given name.
    pub first_name: String,
    /// Surname, the key of every index.
    pub last_name: String,
    /// Customer identifier.
    pub customer_id: CustomerId,
}

impl Record {
    /// Creates a new record.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        customer_id: impl Into<CustomerId>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            customer_id: customer_id.into(),
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} (#{})",
            self.first_name, self.last_name, self.customer_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_id_next() {
        assert_eq!(CustomerId(1000).next(), CustomerId(1001));
    }

    #[test]
    fn test_customer_id_ordering() {
        assert!(CustomerId(999) < CustomerId(1000));
        assert_eq!(CustomerId::default(), CustomerId(0));
    }

    #[test]
    fn test_customer_id_display() {
        assert_eq!(CustomerId(1042).to_string(), "1042");
    }

    #[test]
    fn test_record_new_accepts_str_and_i32() {
        let record = Record::new("Ann", "Lee", 1000);
        assert_eq!(record.first_name, "Ann");
        assert_eq!(record.last_name, "Lee");
        assert_eq!(record.customer_id, CustomerId(1000));
    }

    #[test]
    fn test_record_display() {
        let record = Record::new("Bob", "Park", 1001);
        assert_eq!(record.to_string(), "Bob Park (#1001)");
    }

    #[test]
    fn test_record_serde_roundtrip() {
        let original = Record::new("Cid", "Nguyen", 1002);
        let serialized = serde_json::to_string(&original).unwrap();
        let deserialized: Record = serde_json::from_str(&serialized).unwrap();
        assert_eq!(original, deserialized);
    }
}
