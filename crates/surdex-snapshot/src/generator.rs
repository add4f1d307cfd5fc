//! Synthetic customer generator used to top up small datasets.

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use surdex_common::{CustomerId, Record, Result, SurdexError};

/// First names drawn by the generator.
pub const FIRST_NAMES: [&str; 15] = [
    "John",
    "Jane",
    "Michael",
    "Emily",
    "David",
    "Sarah",
    "Robert",
    "Jennifer",
    "William",
    "Lisa",
    "James",
    "Jessica",
    "Daniel",
    "Amy",
    "Christopher",
];

/// Surnames drawn by the generator.
pub const LAST_NAMES: [&str; 15] = [
    "Smith",
    "Johnson",
    "Williams",
    "Brown",
    "Jones",
    "Miller",
    "Davis",
    "Garcia",
    "Rodriguez",
    "Wilson",
    "Martinez",
    "Anderson",
    "Taylor",
    "Thomas",
    "Lee",
];

/// Produces random records with sequential customer ids.
pub struct RecordGenerator {
    rng: StdRng,
    next_id: CustomerId,
}

impl RecordGenerator {
    /// Creates a generator handing out ids from `first_id` upward.
    ///
    /// With a seed the output is reproducible; without one the generator is
    /// seeded from the operating system.
    pub fn new(first_id: CustomerId, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng,
            next_id: first_id,
        }
    }

    /// The id the next generated record will receive.
    pub fn next_id(&self) -> CustomerId {
        self.next_id
    }

    /// Generates one record.
    ///
    /// Fails once the id space is exhausted.
    pub fn generate(&mut self) -> Result<Record> {
        let id = self.next_id;
        let following = id.0.checked_add(1).ok_or_else(|| SurdexError::InvalidParameter {
            name: "customer_id".to_string(),
            value: id.to_string(),
        })?;

        let first = FIRST_NAMES.choose(&mut self.rng).copied().unwrap_or(FIRST_NAMES[0]);
        let last = LAST_NAMES.choose(&mut self.rng).copied().unwrap_or(LAST_NAMES[0]);

        self.next_id = CustomerId(following);
        Ok(Record::new(first, last, id))
    }

    /// Generates `count` records.
    pub fn generate_batch(&mut self, count: usize) -> Result<Vec<Record>> {
        let records = (0..count)
            .map(|_| self.generate())
            .collect::<Result<Vec<_>>>()?;
        debug!(
            "Generated {} records, next customer id {}",
            records.len(),
            self.next_id
        );
        Ok(records)
    }
}
