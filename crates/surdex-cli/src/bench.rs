//! Timed comparison of the three indices over sampled surnames.

use rand::Rng;
use std::hint::black_box;
use std::time::{Duration, Instant};
use surdex_index::{Catalog, IndexKind};

/// Lookup used for every sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BenchMode {
    /// Collect every match (full traversal for the trees).
    #[default]
    SearchAll,
    /// Stop at the first match (descent for the trees).
    FirstMatch,
}

/// Wall time spent by one index over all samples.
#[derive(Debug, Clone)]
pub struct IndexTiming {
    pub kind: IndexKind,
    pub elapsed: Duration,
    /// Total matches found across all samples.
    pub matches: usize,
}

/// Result of one benchmark run.
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    pub samples: usize,
    pub mode: BenchMode,
    /// One entry per index, in `IndexKind::ALL` order.
    pub timings: Vec<IndexTiming>,
}

impl BenchmarkReport {
    /// The fastest index. Ties go to the earlier index in reporting order.
    pub fn fastest(&self) -> Option<&IndexTiming> {
        self.timings
            .iter()
            .reduce(|best, t| if t.elapsed < best.elapsed { t } else { best })
    }

    /// Percentage by which `kind` was slower than the fastest index.
    ///
    /// `(t - fastest) / fastest * 100`. A zero fastest time yields 0 for
    /// equal timings and infinity otherwise.
    pub fn slowdown_pct(&self, kind: IndexKind) -> Option<f64> {
        let fastest = self.fastest()?.elapsed.as_secs_f64();
        let timing = self.timings.iter().find(|t| t.kind == kind)?;
        let elapsed = timing.elapsed.as_secs_f64();

        if fastest == 0.0 {
            return Some(if elapsed == 0.0 { 0.0 } else { f64::INFINITY });
        }
        Some((elapsed - fastest) / fastest * 100.0)
    }
}

/// Draws `count` surnames from random store positions, with repetition.
pub fn sample_surnames<R: Rng + ?Sized>(
    catalog: &Catalog,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    let store = catalog.store();
    if store.is_empty() {
        return Vec::new();
    }
    (0..count)
        .filter_map(|_| store.get(rng.random_range(0..store.len())))
        .map(|record| record.last_name.clone())
        .collect()
}

/// Times every index over `samples`. Returns `None` for an empty catalog.
pub fn run_benchmark(
    catalog: &Catalog,
    samples: &[String],
    mode: BenchMode,
) -> Option<BenchmarkReport> {
    if catalog.is_empty() {
        return None;
    }

    let timings = catalog
        .indexes()
        .into_iter()
        .map(|index| {
            let start = Instant::now();
            let matches = match mode {
                BenchMode::SearchAll => samples
                    .iter()
                    .map(|name| black_box(index.search_all(black_box(name))).len())
                    .sum::<usize>(),
                BenchMode::FirstMatch => samples
                    .iter()
                    .filter(|name| black_box(index.find_first(black_box(name))).is_some())
                    .count(),
            };
            IndexTiming {
                kind: index.kind(),
                elapsed: start.elapsed(),
                matches,
            }
        })
        .collect();

    Some(BenchmarkReport {
        samples: samples.len(),
        mode,
        timings,
    })
}
