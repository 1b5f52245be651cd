//! Phase counts for the phase checkbox list.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::Workflow;

/// One checkbox entry: a phase and how many workflows are in it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhaseCount {
    pub name: String,
    pub count: usize,
}

impl PhaseCount {
    #[must_use]
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Count workflows per phase.
///
/// Every phase in `universe` is present (zero when unobserved) in universe
/// order. Phases seen in the data but missing from the universe are appended
/// in first-seen order. Workflows without a phase are not counted.
#[must_use]
pub fn tally_phases<S: AsRef<str>>(records: &[Workflow], universe: &[S]) -> Vec<PhaseCount> {
    let mut counts: IndexMap<&str, usize> = universe.iter().map(|p| (p.as_ref(), 0)).collect();
    let base = counts.len();

    for phase in records.iter().filter_map(Workflow::phase) {
        *counts.entry(phase).or_insert(0) += 1;
    }

    if counts.len() > base {
        debug!(
            unexpected = counts.len() - base,
            "Workflows report phases outside the configured universe"
        );
    }

    counts
        .into_iter()
        .map(|(name, count)| PhaseCount::new(name, count))
        .collect()
}
