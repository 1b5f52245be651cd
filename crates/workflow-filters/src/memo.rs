//! Single-entry memoization of the filter derivations.
//!
//! The workflow list is shared as `Arc<[Workflow]>`; a new list means a new
//! allocation, so pointer identity is enough to detect change. Only the most
//! recent input is retained.

use std::sync::Arc;
use tracing::trace;

use crate::config::FilterConfig;
use crate::model::Workflow;
use crate::suggest::derive_label_suggestions;
use crate::tally::{tally_phases, PhaseCount};

/// Cache holding the output for the last input seen.
#[derive(Debug)]
pub struct Memo<K: ?Sized, V> {
    entry: Option<(Arc<K>, Arc<V>)>,
    hits: u64,
    misses: u64,
}

impl<K: ?Sized, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            entry: None,
            hits: 0,
            misses: 0,
        }
    }
}

impl<K: ?Sized, V> Memo<K, V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, computing and replacing it when
    /// `key` is not the same allocation as the cached one.
    pub fn get_or_compute<F>(&mut self, key: &Arc<K>, compute: F) -> Arc<V>
    where
        F: FnOnce(&K) -> V,
    {
        if let Some((cached_key, value)) = &self.entry {
            if Arc::ptr_eq(cached_key, key) {
                self.hits += 1;
                trace!(hits = self.hits, "Memo hit");
                return Arc::clone(value);
            }
        }

        self.misses += 1;
        trace!(misses = self.misses, "Memo miss, recomputing");
        let value = Arc::new(compute(&**key));
        self.entry = Some((Arc::clone(key), Arc::clone(&value)));
        value
    }

    /// Drop the cached entry.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

/// Memoized label suggestions and phase items for one filter panel.
#[derive(Debug)]
pub struct FilterOptions {
    priority_labels: Vec<String>,
    phase_universe: Vec<String>,
    suggestions: Memo<[Workflow], Vec<String>>,
    phases: Memo<[Workflow], Vec<PhaseCount>>,
}

impl FilterOptions {
    #[must_use]
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            priority_labels: config.priority_labels.clone(),
            phase_universe: config.phase_universe.clone(),
            suggestions: Memo::new(),
            phases: Memo::new(),
        }
    }

    /// Autocomplete entries for the label input.
    pub fn label_suggestions(&mut self, workflows: &Arc<[Workflow]>) -> Arc<Vec<String>> {
        let priority = &self.priority_labels;
        self.suggestions
            .get_or_compute(workflows, |records| derive_label_suggestions(records, priority))
    }

    /// Checkbox entries for the phase filter.
    pub fn phase_items(&mut self, workflows: &Arc<[Workflow]>) -> Arc<Vec<PhaseCount>> {
        let universe = &self.phase_universe;
        self.phases
            .get_or_compute(workflows, |records| tally_phases(records, universe))
    }

    #[must_use]
    pub fn phase_universe(&self) -> &[String] {
        &self.phase_universe
    }

    /// Replace the phase universe; the next `phase_items` call recomputes.
    pub fn set_phase_universe(&mut self, universe: Vec<String>) {
        if universe != self.phase_universe {
            self.phase_universe = universe;
            self.phases.invalidate();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::workflow;
    use pretty_assertions::assert_eq;

    fn workflows() -> Arc<[Workflow]> {
        Arc::from(vec![
            workflow("a", &[("app", "a")], Some("Running")),
            workflow("b", &[("env", "prod")], Some("Failed")),
        ])
    }

    #[test]
    fn test_memo_hit_on_same_allocation() {
        let mut memo: Memo<[Workflow], usize> = Memo::new();
        let list = workflows();

        let first = memo.get_or_compute(&list, <[Workflow]>::len);
        let second = memo.get_or_compute(&list, |_| unreachable!("should be cached"));

        assert_eq!(*first, 2);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!((memo.hits(), memo.misses()), (1, 1));
    }

    #[test]
    fn test_memo_last_input_wins() {
        let mut memo: Memo<[Workflow], usize> = Memo::new();
        let a = workflows();
        let b = workflows();

        memo.get_or_compute(&a, <[Workflow]>::len);
        memo.get_or_compute(&b, <[Workflow]>::len);
        memo.get_or_compute(&a, <[Workflow]>::len);

        assert_eq!((memo.hits(), memo.misses()), (0, 3));
    }

    #[test]
    fn test_memo_invalidate() {
        let mut memo: Memo<[Workflow], usize> = Memo::new();
        let list = workflows();

        memo.get_or_compute(&list, <[Workflow]>::len);
        memo.invalidate();
        memo.get_or_compute(&list, <[Workflow]>::len);

        assert_eq!(memo.misses(), 2);
    }

    #[test]
    fn test_filter_options_uses_config() {
        let config = FilterConfig {
            priority_labels: vec!["env".to_string()],
            phase_universe: vec!["Running".to_string()],
        };
        let mut options = FilterOptions::new(&config);
        let list = workflows();

        assert_eq!(
            *options.label_suggestions(&list),
            vec!["env", "app=a", "env=prod"]
        );
        assert_eq!(
            *options.phase_items(&list),
            vec![PhaseCount::new("Running", 1), PhaseCount::new("Failed", 1)]
        );

        let again = options.label_suggestions(&list);
        assert!(Arc::ptr_eq(&again, &options.label_suggestions(&list)));
    }

    #[test]
    fn test_universe_change_recomputes() {
        let mut options = FilterOptions::new(&FilterConfig::default());
        let list = workflows();

        let before = options.phase_items(&list);
        assert_eq!(before.len(), 5);

        options.set_phase_universe(vec!["Failed".to_string()]);
        assert_eq!(
            *options.phase_items(&list),
            vec![PhaseCount::new("Failed", 1), PhaseCount::new("Running", 1)]
        );
    }
}
