//! Label suggestions for the label tag input.
//!
//! Every distinct `key=value` pair across the workflow list is offered,
//! sorted with [`locale_cmp`]. Keys from the priority list that occur in the
//! data are promoted to the front as bare keys, so a user can start typing a
//! template or cron-workflow selector without knowing a value.

use std::collections::HashSet;
use tracing::debug;

use crate::collate::locale_cmp;
use crate::model::{labels, Workflow};

/// Label keys promoted ahead of the literal suggestions, in display order.
pub const DEFAULT_PRIORITY_LABELS: [&str; 3] = [
    labels::CRON_WORKFLOW,
    labels::WORKFLOW_TEMPLATE,
    labels::CLUSTER_WORKFLOW_TEMPLATE,
];

/// Default priority list as owned strings.
#[must_use]
pub fn default_priority_labels() -> Vec<String> {
    DEFAULT_PRIORITY_LABELS
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

/// Derive the autocomplete list for the label filter.
///
/// The result is the promoted bare keys (in `priority` order, each at most
/// once) followed by every distinct `key=value` pair in sorted order.
#[must_use]
pub fn derive_label_suggestions<S: AsRef<str>>(
    records: &[Workflow],
    priority: &[S],
) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut suggestions: Vec<String> = Vec::new();
    for wf in records.iter().filter(|wf| !wf.labels().is_empty()) {
        for (key, value) in wf.labels() {
            let pair = format!("{key}={value}");
            if seen.insert(pair.clone()) {
                suggestions.push(pair);
            }
        }
    }
    suggestions.sort_by(|a, b| locale_cmp(a, b));

    let promoted = promote_common_labels(&suggestions, priority);

    debug!(
        workflows = records.len(),
        distinct_pairs = suggestions.len(),
        promoted = promoted.len(),
        "Derived label suggestions"
    );

    let mut result = promoted;
    result.extend(suggestions);
    result
}

/// Bare priority keys that prefix at least one suggestion.
fn promote_common_labels<S: AsRef<str>>(suggestions: &[String], priority: &[S]) -> Vec<String> {
    let mut promoted: Vec<String> = Vec::new();
    for prefix in priority.iter().map(AsRef::as_ref) {
        if promoted.iter().any(|p| p == prefix) {
            continue;
        }
        if suggestions.iter().any(|s| s.starts_with(prefix)) {
            promoted.push(prefix.to_string());
        }
    }
    promoted
}
