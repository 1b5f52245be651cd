//! Filter panel state.
//!
//! Holds the current selections and reports every edit to an optional
//! listener, mirroring the setter callbacks the panel is driven by.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::model::labels;
use crate::name_filter::NameFilter;

/// One edit to the filter state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FilterChange {
    Namespace(String),
    Phases(Vec<String>),
    Labels(Vec<String>),
    CreatedAfter(Option<DateTime<Utc>>),
    FinishedBefore(Option<DateTime<Utc>>),
    NameFilter(NameFilter),
    NameValue(String),
}

/// Current filter selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSelection {
    pub namespace: String,
    pub phases: Vec<String>,
    pub labels: Vec<String>,
    pub created_after: Option<DateTime<Utc>>,
    pub finished_before: Option<DateTime<Utc>>,
    pub name_filter: NameFilter,
    pub name_value: String,
}

impl FilterSelection {
    /// Kubernetes label selector for the current labels and phases.
    ///
    /// Labels are passed through as typed; phases become a set-based
    /// requirement on the phase label. Empty when nothing is selected.
    #[must_use]
    pub fn label_selector(&self) -> String {
        let mut parts: Vec<String> = self
            .labels
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();
        if !self.phases.is_empty() {
            parts.push(format!("{} in ({})", labels::PHASE, self.phases.join(",")));
        }
        parts.join(",")
    }
}

type Listener = Box<dyn FnMut(&FilterChange) + Send>;

/// Filter selections plus the change listener.
#[derive(Default)]
pub struct FilterState {
    selection: FilterSelection,
    on_change: Option<Listener>,
}

impl FilterState {
    #[must_use]
    pub fn new(selection: FilterSelection) -> Self {
        Self {
            selection,
            on_change: None,
        }
    }

    /// Register the listener notified after each change is applied.
    #[must_use]
    pub fn on_change(mut self, listener: impl FnMut(&FilterChange) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(listener));
        self
    }

    #[must_use]
    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Apply a change and notify the listener.
    pub fn apply(&mut self, change: FilterChange) {
        debug!(?change, "Applying filter change");
        let s = &mut self.selection;
        match &change {
            FilterChange::Namespace(ns) => s.namespace.clone_from(ns),
            FilterChange::Phases(phases) => s.phases.clone_from(phases),
            FilterChange::Labels(labels) => s.labels.clone_from(labels),
            FilterChange::CreatedAfter(at) => s.created_after = *at,
            FilterChange::FinishedBefore(at) => s.finished_before = *at,
            FilterChange::NameFilter(mode) => s.name_filter = *mode,
            FilterChange::NameValue(value) => s.name_value.clone_from(value),
        }
        if let Some(listener) = self.on_change.as_mut() {
            listener(&change);
        }
    }

    pub fn set_namespace(&mut self, namespace: impl Into<String>) {
        self.apply(FilterChange::Namespace(namespace.into()));
    }

    pub fn set_phases(&mut self, phases: Vec<String>) {
        self.apply(FilterChange::Phases(phases));
    }

    pub fn set_labels(&mut self, labels: Vec<String>) {
        self.apply(FilterChange::Labels(labels));
    }

    /// Replace the label selection with the single pair `key=value`.
    pub fn set_label(&mut self, key: &str, value: &str) {
        self.set_labels(vec![format!("{key}={value}")]);
    }

    /// Filter to workflows submitted from the named workflow template.
    pub fn select_workflow_template(&mut self, name: &str) {
        self.set_label(labels::WORKFLOW_TEMPLATE, name);
    }

    /// Filter to workflows created by the named cron workflow.
    pub fn select_cron_workflow(&mut self, name: &str) {
        self.set_label(labels::CRON_WORKFLOW, name);
    }

    pub fn set_created_after(&mut self, at: Option<DateTime<Utc>>) {
        self.apply(FilterChange::CreatedAfter(at));
    }

    pub fn clear_created_after(&mut self) {
        self.set_created_after(None);
    }

    pub fn set_finished_before(&mut self, at: Option<DateTime<Utc>>) {
        self.apply(FilterChange::FinishedBefore(at));
    }

    pub fn clear_finished_before(&mut self) {
        self.set_finished_before(None);
    }

    pub fn set_name_filter(&mut self, mode: NameFilter) {
        self.apply(FilterChange::NameFilter(mode));
    }

    pub fn set_name_value(&mut self, value: impl Into<String>) {
        self.apply(FilterChange::NameValue(value.into()));
    }
}

impl fmt::Debug for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterState")
            .field("selection", &self.selection)
            .field("has_listener", &self.on_change.is_some())
            .finish()
    }
}
