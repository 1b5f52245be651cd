//! Filter options for Argo workflow lists.
//!
//! Derives what a workflow filter panel offers from an already-fetched list
//! of workflows, and tracks what the user has selected.
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use workflow_filters::{FilterConfig, FilterOptions, Workflow, WorkflowList};
//!
//! let list = WorkflowList::from_json(r#"{"items": []}"#).unwrap();
//! let workflows: Arc<[Workflow]> = Arc::from(list.items);
//!
//! let mut options = FilterOptions::new(&FilterConfig::default());
//! let suggestions = options.label_suggestions(&workflows);
//! let phases = options.phase_items(&workflows);
//! ```
//!
//! # Architecture
//!
//! - [`derive_label_suggestions`]: distinct `key=value` label pairs, sorted,
//!   with well-known keys promoted to the front
//! - [`tally_phases`]: per-phase counts over a fixed phase universe
//! - [`FilterOptions`]: single-entry memoization of both
//! - [`NameFilterSelector`] and [`FilterState`]: the controlled selections

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod collate;
pub mod config;
pub mod error;
pub mod memo;
pub mod model;
pub mod name_filter;
pub mod state;
pub mod suggest;
pub mod tally;

pub use collate::locale_cmp;
pub use config::FilterConfig;
pub use error::FilterError;
pub use memo::{FilterOptions, Memo};
pub use model::{Workflow, WorkflowList, WorkflowPhase, WorkflowStatus};
pub use name_filter::{NameFilter, NameFilterSelector};
pub use state::{FilterChange, FilterSelection, FilterState};
pub use suggest::{derive_label_suggestions, DEFAULT_PRIORITY_LABELS};
pub use tally::{tally_phases, PhaseCount};
