//! Filter panel configuration.
//!
//! The priority label list and the phase universe are plain values handed to
//! the derivations. They can be loaded from a JSON file:
//!
//! ```json
//! {
//!   "priorityLabels": ["workflows.argoproj.io/cron-workflow"],
//!   "phaseUniverse": ["Pending", "Running", "Succeeded", "Failed", "Error"]
//! }
//! ```
//!
//! Environment variables:
//!
//! - `WORKFLOW_FILTERS_CONFIG`: path to a JSON config file
//! - `WORKFLOW_FILTERS_PHASES`: comma-separated phase universe override

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::error::FilterError;
use crate::model::default_phase_universe;
use crate::suggest::default_priority_labels;

/// Environment variable naming a JSON config file.
pub const ENV_CONFIG_PATH: &str = "WORKFLOW_FILTERS_CONFIG";

/// Environment variable overriding the phase universe.
pub const ENV_PHASES: &str = "WORKFLOW_FILTERS_PHASES";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterConfig {
    /// Label keys promoted to the front of the suggestions
    #[serde(default = "default_priority_labels")]
    pub priority_labels: Vec<String>,
    /// Phases always shown in the phase list
    #[serde(default = "default_phase_universe")]
    pub phase_universe: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            priority_labels: default_priority_labels(),
            phase_universe: default_phase_universe(),
        }
    }
}

impl FilterConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, FilterError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        debug!(path = %path.display(), "Loaded filter config");
        Ok(config)
    }

    /// Build configuration from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self, FilterError> {
        let mut config = match std::env::var(ENV_CONFIG_PATH) {
            Ok(path) if !path.trim().is_empty() => Self::load(Path::new(path.trim()))?,
            _ => Self::default(),
        };

        if let Ok(phases) = std::env::var(ENV_PHASES) {
            config.phase_universe = parse_phase_list(&phases);
            info!(
                phases = config.phase_universe.len(),
                "Phase universe overridden via {ENV_PHASES}"
            );
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), FilterError> {
        if let Some(empty) = self.priority_labels.iter().position(|l| l.is_empty()) {
            return Err(FilterError::Config(format!(
                "priorityLabels[{empty}] is empty"
            )));
        }
        if let Some(empty) = self.phase_universe.iter().position(|p| p.is_empty()) {
            return Err(FilterError::Config(format!(
                "phaseUniverse[{empty}] is empty"
            )));
        }
        Ok(())
    }
}

/// Split a comma-separated phase list, dropping blanks and repeats.
fn parse_phase_list(raw: &str) -> Vec<String> {
    let mut phases: Vec<String> = Vec::new();
    for phase in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        if !phases.iter().any(|p| p == phase) {
            phases.push(phase.to_string());
        }
    }
    phases
}
