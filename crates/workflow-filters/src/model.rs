//! Workflow records as returned by the Argo server or `kubectl get workflows -o json`.
//!
//! Only the fields the filter panel reads are modelled; everything else in the
//! manifest is ignored during deserialization.

use chrono::{DateTime, Utc};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::FilterError;

/// Well-known Argo label keys.
pub mod labels {
    /// Set on workflows created by a `CronWorkflow`.
    pub const CRON_WORKFLOW: &str = "workflows.argoproj.io/cron-workflow";
    /// Set on workflows submitted from a `WorkflowTemplate`.
    pub const WORKFLOW_TEMPLATE: &str = "workflows.argoproj.io/workflow-template";
    /// Set on workflows submitted from a `ClusterWorkflowTemplate`.
    pub const CLUSTER_WORKFLOW_TEMPLATE: &str = "workflows.argoproj.io/cluster-workflow-template";
    /// Mirrors `status.phase`, used for server-side phase selection.
    pub const PHASE: &str = "workflows.argoproj.io/phase";
}

static EMPTY_LABELS: BTreeMap<String, String> = BTreeMap::new();

/// A single Argo workflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub status: WorkflowStatus,
}

/// Observed state of a workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
}

impl Workflow {
    /// Label mapping, empty when the workflow carries none.
    #[must_use]
    pub fn labels(&self) -> &BTreeMap<String, String> {
        self.metadata.labels.as_ref().unwrap_or(&EMPTY_LABELS)
    }

    /// Phase, treating an empty string the same as an absent one.
    #[must_use]
    pub fn phase(&self) -> Option<&str> {
        self.status.phase.as_deref().filter(|p| !p.is_empty())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or_default()
    }

    /// Creation time from `metadata.creationTimestamp`.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.metadata.creation_timestamp.as_ref().map(|t| t.0)
    }
}

/// Workflow list envelope. `items` may be `null` on an empty namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowList {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<Workflow>,
}

impl WorkflowList {
    /// Parse a list response body.
    pub fn from_json(body: &str) -> Result<Self, FilterError> {
        Ok(serde_json::from_str(body)?)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Workflow>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Workflow>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Lifecycle phases reported by the Argo controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkflowPhase {
    Pending,
    Running,
    Succeeded,
    Failed,
    Error,
}

impl WorkflowPhase {
    /// Default phase universe, in display order.
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Running,
        Self::Succeeded,
        Self::Failed,
        Self::Error,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Running => "Running",
            Self::Succeeded => "Succeeded",
            Self::Failed => "Failed",
            Self::Error => "Error",
        }
    }
}

impl fmt::Display for WorkflowPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkflowPhase {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FilterError::InvalidPhase(s.to_string()))
    }
}

/// Validate phase names, returning them in canonical casing.
pub fn parse_phases<S: AsRef<str>>(raw: &[S]) -> Result<Vec<String>, FilterError> {
    raw.iter()
        .map(|p| p.as_ref().parse::<WorkflowPhase>().map(|p| p.as_str().to_string()))
        .collect()
}

/// Default phase universe as owned strings.
#[must_use]
pub fn default_phase_universe() -> Vec<String> {
    WorkflowPhase::ALL
        .iter()
        .map(|p| p.as_str().to_string())
        .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::{Workflow, WorkflowStatus};
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    /// Build a workflow from label pairs and an optional phase.
    pub fn workflow(name: &str, labels: &[(&str, &str)], phase: Option<&str>) -> Workflow {
        let labels = if labels.is_empty() {
            None
        } else {
            Some(
                labels
                    .iter()
                    .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                    .collect(),
            )
        };
        Workflow {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                labels,
                ..ObjectMeta::default()
            },
            status: WorkflowStatus {
                phase: phase.map(str::to_string),
                ..WorkflowStatus::default()
            },
        }
    }
}
