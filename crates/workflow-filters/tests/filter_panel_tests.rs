//! Integration tests for the workflow filter panel.
//!
//! These tests drive the public API the way a list view does: parse a
//! workflow list, derive options, and record selections.

use std::sync::{Arc, Mutex};

use workflow_filters::model::labels;
use workflow_filters::{
    FilterChange, FilterConfig, FilterOptions, FilterState, NameFilter, PhaseCount, Workflow,
    WorkflowList,
};

const WORKFLOW_LIST: &str = r#"{
    "items": [
        {
            "metadata": {
                "name": "nightly-1700000000",
                "namespace": "argo",
                "labels": {
                    "workflows.argoproj.io/cron-workflow": "nightly",
                    "workflows.argoproj.io/phase": "Succeeded"
                }
            },
            "status": {"phase": "Succeeded", "finishedAt": "2026-01-01T00:10:00Z"}
        },
        {
            "metadata": {
                "name": "build-x7k2p",
                "namespace": "argo",
                "labels": {
                    "workflows.argoproj.io/workflow-template": "build",
                    "team": "platform"
                }
            },
            "status": {"phase": "Running"}
        },
        {
            "metadata": {
                "name": "build-q9w3e",
                "namespace": "argo",
                "labels": {
                    "workflows.argoproj.io/workflow-template": "build",
                    "team": "Platform"
                }
            },
            "status": {"phase": "Omitted"}
        },
        {
            "metadata": {"name": "adhoc", "namespace": "argo"},
            "status": {}
        }
    ]
}"#;

fn load() -> Arc<[Workflow]> {
    Arc::from(WorkflowList::from_json(WORKFLOW_LIST).unwrap().items)
}

mod options_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_label_suggestions_from_list() {
        let mut options = FilterOptions::new(&FilterConfig::default());
        let suggestions = options.label_suggestions(&load());

        assert_eq!(
            *suggestions,
            vec![
                "workflows.argoproj.io/cron-workflow",
                "workflows.argoproj.io/workflow-template",
                "team=platform",
                "team=Platform",
                "workflows.argoproj.io/cron-workflow=nightly",
                "workflows.argoproj.io/phase=Succeeded",
                "workflows.argoproj.io/workflow-template=build",
            ]
        );
    }

    #[test]
    fn test_phase_items_from_list() {
        let mut options = FilterOptions::new(&FilterConfig::default());
        let phases = options.phase_items(&load());

        assert_eq!(
            *phases,
            vec![
                PhaseCount::new("Pending", 0),
                PhaseCount::new("Running", 1),
                PhaseCount::new("Succeeded", 1),
                PhaseCount::new("Failed", 0),
                PhaseCount::new("Error", 0),
                PhaseCount::new("Omitted", 1),
            ]
        );
    }

    #[test]
    fn test_new_list_recomputes() {
        let mut options = FilterOptions::new(&FilterConfig::default());
        let first = options.label_suggestions(&load());
        let empty: Arc<[Workflow]> = Arc::from(Vec::new());
        let second = options.label_suggestions(&empty);

        assert_eq!(first.len(), 7);
        assert!(second.is_empty());
    }
}

mod selection_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pick_suggestion_then_template() {
        let changes = Arc::new(Mutex::new(Vec::new()));
        let mut state = FilterState::default().on_change({
            let changes = Arc::clone(&changes);
            move |c: &FilterChange| changes.lock().unwrap().push(c.clone())
        });

        state.set_namespace("argo");
        state.set_labels(vec!["team=platform".to_string()]);
        state.set_phases(vec!["Running".to_string()]);
        state.set_name_filter(NameFilter::Prefix);
        state.set_name_value("build-");

        assert_eq!(
            state.selection().label_selector(),
            "team=platform,workflows.argoproj.io/phase in (Running)"
        );

        state.select_workflow_template("build");
        assert_eq!(
            state.selection().labels,
            vec![format!("{}=build", labels::WORKFLOW_TEMPLATE)]
        );
        assert_eq!(changes.lock().unwrap().len(), 6);
    }
}
