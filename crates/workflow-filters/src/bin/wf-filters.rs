//! CLI for workflow filter options
//!
//! Reads a workflow list (`kubectl get workflows -o json`) and prints what a
//! filter panel would offer. Run `wf-filters --help` for usage information.

// CLI binaries legitimately need println! for user output
#![allow(clippy::disallowed_macros)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use workflow_filters::model::parse_phases;
use workflow_filters::{
    FilterConfig, FilterOptions, FilterSelection, FilterState, NameFilter, Workflow, WorkflowList,
};

#[derive(Parser)]
#[command(name = "wf-filters")]
#[command(about = "Derive filter options from Argo workflow lists")]
#[command(version)]
struct Cli {
    /// Output format: json, text
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON config file (defaults to $WORKFLOW_FILTERS_CONFIG, then built-in defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print label suggestions for the label filter
    Suggest {
        /// Workflow list JSON file (reads stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Print per-phase workflow counts
    Phases {
        /// Workflow list JSON file (reads stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Print the label selector for a set of selections
    Selector {
        /// Label in key=value form (repeatable)
        #[arg(short, long)]
        label: Vec<String>,

        /// Phase to include (repeatable)
        #[arg(short, long)]
        phase: Vec<String>,

        /// Filter by workflow template name (replaces --label)
        #[arg(long)]
        template: Option<String>,

        /// Filter by cron workflow name (replaces --label)
        #[arg(long)]
        cron: Option<String>,
    },

    /// List the name filter modes
    NameModes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => FilterConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => FilterConfig::from_env().context("Failed to load config from environment")?,
    };
    debug!(?config, "Using filter config");

    match cli.command {
        Commands::Suggest { file } => {
            let workflows = read_workflows(file.as_deref())?;
            let suggestions = FilterOptions::new(&config).label_suggestions(&workflows);
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&*suggestions)?),
                OutputFormat::Text => {
                    for s in suggestions.iter() {
                        println!("{s}");
                    }
                }
            }
        }
        Commands::Phases { file } => {
            let workflows = read_workflows(file.as_deref())?;
            let phases = FilterOptions::new(&config).phase_items(&workflows);
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&*phases)?),
                OutputFormat::Text => {
                    for p in phases.iter() {
                        println!("{:<12} {}", p.name, p.count);
                    }
                }
            }
        }
        Commands::Selector {
            label,
            phase,
            template,
            cron,
        } => {
            let mut state = FilterState::new(FilterSelection::default());
            state.set_labels(label);
            if let Some(name) = template {
                state.select_workflow_template(&name);
            }
            if let Some(name) = cron {
                state.select_cron_workflow(&name);
            }
            let phases = parse_phases(&phase).context("Invalid --phase value")?;
            state.set_phases(phases);

            let selection = state.selection();
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(selection)?),
                OutputFormat::Text => println!("{}", selection.label_selector()),
            }
        }
        Commands::NameModes => match cli.format {
            OutputFormat::Json => {
                let modes: Vec<_> = NameFilter::ALL
                    .iter()
                    .map(|m| serde_json::json!({"id": m.id(), "title": m.title()}))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&modes)?);
            }
            OutputFormat::Text => {
                for m in NameFilter::ALL {
                    println!("{:<10} {}", m.id(), m.title());
                }
            }
        },
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "workflow_filters=debug,wf_filters=debug"
    } else {
        "workflow_filters=info,wf_filters=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn read_workflows(file: Option<&Path>) -> Result<Arc<[Workflow]>> {
    let body = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read workflow list from stdin")?;
            buf
        }
    };

    let list = WorkflowList::from_json(&body).context("Failed to parse workflow list")?;
    info!(workflows = list.items.len(), "Loaded workflow list");
    Ok(Arc::from(list.items))
}
