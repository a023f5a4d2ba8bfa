//! Command-line interface definition using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// AI Router - route development tasks to the best-fitting agent
#[derive(Parser, Debug)]
#[command(name = "ai-router")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to state directory
    #[arg(short, long, env = "AI_ROUTER_STATE_DIR")]
    pub state_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the agent for a task
    Resolve {
        /// Workflow phase (planning, execution, evaluation); extracted
        /// from a leading prompt keyword when omitted
        #[arg(short, long)]
        phase: Option<String>,

        /// File path the task concerns
        #[arg(short, long)]
        file: Option<String>,

        /// Project type hint (e.g. "infrastructure")
        #[arg(long)]
        project_type: Option<String>,

        /// Agent recommended by a prior planning resolution
        #[arg(long)]
        recommend: Option<String>,

        /// Output format (table, json)
        #[arg(short = 'o', long, default_value = "table")]
        format: OutputFormat,

        /// The task prompt
        #[arg(required = true, trailing_var_arg = true)]
        prompt: Vec<String>,
    },

    /// List the agents available for resolution
    Agents {
        /// Output format (table, json)
        #[arg(short = 'o', long, default_value = "table")]
        format: OutputFormat,
    },

    /// Run the plan/execute/evaluate workflow for a task (dry-run runner)
    Run {
        /// Evaluation score at which the loop stops retrying
        #[arg(long, default_value_t = 0.8)]
        threshold: f64,

        /// Maximum execution attempts
        #[arg(long, default_value_t = 3)]
        max_attempts: u32,

        /// The task prompt
        #[arg(required = true, trailing_var_arg = true)]
        task: Vec<String>,
    },
}

/// Output format for printing commands
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Cli {
    /// Returns the state directory path, using the default if not specified.
    pub fn state_dir(&self) -> PathBuf {
        self.state_dir
            .clone()
            .unwrap_or_else(router_engine::paths::state_dir)
    }

    /// Log level derived from the verbosity count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
