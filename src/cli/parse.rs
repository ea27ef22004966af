//! CLI parse: clap types for visgen. No behavior; definitions only.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// visgen CLI - Generate visualization state documents from dashboard configs
#[derive(Parser)]
#[command(name = "visgen")]
#[command(about = "Generate deterministic visualization state documents from layered YAML configs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (settings and relative input paths resolve against it)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Settings file path (overrides default settings loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the visualization state and print it
    Generate {
        #[command(flatten)]
        input: InputArgs,

        /// Which document(s) to emit
        #[arg(long, value_enum, default_value_t = Emit::VisState)]
        emit: Emit,

        /// Sort keys alphabetically
        #[arg(long)]
        sort_keys: bool,

        /// Compact (single-line) JSON
        #[arg(long)]
        compact: bool,

        /// Emit the visualization state as an escaped JSON string
        #[arg(long)]
        vis_state_string: bool,

        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Run the full pipeline and report whether the configs are complete
    Check {
        #[command(flatten)]
        input: InputArgs,
    },
}

/// Input documents and selectors shared by every command
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Visualization config YAML file
    #[arg(long)]
    pub viz: PathBuf,

    /// Select the visualization keyed by this name in the viz file
    #[arg(long)]
    pub viz_name: Option<String>,

    /// Dashboard config YAML file (empty dashboard config if omitted)
    #[arg(long)]
    pub dashboard: Option<PathBuf>,

    /// Select entry N of dashboard.viz in the dashboard file
    #[arg(long)]
    pub dashboard_index: Option<usize>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Emit {
    /// The final visualization state
    VisState,
    /// The reconciled intermediate document
    Intermediate,
    /// Both, as {"intermediate": ..., "visState": ...}
    Both,
}
