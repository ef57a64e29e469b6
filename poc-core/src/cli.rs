//! CLI argument parsing for the POC assistant
//!
//! Launches the TUI wizard when no subcommand is provided.

use crate::cloud_config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "poc")]
#[command(version)]
#[command(about = "SUSE Virtualization POC Assistant")]
#[command(long_about = "SUSE Virtualization POC Assistant\n\n\
    Plan a virtualization proof-of-concept: capture client details, validate\n\
    hardware and network plans, generate cloud-init documents and print a report.\n\n\
    Run without arguments to launch the interactive wizard.\n\
    Use subcommands to work with an exported plan from scripts.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// TOML settings file (default: ./poc-assistant.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Directory for exported plans, reports and cloud-init files
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Dump every wizard step's text view to stdout and exit
    #[arg(long, global = true)]
    pub dump_tui: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate an exported plan (exit code 1 when any section is invalid)
    Validate {
        /// Plan exported from the wizard (JSON)
        #[arg(long)]
        plan: PathBuf,
    },

    /// Render per-node cloud-init documents from an exported plan
    CloudInit {
        #[arg(long)]
        plan: PathBuf,

        #[arg(long, value_enum, default_value = "yaml")]
        format: OutputFormat,

        /// Write `<hostname>.<ext>` files here instead of printing
        #[arg(long)]
        out: Option<PathBuf>,

        /// Overwrite existing files without asking
        #[arg(long)]
        yes: bool,
    },

    /// Print or write the summary report for an exported plan
    Report {
        #[arg(long)]
        plan: PathBuf,

        /// Report file; `-` prints to stdout
        #[arg(long)]
        out: Option<PathBuf>,

        #[arg(long)]
        yes: bool,
    },

    /// Print the minimum hardware requirements
    Requirements,
}
