//! `poc` binary entry point: configuration, logging and command dispatch.

pub mod commands;
pub mod ui;

use anyhow::Result;
use clap::Parser;
use poc_core::cli::{Cli, Command};
use poc_core::config::AppConfig;
use poc_core::logging;
use poc_tui::wizard::{self, LaunchOptions};
use std::path::PathBuf;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::discover(cli.config.as_deref())?
        .with_overrides(cli.output_dir.clone(), cli.log_file.clone());

    let interactive = cli.command.is_none() && !cli.dump_tui;
    logging::init_with(log_target(&config, interactive), log_level(&config));

    let output_dir = config.output_dir();
    let options = LaunchOptions {
        output_dir: output_dir.clone(),
        cloud_init_defaults: config.cloud_init.to_patch(),
        ..LaunchOptions::default()
    };

    if cli.dump_tui {
        for dump in wizard::dump_all_steps(options) {
            println!("{}", dump);
        }
        return Ok(());
    }

    match &cli.command {
        // No subcommand = launch the wizard (default)
        None => {
            log::info!("Launching POC wizard (output: {})", output_dir.display());
            wizard::run(options)?;
        }
        Some(Command::Validate { plan }) => commands::validate(plan)?,
        Some(Command::CloudInit {
            plan,
            format,
            out,
            yes,
        }) => commands::cloud_init(plan, *format, out.as_deref(), *yes)?,
        Some(Command::Report { plan, out, yes }) => {
            commands::report(plan, out.as_deref(), &output_dir, *yes)?
        }
        Some(Command::Requirements) => print!("{}", commands::requirements_table()),
    }

    Ok(())
}

/// The wizard always logs to a file so the alternate screen stays clean.
fn log_target(config: &AppConfig, interactive: bool) -> Option<PathBuf> {
    match &config.log_file {
        Some(path) => Some(path.clone()),
        None if interactive => Some(config.output_dir().join(logging::DEFAULT_LOG_FILE)),
        None => None,
    }
}

fn log_level(config: &AppConfig) -> log::LevelFilter {
    config
        .log_level
        .as_deref()
        .map(logging::parse_level)
        .unwrap_or(log::LevelFilter::Info)
}
