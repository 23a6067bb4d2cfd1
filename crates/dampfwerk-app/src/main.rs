// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Dampfwerk — diagnostic CLI for the platform bridge.
//
// Entry point. Initialises logging, resolves the app id, and drives the
// bridge through the same call sequence a C caller would use.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use dampfwerk_core::config::{self, LaunchConfig};
use dampfwerk_core::error::{DampfwerkError, Result};
use dampfwerk_core::human_errors::humanize_error;
use dampfwerk_core::types::AppId;

#[derive(Parser)]
#[command(
    name = "dampfwerk",
    about = "Diagnostics for the Dampfwerk platform bridge",
    version
)]
struct Cli {
    /// Path to a JSON launch config
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the bridge end to end: init, report, shutdown
    Doctor {
        /// App id to report and (with the config flag set) stage in the
        /// development app-id file
        #[arg(long)]
        app_id: Option<u32>,
    },
    /// Run the relaunch check and report the vendor's verdict
    RestartCheck {
        /// App id to check (falls back to the config, then the development
        /// app-id file in the current directory)
        #[arg(long, conflicts_with = "invalid_id")]
        app_id: Option<u32>,
        /// Use the reserved invalid-id sentinel instead of a real id
        #[arg(long)]
        invalid_id: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let launch = match load_config(cli.config.as_deref()) {
        Ok(launch) => launch,
        Err(err) => return report_error(&err),
    };

    match cli.command {
        Commands::Doctor { app_id } => doctor(&launch, app_id.map(AppId)),
        Commands::RestartCheck { app_id, invalid_id } => {
            restart_check(&launch, app_id.map(AppId), invalid_id)
        }
    }
}

/// Load the launch config, or fall back to defaults when no path was given.
fn load_config(path: Option<&Path>) -> Result<LaunchConfig> {
    match path {
        Some(path) => LaunchConfig::load(path),
        None => Ok(LaunchConfig::default()),
    }
}

/// App id resolution order: command-line flag, then config, then the
/// development app-id file in `dir`.
fn resolve_app_id(
    flag: Option<AppId>,
    launch: &LaunchConfig,
    dir: &Path,
) -> Result<Option<AppId>> {
    if let Some(id) = flag {
        return Ok(Some(id));
    }
    if let Some(id) = launch.app_id {
        return Ok(Some(id));
    }
    config::read_dev_app_id_file(dir)
}

/// Walk the bridge through a full session the way a C caller would.
fn doctor(launch: &LaunchConfig, flag_id: Option<AppId>) -> ExitCode {
    let runtime = dampfwerk_bridge::platform_runtime();
    println!("Runtime:  {}", runtime.runtime_name());

    let app_id = match resolve_app_id(flag_id, launch, Path::new(".")) {
        Ok(app_id) => app_id,
        Err(err) => return report_error(&err),
    };

    match app_id {
        Some(id) => {
            println!("App id:   {id}");
            if launch.write_dev_app_id_file {
                match config::write_dev_app_id_file(Path::new("."), id) {
                    Ok(path) => println!("Staged:   {}", path.display()),
                    Err(err) => tracing::warn!(error = %err, "could not stage app-id file"),
                }
            }
        }
        None => println!("App id:   (none configured)"),
    }

    match dampfwerk_bridge::init() {
        Ok(()) => {
            println!("Init:     ok");
            dampfwerk_bridge::shutdown();
            println!("Shutdown: ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let human = humanize_error(&err);
            println!("Init:     failed — {}", human.message);
            println!("          {}", human.suggestion);
            ExitCode::FAILURE
        }
    }
}

/// Run the relaunch check and print the verdict.
fn restart_check(launch: &LaunchConfig, flag_id: Option<AppId>, invalid_id: bool) -> ExitCode {
    let relaunch = if invalid_id {
        dampfwerk_bridge::restart_app_if_necessary_diagnostic()
    } else {
        let app_id = match resolve_app_id(flag_id, launch, Path::new(".")) {
            Ok(Some(id)) => id,
            Ok(None) => {
                eprintln!(
                    "no app id given — pass --app-id, set one in the config, or use --invalid-id"
                );
                return ExitCode::FAILURE;
            }
            Err(err) => return report_error(&err),
        };
        dampfwerk_bridge::restart_app_if_necessary(app_id)
    };

    if relaunch {
        println!("Relaunch required: the vendor has restarted the title under the launcher. Exit now.");
    } else {
        println!("No relaunch needed.");
    }
    ExitCode::SUCCESS
}

fn report_error(err: &DampfwerkError) -> ExitCode {
    let human = humanize_error(err);
    eprintln!("{} {}", human.message, human.suggestion);
    ExitCode::FAILURE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_config_and_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        config::write_dev_app_id_file(dir.path(), AppId(111)).expect("write");
        let launch = LaunchConfig {
            app_id: Some(AppId(222)),
            write_dev_app_id_file: false,
        };
        let id = resolve_app_id(Some(AppId(333)), &launch, dir.path()).expect("resolve");
        assert_eq!(id, Some(AppId(333)));
    }

    #[test]
    fn config_wins_over_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        config::write_dev_app_id_file(dir.path(), AppId(111)).expect("write");
        let launch = LaunchConfig {
            app_id: Some(AppId(222)),
            write_dev_app_id_file: false,
        };
        let id = resolve_app_id(None, &launch, dir.path()).expect("resolve");
        assert_eq!(id, Some(AppId(222)));
    }

    #[test]
    fn file_is_the_last_resort() {
        let dir = tempfile::tempdir().expect("tempdir");
        config::write_dev_app_id_file(dir.path(), AppId(111)).expect("write");
        let id = resolve_app_id(None, &LaunchConfig::default(), dir.path()).expect("resolve");
        assert_eq!(id, Some(AppId(111)));
    }

    #[test]
    fn nothing_configured_resolves_to_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let id = resolve_app_id(None, &LaunchConfig::default(), dir.path()).expect("resolve");
        assert_eq!(id, None);
    }
}
