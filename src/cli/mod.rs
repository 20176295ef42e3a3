//! Command-line interface layer.
//!
//! - `args`: clap definitions and legacy flag rewriting
//! - `run`: the translation pipeline
//! - `report`: user-facing messages
//! - `logging`: tracing subscriber setup

mod args;
mod exit_status;
mod init;
mod logging;
pub mod report;
mod run;

use std::env;

use anyhow::{Context, Result};

pub use args::{Arguments, Command, RunArgs, normalize_legacy_flags};
pub use exit_status::ExitStatus;
pub use run::{RunSettings, RunSummary, run};

use crate::config::load_config;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    logging::init_tracing(args.run.verbose);

    let cwd = env::current_dir().context("Failed to read the current directory")?;

    if matches!(args.command, Some(Command::Init)) {
        init::init(&cwd)?;
        return Ok(ExitStatus::Success);
    }

    let loaded = load_config(&cwd)?;
    if let Some(path) = &loaded.source {
        tracing::debug!(path = %path.display(), "loaded config file");
    }

    let verbose = args.run.verbose;
    let settings = RunSettings::resolve(args.run, &loaded.config, &cwd)?;
    let mut translator = settings.engine.build(&settings.engine_settings);

    let summary = run(&settings, translator.as_mut())?;
    report::print_summary(&summary, verbose);

    Ok(ExitStatus::from(&summary))
}
