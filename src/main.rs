use std::process::ExitCode;

use clap::Parser;
use pgmt::cli::{Arguments, ExitStatus, normalize_legacy_flags, report};

fn main() -> ExitCode {
    let args = Arguments::parse_from(normalize_legacy_flags(std::env::args_os()));

    match pgmt::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            report::error(&format!("{:#}", err));
            ExitStatus::Error.into()
        }
    }
}
