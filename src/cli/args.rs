//! CLI argument definitions using clap.
//!
//! The tool runs one translation pass per invocation, driven by flags:
//!
//! - `-p`: path of `project.json`
//! - `-fl` / `-tl`: source and target locales
//! - `-s`: skip strings already translated to the target locale
//! - `-e` / `-i`: export / import the localization strings
//! - `-o`: write the project minified
//!
//! The `init` subcommand writes a default configuration file.

use std::{ffi::OsString, path::PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::translate::Engine;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = ABOUT)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub run: RunArgs,
}

const ABOUT: &str = "Localize games developed with Pixel Game Maker.\n\n\
    Specify the path of the 'project.json' file, or run from its directory.\n\n\
    By default strings are translated from [auto] to [en_US].";

#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    /// The path to the file containing the information about the game
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Source language for the translation (locale, e.g. en_US, or "auto")
    #[arg(long = "from-lang", visible_alias = "fl", value_name = "LOCALE")]
    pub from_lang: Option<String>,

    /// Destination language for the translation (locale, e.g. en_US)
    #[arg(long = "to-lang", visible_alias = "tl", value_name = "LOCALE")]
    pub to_lang: Option<String>,

    /// Skip strings that already have the destination language (partial localizations)
    #[arg(short, long)]
    pub skip: bool,

    /// Export the localization strings to this path, to process them later
    #[arg(short, long = "export-localization", value_name = "PATH")]
    pub export_localization: Option<PathBuf>,

    /// Import localization strings exported previously instead of extracting them
    #[arg(short, long = "import-localization", value_name = "PATH")]
    pub import_localization: Option<PathBuf>,

    /// Write the project without whitespace to reduce its size and loading time
    #[arg(short, long)]
    pub optimize: bool,

    /// Translation engine
    #[arg(long, value_enum)]
    pub engine: Option<Engine>,

    /// Minimum delay between two translation requests, in milliseconds
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Copy project.json to project.json.bak before writing it
    #[arg(long)]
    pub backup: bool,

    /// Do everything except writing project.json
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .pgmtrc.json configuration file
    Init,
}

/// Two-letter single-dash flags accepted for compatibility, with their long form.
const LEGACY_FLAGS: &[(&str, &str)] = &[("-fl", "--from-lang"), ("-tl", "--to-lang")];

/// Rewrite `-fl` / `-tl` (and `-fl=xx`) to their long forms.
///
/// clap reads `-fl` as the short flags `-f -l`, so these are translated
/// before parsing. Arguments after `--` are left alone.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut options_ended = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if options_ended {
                return arg;
            }
            if arg == "--" {
                options_ended = true;
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            for (short, long) in LEGACY_FLAGS {
                if text == *short {
                    return OsString::from(*long);
                }
                if let Some(value) = text
                    .strip_prefix(short)
                    .and_then(|rest| rest.strip_prefix('='))
                {
                    return OsString::from(format!("{}={}", long, value));
                }
            }
            arg
        })
        .collect()
}
