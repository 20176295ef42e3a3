use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use super::{args::RunArgs, report};
use crate::{
    config::Config,
    localization::{ExportOutcome, Locale, LocalizationTable, SourceLocale},
    project::{Layout, PROJECT_FILE_NAME, ProjectFile},
    translate::{
        Engine, EngineSettings, TranslateOptions, TranslationStats, Translator, translate_table,
    },
};

const PROGRESS_TEMPLATE: &str = "{msg} [{bar:40.cyan/blue}] {pos}/{len} ({eta})";

/// Everything a run needs, after merging flags, config file and defaults.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub project_path: PathBuf,
    pub source: SourceLocale,
    pub target: Locale,
    pub skip_existing: bool,
    pub export_path: Option<PathBuf>,
    pub import_path: Option<PathBuf>,
    pub optimize: bool,
    pub engine: Engine,
    pub engine_settings: EngineSettings,
    pub backup: bool,
    pub dry_run: bool,
}

impl RunSettings {
    /// Flags override the config file, which overrides built-in defaults.
    pub fn resolve(args: RunArgs, config: &Config, cwd: &Path) -> Result<Self> {
        let from_lang = args.from_lang.as_deref().unwrap_or(&config.from_lang);
        let to_lang = args.to_lang.as_deref().unwrap_or(&config.to_lang);

        let mut engine_settings = config.engine_settings();
        if let Some(delay_ms) = args.delay_ms {
            engine_settings.delay = std::time::Duration::from_millis(delay_ms);
        }

        Ok(Self {
            project_path: args
                .path
                .unwrap_or_else(|| cwd.join(PROJECT_FILE_NAME)),
            source: SourceLocale::parse(from_lang).context("Invalid source language")?,
            target: Locale::parse(to_lang).context("Invalid destination language")?,
            skip_existing: args.skip || config.skip,
            export_path: args.export_localization,
            import_path: args.import_localization,
            optimize: args.optimize,
            engine: args.engine.unwrap_or(config.engine),
            engine_settings,
            backup: args.backup || config.backup,
            dry_run: args.dry_run,
        })
    }
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub stats: TranslationStats,
    /// The target locale was not yet a supported game language.
    pub language_added: bool,
    pub original_size: usize,
    /// Bytes written to the project file, `None` on a dry run.
    pub bytes_written: Option<usize>,
}

/// Load the project, translate its text list and write it back.
pub fn run(settings: &RunSettings, translator: &mut dyn Translator) -> Result<RunSummary> {
    report::info(&format!(
        "Selected 'project.json' path: {}",
        settings.project_path.display()
    ));
    report::info(&format!(
        "Translation: '{}' -> '{}'",
        settings.source, settings.target
    ));

    let mut project = ProjectFile::open(&settings.project_path)?;
    debug!(layout = ?project.layout(), size = project.original_size(), "project loaded");

    let mut table = load_table(settings, &project)?;
    debug!(locales = ?table.locales(), "text list loaded");
    if table.is_empty() {
        report::warn("No localizable strings found");
    }

    // Both nodes are written back after translation, check them first.
    LocalizationTable::check_target(&project)?;
    let language_added = project.add_language(&settings.target)?;
    if language_added {
        report::info(&format!(
            "Added '{}' to the languages supported by the game",
            settings.target
        ));
    }

    report::info(&format!(
        "Translating {} strings with the '{}' engine, it may require some time, please wait",
        table.len(),
        translator.name()
    ));
    let options = TranslateOptions {
        source: settings.source.clone(),
        target: settings.target.clone(),
        skip_existing: settings.skip_existing,
    };
    let progress = progress_bar(table.len());
    let stats = translate_table(&mut table, translator, &options, &progress);
    progress.finish_and_clear();
    report::info("All strings processed");

    table.apply(&mut project)?;

    let bytes_written = if settings.dry_run {
        report::info("Dry run, 'project.json' was not modified");
        None
    } else {
        Some(save(settings, &project)?)
    };

    Ok(RunSummary {
        stats,
        language_added,
        original_size: project.original_size(),
        bytes_written,
    })
}

fn load_table(settings: &RunSettings, project: &ProjectFile) -> Result<LocalizationTable> {
    if let Some(import_path) = &settings.import_path {
        report::info(&format!("Importing strings from {}", import_path.display()));
        return LocalizationTable::import(import_path);
    }

    report::info("Extracting localization strings, please wait");
    let table = LocalizationTable::extract(project)?;

    if let Some(export_path) = &settings.export_path {
        match table.export(export_path)? {
            ExportOutcome::Written => {
                report::info(&format!("Strings extracted to {}", export_path.display()))
            }
            ExportOutcome::SkippedExisting => report::warn(&format!(
                "{} already exists, strings were not exported",
                export_path.display()
            )),
        }
    }

    Ok(table)
}

fn save(settings: &RunSettings, project: &ProjectFile) -> Result<usize> {
    if settings.backup {
        match project.backup()? {
            Some(path) => report::info(&format!("Backup saved to {}", path.display())),
            None => report::warn("A backup already exists, it was left untouched"),
        }
    }

    let layout = if settings.optimize {
        report::info("Optimizing the JSON file");
        Layout::Minified
    } else {
        project.layout().clone()
    };

    report::info("Saving 'project.json', it may require some time, please wait");
    let written = project.save(&layout)?;
    report::info("Operation completed");
    Ok(written)
}

fn progress_bar(len: usize) -> ProgressBar {
    let progress = ProgressBar::new(len as u64);
    progress.set_style(
        ProgressStyle::with_template(PROGRESS_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    progress
}
