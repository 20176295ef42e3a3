use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::{
    localization::{Locale, SourceLocale},
    translate::{DEFAULT_ENDPOINT, Engine, EngineSettings},
};

pub const CONFIG_FILE_NAME: &str = ".pgmtrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_from_lang")]
    pub from_lang: String,
    #[serde(default = "default_to_lang")]
    pub to_lang: String,
    #[serde(default)]
    pub skip: bool,
    #[serde(default)]
    pub engine: Engine,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub backup: bool,
}

fn default_from_lang() -> String {
    SourceLocale::AUTO.to_string()
}

fn default_to_lang() -> String {
    "en_US".to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_delay_ms() -> u64 {
    2000
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            from_lang: default_from_lang(),
            to_lang: default_to_lang(),
            skip: false,
            engine: Engine::default(),
            endpoint: default_endpoint(),
            delay_ms: default_delay_ms(),
            timeout_secs: default_timeout_secs(),
            backup: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if a locale code is malformed or the endpoint is not an HTTP URL.
    pub fn validate(&self) -> Result<()> {
        SourceLocale::parse(&self.from_lang).context("Invalid 'fromLang'")?;
        Locale::parse(&self.to_lang).context("Invalid 'toLang'")?;

        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            bail!(
                "Invalid 'endpoint': \"{}\" is not an http(s) URL",
                self.endpoint
            );
        }
        if self.timeout_secs == 0 {
            bail!("Invalid 'timeoutSecs': must be greater than 0");
        }

        Ok(())
    }

    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            endpoint: self.endpoint.clone(),
            delay: Duration::from_millis(self.delay_ms),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the file the config was loaded from, `None` when using defaults.
    pub source: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                source: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            source: None,
        }),
    }
}
