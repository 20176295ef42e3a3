use std::{fs, path::Path};

use anyhow::{Result, bail};

use super::report;
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write the default configuration file into `dir`.
pub fn init(dir: &Path) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(&config_path, default_config_json()? + "\n")?;
    report::info(&format!("Created {}", CONFIG_FILE_NAME));
    Ok(())
}
