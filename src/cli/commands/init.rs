use std::{fs, path::Path};

use anyhow::{Context, Result, bail};

use super::InitSummary;
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init(dir: &Path) -> Result<InitSummary> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write file: {}", config_path.display()))?;

    Ok(InitSummary { config_path })
}
