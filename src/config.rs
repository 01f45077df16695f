use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".burndownrc.json";

/// Default bound on concurrent patch fetches.
pub const DEFAULT_JOBS: usize = 10;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding the config option modules to scan.
    #[serde(default = "default_source_root")]
    pub source_root: String,
    /// Directory receiving data.csv, data.json and data.txt.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Gerrit changes endpoint, with trailing slash.
    #[serde(default = "default_review_url")]
    pub review_url: String,
    #[serde(default = "default_project")]
    pub project: String,
    /// Repository path of the scanned directory, with trailing slash.
    #[serde(default = "default_path_prefix")]
    pub path_prefix: String,
    /// Changes idle for longer than this Gerrit age are ignored.
    #[serde(default = "default_max_age")]
    pub max_age: String,
    #[serde(default = "default_jobs")]
    pub jobs: usize,
    /// Review service account. Parsed but never sent: reads are anonymous.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Credentials>,
}

#[derive(Clone, Deserialize, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn default_source_root() -> String {
    "nova/nova/conf".to_string()
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_review_url() -> String {
    "https://review.openstack.org/changes/".to_string()
}

fn default_project() -> String {
    "openstack/nova".to_string()
}

fn default_path_prefix() -> String {
    "nova/conf/".to_string()
}

fn default_max_age() -> String {
    "7d".to_string()
}

fn default_jobs() -> usize {
    DEFAULT_JOBS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            output_dir: default_output_dir(),
            review_url: default_review_url(),
            project: default_project(),
            path_prefix: default_path_prefix(),
            max_age: default_max_age(),
            jobs: default_jobs(),
            credentials: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.jobs == 0 {
            bail!("'jobs' must be at least 1");
        }

        if !(self.review_url.starts_with("https://") || self.review_url.starts_with("http://")) {
            bail!(
                "Invalid 'reviewUrl': \"{}\" is not an http(s) URL",
                self.review_url
            );
        }
        if !self.review_url.ends_with('/') {
            bail!(
                "Invalid 'reviewUrl': \"{}\" must end with '/'",
                self.review_url
            );
        }

        if !self.path_prefix.is_empty() && !self.path_prefix.ends_with('/') {
            bail!(
                "Invalid 'pathPrefix': \"{}\" must end with '/'",
                self.path_prefix
            );
        }

        if let Some(credentials) = &self.credentials
            && credentials.username.is_empty()
        {
            bail!("'credentials.username' must not be empty");
        }

        Ok(())
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
    /// File the config was read from; `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
