//! Configuration for issuecreator

use eyre::{Context, Result};
use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::category::Category;

/// One template to turn into an issue
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IssueEntry {
    /// Template file name, relative to the templates directory
    pub file: String,

    /// Priority group reported in the breakdown
    #[serde(default)]
    pub category: Category,
}

impl IssueEntry {
    pub fn new(file: impl Into<String>, category: Category) -> Self {
        Self {
            file: file.into(),
            category,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target repository as `owner/name`
    pub repo: String,

    /// Directory holding the template files
    #[serde(rename = "templates-dir")]
    pub templates_dir: PathBuf,

    /// GitHub CLI binary
    #[serde(rename = "gh-command")]
    pub gh_command: String,

    /// Pause between consecutive creations in milliseconds
    #[serde(rename = "delay-ms")]
    pub delay_ms: u64,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,

    /// Templates in creation order
    pub issues: Vec<IssueEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repo: crate::DEFAULT_REPO.to_string(),
            templates_dir: PathBuf::from("."),
            gh_command: "gh".to_string(),
            delay_ms: crate::DEFAULT_DELAY_MS,
            log_level: None,
            issues: default_issues(),
        }
    }
}

/// The fourteen templates filed from the bug report, in priority order
pub fn default_issues() -> Vec<IssueEntry> {
    use Category::*;

    [
        ("issue-01-stdio-transport-cancellation.md", HighPriority),
        ("issue-02-namedpipe-transport-cancellation.md", HighPriority),
        ("issue-03-event-subscription-memory-leak.md", HighPriority),
        ("issue-04-timeout-middleware-cancellation.md", HighPriority),
        ("issue-05-server-stop-verification.md", MediumPriority),
        ("issue-06-client-disconnect-verification.md", MediumPriority),
        ("issue-07-schema-generator-readonly-properties.md", MediumPriority),
        ("issue-08-stdio-transport-flush-cancellation.md", MediumPriority),
        ("issue-09-namedpipe-transport-sync-flush.md", MediumPriority),
        ("issue-10-namedpipe-send-cancellation.md", MediumPriority),
        ("issue-11-websocket-unnecessary-await.md", LowPriority),
        ("issue-12-empty-line-handling.md", LowPriority),
        ("issue-13-empty-catch-blocks.md", CodeQuality),
        ("issue-14-magic-numbers.md", CodeQuality),
    ]
    .into_iter()
    .map(|(file, category)| IssueEntry::new(file, category))
    .collect()
}

impl Config {
    /// Load config from an explicit path, the usual locations, or defaults
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        Ok(Self::load_first(&Self::search_paths()).unwrap_or_default())
    }

    /// Read only the log level, so logging can start before the full load
    ///
    /// Follows the same lookup order as [`Config::load`].
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        let config = match config_path {
            Some(path) => Self::load_from_file(path).ok()?,
            None => Self::load_first(&Self::search_paths())?,
        };
        config.log_level
    }

    /// Implicit config locations, highest priority first
    fn search_paths() -> Vec<PathBuf> {
        // Project-local config: .issuecreator.yml
        let mut paths = vec![PathBuf::from(".issuecreator.yml")];

        // User config: ~/.config/issuecreator/issuecreator.yml
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("issuecreator").join("issuecreator.yml"));
        }

        paths
    }

    /// First existing path that parses; broken files are logged and skipped
    fn load_first(paths: &[PathBuf]) -> Option<Self> {
        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_from_file(path) {
                Ok(config) => return Some(config),
                Err(e) => warn!("Failed to load config from {}: {:#}", path.display(), e),
            }
        }
        None
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let mut config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        // Relative template directories follow the config file
        if config.templates_dir.is_relative()
            && let Some(parent) = path.parent()
        {
            config.templates_dir = parent.join(&config.templates_dir);
        }

        info!("Loaded config from: {}", path.display());
        Ok(config)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// URL of the repository's issue list
    pub fn issues_url(&self) -> String {
        format!("https://github.com/{}/issues", self.repo)
    }
}
