//! issuecreator - file GitHub issues from front-matter templates
//!
//! Reads an ordered list of issue templates, each shaped like
//!
//! ```text
//! ---
//! title: "Example Bug"
//! labels: bug, high-priority
//! ---
//! Something is broken.
//! ```
//!
//! and creates one issue per template with `gh issue create`.
//!
//! # Example
//!
//! ```ignore
//! use issuecreator::{Config, GhCli, Orchestrator, RunOptions};
//!
//! let config = Config::default();
//! let gh = GhCli::new(&config.gh_command, &config.repo);
//! let options = RunOptions {
//!     templates_dir: config.templates_dir.clone(),
//!     dry_run: true,
//!     delay: config.delay(),
//! };
//! let report = Orchestrator::new(&gh, options)?.run(&config.issues)?;
//! ```

pub mod category;
pub mod cli;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod report;
pub mod template;
pub mod tracker;

pub use category::Category;
pub use config::{Config, IssueEntry};
pub use error::TemplateError;
pub use orchestrator::{Orchestrator, RunError, RunOptions};
pub use report::{ItemOutcome, ItemStatus, RunReport};
pub use template::{RawTemplate, Template, TemplateParser};
pub use tracker::{CreateOutcome, GhCli, IssueTracker, NewIssue};

/// Repository the bundled templates were written for
pub const DEFAULT_REPO: &str = "MiaoShuYo/AxolotlMCP";

/// Pause between tracker calls (1s)
pub const DEFAULT_DELAY_MS: u64 = 1000;
