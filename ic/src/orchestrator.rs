//! Sequential issue creation
//!
//! Each entry is handled once, in list order. Per-item failures are counted
//! and the run moves on; only the authentication probe can stop a run, and it
//! happens before the first item.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use colored::*;
use log::{debug, info, warn};
use thiserror::Error;

use crate::config::IssueEntry;
use crate::error::TemplateError;
use crate::report::{ItemOutcome, ItemStatus, RunReport};
use crate::template::TemplateParser;
use crate::tracker::{IssueTracker, NewIssue};

/// Errors that stop a run before any issue is processed
#[derive(Debug, Error)]
pub enum RunError {
    #[error("GitHub CLI is not authenticated or not installed (run: gh auth login)")]
    NotAuthenticated,

    #[error(transparent)]
    Template(#[from] TemplateError),
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory the entry file names resolve against
    pub templates_dir: PathBuf,
    /// Parse and report without calling the tracker
    pub dry_run: bool,
    /// Pause between consecutive tracker calls
    pub delay: Duration,
}

pub struct Orchestrator<'a, T: IssueTracker + ?Sized> {
    tracker: &'a T,
    parser: TemplateParser,
    options: RunOptions,
}

impl<'a, T: IssueTracker + ?Sized> Orchestrator<'a, T> {
    pub fn new(tracker: &'a T, options: RunOptions) -> Result<Self, RunError> {
        Ok(Self {
            tracker,
            parser: TemplateParser::new()?,
            options,
        })
    }

    /// Create one issue per entry and return the tallies
    pub fn run(&self, issues: &[IssueEntry]) -> Result<RunReport, RunError> {
        if !self.options.dry_run {
            println!("Checking GitHub CLI authentication...");
            if !self.tracker.is_authenticated() {
                return Err(RunError::NotAuthenticated);
            }
            println!("{} GitHub CLI is authenticated", "✓".green());
            println!();
        }

        info!("Creating {} issues (dry_run={})", issues.len(), self.options.dry_run);
        println!("Starting issue creation...");
        println!();

        let total = issues.len();
        let mut report = RunReport::new(self.options.dry_run);

        for (i, entry) in issues.iter().enumerate() {
            let status = self.process(entry, i + 1, total);
            report.record(ItemOutcome {
                file: entry.file.clone(),
                category: entry.category,
                status,
            });

            if !self.options.dry_run && i + 1 < total && !self.options.delay.is_zero() {
                debug!("Orchestrator::run: sleeping {:?}", self.options.delay);
                thread::sleep(self.options.delay);
            }
        }

        info!(
            "Finished: {} attempted, {} succeeded, {} failed",
            report.total(),
            report.succeeded,
            report.failed
        );
        Ok(report)
    }

    fn process(&self, entry: &IssueEntry, index: usize, total: usize) -> ItemStatus {
        let path = self.options.templates_dir.join(&entry.file);
        debug!("Orchestrator::process: {}", path.display());

        let template = match self.parser.load(&path) {
            Ok(template) => template,
            Err(e) => {
                warn!("Skipping {} [{}]: {}", entry.file, entry.category, e);
                println!("[{}/{}] {} {}", index, total, "✗".red(), e);
                return ItemStatus::Failed { reason: e.to_string() };
            }
        };

        println!("[{}/{}] Creating issue: {}", index, total, template.title.bold());

        if self.options.dry_run {
            println!("  {} Dry run - would create with labels: {}", "ℹ".blue(), template.labels);
            return ItemStatus::DryRun;
        }

        let outcome = self.tracker.create(&NewIssue {
            title: template.title,
            body: template.body,
            labels: template.labels,
        });

        if outcome.success {
            println!("  {} Created successfully", "✓".green());
            let reference = (!outcome.stdout.is_empty()).then_some(outcome.stdout);
            if let Some(url) = &reference {
                println!("  🔗 {}", url.cyan());
            }
            ItemStatus::Created { reference }
        } else {
            warn!("Failed to create {} [{}]: {}", entry.file, entry.category, outcome.stderr);
            println!("  {} Failed to create: {}", "⚠".yellow(), outcome.stderr);
            ItemStatus::Failed {
                reason: outcome.stderr,
            }
        }
    }
}
