//! Issue tracker client
//!
//! [`IssueTracker`] is the seam between the orchestrator and the outside
//! world. [`GhCli`] implements it by running the GitHub CLI.

use std::process::Command;

use log::debug;

/// Issue fields handed to the tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
    /// Comma-delimited labels, omitted from the call when empty
    pub labels: String,
}

/// Result of one creation attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateOutcome {
    pub success: bool,
    /// Standard output, usually the created issue URL
    pub stdout: String,
    /// Standard error, diagnostic text on failure
    pub stderr: String,
}

impl CreateOutcome {
    pub fn created(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failed(stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// Capability needed to file issues
pub trait IssueTracker {
    /// Whether the client is installed and logged in
    fn is_authenticated(&self) -> bool;

    /// Create one issue
    fn create(&self, issue: &NewIssue) -> CreateOutcome;
}

/// Files issues through `gh issue create`
#[derive(Debug, Clone)]
pub struct GhCli {
    program: String,
    repo: String,
}

impl GhCli {
    pub fn new(program: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            repo: repo.into(),
        }
    }

    /// Arguments for `gh issue create`
    pub fn create_args(&self, issue: &NewIssue) -> Vec<String> {
        let mut args = vec![
            "issue".to_string(),
            "create".to_string(),
            "--repo".to_string(),
            self.repo.clone(),
            "--title".to_string(),
            issue.title.clone(),
            "--body".to_string(),
            issue.body.clone(),
        ];

        if !issue.labels.is_empty() {
            args.push("--label".to_string());
            args.push(issue.labels.clone());
        }

        args
    }
}

impl IssueTracker for GhCli {
    fn is_authenticated(&self) -> bool {
        debug!("GhCli::is_authenticated: running {} auth status", self.program);
        match Command::new(&self.program).args(["auth", "status"]).output() {
            Ok(output) => {
                debug!("GhCli::is_authenticated: status={:?}", output.status);
                output.status.success()
            }
            Err(e) => {
                debug!("GhCli::is_authenticated: failed to run {}: {}", self.program, e);
                false
            }
        }
    }

    fn create(&self, issue: &NewIssue) -> CreateOutcome {
        let args = self.create_args(issue);
        debug!("GhCli::create: title={:?} labels={:?}", issue.title, issue.labels);

        match Command::new(&self.program).args(&args).output() {
            Ok(output) => {
                debug!("GhCli::create: status={:?}", output.status);
                CreateOutcome {
                    success: output.status.success(),
                    stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
                    stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
                }
            }
            Err(e) => CreateOutcome::failed(format!("Failed to run {}: {}", self.program, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(labels: &str) -> NewIssue {
        NewIssue {
            title: "Example Bug".to_string(),
            body: "Something is broken.".to_string(),
            labels: labels.to_string(),
        }
    }

    #[test]
    fn test_create_args_with_labels() {
        let gh = GhCli::new("gh", "acme/widgets");
        let args = gh.create_args(&issue("bug, high-priority"));
        assert_eq!(
            args,
            vec![
                "issue",
                "create",
                "--repo",
                "acme/widgets",
                "--title",
                "Example Bug",
                "--body",
                "Something is broken.",
                "--label",
                "bug, high-priority",
            ]
        );
    }

    #[test]
    fn test_create_args_omit_empty_labels() {
        let gh = GhCli::new("gh", "acme/widgets");
        let args = gh.create_args(&issue(""));
        assert!(!args.iter().any(|a| a == "--label"));
        assert_eq!(args.len(), 8);
    }

    #[test]
    fn test_missing_binary_is_not_authenticated() {
        let gh = GhCli::new("definitely-not-a-real-gh-binary", "acme/widgets");
        assert!(!gh.is_authenticated());
    }

    #[test]
    fn test_missing_binary_create_fails() {
        let gh = GhCli::new("definitely-not-a-real-gh-binary", "acme/widgets");
        let outcome = gh.create(&issue("bug"));
        assert!(!outcome.success);
        assert!(outcome.stderr.contains("definitely-not-a-real-gh-binary"));
    }
}
