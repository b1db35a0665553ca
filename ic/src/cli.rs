//! CLI argument parsing for issuecreator

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ic")]
#[command(author, version, about = "Create GitHub issues from issue templates", long_about = None)]
pub struct Cli {
    /// Parse templates and report without creating issues
    #[arg(long)]
    pub dry_run: bool,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,
}
