use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{LevelFilter, info};

use issuecreator::cli::Cli;
use issuecreator::config::Config;
use issuecreator::{GhCli, Orchestrator, RunOptions};

fn parse_level(level: Option<&str>) -> LevelFilter {
    match level.map(str::to_uppercase).as_deref() {
        Some("TRACE") => LevelFilter::Trace,
        Some("DEBUG") => LevelFilter::Debug,
        Some("INFO") => LevelFilter::Info,
        Some("WARN") | Some("WARNING") | None => LevelFilter::Warn,
        Some("ERROR") => LevelFilter::Error,
        Some("OFF") => LevelFilter::Off,
        Some(other) => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", other);
            LevelFilter::Warn
        }
    }
}

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // CLI --log-level > config file > WARN, RUST_LOG refines on top
    env_logger::Builder::new()
        .filter_level(parse_level(cli_log_level.or(config_log_level)))
        .parse_default_env()
        .try_init()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    info!("issuecreator starting: repo={} issues={}", config.repo, config.issues.len());

    let rule = "=".repeat(50);
    println!("{}", rule);
    println!("Creating GitHub Issues from issue templates");
    println!("{}", rule);
    println!();
    println!("Repository: {}", config.repo.cyan());
    println!("Total issues to create: {}", config.issues.len());
    if cli.dry_run {
        println!();
        println!("{}", "⚠ DRY RUN MODE - No issues will be created".yellow());
    }
    println!();

    let gh = GhCli::new(&config.gh_command, &config.repo);
    let options = RunOptions {
        templates_dir: config.templates_dir.clone(),
        dry_run: cli.dry_run,
        delay: config.delay(),
    };

    let report = Orchestrator::new(&gh, options)?.run(&config.issues)?;
    report.print_summary(&config.issues_url());

    std::process::exit(report.exit_code());
}
