//! Running the batch and rendering its report

use crate::cli_bin::args::{Cli, OutputFormat};
use anyhow::{bail, Context, Result};
use byline::{BatchReport, Config, Inserter};
use log::debug;

/// Run the inserter as configured by `cli` and print the report
pub fn run(cli: &Cli) -> Result<()> {
    let base = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let config = cli.apply_to(base);
    debug!("Running with {:?}", config);

    let inserter = Inserter::new(config)?;
    let show_progress = !cli.quiet && cli.format == OutputFormat::Text;

    let report = inserter.run_with_progress(|path| {
        if show_progress {
            let name = path.file_name().unwrap_or(path.as_os_str());
            println!("Working on {}...", name.to_string_lossy());
        }
    })?;

    match cli.format {
        OutputFormat::Text => {
            if cli.quiet {
                for line in failure_lines(&report) {
                    eprintln!("{}", line);
                }
            } else {
                print_text_report(&report, inserter.config().dry_run);
            }
        }
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&report).context("failed to serialize report")?;
            println!("{}", json);
        }
    }

    if !report.is_success() {
        bail!(
            "{} of {} posts could not be processed",
            report.failed.len(),
            report.total()
        );
    }
    Ok(())
}

fn print_text_report(report: &BatchReport, dry_run: bool) {
    let verb = if dry_run { "would insert" } else { "inserted" };

    for post in &report.inserted {
        println!("{}: {} author at line {}", post.path.display(), verb, post.line + 1);
        if let Some(diff) = &post.diff {
            println!("{}", diff);
        }
    }
    for path in &report.skipped {
        println!("{}: already has an author", path.display());
    }
    for line in failure_lines(report) {
        println!("{}", line);
    }

    println!(
        "{} inserted, {} skipped, {} failed",
        report.inserted.len(),
        report.skipped.len(),
        report.failed.len()
    );
}

/// One line per failed post naming the post and the reason
fn failure_lines(report: &BatchReport) -> Vec<String> {
    report
        .failed
        .iter()
        .map(|failed| format!("{}: failed: {}", failed.path.display(), failed.error))
        .collect()
}
