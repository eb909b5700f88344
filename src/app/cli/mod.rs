//! CLI Adapter.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{AppError, ResolutionOutcome};

#[derive(Parser)]
#[command(name = "verpin")]
#[command(version)]
#[command(
    about = "Reconcile requested dependencies against a managed version catalog",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve requested dependencies and write derived version properties
    #[clap(visible_alias = "r")]
    Resolve {
        /// Path to the project manifest
        #[arg(short, long, default_value = "verpin.toml")]
        manifest: PathBuf,
        /// Path for the derived properties file
        #[arg(short, long, default_value = "versions.properties")]
        output: PathBuf,
        /// Print outcomes as JSON instead of the human report
        #[arg(long)]
        json: bool,
    },
    /// Report resolution state without writing anything
    #[clap(visible_alias = "c")]
    Check {
        /// Path to the project manifest
        #[arg(short, long, default_value = "verpin.toml")]
        manifest: PathBuf,
        /// Treat unmanaged versionless dependencies as failures
        #[arg(long)]
        strict: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Resolve { manifest, output, json } => {
            run_resolve(manifest, output, json).map(|_| 0)
        }
        Commands::Check { manifest, strict } => run_check(manifest, strict),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_resolve(manifest: PathBuf, output: PathBuf, json: bool) -> Result<(), AppError> {
    let report = crate::resolve(&manifest, &output)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report.outcomes)?);
        return Ok(());
    }

    for outcome in &report.outcomes {
        match outcome {
            ResolutionOutcome::Resolved { key, description, .. } => {
                println!("found managed dependency: {}", key);
                println!("extend managed version with: {}", description);
            }
            ResolutionOutcome::UnmanagedNoVersion { key } => {
                println!(
                    "⚠️  no managed dependency found for {} - ignoring dependency in case of missing version",
                    key
                );
            }
            ResolutionOutcome::UnmanagedHasVersion { .. } => {}
        }
    }

    println!(
        "✅ Wrote {} version properties to {}",
        report.resolved,
        report.properties_path.display()
    );
    Ok(())
}

fn run_check(manifest: PathBuf, strict: bool) -> Result<i32, AppError> {
    let report = crate::check(&manifest, strict)?;

    println!("{} resolved from managed catalog", report.resolved);
    println!("{} with explicit version (unmanaged)", report.unmanaged_has_version);
    if report.unmanaged_no_version.is_empty() {
        println!("✅ All requested dependencies have a version source");
    } else {
        println!(
            "⚠️  {} unmanaged dependencies without version:",
            report.unmanaged_no_version.len()
        );
        for key in &report.unmanaged_no_version {
            println!("   - {}", key);
        }
    }

    Ok(report.exit_code)
}
