use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use pm_translate::{run, ConversionReport, Outcome, RunOptions, TranslatePaths};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pm-translate")]
#[command(about = "Generate OpenCode commands and agents from Claude Code plugin sources", long_about = None)]
#[command(version)]
struct Cli {
    /// Plugin root containing commands/ and agents/ (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Output root (defaults to <root>/.opencode)
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Translate and report without writing any files
    #[arg(long)]
    dry_run: bool,

    /// Print the conversion report as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_report(report: &ConversionReport) {
    for outcome in &report.outcomes {
        match outcome {
            Outcome::Converted { kind, name, output } => {
                let file_name = output
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                println!(
                    "{} {}: {} → {}",
                    "✓".green().bold(),
                    kind,
                    name,
                    file_name.cyan()
                );
            }
            Outcome::Skipped { kind, name, reason } => {
                eprintln!(
                    "{} Skipping {} {} ({})",
                    "⚠".yellow().bold(),
                    kind,
                    name,
                    reason
                );
            }
        }
    }

    println!();
    let label = if report.dry_run { "Dry run done!" } else { "Done!" };
    println!(
        "{} Commands: {}, Agents: {}",
        label.bold(),
        report.commands_converted(),
        report.agents_converted()
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir().context("Could not determine current directory")?,
    };
    let paths = TranslatePaths::new(&root, cli.out.as_deref());
    let options = RunOptions {
        dry_run: cli.dry_run,
    };

    let report = run(&paths, options)
        .with_context(|| format!("Failed to translate plugin at {}", root.display()))?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report.summary())
            .context("Failed to serialize report")?;
        println!("{json}");
    } else {
        print_report(&report);
    }

    Ok(())
}
