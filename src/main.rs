use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgGroup, Parser, Subcommand};

mod aggregate;
mod input;
mod models;
mod progress;
mod report;

use models::{InputSnapshot, ProgressSummary};

#[derive(Parser)]
#[command(name = "gpa-progress-planner")]
#[command(about = "Semester GPA visualizer and CGPA goal planner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a sample input snapshot
    Sample {
        #[arg(long, default_value = "snapshot.json")]
        out: PathBuf,
    },
    /// Build a snapshot from a subject-grades CSV file
    Import {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long, default_value = "snapshot.json")]
        out: PathBuf,
    },
    /// Compute the SGPA/CGPA progression for a snapshot
    #[command(group(
        ArgGroup::new("source")
            .args(["input", "csv"])
            .required(true)
            .multiple(false)
    ))]
    Compute {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Emit the full summary as JSON for a chart renderer
        #[arg(long)]
        json: bool,
    },
    /// Solve the SGPA required next semester for a CGPA goal
    #[command(group(
        ArgGroup::new("source")
            .args(["input", "csv"])
            .required(true)
            .multiple(false)
    ))]
    Goal {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Target CGPA; overrides the goal stored in the snapshot
        #[arg(long)]
        target: Option<f64>,
    },
    /// Generate a markdown progress report
    #[command(group(
        ArgGroup::new("source")
            .args(["input", "csv"])
            .required(true)
            .multiple(false)
    ))]
    Report {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sample { out } => {
            let snapshot = input::sample_snapshot();
            input::save_snapshot(&out, &snapshot)?;
            println!("Sample snapshot written to {}.", out.display());
        }
        Commands::Import { csv, out } => {
            let snapshot = input::snapshot_from_csv(&csv)?;
            let sgpas = aggregate::sgpa_sequence(&snapshot.grades);

            for (i, sgpa) in sgpas.iter().enumerate() {
                println!("Calculated SGPA for Sem {}: {:.2}", i + 1, sgpa);
            }

            input::save_snapshot(&out, &snapshot)?;
            println!(
                "Snapshot with {} semesters written to {}.",
                sgpas.len(),
                out.display()
            );
        }
        Commands::Compute { input, csv, json } => {
            let snapshot = load_source(input.as_deref(), csv.as_deref())?;
            let summary = progress::recompute(&snapshot);

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_summary(&summary);
            }
        }
        Commands::Goal { input, csv, target } => {
            let snapshot = load_source(input.as_deref(), csv.as_deref())?;
            let target = target
                .or(snapshot.goal)
                .context("no goal target: pass --target or set one in the snapshot")?
                .clamp(0.0, 10.0);

            let snapshot = InputSnapshot {
                goal: Some(target),
                ..snapshot
            };
            let summary = progress::recompute(&snapshot);

            if let Some(plan) = &summary.goal {
                println!("{}", report::describe_goal(plan));
            }
        }
        Commands::Report { input, csv, out } => {
            let snapshot = load_source(input.as_deref(), csv.as_deref())?;
            let summary = progress::recompute(&snapshot);
            let generated_on = chrono::Utc::now().date_naive();
            let report = report::build_report(&summary, generated_on);

            std::fs::write(&out, report)?;
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}

fn load_source(input: Option<&Path>, csv: Option<&Path>) -> anyhow::Result<InputSnapshot> {
    match (input, csv) {
        (Some(path), _) => input::load_snapshot(path),
        (_, Some(path)) => input::snapshot_from_csv(path),
        _ => anyhow::bail!("pass --input or --csv"),
    }
}

fn print_summary(summary: &ProgressSummary) {
    println!("Academic progress across {} semesters:", summary.sgpas.len());

    for (i, (sgpa, cgpa)) in summary.sgpas.iter().zip(summary.cgpas.iter()).enumerate() {
        println!("- Sem {}: SGPA {:.2}, CGPA {:.2}", i + 1, sgpa, cgpa);
    }

    if let Some(plan) = &summary.goal {
        println!("{}", report::describe_goal(plan));
    }

    println!("{}", summary.trend.message());
    println!("{}", summary.tier.message());
}
