use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::{ChartSeries, GoalOutcome, GoalPlan, ProgressSummary};

pub fn describe_goal(plan: &GoalPlan) -> String {
    match plan.outcome {
        GoalOutcome::Achievable { required_sgpa } => format!(
            "Score {:.2} SGPA next semester to reach your goal of {}.",
            required_sgpa, plan.target
        ),
        GoalOutcome::BeyondPerfectScore => format!(
            "A CGPA of {} is unreachable even with a perfect 10 SGPA next semester.",
            plan.target
        ),
        GoalOutcome::NoSemestersRemaining => format!(
            "No semesters left. The goal of {} can't be pursued further.",
            plan.target
        ),
    }
}

fn series_line(series: &ChartSeries) -> String {
    series.labels.join(", ")
}

pub fn build_report(summary: &ProgressSummary, generated_on: NaiveDate) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Academic Progress Report");
    let _ = writeln!(
        output,
        "Generated on {} ({} semesters entered)",
        generated_on,
        summary.sgpas.len()
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Semester Averages");

    for (i, (sgpa, cgpa)) in summary.sgpas.iter().zip(summary.cgpas.iter()).enumerate() {
        let _ = writeln!(output, "- Sem {}: SGPA {:.2}, CGPA {:.2}", i + 1, sgpa, cgpa);
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Chart Series");
    let _ = writeln!(output, "- SGPA: {}", series_line(&summary.sgpa_series));
    let _ = writeln!(output, "- CGPA: {}", series_line(&summary.cgpa_series));

    let _ = writeln!(output);
    let _ = writeln!(output, "## Goal Planner");
    match &summary.goal {
        Some(plan) => {
            let _ = writeln!(output, "{}", describe_goal(plan));
        }
        None => {
            let _ = writeln!(output, "No CGPA goal set.");
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Insights");
    let _ = writeln!(output, "- {}", summary.trend.message());
    let _ = writeln!(output, "- {}", summary.tier.message());

    output
}
