use crate::aggregate::{self, round2};
use crate::models::{
    ChartSeries, GoalOutcome, GoalPlan, InputSnapshot, ProgressSummary, Tier, Trend,
};

/// Fixed nominal weight giving every semester an equal share of the
/// cumulative average. Not a real credit total.
pub const SEMESTER_WEIGHT: f64 = 20.0;

/// Length of the full degree program.
pub const TOTAL_SEMESTERS: usize = 8;

pub fn cgpa_sequence(sgpas: &[f64]) -> Vec<f64> {
    let mut total_points = 0.0;
    let mut total_credits = 0.0;

    sgpas
        .iter()
        .map(|sgpa| {
            total_points += sgpa * SEMESTER_WEIGHT;
            total_credits += SEMESTER_WEIGHT;
            round2(total_points / total_credits)
        })
        .collect()
}

/// Chart points with a (0, 0) anchor prepended. The anchor is cosmetic and
/// never feeds back into any average.
pub fn chart_series(values: &[f64]) -> ChartSeries {
    let mut xs = Vec::with_capacity(values.len() + 1);
    let mut ys = Vec::with_capacity(values.len() + 1);
    xs.push(0);
    ys.push(0.0);

    for (i, value) in values.iter().enumerate() {
        xs.push(i + 1);
        ys.push(*value);
    }

    let labels = ys.iter().map(|y| format!("{y:.2}")).collect();
    ChartSeries { xs, ys, labels }
}

/// SGPA required in the single next semester to finish the program at
/// `target` CGPA. The arithmetic result is reported verbatim, so an
/// already-met goal comes back negative rather than clamped to zero.
pub fn solve_goal(cgpas: &[f64], target: f64) -> GoalOutcome {
    let completed = cgpas.len();
    if completed >= TOTAL_SEMESTERS {
        return GoalOutcome::NoSemestersRemaining;
    }

    let current_cgpa = cgpas.last().copied().unwrap_or(0.0);
    let needed_total = target * TOTAL_SEMESTERS as f64 * SEMESTER_WEIGHT;
    let current_total = current_cgpa * completed as f64 * SEMESTER_WEIGHT;
    let required_sgpa = (needed_total - current_total) / SEMESTER_WEIGHT;

    if required_sgpa <= 10.0 {
        GoalOutcome::Achievable { required_sgpa }
    } else {
        GoalOutcome::BeyondPerfectScore
    }
}

pub fn trend(cgpas: &[f64]) -> Trend {
    let first = cgpas.first().copied().unwrap_or(0.0);
    let last = cgpas.last().copied().unwrap_or(0.0);

    if last > first {
        Trend::Improving
    } else if last < first {
        Trend::Dipping
    } else {
        Trend::Steady
    }
}

pub fn tier(final_cgpa: f64) -> Tier {
    if final_cgpa < 7.0 {
        Tier::BelowSeven
    } else if final_cgpa < 8.0 {
        Tier::NearEight
    } else {
        Tier::EightPlus
    }
}

/// The recompute entry point: a pure function from one input snapshot to
/// everything the renderer shows. Hosts call this again on every snapshot
/// change; nothing is kept between calls.
pub fn recompute(snapshot: &InputSnapshot) -> ProgressSummary {
    let sgpas = aggregate::sgpa_sequence(&snapshot.grades);
    let cgpas = cgpa_sequence(&sgpas);
    let final_cgpa = cgpas.last().copied().unwrap_or(0.0);

    ProgressSummary {
        sgpa_series: chart_series(&sgpas),
        cgpa_series: chart_series(&cgpas),
        goal: snapshot.goal.map(|target| GoalPlan {
            target,
            outcome: solve_goal(&cgpas, target),
        }),
        trend: trend(&cgpas),
        tier: tier(final_cgpa),
        sgpas,
        cgpas,
    }
}
