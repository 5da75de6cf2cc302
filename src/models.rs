use serde::{Deserialize, Serialize};

/// Letter grades on the AR23 institutional scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+ (S)")]
    APlus,
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    pub fn points(self) -> u32 {
        match self {
            Grade::APlus => 10,
            Grade::A => 9,
            Grade::B => 8,
            Grade::C => 7,
            Grade::D => 6,
            Grade::E => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectEntry {
    pub grade: Grade,
    pub credit: u32,
}

/// Exactly one entry mode is active per run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GradeInput {
    Manual { sgpas: Vec<f64> },
    FromSubjects { semesters: Vec<Vec<SubjectEntry>> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub grades: GradeInput,
    /// Target CGPA; `None` when no goal is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<f64>,
}

impl InputSnapshot {
    pub fn semester_count(&self) -> usize {
        match &self.grades {
            GradeInput::Manual { sgpas } => sgpas.len(),
            GradeInput::FromSubjects { semesters } => semesters.len(),
        }
    }
}

/// Points for one chart line. `xs[0]`/`ys[0]` is the cosmetic (0, 0) anchor;
/// `labels` carry the formatted values drawn next to each marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub xs: Vec<usize>,
    pub ys: Vec<f64>,
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GoalOutcome {
    /// Literal arithmetic requirement; negative when the goal is already
    /// exceeded.
    Achievable { required_sgpa: f64 },
    BeyondPerfectScore,
    NoSemestersRemaining,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalPlan {
    pub target: f64,
    pub outcome: GoalOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Dipping,
    Steady,
}

impl Trend {
    pub fn message(self) -> &'static str {
        match self {
            Trend::Improving => "You're improving steadily. Great progress!",
            Trend::Dipping => "CGPA trend is slightly dipping. Time to refocus.",
            Trend::Steady => "Stable CGPA across semesters. Keep maintaining consistency.",
        }
    }
}

/// Standing band of the final CGPA. Independent of [`Trend`]; both
/// messages are always shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    BelowSeven,
    NearEight,
    EightPlus,
}

impl Tier {
    pub fn message(self) -> &'static str {
        match self {
            Tier::BelowSeven => "Aim for 7.0+ CGPA to unlock more academic options.",
            Tier::NearEight => "You're almost there! Push to cross the 8.0 mark.",
            Tier::EightPlus => "Excellent performance! Keep the momentum high.",
        }
    }
}

/// Everything a renderer needs for one snapshot. `sgpas` doubles as the
/// per-semester feedback shown while grades are entered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSummary {
    pub sgpas: Vec<f64>,
    pub cgpas: Vec<f64>,
    pub sgpa_series: ChartSeries,
    pub cgpa_series: ChartSeries,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<GoalPlan>,
    pub trend: Trend,
    pub tier: Tier,
}
