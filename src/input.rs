use std::io::Read;
use std::path::Path;

use anyhow::Context;

use crate::models::{Grade, GradeInput, InputSnapshot, SubjectEntry};
use crate::progress::TOTAL_SEMESTERS;

/// Widest subject list a semester form offers.
pub const MAX_SUBJECTS_PER_SEMESTER: usize = 12;

pub fn load_snapshot(path: &Path) -> anyhow::Result<InputSnapshot> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let snapshot: InputSnapshot = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid snapshot", path.display()))?;
    clamp_snapshot(snapshot)
}

pub fn save_snapshot(path: &Path, snapshot: &InputSnapshot) -> anyhow::Result<()> {
    let raw = serde_json::to_string_pretty(snapshot)?;
    std::fs::write(path, raw)
        .with_context(|| format!("failed to write snapshot {}", path.display()))?;
    Ok(())
}

/// Build a subject-mode snapshot from CSV rows of `semester,grade,credit`.
pub fn snapshot_from_csv(path: &Path) -> anyhow::Result<InputSnapshot> {
    let reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let snapshot = read_subject_rows(reader)
        .with_context(|| format!("failed to import {}", path.display()))?;
    clamp_snapshot(snapshot)
}

fn read_subject_rows<R: Read>(mut reader: csv::Reader<R>) -> anyhow::Result<InputSnapshot> {
    #[derive(serde::Deserialize)]
    struct CsvRow {
        semester: usize,
        grade: Grade,
        credit: u32,
    }

    let mut semesters: Vec<Vec<SubjectEntry>> = Vec::new();

    for result in reader.deserialize::<CsvRow>() {
        let row = result.context("malformed subject row")?;
        if row.semester == 0 {
            anyhow::bail!("semester numbers are 1-based");
        }
        if semesters.len() < row.semester {
            semesters.resize_with(row.semester, Vec::new);
        }
        semesters[row.semester - 1].push(SubjectEntry {
            grade: row.grade,
            credit: row.credit,
        });
    }

    Ok(InputSnapshot {
        grades: GradeInput::FromSubjects { semesters },
        goal: None,
    })
}

/// Range enforcement for everything the form widgets would have clamped:
/// semester count capped at 8, subject lists at 12, credits pulled into
/// 1..=5, SGPA and goal values into 0..=10. The core pipeline assumes these
/// bounds and never re-checks them.
pub fn clamp_snapshot(snapshot: InputSnapshot) -> anyhow::Result<InputSnapshot> {
    let grades = match snapshot.grades {
        GradeInput::Manual { mut sgpas } => {
            sgpas.truncate(TOTAL_SEMESTERS);
            GradeInput::Manual {
                sgpas: sgpas.into_iter().map(|s| s.clamp(0.0, 10.0)).collect(),
            }
        }
        GradeInput::FromSubjects { mut semesters } => {
            semesters.truncate(TOTAL_SEMESTERS);
            GradeInput::FromSubjects {
                semesters: semesters
                    .into_iter()
                    .map(|mut subjects| {
                        subjects.truncate(MAX_SUBJECTS_PER_SEMESTER);
                        subjects
                            .into_iter()
                            .map(|subject| SubjectEntry {
                                grade: subject.grade,
                                credit: subject.credit.clamp(1, 5),
                            })
                            .collect()
                    })
                    .collect(),
            }
        }
    };

    let snapshot = InputSnapshot {
        grades,
        goal: snapshot.goal.map(|goal| goal.clamp(0.0, 10.0)),
    };

    if snapshot.semester_count() == 0 {
        anyhow::bail!("snapshot contains no semesters");
    }

    Ok(snapshot)
}

pub fn sample_snapshot() -> InputSnapshot {
    InputSnapshot {
        grades: GradeInput::FromSubjects {
            semesters: vec![
                vec![
                    SubjectEntry { grade: Grade::A, credit: 4 },
                    SubjectEntry { grade: Grade::APlus, credit: 3 },
                    SubjectEntry { grade: Grade::B, credit: 3 },
                    SubjectEntry { grade: Grade::C, credit: 2 },
                ],
                vec![
                    SubjectEntry { grade: Grade::B, credit: 4 },
                    SubjectEntry { grade: Grade::B, credit: 3 },
                    SubjectEntry { grade: Grade::A, credit: 3 },
                ],
                vec![
                    SubjectEntry { grade: Grade::A, credit: 5 },
                    SubjectEntry { grade: Grade::APlus, credit: 4 },
                    SubjectEntry { grade: Grade::C, credit: 1 },
                ],
            ],
        },
        goal: Some(8.5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamping_pulls_values_into_widget_ranges() {
        let snapshot = InputSnapshot {
            grades: GradeInput::Manual {
                sgpas: vec![-1.0, 10.7, 8.5],
            },
            goal: Some(12.0),
        };

        let clamped = clamp_snapshot(snapshot).expect("snapshot should survive clamping");
        assert_eq!(
            clamped.grades,
            GradeInput::Manual {
                sgpas: vec![0.0, 10.0, 8.5]
            }
        );
        assert_eq!(clamped.goal, Some(10.0));
    }

    #[test]
    fn oversized_snapshots_are_truncated() {
        let snapshot = InputSnapshot {
            grades: GradeInput::FromSubjects {
                semesters: vec![
                    vec![
                        SubjectEntry {
                            grade: Grade::A,
                            credit: 9
                        };
                        15
                    ];
                    10
                ],
            },
            goal: None,
        };

        let clamped = clamp_snapshot(snapshot).expect("snapshot should survive clamping");
        match clamped.grades {
            GradeInput::FromSubjects { semesters } => {
                assert_eq!(semesters.len(), TOTAL_SEMESTERS);
                assert_eq!(semesters[0].len(), MAX_SUBJECTS_PER_SEMESTER);
                assert!(semesters[0].iter().all(|s| s.credit == 5));
            }
            other => panic!("expected subject mode, got {:?}", other),
        }
    }

    #[test]
    fn empty_snapshot_is_rejected() {
        let snapshot = InputSnapshot {
            grades: GradeInput::Manual { sgpas: vec![] },
            goal: None,
        };
        assert!(clamp_snapshot(snapshot).is_err());
    }

    #[test]
    fn csv_rows_group_by_semester() {
        let data = "\
semester,grade,credit
1,A,4
1,B,2
2,A+ (S),5
";
        let reader = csv::Reader::from_reader(data.as_bytes());
        let snapshot = read_subject_rows(reader).expect("rows should parse");

        match snapshot.grades {
            GradeInput::FromSubjects { semesters } => {
                assert_eq!(semesters.len(), 2);
                assert_eq!(semesters[0].len(), 2);
                assert_eq!(semesters[0][0].grade, Grade::A);
                assert_eq!(semesters[1][0].grade, Grade::APlus);
                assert_eq!(semesters[1][0].credit, 5);
            }
            other => panic!("expected subject mode, got {:?}", other),
        }
    }

    #[test]
    fn csv_rejects_semester_zero() {
        let data = "semester,grade,credit\n0,A,4\n";
        let reader = csv::Reader::from_reader(data.as_bytes());
        assert!(read_subject_rows(reader).is_err());
    }

    #[test]
    fn sample_snapshot_passes_its_own_clamping() {
        let sample = sample_snapshot();
        let clamped = clamp_snapshot(sample.clone()).expect("sample should be in range");
        assert_eq!(clamped, sample);
    }

    #[test]
    fn snapshot_json_round_trips() {
        let sample = sample_snapshot();
        let raw = serde_json::to_string(&sample).expect("sample should serialize");
        let parsed: InputSnapshot = serde_json::from_str(&raw).expect("json should parse");
        assert_eq!(parsed, sample);
    }
}
