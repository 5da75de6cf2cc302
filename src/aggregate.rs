use crate::models::{GradeInput, SubjectEntry};

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Credit-weighted grade-point average for one semester. Zero total credit
/// yields 0.0 rather than an error.
pub fn semester_sgpa(subjects: &[SubjectEntry]) -> f64 {
    let mut total_points = 0u32;
    let mut total_credits = 0u32;

    for subject in subjects {
        total_points += subject.grade.points() * subject.credit;
        total_credits += subject.credit;
    }

    if total_credits == 0 {
        0.0
    } else {
        round2(total_points as f64 / total_credits as f64)
    }
}

/// One SGPA per semester. Manual values pass through unchanged; range
/// enforcement belongs to the collection layer, not here.
pub fn sgpa_sequence(input: &GradeInput) -> Vec<f64> {
    match input {
        GradeInput::Manual { sgpas } => sgpas.clone(),
        GradeInput::FromSubjects { semesters } => semesters
            .iter()
            .map(|subjects| semester_sgpa(subjects))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Grade;

    fn subject(grade: Grade, credit: u32) -> SubjectEntry {
        SubjectEntry { grade, credit }
    }

    #[test]
    fn grade_points_follow_the_scale() {
        assert_eq!(Grade::APlus.points(), 10);
        assert_eq!(Grade::A.points(), 9);
        assert_eq!(Grade::B.points(), 8);
        assert_eq!(Grade::C.points(), 7);
        assert_eq!(Grade::D.points(), 6);
        assert_eq!(Grade::E.points(), 5);
    }

    #[test]
    fn sgpa_weights_subjects_by_credit() {
        let subjects = vec![subject(Grade::A, 4), subject(Grade::B, 2)];
        // (9*4 + 8*2) / 6 = 52/6 = 8.666...
        assert!((semester_sgpa(&subjects) - 8.67).abs() < 1e-9);
    }

    #[test]
    fn zero_credit_semester_defaults_to_zero() {
        assert_eq!(semester_sgpa(&[]), 0.0);
    }

    #[test]
    fn manual_values_pass_through_unchanged() {
        let input = GradeInput::Manual {
            sgpas: vec![7.25, 8.5, 9.0],
        };
        assert_eq!(sgpa_sequence(&input), vec![7.25, 8.5, 9.0]);
    }

    #[test]
    fn subject_mode_computes_one_sgpa_per_semester() {
        let input = GradeInput::FromSubjects {
            semesters: vec![
                vec![subject(Grade::APlus, 3), subject(Grade::A, 3)],
                vec![subject(Grade::B, 5)],
            ],
        };
        assert_eq!(sgpa_sequence(&input), vec![9.5, 8.0]);
    }
}
