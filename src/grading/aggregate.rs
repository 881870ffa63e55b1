use crate::types::record::SemesterRecord;
use crate::types::report::{CgpaSummary, SemesterRow, SgpaSummary, SubjectResult};
use tracing::debug;

/// Credit-weighted mean of grade points. Subjects with non-positive credit are
/// counted for pass/fail and percentage extremes but never weighted.
pub fn sgpa(results: &[SubjectResult]) -> SgpaSummary {
    let mut weighted_sum = 0.0;
    let mut total_credits = 0.0;
    let mut highest: Option<f64> = None;
    let mut lowest: Option<f64> = None;
    let mut pass_count = 0;
    let mut fail_count = 0;

    for result in results {
        if result.credit > 0.0 {
            weighted_sum += f64::from(result.grade_point) * result.credit;
            total_credits += result.credit;
        }

        if result.max_total > 0.0 {
            highest = Some(highest.map_or(result.percentage, |value| value.max(result.percentage)));
            lowest = Some(lowest.map_or(result.percentage, |value| value.min(result.percentage)));
        }

        if result.grade_point > 0 {
            pass_count += 1;
        } else {
            fail_count += 1;
        }
    }

    let sgpa = if total_credits > 0.0 {
        weighted_sum / total_credits
    } else {
        0.0
    };
    debug!(sgpa, total_credits, pass_count, fail_count, "sgpa computed");

    SgpaSummary {
        sgpa,
        total_credits,
        highest,
        lowest,
        pass_count,
        fail_count,
    }
}

/// Credit-weighted mean of semester SGPAs. Credits are taken as given; entry
/// validation is what keeps them positive.
pub fn cgpa(semesters: &[SemesterRecord]) -> CgpaSummary {
    let rows = semesters
        .iter()
        .enumerate()
        .map(|(index, semester)| SemesterRow {
            index: index + 1,
            sgpa: semester.sgpa,
            credit: semester.credit,
            product: semester.sgpa * semester.credit,
        })
        .collect::<Vec<_>>();

    let total_weighted: f64 = rows.iter().map(|row| row.product).sum();
    let total_credits: f64 = rows.iter().map(|row| row.credit).sum();
    let cgpa = if total_credits > 0.0 {
        total_weighted / total_credits
    } else {
        0.0
    };
    debug!(cgpa, total_credits, semesters = rows.len(), "cgpa computed");

    CgpaSummary {
        cgpa,
        total_credits,
        semesters: rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::subject::evaluate;
    use crate::types::record::SubjectRecord;
    use crate::types::settings::{FailPolicy, GradeCutoffs};

    fn results(records: &[SubjectRecord]) -> Vec<SubjectResult> {
        records
            .iter()
            .map(|record| evaluate(record, &FailPolicy::default(), &GradeCutoffs::FALLBACK))
            .collect()
    }

    #[test]
    fn single_subject_sgpa_equals_grade_point() {
        for credit in [1.0, 4.0, 7.5] {
            let summary = sgpa(&results(&[SubjectRecord::simple("Maths", credit, 100.0, 78.0)]));
            assert_eq!(summary.sgpa, 8.0);
            assert_eq!(summary.total_credits, credit);
            assert_eq!(summary.pass_count, 1);
            assert_eq!(summary.fail_count, 0);
        }
    }

    #[test]
    fn sgpa_is_order_invariant() {
        let records = vec![
            SubjectRecord::simple("A", 4.0, 100.0, 91.0),
            SubjectRecord::simple("B", 3.0, 50.0, 31.0),
            SubjectRecord::simple("C", 2.0, 100.0, 20.0),
            SubjectRecord::simple("D", 1.0, 80.0, 80.0),
        ];
        let forward = sgpa(&results(&records));

        let mut reversed = records.clone();
        reversed.reverse();
        let backward = sgpa(&results(&reversed));

        let mut rotated = records;
        rotated.rotate_left(2);
        let rotated = sgpa(&results(&rotated));

        assert!((forward.sgpa - backward.sgpa).abs() < 1e-12);
        assert!((forward.sgpa - rotated.sgpa).abs() < 1e-12);
        assert_eq!(forward.highest, backward.highest);
        assert_eq!(forward.lowest, rotated.lowest);
    }

    #[test]
    fn sgpa_excludes_non_positive_credit_from_weighting() {
        let summary = sgpa(&results(&[
            SubjectRecord::simple("Core", 4.0, 100.0, 78.0),
            SubjectRecord::simple("Audit", 0.0, 100.0, 96.0),
            SubjectRecord::simple("Broken", -2.0, 100.0, 50.0),
        ]));
        assert_eq!(summary.sgpa, 8.0);
        assert_eq!(summary.total_credits, 4.0);
        assert_eq!(summary.pass_count, 3);
        assert_eq!(summary.highest, Some(96.0));
        assert_eq!(summary.lowest, Some(50.0));
    }

    #[test]
    fn sgpa_counts_failures_and_tracks_extremes() {
        let summary = sgpa(&results(&[
            SubjectRecord::simple("Pass", 3.0, 100.0, 66.0),
            SubjectRecord::simple("Fail", 3.0, 100.0, 20.0),
            SubjectRecord::simple("Zero", 3.0, 100.0, 0.0),
            SubjectRecord::simple("NoMarks", 3.0, 0.0, 0.0),
        ]));
        assert_eq!(summary.pass_count, 1);
        assert_eq!(summary.fail_count, 3);
        assert_eq!(summary.highest, Some(66.0));
        assert_eq!(summary.lowest, Some(0.0));
        assert!((summary.sgpa - 7.0 / 4.0).abs() < 1e-12);
    }

    #[test]
    fn sgpa_without_positive_credit_is_zero() {
        let summary = sgpa(&results(&[SubjectRecord::simple("Audit", 0.0, 100.0, 99.0)]));
        assert_eq!(summary.sgpa, 0.0);
        assert_eq!(summary.total_credits, 0.0);

        let empty = sgpa(&[]);
        assert_eq!(empty.sgpa, 0.0);
        assert_eq!(empty.highest, None);
        assert_eq!(empty.lowest, None);
        assert_eq!(empty.pass_count + empty.fail_count, 0);
    }

    #[test]
    fn cgpa_two_semester_scenario() {
        let summary = cgpa(&[SemesterRecord::new(8.0, 20.0), SemesterRecord::new(7.0, 10.0)]);
        assert!((summary.cgpa - 230.0 / 30.0).abs() < 1e-12);
        assert_eq!(format!("{:.2}", summary.cgpa), "7.67");
        assert_eq!(summary.total_credits, 30.0);
        assert_eq!(summary.semesters[0].product, 160.0);
        assert_eq!(summary.semesters[1].index, 2);
    }

    #[test]
    fn cgpa_with_equal_credits_is_arithmetic_mean() {
        let values = [9.1, 7.4, 8.25, 6.0];
        let semesters = values
            .iter()
            .map(|value| SemesterRecord::new(*value, 22.0))
            .collect::<Vec<_>>();
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        assert!((cgpa(&semesters).cgpa - mean).abs() < 1e-12);
    }

    #[test]
    fn cgpa_degenerate_inputs_are_zero() {
        assert_eq!(cgpa(&[]).cgpa, 0.0);
        assert_eq!(cgpa(&[SemesterRecord::new(8.0, 0.0)]).cgpa, 0.0);
    }

    #[test]
    fn cgpa_weights_every_semester_without_credit_filter() {
        let summary = cgpa(&[SemesterRecord::new(8.0, 20.0), SemesterRecord::new(7.0, -10.0)]);
        assert_eq!(summary.cgpa, 9.0);
        assert_eq!(summary.total_credits, 10.0);
        assert_eq!(summary.semesters.len(), 2);
        assert_eq!(summary.semesters[1].product, -70.0);
    }
}
