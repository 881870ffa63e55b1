use crate::grading::scale;
use crate::types::record::{Marks, SubjectRecord};
use crate::types::report::SubjectResult;
use crate::types::settings::{FailPolicy, GradeCutoffs};
use tracing::debug;

pub fn evaluate(
    record: &SubjectRecord,
    policy: &FailPolicy,
    cutoffs: &GradeCutoffs,
) -> SubjectResult {
    let max_total = record.marks.max_total();
    let scored = record.marks.scored();
    let percentage = if max_total > 0.0 {
        scored / max_total * 100.0
    } else {
        0.0
    };
    // Totals that overflow when summed give NaN; score them as 0%.
    let percentage = if percentage.is_finite() {
        percentage
    } else {
        0.0
    };

    let failed = failed_components(&record.marks, policy) || percentage < policy.global_fail;
    let grade_point = if failed {
        0
    } else {
        scale::grade_point(percentage, cutoffs)
    };

    debug!(
        subject = %record.name,
        percentage,
        failed,
        grade_point,
        "subject evaluated"
    );

    SubjectResult {
        name: record.name.clone(),
        credit: record.credit,
        marks: record.marks,
        max_total,
        scored,
        percentage,
        failed,
        grade_point,
        weighted: f64::from(grade_point) * record.credit,
    }
}

fn failed_components(marks: &Marks, policy: &FailPolicy) -> bool {
    if !policy.component_checks {
        return false;
    }
    match marks {
        Marks::Simple(_) => false,
        Marks::Components { external, internal } => {
            let external_failed = external
                .percentage()
                .is_some_and(|percentage| percentage < policy.min_external);
            let internal_failed = internal
                .percentage()
                .is_some_and(|percentage| percentage < policy.min_internal);
            external_failed || internal_failed
        }
    }
}
