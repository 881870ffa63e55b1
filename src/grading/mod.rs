pub mod aggregate;
pub mod scale;
pub mod subject;

use crate::types::record::SubjectRecord;
use crate::types::report::{SgpaReport, SubjectResult};
use crate::types::settings::Settings;
use chrono::Utc;

/// Evaluates every subject under one settings snapshot and folds them into an SGPA report.
pub fn grade_semester(records: &[SubjectRecord], settings: &Settings) -> SgpaReport {
    let subjects = records
        .iter()
        .map(|record| subject::evaluate(record, &settings.policy, &settings.cutoffs))
        .collect::<Vec<SubjectResult>>();
    let summary = aggregate::sgpa(&subjects);

    SgpaReport {
        generated_at: Utc::now().to_rfc3339(),
        settings: *settings,
        subjects,
        summary,
    }
}
