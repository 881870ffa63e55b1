use crate::types::record::Marks;
use crate::types::settings::Settings;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectResult {
    pub name: String,
    pub credit: f64,
    pub marks: Marks,
    pub max_total: f64,
    pub scored: f64,
    pub percentage: f64,
    pub failed: bool,
    pub grade_point: u8,
    pub weighted: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SgpaSummary {
    pub sgpa: f64,
    pub total_credits: f64,
    /// Absent when no subject had a positive maximum total.
    pub highest: Option<f64>,
    pub lowest: Option<f64>,
    pub pass_count: usize,
    pub fail_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemesterRow {
    pub index: usize,
    pub sgpa: f64,
    pub credit: f64,
    pub product: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CgpaSummary {
    pub cgpa: f64,
    pub total_credits: f64,
    pub semesters: Vec<SemesterRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SgpaReport {
    pub generated_at: String,
    pub settings: Settings,
    pub subjects: Vec<SubjectResult>,
    pub summary: SgpaSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct CgpaReport {
    pub generated_at: String,
    #[serde(flatten)]
    pub summary: CgpaSummary,
}
