pub mod json;
pub mod md;

use crate::error::GradeError;
use crate::types::report::{CgpaReport, SgpaReport};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render_sgpa(report: &SgpaReport, format: OutputFormat) -> Result<String, GradeError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(GradeError::Json),
        OutputFormat::Md => Ok(md::sgpa_markdown(report)),
    }
}

pub fn render_cgpa(report: &CgpaReport, format: OutputFormat) -> Result<String, GradeError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(GradeError::Json),
        OutputFormat::Md => Ok(md::cgpa_markdown(report)),
    }
}
