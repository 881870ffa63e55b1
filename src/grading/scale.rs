use crate::types::settings::GradeCutoffs;

/// Highest grade point whose cutoff is at or below `percentage`, 0 below every cutoff.
pub fn grade_point(percentage: f64, cutoffs: &GradeCutoffs) -> u8 {
    cutoffs
        .levels()
        .find(|(_, cutoff)| percentage >= *cutoff)
        .map(|(grade, _)| grade)
        .unwrap_or(0)
}
