use crate::entries::{parse_field, RawNumber, SemesterEntry, SubjectEntry};
use crate::error::{GradeError, Result};

/// Problems with one subject entry, empty when it can be evaluated.
pub fn subject_errors(entry: &SubjectEntry) -> Vec<String> {
    let mut errors = Vec::new();

    match parse_field(&entry.credit) {
        Some(credit) if credit >= 1.0 => {}
        _ => errors.push("Credit must be a number ≥ 1".to_string()),
    }

    if entry.use_components {
        check_component(
            &mut errors,
            "External",
            &entry.external_total,
            &entry.external_scored,
        );
        check_component(
            &mut errors,
            "Internal",
            &entry.internal_total,
            &entry.internal_scored,
        );
    } else {
        let total = parse_field(&entry.total);
        let scored = parse_field(&entry.scored);
        if !total.is_some_and(|total| total > 0.0) {
            errors.push("Total marks must be provided and > 0".to_string());
        }
        match scored {
            None => errors.push("Scored marks must be provided".to_string()),
            Some(scored) if scored < 0.0 => {
                errors.push("Scored marks cannot be negative".to_string())
            }
            Some(scored) => {
                if total.is_some_and(|total| scored > total) {
                    errors.push("Scored marks cannot exceed total marks".to_string());
                }
            }
        }
    }

    errors
}

fn check_component(
    errors: &mut Vec<String>,
    label: &str,
    total: &Option<RawNumber>,
    scored: &Option<RawNumber>,
) {
    let total = parse_field(total);
    let scored = parse_field(scored);
    if !total.is_some_and(|total| total > 0.0) {
        errors.push(format!("{label} total must be > 0"));
    }
    match scored {
        None => errors.push(format!("{label} scored required")),
        Some(scored) if scored < 0.0 => errors.push(format!("{label} scored cannot be negative")),
        Some(scored) => {
            if total.is_some_and(|total| scored > total) {
                errors.push(format!(
                    "{label} scored cannot exceed {} total",
                    label.to_lowercase()
                ));
            }
        }
    }
}

/// Checks every subject and reports one line per failing subject.
pub fn subjects(entries: &[SubjectEntry]) -> Result<()> {
    let messages = entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let errors = subject_errors(entry);
            (!errors.is_empty()).then(|| format!("Subject {}: {}", index + 1, errors.join("; ")))
        })
        .collect::<Vec<_>>();

    if messages.is_empty() {
        Ok(())
    } else {
        Err(GradeError::InvalidEntries(messages))
    }
}

pub fn semesters(entries: &[SemesterEntry]) -> Result<()> {
    let mut messages = Vec::new();
    if entries.is_empty() {
        messages.push("Enter at least one semester.".to_string());
    }
    for (index, entry) in entries.iter().enumerate() {
        if !parse_field(&entry.sgpa).is_some_and(|sgpa| sgpa >= 0.0) {
            messages.push(format!("Semester {}: Enter valid SGPA (≥0)", index + 1));
        }
        if !parse_field(&entry.credit).is_some_and(|credit| credit >= 1.0) {
            messages.push(format!("Semester {}: Credits must be ≥1", index + 1));
        }
    }

    if messages.is_empty() {
        Ok(())
    } else {
        Err(GradeError::InvalidEntries(messages))
    }
}
