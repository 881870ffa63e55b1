use crate::entries::{parse_field, SemesterEntry, SubjectEntry};
use crate::types::record::{Component, SemesterRecord, SubjectRecord};

/// Converts raw entries into typed records. Absent or non-numeric fields become 0,
/// and a blank name becomes `Subject <n>` (1-based).
pub fn subjects(entries: &[SubjectEntry]) -> Vec<SubjectRecord> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| subject(index + 1, entry))
        .collect()
}

pub fn subject(position: usize, entry: &SubjectEntry) -> SubjectRecord {
    let name = entry
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Subject {position}"));
    let credit = or_zero(parse_field(&entry.credit));

    if entry.use_components {
        SubjectRecord::components(
            name,
            credit,
            Component::new(
                or_zero(parse_field(&entry.external_total)),
                or_zero(parse_field(&entry.external_scored)),
            ),
            Component::new(
                or_zero(parse_field(&entry.internal_total)),
                or_zero(parse_field(&entry.internal_scored)),
            ),
        )
    } else {
        SubjectRecord::simple(
            name,
            credit,
            or_zero(parse_field(&entry.total)),
            or_zero(parse_field(&entry.scored)),
        )
    }
}

pub fn semesters(entries: &[SemesterEntry]) -> Vec<SemesterRecord> {
    entries
        .iter()
        .map(|entry| {
            SemesterRecord::new(
                or_zero(parse_field(&entry.sgpa)),
                or_zero(parse_field(&entry.credit)),
            )
        })
        .collect()
}

fn or_zero(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}
