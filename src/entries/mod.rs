pub mod normalize;
pub mod validate;

use crate::error::{GradeError, Result};
use serde::Deserialize;
use std::path::Path;

/// A numeric field as typed by the user: a number, text that may or may not
/// parse, or a value of some other TOML type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
    Other(toml::Value),
}

impl RawNumber {
    /// `None` for anything that is not a finite number.
    pub fn parse(&self) -> Option<f64> {
        match self {
            RawNumber::Number(value) => Some(*value).filter(|value| value.is_finite()),
            RawNumber::Text(text) => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite()),
            RawNumber::Other(_) => None,
        }
    }
}

pub(crate) fn parse_field(field: &Option<RawNumber>) -> Option<f64> {
    field.as_ref().and_then(RawNumber::parse)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubjectEntry {
    pub name: Option<String>,
    pub credit: Option<RawNumber>,
    #[serde(default)]
    pub use_components: bool,
    pub total: Option<RawNumber>,
    pub scored: Option<RawNumber>,
    pub external_total: Option<RawNumber>,
    pub external_scored: Option<RawNumber>,
    pub internal_total: Option<RawNumber>,
    pub internal_scored: Option<RawNumber>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SemesterEntry {
    pub sgpa: Option<RawNumber>,
    pub credit: Option<RawNumber>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntriesFile {
    #[serde(default, rename = "subject")]
    pub subjects: Vec<SubjectEntry>,
    #[serde(default, rename = "semester")]
    pub semesters: Vec<SemesterEntry>,
}

pub fn load_entries(path: &Path) -> Result<EntriesFile> {
    if !path.exists() {
        return Err(GradeError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| GradeError::EntriesParse(format!("{}: {}", path.display(), e)))
}
