use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradeError {
    #[error("invalid settings: {0}")]
    ConfigValidation(String),

    #[error("settings parse error: {0}")]
    ConfigParse(String),

    #[error("entries parse error: {0}")]
    EntriesParse(String),

    #[error("invalid entries:\n{}", .0.join("\n"))]
    InvalidEntries(Vec<String>),

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml render error: {0}")]
    TomlRender(#[from] toml::ser::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GradeError {
    /// Validation failures are reported to the user, not treated as crashes.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            GradeError::ConfigValidation(_) | GradeError::InvalidEntries(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GradeError>;
