use crate::error::GradeError;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins over the verbosity count; `quiet` installs nothing.
pub fn init(verbose: u8, quiet: bool) -> Result<(), GradeError> {
    if quiet {
        return Ok(());
    }

    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| GradeError::Logging(format!("invalid filter '{level}': {e}")))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| GradeError::Logging(e.to_string()))
}
