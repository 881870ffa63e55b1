use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gradecalc",
    version,
    about = "Grade point, SGPA and CGPA calculator"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate subject entries and compute the SGPA
    Sgpa(SgpaCommand),
    /// Combine semester entries into a CGPA
    Cgpa(CgpaCommand),
    /// Print the grade point for a percentage
    Grade(GradeCommand),
    /// Inspect or validate settings files
    #[command(subcommand)]
    Settings(SettingsCommand),
}

#[derive(Args)]
pub struct SgpaCommand {
    /// TOML file with [[subject]] entries
    pub entries: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Settings file applied after the layered defaults
    #[arg(long)]
    pub settings: Option<PathBuf>,
    /// Skip the entry checks and evaluate with missing fields as 0
    #[arg(long)]
    pub no_validate: bool,
    #[command(flatten)]
    pub policy: PolicyOverrides,
}

#[derive(Args)]
pub struct PolicyOverrides {
    /// Grade cutoffs for 10 down to 1, comma separated
    #[arg(long, value_delimiter = ',')]
    pub cutoffs: Option<Vec<f64>>,
    #[arg(long)]
    pub global_fail: Option<f64>,
    #[arg(long)]
    pub min_internal: Option<f64>,
    #[arg(long)]
    pub min_external: Option<f64>,
    #[arg(long)]
    pub no_component_checks: bool,
}

impl PolicyOverrides {
    pub fn is_empty(&self) -> bool {
        self.cutoffs.is_none()
            && self.global_fail.is_none()
            && self.min_internal.is_none()
            && self.min_external.is_none()
            && !self.no_component_checks
    }
}

#[derive(Args)]
pub struct CgpaCommand {
    /// TOML file with [[semester]] entries
    pub entries: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct GradeCommand {
    #[arg(allow_negative_numbers = true)]
    pub percentage: f64,
    #[arg(long)]
    pub settings: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Print the effective settings as TOML
    Show(ShowSettingsCommand),
    /// Validate one settings file
    Check(CheckSettingsCommand),
}

#[derive(Args)]
pub struct ShowSettingsCommand {
    /// Directory whose gradecalc.toml files are layered
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,
    #[arg(long)]
    pub settings: Option<PathBuf>,
}

#[derive(Args)]
pub struct CheckSettingsCommand {
    pub path: PathBuf,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
