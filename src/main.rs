mod cli;
mod config;
mod entries;
mod error;
mod grading;
mod logging;
mod report;
mod types;

use crate::error::GradeError;
use crate::types::report::CgpaReport;
use crate::types::settings::FailPolicy;
use chrono::Utc;
use clap::Parser;
use std::path::Path;
use tracing::{info, warn};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const FAILED_SUBJECTS: i32 = 1;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run(cli: cli::Cli) -> Result<i32, GradeError> {
    match cli.command {
        cli::Commands::Sgpa(cmd) => {
            let loaded = entries::load_entries(&cmd.entries)?;
            let settings =
                config::load_settings(entries_dir(&cmd.entries), cmd.settings.as_deref())?;
            let store = config::SettingsStore::new(settings);
            if !cmd.policy.is_empty() {
                apply_overrides(&store, &cmd.policy)?;
            }

            if loaded.subjects.is_empty() {
                warn!(path = %cmd.entries.display(), "no [[subject]] entries found");
            }
            if !cmd.no_validate {
                entries::validate::subjects(&loaded.subjects)?;
            }

            let records = entries::normalize::subjects(&loaded.subjects);
            let settings = store.snapshot();
            let grade_report = grading::grade_semester(&records, &settings);
            info!(
                subjects = records.len(),
                sgpa = grade_report.summary.sgpa,
                "sgpa calculated"
            );

            let rendered = report::render_sgpa(&grade_report, output_format(&cmd.format))?;
            println!("{rendered}");

            if grade_report.summary.fail_count > 0 {
                Ok(exit_code::FAILED_SUBJECTS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Cgpa(cmd) => {
            let loaded = entries::load_entries(&cmd.entries)?;
            entries::validate::semesters(&loaded.semesters)?;

            let semesters = entries::normalize::semesters(&loaded.semesters);
            let cgpa_report = CgpaReport {
                generated_at: Utc::now().to_rfc3339(),
                summary: grading::aggregate::cgpa(&semesters),
            };
            info!(
                semesters = semesters.len(),
                cgpa = cgpa_report.summary.cgpa,
                "cgpa calculated"
            );

            let rendered = report::render_cgpa(&cgpa_report, output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Grade(cmd) => {
            let settings = config::load_settings(Path::new("."), cmd.settings.as_deref())?;
            let grade_point = grading::scale::grade_point(cmd.percentage, &settings.cutoffs);
            println!("{}% -> grade point {}", cmd.percentage, grade_point);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Settings(cli::SettingsCommand::Show(cmd)) => {
            let settings = config::load_settings(&cmd.dir, cmd.settings.as_deref())?;
            print!("{}", config::render(&settings)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Settings(cli::SettingsCommand::Check(cmd)) => {
            config::check_file(&cmd.path)?;
            println!("settings ok: {}", cmd.path.display());
            Ok(exit_code::SUCCESS)
        }
    }
}

fn apply_overrides(
    store: &config::SettingsStore,
    overrides: &cli::PolicyOverrides,
) -> Result<(), GradeError> {
    let current = store.snapshot();
    let cutoffs = overrides
        .cutoffs
        .clone()
        .unwrap_or_else(|| current.cutoffs.as_slice().to_vec());
    let policy = FailPolicy {
        min_internal: overrides.min_internal.unwrap_or(current.policy.min_internal),
        min_external: overrides.min_external.unwrap_or(current.policy.min_external),
        global_fail: overrides.global_fail.unwrap_or(current.policy.global_fail),
        component_checks: current.policy.component_checks && !overrides.no_component_checks,
    };
    store.update(&cutoffs, policy)
}

fn entries_dir(path: &Path) -> &Path {
    path.parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn main() {
    let cli = cli::Cli::parse();
    if let Err(e) = logging::init(cli.verbose, cli.quiet) {
        eprintln!("warning: {e}");
    }

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            if e.is_validation() {
                std::process::exit(exit_code::INVALID_INPUT);
            }
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
