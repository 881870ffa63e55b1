use crate::error::GradeError;
use serde::{Deserialize, Serialize};

pub const GRADE_LEVELS: usize = 10;

/// Minimum percentage for grade points 10 down to 1, strictly descending.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GradeCutoffs([f64; GRADE_LEVELS]);

impl GradeCutoffs {
    pub const FALLBACK: GradeCutoffs =
        GradeCutoffs([95.0, 85.0, 75.0, 65.0, 55.0, 45.0, 35.0, 25.0, 15.0, 5.0]);

    pub fn new(values: [f64; GRADE_LEVELS]) -> Result<Self, GradeError> {
        for (index, value) in values.iter().enumerate() {
            if !(0.0..=100.0).contains(value) {
                return Err(GradeError::ConfigValidation(format!(
                    "cutoff for grade {} must be between 0 and 100 (found {})",
                    GRADE_LEVELS - index,
                    value
                )));
            }
            if index > 0 && *value >= values[index - 1] {
                return Err(GradeError::ConfigValidation(format!(
                    "cutoffs must be strictly descending: grade {} ({}) is not below grade {} ({})",
                    GRADE_LEVELS - index,
                    value,
                    GRADE_LEVELS - index + 1,
                    values[index - 1]
                )));
            }
        }
        Ok(Self(values))
    }

    pub fn from_slice(values: &[f64]) -> Result<Self, GradeError> {
        let values: [f64; GRADE_LEVELS] = values.try_into().map_err(|_| {
            GradeError::ConfigValidation(format!(
                "expected {} cutoffs, found {}",
                GRADE_LEVELS,
                values.len()
            ))
        })?;
        Self::new(values)
    }

    /// Pairs of (grade point, cutoff), highest grade first.
    pub fn levels(&self) -> impl Iterator<Item = (u8, f64)> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(|(index, cutoff)| ((GRADE_LEVELS - index) as u8, *cutoff))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl Default for GradeCutoffs {
    fn default() -> Self {
        Self::FALLBACK
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FailPolicy {
    pub min_internal: f64,
    pub min_external: f64,
    pub global_fail: f64,
    pub component_checks: bool,
}

impl Default for FailPolicy {
    fn default() -> Self {
        Self {
            min_internal: 30.0,
            min_external: 30.0,
            global_fail: 35.0,
            component_checks: true,
        }
    }
}

impl FailPolicy {
    pub fn validate(&self) -> Result<(), GradeError> {
        for (key, value) in [
            ("fail_policy.min_internal", self.min_internal),
            ("fail_policy.min_external", self.min_external),
            ("fail_policy.global_fail", self.global_fail),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(GradeError::ConfigValidation(format!(
                    "{key} must be between 0 and 100 (found {value})"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Settings {
    pub cutoffs: GradeCutoffs,
    pub policy: FailPolicy,
}

impl Settings {
    /// Validates the candidate pair and commits it only when both are valid.
    pub fn update(&mut self, cutoffs: &[f64], policy: FailPolicy) -> Result<(), GradeError> {
        let cutoffs = GradeCutoffs::from_slice(cutoffs)?;
        policy.validate()?;
        *self = Settings { cutoffs, policy };
        Ok(())
    }
}

/// On-disk shape of a settings file. Every key is optional so files can be layered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<ScaleConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_policy: Option<FailPolicyConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoffs: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailPolicyConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_internal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_external: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_fail: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_checks: Option<bool>,
}

fn default_enabled() -> bool {
    true
}

impl From<&Settings> for SettingsFile {
    fn from(settings: &Settings) -> Self {
        Self {
            scale: Some(ScaleConfig {
                enabled: true,
                cutoffs: Some(settings.cutoffs.as_slice().to_vec()),
            }),
            fail_policy: Some(FailPolicyConfig {
                min_internal: Some(settings.policy.min_internal),
                min_external: Some(settings.policy.min_external),
                global_fail: Some(settings.policy.global_fail),
                component_checks: Some(settings.policy.component_checks),
            }),
        }
    }
}

impl SettingsFile {
    pub fn cutoffs(&self) -> Vec<f64> {
        match &self.scale {
            Some(scale) if scale.enabled => scale
                .cutoffs
                .clone()
                .unwrap_or_else(|| GradeCutoffs::FALLBACK.as_slice().to_vec()),
            _ => GradeCutoffs::FALLBACK.as_slice().to_vec(),
        }
    }

    pub fn policy(&self) -> FailPolicy {
        let defaults = FailPolicy::default();
        match &self.fail_policy {
            Some(policy) => FailPolicy {
                min_internal: policy.min_internal.unwrap_or(defaults.min_internal),
                min_external: policy.min_external.unwrap_or(defaults.min_external),
                global_fail: policy.global_fail.unwrap_or(defaults.global_fail),
                component_checks: policy
                    .component_checks
                    .unwrap_or(defaults.component_checks),
            },
            None => defaults,
        }
    }

    pub fn resolve(&self) -> Result<Settings, GradeError> {
        let mut settings = Settings::default();
        settings.update(&self.cutoffs(), self.policy())?;
        Ok(settings)
    }
}
