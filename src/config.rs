use crate::error::{GradeError, Result};
use crate::types::settings::{FailPolicy, Settings, SettingsFile};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "gradecalc.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".gradecalc/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/gradecalc/config.toml";

/// Loads the effective settings for entries living in `dir`, layering the
/// global file, the directory file, its local override and `explicit` last.
pub fn load_settings(dir: &Path, explicit: Option<&Path>) -> Result<Settings> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_settings_with_global(dir, explicit, global.as_deref())
}

pub(crate) fn load_settings_with_global(
    dir: &Path,
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<Settings> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &dir.join(DEFAULT_CONFIG_FILE))?;
    merge_file_if_exists(&mut merged, &dir.join(DEFAULT_LOCAL_FILE))?;
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(GradeError::PathNotFound(path.display().to_string()));
        }
        merge_file_if_exists(&mut merged, path)?;
    }

    let file: SettingsFile = merged
        .try_into()
        .map_err(|e: toml::de::Error| GradeError::ConfigParse(e.to_string()))?;
    file.resolve()
}

/// Parses and validates a single settings file without any layering.
pub fn check_file(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(GradeError::PathNotFound(path.display().to_string()));
    }
    let file: SettingsFile = read_toml_value(path)?
        .try_into()
        .map_err(|e: toml::de::Error| GradeError::ConfigParse(format!("{}: {}", path.display(), e)))?;
    file.resolve()
}

pub fn render(settings: &Settings) -> Result<String> {
    Ok(toml::to_string(&SettingsFile::from(settings))?)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    debug!(path = %path.display(), "merging settings file");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| GradeError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

/// Shared settings for concurrent readers. Readers hold a snapshot; updates
/// validate a whole candidate and replace the snapshot in one step.
#[derive(Debug, Default)]
pub struct SettingsStore {
    current: RwLock<Arc<Settings>>,
}

impl SettingsStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            current: RwLock::new(Arc::new(settings)),
        }
    }

    pub fn snapshot(&self) -> Arc<Settings> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    pub fn update(&self, cutoffs: &[f64], policy: FailPolicy) -> Result<()> {
        let mut candidate = *self.snapshot();
        candidate.update(cutoffs, policy)?;
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Arc::new(candidate);
        debug!("settings updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::settings::GradeCutoffs;
    use std::fs;
    use std::thread;
    use tempfile::TempDir;

    #[test]
    fn load_settings_defaults_when_no_files_exist() {
        let dir = TempDir::new().expect("temp dir should be created");
        let settings =
            load_settings_with_global(dir.path(), None, None).expect("load should not fail");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn load_settings_merges_global_dir_local_and_explicit_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[scale]
cutoffs = [90, 80, 70, 60, 50, 40, 30, 20, 10, 1]

[fail_policy]
min_internal = 25
"#,
        )
        .expect("global settings should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[fail_policy]
min_external = 20
global_fail = 40
"#,
        )
        .expect("dir settings should write");

        fs::create_dir_all(root.path().join(".gradecalc")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[fail_policy]
global_fail = 45
"#,
        )
        .expect("local override should write");

        let explicit = root.path().join("exam.toml");
        fs::write(
            &explicit,
            r#"
[fail_policy]
component_checks = false
"#,
        )
        .expect("explicit settings should write");

        let settings = load_settings_with_global(root.path(), Some(&explicit), Some(&global_path))
            .expect("load should succeed");

        assert_eq!(settings.cutoffs.as_slice()[0], 90.0);
        assert_eq!(settings.policy.min_internal, 25.0);
        assert_eq!(settings.policy.min_external, 20.0);
        assert_eq!(settings.policy.global_fail, 45.0);
        assert!(!settings.policy.component_checks);
    }

    #[test]
    fn load_settings_rejects_invalid_merged_cutoffs() {
        let root = TempDir::new().expect("temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[scale]
cutoffs = [90, 90, 80, 70, 60, 50, 40, 30, 20, 10]
"#,
        )
        .expect("settings should write");

        let result = load_settings_with_global(root.path(), None, None);
        assert!(matches!(result, Err(GradeError::ConfigValidation(_))));
    }

    #[test]
    fn load_settings_reports_missing_explicit_file() {
        let root = TempDir::new().expect("temp dir should be created");
        let result =
            load_settings_with_global(root.path(), Some(&root.path().join("nope.toml")), None);
        assert!(matches!(result, Err(GradeError::PathNotFound(_))));
    }

    #[test]
    fn check_file_reports_type_errors_as_parse_errors() {
        let root = TempDir::new().expect("temp dir should be created");
        let path = root.path().join("bad.toml");
        fs::write(&path, "[fail_policy]\nglobal_fail = \"high\"\n").expect("settings should write");

        let result = check_file(&path);
        assert!(matches!(result, Err(GradeError::ConfigParse(message)) if message.contains("bad.toml")));
    }

    #[test]
    fn render_produces_loadable_settings() {
        let root = TempDir::new().expect("temp dir should be created");
        let path = root.path().join("rendered.toml");
        let rendered = render(&Settings::default()).expect("settings should render");
        fs::write(&path, rendered).expect("rendered settings should write");

        let settings = check_file(&path).expect("rendered settings should validate");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn store_update_is_all_or_nothing() {
        let store = SettingsStore::default();
        let result = store.update(
            &[90.0, 90.0, 80.0, 70.0, 60.0, 50.0, 40.0, 30.0, 20.0, 10.0],
            FailPolicy::default(),
        );
        assert!(matches!(result, Err(GradeError::ConfigValidation(_))));
        assert_eq!(*store.snapshot(), Settings::default());

        store
            .update(GradeCutoffs::FALLBACK.as_slice(), FailPolicy {
                global_fail: 50.0,
                ..FailPolicy::default()
            })
            .expect("valid update should commit");
        assert_eq!(store.snapshot().policy.global_fail, 50.0);
    }

    #[test]
    fn store_readers_never_observe_partial_updates() {
        let store = Arc::new(SettingsStore::new(Settings::default()));
        let alternate = [90.0, 80.0, 70.0, 60.0, 50.0, 40.0, 30.0, 20.0, 10.0, 1.0];
        let alternate_policy = FailPolicy {
            global_fail: 60.0,
            ..FailPolicy::default()
        };

        let writer = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for round in 0..200 {
                    let result = if round % 2 == 0 {
                        store.update(&alternate, alternate_policy)
                    } else {
                        store.update(GradeCutoffs::FALLBACK.as_slice(), FailPolicy::default())
                    };
                    result.expect("update should succeed");
                }
            })
        };

        for _ in 0..200 {
            let snapshot = store.snapshot();
            let paired = if snapshot.cutoffs == GradeCutoffs::FALLBACK {
                snapshot.policy == FailPolicy::default()
            } else {
                snapshot.policy == alternate_policy
            };
            assert!(paired, "cutoffs and policy must change together");
        }

        writer.join().expect("writer thread should finish");
    }
}
