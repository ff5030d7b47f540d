use crate::error::{CareerError, Result};
use crate::types::config::CareerConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "career-match.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".career-match/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/career-match/config.toml";

/// Loads the layered configuration for `root`. `explicit` replaces the
/// project file and must exist.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<Option<CareerConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, explicit, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<Option<CareerConfig>> {
    let project_path = match explicit {
        Some(path) if !path.exists() => {
            return Err(CareerError::ConfigNotFound(path.display().to_string()));
        }
        Some(path) => path.to_path_buf(),
        None => root.join(DEFAULT_CONFIG_FILE),
    };

    let local_path = root.join(DEFAULT_LOCAL_FILE);
    let mut merged = Value::Table(Map::new());
    let mut layers = 0;
    for path in [global_path, Some(project_path.as_path()), Some(local_path.as_path())]
        .into_iter()
        .flatten()
    {
        if merge_file_if_exists(&mut merged, path)? {
            debug!(path = %path.display(), "merged config layer");
            layers += 1;
        }
    }
    if layers == 0 {
        return Ok(None);
    }

    let cfg: CareerConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| CareerError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(true)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| CareerError::ConfigParse(format!("{}: {}", path.display(), e)))
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{ScoringPolicy, Weights};
    use crate::types::config::{FormatKind, PolicyKind};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_no_layer_exists() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None, None).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn explicit_config_must_exist() {
        let dir = TempDir::new().expect("temp dir should be created");
        let missing = dir.path().join("nope.toml");
        let err = load_config_with_global(dir.path(), Some(&missing), None)
            .expect_err("missing explicit config should fail");
        assert!(matches!(err, CareerError::ConfigNotFound(_)));
    }

    #[test]
    fn load_config_merges_global_project_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[matcher.weights]
skills = 4
education = 2

[output]
format = "md"
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[matcher]
policy = "simple"

[matcher.weights]
skills = 5

[output]
format = "json"
"#,
        )
        .expect("project config should write");

        fs::create_dir_all(root.path().join(".career-match")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[matcher]
policy = "weighted"
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), None, Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        assert_eq!(cfg.policy_kind(), PolicyKind::Weighted);
        assert_eq!(cfg.output_format(), FormatKind::Json);
        assert_eq!(
            cfg.scoring_policy(None),
            ScoringPolicy::Weighted(Weights {
                skills: 5,
                interests: 2,
                education: 2,
            })
        );
    }

    #[test]
    fn explicit_config_replaces_project_file() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[matcher]\npolicy = \"weighted\"\n",
        )
        .expect("project config should write");
        let explicit = root.path().join("other.toml");
        fs::write(&explicit, "[matcher]\npolicy = \"simple\"\n").expect("explicit should write");

        let cfg = load_config_with_global(root.path(), Some(&explicit), None)
            .expect("load should succeed")
            .expect("config should exist");
        assert_eq!(cfg.policy_kind(), PolicyKind::Simple);
    }

    #[test]
    fn invalid_layer_reports_its_path() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[matcher\n").expect("config should write");

        let err = load_config_with_global(root.path(), None, None).expect_err("parse should fail");
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn merged_config_is_validated() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[matcher.weights]\nluck = 1\n",
        )
        .expect("config should write");

        let err = load_config_with_global(root.path(), None, None).expect_err("should fail");
        assert!(err.to_string().contains("unknown key"));
    }

    #[test]
    fn oversized_weight_in_any_layer_is_rejected() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::create_dir_all(root.path().join(".career-match")).expect("local dir should be created");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            "[matcher.weights]\nskills = 3000000000\n",
        )
        .expect("local config should write");

        let err = load_config_with_global(root.path(), None, None).expect_err("should fail");
        assert!(err.to_string().contains("matcher.weights.skills must be at most"));
    }
}
