use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    Error, Result,
    error::Context,
    env_subst::substitute_env,
    schema::SpudConfig,
    validate::validate,
};

/// Standard config file names, checked in order.
const CONFIG_FILENAMES: &[&str] = &["spud.toml", "spud.yaml", "spud.yml", "spud.json"];

/// Load, env-substitute, parse and validate the config at `path`.
pub fn load_config(path: &Path) -> Result<SpudConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let raw = substitute_env(&raw);
    let mut config = parse_config(&raw, path)?;
    apply_env_overrides(&mut config);
    validate(&config)?;
    Ok(config)
}

/// Discover and load config from standard locations.
///
/// Search order:
/// 1. `./spud.{toml,yaml,yml,json}` (project-local)
/// 2. `~/.config/spud/spud.{toml,yaml,yml,json}` (user-global)
///
/// Falls back to `SpudConfig::default()` (with env overrides) when no file
/// exists. A file that exists but fails to load is an error.
pub fn discover_and_load() -> Result<SpudConfig> {
    if let Some(path) = find_config_file() {
        debug!(path = %path.display(), "loading config");
        return load_config(&path);
    }
    debug!("no config file found, using defaults");
    let mut config = SpudConfig::default();
    apply_env_overrides(&mut config);
    validate(&config)?;
    Ok(config)
}

/// Returns the user-global config directory (`~/.config/spud/`).
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "spud").map(|d| d.config_dir().to_path_buf())
}

/// Apply `SPUD_*` environment overrides on top of file values.
pub fn apply_env_overrides(config: &mut SpudConfig) {
    apply_env_overrides_with(config, |name| std::env::var(name).ok());
}

fn apply_env_overrides_with(config: &mut SpudConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(dir) = lookup("SPUD_POOLS_DIR").filter(|v| !v.is_empty()) {
        debug!(dir = %dir, "pools dir overridden from env");
        config.pools.dir = PathBuf::from(dir);
    }
    if let Some(name) = lookup("SPUD_BOT_NAME").filter(|v| !v.is_empty()) {
        debug!(bot_name = %name, "bot name overridden from env");
        config.identity.name = name;
    }
}

/// Find the first config file in standard locations.
fn find_config_file() -> Option<PathBuf> {
    for name in CONFIG_FILENAMES {
        let p = PathBuf::from(name);
        if p.exists() {
            return Some(p);
        }
    }

    let dir = config_dir()?;
    CONFIG_FILENAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.exists())
}

fn parse_config(raw: &str, path: &Path) -> Result<SpudConfig> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match ext {
        "toml" => toml::from_str(raw).map_err(|e| Error::parse(path, e)),
        "yaml" | "yml" => {
            // An empty YAML document means "all defaults".
            if raw.trim().trim_start_matches("---").trim().is_empty() {
                return Ok(SpudConfig::default());
            }
            let parsed: Option<SpudConfig> =
                serde_yaml::from_str(raw).map_err(|e| Error::parse(path, e))?;
            Ok(parsed.unwrap_or_default())
        },
        "json" => serde_json::from_str(raw).map_err(|e| Error::parse(path, e)),
        _ => Err(Error::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use {super::*, crate::AddressMode};

    fn write(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn loads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "spud.toml",
            r#"
[identity]
name = "tater"

[probabilities]
snark = 0.5

[addressing]
mode = "mention"
"#,
        );
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.identity.name, "tater");
        assert_eq!(cfg.probabilities.snark, 0.5);
        assert_eq!(cfg.probabilities.thanks, 0.98);
        assert_eq!(cfg.addressing.mode, AddressMode::Mention);
    }

    #[test]
    fn loads_yaml_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let yaml = write(&dir, "spud.yaml", "pools:\n  dir: /srv/spud\n");
        assert_eq!(
            load_config(&yaml).unwrap().pools.dir,
            PathBuf::from("/srv/spud")
        );

        let json = write(&dir, "spud.json", r#"{"probabilities": {"greeting": 0.25}}"#);
        assert_eq!(load_config(&json).unwrap().probabilities.greeting, 0.25);
    }

    #[test]
    fn empty_yaml_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "spud.yml", "---\n");
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.probabilities, crate::ProbabilityConfig::default());
    }

    #[test]
    fn rejects_out_of_range_gate() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "spud.toml", "[probabilities]\nthanks = 1.5\n");
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidProbability { key: "thanks", .. }));
    }

    #[test]
    fn rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "spud.ini", "name=spud");
        assert!(matches!(
            load_config(&path),
            Err(Error::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config(Path::new("/nonexistent/spud.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/spud.toml"));
    }

    #[test]
    fn env_overrides_apply() {
        let mut cfg = SpudConfig::default();
        apply_env_overrides_with(&mut cfg, |name| match name {
            "SPUD_POOLS_DIR" => Some("/tmp/pools".into()),
            "SPUD_BOT_NAME" => Some("Murphy".into()),
            _ => None,
        });
        assert_eq!(cfg.pools.dir, PathBuf::from("/tmp/pools"));
        assert_eq!(cfg.identity.name, "Murphy");
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let mut cfg = SpudConfig::default();
        apply_env_overrides_with(&mut cfg, |_| Some(String::new()));
        assert_eq!(cfg, SpudConfig::default());
    }
}
