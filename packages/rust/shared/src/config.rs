//! Application configuration for CareerDocs.
//!
//! User config lives at `~/.careerdocs/careerdocs.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CareerDocsError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "careerdocs.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".careerdocs";

// ---------------------------------------------------------------------------
// Config structs (matching careerdocs.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Base directory that receives one timestamped folder per generation.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> String {
    "CareerDocs_Output".into()
}

impl AppConfig {
    /// Resolve the base output directory.
    ///
    /// `override_dir` (a CLI flag or form value) wins over the config value.
    /// A leading `~/` expands to the home directory and relative paths are
    /// joined onto `cwd`.
    pub fn resolve_output_dir(&self, override_dir: Option<&str>, cwd: &Path) -> PathBuf {
        let raw = override_dir
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.defaults.output_dir);
        let expanded = expand_home(raw);
        if expanded.is_absolute() {
            expanded
        } else {
            cwd.join(expanded)
        }
    }
}

/// Expand a leading `~` or `~/` to the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    let rest = if path == "~" {
        Some("")
    } else {
        path.strip_prefix("~/")
    };

    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.careerdocs/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CareerDocsError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.careerdocs/careerdocs.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| CareerDocsError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        CareerDocsError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| CareerDocsError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| CareerDocsError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| CareerDocsError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("output_dir"));
        assert!(toml_str.contains("CareerDocs_Output"));
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config: AppConfig = toml::from_str("").expect("parse");
        assert_eq!(config.defaults.output_dir, "CareerDocs_Output");
    }

    #[test]
    fn config_with_output_dir() {
        let toml_str = r#"
[defaults]
output_dir = "/tmp/applications"
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.defaults.output_dir, "/tmp/applications");
    }

    #[test]
    fn load_config_from_reports_parse_errors() {
        let dir = std::env::temp_dir().join(format!("cd-config-test-{}", uuid::Uuid::now_v7()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("careerdocs.toml");
        std::fs::write(&path, "[defaults\noutput_dir = 3").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn resolve_output_dir_precedence() {
        let config = AppConfig::default();
        let cwd = Path::new("/work");

        assert_eq!(
            config.resolve_output_dir(None, cwd),
            PathBuf::from("/work/CareerDocs_Output")
        );
        assert_eq!(
            config.resolve_output_dir(Some("out"), cwd),
            PathBuf::from("/work/out")
        );
        assert_eq!(
            config.resolve_output_dir(Some("/abs/out"), cwd),
            PathBuf::from("/abs/out")
        );
        // Blank overrides fall back to the config value.
        assert_eq!(
            config.resolve_output_dir(Some("   "), cwd),
            PathBuf::from("/work/CareerDocs_Output")
        );
    }

    #[test]
    fn expand_home_leaves_plain_paths() {
        assert_eq!(expand_home("docs/out"), PathBuf::from("docs/out"));
        assert_eq!(expand_home("~user/out"), PathBuf::from("~user/out"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/out"), home.join("out"));
        }
    }
}
