//! User configuration loaded from `config.toml`.

use crate::calculator::DEFAULT_SEPARATOR;
use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Calculator settings. Every field is optional in the file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Thousands separator used by the display. Empty disables grouping.
    pub separator: String,
    /// Copy each evaluation result to the clipboard.
    pub copy_on_evaluate: bool,
    /// Number of completed evaluations kept for the history panel.
    pub history_size: usize,
    /// Default log filter when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            copy_on_evaluate: false,
            history_size: 20,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Default config file location: `$XDG_CONFIG_HOME/zcalc/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("zcalc").join("config.toml"))
    }

    /// Parse a config from TOML text.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, CalcError> {
        toml::from_str(text).map_err(|source| CalcError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the config at `path`, or defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self, CalcError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text, path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(CalcError::ConfigRead {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Load from `path` if given, otherwise from [`Config::default_path`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, CalcError> {
        match path {
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Some(path) => Self::load(&path),
                None => Ok(Self::default()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::from_toml("", Path::new("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.separator, ",");
        assert_eq!(config.history_size, 20);
    }

    #[test]
    fn test_partial_file() {
        let config = Config::from_toml(
            "separator = \" \"\ncopy_on_evaluate = true\n",
            Path::new("config.toml"),
        )
        .unwrap();
        assert_eq!(config.separator, " ");
        assert!(config.copy_on_evaluate);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_invalid_file() {
        let err = Config::from_toml("history_size = \"lots\"", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, CalcError::ConfigParse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load(Path::new("/nonexistent/zcalc/config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }
}
