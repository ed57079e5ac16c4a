use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced outside the calculator's pure core.
///
/// The state machine and evaluator never fail; these cover input parsing,
/// configuration and the system clipboard.
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("unknown key '{token}' at position {position}")]
    UnknownKey { token: String, position: usize },

    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("clipboard unavailable")]
    Clipboard(#[source] arboard::Error),
}
