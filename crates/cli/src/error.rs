//! Failure classes of the `colorpick` binary.
//!
//! | code | variant         | raised by                                       |
//! |------|-----------------|-------------------------------------------------|
//! | 2    | (clap)          | unknown subcommand or flag                      |
//! | 10   | `Color`         | unparseable hex, bad bar dimensions             |
//! | 11   | `Io`            | PNG write                                       |
//! | 12   | `Input`         | malformed `h,s,v`, hue or height out of range   |
//! | 13   | `Serialization` | JSON output                                     |
//! | 14   | `Config`        | `--config` file unreadable or invalid           |

use colorpick_core::PickerError;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Color(PickerError),

    #[error("{0}")]
    Io(String),

    #[error("{0}")]
    Input(String),

    #[error("json output: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Anything wrong with the `--config` file, whether reading or parsing it.
    #[error("config {}: {source}", .path.display())]
    Config { path: PathBuf, source: PickerError },
}

impl CliError {
    pub fn config(path: &Path, source: PickerError) -> Self {
        CliError::Config {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Color(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
            CliError::Config { .. } => 14,
        }
    }
}

/// Library errors outside config loading: I/O keeps its own code, the rest
/// are color errors.
impl From<PickerError> for CliError {
    fn from(e: PickerError) -> Self {
        match e {
            PickerError::Io(msg) => CliError::Io(msg),
            other => CliError::Color(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorpick_core::{normalize_hex, SessionConfig};

    #[test]
    fn bad_hex_is_a_color_error() {
        let err = CliError::from(normalize_hex("#12345").unwrap_err());
        assert!(matches!(err, CliError::Color(PickerError::InvalidFormat { .. })));
        assert_eq!(err.exit_code(), 10);
        assert!(err.to_string().contains("#12345"), "{err}");
    }

    #[test]
    fn png_write_failure_keeps_io_code() {
        let err = CliError::from(PickerError::Io("no/such/dir/bar.png: not found".into()));
        assert_eq!(err.exit_code(), 11);
        assert!(err.to_string().starts_with("no/such/dir"), "{err}");
    }

    #[test]
    fn invalid_config_gets_its_own_code() {
        let path = Path::new("session.json");
        let source = SessionConfig::from_json(r#"{"initial_alpha": 2}"#).unwrap_err();
        let err = CliError::config(path, source);
        assert_eq!(err.exit_code(), 14);
        let text = err.to_string();
        assert!(text.starts_with("config session.json:"), "{text}");
        assert!(text.contains("initial_alpha"), "{text}");
    }

    #[test]
    fn config_source_is_exposed() {
        use std::error::Error;
        let err = CliError::config(Path::new("c.json"), PickerError::InvalidConfig("x".into()));
        assert!(err.source().is_some());
    }

    #[test]
    fn json_failure_is_serialization() {
        let err: CliError = serde_json::from_str::<SessionConfig>("[").unwrap_err().into();
        assert_eq!(err.exit_code(), 13);
        assert!(err.to_string().starts_with("json output"), "{err}");
    }

    #[test]
    fn exit_codes_are_distinct_and_nonzero() {
        let errors = [
            CliError::Color(PickerError::InvalidDimensions { width: 0, height: 0 }),
            CliError::Io(String::new()),
            CliError::Input(String::new()),
            CliError::config(Path::new("c.json"), PickerError::InvalidConfig(String::new())),
            serde_json::from_str::<serde_json::Value>("{").unwrap_err().into(),
        ];
        let mut codes: Vec<i32> = errors.iter().map(CliError::exit_code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes, vec![10, 11, 12, 13, 14]);
    }
}
