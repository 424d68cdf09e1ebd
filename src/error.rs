use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokgenError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("input file not found: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("start marker {marker:?} not found in {path}")]
    StartMarkerNotFound { marker: String, path: String },

    #[error("end marker {marker:?} not found after start marker in {path}")]
    EndMarkerNotFound { marker: String, path: String },

    #[error("script directory not found: {}", path.display())]
    ScriptDirNotFound { path: PathBuf },

    #[error("interpreter executable not found: {}", path.display())]
    InterpreterNotFound { path: PathBuf },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl TokgenError {
    /// Process exit code for this error.
    ///
    /// Missing inputs and configuration problems exit 1, matching the
    /// historical contract of the tool. Structural parse failures exit 2 so
    /// build scripts can tell "file absent" from "file malformed"; neither
    /// path writes a token table.
    pub fn exit_code(&self) -> i32 {
        match self {
            TokgenError::StartMarkerNotFound { .. } | TokgenError::EndMarkerNotFound { .. } => 2,
            _ => 1,
        }
    }
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for TokgenError {
    fn user_message(&self) -> String {
        match self {
            TokgenError::MissingInput { path } => {
                format!("{} file not found", path.display())
            }
            TokgenError::StartMarkerNotFound { marker, path } => {
                format!(
                    "could not find the enum start marker {:?} in {}",
                    marker, path
                )
            }
            TokgenError::EndMarkerNotFound { marker, path } => {
                format!(
                    "found the enum start but never the end marker {:?} in {}",
                    marker, path
                )
            }
            TokgenError::ScriptDirNotFound { .. } => "could not find test directory".to_string(),
            TokgenError::InterpreterNotFound { path } => {
                format!(
                    "could not find {} executable, please run make",
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            TokgenError::MissingInput { .. } => Some(
                "Run the tool from the directory containing the token header, or pass the path with --input.".to_string(),
            ),
            TokgenError::StartMarkerNotFound { .. } => Some(
                "The token-type enum must be declared with the exact opener the tool searches for. Override it with --start-marker if the header uses a different form.".to_string(),
            ),
            TokgenError::EndMarkerNotFound { .. } => Some(
                "The enum must be closed with its typedef name on one line. Override the literal with --end-marker if the header differs.".to_string(),
            ),
            TokgenError::ScriptDirNotFound { .. } => Some(
                "Pass the sample-script directory with --scripts.".to_string(),
            ),
            TokgenError::InterpreterNotFound { .. } => Some(
                "Build the interpreter first, or point --interpreter at the compiled binary.".to_string(),
            ),
            TokgenError::Config { .. } => Some(
                "Check your configuration file syntax and ensure all required fields are present.".to_string(),
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for TokgenError {
    fn from(error: toml::de::Error) -> Self {
        TokgenError::Config {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TokgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_friendly_messages() {
        let error = TokgenError::MissingInput {
            path: PathBuf::from("token.h"),
        };
        assert_eq!(error.user_message(), "token.h file not found");
        assert!(error.suggestion().is_some());
    }

    #[test]
    fn test_exit_codes() {
        let missing = TokgenError::MissingInput {
            path: PathBuf::from("token.h"),
        };
        assert_eq!(missing.exit_code(), 1);

        let structural = TokgenError::EndMarkerNotFound {
            marker: "} TokenType;".to_string(),
            path: "token.h".to_string(),
        };
        assert_eq!(structural.exit_code(), 2);
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("not = = toml").unwrap_err();
        let err = TokgenError::from(toml_err);
        assert!(matches!(err, TokgenError::Config { .. }));
    }
}
