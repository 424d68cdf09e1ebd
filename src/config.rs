use crate::error::{Result, TokgenError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default marker literals matching the upstream token header format. These
/// are part of the compatibility contract and must not change; both can be
/// overridden per run via CLI or config file.
pub const DEFAULT_START_MARKER: &str = "typedef enum {";
pub const DEFAULT_END_MARKER: &str = "} TokenType;";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub extractor: ExtractorConfig,
    pub harness: HarnessConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Header file holding the token-type enum.
    pub input: PathBuf,
    /// Literal announcing the enum declaration. The declaration must be the
    /// FIRST block in the file that contains this literal.
    pub start_marker: String,
    /// Literal closing the enum declaration by name.
    pub end_marker: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Directory searched recursively for sample scripts.
    pub scripts_dir: PathBuf,
    /// Compiled interpreter binary to feed each script to.
    pub interpreter: PathBuf,
    /// Script file extension, without the dot.
    pub extension: String,
    /// Print each script's source alongside its output.
    pub show_contents: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("./token.h"),
            start_marker: DEFAULT_START_MARKER.to_string(),
            end_marker: DEFAULT_END_MARKER.to_string(),
        }
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            scripts_dir: PathBuf::from("./test"),
            interpreter: PathBuf::from("./miniscript"),
            extension: "ms".to_string(),
            show_contents: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(TokgenError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| TokgenError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| TokgenError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["tokgen.toml", ".tokgen.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, overrides: &CliOverrides) {
        if let Some(ref input) = overrides.input {
            self.extractor.input = input.clone();
        }

        if let Some(ref start_marker) = overrides.start_marker {
            self.extractor.start_marker = start_marker.clone();
        }

        if let Some(ref end_marker) = overrides.end_marker {
            self.extractor.end_marker = end_marker.clone();
        }

        if let Some(ref scripts_dir) = overrides.scripts_dir {
            self.harness.scripts_dir = scripts_dir.clone();
        }

        if let Some(ref interpreter) = overrides.interpreter {
            self.harness.interpreter = interpreter.clone();
        }

        if let Some(ref extension) = overrides.extension {
            self.harness.extension = extension.trim_start_matches('.').to_string();
        }

        if let Some(show_contents) = overrides.show_contents {
            self.harness.show_contents = show_contents;
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| TokgenError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        std::fs::write(path, content).map_err(|e| TokgenError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.extractor.start_marker.trim().is_empty() {
            return Err(TokgenError::Config {
                message: "Start marker must not be empty".to_string(),
            });
        }

        if self.extractor.end_marker.trim().is_empty() {
            return Err(TokgenError::Config {
                message: "End marker must not be empty".to_string(),
            });
        }

        if self.extractor.start_marker == self.extractor.end_marker {
            return Err(TokgenError::Config {
                message: "Start and end markers must differ".to_string(),
            });
        }

        if self.harness.extension.is_empty() {
            return Err(TokgenError::Config {
                message: "Script extension must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub input: Option<PathBuf>,
    pub start_marker: Option<String>,
    pub end_marker: Option<String>,
    pub scripts_dir: Option<PathBuf>,
    pub interpreter: Option<PathBuf>,
    pub extension: Option<String>,
    pub show_contents: Option<bool>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, input: Option<PathBuf>) -> Self {
        self.input = input;
        self
    }

    pub fn with_start_marker(mut self, marker: Option<String>) -> Self {
        self.start_marker = marker;
        self
    }

    pub fn with_end_marker(mut self, marker: Option<String>) -> Self {
        self.end_marker = marker;
        self
    }

    pub fn with_scripts_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.scripts_dir = dir;
        self
    }

    pub fn with_interpreter(mut self, interpreter: Option<PathBuf>) -> Self {
        self.interpreter = interpreter;
        self
    }

    pub fn with_extension(mut self, extension: Option<String>) -> Self {
        self.extension = extension;
        self
    }

    pub fn with_show_contents(mut self, show: Option<bool>) -> Self {
        self.show_contents = show;
        self
    }
}
