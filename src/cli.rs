use crate::config::{CliOverrides, Config};
use crate::error::Result;
use crate::ui::OutputMode;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI for the token-table generator.
///
/// Runs with zero arguments against `./token.h` for compatibility with the
/// original build step; every knob is optional.
#[derive(Parser, Debug)]
#[command(name = "tokgen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate a lexer token string table from a C token header")]
#[command(
    long_about = "Tokgen reads a C header declaring the token-type enum and prints the \
                  enumerator names as a brace-delimited list of quoted strings, ready to \
                  paste into the parallel string table. The token-type enum must be the \
                  FIRST enum in the header for the default markers to match the right block."
)]
#[command(after_help = "EXAMPLES:\n  \
    tokgen\n  \
    tokgen --input src/lexer/token.h\n  \
    tokgen --start-marker 'enum TokKind {' --end-marker '};'\n  \
    tokgen --config tokgen.toml > table.inc")]
pub struct ExtractCli {
    /// Token header to read (defaults to ./token.h)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Literal opening the enum declaration
    #[arg(long, help = "Line literal that opens the enum (default: \"typedef enum {\")")]
    pub start_marker: Option<String>,

    /// Literal closing the enum declaration
    #[arg(long, help = "Line literal that closes the enum (default: \"} TokenType;\")")]
    pub end_marker: Option<String>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for diagnostics
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

impl ExtractCli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = CliOverrides::new()
            .with_input(self.input.clone())
            .with_start_marker(self.start_marker.clone())
            .with_end_marker(self.end_marker.clone());

        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output_format.into()
    }
}

/// CLI for the sample-script harness.
#[derive(Parser, Debug)]
#[command(name = "scriptcheck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Run sample scripts through the interpreter and print their output")]
#[command(
    long_about = "Scriptcheck walks a directory of sample scripts, runs each one through \
                  the compiled interpreter, and prints the script source next to the \
                  interpreter's captured stdout for manual comparison."
)]
#[command(after_help = "EXAMPLES:\n  \
    scriptcheck\n  \
    scriptcheck --scripts ../test --interpreter ./miniscript\n  \
    scriptcheck --no-contents --extension msc")]
pub struct HarnessCli {
    /// Directory searched recursively for scripts (defaults to ./test)
    #[arg(short, long)]
    pub scripts: Option<PathBuf>,

    /// Interpreter binary to run (defaults to ./miniscript)
    #[arg(short, long)]
    pub interpreter: Option<PathBuf>,

    /// Script file extension, with or without the dot
    #[arg(short, long)]
    pub extension: Option<String>,

    /// Do not print each script's source text
    #[arg(long)]
    pub no_contents: bool,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for diagnostics
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl HarnessCli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = CliOverrides::new()
            .with_scripts_dir(self.scripts.clone())
            .with_interpreter(self.interpreter.clone())
            .with_extension(self.extension.clone())
            .with_show_contents(if self.no_contents { Some(false) } else { None });

        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output_format.into()
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// Plain text output
    Plain,
}

impl From<OutputFormat> for OutputMode {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Plain => OutputMode::Plain,
        }
    }
}
