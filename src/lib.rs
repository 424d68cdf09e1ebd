pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod harness;
pub mod ui;

// Public API re-exports
pub use cli::{ExtractCli, HarnessCli, OutputFormat};
pub use config::{CliOverrides, Config, ExtractorConfig, HarnessConfig};
pub use error::{Result, TokgenError, UserFriendlyError};

// Core functionality re-exports
pub use extractor::{extract_token_table, EnumBlock, TokenTable};
pub use harness::{RunSummary, ScriptRunner};
pub use ui::{OutputFormatter, OutputMode};

use std::path::Path;

/// Main library interface shared by the `tokgen` and `scriptcheck` binaries.
pub struct Tokgen {
    config: Config,
    output_formatter: OutputFormatter,
}

impl Tokgen {
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);

        Self {
            config,
            output_formatter,
        }
    }

    /// Create an instance from the extractor CLI arguments.
    pub fn from_extract_cli(cli: &ExtractCli) -> Result<Self> {
        let config = cli.load_config()?;
        Ok(Self::new(config, cli.output_mode(), cli.verbose, cli.quiet))
    }

    /// Create an instance from the harness CLI arguments.
    pub fn from_harness_cli(cli: &HarnessCli) -> Result<Self> {
        let config = cli.load_config()?;
        Ok(Self::new(config, cli.output_mode(), cli.verbose, cli.quiet))
    }

    /// Run the extraction pipeline and return the token table.
    ///
    /// The table itself is NOT printed here; the binary writes it bare to
    /// stdout so the envelope stays machine-consumable under every output
    /// mode.
    pub fn generate_token_table(&self) -> Result<TokenTable> {
        self.output_formatter.start_operation(&format!(
            "Extracting token names from {}",
            self.config.extractor.input.display()
        ));

        let table = extractor::extract_token_table(&self.config.extractor)?;

        self.output_formatter
            .debug(&format!("Extracted {} token names", table.len()));
        if table.is_empty() {
            self.output_formatter
                .info("Enum body is empty; emitting an empty table");
        }

        Ok(table)
    }

    /// Run every sample script through the interpreter.
    pub fn run_scripts(&self) -> Result<RunSummary> {
        let runner = ScriptRunner::new(&self.config.harness);
        runner.run_all(&self.output_formatter)
    }

    /// Write a default configuration file, ready to edit.
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        Config::default().save_to_file(output_path)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &TokgenError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}
