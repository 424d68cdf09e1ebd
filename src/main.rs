use clap::Parser;
use std::process;
use tokgen::{ExtractCli, Tokgen, UserFriendlyError};

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    let cli = ExtractCli::parse();

    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    let tokgen = match Tokgen::from_extract_cli(&cli) {
        Ok(tokgen) => tokgen,
        Err(e) => {
            print_startup_error(&e, cli.output_mode());
            return e.exit_code();
        }
    };

    match tokgen.generate_token_table() {
        Ok(table) => {
            // The table is the product; it goes to stdout bare, one line,
            // under every output mode.
            println!("{}", table.render());
            0
        }
        Err(e) => {
            tokgen.handle_error(&e);
            e.exit_code()
        }
    }
}

fn handle_generate_config(cli: &ExtractCli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "tokgen.toml".to_string());

    match Tokgen::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  tokgen --config {}", config_path);
            println!("\nEdit the file to customize markers and paths for your header.");
            0
        }
        Err(e) => {
            println!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                println!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn print_startup_error(error: &tokgen::TokgenError, mode: tokgen::OutputMode) {
    let formatter = tokgen::OutputFormatter::new(mode, 0, false);
    formatter.print_user_friendly_error(error);
}
