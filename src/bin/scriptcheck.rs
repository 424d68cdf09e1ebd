use clap::Parser;
use std::process;
use tokgen::{HarnessCli, Tokgen};

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    let cli = HarnessCli::parse();

    let tokgen = match Tokgen::from_harness_cli(&cli) {
        Ok(tokgen) => tokgen,
        Err(e) => {
            let formatter = tokgen::OutputFormatter::new(cli.output_mode(), 0, false);
            formatter.print_user_friendly_error(&e);
            return e.exit_code();
        }
    };

    match tokgen.run_scripts() {
        Ok(summary) => {
            let formatter = tokgen.output_formatter();
            if summary.failures > 0 {
                // Launch failures must be visible at default verbosity; the
                // whole point of the tool is manual inspection of each run.
                formatter.warning(&format!(
                    "{} of {} scripts failed to launch",
                    summary.failures,
                    summary.scripts_run + summary.failures
                ));
            } else {
                formatter.success(&format!("Ran {} scripts", summary.scripts_run));
            }
            0
        }
        Err(e) => {
            tokgen.handle_error(&e);
            e.exit_code()
        }
    }
}
