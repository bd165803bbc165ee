use restructure::cli::run;
use restructure::config::RelocateConfig;
use restructure::output::OutputFormatter;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run(&RelocateConfig::default()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            OutputFormatter::error(&format!("Error: {}", e));
            ExitCode::FAILURE
        }
    }
}
