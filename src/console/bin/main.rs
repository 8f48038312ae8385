use std::process::ExitCode;
use lms::console;
use lms::core::domain::Configuration;
use lms::utils::log::setup_tracing;

fn main() -> ExitCode {
    let config = match Configuration::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = setup_tracing(&config) {
        eprintln!("failed to set up logging: {}", err);
    }

    match console::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.message());
            ExitCode::FAILURE
        }
    }
}
