use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

mod cli;
mod core;
mod generators;
mod logging;
mod models;

use crate::cli::Args;
use crate::core::config::Config;
use crate::generators::PasswordGenerator;

fn main() -> ExitCode {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let (config, warnings) = Config::load();

    if let Err(e) = logging::init(&config) {
        eprintln!("warning: {e}");
    }
    for warning in &warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    let generator = PasswordGenerator::new();

    let output = cli::handlers::handle_generate(&args, &config, &generator)
        .and_then(|(request, password)| cli::handlers::render(&request, &password, args.json));

    match output {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("Failed to generate password: {:?}", e);
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
