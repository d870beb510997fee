// src/cli/handlers.rs
use serde::Serialize;
use thiserror::Error;

use crate::cli::Args;
use crate::core::config::Config;
use crate::generators::{self, GeneratorError, PasswordGenerator};
use crate::models::{CharacterClass, GeneratedPassword, GenerationRequest};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Serialize)]
pub struct PasswordGenerationResponse<'a> {
    pub success: bool,
    pub password: &'a str,
    pub length: usize,
    pub classes: Vec<CharacterClass>,
}

/// Turns command line flags into a request, applying the configured default
/// length when none was given.
pub fn build_request(args: &Args, config: &Config) -> generators::password::Result<GenerationRequest> {
    let length = generators::length_from_signed(args.length.unwrap_or(config.default_password_length))?;
    Ok(GenerationRequest::from_exclusions(
        length,
        args.no_upper,
        args.no_lower,
        args.no_digits,
        args.no_symbols,
    ))
}

// Handle the generate command
pub fn handle_generate(
    args: &Args,
    config: &Config,
    generator: &PasswordGenerator,
) -> Result<(GenerationRequest, GeneratedPassword)> {
    let request = build_request(args, config)?;
    generators::validate(&request)?;

    if request.length < config.min_password_length {
        return Err(GeneratorError::InvalidConfiguration(format!(
            "length must be at least {}",
            config.min_password_length
        ))
        .into());
    }

    if request.length > config.max_password_length {
        return Err(GeneratorError::InvalidConfiguration(format!(
            "length must be at most {}",
            config.max_password_length
        ))
        .into());
    }

    log::info!(
        "Generating password with options: length={}, classes={:?}",
        request.length,
        request.class_names()
    );

    let password = generator.generate(&request)?;
    log::info!("Password generated successfully");

    Ok((request, password))
}

/// Formats a generated password for stdout.
pub fn render(request: &GenerationRequest, password: &GeneratedPassword, json: bool) -> Result<String> {
    if !json {
        return Ok(password.to_string());
    }

    let response = PasswordGenerationResponse {
        success: true,
        password: password.as_str(),
        length: password.len(),
        classes: request.classes.iter().copied().collect(),
    };
    Ok(serde_json::to_string(&response)?)
}
