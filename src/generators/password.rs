use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng, RngCore};
use thiserror::Error;

use crate::models::{GeneratedPassword, GenerationRequest};

pub const NO_CLASSES: &str = "at least one character type required";
pub const LENGTH_TOO_SHORT: &str = "length too short for selected classes";
pub const LENGTH_NOT_POSITIVE: &str = "length must be positive";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Converts an externally supplied length, rejecting zero and negatives.
pub fn length_from_signed(length: i64) -> Result<usize> {
    match usize::try_from(length) {
        Ok(length) if length > 0 => Ok(length),
        _ => Err(GeneratorError::InvalidConfiguration(LENGTH_NOT_POSITIVE.to_string())),
    }
}

/// Generates passwords that cover every requested character class.
///
/// Holds no state; each call draws fresh entropy and is independent of any
/// other call, so a single value can be shared freely between threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    /// Generate a password using the operating system CSPRNG.
    pub fn generate(&self, request: &GenerationRequest) -> Result<GeneratedPassword> {
        self.generate_with_rng(request, &mut OsRng)
    }

    /// Generate a password from a caller-supplied cryptographic source.
    ///
    /// One character is drawn from each enabled class, the remainder is drawn
    /// with replacement from the union of all enabled alphabets, and the whole
    /// sequence is shuffled so the guaranteed characters land anywhere.
    pub fn generate_with_rng<R>(&self, request: &GenerationRequest, rng: &mut R) -> Result<GeneratedPassword>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        validate(request)?;

        log::debug!(
            "Generating password: length={}, classes={:?}",
            request.length,
            request.class_names()
        );

        let mut password = Vec::with_capacity(request.length);

        for class in &request.classes {
            let alphabet = class.alphabet();
            password.push(alphabet[rng.gen_range(0..alphabet.len())]);
        }

        let all_chars = request.union_alphabet();
        for _ in request.classes.len()..request.length {
            password.push(all_chars[rng.gen_range(0..all_chars.len())]);
        }

        password.shuffle(rng);

        Ok(GeneratedPassword::from_bytes(password))
    }
}

/// Checks a request without drawing any randomness.
pub fn validate(request: &GenerationRequest) -> Result<()> {
    if request.length == 0 {
        return Err(GeneratorError::InvalidConfiguration(LENGTH_NOT_POSITIVE.to_string()));
    }
    if request.classes.is_empty() {
        return Err(GeneratorError::InvalidConfiguration(NO_CLASSES.to_string()));
    }
    if request.length < request.classes.len() {
        return Err(GeneratorError::InvalidConfiguration(LENGTH_TOO_SHORT.to_string()));
    }
    Ok(())
}
