pub mod password;

pub use password::{length_from_signed, validate, GeneratorError, PasswordGenerator};
