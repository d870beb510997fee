// src/models.rs
use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// A named group of characters with a fixed alphabet.
///
/// The four alphabets are pairwise disjoint, so a character belongs to at
/// most one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Digit => "digit",
            CharacterClass::Symbol => "symbol",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Password generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: BTreeSet<CharacterClass>,
}

impl GenerationRequest {
    pub fn new<I>(length: usize, classes: I) -> Self
    where
        I: IntoIterator<Item = CharacterClass>,
    {
        Self {
            length,
            classes: classes.into_iter().collect(),
        }
    }

    /// Every class except the excluded ones, the way the CLI flags read.
    pub fn from_exclusions(
        length: usize,
        no_uppercase: bool,
        no_lowercase: bool,
        no_digits: bool,
        no_symbols: bool,
    ) -> Self {
        let classes = CharacterClass::ALL.into_iter().filter(|class| match class {
            CharacterClass::Uppercase => !no_uppercase,
            CharacterClass::Lowercase => !no_lowercase,
            CharacterClass::Digit => !no_digits,
            CharacterClass::Symbol => !no_symbols,
        });
        Self::new(length, classes)
    }

    /// Concatenation of every enabled alphabet.
    pub fn union_alphabet(&self) -> Vec<u8> {
        self.classes
            .iter()
            .flat_map(|class| class.alphabet().iter().copied())
            .collect()
    }

    pub fn class_names(&self) -> Vec<&'static str> {
        self.classes.iter().map(|class| class.name()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub(crate) fn from_bytes(bytes: Vec<u8>) -> Self {
        // Alphabets are pure ASCII
        GeneratedPassword(bytes.into_iter().map(char::from).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<GeneratedPassword> for String {
    fn from(password: GeneratedPassword) -> Self {
        password.0
    }
}
