//! `pwgen-core`: password generation for PWGEN.
//!
//! Alphabet assembly from settings flags, uniform per-character sampling
//! from an injectable random source, and length validation.
//! Zero async, zero I/O, no logging.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod settings;

pub mod alphabet;
pub mod random;

pub mod generator;

pub use alphabet::{
    Alphabet, CharacterClass, DIGITS, FULL_ALPHABET_LEN, LOWERCASE, SPECIAL_CHARACTERS, UPPERCASE,
};
pub use error::GeneratorError;
pub use generator::{generate_password, PasswordGenerator, RandomPasswordGenerator};
pub use random::{OsRandom, RandomSource, ThreadRandom};
pub use settings::{PasswordGenerationSettings, DEFAULT_PASSWORD_LENGTH};
