//! Character classes and the per-request sampling alphabet.

use crate::settings::PasswordGenerationSettings;

// ---------------------------------------------------------------------------
// Character sets
// ---------------------------------------------------------------------------

/// Uppercase ASCII letters (always included).
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase ASCII letters (always included).
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// ASCII digits.
pub const DIGITS: &[u8] = b"0123456789";

/// Every printable ASCII punctuation character, in code-point order.
pub const SPECIAL_CHARACTERS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Size of the alphabet with every class enabled.
pub const FULL_ALPHABET_LEN: usize = 94;

// ---------------------------------------------------------------------------
// CharacterClass
// ---------------------------------------------------------------------------

/// One of the four disjoint classes an alphabet is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl CharacterClass {
    /// All classes, in alphabet concatenation order.
    pub const ALL: [Self; 4] = [Self::Uppercase, Self::Lowercase, Self::Digit, Self::Special];

    /// The characters belonging to this class.
    #[must_use]
    pub const fn members(self) -> &'static [u8] {
        match self {
            Self::Uppercase => UPPERCASE,
            Self::Lowercase => LOWERCASE,
            Self::Digit => DIGITS,
            Self::Special => SPECIAL_CHARACTERS,
        }
    }

    /// Classify a character. Returns `None` for anything outside the
    /// 94 printable non-space ASCII characters.
    #[must_use]
    pub fn of(c: char) -> Option<Self> {
        if c.is_ascii_uppercase() {
            Some(Self::Uppercase)
        } else if c.is_ascii_lowercase() {
            Some(Self::Lowercase)
        } else if c.is_ascii_digit() {
            Some(Self::Digit)
        } else if c.is_ascii_punctuation() {
            Some(Self::Special)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Alphabet
// ---------------------------------------------------------------------------

/// The characters eligible for sampling in one generation call.
///
/// Built fresh for every call from the settings flags. Letters are
/// unconditional, so an alphabet is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<u8>,
}

impl Alphabet {
    /// Assemble the alphabet for `settings`: letters, then digits, then
    /// special characters.
    #[must_use]
    pub fn for_settings(settings: &PasswordGenerationSettings) -> Self {
        let mut symbols = Vec::with_capacity(FULL_ALPHABET_LEN);
        symbols.extend_from_slice(UPPERCASE);
        symbols.extend_from_slice(LOWERCASE);
        if settings.digits_included {
            symbols.extend_from_slice(DIGITS);
        }
        if settings.special_characters_included {
            symbols.extend_from_slice(SPECIAL_CHARACTERS);
        }
        Self { symbols }
    }

    /// Number of characters in the alphabet.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Raw ASCII bytes in concatenation order.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }

    /// Whether `c` may appear in a password drawn from this alphabet.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        u8::try_from(c).is_ok_and(|b| self.symbols.contains(&b))
    }

    /// Classes present in this alphabet.
    #[must_use]
    pub fn classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| class.members().iter().all(|b| self.symbols.contains(b)))
            .collect()
    }
}
