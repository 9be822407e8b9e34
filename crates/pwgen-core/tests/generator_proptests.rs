#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! Property-based tests for the password generator.

use proptest::prelude::*;
use pwgen_core::{
    generate_password, Alphabet, GeneratorError, PasswordGenerationSettings, PasswordGenerator,
    RandomPasswordGenerator,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Mutex;

/// Strategy for any flag combination with a valid length.
fn valid_settings() -> impl Strategy<Value = PasswordGenerationSettings> {
    (1i32..=512, any::<bool>(), any::<bool>()).prop_map(|(length, digits, special)| {
        PasswordGenerationSettings::new(length, digits, special)
    })
}

proptest! {
    /// Output length always equals the requested length.
    #[test]
    fn output_length_matches_request(settings in valid_settings()) {
        let pw = generate_password(&settings).unwrap();
        prop_assert_eq!(pw.chars().count(), usize::try_from(settings.length).unwrap());
    }

    /// Every character comes from the alphabet the flags describe.
    #[test]
    fn output_stays_within_alphabet(settings in valid_settings()) {
        let alphabet = Alphabet::for_settings(&settings);
        let pw = generate_password(&settings).unwrap();
        for c in pw.chars() {
            prop_assert!(alphabet.contains(c), "{c:?} not in alphabet for {settings:?}");
        }
    }

    /// Disabled classes never appear.
    #[test]
    fn disabled_classes_never_appear(settings in valid_settings()) {
        let pw = generate_password(&settings).unwrap();
        if !settings.digits_included {
            prop_assert!(!pw.chars().any(|c| c.is_ascii_digit()), "digit in {pw}");
        }
        if !settings.special_characters_included {
            prop_assert!(!pw.chars().any(|c| c.is_ascii_punctuation()), "special in {pw}");
        }
    }

    /// Non-positive lengths are rejected for every flag combination.
    #[test]
    fn non_positive_length_rejected(
        length in i32::MIN..=0,
        digits in any::<bool>(),
        special in any::<bool>(),
    ) {
        let result = generate_password(&PasswordGenerationSettings::new(length, digits, special));
        prop_assert!(matches!(result, Err(GeneratorError::InvalidArgument(_))));
    }

    /// Identical seeds give identical passwords.
    #[test]
    fn seeded_generation_is_deterministic(seed in any::<u64>(), settings in valid_settings()) {
        let a = RandomPasswordGenerator::new(Mutex::new(StdRng::seed_from_u64(seed)));
        let b = RandomPasswordGenerator::new(Mutex::new(StdRng::seed_from_u64(seed)));
        prop_assert_eq!(a.generate(&settings).unwrap(), b.generate(&settings).unwrap());
    }
}
