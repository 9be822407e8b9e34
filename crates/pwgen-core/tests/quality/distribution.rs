//! Per-character frequency tests (Pearson chi-square).
//!
//! With k alphabet symbols the statistic has k - 1 degrees of freedom.
//! Thresholds sit far in the upper tail so that a correct sampler fails
//! with probability well below 1e-5:
//!
//! | Alphabet | dof | Mean | Threshold |
//! |----------|-----|------|-----------|
//! | 52       | 51  | 51   | 110       |
//! | 94       | 93  | 93   | 170       |

use std::collections::HashMap;
use std::sync::Mutex;

use pwgen_core::{
    Alphabet, OsRandom, PasswordGenerationSettings, PasswordGenerator, RandomPasswordGenerator,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[allow(clippy::cast_precision_loss)]
fn chi_square(password: &str, alphabet: &Alphabet) -> f64 {
    let mut counts: HashMap<char, u64> = HashMap::new();
    for c in password.chars() {
        *counts.entry(c).or_default() += 1;
    }
    let expected = password.len() as f64 / alphabet.len() as f64;
    alphabet
        .as_bytes()
        .iter()
        .map(|&b| {
            let observed = counts.get(&char::from(b)).copied().unwrap_or(0) as f64;
            (observed - expected).powi(2) / expected
        })
        .sum()
}

fn assert_uniform(
    generator: &dyn PasswordGenerator,
    settings: PasswordGenerationSettings,
    threshold: f64,
) {
    let alphabet = Alphabet::for_settings(&settings);
    let pw = generator.generate(&settings).unwrap();
    let stat = chi_square(&pw, &alphabet);
    assert!(
        stat < threshold,
        "chi-square {stat:.2} over {} symbols exceeds {threshold}",
        alphabet.len()
    );
}

/// 94 symbols x ~1000 samples each, seeded for reproducibility.
#[test]
fn full_alphabet_is_uniform_seeded() {
    let generator = RandomPasswordGenerator::new(Mutex::new(StdRng::seed_from_u64(0x5eed)));
    assert_uniform(&generator, PasswordGenerationSettings::new(94_000, true, true), 170.0);
}

/// Letters only with the OS CSPRNG.
#[test]
fn letters_are_uniform_os() {
    let generator = RandomPasswordGenerator::<OsRandom>::default();
    assert_uniform(&generator, PasswordGenerationSettings::new(52_000, false, false), 110.0);
}

/// Every alphabet symbol shows up in a long password.
#[test]
fn every_symbol_reachable() {
    let generator = RandomPasswordGenerator::<OsRandom>::default();
    let settings = PasswordGenerationSettings::new(20_000, true, true);
    let alphabet = Alphabet::for_settings(&settings);
    let pw = generator.generate(&settings).unwrap();
    for &b in alphabet.as_bytes() {
        assert!(pw.contains(char::from(b)), "symbol {:?} never drawn", char::from(b));
    }
}
