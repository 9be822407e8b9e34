//! Class coverage: long passwords contain every enabled class, and short
//! ones are allowed not to.

use std::collections::HashSet;

use pwgen_core::{
    CharacterClass, OsRandom, PasswordGenerationSettings, PasswordGenerator,
    RandomPasswordGenerator,
};

fn classes_in(pw: &str) -> HashSet<CharacterClass> {
    pw.chars().filter_map(CharacterClass::of).collect()
}

/// P(no digit in 100 draws over 62 symbols) = (52/62)^100 ≈ 2e-8.
#[test]
fn hundred_chars_with_digits_contain_a_digit() {
    let generator = RandomPasswordGenerator::<OsRandom>::default();
    let pw = generator
        .generate(&PasswordGenerationSettings::new(100, true, false))
        .unwrap();
    assert!(classes_in(&pw).contains(&CharacterClass::Digit), "no digit in: {pw}");
}

/// P(no special in 100 draws over 84 symbols) = (52/84)^100 ≈ 2e-21.
#[test]
fn hundred_chars_with_specials_contain_a_special() {
    let generator = RandomPasswordGenerator::<OsRandom>::default();
    let pw = generator
        .generate(&PasswordGenerationSettings::new(100, false, true))
        .unwrap();
    assert!(classes_in(&pw).contains(&CharacterClass::Special), "no special in: {pw}");
}

#[test]
fn two_hundred_chars_cover_all_four_classes() {
    let generator = RandomPasswordGenerator::<OsRandom>::default();
    let pw = generator
        .generate(&PasswordGenerationSettings::new(200, true, true))
        .unwrap();
    assert_eq!(classes_in(&pw), CharacterClass::ALL.into_iter().collect());
}

/// With 94 symbols and length 2, (52/94)^2 ≈ 0.31 of passwords have no
/// digit and no special. Seeing none in 2000 attempts would mean classes are
/// being forced in.
#[test]
fn short_passwords_may_omit_enabled_classes() {
    let generator = RandomPasswordGenerator::<OsRandom>::default();
    let settings = PasswordGenerationSettings::new(2, true, true);
    let letters_only = (0..2000)
        .map(|_| generator.generate(&settings).unwrap())
        .filter(|pw| pw.bytes().all(|b| b.is_ascii_alphabetic()))
        .count();
    assert!(letters_only > 0, "every short password contained a non-letter");
}
