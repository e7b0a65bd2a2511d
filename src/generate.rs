//! Test card number generation.
//!
//! Generated numbers fit their brand's pattern and, except for enRoute,
//! carry a correct Luhn check digit. They are for testing only and belong
//! to no real account.
//!
//! # Example
//!
//! ```
//! use cc_check::generate::generate_card_deterministic;
//! use cc_check::{is_valid_card, CardBrand};
//!
//! let number = generate_card_deterministic(CardBrand::Discover);
//! assert!(number.starts_with("6011"));
//! assert!(is_valid_card(&number, Some("Discover")));
//! ```

use crate::luhn;
use crate::normalize::digits_to_string;
use crate::CardBrand;

#[cfg(feature = "generate")]
use rand::Rng;

/// Prefix and total length pairs each brand's pattern accepts.
///
/// The first entry is the one used for deterministic generation.
pub const fn templates(brand: CardBrand) -> &'static [(&'static str, usize)] {
    match brand {
        CardBrand::Mastercard => &[("51", 16), ("52", 16), ("53", 16), ("54", 16), ("55", 16)],
        CardBrand::Visa => &[("4", 16), ("4", 13)],
        CardBrand::Amex => &[("34", 15), ("37", 15)],
        CardBrand::DinersClub => &[
            ("36", 14),
            ("38", 14),
            ("300", 14),
            ("301", 14),
            ("302", 14),
            ("303", 14),
            ("304", 14),
            ("305", 14),
        ],
        CardBrand::Discover => &[("6011", 16)],
        CardBrand::Jcb => &[("35", 16), ("2131", 15), ("1800", 15)],
        CardBrand::EnRoute => &[("2014", 15), ("2149", 15)],
    }
}

/// Extends `prefix` to `length` digits using `next_digit` for the body.
///
/// The last digit is a Luhn check digit unless the result is exempt from
/// the checksum (enRoute).
fn complete(prefix: &str, length: usize, mut next_digit: impl FnMut() -> u8) -> String {
    assert!(
        prefix.len() < length,
        "Prefix length must be less than total length"
    );

    let mut digits: Vec<u8> = prefix
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| d as u8))
        .collect();

    while digits.len() < length - 1 {
        digits.push(next_digit());
    }

    let mut candidate = digits.clone();
    candidate.push(0);
    if crate::validate::is_luhn_exempt(&candidate) {
        digits.push(next_digit());
    } else {
        digits.push(luhn::generate_check_digit(&digits));
    }

    digits_to_string(&digits)
}

/// Generates a card number deterministically (no randomness).
///
/// Uses the brand's first template and fills the body with zeros.
///
/// # Example
///
/// ```
/// use cc_check::generate::generate_card_deterministic;
/// use cc_check::CardBrand;
///
/// assert_eq!(generate_card_deterministic(CardBrand::Visa), "4000000000000002");
/// assert_eq!(generate_card_deterministic(CardBrand::EnRoute), "201400000000000");
/// ```
pub fn generate_card_deterministic(brand: CardBrand) -> String {
    let (prefix, length) = templates(brand)[0];
    generate_card_deterministic_with_prefix(prefix, length)
}

/// Generates a card number deterministically with a custom prefix.
///
/// Fills the body with zeros and appends a check digit.
///
/// # Panics
///
/// Panics if the prefix is not shorter than `length`.
pub fn generate_card_deterministic_with_prefix(prefix: &str, length: usize) -> String {
    complete(prefix, length, || 0)
}

/// Generates a random card number for the given brand.
///
/// Requires the `generate` feature.
///
/// # Example
///
/// ```
/// use cc_check::generate::generate_card;
/// use cc_check::{is_card_type_of, luhn_valid, CardBrand};
///
/// let number = generate_card(CardBrand::Amex);
/// assert!(is_card_type_of(&number, CardBrand::Amex));
/// assert!(luhn_valid(&number));
/// ```
#[cfg(feature = "generate")]
pub fn generate_card(brand: CardBrand) -> String {
    let mut rng = rand::thread_rng();
    generate_card_with_rng(brand, &mut rng)
}

/// Generates a card number for the given brand using a provided RNG.
///
/// Useful for reproducible generation with seeded RNGs.
#[cfg(feature = "generate")]
pub fn generate_card_with_rng<R: Rng>(brand: CardBrand, rng: &mut R) -> String {
    let options = templates(brand);
    let (prefix, length) = options[rng.gen_range(0..options.len())];
    complete(prefix, length, || rng.gen_range(0..10))
}

/// Generates multiple random card numbers for the given brand.
///
/// Requires the `generate` feature.
#[cfg(feature = "generate")]
pub fn generate_cards(brand: CardBrand, count: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| generate_card_with_rng(brand, &mut rng))
        .collect()
}
