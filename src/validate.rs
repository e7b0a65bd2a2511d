//! Card number validation.
//!
//! The pipeline is the same for every entry point:
//! 1. Strip spaces and dashes
//! 2. Require at least 13 digits and nothing but digits
//! 3. Run the Luhn check, unless the number is an enRoute number
//! 4. If a card type was requested, require its pattern to match
//!
//! [`is_valid_card`] answers yes or no. [`validate`] and [`validate_labeled`]
//! report why a number was rejected.

use zeroize::Zeroizing;

use crate::card::{CardBrand, ValidatedCard, MIN_CARD_DIGITS};
use crate::detect::matches_brand;
use crate::error::ValidationError;
use crate::luhn;
use crate::mask::mask_number;
use crate::normalize::parse_digits;

/// Length of an enRoute number.
pub const ENROUTE_LENGTH: usize = 15;

/// Leading digits of enRoute numbers.
pub const ENROUTE_PREFIXES: [[u8; 4]; 2] = [[2, 0, 1, 4], [2, 1, 4, 9]];

/// Returns true if `digits` is exempt from the Luhn check.
///
/// enRoute numbers (15 digits, starting 2014 or 2149) carry no Luhn check
/// digit. The exemption depends only on the digits, not on any requested
/// card type.
#[inline]
pub fn is_luhn_exempt(digits: &[u8]) -> bool {
    digits.len() == ENROUTE_LENGTH
        && ENROUTE_PREFIXES
            .iter()
            .any(|prefix| digits.starts_with(prefix))
}

/// Validates a card number, optionally against a brand.
///
/// # Errors
///
/// * [`ValidationError::Empty`], [`ValidationError::NoDigits`] or
///   [`ValidationError::InvalidCharacter`] for malformed input
/// * [`ValidationError::TooShort`] for fewer than 13 digits
/// * [`ValidationError::InvalidChecksum`] when Luhn fails
/// * [`ValidationError::TypeMismatch`] when `card_type` doesn't match
///
/// # Example
///
/// ```
/// use cc_check::{validate, CardBrand, ValidationError};
///
/// let card = validate("4111-1111-1111-1111", Some(CardBrand::Visa)).unwrap();
/// assert_eq!(card.last_four(), "1111");
///
/// let err = validate("4111-1111-1111-1111", Some(CardBrand::Amex)).unwrap_err();
/// assert_eq!(err, ValidationError::TypeMismatch { brand: CardBrand::Amex });
/// ```
pub fn validate(
    card_number: &str,
    card_type: Option<CardBrand>,
) -> Result<ValidatedCard, ValidationError> {
    let result = check_number(card_number, card_type);

    if let Err(ref error) = result {
        tracing::debug!(
            number = %mask_number(card_number),
            card_type = ?card_type,
            %error,
            "card number rejected"
        );
    }

    result
}

fn check_number(
    card_number: &str,
    card_type: Option<CardBrand>,
) -> Result<ValidatedCard, ValidationError> {
    let mut digits = Zeroizing::new(parse_digits(card_number)?);

    if digits.len() < MIN_CARD_DIGITS {
        return Err(ValidationError::TooShort {
            length: digits.len(),
            minimum: MIN_CARD_DIGITS,
        });
    }

    let luhn_checked = !is_luhn_exempt(&digits);
    if luhn_checked {
        if !luhn::validate(&digits) {
            return Err(ValidationError::InvalidChecksum);
        }
    } else {
        tracing::trace!("enRoute number, skipping Luhn check");
    }

    if let Some(brand) = card_type {
        if !matches_brand(&digits, brand) {
            return Err(ValidationError::TypeMismatch { brand });
        }
    }

    Ok(ValidatedCard::new(
        std::mem::take(&mut *digits),
        card_type,
        luhn_checked,
    ))
}

/// Validates a card number against an optional card type label.
///
/// Labels are resolved case-insensitively, synonyms included (see
/// [`CardBrand::from_label`]).
///
/// # Errors
///
/// [`ValidationError::UnknownCardType`] for an unknown label, otherwise as
/// [`validate`].
pub fn validate_labeled(
    card_number: &str,
    card_type: Option<&str>,
) -> Result<ValidatedCard, ValidationError> {
    let brand = card_type.map(str::parse::<CardBrand>).transpose()?;
    validate(card_number, brand)
}

/// Checks a card number, optionally against a card type label.
///
/// Never panics; anything that isn't a plausible card number is `false`,
/// and so is any unknown card type label.
///
/// # Example
///
/// ```
/// use cc_check::is_valid_card;
///
/// assert!(is_valid_card("4111-1111-1111-1111", None));
/// assert!(is_valid_card("4111 1111 1111 1111", Some("visa")));
/// assert!(!is_valid_card("4111111111111112", None));
///
/// // enRoute numbers skip the checksum
/// assert!(is_valid_card("201400000000000", Some("EnRoute")));
/// ```
#[inline]
pub fn is_valid_card(card_number: &str, card_type: Option<&str>) -> bool {
    validate_labeled(card_number, card_type).is_ok()
}
