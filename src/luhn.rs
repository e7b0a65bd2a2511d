//! Luhn checksum (the "modulus 10" algorithm).
//!
//! Two layers: [`validate`] and friends work on parsed digit values, while
//! [`check`] and [`luhn_valid`] take a digit string. The string entry points
//! do not strip separators; callers normalize first.

use crate::error::ValidationError;

/// Lookup table for doubled digits: double the value, subtract 9 if > 9.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Validates a sequence of digit values using the Luhn algorithm.
///
/// An empty slice is never valid.
///
/// # Panics
///
/// Panics if any value is greater than 9.
///
/// # Example
///
/// ```
/// use cc_check::luhn::validate;
///
/// let digits = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert!(validate(&digits));
///
/// let invalid = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2];
/// assert!(!validate(&invalid));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    if digits.is_empty() {
        return false;
    }

    compute_checksum(digits) == 0
}

/// Computes the Luhn sum modulo 10.
///
/// Counting from the left, the digits at positions with the same parity as
/// the length are doubled; the rest are added as-is. That is the same as
/// doubling every second digit counting from the check digit.
///
/// # Panics
///
/// Panics if any value is greater than 9.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    luhn_sum(digits, digits.len() % 2)
}

/// Sums `digits`, doubling the positions whose index parity is `parity`.
///
/// The running total is reduced at every step, so the result is always
/// below 10 whatever the input length.
fn luhn_sum(digits: &[u8], parity: usize) -> u32 {
    digits.iter().enumerate().fold(0, |sum, (i, &digit)| {
        let value = if i % 2 == parity {
            DOUBLE_TABLE[digit as usize]
        } else {
            digit
        };
        (sum + value as u32) % 10
    })
}

/// Computes the check digit that makes `digits` followed by it pass Luhn.
///
/// # Panics
///
/// Panics if any value is greater than 9.
///
/// # Example
///
/// ```
/// use cc_check::luhn::generate_check_digit;
///
/// let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(generate_check_digit(&partial), 1);
/// ```
#[inline]
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    // Appending a digit flips the parity, so the partial digits are summed
    // as if the length were one greater.
    let sum = luhn_sum(digits, (digits.len() + 1) % 2);

    ((10 - sum) % 10) as u8
}

/// Checks a digit string, failing explicitly on anything that isn't one.
///
/// # Errors
///
/// * [`ValidationError::Empty`] for an empty string
/// * [`ValidationError::InvalidCharacter`] for the first character that is
///   not an ASCII digit (separators included)
///
/// # Example
///
/// ```
/// use cc_check::luhn::check;
///
/// assert_eq!(check("4111111111111111"), Ok(true));
/// assert_eq!(check("4111111111111112"), Ok(false));
/// assert!(check("4111-1111").is_err());
/// ```
pub fn check(digits: &str) -> Result<bool, ValidationError> {
    if digits.is_empty() {
        return Err(ValidationError::Empty);
    }

    let values = digits
        .chars()
        .enumerate()
        .map(|(position, character)| match character {
            '0'..='9' => Ok((character as u8) - b'0'),
            _ => Err(ValidationError::InvalidCharacter {
                position,
                character,
            }),
        })
        .collect::<Result<Vec<u8>, _>>()?;

    Ok(validate(&values))
}

/// Returns true if `digits` is a non-empty digit string passing Luhn.
///
/// Malformed input is simply `false`.
///
/// # Example
///
/// ```
/// use cc_check::luhn_valid;
///
/// assert!(luhn_valid("4111111111111111"));
/// assert!(!luhn_valid("4111111111111112"));
/// assert!(luhn_valid("0"));
/// assert!(!luhn_valid("abc"));
/// ```
#[inline]
pub fn luhn_valid(digits: &str) -> bool {
    matches!(check(digits), Ok(true))
}
