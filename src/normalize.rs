//! Input normalization shared by every check.
//!
//! Card numbers may arrive grouped with spaces or dashes. Both are stripped
//! before any digit-based rule runs; nothing else is tolerated.

use std::borrow::Cow;

use crate::error::ValidationError;

/// Characters removed from a card number before checking it.
pub const SEPARATORS: [char; 2] = ['-', ' '];

/// Returns true if `c` is a tolerated separator.
#[inline]
pub const fn is_separator(c: char) -> bool {
    matches!(c, '-' | ' ')
}

/// Strips spaces and dashes from a card number.
///
/// Borrows the input when there is nothing to strip, so normalizing an
/// already-normalized number does not allocate.
///
/// # Example
///
/// ```
/// use cc_check::normalize::strip_separators;
///
/// assert_eq!(strip_separators("4111-1111 1111-1111"), "4111111111111111");
/// assert_eq!(strip_separators("4111111111111111"), "4111111111111111");
/// ```
pub fn strip_separators(input: &str) -> Cow<'_, str> {
    if input.contains(SEPARATORS) {
        Cow::Owned(input.chars().filter(|&c| !is_separator(c)).collect())
    } else {
        Cow::Borrowed(input)
    }
}

/// Parses a card number into digit values (0-9), skipping separators.
///
/// Positions reported in [`ValidationError::InvalidCharacter`] refer to the
/// raw input, counted in characters.
///
/// # Errors
///
/// * [`ValidationError::Empty`] for an empty string
/// * [`ValidationError::InvalidCharacter`] for anything but ASCII digits,
///   spaces and dashes
/// * [`ValidationError::NoDigits`] when only separators were present
pub fn parse_digits(input: &str) -> Result<Vec<u8>, ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::Empty);
    }

    let mut digits = Vec::with_capacity(input.len());

    for (position, c) in input.chars().enumerate() {
        match c {
            '0'..='9' => digits.push((c as u8) - b'0'),
            c if is_separator(c) => {}
            character => {
                return Err(ValidationError::InvalidCharacter {
                    position,
                    character,
                })
            }
        }
    }

    if digits.is_empty() {
        return Err(ValidationError::NoDigits);
    }

    Ok(digits)
}

/// Renders digit values back into an ASCII string.
#[inline]
pub(crate) fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|&d| (b'0' + d) as char).collect()
}
