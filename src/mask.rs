//! Masking for display and logging.
//!
//! Only the last four digits of a card number are ever shown. Everything
//! that logs or prints a card number in this crate goes through here.

/// Masks parsed digit values, keeping the last four.
///
/// Four digits or fewer are masked entirely, same as [`mask_number`].
///
/// # Example
///
/// ```
/// use cc_check::mask::mask_digits;
///
/// let digits = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(mask_digits(&digits), "************1111");
/// ```
pub fn mask_digits(digits: &[u8]) -> String {
    if digits.len() <= 4 {
        return "*".repeat(digits.len());
    }

    let hidden = digits.len() - 4;
    digits
        .iter()
        .enumerate()
        .map(|(i, &d)| if i < hidden { '*' } else { (b'0' + d) as char })
        .collect()
}

/// Masks a raw card number string, keeping its last four characters.
///
/// Spaces and dashes are dropped first. Strings of four characters or fewer
/// are masked entirely.
///
/// # Example
///
/// ```
/// use cc_check::mask::mask_number;
///
/// assert_eq!(mask_number("4111-1111-1111-1111"), "************1111");
/// assert_eq!(mask_number("123"), "***");
/// ```
pub fn mask_number(input: &str) -> String {
    let chars: Vec<char> = crate::normalize::strip_separators(input).chars().collect();

    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }

    let visible = chars.len() - 4;
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| if i < visible { '*' } else { c })
        .collect()
}
