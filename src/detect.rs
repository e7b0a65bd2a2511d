//! Card type matching by prefix and length.
//!
//! Each brand's rule is a whole-number pattern: the leading digits and the
//! exact total length must both fit. Rules are slice patterns over parsed
//! digits, so there is no regex engine and no mutable lookup table.
//!
//! | Brand | Rule |
//! |-------|------|
//! | Mastercard | `5[1-5]` + 14 digits |
//! | Visa | `4` + 12 or 15 digits |
//! | American Express | `3[47]` + 13 digits |
//! | Diners Club / Carte Blanche | `30[0-5]` + 11 digits, or `3[68]` + 12 digits |
//! | Discover | `6011` + 12 digits |
//! | JCB | `3` + 15 digits, or `2131`/`1800` + 11 digits |
//! | enRoute | `2014`/`2149` + 11 digits |

use crate::normalize::parse_digits;
use crate::CardBrand;

/// Returns true if `digits` matches `brand`'s pattern exactly.
///
/// `digits` holds digit values (0-9), already stripped of separators.
///
/// # Example
///
/// ```
/// use cc_check::detect::matches_brand;
/// use cc_check::CardBrand;
///
/// let amex = [3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0, 5];
/// assert!(matches_brand(&amex, CardBrand::Amex));
/// assert!(!matches_brand(&amex, CardBrand::Visa));
/// ```
#[inline]
pub fn matches_brand(digits: &[u8], brand: CardBrand) -> bool {
    match brand {
        CardBrand::Mastercard => {
            matches!(digits, [5, 1..=5, rest @ ..] if rest.len() == 14)
        }
        CardBrand::Visa => {
            matches!(digits, [4, rest @ ..] if rest.len() == 12 || rest.len() == 15)
        }
        CardBrand::Amex => {
            matches!(digits, [3, 4 | 7, rest @ ..] if rest.len() == 13)
        }
        CardBrand::DinersClub => match digits {
            [3, 0, 0..=5, rest @ ..] => rest.len() == 11,
            [3, 6 | 8, rest @ ..] => rest.len() == 12,
            _ => false,
        },
        CardBrand::Discover => {
            matches!(digits, [6, 0, 1, 1, rest @ ..] if rest.len() == 12)
        }
        CardBrand::Jcb => match digits {
            [2, 1, 3, 1, rest @ ..] | [1, 8, 0, 0, rest @ ..] => rest.len() == 11,
            [3, rest @ ..] => rest.len() == 15,
            _ => false,
        },
        CardBrand::EnRoute => {
            matches!(digits, [2, 0, 1, 4, rest @ ..] | [2, 1, 4, 9, rest @ ..] if rest.len() == 11)
        }
    }
}

/// Finds the brand whose pattern matches `digits`, if any.
///
/// The patterns are disjoint, so at most one brand can match.
///
/// # Example
///
/// ```
/// use cc_check::detect::detect_brand;
/// use cc_check::CardBrand;
///
/// let visa = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(detect_brand(&visa), Some(CardBrand::Visa));
///
/// // Right prefix, wrong length
/// assert_eq!(detect_brand(&visa[..15]), None);
/// ```
#[inline]
pub fn detect_brand(digits: &[u8]) -> Option<CardBrand> {
    CardBrand::ALL
        .into_iter()
        .find(|&brand| matches_brand(digits, brand))
}

/// Checks a card number against a brand.
///
/// Spaces and dashes are stripped first; any other non-digit character
/// means no match.
///
/// # Example
///
/// ```
/// use cc_check::detect::is_card_type_of;
/// use cc_check::CardBrand;
///
/// assert!(is_card_type_of("6011-1111-1111-1117", CardBrand::Discover));
/// ```
pub fn is_card_type_of(card_number: &str, brand: CardBrand) -> bool {
    match parse_digits(card_number) {
        Ok(digits) => matches_brand(&digits, brand),
        Err(_) => false,
    }
}

/// Checks a card number against a case-insensitive card type label.
///
/// Only the prefix and length are checked, not the checksum. Unknown labels
/// never match.
///
/// # Example
///
/// ```
/// use cc_check::is_card_type;
///
/// assert!(is_card_type("5500000000000004", "MasterCard"));
/// assert!(!is_card_type("5500000000000004", "Visa"));
/// assert!(!is_card_type("5500000000000004", "NotARealBrand"));
/// ```
pub fn is_card_type(card_number: &str, card_type: &str) -> bool {
    match CardBrand::from_label(card_type) {
        Some(brand) => is_card_type_of(card_number, brand),
        None => {
            tracing::debug!(card_type, "unknown card type label");
            false
        }
    }
}
