//! Detailed failure reasons for card number checks.
//!
//! The boolean API (`is_valid_card`, `is_card_type`, `luhn_valid`) collapses
//! every one of these into `false`. The `Result`-returning API reports them.

use crate::CardBrand;
use std::fmt;

/// Reasons a card number (or card type label) was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input string was empty.
    Empty,

    /// The input contained only separators (spaces or dashes).
    NoDigits,

    /// A character other than a digit, space, or dash was found.
    InvalidCharacter {
        /// Position in the input string, in characters (0-indexed).
        position: usize,
        /// The offending character.
        character: char,
    },

    /// The card number has too few digits.
    TooShort {
        /// The actual number of digits provided.
        length: usize,
        /// The minimum required digits (13).
        minimum: usize,
    },

    /// The Luhn checksum failed.
    InvalidChecksum,

    /// The number does not match the requested brand's prefix/length pattern.
    TypeMismatch {
        /// The brand the number was checked against.
        brand: CardBrand,
    },

    /// The card type label does not name a known brand.
    UnknownCardType {
        /// The label as supplied.
        label: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "card number is empty"),

            Self::NoDigits => write!(f, "card number contains no digits"),

            Self::InvalidCharacter {
                position,
                character,
            } => {
                write!(
                    f,
                    "invalid character '{}' at position {} (only digits, spaces, and dashes allowed)",
                    character.escape_default(),
                    position
                )
            }

            Self::TooShort { length, minimum } => {
                write!(
                    f,
                    "card number too short: got {} digits, minimum is {}",
                    length, minimum
                )
            }

            Self::InvalidChecksum => {
                write!(f, "invalid checksum (Luhn check failed) - please verify the card number")
            }

            Self::TypeMismatch { brand } => {
                write!(f, "card number does not match the {} pattern", brand)
            }

            Self::UnknownCardType { label } => {
                write!(f, "unknown card type '{}'", label.escape_default())
            }
        }
    }
}

impl std::error::Error for ValidationError {}
