//! Core card types.
//!
//! This module provides the `CardBrand` enum naming the issuer networks the
//! type patterns know about, and the `ValidatedCard` struct returned by the
//! detailed validation API.

use std::fmt;
use std::str::FromStr;

use zeroize::Zeroize;

use crate::error::ValidationError;
use crate::normalize::digits_to_string;

/// Card brands with a known prefix/length pattern.
///
/// Each variant can be resolved from one or more case-insensitive labels,
/// see the [`FromStr`] impl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardBrand {
    /// Mastercard - Prefix 51-55, length 16
    Mastercard,
    /// Visa - Prefix 4, lengths 13, 16
    Visa,
    /// American Express - Prefix 34, 37, length 15
    Amex,
    /// Diners Club / Carte Blanche - Prefix 300-305, 36, 38, length 14
    DinersClub,
    /// Discover - Prefix 6011, length 16
    Discover,
    /// JCB - Prefix 3 (length 16), or 2131, 1800 (length 15)
    Jcb,
    /// enRoute - Prefix 2014, 2149, length 15, no Luhn check digit
    EnRoute,
}

impl CardBrand {
    /// Every brand, in pattern lookup order.
    pub const ALL: [CardBrand; 7] = [
        Self::Mastercard,
        Self::Visa,
        Self::Amex,
        Self::DinersClub,
        Self::Discover,
        Self::Jcb,
        Self::EnRoute,
    ];

    /// Returns the lengths this brand's pattern admits.
    #[inline]
    pub const fn valid_lengths(&self) -> &'static [u8] {
        match self {
            Self::Mastercard => &[16],
            Self::Visa => &[13, 16],
            Self::Amex => &[15],
            Self::DinersClub => &[14],
            Self::Discover => &[16],
            Self::Jcb => &[15, 16],
            Self::EnRoute => &[15],
        }
    }

    /// Returns true if the given length is valid for this brand.
    #[inline]
    pub const fn is_valid_length(&self, length: usize) -> bool {
        let valid = self.valid_lengths();
        let mut i = 0;
        while i < valid.len() {
            if valid[i] as usize == length {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Returns a human-readable name for the card brand.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mastercard => "Mastercard",
            Self::Visa => "Visa",
            Self::Amex => "American Express",
            Self::DinersClub => "Diners Club",
            Self::Discover => "Discover",
            Self::Jcb => "JCB",
            Self::EnRoute => "enRoute",
        }
    }

    /// Returns true if numbers of this brand carry a Luhn check digit.
    #[inline]
    pub const fn uses_luhn(&self) -> bool {
        !matches!(self, Self::EnRoute)
    }

    /// Resolves a card type label, ignoring ASCII case.
    ///
    /// Returns `None` for unknown labels. Accepted labels are `MasterCard`,
    /// `Visa`, `AMEX`, `AmericanExpress`, `American Express`, `Diners`,
    /// `DinersClub`, `Diners Club`, `CarteBlanche`, `Carte Blanche`,
    /// `Discover`, `JCB` and `EnRoute`.
    ///
    /// # Example
    ///
    /// ```
    /// use cc_check::CardBrand;
    ///
    /// assert_eq!(CardBrand::from_label("american express"), Some(CardBrand::Amex));
    /// assert_eq!(CardBrand::from_label("Carte Blanche"), Some(CardBrand::DinersClub));
    /// assert_eq!(CardBrand::from_label("Maestro"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_uppercase().as_str() {
            "MASTERCARD" => Some(Self::Mastercard),
            "VISA" => Some(Self::Visa),
            "AMEX" | "AMERICANEXPRESS" | "AMERICAN EXPRESS" => Some(Self::Amex),
            "DINERS" | "DINERSCLUB" | "DINERS CLUB" | "CARTEBLANCHE" | "CARTE BLANCHE" => {
                Some(Self::DinersClub)
            }
            "DISCOVER" => Some(Self::Discover),
            "JCB" => Some(Self::Jcb),
            "ENROUTE" => Some(Self::EnRoute),
            _ => None,
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CardBrand {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| ValidationError::UnknownCardType {
            label: s.to_string(),
        })
    }
}

/// Minimum number of digits in a card number.
pub const MIN_CARD_DIGITS: usize = 13;

/// A card number that passed validation.
///
/// The digits are zeroed when the struct is dropped, and neither `Debug`
/// nor `Display` prints more than the last four of them.
#[derive(Clone)]
pub struct ValidatedCard {
    /// The normalized card number as digits (0-9).
    digits: Vec<u8>,
    /// The brand the number was checked against, if one was requested.
    brand: Option<CardBrand>,
    /// False when the enRoute exemption skipped the checksum.
    luhn_checked: bool,
}

impl ValidatedCard {
    #[inline]
    pub(crate) fn new(digits: Vec<u8>, brand: Option<CardBrand>, luhn_checked: bool) -> Self {
        Self {
            digits,
            brand,
            luhn_checked,
        }
    }

    /// Returns the brand the number was matched against, if any.
    #[inline]
    pub const fn brand(&self) -> Option<CardBrand> {
        self.brand
    }

    /// Returns the number of digits in the card number.
    #[inline]
    pub fn length(&self) -> usize {
        self.digits.len()
    }

    /// Returns false if the checksum was skipped (enRoute numbers).
    #[inline]
    pub const fn luhn_checked(&self) -> bool {
        self.luhn_checked
    }

    /// Returns the last four digits as a string.
    #[inline]
    pub fn last_four(&self) -> String {
        let start = self.digits.len().saturating_sub(4);
        digits_to_string(&self.digits[start..])
    }

    /// Returns the full normalized card number.
    ///
    /// # Security Warning
    ///
    /// Never log the result. Use `masked()` for display.
    #[inline]
    pub fn number(&self) -> String {
        digits_to_string(&self.digits)
    }

    /// Returns the card number with all but the last four digits masked.
    #[inline]
    pub fn masked(&self) -> String {
        crate::mask::mask_digits(&self.digits)
    }
}

impl fmt::Debug for ValidatedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedCard")
            .field("brand", &self.brand)
            .field("number", &self.masked())
            .field("length", &self.digits.len())
            .field("luhn_checked", &self.luhn_checked)
            .finish()
    }
}

impl fmt::Display for ValidatedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.brand {
            Some(brand) => write!(f, "{} {}", brand, self.masked()),
            None => write!(f, "{}", self.masked()),
        }
    }
}

impl Drop for ValidatedCard {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}
