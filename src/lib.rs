//! # cc_check
//!
//! Plausibility checks for credit card numbers, done entirely locally:
//! the Luhn checksum plus prefix/length patterns for Visa, Mastercard,
//! American Express, Diners Club/Carte Blanche, Discover, JCB and enRoute.
//!
//! Passing these checks does not mean a card exists or can be charged. No
//! issuer or network is ever contacted.
//!
//! ## Quick Start
//!
//! ```rust
//! use cc_check::{is_card_type, is_valid_card, luhn_valid};
//!
//! // Spaces and dashes are ignored
//! assert!(is_valid_card("4111-1111-1111-1111", None));
//! assert!(!is_valid_card("4111-1111-1111-1112", None));
//!
//! // Optionally check the brand too (labels are case-insensitive)
//! assert!(is_valid_card("378282246310005", Some("American Express")));
//! assert!(!is_valid_card("378282246310005", Some("Visa")));
//!
//! // Brand pattern alone, no checksum
//! assert!(is_card_type("5500 0000 0000 0004", "MasterCard"));
//!
//! // Bare Luhn over a digit string
//! assert!(luhn_valid("4111111111111111"));
//! ```
//!
//! ## Detailed Results
//!
//! ```rust
//! use cc_check::{validate, CardBrand, ValidationError};
//!
//! let card = validate("4111 1111 1111 1111", Some(CardBrand::Visa)).unwrap();
//! println!("Card: {}", card); // "Visa ************1111"
//!
//! let err = validate("4111 1111 1111", None).unwrap_err();
//! assert_eq!(err, ValidationError::TooShort { length: 12, minimum: 13 });
//! ```
//!
//! ## Card Types
//!
//! | Label(s) | Prefix | Length |
//! |----------|--------|--------|
//! | `MasterCard` | 51-55 | 16 |
//! | `Visa` | 4 | 13, 16 |
//! | `AMEX`, `AmericanExpress`, `American Express` | 34, 37 | 15 |
//! | `Diners`, `DinersClub`, `Diners Club`, `CarteBlanche`, `Carte Blanche` | 300-305, 36, 38 | 14 |
//! | `Discover` | 6011 | 16 |
//! | `JCB` | 3 / 2131, 1800 | 16 / 15 |
//! | `EnRoute` | 2014, 2149 | 15 |
//!
//! enRoute numbers have no Luhn check digit, so the checksum is skipped for
//! any 15-digit number starting with 2014 or 2149.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `parallel` | Rayon-based batch validation |
//! | `generate` | Random test number generation |
//! | `serde` | Serialize/Deserialize for `CardBrand` |
//! | `full` | All of the above |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod card;
pub mod detect;
pub mod error;
pub mod generate;
pub mod luhn;
pub mod mask;
pub mod normalize;
pub mod validate;

// Re-export main types at crate root
pub use batch::BatchValidator;
pub use card::{CardBrand, ValidatedCard, MIN_CARD_DIGITS};
pub use detect::{is_card_type, is_card_type_of};
pub use error::ValidationError;
pub use luhn::luhn_valid;
pub use validate::{is_valid_card, validate, validate_labeled};
