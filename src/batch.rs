//! Batch validation of many card numbers.
//!
//! Every check is pure, so batches can be split across threads freely. With
//! the `parallel` feature the `*_parallel` variants run on rayon's global
//! pool. Results always come back in input order.

use crate::error::ValidationError;
use crate::validate::validate;
use crate::{CardBrand, ValidatedCard};

/// Validates many card numbers against the same (optional) card type.
///
/// # Example
///
/// ```
/// use cc_check::{BatchValidator, CardBrand};
///
/// let batch = BatchValidator::new().with_card_type(CardBrand::Visa);
/// let cards = vec!["4111111111111111", "5500000000000004", "4222222222222"];
/// let results = batch.validate_all(&cards);
///
/// assert!(results[0].is_ok());
/// assert!(results[1].is_err()); // a Mastercard
/// assert!(results[2].is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchValidator {
    card_type: Option<CardBrand>,
}

impl BatchValidator {
    /// Creates a batch validator that checks numbers without a card type.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires every number to match `brand` as well.
    #[inline]
    pub fn with_card_type(mut self, brand: CardBrand) -> Self {
        self.card_type = Some(brand);
        self
    }

    /// Returns the card type numbers are checked against, if any.
    #[inline]
    pub const fn card_type(&self) -> Option<CardBrand> {
        self.card_type
    }

    /// Validates a batch, returning one result per input in order.
    pub fn validate_all<S: AsRef<str>>(
        &self,
        cards: &[S],
    ) -> Vec<Result<ValidatedCard, ValidationError>> {
        cards
            .iter()
            .map(|c| validate(c.as_ref(), self.card_type))
            .collect()
    }

    /// Validates a batch and returns only the valid cards.
    pub fn validate_valid_only<S: AsRef<str>>(&self, cards: &[S]) -> Vec<ValidatedCard> {
        cards
            .iter()
            .filter_map(|c| validate(c.as_ref(), self.card_type).ok())
            .collect()
    }

    /// Validates a batch and partitions into valid cards and
    /// `(index, error)` pairs.
    pub fn validate_partitioned<S: AsRef<str>>(
        &self,
        cards: &[S],
    ) -> (Vec<ValidatedCard>, Vec<(usize, ValidationError)>) {
        let mut valid = Vec::new();
        let mut invalid = Vec::new();

        for (i, card) in cards.iter().enumerate() {
            match validate(card.as_ref(), self.card_type) {
                Ok(c) => valid.push(c),
                Err(e) => invalid.push((i, e)),
            }
        }

        (valid, invalid)
    }

    /// Counts valid and invalid cards without keeping results.
    ///
    /// Returns `(valid_count, invalid_count)`.
    pub fn count_valid<S: AsRef<str>>(&self, cards: &[S]) -> (usize, usize) {
        let valid = cards
            .iter()
            .filter(|c| validate(c.as_ref(), self.card_type).is_ok())
            .count();

        (valid, cards.len() - valid)
    }

    /// Validates a batch in parallel using rayon.
    ///
    /// Requires the `parallel` feature.
    #[cfg(feature = "parallel")]
    pub fn validate_parallel<S: AsRef<str> + Sync>(
        &self,
        cards: &[S],
    ) -> Vec<Result<ValidatedCard, ValidationError>> {
        use rayon::prelude::*;
        cards
            .par_iter()
            .map(|c| validate(c.as_ref(), self.card_type))
            .collect()
    }

    /// Counts valid and invalid cards in parallel.
    ///
    /// Requires the `parallel` feature.
    #[cfg(feature = "parallel")]
    pub fn count_valid_parallel<S: AsRef<str> + Sync>(&self, cards: &[S]) -> (usize, usize) {
        use rayon::prelude::*;
        let valid = cards
            .par_iter()
            .filter(|c| validate(c.as_ref(), self.card_type).is_ok())
            .count();

        (valid, cards.len() - valid)
    }
}

/// Validates a slice of cards without a card type.
///
/// # Example
///
/// ```
/// use cc_check::batch::validate_batch;
///
/// let cards = ["4111111111111111", "5500000000000004"];
/// let results = validate_batch(&cards);
/// assert!(results.iter().all(|r| r.is_ok()));
/// ```
#[inline]
pub fn validate_batch<S: AsRef<str>>(cards: &[S]) -> Vec<Result<ValidatedCard, ValidationError>> {
    BatchValidator::new().validate_all(cards)
}

/// Counts valid and invalid cards in a batch.
///
/// # Example
///
/// ```
/// use cc_check::batch::count_valid;
///
/// let cards = ["4111111111111111", "1234567890123456", "5500000000000004"];
/// assert_eq!(count_valid(&cards), (2, 1));
/// ```
#[inline]
pub fn count_valid<S: AsRef<str>>(cards: &[S]) -> (usize, usize) {
    BatchValidator::new().count_valid(cards)
}

/// Validates a slice of cards in parallel, without a card type.
///
/// Requires the `parallel` feature.
#[cfg(feature = "parallel")]
#[inline]
pub fn validate_batch_parallel<S: AsRef<str> + Sync>(
    cards: &[S],
) -> Vec<Result<ValidatedCard, ValidationError>> {
    BatchValidator::new().validate_parallel(cards)
}

/// Counts valid and invalid cards in parallel.
///
/// Requires the `parallel` feature.
#[cfg(feature = "parallel")]
#[inline]
pub fn count_valid_parallel<S: AsRef<str> + Sync>(cards: &[S]) -> (usize, usize) {
    BatchValidator::new().count_valid_parallel(cards)
}
