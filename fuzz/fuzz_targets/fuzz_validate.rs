//! Fuzz target for card validation.
//!
//! Tests that validation never panics and that the boolean and detailed
//! entry points agree on arbitrary input.

#![no_main]

use cc_check::{is_valid_card, luhn_valid, mask, validate};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // These should never panic, regardless of input
    let detailed = validate(data, None);
    assert_eq!(is_valid_card(data, None), detailed.is_ok());
    let _ = luhn_valid(data);
    let _ = mask::mask_number(data);

    if let Ok(card) = detailed {
        assert!(card.length() >= 13, "accepted a short number");
        assert!(!card.masked().contains(&card.number()), "mask leaked the number");
    }
});
