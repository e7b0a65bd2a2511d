//! Fuzz target for card type labels and patterns.

#![no_main]

use arbitrary::Arbitrary;
use cc_check::{is_card_type, is_valid_card, CardBrand};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    number: &'a str,
    label: &'a str,
}

fuzz_target!(|input: Input<'_>| {
    let typed = is_valid_card(input.number, Some(input.label));
    let matched = is_card_type(input.number, input.label);

    // A number valid for a type always fits the type's pattern
    if typed {
        assert!(matched);
    }
    if CardBrand::from_label(input.label).is_none() {
        assert!(!typed && !matched, "unknown label accepted");
    }
});
