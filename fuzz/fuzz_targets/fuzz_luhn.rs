//! Fuzz target for Luhn algorithm.
//!
//! Tests that luhn functions never panic and maintain invariants.

#![no_main]

use cc_check::luhn;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Clamp values to valid digit range
    let digits: Vec<u8> = data.iter().map(|&b| b % 10).collect();

    let valid = luhn::validate(&digits);
    if digits.is_empty() {
        assert!(!valid, "empty input must fail");
        return;
    }

    // The string entry point agrees with the digit one
    let text: String = digits.iter().map(|&d| char::from(b'0' + d)).collect();
    assert_eq!(luhn::luhn_valid(&text), valid, "string/digit mismatch");

    // Adding check digit should make it valid
    let check = luhn::generate_check_digit(&digits);
    assert!(check <= 9, "Check digit should be 0-9");
    let mut with_check = digits.clone();
    with_check.push(check);
    assert!(luhn::validate(&with_check), "Adding check digit should make valid");
});
