//! Basic credit card validation example.
//!
//! Run with: `cargo run --example basic`

use cc_check::{
    generate::generate_card_deterministic, is_card_type, is_valid_card, luhn_valid,
    validate_labeled, CardBrand, ValidationError,
};

fn main() {
    println!("=== Basic Credit Card Validation ===\n");

    // Example 1: Validate a Visa card, requesting the type
    let visa_number = "4111-1111-1111-1111";
    println!("Validating: {}", visa_number);

    match validate_labeled(visa_number, Some("Visa")) {
        Ok(card) => {
            println!("  Valid: yes");
            if let Some(brand) = card.brand() {
                println!("  Brand: {}", brand.name());
            }
            println!("  Last Four: {}", card.last_four());
            println!("  Masked: {}", card.masked());
            println!("  Length: {} digits", card.length());
        }
        Err(e) => {
            println!("  Valid: no");
            println!("  Error: {}", e);
        }
    }
    println!();

    // Example 2: Quick boolean checks, with and without a card type
    let test_cards = [
        ("4111111111111111", None),
        ("5500000000000004", Some("MasterCard")),
        ("378282246310005", Some("American Express")),
        ("6011111111111117", Some("Discover")),
        ("30569309025904", Some("Carte Blanche")),
        ("201400000000000", Some("EnRoute")),
        ("4111111111111112", None),
        ("5500000000000004", Some("Visa")),
    ];

    println!("Quick validation checks:");
    for (number, card_type) in test_cards {
        let valid = is_valid_card(number, card_type);
        println!(
            "  {} as {:18} {}",
            number,
            card_type.unwrap_or("(any)"),
            if valid { "VALID" } else { "INVALID" }
        );
    }
    println!();

    // Example 3: Pattern and checksum are separate checks
    println!("Separate checks for 4111111111111112:");
    println!("  Fits Visa pattern: {}", is_card_type("4111111111111112", "visa"));
    println!("  Passes Luhn: {}", luhn_valid("4111111111111112"));
    println!();

    // Example 4: Handling validation errors
    println!("Error handling examples:");

    let error_cases = [
        ("", None, "Empty input"),
        ("- -", None, "Only separators"),
        ("411111111", None, "Too short"),
        ("4111-1111-1111-111X", None, "Invalid character"),
        ("4111111111111112", None, "Invalid checksum"),
        ("4111111111111111", Some("AMEX"), "Wrong type"),
        ("4111111111111111", Some("Maestro"), "Unknown type"),
    ];

    for (number, card_type, description) in error_cases {
        match validate_labeled(number, card_type) {
            Ok(_) => println!("  {}: Unexpectedly valid", description),
            Err(e) => {
                let error_type = match e {
                    ValidationError::Empty => "Empty",
                    ValidationError::NoDigits => "NoDigits",
                    ValidationError::InvalidCharacter { .. } => "InvalidCharacter",
                    ValidationError::TooShort { .. } => "TooShort",
                    ValidationError::InvalidChecksum => "InvalidChecksum",
                    ValidationError::TypeMismatch { .. } => "TypeMismatch",
                    ValidationError::UnknownCardType { .. } => "UnknownCardType",
                };
                println!("  {}: {} - {}", description, error_type, e);
            }
        }
    }
    println!();

    // Example 5: All supported card types
    println!("Supported card types:");
    for brand in CardBrand::ALL {
        let lengths: Vec<String> = brand
            .valid_lengths()
            .iter()
            .map(|l| l.to_string())
            .collect();
        println!(
            "  {:16} - Lengths: {:8} Luhn: {:3} Sample: {}",
            brand.name(),
            lengths.join(", "),
            if brand.uses_luhn() { "yes" } else { "no" },
            generate_card_deterministic(brand)
        );
    }
}
