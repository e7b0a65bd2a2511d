//! Integration tests for cc_check.
//!
//! These cover the public surface end to end: real test card numbers,
//! card type labels, the enRoute exemption and malformed input.

use cc_check::{
    batch::{count_valid, BatchValidator},
    detect::detect_brand,
    is_card_type, is_card_type_of, is_valid_card, luhn, luhn_valid,
    normalize::{parse_digits, strip_separators},
    validate, validate_labeled, CardBrand, ValidationError,
};
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

// =============================================================================
// REAL-WORLD TEST CARD NUMBERS
// =============================================================================
// Official test numbers from payment processors. They pass Luhn validation
// but are not real cards.

mod test_cards {
    pub const VISA_1: &str = "4111111111111111";
    pub const VISA_2: &str = "4012888888881881";
    pub const VISA_3: &str = "4222222222222"; // 13 digits
    pub const VISA_4: &str = "4242424242424242";

    pub const MC_1: &str = "5555555555554444";
    pub const MC_2: &str = "5105105105105100";
    pub const MC_3: &str = "5200828282828210";
    pub const MC_4: &str = "5500000000000004";

    pub const AMEX_1: &str = "378282246310005";
    pub const AMEX_2: &str = "371449635398431";
    pub const AMEX_3: &str = "340000000000009";

    pub const DISCOVER_1: &str = "6011111111111117";
    pub const DISCOVER_2: &str = "6011000990139424";

    pub const DINERS_1: &str = "30569309025904";
    pub const DINERS_2: &str = "38520000023237";
    pub const DINERS_3: &str = "36700102000000";

    pub const JCB_1: &str = "3530111333300000";
    pub const JCB_2: &str = "3566002020360505";

    // enRoute numbers carry no check digit; this one fails Luhn
    pub const ENROUTE_1: &str = "201400000000000";
    pub const ENROUTE_2: &str = "214912345678901";
}

use test_cards::*;

// =============================================================================
// VALID CARDS PER TYPE
// =============================================================================

fn assert_all_valid(numbers: &[&str], label: &str) {
    for number in numbers {
        assert!(
            is_valid_card(number, Some(label)),
            "{} should be a valid {}",
            number,
            label
        );
    }
}

#[test]
fn test_all_test_cards_with_type() {
    assert_all_valid(&[VISA_1, VISA_2, VISA_3, VISA_4], "Visa");
    assert_all_valid(&[MC_1, MC_2, MC_3, MC_4], "MasterCard");
    assert_all_valid(&[AMEX_1, AMEX_2, AMEX_3], "AmericanExpress");
    assert_all_valid(&[DISCOVER_1, DISCOVER_2], "Discover");
    assert_all_valid(&[DINERS_1, DINERS_2, DINERS_3], "DinersClub");
    assert_all_valid(&[JCB_1, JCB_2], "JCB");
    assert_all_valid(&[ENROUTE_1, ENROUTE_2], "EnRoute");
}

#[test]
fn test_all_test_cards_without_type() {
    for number in [
        VISA_1, VISA_3, MC_1, AMEX_1, DISCOVER_1, DINERS_1, JCB_1, ENROUTE_1, ENROUTE_2,
    ] {
        assert!(is_valid_card(number, None), "{}", number);
    }
}

#[test]
fn test_detect_matches_type_check() {
    let cases = [
        (VISA_1, CardBrand::Visa),
        (MC_2, CardBrand::Mastercard),
        (AMEX_2, CardBrand::Amex),
        (DISCOVER_2, CardBrand::Discover),
        (DINERS_2, CardBrand::DinersClub),
        (JCB_2, CardBrand::Jcb),
        (ENROUTE_2, CardBrand::EnRoute),
    ];
    for (number, brand) in cases {
        let digits = parse_digits(number).unwrap();
        assert_eq!(detect_brand(&digits), Some(brand), "{}", number);
        assert!(is_card_type_of(number, brand));
    }
}

// =============================================================================
// CARD TYPE LABELS
// =============================================================================

#[test]
fn test_amex_synonyms() {
    for label in ["AMEX", "amex", "AmericanExpress", "American Express", "AMERICAN EXPRESS"] {
        assert!(is_card_type(AMEX_1, label), "{}", label);
    }
}

#[test]
fn test_diners_synonyms() {
    for label in ["Diners", "DinersClub", "Diners Club", "CarteBlanche", "Carte Blanche"] {
        assert!(is_card_type(DINERS_1, label), "{}", label);
        assert!(is_valid_card(DINERS_1, Some(label)), "{}", label);
    }
}

#[test]
fn test_unknown_label_is_false_for_anything() {
    for number in [VISA_1, MC_1, AMEX_1, "", "abc", "0"] {
        assert!(!is_card_type(number, "NotARealBrand"));
        assert!(!is_valid_card(number, Some("NotARealBrand")));
    }
}

#[test]
fn test_unknown_label_detailed_error() {
    assert_eq!(
        validate_labeled(VISA_1, Some("Maestro")).unwrap_err(),
        ValidationError::UnknownCardType {
            label: "Maestro".to_string()
        }
    );
}

#[test]
fn test_wrong_type_is_rejected() {
    assert!(!is_card_type(MC_4, "Visa"));
    assert!(!is_valid_card(MC_4, Some("Visa")));
    assert!(!is_valid_card(VISA_1, Some("AMEX")));
    assert!(!is_valid_card(AMEX_1, Some("Discover")));
    assert_eq!(
        validate(DISCOVER_1, Some(CardBrand::Jcb)).unwrap_err(),
        ValidationError::TypeMismatch {
            brand: CardBrand::Jcb
        }
    );
}

#[test]
fn test_type_check_skips_checksum() {
    // Pattern fits, checksum doesn't
    assert!(is_card_type("4111111111111112", "Visa"));
    assert!(!is_valid_card("4111111111111112", Some("Visa")));
}

// =============================================================================
// ENROUTE EXEMPTION
// =============================================================================

#[test]
fn test_enroute_not_rejected_by_checksum() {
    assert!(!luhn_valid(ENROUTE_1));
    assert!(is_valid_card(ENROUTE_1, Some("EnRoute")));

    let card = validate(ENROUTE_1, Some(CardBrand::EnRoute)).unwrap();
    assert!(!card.luhn_checked());
}

#[test]
fn test_enroute_formatted() {
    assert!(is_valid_card("2014 000000 00000", Some("enroute")));
    assert!(is_valid_card("2149-1234-5678-901", Some("ENROUTE")));
}

#[test]
fn test_enroute_prefix_on_other_lengths_is_checked() {
    // 14 and 16 digits starting 2014: regular Luhn applies
    assert!(!luhn_valid("20140000000001"));
    assert!(!is_valid_card("20140000000001", None));
    assert!(!is_valid_card("2014000000000001", None));
}

// =============================================================================
// LENGTH AND FORMAT
// =============================================================================

#[test]
fn test_length_gate() {
    // 12 digits fails even though it passes Luhn
    assert!(luhn_valid("411111111117"));
    assert!(!is_valid_card("411111111117", None));

    // 13 digits is enough (when Luhn passes)
    assert!(is_valid_card(VISA_3, None));
}

#[test]
fn test_failing_checksum() {
    assert!(!is_valid_card("1234567890123", None));
    assert!(!is_valid_card("4111111111111112", None));
    assert_eq!(
        validate("4111 1111 1111 1112", None).unwrap_err(),
        ValidationError::InvalidChecksum
    );
}

#[test]
fn test_separator_forms_agree() {
    let forms = [
        "4111111111111111",
        "4111-1111-1111-1111",
        "4111 1111 1111 1111",
        "4111 - 1111 - 1111 - 1111",
    ];
    for form in forms {
        assert!(is_valid_card(form, None), "{}", form);
        assert!(is_valid_card(form, Some("visa")), "{}", form);
    }
}

#[test]
fn test_normalization_idempotent() {
    let once = strip_separators("4111-1111 1111-1111").into_owned();
    assert_eq!(strip_separators(&once), once.as_str());
}

#[test]
fn test_other_formatting_rejected() {
    for input in [
        "4111.1111.1111.1111",
        "4111_1111_1111_1111",
        "4111\t1111\t1111\t1111",
        "(4111) 1111 1111 1111",
        "+4111111111111111",
        "4111111111111111\n",
    ] {
        assert!(!is_valid_card(input, None), "{:?}", input);
    }
}

#[test]
fn test_malformed_input_never_panics() {
    for input in ["", " ", "-", "----", "abc", "🦀🦀🦀🦀🦀🦀🦀🦀🦀🦀🦀🦀🦀", "٤١١١١١١١١١١١١١١١"] {
        assert!(!is_valid_card(input, None));
        assert!(!is_valid_card(input, Some("Visa")));
        assert!(!is_card_type(input, "Visa"));
        assert!(!luhn_valid(input));
    }
}

#[test]
fn test_detailed_errors() {
    assert_eq!(validate("", None).unwrap_err(), ValidationError::Empty);
    assert_eq!(validate("- -", None).unwrap_err(), ValidationError::NoDigits);
    assert_eq!(
        validate("4111 1111 111", None).unwrap_err(),
        ValidationError::TooShort {
            length: 11,
            minimum: 13
        }
    );
    assert_eq!(
        validate("4111x", None).unwrap_err(),
        ValidationError::InvalidCharacter {
            position: 4,
            character: 'x'
        }
    );
}

#[test]
fn test_long_numbers_have_no_upper_limit() {
    // 20 digits, passes Luhn, no type requested
    assert!(is_valid_card("41111111111111111115", None));
    // ...but no type pattern admits it
    assert!(!is_valid_card("41111111111111111115", Some("Visa")));
}

// =============================================================================
// LUHN
// =============================================================================

#[test]
fn test_luhn_single_digits() {
    assert!(luhn_valid("0"));
    for d in '1'..='9' {
        assert!(!luhn_valid(&d.to_string()));
    }
}

#[test]
fn test_luhn_strict_errors() {
    assert_eq!(luhn::check(""), Err(ValidationError::Empty));
    assert!(matches!(
        luhn::check("4111-1111"),
        Err(ValidationError::InvalidCharacter { position: 4, character: '-' })
    ));
}

// =============================================================================
// BATCH
// =============================================================================

#[test]
fn test_batch_counts() {
    let cards = [VISA_1, "4111111111111112", AMEX_1, "", ENROUTE_1];
    assert_eq!(count_valid(&cards), (3, 2));

    let amex_only = BatchValidator::new().with_card_type(CardBrand::Amex);
    assert_eq!(amex_only.count_valid(&cards), (1, 4));
}

// =============================================================================
// SECURITY
// =============================================================================

#[test]
fn test_validated_card_never_prints_number() {
    let card = validate(VISA_2, Some(CardBrand::Visa)).unwrap();
    assert!(!format!("{}", card).contains(VISA_2));
    assert!(!format!("{:?}", card).contains(VISA_2));
    assert_eq!(card.last_four(), "1881");
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn test_rejection_logs_are_masked() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(logs.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        assert!(!is_valid_card("4111-1111-1111-1112", Some("Visa")));
        assert!(!is_card_type(VISA_1, "Maestro"));
    });

    let output = logs.contents();
    assert!(output.contains("card number rejected"), "{}", output);
    assert!(output.contains("************1112"), "{}", output);
    assert!(output.contains("unknown card type label"), "{}", output);
    assert!(!output.contains("4111111111111112"), "{}", output);
    assert!(!output.contains("4111-1111-1111-1112"), "{}", output);
}

#[test]
fn test_concurrent_use() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                (0..1000).all(|_| is_valid_card(VISA_1, Some("Visa")) && !is_valid_card(VISA_1, Some("Amex")))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
