//! Integration tests for the validation-function catalog.

use verity::catalog::{self, CountryCode};

// =============================================================================
// Transform Tests
// =============================================================================

#[test]
fn test_only_numbers_keeps_digits_in_order() {
    assert_eq!(catalog::only_numbers("a1b2c3"), "123");
    assert_eq!(catalog::only_numbers("(555) 867-5309"), "5558675309");
    assert_eq!(catalog::only_numbers("none"), "");
}

#[test]
fn test_only_numbers_is_idempotent() {
    for input in ["a1b2c3", "", "123", "!@#", "héllo42"] {
        let once = catalog::only_numbers(input);
        assert_eq!(catalog::only_numbers(&once), once);
    }
}

#[test]
fn test_include_then_exclude_annihilates() {
    // Everything kept by an allowed set is removed by excluding that set.
    let allowed = ["a".to_string(), "e".to_string(), "1".to_string()];
    let exclude: String = allowed.concat();
    for input in ["alphabet 123", "", "aaa", "xyz"] {
        let kept = catalog::include_only_these_characters(input, &allowed);
        assert_eq!(catalog::exclude_these_characters(&kept, &exclude), "");
    }
}

// =============================================================================
// Numeric Shape Tests
// =============================================================================

#[test]
fn test_integer_shapes() {
    assert!(catalog::is_integer("1234"));
    assert!(!catalog::is_integer("01234"));
    assert!(!catalog::is_integer(".1234"));
    assert!(!catalog::is_integer("1.1"));
}

#[test]
fn test_decimal_and_hex_shapes() {
    assert!(catalog::is_decimal("-273.15"));
    assert!(!catalog::is_decimal("-+34"));
    assert!(catalog::is_hexadecimal("0x1a3f"));
    assert!(!catalog::is_hexadecimal("0X1A3F"));
}

// =============================================================================
// Format Tests
// =============================================================================

#[test]
fn test_email_shapes() {
    assert!(catalog::is_email_address("test@gmail.com"));
    assert!(!catalog::is_email_address("user@domain..com"));
    assert!(!catalog::is_email_address("plainaddress"));
}

#[test]
fn test_date_shapes() {
    assert!(catalog::is_date("2025-02-16"));
    assert!(!catalog::is_date("2025/02/23 14:30"));
    assert!(!catalog::is_date("2025-02/23"));
}

#[test]
fn test_lat_long_shapes() {
    assert!(catalog::is_lat_long("34.052235,-118.243683", false));
    assert!(!catalog::is_lat_long("34.052235,-118.243683,extra", false));
    assert!(catalog::is_lat_long(r#"37°46'30"N 122°25'10"W"#, true));
}

// =============================================================================
// Locale Tests
// =============================================================================

#[test]
fn test_zip_codes() {
    assert!(catalog::is_zip_code("90210", CountryCode::Us));
    assert!(!catalog::is_zip_code("12345-12", CountryCode::Us));
    assert!(catalog::is_zip_code("W1A 1AA", CountryCode::Uk));
}

#[test]
fn test_state_and_boolean_membership() {
    assert!(catalog::is_valid_state_code("NY"));
    assert!(!catalog::is_valid_state_code("ny"));
    assert!(catalog::is_boolean("TRUE"));
    assert!(!catalog::is_boolean("yes"));
}

// =============================================================================
// Comparison Tests
// =============================================================================

#[test]
fn test_equality_case_folding() {
    assert!(catalog::is_equal("Hello", "hello", false));
    assert!(!catalog::is_equal("Hello", "hello", true));
    assert!(catalog::contains("Hello World", "world", false));
    assert!(!catalog::contains("Hello World", "world", true));
}
