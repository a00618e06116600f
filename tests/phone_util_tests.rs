use phone_entry_form::domain::only_digits;
use phone_entry_form::{Country, MetadataPhoneUtil, PhoneUtil};
use std::sync::Arc;

fn util() -> Arc<dyn PhoneUtil> {
    Arc::new(MetadataPhoneUtil::new())
}

#[test]
fn test_parse_splits_calling_code_and_national_number() {
    let util = util();

    let parsed = util.parse_phone("+447911123456").unwrap();
    assert_eq!(parsed.calling_code, 44);
    assert_eq!(parsed.national_number, "7911123456");

    let parsed = util.parse_phone("+14155552671").unwrap();
    assert_eq!(parsed.calling_code, 1);
    assert_eq!(parsed.national_number, "4155552671");
}

#[test]
fn test_parse_tolerates_formatting_noise() {
    let util = util();
    let parsed = util.parse_phone("+44 791-112-3456").unwrap();
    assert_eq!(parsed.calling_code, 44);
    assert_eq!(parsed.national_number, "7911123456");
}

#[test]
fn test_parse_rejects_unassigned_calling_code() {
    let util = util();
    assert!(util.parse_phone("+999999999999").is_err());
}

#[test]
fn test_calling_code_lookup_maps_to_main_region() {
    let util = util();

    assert_eq!(util.country_for_calling_code(44).iso_code(), "GB");
    assert_eq!(util.country_for_calling_code(1).iso_code(), "US");
    assert_eq!(util.country_for_calling_code(7).iso_code(), "RU");
    assert!(util.country_for_calling_code(999).is_unknown());
    assert!(util.country_for_calling_code(0).is_unknown());
}

#[test]
fn test_validity_is_country_specific() {
    let util = util();
    let gb = Country::new("GB", 44);
    let us = Country::new("US", 1);

    assert!(util.is_valid_phone(&gb, "7911123456"));
    assert!(util.is_valid_phone(&us, "4155552671"));
    // A GB mobile is not a dialable US national number.
    assert!(!util.is_valid_phone(&us, "7911123456"));
    assert!(!util.is_valid_phone(&gb, ""));
    assert!(!util.is_valid_phone(&Country::unknown(), "7911123456"));
}

#[test]
fn test_format_preserves_digits_for_valid_numbers() {
    let util = util();
    let gb = Country::new("GB", 44);

    let formatted = util.format_phone_number(&gb, "7911123456");
    assert_eq!(only_digits(&formatted), "7911123456");
}

#[test]
fn test_format_leaves_partial_and_unknown_input_alone() {
    let util = util();
    let gb = Country::new("GB", 44);

    assert_eq!(util.format_phone_number(&gb, "791"), "791");
    assert_eq!(util.format_phone_number(&Country::unknown(), "791"), "791");
    assert_eq!(util.format_phone_number(&gb, ""), "");
}
