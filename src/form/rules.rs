//! Pure derivation and validation rules.
//!
//! Every function here is a total function over (country-code text,
//! phone-number text, in-progress); the controller owns sequencing and
//! signal emission, these own the semantics.

use crate::domain::{only_digits, Country};
use crate::error::FormValidationError;
use crate::phone::PhoneUtil;

/// Canonical display form of the country-code field: '+' followed by at
/// most `max_digits` digits.
pub(crate) fn canonical_country_code(text: &str, max_digits: usize) -> String {
    let digits: String = only_digits(text).chars().take(max_digits).collect();
    format!("+{}", digits)
}

/// Country owning the digits of the country-code field.
///
/// UNKNOWN when the field holds no digits or the code maps to no region.
pub(crate) fn detect_country(phone_util: &dyn PhoneUtil, country_code_text: &str) -> Country {
    let digits = only_digits(country_code_text);
    if digits.is_empty() {
        return Country::unknown();
    }
    match digits.parse::<u32>() {
        Ok(code) => phone_util.country_for_calling_code(code),
        Err(_) => Country::unknown(),
    }
}

/// The send button is permitted only for a valid number with no
/// submission outstanding.
pub(crate) fn send_enabled(
    phone_util: &dyn PhoneUtil,
    country: &Country,
    phone_number_text: &str,
    in_progress: bool,
) -> bool {
    !in_progress && phone_util.is_valid_phone(country, phone_number_text)
}

/// Submit-time validation. Short-circuit, first failing rule wins.
pub(crate) fn validate(
    phone_util: &dyn PhoneUtil,
    country: &Country,
    phone_number_text: &str,
) -> Result<(), FormValidationError> {
    if phone_number_text.is_empty() {
        Err(FormValidationError::EmptyPhoneNumber)
    } else if !phone_util.is_valid_phone(country, phone_number_text) {
        Err(FormValidationError::InvalidPhoneNumber)
    } else {
        Ok(())
    }
}
