//! Phone-number text helpers and the parsed-number value object.

use serde::{Deserialize, Serialize};

/// Strip everything but ASCII digits from user input.
///
/// # Example
///
/// ```
/// use phone_entry_form::domain::only_digits;
///
/// assert_eq!(only_digits("+44 (791) 112-3456"), "447911123456");
/// ```
pub fn only_digits(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// A full international number split into its calling code and national number.
///
/// Produced by [`PhoneUtil::parse_phone`](crate::phone::PhoneUtil::parse_phone)
/// when a long paste into the country-code field turns out to be a complete
/// dialable number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedPhone {
    /// Numeric dialing prefix, e.g. 44.
    pub calling_code: u32,

    /// Digits after the calling code, without formatting.
    pub national_number: String,
}
