//! Phone-number capability boundary.
//!
//! The form never talks to a phone-metadata library directly; everything
//! goes through [`PhoneUtil`], so hosts can substitute their own
//! implementation (or a mock in tests).

mod metadata;

pub use metadata::MetadataPhoneUtil;

use crate::domain::{Country, ParsedPhone};
use crate::error::PhoneParseResult;

/// Parsing, formatting, validation, and country lookup for phone numbers.
pub trait PhoneUtil: Send + Sync {
    /// Parse text as a full international number and split it into
    /// calling code and national number.
    fn parse_phone(&self, text: &str) -> PhoneParseResult<ParsedPhone>;

    /// Look up the country owning a calling code.
    ///
    /// Returns [`Country::unknown`] when the code maps to no region.
    fn country_for_calling_code(&self, calling_code: u32) -> Country;

    /// Format a national number for display in the given country.
    ///
    /// Text that cannot be formatted (partial input, unknown country) is
    /// returned unchanged.
    fn format_phone_number(&self, country: &Country, text: &str) -> String;

    /// Whether the text is a dialable number for the given country.
    ///
    /// Always false for the unknown country.
    fn is_valid_phone(&self, country: &Country, text: &str) -> bool;
}
