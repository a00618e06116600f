//! `PhoneUtil` implementation backed by the `phonenumber` crate.

use super::PhoneUtil;
use crate::domain::{Country, ParsedPhone};
use crate::error::{PhoneParseError, PhoneParseResult};
use phonenumber::Mode;
use std::str::FromStr;
use tracing::debug;

/// Default phone capability, backed by the bundled libphonenumber metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataPhoneUtil;

impl MetadataPhoneUtil {
    pub fn new() -> Self {
        Self
    }

    fn region_id(country: &Country) -> Option<phonenumber::country::Id> {
        phonenumber::country::Id::from_str(country.iso_code()).ok()
    }
}

impl PhoneUtil for MetadataPhoneUtil {
    fn parse_phone(&self, text: &str) -> PhoneParseResult<ParsedPhone> {
        // The parser needs the international prefix to attribute a calling code.
        let text = if text.starts_with('+') {
            text.to_string()
        } else {
            format!("+{}", text)
        };

        let number = phonenumber::parse(None, &text)
            .map_err(|e| PhoneParseError::Unparseable(e.to_string()))?;

        let calling_code = u32::from(number.code().value());
        if calling_code == 0 {
            return Err(PhoneParseError::MissingCallingCode);
        }

        Ok(ParsedPhone {
            calling_code,
            national_number: number.national().value().to_string(),
        })
    }

    fn country_for_calling_code(&self, calling_code: u32) -> Country {
        let code = match u16::try_from(calling_code) {
            Ok(code) if code > 0 => code,
            _ => return Country::unknown(),
        };

        // The metadata lists the main country for a shared code first.
        match phonenumber::metadata::DATABASE
            .by_code(&code)
            .and_then(|regions| regions.first().map(|meta| meta.id().to_string()))
        {
            Some(iso) => Country::new(iso, calling_code),
            None => {
                debug!(calling_code, "no region mapped to calling code");
                Country::unknown()
            }
        }
    }

    fn format_phone_number(&self, country: &Country, text: &str) -> String {
        if text.is_empty() {
            return text.to_string();
        }
        let Some(region) = Self::region_id(country) else {
            return text.to_string();
        };

        match phonenumber::parse(Some(region), text) {
            Ok(number) if phonenumber::is_valid(&number) => {
                number.format().mode(Mode::National).to_string()
            }
            // Partial input stays as typed until it becomes dialable.
            _ => text.to_string(),
        }
    }

    fn is_valid_phone(&self, country: &Country, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let Some(region) = Self::region_id(country) else {
            return false;
        };

        match phonenumber::parse(Some(region), text) {
            Ok(number) => phonenumber::is_valid(&number),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::only_digits;

    #[test]
    fn test_parse_full_international_number() {
        let util = MetadataPhoneUtil::new();
        let parsed = util.parse_phone("+447911123456").unwrap();
        assert_eq!(parsed.calling_code, 44);
        assert_eq!(parsed.national_number, "7911123456");
    }

    #[test]
    fn test_parse_accepts_bare_digits() {
        let util = MetadataPhoneUtil::new();
        let parsed = util.parse_phone("447911123456").unwrap();
        assert_eq!(parsed.calling_code, 44);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let util = MetadataPhoneUtil::new();
        assert!(util.parse_phone("+999999999999").is_err());
    }

    #[test]
    fn test_country_lookup() {
        let util = MetadataPhoneUtil::new();
        assert_eq!(util.country_for_calling_code(44).iso_code(), "GB");
        assert_eq!(util.country_for_calling_code(1).iso_code(), "US");
        assert!(util.country_for_calling_code(0).is_unknown());
        assert!(util.country_for_calling_code(999).is_unknown());
    }

    #[test]
    fn test_validity_per_country() {
        let util = MetadataPhoneUtil::new();
        let gb = Country::new("GB", 44);
        assert!(util.is_valid_phone(&gb, "7911123456"));
        assert!(!util.is_valid_phone(&gb, "123"));
        assert!(!util.is_valid_phone(&Country::unknown(), "7911123456"));
        assert!(!util.is_valid_phone(&gb, ""));
    }

    #[test]
    fn test_format_keeps_digits() {
        let util = MetadataPhoneUtil::new();
        let gb = Country::new("GB", 44);
        let formatted = util.format_phone_number(&gb, "7911123456");
        assert_eq!(only_digits(&formatted), "7911123456");
    }

    #[test]
    fn test_format_partial_input_unchanged() {
        let util = MetadataPhoneUtil::new();
        let gb = Country::new("GB", 44);
        assert_eq!(util.format_phone_number(&gb, "79"), "79");
        assert_eq!(util.format_phone_number(&Country::unknown(), "79"), "79");
    }
}
