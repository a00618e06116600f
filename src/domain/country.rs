//! Country value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A country as seen by the form: an ISO 3166-1 alpha-2 region code plus
/// its numeric calling code.
///
/// The unknown country is a first-class value rather than an `Option` so
/// derivation rules can always carry a `Country`; it is what the detection
/// stream produces when the country-code field is empty or unmapped.
///
/// # Example
///
/// ```
/// use phone_entry_form::domain::Country;
///
/// let gb = Country::new("GB", 44);
/// assert_eq!(gb.calling_code(), 44);
/// assert!(!gb.is_unknown());
/// assert!(Country::unknown().is_unknown());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Country {
    iso_code: String,
    calling_code: u32,
}

impl Country {
    /// Create a country from an ISO region code and its calling code.
    pub fn new(iso_code: impl Into<String>, calling_code: u32) -> Self {
        Self {
            iso_code: iso_code.into(),
            calling_code,
        }
    }

    /// The sentinel for "no country detected".
    pub fn unknown() -> Self {
        Self {
            iso_code: String::new(),
            calling_code: 0,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.iso_code.is_empty()
    }

    /// ISO 3166-1 alpha-2 region code, e.g. "GB". Empty for the unknown country.
    pub fn iso_code(&self) -> &str {
        &self.iso_code
    }

    /// Numeric dialing prefix, e.g. 44 for the UK. Zero for the unknown country.
    pub fn calling_code(&self) -> u32 {
        self.calling_code
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            write!(f, "UNKNOWN")
        } else {
            write!(f, "{} (+{})", self.iso_code, self.calling_code)
        }
    }
}
