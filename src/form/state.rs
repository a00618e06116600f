//! Owned state of the form.

use crate::domain::Country;

/// Everything the form remembers between operations.
///
/// Raw inputs plus the in-progress flag are the only free variables; the
/// rest is recomputed by the rules in [`super::rules`] on every change.
/// State is per-screen-session and rebuilt from scratch on recreation.
#[derive(Debug, Clone)]
pub struct FormState {
    /// Canonical country-code text, always starting with '+'.
    pub(crate) country_code_text: String,

    /// Phone number exactly as entered (or injected by a long paste).
    pub(crate) phone_number_text: String,

    /// Validation message currently attached to the phone field.
    pub(crate) phone_error: Option<String>,

    /// Country derived from the country-code digits, or chosen directly.
    pub(crate) detected_country: Country,

    /// True while a submission is outstanding.
    pub(crate) in_progress: bool,

    /// Derived send-button gate.
    pub(crate) send_enabled: bool,
}

impl FormState {
    pub(crate) fn new(initial_country_code: String, detected_country: Country) -> Self {
        Self {
            country_code_text: initial_country_code,
            phone_number_text: String::new(),
            phone_error: None,
            detected_country,
            in_progress: false,
            send_enabled: false,
        }
    }

    pub fn country_code_text(&self) -> &str {
        &self.country_code_text
    }

    pub fn phone_number_text(&self) -> &str {
        &self.phone_number_text
    }

    pub fn phone_error(&self) -> Option<&str> {
        self.phone_error.as_deref()
    }

    pub fn detected_country(&self) -> &Country {
        &self.detected_country
    }

    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    pub fn send_enabled(&self) -> bool {
        self.send_enabled
    }
}
