//! The form controller.

use super::rules;
use super::signal::{FieldId, FormSignal, SignalSink};
use super::state::FormState;
use crate::auth::AuthModel;
use crate::config::FormConfig;
use crate::domain::{only_digits, Country};
use crate::error::FormValidationError;
use crate::phone::PhoneUtil;
use crate::resources::{ResourceProvider, StringKey};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Presentation logic of the phone entry screen.
///
/// Owns the two editable fields and all derived state; collaborators are
/// injected behind trait objects. Inbound UI events map to the public
/// methods, outbound effects leave through the [`SignalSink`].
///
/// The controller is single-owner: every operation takes `&mut self` and
/// runs to completion on the caller's context, so "at most one submission
/// in flight" needs nothing stronger than the in-progress flag. Dropping
/// the controller abandons any pending submission.
pub struct FormController {
    config: FormConfig,
    phone_util: Arc<dyn PhoneUtil>,
    resources: Arc<dyn ResourceProvider>,
    auth: Arc<dyn AuthModel>,
    sink: Arc<dyn SignalSink>,
    state: FormState,
}

impl FormController {
    pub fn new(
        config: FormConfig,
        phone_util: Arc<dyn PhoneUtil>,
        resources: Arc<dyn ResourceProvider>,
        auth: Arc<dyn AuthModel>,
        sink: Arc<dyn SignalSink>,
    ) -> Self {
        let initial_code = rules::canonical_country_code(
            &config.initial_country_code,
            config.max_country_code_digits,
        );
        let detected = rules::detect_country(phone_util.as_ref(), &initial_code);
        let state = FormState::new(initial_code, detected);

        Self {
            config,
            phone_util,
            resources,
            auth,
            sink,
            state,
        }
    }

    /// Current state, for hosts that render by polling instead of signals.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Emit the initial render: field texts, send gate, progress indicator.
    pub fn bootstrap(&self) {
        self.emit(FormSignal::FieldText {
            field: FieldId::CountryCode,
            text: self.state.country_code_text.clone(),
        });
        self.emit(FormSignal::FieldText {
            field: FieldId::PhoneNumber,
            text: self.state.phone_number_text.clone(),
        });
        self.emit(FormSignal::SendEnabled {
            enabled: self.state.send_enabled,
        });
        self.emit(FormSignal::InProgress {
            active: self.state.in_progress,
        });
    }

    /// The country-code field changed.
    ///
    /// Text is canonicalized to `+<digits>`. A paste longer than the digit
    /// cap is offered to the phone parser; when it turns out to be a full
    /// international number the national part moves into the phone field,
    /// focus follows it, and the country-code field keeps only the calling
    /// code. An unparseable overflow is displayed capped.
    pub fn country_code_edited(&mut self, text: &str) {
        let digits = only_digits(text);

        let display = if digits.len() > self.config.max_country_code_digits {
            match self.phone_util.parse_phone(&format!("+{}", digits)) {
                Ok(parsed) => {
                    debug!(
                        calling_code = parsed.calling_code,
                        "country-code paste parsed as full number"
                    );
                    self.emit(FormSignal::FocusRequest {
                        field: FieldId::PhoneNumber,
                    });
                    self.state.phone_number_text = parsed.national_number;
                    self.clear_phone_error();
                    format!("+{}", parsed.calling_code)
                }
                Err(e) => {
                    debug!(error = %e, "country-code overflow not parseable, capping");
                    rules::canonical_country_code(text, self.config.max_country_code_digits)
                }
            }
        } else {
            rules::canonical_country_code(text, self.config.max_country_code_digits)
        };

        self.set_country_code_text(display);
        self.state.detected_country =
            rules::detect_country(self.phone_util.as_ref(), &self.state.country_code_text);
        self.refresh_phone_display();
        self.refresh_send_enabled();
    }

    /// The phone-number field changed.
    pub fn phone_number_edited(&mut self, text: &str) {
        if self.state.phone_number_text != text {
            self.state.phone_number_text = text.to_string();
        }
        self.clear_phone_error();
        self.refresh_phone_display();
        self.refresh_send_enabled();
    }

    /// A country was picked in the external country selector.
    pub fn country_chosen(&mut self, country: Country) {
        debug!(country = %country, "country chosen");
        self.set_country_code_text(format!("+{}", country.calling_code()));
        self.state.detected_country = country;
        self.emit(FormSignal::FocusRequest {
            field: FieldId::PhoneNumber,
        });
        self.refresh_phone_display();
        self.refresh_send_enabled();
    }

    /// The user asked to open the country selector.
    pub fn country_picker_requested(&self) {
        self.emit(FormSignal::OpenCountryPicker);
    }

    /// Validate and send the phone number.
    ///
    /// Ignored while a submission is outstanding. A validation failure
    /// attaches a message to the phone field and issues no request. A valid
    /// form issues one request per attempt, up to
    /// [`FormConfig::max_send_attempts`], pausing `retry_backoff * attempt`
    /// between failures; each failure also surfaces a transient error.
    pub async fn submit(&mut self) {
        if self.state.in_progress {
            debug!("submission already in flight, ignoring");
            return;
        }

        if let Err(reason) = rules::validate(
            self.phone_util.as_ref(),
            &self.state.detected_country,
            &self.state.phone_number_text,
        ) {
            let key = match reason {
                FormValidationError::EmptyPhoneNumber => StringKey::EnterPhoneNumber,
                FormValidationError::InvalidPhoneNumber => StringKey::InvalidPhoneNumber,
            };
            let message = self.resources.string(key);
            debug!(%reason, "submit rejected by validation");
            self.state.phone_error = Some(message.clone());
            self.emit(FormSignal::FieldError {
                field: FieldId::PhoneNumber,
                message: Some(message),
            });
            return;
        }

        let phone = format!(
            "{} {}",
            self.state.country_code_text, self.state.phone_number_text
        );
        self.set_in_progress(true);
        info!(phone = %phone, "sending verification code");

        let mut attempt = 0u32;
        loop {
            attempt += 1;
            match self.auth.send_phone(&phone).await {
                Ok(()) => {
                    info!(attempt, "phone sent successfully");
                    self.emit(FormSignal::PhoneSent {
                        phone: phone.clone(),
                    });
                    break;
                }
                Err(e) => {
                    warn!(attempt, error = %e, "send attempt failed");
                    self.emit(FormSignal::SubmissionError {
                        message: e.to_string(),
                    });
                    if attempt >= self.config.max_send_attempts {
                        warn!(attempts = attempt, "giving up on submission");
                        break;
                    }
                    tokio::time::sleep(self.config.retry_backoff * attempt).await;
                }
            }
        }

        self.set_in_progress(false);
    }

    fn emit(&self, signal: FormSignal) {
        self.sink.emit(signal);
    }

    fn set_country_code_text(&mut self, text: String) {
        if self.state.country_code_text != text {
            self.state.country_code_text = text;
        }
        self.emit(FormSignal::FieldText {
            field: FieldId::CountryCode,
            text: self.state.country_code_text.clone(),
        });
    }

    fn clear_phone_error(&mut self) {
        if self.state.phone_error.take().is_some() {
            self.emit(FormSignal::FieldError {
                field: FieldId::PhoneNumber,
                message: None,
            });
        }
    }

    /// Re-derive the formatted phone display from the raw text and the
    /// detected country.
    fn refresh_phone_display(&self) {
        let formatted = self
            .phone_util
            .format_phone_number(&self.state.detected_country, &self.state.phone_number_text);
        self.emit(FormSignal::FieldText {
            field: FieldId::PhoneNumber,
            text: formatted,
        });
    }

    fn refresh_send_enabled(&mut self) {
        let enabled = rules::send_enabled(
            self.phone_util.as_ref(),
            &self.state.detected_country,
            &self.state.phone_number_text,
            self.state.in_progress,
        );
        if enabled != self.state.send_enabled {
            self.state.send_enabled = enabled;
            self.emit(FormSignal::SendEnabled { enabled });
        }
    }

    fn set_in_progress(&mut self, active: bool) {
        if self.state.in_progress != active {
            self.state.in_progress = active;
            self.emit(FormSignal::InProgress { active });
        }
        self.refresh_send_enabled();
    }
}
