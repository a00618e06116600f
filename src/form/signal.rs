//! Outbound signals from the form to its host.
//!
//! The original push-based stream wiring is replaced by one explicit
//! publish-subscribe seam: every observable effect of an operation is a
//! [`FormSignal`] handed to the injected [`SignalSink`].

use serde::{Deserialize, Serialize};

/// The two user-editable inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    CountryCode,
    PhoneNumber,
}

/// Everything the form can tell the UI and navigation layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormSignal {
    /// Re-render an input with new text.
    FieldText { field: FieldId, text: String },

    /// Attach a validation message to a field, or clear it with `None`.
    FieldError {
        field: FieldId,
        message: Option<String>,
    },

    /// Move input focus to a field.
    FocusRequest { field: FieldId },

    /// Gate the send button.
    SendEnabled { enabled: bool },

    /// Show or hide the submission progress indicator.
    InProgress { active: bool },

    /// Navigate to country selection.
    OpenCountryPicker,

    /// A send attempt failed; message is transient, not field-attached.
    SubmissionError { message: String },

    /// The verification code request succeeded for this phone string.
    PhoneSent { phone: String },
}

/// Receiver for form signals.
///
/// Implementations must be cheap and non-blocking; the controller emits
/// synchronously from its own context.
pub trait SignalSink: Send + Sync {
    fn emit(&self, signal: FormSignal);
}
