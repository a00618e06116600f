//! Error types for the phone entry form.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when sending the phone number for verification.
#[derive(Error, Debug, Clone)]
pub enum AuthError {
    /// Transport-level failure (connection refused, DNS, TLS, ...)
    #[error("request failed: {0}")]
    Request(String),

    /// Server rejected the request
    #[error("server error (status {status}): {message}")]
    Server { status: u16, message: String },

    /// Network timeout
    #[error("request timeout")]
    Timeout,
}

/// Errors that can occur while parsing a dialed string into calling code
/// and national number.
#[derive(Error, Debug)]
pub enum PhoneParseError {
    /// Text is not a viable international phone number
    #[error("unparseable phone number: {0}")]
    Unparseable(String),

    /// No country calling code could be extracted
    #[error("missing country calling code")]
    MissingCallingCode,
}

/// Validation failures for the form, checked in order on submit.
///
/// Only the first failing rule is surfaced; each variant maps to one
/// field-attached message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormValidationError {
    /// Phone number field is empty
    #[error("phone number is empty")]
    EmptyPhoneNumber,

    /// Phone number is not valid for the detected country
    #[error("phone number is not valid for the detected country")]
    InvalidPhoneNumber,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with AuthError
pub type AuthResult<T> = Result<T, AuthError>;

/// Convenience type alias for Results with PhoneParseError
pub type PhoneParseResult<T> = Result<T, PhoneParseError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
