//! Phone Entry Form - presentation logic for a phone-number entry and submission screen.
//!
//! This library binds user edits of a country-code field and a phone-number
//! field to derived state (detected country, formatted display text, send gate)
//! and drives a single guarded asynchronous "send verification code" request.
//! It owns no rendering, no transport, and no localization: those arrive as
//! injected collaborators, and every observable effect leaves through an
//! explicit signal sink.
//!
//! # Architecture
//!
//! - **domain**: Country and parsed-phone value objects, digit helpers
//! - **error**: Custom error types for precise error handling
//! - **config**: Tunables with environment overrides
//! - **phone**: `PhoneUtil` capability trait and its metadata-backed default
//! - **auth**: `AuthModel` trait for the outbound send request
//! - **resources**: Localized string lookup
//! - **form**: `FormController`, its state, derivation rules, and signals

pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod phone;
pub mod resources;

pub use auth::AuthModel;
pub use config::FormConfig;
pub use domain::{Country, ParsedPhone};
pub use error::{AuthError, AuthResult, ConfigError, FormValidationError, PhoneParseError};
pub use form::{FieldId, FormController, FormSignal, FormState, SignalSink};
pub use phone::{MetadataPhoneUtil, PhoneUtil};
pub use resources::{ResourceProvider, StaticResources, StringKey};
