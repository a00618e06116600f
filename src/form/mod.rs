//! The phone entry form: state, derivation rules, signals, controller.

mod controller;
mod rules;
mod signal;
mod state;

pub use controller::FormController;
pub use signal::{FieldId, FormSignal, SignalSink};
pub use state::FormState;
