use phone_entry_form::{FieldId, FormSignal, SignalSink};
use std::sync::{Arc, Mutex};

/// Signal sink that records every emission for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct RecordingSink {
    signals: Arc<Mutex<Vec<FormSignal>>>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything emitted so far, in order.
    pub fn signals(&self) -> Vec<FormSignal> {
        self.signals.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.signals.lock().unwrap().clear();
    }

    /// Text of the most recent `FieldText` for the given field.
    pub fn last_field_text(&self, field: FieldId) -> Option<String> {
        self.signals()
            .into_iter()
            .rev()
            .find_map(|signal| match signal {
                FormSignal::FieldText { field: f, text } if f == field => Some(text),
                _ => None,
            })
    }

    /// Number of recorded signals matching the predicate.
    pub fn count_where(&self, pred: impl Fn(&FormSignal) -> bool) -> usize {
        self.signals().iter().filter(|s| pred(s)).count()
    }

    /// Index of the first recorded signal equal to the given one.
    pub fn position_of(&self, signal: &FormSignal) -> Option<usize> {
        self.signals().iter().position(|s| s == signal)
    }
}

impl SignalSink for RecordingSink {
    fn emit(&self, signal: FormSignal) {
        self.signals.lock().unwrap().push(signal);
    }
}
