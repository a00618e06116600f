use async_trait::async_trait;
use phone_entry_form::error::{AuthError, AuthResult};
use phone_entry_form::AuthModel;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Mock auth backend for testing.
///
/// Outcomes are scripted up front; once the script runs out every further
/// call succeeds. Sent phone strings are recorded for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockAuthModel {
    outcomes: Arc<Mutex<VecDeque<AuthResult<()>>>>,
    sent: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockAuthModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the next call to fail with the given error.
    pub fn fail_next(&self, error: AuthError) {
        self.outcomes.lock().unwrap().push_back(Err(error));
    }

    /// Script the next `count` calls to fail with clones of the given error.
    pub fn fail_times(&self, count: usize, error: AuthError) {
        let mut outcomes = self.outcomes.lock().unwrap();
        for _ in 0..count {
            outcomes.push_back(Err(error.clone()));
        }
    }

    /// Every phone string passed to `send_phone`, in call order.
    pub fn sent_phones(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl AuthModel for MockAuthModel {
    async fn send_phone(&self, phone: &str) -> AuthResult<()> {
        self.sent.lock().unwrap().push(phone.to_string());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }
}
