//! Authentication collaborator boundary.

use crate::error::AuthResult;
use async_trait::async_trait;

/// Outbound "send verification code" capability.
///
/// The form issues at most one request at a time; the transport behind this
/// trait (HTTP client, test double) is the host's concern.
#[async_trait]
pub trait AuthModel: Send + Sync {
    /// Request a verification code for the given phone string,
    /// e.g. `"+44 7911123456"`.
    async fn send_phone(&self, phone: &str) -> AuthResult<()>;
}
