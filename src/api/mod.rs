//! The gateway operations: authentication-gated pass-through to the
//! model. Each operation receives the caller identity and the model
//! handle as explicit parameters; the transport layer constructs both
//! per request.

pub mod error;
pub mod interactions;
pub mod tags;

pub use error::ApiError;

/// The authenticated caller attached to a request, if any. Its absence
/// gates every operation.
#[derive(Debug, Clone, Default)]
pub struct Identity(pub Option<String>);

impl Identity {
    pub fn anonymous() -> Self {
        Identity(None)
    }

    pub fn user(user_id: impl Into<String>) -> Self {
        Identity(Some(user_id.into()))
    }

    pub fn user_id(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

/// Returns the caller's user id, or the uniform authentication error
/// naming the attempted operation.
pub(crate) fn require_login<'a>(
    identity: &'a Identity,
    operation: &'static str,
) -> Result<&'a str, ApiError> {
    identity
        .user_id()
        .ok_or(ApiError::Unauthenticated(operation))
}
