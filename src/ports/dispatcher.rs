use super::event::{Event, EventKind};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("No handler registered for {0}")]
    Unhandled(EventKind),

    #[error("Unexpected payload type for {0}")]
    PayloadMismatch(EventKind),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Backend error {code}: {message}")]
    Backend { code: i32, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DispatchError {
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, DispatchError::NotImplemented(_))
    }
}

pub type DispatchResult<T> = Result<T, DispatchError>;

/// Sends a typed request to the backend and resolves with its typed response.
///
/// Transport, serialization, cancellation and timeouts all belong to the
/// implementation.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn send<E: Event>(&self, input: E::Input) -> DispatchResult<E::Output>;
}
