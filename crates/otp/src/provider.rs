//! Credential provider seam.
//!
//! Stands in for the browser's capability-gated credential API. The request
//! is restricted to SMS-delivered codes by contract; the provider either
//! resolves with a code string or fails, with cancellation distinguished so
//! the controller can suppress reporting and retry.

use std::collections::VecDeque;

use thiserror::Error;

/// A failed credential request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// The request was cancelled (user dismissal or an explicit abort).
    /// Never reported as an error and never retried.
    #[error("OTP request was aborted")]
    Aborted,

    /// Any other platform failure; reported and retried.
    #[error("{0}")]
    Failed(String),
}

/// Platform source of SMS-delivered one-time passcodes.
#[allow(async_fn_in_trait)]
pub trait CredentialProvider {
    /// Whether the detection capability exists at all. When false,
    /// detection cannot start and the start control stays disabled.
    fn supported(&self) -> bool {
        true
    }

    /// Whether the transport is secure. An insecure transport is an
    /// advisory only - detection still proceeds.
    fn secure_transport(&self) -> bool {
        true
    }

    /// Await the next SMS-delivered code.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::Aborted`] on cancellation, or
    /// [`CredentialError::Failed`] for any other platform failure.
    async fn request_code(&mut self) -> Result<String, CredentialError>;
}

/// A provider for platforms without the credential API (such as the CLI
/// demo). `supported()` is false and any request fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedProvider;

impl CredentialProvider for UnsupportedProvider {
    fn supported(&self) -> bool {
        false
    }

    async fn request_code(&mut self) -> Result<String, CredentialError> {
        Err(CredentialError::Failed(
            "credential API is not available".to_owned(),
        ))
    }
}

/// A scripted provider that replays queued responses in order.
///
/// Intended for tests and demos. An exhausted queue aborts, which ends a
/// detection loop cleanly.
#[derive(Debug, Default)]
pub struct QueueProvider {
    responses: VecDeque<Result<String, CredentialError>>,
    secure: bool,
}

impl QueueProvider {
    /// Create an empty scripted provider over a secure transport.
    #[must_use]
    pub fn new() -> Self {
        Self {
            responses: VecDeque::new(),
            secure: true,
        }
    }

    /// Queue a successful response.
    #[must_use]
    pub fn code(mut self, code: &str) -> Self {
        self.responses.push_back(Ok(code.to_owned()));
        self
    }

    /// Queue a failure.
    #[must_use]
    pub fn failure(mut self, message: &str) -> Self {
        self.responses
            .push_back(Err(CredentialError::Failed(message.to_owned())));
        self
    }

    /// Queue a cancellation.
    #[must_use]
    pub fn aborted(mut self) -> Self {
        self.responses.push_back(Err(CredentialError::Aborted));
        self
    }

    /// Mark the transport as insecure.
    #[must_use]
    pub const fn insecure(mut self) -> Self {
        self.secure = false;
        self
    }

    /// Responses not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.responses.len()
    }
}

impl CredentialProvider for QueueProvider {
    fn secure_transport(&self) -> bool {
        self.secure
    }

    async fn request_code(&mut self) -> Result<String, CredentialError> {
        self.responses
            .pop_front()
            .unwrap_or(Err(CredentialError::Aborted))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_queue_provider_replays_in_order() {
        let mut provider = QueueProvider::new().failure("temporary").code("1234");

        assert_eq!(
            provider.request_code().await,
            Err(CredentialError::Failed("temporary".to_owned()))
        );
        assert_eq!(provider.request_code().await, Ok("1234".to_owned()));
        assert_eq!(
            provider.request_code().await,
            Err(CredentialError::Aborted)
        );
    }

    #[tokio::test]
    async fn test_unsupported_provider() {
        let mut provider = UnsupportedProvider;
        assert!(!provider.supported());
        assert!(matches!(
            provider.request_code().await,
            Err(CredentialError::Failed(_))
        ));
    }
}
