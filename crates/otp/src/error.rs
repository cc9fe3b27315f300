//! OTP controller error types.
//!
//! All of these surface as transient status text; none are fatal.

use thiserror::Error;

use mainmarket_core::{OtpCodeError, StorageError};

/// Application-level error type for the OTP controller.
#[derive(Debug, Error)]
pub enum OtpError {
    /// The manual input field was empty.
    #[error("Please enter an OTP code")]
    EmptyInput,

    /// The code does not match the 4-6 digit pattern.
    #[error(transparent)]
    InvalidCode(#[from] OtpCodeError),

    /// The platform credential API is unavailable.
    #[error("OTP detection is not supported on this platform")]
    Unsupported,

    /// Key-value storage failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Template rendering failed.
    #[error("template error: {0}")]
    Render(#[from] askama::Error),
}

/// Result type alias for `OtpError`.
pub type Result<T> = std::result::Result<T, OtpError>;
