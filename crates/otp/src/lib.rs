//! MainMarket OTP - one-time-passcode detection controller.
//!
//! Headless rendition of the OTP auto-detection demo page. The platform
//! credential API becomes the [`CredentialProvider`] trait, browser local
//! storage becomes the [`KvStore`] seam, and the retry-via-self-rescheduling
//! loop becomes an explicit [`RetryPolicy`] driven by `tokio::time`, so
//! tests simulate time instead of waiting.
//!
//! # State machine
//!
//! The controller is either `Idle` or `Listening`. `start_detection` enters
//! `Listening` (capability-gated) and awaits the provider; a valid detected
//! code records itself and stops detection, a non-abort failure reports and
//! retries after the policy delay, and an abort - or a stop requested
//! through [`StopHandle`] - ends the loop without retry. Stop cannot abort
//! an in-flight request: the flag is only checked once the attempt
//! resolves, so at most one more attempt may complete after stop.
//!
//! Detected codes land in a bounded, newest-first [`OtpHistory`] (at most
//! 10 records) that is persisted after every insertion.
//!
//! [`KvStore`]: mainmarket_core::KvStore

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod controller;
pub mod error;
pub mod history;
pub mod provider;
pub mod retry;
pub mod views;

pub use controller::{OtpController, OtpControls, Status, StatusKind, StopHandle};
pub use error::OtpError;
pub use history::{HISTORY_LIMIT, OtpHistory, OtpRecord, OtpSource};
pub use provider::{CredentialError, CredentialProvider, QueueProvider, UnsupportedProvider};
pub use retry::RetryPolicy;
