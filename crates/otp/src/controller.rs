//! The OTP page controller.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use rand::Rng;
use tokio::time::{Instant, sleep};

use mainmarket_core::{KvStore, OtpCode};

use crate::error::{OtpError, Result};
use crate::history::{OtpHistory, OtpRecord, OtpSource};
use crate::provider::{CredentialError, CredentialProvider};
use crate::retry::RetryPolicy;
use crate::views;

/// How long the celebratory highlight runs after a detection.
pub const CELEBRATION_FOR: Duration = Duration::from_secs(3);

/// Delay between pressing "test" and the synthetic code arriving.
const SIMULATE_DELAY: Duration = Duration::from_secs(1);

/// Advisory shown when the transport is not secure.
pub const INSECURE_TRANSPORT_ADVISORY: &str =
    "OTP auto-detection requires a secure connection; manual entry still works";

/// Severity of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// The single status line under the code display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

/// Enablement of the start/stop buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OtpControls {
    pub start_enabled: bool,
    pub stop_enabled: bool,
}

/// Cheap handle that requests a stop from outside the detection loop.
///
/// The flag is only observed after the in-flight credential request
/// resolves, so at most one more attempt may complete after a stop.
#[derive(Debug, Clone)]
pub struct StopHandle {
    listening: Arc<AtomicBool>,
}

impl StopHandle {
    /// Request that the detection loop end instead of retrying.
    pub fn request_stop(&self) {
        self.listening.store(false, Ordering::SeqCst);
    }

    /// Whether the controller still considers itself listening.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening.load(Ordering::SeqCst)
    }
}

/// The OTP detection page controller.
///
/// Owns the bounded history, the listening flag and the status/code display
/// state. All three entry paths (automatic, manual, test) funnel through
/// [`Self::handle_detected`].
pub struct OtpController<P: CredentialProvider, S: KvStore> {
    provider: P,
    store: S,
    policy: RetryPolicy,
    listening: Arc<AtomicBool>,
    history: OtpHistory,
    status: Status,
    advisory: Option<&'static str>,
    current_code: Option<OtpCode>,
    celebration_until: Option<Instant>,
}

impl<P: CredentialProvider, S: KvStore> OtpController<P, S> {
    /// Create a controller, restoring persisted history from the store.
    ///
    /// A missing capability is reported once here and keeps the start
    /// control disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn new(provider: P, store: S, policy: RetryPolicy) -> Result<Self> {
        let history = OtpHistory::load(&store)?;
        let status = if provider.supported() {
            Status {
                kind: StatusKind::Info,
                message: "Ready to detect OTP".to_owned(),
            }
        } else {
            Status {
                kind: StatusKind::Error,
                message: OtpError::Unsupported.to_string(),
            }
        };

        Ok(Self {
            provider,
            store,
            policy,
            listening: Arc::new(AtomicBool::new(false)),
            history,
            status,
            advisory: None,
            current_code: None,
            celebration_until: None,
        })
    }

    // =========================================================================
    // Detection loop
    // =========================================================================

    /// Enter `Listening` and drive the credential request/retry loop.
    ///
    /// Runs until a code is delivered, the request is cancelled, a stop is
    /// observed, or a bounded policy runs out of retries. The returned
    /// future resolves when the loop ends; pair it with [`Self::stop_handle`]
    /// to request cancellation while it is pending.
    ///
    /// # Errors
    ///
    /// Returns [`OtpError::Unsupported`] when the credential API is absent;
    /// the controller stays `Idle` in that case.
    pub async fn start_detection(&mut self) -> Result<()> {
        if !self.provider.supported() {
            self.set_status(StatusKind::Error, OtpError::Unsupported.to_string());
            return Err(OtpError::Unsupported);
        }

        self.advisory = if self.provider.secure_transport() {
            None
        } else {
            tracing::warn!("insecure transport, OTP auto-detection may be unavailable");
            Some(INSECURE_TRANSPORT_ADVISORY)
        };

        self.listening.store(true, Ordering::SeqCst);
        self.set_status(StatusKind::Info, "Listening for OTP...".to_owned());

        let mut retries = 0u32;
        loop {
            let failure = match self.provider.request_code().await {
                Ok(code) if !code.trim().is_empty() => {
                    // One delivery ends the chain whether or not the code
                    // validates; an invalid code was already reported with
                    // no state change.
                    let _ = self.handle_detected(code.trim(), OtpSource::Automatic);
                    break;
                }
                Ok(_) => "OTP request returned an empty code".to_owned(),
                Err(CredentialError::Aborted) => {
                    // Cancellation is not reported and never retried.
                    tracing::debug!("OTP request aborted");
                    break;
                }
                Err(CredentialError::Failed(message)) => {
                    format!("OTP detection failed: {message}")
                }
            };

            self.set_status(StatusKind::Error, failure);

            if !self.policy.allows_retry(retries) {
                self.listening.store(false, Ordering::SeqCst);
                self.set_status(
                    StatusKind::Error,
                    format!("OTP detection gave up after {retries} retries"),
                );
                break;
            }
            retries += 1;

            // The stop flag is only consulted here, between attempts.
            if !self.is_listening() {
                break;
            }
            sleep(self.policy.delay).await;
            if !self.is_listening() {
                break;
            }
            self.set_status(StatusKind::Info, "Listening for OTP...".to_owned());
        }

        Ok(())
    }

    /// Leave `Listening`: clear the flag and report a stopped status.
    pub fn stop_detection(&mut self) {
        self.listening.store(false, Ordering::SeqCst);
        self.set_status(StatusKind::Info, "OTP detection stopped".to_owned());
    }

    /// Handle for requesting a stop while `start_detection` is pending.
    #[must_use]
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            listening: Arc::clone(&self.listening),
        }
    }

    // =========================================================================
    // Shared detection pipeline
    // =========================================================================

    /// Validate a code and record it.
    ///
    /// On success the record is prepended to the history (truncated to the
    /// cap and persisted), the code display and celebration start, and the
    /// status names the source. An automatic detection then stops the
    /// listening loop. An invalid code is reported and changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the code fails the 4-6 digit pattern or the
    /// history cannot be persisted.
    pub fn handle_detected(&mut self, raw: &str, source: OtpSource) -> Result<OtpCode> {
        let code = match OtpCode::parse(raw) {
            Ok(code) => code,
            Err(err) => {
                self.set_status(StatusKind::Error, err.to_string());
                return Err(err.into());
            }
        };

        self.history.record(OtpRecord::captured_now(code.clone(), source));
        self.history.persist(&mut self.store)?;

        self.current_code = Some(code.clone());
        self.celebration_until = Some(Instant::now() + CELEBRATION_FOR);
        self.set_status(
            StatusKind::Success,
            format!("OTP detected via {}", source.label()),
        );
        tracing::info!(source = %source, "OTP recorded");

        if source == OtpSource::Automatic {
            self.stop_detection();
        }
        Ok(code)
    }

    /// Manual entry path.
    ///
    /// The page clears its input field only when this returns `Ok`; a
    /// rejected code leaves the field as typed.
    ///
    /// # Errors
    ///
    /// Returns [`OtpError::EmptyInput`] for a blank field, otherwise
    /// whatever [`Self::handle_detected`] returns.
    pub fn handle_manual(&mut self, input: &str) -> Result<OtpCode> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            self.set_status(StatusKind::Error, OtpError::EmptyInput.to_string());
            return Err(OtpError::EmptyInput);
        }
        self.handle_detected(trimmed, OtpSource::Manual)
    }

    /// Synthetic test path: a random 4-digit code fed through the shared
    /// pipeline after a short delay.
    ///
    /// # Errors
    ///
    /// Returns an error only if the history cannot be persisted; the
    /// generated code always validates.
    pub async fn simulate(&mut self) -> Result<OtpCode> {
        let code = generate_test_code();
        self.set_status(StatusKind::Info, "Testing OTP detection...".to_owned());
        sleep(SIMULATE_DELAY).await;
        self.handle_detected(&code, OtpSource::Test)
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Whether the controller is in the `Listening` state.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening.load(Ordering::SeqCst)
    }

    /// The status line.
    #[must_use]
    pub const fn status(&self) -> &Status {
        &self.status
    }

    /// Transport advisory from the last start, if any.
    #[must_use]
    pub const fn advisory(&self) -> Option<&'static str> {
        self.advisory
    }

    /// Start/stop button enablement.
    #[must_use]
    pub fn controls(&self) -> OtpControls {
        OtpControls {
            start_enabled: self.provider.supported() && !self.is_listening(),
            stop_enabled: self.is_listening(),
        }
    }

    /// The most recently detected code, for the big display.
    #[must_use]
    pub const fn current_code(&self) -> Option<&OtpCode> {
        self.current_code.as_ref()
    }

    /// Whether the celebratory highlight is still running at `now`.
    #[must_use]
    pub fn celebrating(&self, now: Instant) -> bool {
        self.celebration_until.is_some_and(|until| now < until)
    }

    /// The bounded history, newest first.
    #[must_use]
    pub const fn history(&self) -> &OtpHistory {
        &self.history
    }

    /// Render the recent-history list.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_history(&self) -> Result<String> {
        views::render_history(&self.history).map_err(Into::into)
    }

    /// The underlying store (primarily for tests and the CLI demo).
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn set_status(&mut self, kind: StatusKind, message: String) {
        tracing::debug!(?kind, %message, "status");
        self.status = Status { kind, message };
    }
}

/// Strip everything but ASCII digits, mirroring the manual field's
/// keypress restriction.
#[must_use]
pub fn sanitize_numeric(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// A 4-digit pseudo-random test code, zero-padded.
fn generate_test_code() -> String {
    format!("{:04}", rand::rng().random_range(0..10_000))
}
