//! OTP page commands.

use std::fmt::Write as _;

use mainmarket_otp::{OtpController, RetryPolicy, UnsupportedProvider};

use crate::store::JsonFileStore;

type CommandResult = Result<String, Box<dyn std::error::Error>>;

type CliController = OtpController<UnsupportedProvider, JsonFileStore>;

fn controller(store: JsonFileStore) -> Result<CliController, Box<dyn std::error::Error>> {
    // The CLI has no credential API; manual entry and the test generator
    // are the demo paths.
    Ok(OtpController::new(
        UnsupportedProvider,
        store,
        RetryPolicy::default(),
    )?)
}

/// Submit a manually entered code.
///
/// # Errors
///
/// Returns an error for an empty or non-4-6-digit code; the status line is
/// still printed by the caller via the error message.
pub fn submit(store: JsonFileStore, code: &str) -> CommandResult {
    let mut otp = controller(store)?;
    otp.handle_manual(code)?;

    let mut out = otp.status().message.clone();
    let _ = write!(out, "\n{}", otp.render_history()?);
    Ok(out)
}

/// Run the synthetic test path.
///
/// # Errors
///
/// Returns an error if the history cannot be persisted.
pub async fn simulate(store: JsonFileStore) -> CommandResult {
    let mut otp = controller(store)?;
    let code = otp.simulate().await?;

    let mut out = format!("{}\ncode: {}", otp.status().message, code);
    let _ = write!(out, "\n{}", otp.render_history()?);
    Ok(out)
}

/// Render the persisted history.
///
/// # Errors
///
/// Returns an error if the store or template fails.
pub fn history(store: JsonFileStore) -> CommandResult {
    let otp = controller(store)?;
    Ok(otp.render_history()?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn data_dir() -> std::path::PathBuf {
        tempfile::tempdir().unwrap().keep()
    }

    #[test]
    fn test_submit_persists_across_invocations() {
        let dir = data_dir();

        let out = submit(JsonFileStore::open(&dir).unwrap(), "1234").unwrap();
        assert!(out.contains("OTP detected via manual input"));
        assert!(out.contains("1234"));

        // A fresh invocation sees the persisted record.
        let listed = history(JsonFileStore::open(&dir).unwrap()).unwrap();
        assert!(listed.contains("1234"));
        assert!(listed.contains("manual input"));
    }

    #[test]
    fn test_submit_rejects_bad_code() {
        let dir = data_dir();
        assert!(submit(JsonFileStore::open(&dir).unwrap(), "12").is_err());

        let listed = history(JsonFileStore::open(&dir).unwrap()).unwrap();
        assert!(listed.contains("No codes detected yet"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulate_records_a_test_code() {
        let dir = data_dir();
        let out = simulate(JsonFileStore::open(&dir).unwrap()).await.unwrap();
        assert!(out.contains("OTP detected via test generator"));
    }
}
