use std::path::PathBuf;

use thiserror::Error;

/// Errors from the contact form relay.
///
/// The UI surfaces all of these as the same generic error status; the
/// distinction exists for logging.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Relay answered with a non-2xx status.
    #[error("Form relay returned status {status}")]
    RelayStatus { status: u16 },

    /// Transport-level failure (DNS, connect, TLS, body read).
    #[error("Failed to reach form relay: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Errors from the persisted signup store.
///
/// Read-side corruption is not an error: unparseable stored data is
/// treated as an empty list.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to write signup store '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode signup records: {0}")]
    Encode(#[from] serde_json::Error),
}
