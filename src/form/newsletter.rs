//! Newsletter signup persisted to a local JSON list.
//!
//! The store is a single file holding an ordered JSON array of signup
//! records. Reads default to an empty list when the file is missing or
//! unparseable; the read-modify-write is synchronous and last-write-wins
//! against concurrent writers (acceptable: the store is single-user
//! local state, not a shared resource).

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{APP_DIR, SIGNUP_STORE_FILE};
use crate::form::error::StoreError;
use crate::form::state::{FormStatus, NewsletterFormState};
use crate::form::validate::validate_newsletter;

/// One persisted signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRecord {
    pub email: String,
    /// Signup time, serialized as an ISO-8601 timestamp string.
    pub ts: DateTime<Utc>,
}

pub struct SignupStore {
    path: PathBuf,
}

impl SignupStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store under the platform data directory,
    /// e.g. `~/.local/share/pentangelen/thr_newsletter_signups.json`.
    /// Falls back to the current directory if the data dir is
    /// unavailable.
    pub fn open_default() -> Self {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(data_dir.join(APP_DIR).join(SIGNUP_STORE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored list. A missing file or corrupt contents read as
    /// an empty list rather than an error.
    pub fn load(&self) -> Vec<SignupRecord> {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        serde_json::from_str(&content).unwrap_or_else(|err| {
            tracing::warn!(path = %self.path.display(), error = %err,
                "signup store unparseable, treating as empty");
            Vec::new()
        })
    }

    /// Append one signup: read the existing list, push, write back.
    pub fn append(&self, email: &str) -> Result<(), StoreError> {
        let mut records = self.load();
        records.push(SignupRecord {
            email: email.to_string(),
            ts: Utc::now(),
        });
        let encoded = serde_json::to_string(&records)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        fs::write(&self.path, encoded).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// Run one newsletter submission against a store.
///
/// Invalid input sets `Err` with no store access. On append success the
/// email and consent are cleared; on store failure the input is kept.
pub fn submit_newsletter(form: &mut NewsletterFormState, store: &SignupStore) {
    if let Err(reasons) = validate_newsletter(form) {
        tracing::debug!(?reasons, "newsletter signup rejected by validator");
        form.status = FormStatus::Err;
        return;
    }
    form.status = FormStatus::Sending;
    match store.append(&form.email) {
        Ok(()) => {
            tracing::info!("newsletter signup stored");
            form.clear_fields();
            form.status = FormStatus::Ok;
        }
        Err(err) => {
            tracing::warn!(error = %err, "newsletter signup failed");
            form.status = FormStatus::Err;
        }
    }
}
