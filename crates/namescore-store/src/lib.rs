//! The single persisted "current report" and the session lifecycle around it.
//!
//! The store holds two fixed blobs under its root directory. Each save
//! overwrites both; there is no history. Writers sharing one `ReportStore`
//! (or its clones) are serialized, and every blob is written to a unique
//! temporary file before being renamed into place.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use thiserror::Error;
use uuid::Uuid;

pub const REPORT_FILE: &str = "current_report.json";
pub const QUERY_FILE: &str = "current_query.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {what}: {source}")]
    Encode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("stored blob {path} is unreadable: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("stored report digest mismatch: expected {expected}, found {actual}")]
    DigestMismatch { expected: String, actual: String },
}

/// A persisted report with the time it was saved and a digest of its JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredReport {
    pub saved_at: DateTime<Utc>,
    pub digest: String,
    pub report: Value,
}

/// SHA-256 hex digest of the compact JSON encoding of `report`.
///
/// # Errors
///
/// Returns [`StoreError::Encode`] if the value cannot be serialized.
pub fn report_digest(report: &Value) -> Result<String, StoreError> {
    let bytes = serde_json::to_vec(report).map_err(|source| StoreError::Encode {
        what: "report",
        source,
    })?;
    Ok(format!("{:x}", Sha256::digest(&bytes)))
}

#[derive(Debug, Clone)]
pub struct ReportStore {
    root: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl ReportStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn report_path(&self) -> PathBuf {
        self.root.join(REPORT_FILE)
    }

    fn query_path(&self) -> PathBuf {
        self.root.join(QUERY_FILE)
    }

    // The guarded data is `()`, so a poisoned lock carries no torn state.
    fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Check that the root directory can be listed. A root that does not
    /// exist yet is fine; it is created on the first save.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the root exists but is not a readable
    /// directory.
    pub fn check_access(&self) -> Result<(), StoreError> {
        match fs::read_dir(&self.root) {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io {
                path: self.root.clone(),
                source,
            }),
        }
    }

    /// Overwrite the current report and query. A `None` query removes any
    /// previously stored one so the pair never mixes two sessions.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory or files cannot be written,
    /// or [`StoreError::Encode`] if a value cannot be serialized.
    pub fn save(&self, report: &Value, query: Option<&Value>) -> Result<StoredReport, StoreError> {
        let _guard = self.lock_writes();
        fs::create_dir_all(&self.root).map_err(|source| StoreError::Io {
            path: self.root.clone(),
            source,
        })?;

        let stored = StoredReport {
            saved_at: Utc::now(),
            digest: report_digest(report)?,
            report: report.clone(),
        };
        let bytes = serde_json::to_vec_pretty(&stored).map_err(|source| StoreError::Encode {
            what: "stored report",
            source,
        })?;
        write_atomic(&self.report_path(), &bytes)?;

        match query {
            Some(query) => {
                let bytes =
                    serde_json::to_vec_pretty(query).map_err(|source| StoreError::Encode {
                        what: "query",
                        source,
                    })?;
                write_atomic(&self.query_path(), &bytes)?;
            }
            None => remove_if_present(&self.query_path())?,
        }

        tracing::info!(
            root = %self.root.display(),
            digest = %stored.digest,
            has_query = query.is_some(),
            "saved current report"
        );
        Ok(stored)
    }

    /// Load the current report. `Ok(None)` when nothing has been saved.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] on read failure, [`StoreError::Decode`] if
    /// the blob is not a stored report, or [`StoreError::DigestMismatch`] if
    /// the report no longer matches its recorded digest.
    pub fn load_report(&self) -> Result<Option<StoredReport>, StoreError> {
        let path = self.report_path();
        let Some(bytes) = read_if_present(&path)? else {
            return Ok(None);
        };
        let stored: StoredReport =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Decode {
                path: path.clone(),
                source,
            })?;

        let actual = report_digest(&stored.report)?;
        if actual != stored.digest {
            return Err(StoreError::DigestMismatch {
                expected: stored.digest,
                actual,
            });
        }
        Ok(Some(stored))
    }

    /// Load the query that produced the current report, if one was saved.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] on read failure or [`StoreError::Decode`]
    /// if the blob is not JSON.
    pub fn load_query(&self) -> Result<Option<Value>, StoreError> {
        let path = self.query_path();
        let Some(bytes) = read_if_present(&path)? else {
            return Ok(None);
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| StoreError::Decode { path, source })
    }

    /// Remove both blobs. Clearing an empty store is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if a file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.lock_writes();
        remove_if_present(&self.report_path())?;
        remove_if_present(&self.query_path())?;
        tracing::info!(root = %self.root.display(), "cleared current report");
        Ok(())
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let tmp = path.with_extension(format!("json.{}.tmp", Uuid::new_v4().simple()));
    fs::write(&tmp, bytes).map_err(|source| StoreError::Io {
        path: tmp.clone(),
        source,
    })?;
    fs::rename(&tmp, path).map_err(|source| {
        let _ = fs::remove_file(&tmp);
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn read_if_present(path: &Path) -> Result<Option<Vec<u8>>, StoreError> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn remove_if_present(path: &Path) -> Result<(), StoreError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(source) => Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

// ---------------------------------------------------------------------------
// Session lifecycle
// ---------------------------------------------------------------------------

/// Where the report for the current view came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportSession {
    /// Handed over by navigation and written to the store.
    Navigation(StoredReport),
    /// Recovered from the store.
    Cache(StoredReport),
    /// Nothing usable; terminal.
    Expired,
}

impl ReportSession {
    /// Resolve the session for a page load.
    ///
    /// A navigation payload always wins and is persisted once. Without one the
    /// cached report is used; a missing or unreadable cache is `Expired`.
    ///
    /// # Errors
    ///
    /// Only persisting a navigation payload can fail. Cache read failures are
    /// logged and reported as [`ReportSession::Expired`].
    pub fn resolve(
        navigation: Option<Value>,
        query: Option<Value>,
        store: &ReportStore,
    ) -> Result<Self, StoreError> {
        if let Some(report) = navigation {
            let stored = store.save(&report, query.as_ref())?;
            return Ok(Self::Navigation(stored));
        }

        match store.load_report() {
            Ok(Some(stored)) => Ok(Self::Cache(stored)),
            Ok(None) => {
                tracing::debug!(root = %store.root().display(), "no cached report");
                Ok(Self::Expired)
            }
            Err(e) => {
                tracing::warn!(error = %e, "cached report unreadable; session expired");
                Ok(Self::Expired)
            }
        }
    }

    #[must_use]
    pub fn report(&self) -> Option<&StoredReport> {
        match self {
            Self::Navigation(stored) | Self::Cache(stored) => Some(stored),
            Self::Expired => None,
        }
    }

    #[must_use]
    pub fn into_report(self) -> Option<StoredReport> {
        match self {
            Self::Navigation(stored) | Self::Cache(stored) => Some(stored),
            Self::Expired => None,
        }
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        matches!(self, Self::Expired)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn digest_is_sha256_hex_of_compact_json() {
        let digest = report_digest(&json!({})).unwrap();
        // sha256("{}")
        assert_eq!(
            digest,
            "44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a"
        );
    }

    #[test]
    fn digest_ignores_key_insertion_order() {
        let a: Value = serde_json::from_str(r#"{"a":1,"b":2}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"b":2,"a":1}"#).unwrap();
        assert_eq!(report_digest(&a).unwrap(), report_digest(&b).unwrap());
    }

    #[test]
    fn session_accessors() {
        assert!(ReportSession::Expired.is_expired());
        assert!(ReportSession::Expired.report().is_none());
        let stored = StoredReport {
            saved_at: Utc::now(),
            digest: String::new(),
            report: json!({}),
        };
        let session = ReportSession::Cache(stored.clone());
        assert!(!session.is_expired());
        assert_eq!(session.into_report(), Some(stored));
    }
}
