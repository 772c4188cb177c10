//! Flat-file persistence for blog posts.
//!
//! The whole collection lives in one JSON array. Every write replaces the
//! file; there is no per-record storage and no index.

mod persistence;
mod posts;

pub use persistence::{BlogStore, Change, Snapshot};
pub use posts::DeletePostResult;

use crate::telemetry::error_chain_fmt;
use std::path::PathBuf;

/// What a read does when the posts file cannot be read or parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Log the failure and hand back an empty, degraded snapshot.
    #[default]
    BestEffort,
    /// Return the error to the caller.
    FailLoudly,
}

#[derive(thiserror::Error)]
pub enum StoreError {
    #[error("Failed to access the blog posts file at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("The blog posts file at {} is not a valid post array", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to serialize blog posts")]
    Serialize(#[source] serde_json::Error),
    #[error("The blog store lock was poisoned by a panicking writer")]
    Poisoned,
}

impl std::fmt::Debug for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
