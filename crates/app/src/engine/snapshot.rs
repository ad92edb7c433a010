//! Cart snapshot persistence
//!
//! The full [`CartState`] is written as one JSON document after every
//! mutation. Writes land in a sibling temp file and are renamed into place,
//! so a reader never observes a half-written snapshot. Concurrent writers
//! race last-write-wins; that is accepted.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use tablebill::cart::CartState;

/// Errors from snapshot writes. Reads never fail; they degrade to empty.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to serialize cart snapshot")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write cart snapshot to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Durable storage for the cart, bound to a single well-known path.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Binds the store to a snapshot path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The bound snapshot path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the last snapshot. A missing file, the literal string
    /// `undefined`, and unparseable JSON all degrade to the empty cart.
    pub async fn load(&self) -> CartState {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(error) => {
                if error.kind() != std::io::ErrorKind::NotFound {
                    warn!("could not read cart snapshot: {error}");
                }

                return CartState::new();
            }
        };

        parse_snapshot(&raw)
    }

    /// Persists the full state atomically.
    ///
    /// # Errors
    ///
    /// Returns a [`SnapshotError`] when serialization or the write fails.
    pub async fn save(&self, state: &CartState) -> Result<(), SnapshotError> {
        let json = serde_json::to_string(state).map_err(SnapshotError::Serialize)?;

        let staging = self.path.with_extension("tmp");

        tokio::fs::write(&staging, &json)
            .await
            .map_err(|source| SnapshotError::Write {
                path: staging.clone(),
                source,
            })?;

        tokio::fs::rename(&staging, &self.path)
            .await
            .map_err(|source| SnapshotError::Write {
                path: self.path.clone(),
                source,
            })?;

        Ok(())
    }
}

fn parse_snapshot(raw: &str) -> CartState {
    // Browsers persisted the string "undefined" for a never-written cart.
    if raw == "undefined" {
        return CartState::new();
    }

    serde_json::from_str(raw).unwrap_or_else(|error| {
        warn!("discarding unreadable cart snapshot: {error}");

        CartState::new()
    })
}
