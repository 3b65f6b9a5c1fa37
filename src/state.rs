//! Persisted wallet store: one JSON document rewritten wholesale on commit.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

use crate::types::Holding;

/// The single persisted document: holdings, objectives and the lock flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WalletStore {
    /// All confirmed positions, in insertion order.
    pub coins: Vec<Holding>,
    /// Objective label -> target amount (USD).
    pub objectives: BTreeMap<String, f64>,
    /// Once true, no further holdings or objectives may be added.
    /// Enforced by the session layer, not here.
    pub locked: bool,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot access wallet file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("wallet file {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot encode wallet store: {0}")]
    Encode(serde_json::Error),
}

/// Owns the in-memory store and its backing file. All changes go through
/// `mutate`, all writes through `commit`, so memory and disk never drift
/// without the caller hearing about it.
pub struct Repository {
    path: PathBuf,
    store: WalletStore,
}

impl Repository {
    /// Load the store, or initialize an empty one on disk when the file is
    /// missing. A file that exists but does not parse comes back as
    /// `StoreError::Parse`; the caller decides between abort and reinit.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if !path.exists() {
            let repo = Self {
                path: path.clone(),
                store: WalletStore::default(),
            };
            repo.commit()?;
            info!(path = %path.display(), "initialized empty wallet store");
            return Ok(repo);
        }
        let s = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        let store = serde_json::from_str(&s).map_err(|source| StoreError::Parse {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, store })
    }

    pub fn store(&self) -> &WalletStore {
        &self.store
    }

    pub fn mutate(&mut self, f: impl FnOnce(&mut WalletStore)) {
        f(&mut self.store);
    }

    /// Serialize the full store to the backing file, overwriting it.
    /// Not atomic: a crash mid-write can corrupt the file.
    pub fn commit(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }
        let s = serde_json::to_string_pretty(&self.store).map_err(StoreError::Encode)?;
        fs::write(&self.path, s).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}
