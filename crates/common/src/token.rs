//! Persistent bearer-token storage.
//!
//! Stands in for the browser's local storage: one token under one fixed
//! path, read on every request, cleared on an authorization failure. Reads
//! go through an `ArcSwap` cache so the request path never touches the
//! filesystem.

use std::path::PathBuf;
use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::debug;

pub struct TokenStore {
    cached: ArcSwap<Option<String>>,
    path: Option<PathBuf>,
}

impl TokenStore {
    /// Open a store backed by `path`, loading any persisted token.
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let token = match std::fs::read_to_string(&path) {
            Ok(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(anyhow::anyhow!("cannot read {}: {e}", path.display())),
        };
        debug!(path = %path.display(), present = token.is_some(), "token store opened");
        Ok(Self { cached: ArcSwap::from_pointee(token), path: Some(path) })
    }

    /// Store without a backing file; tokens live for the process only.
    pub fn in_memory() -> Self {
        Self { cached: ArcSwap::from_pointee(None), path: None }
    }

    /// Current token, if any. Absence is not an error.
    pub fn get(&self) -> Option<String> {
        self.cached.load().as_ref().clone()
    }

    /// Replace the token and persist it.
    pub fn set(&self, token: impl Into<String>) -> anyhow::Result<()> {
        let token = token.into();
        if let Some(path) = &self.path {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &token)?;
        }
        self.cached.store(Arc::new(Some(token)));
        Ok(())
    }

    /// Drop the token from cache and disk. Idempotent.
    pub fn clear(&self) -> anyhow::Result<()> {
        self.cached.store(Arc::new(None));
        if let Some(path) = &self.path {
            match std::fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}
