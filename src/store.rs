//! The store facade
//!
//! A [`Store`] owns an opened engine plus, for ephemeral layouts, the
//! temporary directory backing it. Closing flushes the engine and then
//! removes the temporary directory; the directory is kept on disk
//! whenever the flush itself failed.

use std::path::Path;

use tempfile::TempDir;

use crate::config::{Layout, StoreConfig};
use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::hash;

/// A key-value store backed by an embedded engine.
///
/// Callers should [`close`](Store::close) the store when done and check
/// the returned error: buffered data is flushed on close. Dropping an
/// unclosed store flushes best-effort and removes an ephemeral directory
/// only if that flush succeeded.
pub struct Store {
    engine: Engine,
    // Set only when open created the directory; ownership means we remove
    // it on close.
    temp: Option<TempDir>,
}

impl Store {
    /// Open a store as described by `config`.
    ///
    /// A [`Layout::Ephemeral`] config creates a uniquely named temporary
    /// directory and uses it for both directory roles.
    pub fn open(config: StoreConfig) -> Result<Self> {
        let (keys_dir, values_dir, temp) = match &config.layout {
            Layout::Ephemeral => {
                let dir = tempfile::Builder::new()
                    .prefix("kvstash")
                    .tempdir()
                    .map_err(Error::TempDir)?;
                tracing::info!("created ephemeral store directory {:?}", dir.path());
                let path = dir.path().to_path_buf();
                (path.clone(), path, Some(dir))
            }
            Layout::Single(path) => (path.clone(), path.clone(), None),
            Layout::Split { keys, values } => (keys.clone(), values.clone(), None),
        };

        let engine = Engine::open(keys_dir, values_dir, &config)?;
        tracing::debug!(
            "opened store (keys: {:?}, values: {:?})",
            engine.keys_dir(),
            engine.values_dir()
        );
        Ok(Self { engine, temp })
    }

    /// Close the store, flushing buffered data to durable storage.
    ///
    /// If the flush fails the error is returned immediately and an
    /// ephemeral directory is left on disk with whatever the engine
    /// managed to persist. On success, a directory created at open time
    /// is removed recursively.
    pub fn close(mut self) -> Result<()> {
        if let Err(e) = self.engine.flush() {
            // Never remove a directory the engine failed to flush.
            if let Some(dir) = self.temp.take() {
                let _ = dir.keep();
            }
            return Err(Error::Close(e));
        }

        let temp = self.temp.take();
        // Release the engine handles before removing the directory.
        drop(self);

        if let Some(dir) = temp {
            let path = dir.path().to_path_buf();
            dir.close()
                .map_err(|source| Error::Cleanup { path: path.clone(), source })?;
            tracing::info!("removed ephemeral store directory {:?}", path);
        }
        tracing::debug!("closed store");
        Ok(())
    }

    /// Store `value` under `key`, both as their UTF-8 bytes
    pub fn set_string(&self, key: &str, value: &str) -> Result<()> {
        self.engine.set(key.as_bytes(), value.as_bytes())
    }

    /// Fetch the value under `key` and decode it as UTF-8.
    ///
    /// Returns [`Error::NotFound`] when the key is absent - distinct from
    /// an empty string value.
    pub fn get_string(&self, key: &str) -> Result<String> {
        let bytes = self.get_bytes(key.as_bytes())?;
        Ok(String::from_utf8(bytes)?)
    }

    /// Store `value` under `key`, byte-exact
    pub fn set_bytes(&self, key: &[u8], value: &[u8]) -> Result<()> {
        self.engine.set(key, value)
    }

    /// Fetch the bytes under `key`, or [`Error::NotFound`] when absent
    pub fn get_bytes(&self, key: &[u8]) -> Result<Vec<u8>> {
        self.engine.get(key)?.ok_or(Error::NotFound)
    }

    /// Register presence of `input` under its digest key if not already
    /// registered. Idempotent.
    pub fn touch_hashed(&self, input: &str) -> Result<()> {
        self.engine.touch(&hash::digest(input))
    }

    /// Whether an entry exists under the digest key of `input`
    pub fn exists_hashed(&self, input: &str) -> Result<bool> {
        self.engine.exists(&hash::digest(input))
    }

    /// The key-metadata directory this store was opened with
    pub fn keys_dir(&self) -> &Path {
        self.engine.keys_dir()
    }

    /// The value-data directory this store was opened with
    pub fn values_dir(&self) -> &Path {
        self.engine.values_dir()
    }

    /// Whether this store owns a temporary directory it created at open
    pub fn is_ephemeral(&self) -> bool {
        self.temp.is_some()
    }
}

impl Drop for Store {
    fn drop(&mut self) {
        // Ensure data is persisted on drop. Never remove a directory the
        // engine failed to flush.
        if let Err(e) = self.engine.flush() {
            tracing::warn!("Failed to flush store on drop: {}", e);
            if let Some(dir) = self.temp.take() {
                let _ = dir.keep();
            }
        }
    }
}
