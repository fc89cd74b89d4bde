//! Internal adapter over fjall keyspaces and partitions
//!
//! Translates the consumed engine interface (open, get, set, exists,
//! touch, flush) onto fjall calls. The adapter owns one keyspace per
//! configured directory: colocated layouts hold both partitions in a
//! single keyspace, while a split layout keeps presence markers in the
//! key-metadata directory and payloads in the value-data directory.

use std::path::{Path, PathBuf};

use fjall::{Keyspace, Partition, PartitionCreateOptions, PersistMode};

use crate::config::StoreConfig;
use crate::error::{Error, Result};

/// Partition holding get/set payloads
const DATA_PARTITION: &str = "data";

/// Partition holding hashed-presence markers
const PRESENCE_PARTITION: &str = "presence";

pub(crate) struct Engine {
    /// Keyspace rooted at the value-data directory
    keyspace: Keyspace,

    /// Separate keyspace for the key-metadata directory, present only
    /// when the layout splits the two directories
    presence_keyspace: Option<Keyspace>,

    data: Partition,
    presence: Partition,

    keys_dir: PathBuf,
    values_dir: PathBuf,
}

impl Engine {
    pub(crate) fn open(
        keys_dir: PathBuf,
        values_dir: PathBuf,
        config: &StoreConfig,
    ) -> Result<Self> {
        create_dir(&keys_dir)?;
        if values_dir != keys_dir {
            create_dir(&values_dir)?;
        }

        let keyspace = open_keyspace(&values_dir, config)?;

        // Payloads take the configured compression; presence markers are
        // empty, so their partition stays uncompressed with small blocks.
        let data = keyspace
            .open_partition(
                DATA_PARTITION,
                PartitionCreateOptions::default()
                    .block_size(64 * 1024)
                    .compression(config.compression),
            )
            .map_err(|source| Error::Open {
                path: values_dir.clone(),
                source,
            })?;

        let presence_options = PartitionCreateOptions::default()
            .block_size(16 * 1024)
            .compression(fjall::CompressionType::None);

        let (presence_keyspace, presence) = if keys_dir == values_dir {
            let presence = keyspace
                .open_partition(PRESENCE_PARTITION, presence_options)
                .map_err(|source| Error::Open {
                    path: keys_dir.clone(),
                    source,
                })?;
            (None, presence)
        } else {
            let keys_keyspace = open_keyspace(&keys_dir, config)?;
            let presence = keys_keyspace
                .open_partition(PRESENCE_PARTITION, presence_options)
                .map_err(|source| Error::Open {
                    path: keys_dir.clone(),
                    source,
                })?;
            (Some(keys_keyspace), presence)
        };

        Ok(Self {
            keyspace,
            presence_keyspace,
            data,
            presence,
            keys_dir,
            values_dir,
        })
    }

    pub(crate) fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        Ok(self.data.get(key)?.map(|slice| slice.to_vec()))
    }

    pub(crate) fn set(&self, key: &[u8], value: &[u8]) -> Result<()> {
        self.data.insert(key, value)?;
        Ok(())
    }

    /// Whether any entry exists under `key` - a presence marker or a
    /// payload written directly under the same key
    pub(crate) fn exists(&self, key: &[u8]) -> Result<bool> {
        if self.presence.get(key)?.is_some() {
            return Ok(true);
        }
        Ok(self.data.get(key)?.is_some())
    }

    /// Create an empty marker under `key` if no entry exists yet
    pub(crate) fn touch(&self, key: &[u8]) -> Result<()> {
        if !self.exists(key)? {
            self.presence.insert(key, b"")?;
        }
        Ok(())
    }

    /// Flush buffered writes to durable storage
    pub(crate) fn flush(&self) -> std::result::Result<(), fjall::Error> {
        self.keyspace.persist(PersistMode::SyncAll)?;
        if let Some(keys_keyspace) = &self.presence_keyspace {
            keys_keyspace.persist(PersistMode::SyncAll)?;
        }
        Ok(())
    }

    pub(crate) fn keys_dir(&self) -> &Path {
        &self.keys_dir
    }

    pub(crate) fn values_dir(&self) -> &Path {
        &self.values_dir
    }
}

fn create_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|source| Error::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

fn open_keyspace(path: &Path, config: &StoreConfig) -> Result<Keyspace> {
    fjall::Config::new(path)
        .cache_size(config.block_cache_size)
        .open()
        .map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })
}
