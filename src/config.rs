//! Store configuration

use std::path::PathBuf;

/// Where a store keeps its key metadata and its value data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// Create a uniquely named temporary directory, i.e. data is volatile!
    /// The directory is removed when the store closes.
    Ephemeral,

    /// One directory for both key metadata and value data.
    Single(PathBuf),

    /// Separate key-metadata and value-data directories. Identical paths
    /// collapse to the single-directory case.
    Split { keys: PathBuf, values: PathBuf },
}

/// Configuration for a [`Store`](crate::Store)
#[derive(Clone)]
pub struct StoreConfig {
    /// Directory layout
    pub layout: Layout,

    /// Block cache size for the engine (in bytes)
    pub block_cache_size: u64,

    /// Compression type for stored values
    pub compression: fjall::CompressionType,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            layout: Layout::Ephemeral,
            block_cache_size: 64 * 1024 * 1024, // 64 MB
            compression: fjall::CompressionType::Lz4,
        }
    }
}

impl StoreConfig {
    /// Create a new config rooted at a single directory
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            layout: Layout::Single(path.into()),
            ..Default::default()
        }
    }

    /// Create a new config with separate key-metadata and value-data
    /// directories
    pub fn split(keys: impl Into<PathBuf>, values: impl Into<PathBuf>) -> Self {
        Self {
            layout: Layout::Split {
                keys: keys.into(),
                values: values.into(),
            },
            ..Default::default()
        }
    }

    /// Set block cache size
    pub fn with_block_cache_size(mut self, size: u64) -> Self {
        self.block_cache_size = size;
        self
    }

    /// Set compression type
    pub fn with_compression(mut self, compression: fjall::CompressionType) -> Self {
        self.compression = compression;
        self
    }
}
