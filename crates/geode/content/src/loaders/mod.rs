//! Content loaders for reading predictor data from files.
//!
//! This module provides loaders that convert RON files into predictor
//! collaborators: geode catalogs become object providers and loot tables
//! become treasure oracles.

pub mod catalog;
pub mod loot;

pub use catalog::CatalogLoader;
pub use loot::LootTableLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
