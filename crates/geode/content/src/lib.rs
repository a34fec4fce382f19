//! Reference collaborators and data loaders for the geode predictor.
//!
//! This crate houses concrete implementations of the `geode-core`
//! collaborator traits plus loaders for RON data files:
//! - Static object providers (in-memory geode definitions)
//! - The standard geode service (catalog derivation)
//! - A deterministic PCG-based treasure oracle with per-kind loot tables
//! - Geode catalog and loot table loaders (data-driven via RON)
//!
//! Content feeds the predictor through its trait seams and never appears
//! in prediction cache keys.
pub mod oracle;
pub mod provider;
pub mod service;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use oracle::{LootEntry, LootTable, PcgTreasureOracle};
pub use provider::StaticObjectProvider;
pub use service::StandardGeodeService;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, LootTableLoader};
