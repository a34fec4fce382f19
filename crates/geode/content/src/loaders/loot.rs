//! Loot table loader.

use std::collections::HashMap;
use std::path::Path;

use geode_core::GeodeKind;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::oracle::{LootEntry, LootTable, PcgTreasureOracle};

/// Loot table file structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LootCatalog {
    pub tables: Vec<LootTableSpec>,
}

/// One geode kind's loot table as it appears in data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LootTableSpec {
    pub kind: GeodeKind,
    pub entries: Vec<LootEntry>,
}

/// Loader for per-kind loot tables from RON files.
pub struct LootTableLoader;

impl LootTableLoader {
    /// Load loot tables from a RON file.
    ///
    /// Example:
    /// ```ron
    /// (
    ///     tables: [
    ///         (kind: 535, entries: [
    ///             (item: 390, max_stack: 20),
    ///             (item: 72, max_stack: 1),
    ///         ]),
    ///     ],
    /// )
    /// ```
    ///
    /// A kind listed twice keeps its last table.
    pub fn load(path: &Path) -> LoadResult<HashMap<GeodeKind, LootTable>> {
        let content = read_file(path)?;
        let catalog: LootCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse loot table RON at {:?}: {}", path, e))?;

        let mut tables = HashMap::with_capacity(catalog.tables.len());
        for spec in catalog.tables {
            tables.insert(spec.kind, LootTable::new(spec.entries));
        }
        Ok(tables)
    }

    /// Load loot tables straight into a treasure oracle seeded with
    /// `game_seed`.
    pub fn load_oracle(path: &Path, game_seed: u64) -> LoadResult<PcgTreasureOracle> {
        Ok(PcgTreasureOracle::with_tables(game_seed, Self::load(path)?))
    }
}
