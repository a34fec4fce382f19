//! Deterministic PCG-based treasure oracle.
//!
//! Treasures are drawn with PCG-XSH-RR seeded from the base game seed,
//! the context's geode count, the geode kind, and a per-roll context
//! value. The same probe always yields the same treasure, which is what
//! makes the predictor's memoization sound.

use std::collections::HashMap;

use geode_core::{
    GameContext, GeodeKind, ItemHandle, OracleError, Treasure, TreasureOracle,
};

/// One possible drop from a loot table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootEntry {
    pub item: ItemHandle,
    /// Largest stack this entry can roll; stacks roll in `1..=max_stack`.
    pub max_stack: u16,
}

impl LootEntry {
    pub fn new(item: ItemHandle, max_stack: u16) -> Self {
        Self { item, max_stack }
    }

    /// Single guaranteed drop.
    pub fn single(item: ItemHandle) -> Self {
        Self::new(item, 1)
    }
}

/// Ordered loot entries for a single geode kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootTable {
    entries: Vec<LootEntry>,
}

impl LootTable {
    pub fn new(entries: Vec<LootEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[LootEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Treasure oracle drawing from per-kind loot tables with PCG-XSH-RR.
///
/// Entirely deterministic: the draw depends only on the oracle's base
/// seed, the probed geode count, and the kind.
pub struct PcgTreasureOracle {
    game_seed: u64,
    tables: HashMap<GeodeKind, LootTable>,
}

impl PcgTreasureOracle {
    pub fn new(game_seed: u64) -> Self {
        Self {
            game_seed,
            tables: HashMap::new(),
        }
    }

    pub fn with_tables(game_seed: u64, tables: HashMap<GeodeKind, LootTable>) -> Self {
        Self { game_seed, tables }
    }

    pub fn insert_table(&mut self, kind: GeodeKind, table: LootTable) {
        self.tables.insert(kind, table);
    }

    pub fn game_seed(&self) -> u64 {
        self.game_seed
    }
}

impl TreasureOracle for PcgTreasureOracle {
    fn treasure_for(
        &self,
        ctx: &dyn GameContext,
        kind: GeodeKind,
    ) -> Result<Treasure, OracleError> {
        let table = self
            .tables
            .get(&kind)
            .ok_or(OracleError::LootTableNotFound(kind))?;
        let count = ctx.geode_count();
        if table.is_empty() {
            return Err(OracleError::TreasureUnavailable { kind, count });
        }

        // Context 0 picks the entry, context 1 rolls the stack, so both
        // draws stay independent.
        let entry_roll = pcg_next(mix_seed(self.game_seed, count.value(), kind.0, 0));
        let entry = table.entries[(entry_roll as usize) % table.entries.len()];

        let stack_roll = pcg_next(mix_seed(self.game_seed, count.value(), kind.0, 1));
        let stack = (stack_roll % u32::from(entry.max_stack.max(1))) as u16 + 1;

        Ok(Treasure::new(entry.item, stack))
    }
}

/// PCG multiplier constant.
const PCG_MULTIPLIER: u64 = 6364136223846793005;

/// PCG increment constant.
const PCG_INCREMENT: u64 = 1442695040888963407;

/// One PCG-XSH-RR draw: a single LCG step, then xorshift-high with a
/// random rotate as the output permutation.
fn pcg_next(seed: u64) -> u32 {
    let state = seed.wrapping_mul(PCG_MULTIPLIER).wrapping_add(PCG_INCREMENT);
    let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
    let rot = (state >> 59) as u32;
    xorshifted.rotate_right(rot)
}

/// Mix the base seed, probed count, kind, and roll context into one draw
/// seed.
///
/// Constants are SplitMix64/FxHash multipliers; the final avalanche step
/// spreads low-entropy counts across the whole state.
fn mix_seed(game_seed: u64, count: u32, kind: u16, context: u32) -> u64 {
    let mut hash = game_seed;
    hash ^= u64::from(count).wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(kind).wrapping_mul(0x517cc1b727220a95);
    hash ^= u64::from(context).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
