//! Memoized predictions keyed by geode count.

use std::collections::{BTreeMap, HashMap};

use crate::state::{GeodeCount, GeodeKind, Treasure};

use super::errors::PredictError;

/// Treasures per geode kind at a single geode count.
pub type TreasureMap = BTreeMap<GeodeKind, Treasure>;

/// Memoization table for computed predictions.
///
/// Entries are committed whole: a count key is only ever present with one
/// treasure per catalog kind, and a failed computation commits nothing.
/// There is no per-entry eviction; the table is cleared wholesale when the
/// predictor is reconfigured.
#[derive(Debug, Default)]
pub struct PredictionCache {
    entries: HashMap<GeodeCount, TreasureMap>,
}

impl PredictionCache {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Returns the memoized map for `count`, computing and committing it
    /// on a miss.
    ///
    /// `compute` runs only on a miss. If it fails, the cache is left
    /// untouched and the error propagates.
    pub fn get_or_compute<F>(
        &mut self,
        count: GeodeCount,
        compute: F,
    ) -> Result<TreasureMap, PredictError>
    where
        F: FnOnce() -> Result<TreasureMap, PredictError>,
    {
        if let Some(hit) = self.entries.get(&count) {
            tracing::trace!(count = count.value(), "prediction cache hit");
            return Ok(hit.clone());
        }

        let computed = compute()?;
        tracing::debug!(
            count = count.value(),
            kinds = computed.len(),
            "prediction cache miss populated"
        );
        self.entries.insert(count, computed.clone());
        Ok(computed)
    }

    pub fn contains(&self, count: GeodeCount) -> bool {
        self.entries.contains_key(&count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Discard every memoized prediction.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::OracleError;
    use crate::state::ItemHandle;

    fn sample_map() -> TreasureMap {
        let mut map = TreasureMap::new();
        map.insert(GeodeKind(1), Treasure::new(ItemHandle(390), 3));
        map.insert(GeodeKind(2), Treasure::new(ItemHandle(378), 1));
        map
    }

    #[test]
    fn miss_computes_and_commits() {
        let mut cache = PredictionCache::new();
        let result = cache
            .get_or_compute(GeodeCount(4), || Ok(sample_map()))
            .unwrap();

        assert_eq!(result, sample_map());
        assert!(cache.contains(GeodeCount(4)));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn hit_skips_compute() {
        let mut cache = PredictionCache::new();
        cache
            .get_or_compute(GeodeCount(4), || Ok(sample_map()))
            .unwrap();

        let result = cache
            .get_or_compute(GeodeCount(4), || {
                panic!("compute must not run on a cache hit")
            })
            .unwrap();

        assert_eq!(result, sample_map());
    }

    #[test]
    fn failed_compute_commits_nothing() {
        let mut cache = PredictionCache::new();
        let result = cache.get_or_compute(GeodeCount(9), || {
            Err(PredictError::Treasure(OracleError::LootTableNotFound(
                GeodeKind(1),
            )))
        });

        assert!(result.is_err());
        assert!(!cache.contains(GeodeCount(9)));
        assert!(cache.is_empty());
    }

    #[test]
    fn clear_discards_everything() {
        let mut cache = PredictionCache::new();
        cache
            .get_or_compute(GeodeCount(1), || Ok(sample_map()))
            .unwrap();
        cache
            .get_or_compute(GeodeCount(2), || Ok(sample_map()))
            .unwrap();

        cache.clear();

        assert!(cache.is_empty());
        assert!(!cache.contains(GeodeCount(1)));
    }
}
