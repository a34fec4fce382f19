//! Orchestration of catalog retrieval, scoped probing, and memoization.

use crate::config::PredictorConfig;
use crate::env::{GeodeService, ObjectProvider, TreasureOracle};
use crate::state::{CountScope, GameContext, GeodeCount, GeodeKind};

use super::cache::{PredictionCache, TreasureMap};
use super::errors::PredictError;
use super::Direction;

/// Memoizing treasure forecaster.
///
/// Computes target geode counts from distance/direction requests, probes
/// the treasure oracle under a scoped count override, and memoizes each
/// fully computed count. The true geode count is restored before every
/// call returns, on the error path included.
///
/// The catalog and cache are tied to one (service, provider) pairing;
/// [`GeodePredictor::reconfigure`] swaps the pairing and discards both.
pub struct GeodePredictor<S, P, O> {
    service: S,
    provider: P,
    oracle: O,
    config: PredictorConfig,
    /// Lazily retrieved catalog; `None` marks it stale.
    catalog: Option<Vec<GeodeKind>>,
    cache: PredictionCache,
}

impl<S, P, O> GeodePredictor<S, P, O>
where
    S: GeodeService,
    P: ObjectProvider,
    O: TreasureOracle,
{
    pub fn new(service: S, provider: P, oracle: O) -> Self {
        Self::with_config(service, provider, oracle, PredictorConfig::default())
    }

    pub fn with_config(service: S, provider: P, oracle: O, config: PredictorConfig) -> Self {
        Self {
            service,
            provider,
            oracle,
            config,
            catalog: None,
            cache: PredictionCache::new(),
        }
    }

    /// Swap the catalog collaborators, discarding all memoized work.
    ///
    /// Predictions made under the old pairing are meaningless under the
    /// new one, so the cache is cleared and the catalog marked stale in
    /// the same step.
    pub fn reconfigure(&mut self, service: S, provider: P) {
        self.service = service;
        self.provider = provider;
        self.catalog = None;
        self.cache.clear();
        tracing::debug!("predictor reconfigured; prediction cache cleared");
    }

    /// Number of geode counts currently memoized.
    pub fn cached_counts(&self) -> usize {
        self.cache.len()
    }

    /// The ordered catalog of predictable geode kinds, retrieved from the
    /// service on first use.
    pub fn catalog(&mut self) -> Result<&[GeodeKind], PredictError> {
        if self.catalog.is_none() {
            let kinds = self
                .service
                .retrieve_geodes(&self.provider)
                .map_err(PredictError::Catalog)?;
            tracing::debug!(kinds = kinds.len(), "geode catalog retrieved");
            self.catalog = Some(kinds);
        }
        Ok(self.catalog.as_deref().unwrap_or_default())
    }

    /// Predict the treasures a geode opened `distance` geodes away yields.
    ///
    /// Forwards targets `current + distance`. Backwards targets
    /// `current - distance`, clamped to the current count when `distance`
    /// exceeds it (there is no history before geode zero).
    pub fn predict_at_distance<C: GameContext>(
        &mut self,
        ctx: &mut C,
        distance: u32,
        direction: Direction,
    ) -> Result<TreasureMap, PredictError> {
        let current = ctx.geode_count();
        let target = match direction {
            Direction::Forwards => current + distance,
            Direction::Backwards => current.rewind(distance),
        };

        // One-wide half-open window: [target, target + 1).
        let mut results = self.predict_in_range(ctx, target, target + 1)?;
        Ok(results
            .pop()
            .expect("one-wide range yields exactly one prediction"))
    }

    /// Predict treasures for every count in the window around the current
    /// count: `distance_behind` back (clamped to the current count)
    /// through `distance_ahead` forward, half-open on the far end.
    ///
    /// Results are ordered by increasing count. `distance_ahead == 0`
    /// with `distance_behind == 0` yields an empty sequence.
    pub fn predict_over_range<C: GameContext>(
        &mut self,
        ctx: &mut C,
        distance_ahead: u32,
        distance_behind: u32,
    ) -> Result<Vec<TreasureMap>, PredictError> {
        let current = ctx.geode_count();
        let start = current.rewind(distance_behind);
        let end = current + distance_ahead;
        self.predict_in_range(ctx, start, end)
    }

    /// Walk `[first, last)` in increasing count order, memoizing misses.
    ///
    /// All probing happens inside a single [`CountScope`] spanning the
    /// whole walk, never one scope per count. A failed count commits
    /// nothing to the cache and aborts the walk; the scope still restores
    /// the true count on the way out.
    fn predict_in_range<C: GameContext>(
        &mut self,
        ctx: &mut C,
        first: GeodeCount,
        last: GeodeCount,
    ) -> Result<Vec<TreasureMap>, PredictError> {
        assert!(
            first <= last,
            "range start {first:?} must not exceed range end {last:?}"
        );

        // Resolve the catalog before opening the scope: a catalog failure
        // must never touch the count.
        self.catalog()?;
        let Self {
            oracle,
            catalog,
            cache,
            config,
            ..
        } = self;
        let catalog: &[GeodeKind] = catalog.as_deref().unwrap_or_default();

        let mut results = Vec::with_capacity((last.value() - first.value()) as usize);
        let mut scope = CountScope::new(ctx);

        for raw in first.value()..last.value() {
            let count = GeodeCount::new(raw);
            let treasures = cache.get_or_compute(count, || {
                scope.probe(count);
                let mut computed = TreasureMap::new();
                for &kind in catalog {
                    let treasure = oracle
                        .treasure_for(scope.ctx(), kind)
                        .map_err(PredictError::Treasure)?;
                    computed.insert(kind, treasure);
                }
                Ok(computed)
            })?;
            results.push(treasures);
        }

        if cache.len() == config.cache_warn_threshold {
            tracing::warn!(
                cached = cache.len(),
                "prediction cache reached its advisory size threshold"
            );
        }

        Ok(results)
    }
}
