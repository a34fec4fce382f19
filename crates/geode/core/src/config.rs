/// Predictor tuning constants.
///
/// The prediction cache is a correctness mechanism, not a memory-bounded
/// cache: entries are never evicted individually, so a long exploration
/// session grows it without bound. The advisory threshold only controls
/// when that growth is logged.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PredictorConfig {
    /// Number of cached counts at which population logs a warning.
    pub cache_warn_threshold: usize,
}

impl PredictorConfig {
    pub const DEFAULT_CACHE_WARN_THRESHOLD: usize = 4096;

    pub fn new() -> Self {
        Self {
            cache_warn_threshold: Self::DEFAULT_CACHE_WARN_THRESHOLD,
        }
    }

    pub fn with_cache_warn_threshold(cache_warn_threshold: usize) -> Self {
        Self {
            cache_warn_threshold,
        }
    }
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self::new()
    }
}
