//! Memoizing geode treasure forecaster.
//!
//! `geode-core` answers "what treasure will a given geode kind yield when
//! opened N geodes ahead of (or behind) the player's current count?" The
//! treasure oracle is deterministic but reads a single mutable counter, so
//! probing happens under a scoped count override that restores the true
//! value on every exit path, and each fully computed count is memoized
//! until the catalog collaborators are swapped.
//!
//! All external collaborators (object provider, geode service, treasure
//! oracle, game context) are trait seams; concrete implementations live in
//! `geode-content` or in the host integration.
pub mod config;
pub mod env;
pub mod error;
pub mod predict;
pub mod state;

pub use config::PredictorConfig;
pub use env::{GeodeDefinition, GeodeService, ObjectProvider, OracleError, TreasureOracle};
pub use error::{CoreError, ErrorSeverity};
pub use predict::{Direction, GeodePredictor, PredictError, PredictionCache, TreasureMap};
pub use state::{CountScope, GameContext, GeodeCount, GeodeKind, ItemHandle, Treasure};
