//! Traits describing the predictor's external collaborators.
//!
//! The object provider and geode service describe *what* can be opened;
//! the treasure oracle describes *what falls out* at a given geode count.
//! Keeping them behind traits decouples the predictor from any concrete
//! game integration.
mod error;

pub use error::OracleError;

use crate::state::{GameContext, GeodeKind, Treasure};

/// Provider of object data from game content.
pub trait ObjectProvider: Send + Sync {
    /// Definitions of every openable geode, in catalog order.
    fn geode_definitions(&self) -> Result<Vec<GeodeDefinition>, OracleError>;
}

/// Service deriving the ordered geode catalog from a provider.
pub trait GeodeService: Send + Sync {
    /// Retrieve the catalog of geode kinds.
    ///
    /// Called lazily, once per (service, provider) pairing; the result is
    /// held until the predictor is reconfigured.
    fn retrieve_geodes(
        &self,
        provider: &dyn ObjectProvider,
    ) -> Result<Vec<GeodeKind>, OracleError>;
}

/// Oracle computing the treasure a geode yields at the context's current
/// count.
///
/// The result must be fully determined by `ctx.geode_count()` and `kind`:
/// the predictor memoizes on exactly that pair.
pub trait TreasureOracle: Send + Sync {
    /// Treasure for opening `kind` as the `ctx.geode_count()`-th geode.
    fn treasure_for(
        &self,
        ctx: &dyn GameContext,
        kind: GeodeKind,
    ) -> Result<Treasure, OracleError>;
}

/// Display-level definition of a geode kind.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeodeDefinition {
    pub kind: GeodeKind,
    pub name: String,
}

impl GeodeDefinition {
    pub fn new(kind: GeodeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}
