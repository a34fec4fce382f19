//! Oracle access errors.

use crate::error::{CoreError, ErrorSeverity};
use crate::state::{GeodeCount, GeodeKind};

/// Errors surfaced by the catalog and treasure collaborators.
///
/// An empty catalog is fatal since the predictor has nothing to predict;
/// unknown kinds indicate invalid references in content data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// The object provider yielded no openable geodes.
    #[error("object provider yielded no geodes")]
    EmptyCatalog,

    /// A geode kind was requested that the provider does not define.
    #[error("geode definition {0:?} not found")]
    GeodeNotFound(GeodeKind),

    /// No loot table exists for the geode kind.
    #[error("loot table for {0:?} not found")]
    LootTableNotFound(GeodeKind),

    /// The oracle could not produce a treasure at the probed count.
    #[error("treasure for {kind:?} unavailable at count {count:?}")]
    TreasureUnavailable { kind: GeodeKind, count: GeodeCount },
}

impl CoreError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            // Nothing to predict - the predictor cannot proceed
            EmptyCatalog => ErrorSeverity::Fatal,

            // Invalid content references - reject without retry
            GeodeNotFound(_) | LootTableNotFound(_) => ErrorSeverity::Validation,

            // A defined kind with no drawable treasure is a content bug
            TreasureUnavailable { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            EmptyCatalog => "ORACLE_EMPTY_CATALOG",
            GeodeNotFound(_) => "ORACLE_GEODE_NOT_FOUND",
            LootTableNotFound(_) => "ORACLE_LOOT_TABLE_NOT_FOUND",
            TreasureUnavailable { .. } => "ORACLE_TREASURE_UNAVAILABLE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_catalog_is_fatal() {
        assert_eq!(OracleError::EmptyCatalog.severity(), ErrorSeverity::Fatal);
        assert_eq!(
            OracleError::LootTableNotFound(GeodeKind(7)).severity(),
            ErrorSeverity::Validation
        );
    }
}
