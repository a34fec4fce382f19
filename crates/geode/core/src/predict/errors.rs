//! Error types for the prediction pipeline.

use crate::env::OracleError;
use crate::error::{CoreError, ErrorSeverity};

/// Errors surfaced while computing predictions.
///
/// Upstream oracle failures propagate unchanged; the variant records which
/// stage of the pipeline raised them.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PredictError {
    /// The geode catalog could not be retrieved.
    #[error("failed to retrieve geode catalog: {0}")]
    Catalog(OracleError),

    /// A treasure lookup failed while populating a prediction.
    #[error("treasure lookup failed: {0}")]
    Treasure(OracleError),
}

impl PredictError {
    /// The upstream oracle error, whichever stage raised it.
    pub fn oracle_error(&self) -> &OracleError {
        match self {
            Self::Catalog(error) | Self::Treasure(error) => error,
        }
    }
}

impl CoreError for PredictError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            // Without a catalog there is nothing to predict
            Self::Catalog(_) => ErrorSeverity::Fatal,
            Self::Treasure(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Catalog(_) => "PREDICT_CATALOG_FAILED",
            Self::Treasure(_) => "PREDICT_TREASURE_FAILED",
        }
    }
}
