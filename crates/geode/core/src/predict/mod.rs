//! Treasure prediction: direction math, memoization, and the range walk.
mod cache;
mod errors;
mod predictor;

pub use cache::{PredictionCache, TreasureMap};
pub use errors::PredictError;
pub use predictor::GeodePredictor;

/// Direction to look through the geode-opening history.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Forwards,
    Backwards,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn direction_round_trips_through_strings() {
        assert_eq!(Direction::Forwards.to_string(), "forwards");
        assert_eq!(Direction::from_str("Backwards"), Ok(Direction::Backwards));
    }
}
