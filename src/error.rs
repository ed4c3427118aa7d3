use crate::road_network::intersection::IntersectionId;
use crate::road_network::road::RoadId;
use thiserror::Error;

/// Everything that can abort a road map build.
///
/// The first three variants mean the grid describes an invalid road network.
/// None of them is retryable: the caller has to fix the grid and build again.
#[derive(Debug, Error)]
pub enum RoadMapError {
    /// No road starts at the road's destination, apart from its own reverse.
    #[error("road {road} has no continuation at its destination intersection")]
    UnconnectableRoad { road: RoadId },

    /// The road has continuations, but none is orientation-compatible.
    #[error("road {road} is a dead end: no candidate continuation is orientation-compatible")]
    IncompatibleRoad { road: RoadId },

    /// No connection arrives at the intersection.
    #[error("intersection {intersection} has no inbound connection")]
    UnreachableIntersection { intersection: IntersectionId },

    /// The grid description itself is malformed (bad ids, unplaced coordinates, ...).
    #[error("invalid road map input: {reason}")]
    InvalidInput { reason: String },

    #[error("failed to read road map: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse road map: {0}")]
    Json(#[from] serde_json::Error),
}

impl RoadMapError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        RoadMapError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// True for the three structural errors raised by graph construction and validation.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            RoadMapError::UnconnectableRoad { .. }
                | RoadMapError::IncompatibleRoad { .. }
                | RoadMapError::UnreachableIntersection { .. }
        )
    }
}
