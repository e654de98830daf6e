// ---------------------------------------------------------------------------
// RoadBuildingError: reasons a road commit was skipped
// ---------------------------------------------------------------------------

use std::fmt;

use bevy::prelude::Entity;

/// Reasons a commit could not produce a road.
///
/// None of these reach the player: the road builder logs them and falls back
/// to an unselected state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadBuildingError {
    /// No preview existed to take the road's geometry from.
    MissingHint { from: Entity, to: Entity },
    /// An endpoint is not a registered candidate.
    UnknownCandidate(Entity),
    /// Both endpoints are the same city.
    SelfLink(Entity),
}

impl fmt::Display for RoadBuildingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoadBuildingError::MissingHint { from, to } => write!(
                f,
                "No road preview exists for the road from {from} to {to}"
            ),
            RoadBuildingError::UnknownCandidate(entity) => {
                write!(f, "Entity {entity} is not a road candidate")
            }
            RoadBuildingError::SelfLink(entity) => {
                write!(f, "Cannot build a road from {entity} to itself")
            }
        }
    }
}

impl std::error::Error for RoadBuildingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_missing_hint() {
        let err = RoadBuildingError::MissingHint {
            from: Entity::from_raw(1),
            to: Entity::from_raw(2),
        };
        let msg = err.to_string();
        assert!(msg.contains("No road preview"), "got: {msg}");
    }

    #[test]
    fn test_display_self_link() {
        let err = RoadBuildingError::SelfLink(Entity::from_raw(4));
        assert!(err.to_string().contains("to itself"));
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> =
            Box::new(RoadBuildingError::UnknownCandidate(Entity::from_raw(9)));
        assert!(err.to_string().contains("not a road candidate"));
    }
}
