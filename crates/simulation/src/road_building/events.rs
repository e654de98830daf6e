use bevy::prelude::*;

use crate::road_geometry::RoadPlacement;
use crate::roads::RoadId;

use super::types::HintId;

/// Registration of the preview with the renderer. The preview's placement
/// and tint are read from `RoadBuildingState` while it stays registered.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintLifecycleEvent {
    Registered(HintId),
    Unregistered(HintId),
}

/// A road was committed and should be drawn.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct RoadBuiltEvent {
    pub road: RoadId,
    pub from: Entity,
    pub to: Entity,
    pub placement: RoadPlacement,
}

/// Cursor icon requests, sent only when the hover-any state flips.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorFeedbackEvent {
    /// The pointer entered a selectable city.
    Interactive,
    /// The pointer left every selectable city.
    Default,
}

/// Notifications collected during one road-building frame, flushed to the
/// matching event queues by the system afterwards.
#[derive(Debug, Default)]
pub struct RoadBuildingOutbox {
    pub hint_events: Vec<HintLifecycleEvent>,
    pub roads_built: Vec<RoadBuiltEvent>,
    pub cursor_events: Vec<CursorFeedbackEvent>,
}
