use bevy::prelude::*;

use crate::road_geometry::RoadPlacement;
use crate::roads::RoadKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HintId(pub u32);

/// Tint of the road preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HintTint {
    /// The preview ends on a city: a road can be built.
    Available,
    /// The preview follows the raw pointer: nothing to connect to yet.
    #[default]
    Unavailable,
}

/// The single transient preview of the road about to be built.
///
/// Shaped like a road but never handed to the commuter simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadHint {
    pub id: HintId,
    pub kind: RoadKind,
    pub placement: RoadPlacement,
    pub tint: HintTint,
    /// The city the preview currently ends on, if any.
    pub target: Option<Entity>,
}

/// World-space pointer position on the ground plane, written by the input
/// source each frame.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PointerWorldPos {
    pub world_pos: Vec2,
}

/// State carried by the road builder from one frame to the next.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct RoadBuildingState {
    /// City chosen as the start of the next road.
    pub selected: Option<Entity>,
    /// Registry index of the city highlighted as hovered this frame.
    pub hovered_index: Option<usize>,
    /// Whether the interactive cursor was last requested.
    pub cursor_active: bool,
    /// The preview, present only while a city is selected.
    pub hint: Option<RoadHint>,
    next_hint_id: u32,
}

impl RoadBuildingState {
    pub fn is_selecting(&self) -> bool {
        self.selected.is_some()
    }

    pub(crate) fn allocate_hint_id(&mut self) -> HintId {
        let id = HintId(self.next_hint_id);
        self.next_hint_id += 1;
        id
    }
}
