use bevy::prelude::*;

use crate::candidates::CandidateRegistry;
use crate::config::RoadBuildingParams;
use crate::roads::RoadStore;
use crate::traffic::CommuterNetwork;

use super::events::{
    CursorFeedbackEvent, HintLifecycleEvent, RoadBuildingOutbox, RoadBuiltEvent,
};
use super::selection::{run_road_building_frame, RoadBuildingContext};
use super::types::{PointerWorldPos, RoadBuildingState};

/// Drive one road-building frame and flush its notifications.
///
/// State, roads and the commuter network are only marked changed when the
/// frame actually altered them, so readers can rely on `is_changed()`.
#[allow(clippy::too_many_arguments)]
pub fn update_road_building(
    mut state: ResMut<RoadBuildingState>,
    mut registry: ResMut<CandidateRegistry>,
    mut roads: ResMut<RoadStore>,
    mut network: ResMut<CommuterNetwork>,
    params: Res<RoadBuildingParams>,
    pointer: Res<PointerWorldPos>,
    mut hint_writer: EventWriter<HintLifecycleEvent>,
    mut built_writer: EventWriter<RoadBuiltEvent>,
    mut cursor_writer: EventWriter<CursorFeedbackEvent>,
) {
    let before = state.clone();
    let mut outbox = RoadBuildingOutbox::default();
    let mut ctx = RoadBuildingContext {
        registry: &mut registry,
        roads: roads.bypass_change_detection(),
        network: network.bypass_change_detection(),
        params: &params,
        pointer: pointer.world_pos,
    };
    run_road_building_frame(state.bypass_change_detection(), &mut ctx, &mut outbox);

    if *state != before {
        state.set_changed();
    }
    if !outbox.roads_built.is_empty() {
        roads.set_changed();
        network.set_changed();
    }

    for event in outbox.hint_events {
        hint_writer.send(event);
    }
    for event in outbox.roads_built {
        built_writer.send(event);
    }
    for event in outbox.cursor_events {
        cursor_writer.send(event);
    }
}
