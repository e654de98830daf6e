//! The road preview: created lazily once a city is selected, re-solved every
//! frame while the selection lasts, and discarded when it ends.

use crate::road_geometry::solve_road_placement;
use crate::roads::RoadKind;

use super::events::{HintLifecycleEvent, RoadBuildingOutbox};
use super::selection::RoadBuildingContext;
use super::types::{HintTint, RoadBuildingState, RoadHint};

/// Re-solve the preview from the selected city towards the hovered city, or
/// towards the raw pointer when no city is hovered.
pub fn refresh_hint(
    state: &mut RoadBuildingState,
    ctx: &RoadBuildingContext,
    outbox: &mut RoadBuildingOutbox,
) {
    let Some(selected) = state.selected else {
        return;
    };
    let Some(origin) = ctx.registry.get(selected).map(|c| c.center()) else {
        return;
    };

    let hovered = state
        .hovered_index
        .and_then(|index| ctx.registry.at(index))
        .map(|c| (c.center(), c.id));
    let (far_end, tint, target) = match hovered {
        Some((center, id)) => (center, HintTint::Available, Some(id)),
        None => (ctx.pointer, HintTint::Unavailable, None),
    };

    let placement = solve_road_placement(far_end, origin, ctx.params.road_width);

    match state.hint.as_mut() {
        Some(hint) => {
            hint.placement = placement;
            hint.tint = tint;
            hint.target = target;
        }
        None => {
            let id = state.allocate_hint_id();
            state.hint = Some(RoadHint {
                id,
                kind: RoadKind::None,
                placement,
                tint,
                target,
            });
            outbox
                .hint_events
                .push(HintLifecycleEvent::Registered(id));
        }
    }
}

/// Drop the preview, if any, and tell the renderer to forget it.
pub fn discard_hint(state: &mut RoadBuildingState, outbox: &mut RoadBuildingOutbox) {
    if let Some(hint) = state.hint.take() {
        outbox
            .hint_events
            .push(HintLifecycleEvent::Unregistered(hint.id));
    }
}
