use bevy::prelude::*;

use crate::roads::{RoadId, RoadKind};

use super::error::RoadBuildingError;
use super::events::{RoadBuildingOutbox, RoadBuiltEvent};
use super::hint::discard_hint;
use super::selection::RoadBuildingContext;
use super::types::RoadBuildingState;

/// Turn the current preview into a road from `from` to `to`.
///
/// The road takes the preview's placement as-is, is registered with the
/// commuter network, announced to the renderer and recorded on the `from`
/// city. The preview is discarded afterwards. On error nothing is created
/// and the preview is left untouched.
pub fn commit_road(
    state: &mut RoadBuildingState,
    ctx: &mut RoadBuildingContext,
    from: Entity,
    to: Entity,
    outbox: &mut RoadBuildingOutbox,
) -> Result<RoadId, RoadBuildingError> {
    if from == to {
        return Err(RoadBuildingError::SelfLink(from));
    }
    for endpoint in [from, to] {
        if !ctx.registry.contains(endpoint) {
            return Err(RoadBuildingError::UnknownCandidate(endpoint));
        }
    }
    let Some(placement) = state.hint.as_ref().map(|hint| hint.placement) else {
        return Err(RoadBuildingError::MissingHint { from, to });
    };

    let id = ctx.roads.add_road(RoadKind::Basic, from, to, placement);
    if let Some(road) = ctx.roads.get(id) {
        ctx.network.register_road(id, road);
    }
    outbox.roads_built.push(RoadBuiltEvent {
        road: id,
        from,
        to,
        placement,
    });
    if let Some(origin) = ctx.registry.get_mut(from) {
        origin.roads.push(id);
    }

    discard_hint(state, outbox);

    info!(
        "Built road {:?} from {} to {} ({:.1} units)",
        id,
        from,
        to,
        placement.length()
    );
    Ok(id)
}
