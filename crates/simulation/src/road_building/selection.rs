//! Per-frame selection and hover resolution.
//!
//! Candidates are visited in registry order. A click either selects, or, with
//! a selection already active, commits (for a different city) and deselects.
//! At most one non-selected candidate is highlighted as hovered: the first one
//! in registry order that reports hover.

use bevy::prelude::*;

use crate::candidates::{CandidateRegistry, CandidateVisual};
use crate::config::RoadBuildingParams;
use crate::roads::RoadStore;
use crate::traffic::CommuterNetwork;

use super::commit::commit_road;
use super::events::{CursorFeedbackEvent, RoadBuildingOutbox};
use super::hint::{discard_hint, refresh_hint};
use super::types::RoadBuildingState;

/// Everything a road-building frame reads or mutates besides its own state.
pub struct RoadBuildingContext<'a> {
    pub registry: &'a mut CandidateRegistry,
    pub roads: &'a mut RoadStore,
    pub network: &'a mut CommuterNetwork,
    pub params: &'a RoadBuildingParams,
    /// World-space pointer position this frame.
    pub pointer: Vec2,
}

/// Run one frame of the road builder.
///
/// Click handling, including any commit, completes before the preview is
/// recomputed, so a preview torn down by a commit is never re-solved in the
/// same frame.
pub fn run_road_building_frame(
    state: &mut RoadBuildingState,
    ctx: &mut RoadBuildingContext,
    outbox: &mut RoadBuildingOutbox,
) {
    drop_stale_selection(state, ctx, outbox);

    let mut hovered_index = None;
    for index in 0..ctx.registry.len() {
        let Some((id, clicked)) = ctx.registry.at(index).map(|c| (c.id, c.pointer.clicked)) else {
            continue;
        };

        if clicked {
            handle_click(state, ctx, index, outbox);
        }

        if state.selected != Some(id) {
            update_hover(ctx.registry, index, &mut hovered_index);
        }
    }
    state.hovered_index = hovered_index;

    if state.is_selecting() {
        refresh_hint(state, ctx, outbox);
    }

    update_cursor_feedback(state, hovered_index.is_some(), outbox);
}

fn handle_click(
    state: &mut RoadBuildingState,
    ctx: &mut RoadBuildingContext,
    index: usize,
    outbox: &mut RoadBuildingOutbox,
) {
    let Some(clicked) = ctx.registry.at(index).map(|c| c.id) else {
        return;
    };

    let Some(selected) = state.selected else {
        if let Some(candidate) = ctx.registry.at_mut(index) {
            candidate.visual = CandidateVisual::Selected;
            candidate.is_hovered = false;
        }
        state.selected = Some(clicked);
        debug!("Selected {} as road start", clicked);
        return;
    };

    if selected != clicked {
        if let Err(err) = commit_road(state, ctx, selected, clicked, outbox) {
            warn!("Road builder skipped a commit: {}", err);
        }
    }

    if let Some(candidate) = ctx.registry.at_mut(index) {
        candidate.visual = CandidateVisual::Idle;
        candidate.is_hovered = false;
    }
    if let Some(candidate) = ctx.registry.get_mut(selected) {
        candidate.visual = CandidateVisual::Idle;
    }
    state.selected = None;
    discard_hint(state, outbox);
    debug!("Deselected {}", selected);
}

fn update_hover(
    registry: &mut CandidateRegistry,
    index: usize,
    hovered_index: &mut Option<usize>,
) {
    let Some(candidate) = registry.at_mut(index) else {
        return;
    };

    // Only the first hovered candidate is highlighted; later hovered ones
    // stay idle so a single city is ever shown as the target.
    if candidate.pointer.hovered && hovered_index.is_none() {
        candidate.visual = CandidateVisual::Hovered;
        candidate.is_hovered = true;
        *hovered_index = Some(index);
    } else if candidate.is_hovered || candidate.visual == CandidateVisual::Hovered {
        candidate.visual = CandidateVisual::Idle;
        candidate.is_hovered = false;
    }
}

fn update_cursor_feedback(
    state: &mut RoadBuildingState,
    any_hovered: bool,
    outbox: &mut RoadBuildingOutbox,
) {
    if any_hovered && !state.cursor_active {
        state.cursor_active = true;
        outbox.cursor_events.push(CursorFeedbackEvent::Interactive);
    } else if !any_hovered && state.cursor_active {
        state.cursor_active = false;
        outbox.cursor_events.push(CursorFeedbackEvent::Default);
    }
}

/// A selected city that left the registry can no longer anchor a road.
fn drop_stale_selection(
    state: &mut RoadBuildingState,
    ctx: &RoadBuildingContext,
    outbox: &mut RoadBuildingOutbox,
) {
    let Some(selected) = state.selected else {
        return;
    };
    if ctx.registry.contains(selected) {
        return;
    }
    debug!("Selected city {} was removed; dropping selection", selected);
    state.selected = None;
    discard_hint(state, outbox);
}
