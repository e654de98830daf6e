use bevy::prelude::*;

use crate::road_building::RoadBuildingState;
use crate::roads::RoadStore;
use crate::simulation_sets::RoadBuildingSet;
use crate::test_harness::TestWorld;

/// Frames in which presentation systems saw the road builder's resources change.
#[derive(Resource, Default)]
struct ChangedFrames {
    state: u32,
    roads: u32,
}

fn record_changes(
    state: Res<RoadBuildingState>,
    roads: Res<RoadStore>,
    mut seen: ResMut<ChangedFrames>,
) {
    if state.is_changed() {
        seen.state += 1;
    }
    if roads.is_changed() {
        seen.roads += 1;
    }
}

fn observed_world() -> TestWorld {
    let mut world = TestWorld::new();
    world.world_mut().init_resource::<ChangedFrames>();
    world.add_update_systems(record_changes.in_set(RoadBuildingSet::Presentation));
    // The observer's first run sees every resource as changed.
    world.tick(1);
    reset(&mut world);
    world
}

fn seen(world: &TestWorld) -> (u32, u32) {
    let frames = world.resource::<ChangedFrames>();
    (frames.state, frames.roads)
}

// ====================================================================
// Idle frames leave the road builder untouched
// ====================================================================

#[test]
fn test_idle_frames_do_not_mark_state_changed() {
    let mut world = observed_world();
    world.spawn_city("X", Vec2::new(100.0, 100.0));
    world.tick(1);
    reset(&mut world);

    world.tick(5);

    assert_eq!(seen(&world), (0, 0));
}

fn reset(world: &mut TestWorld) {
    *world.world_mut().resource_mut::<ChangedFrames>() = ChangedFrames::default();
}

#[test]
fn test_moving_preview_marks_state_changed_once() {
    let mut world = observed_world();
    let x = world.spawn_city("X", Vec2::new(100.0, 100.0));
    world.tick(1);
    world.click_city(x);
    reset(&mut world);

    world.move_pointer(Vec2::new(400.0, 100.0));
    world.tick(4);

    assert_eq!(seen(&world), (1, 0));
}

#[test]
fn test_commit_marks_roads_changed() {
    let mut world = observed_world();
    let x = world.spawn_city("X", Vec2::new(0.0, 0.0));
    let y = world.spawn_city("Y", Vec2::new(100.0, 0.0));
    world.tick(1);
    world.click_city(x);
    world.hover_city(y);
    world.tick(1);
    reset(&mut world);

    world.press(&[y]);
    world.tick(3);

    assert_eq!(world.road_count(), 1);
    let (state, roads) = seen(&world);
    assert_eq!(roads, 1);
    assert!(state >= 1);
}
