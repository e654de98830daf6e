use bevy::prelude::*;

use crate::road_building::CursorFeedbackEvent;
use crate::test_harness::TestWorld;

// ====================================================================
// Cursor signal: emitted only on hover start / hover end
// ====================================================================

#[test]
fn test_cursor_interactive_on_hover_start() {
    let mut world = TestWorld::new();
    let x = world.spawn_city("X", Vec2::new(100.0, 100.0));

    world.hover_city(x);
    world.tick(1);

    assert_eq!(world.events().cursor, vec![CursorFeedbackEvent::Interactive]);
}

#[test]
fn test_cursor_not_repeated_while_hovering() {
    let mut world = TestWorld::new();
    let x = world.spawn_city("X", Vec2::new(100.0, 100.0));

    world.hover_city(x);
    world.tick(10);

    assert_eq!(world.events().cursor.len(), 1);
}

#[test]
fn test_cursor_reset_on_hover_end() {
    let mut world = TestWorld::new();
    let x = world.spawn_city("X", Vec2::new(100.0, 100.0));

    world.hover_city(x);
    world.tick(1);
    world.move_pointer(Vec2::new(600.0, 600.0));
    world.tick(3);

    assert_eq!(
        world.events().cursor,
        vec![CursorFeedbackEvent::Interactive, CursorFeedbackEvent::Default]
    );
}

#[test]
fn test_moving_between_cities_keeps_cursor_interactive() {
    let mut world = TestWorld::new();
    let a = world.spawn_city("A", Vec2::new(100.0, 100.0));
    let b = world.spawn_city("B", Vec2::new(300.0, 100.0));

    world.hover_city(a);
    world.tick(1);
    world.hover_city(b);
    world.tick(1);

    assert_eq!(world.events().cursor, vec![CursorFeedbackEvent::Interactive]);
}

#[test]
fn test_selected_city_does_not_count_as_hovered() {
    let mut world = TestWorld::new();
    let x = world.spawn_city("X", Vec2::new(100.0, 100.0));

    world.click_city(x);

    // Hover starts on the approach frame, then the city becomes the
    // selection and stops counting.
    assert_eq!(
        world.events().cursor,
        vec![CursorFeedbackEvent::Interactive, CursorFeedbackEvent::Default]
    );
    assert!(!world.state().cursor_active);
}

#[test]
fn test_no_cursor_events_in_empty_space() {
    let mut world = TestWorld::new();
    world.spawn_city("X", Vec2::new(100.0, 100.0));

    for step in 0..5 {
        world.move_pointer(Vec2::new(500.0 + step as f32 * 20.0, 500.0));
        world.tick(1);
    }

    assert!(world.events().cursor.is_empty());
}
