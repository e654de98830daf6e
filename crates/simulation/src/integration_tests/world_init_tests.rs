use crate::config::{CITY_SIZE, STARTING_CITY_COUNT};
use crate::test_harness::TestWorld;

// ====================================================================
// Starting map
// ====================================================================

#[test]
fn test_empty_world_skips_starting_cities() {
    let world = TestWorld::new();
    assert!(world.registry().is_empty());
}

#[test]
fn test_starting_cities_become_candidates() {
    let mut world = TestWorld::with_starting_cities();
    world.tick(1);

    assert_eq!(world.registry().len(), STARTING_CITY_COUNT);
    for candidate in world.registry().iter() {
        let size = candidate.bounds.size();
        assert!((size.x - CITY_SIZE).abs() < 1e-3);
        assert!((size.y - CITY_SIZE).abs() < 1e-3);
    }
    world.assert_nothing_selected();
    world.assert_road_count(0);
}

#[test]
fn test_starting_cities_can_be_linked() {
    let mut world = TestWorld::with_starting_cities();
    world.tick(1);

    let ids: Vec<_> = world.registry().iter().map(|c| c.id).take(2).collect();
    world.click_city(ids[0]);
    world.click_city(ids[1]);

    world.assert_road_count(1);
}
