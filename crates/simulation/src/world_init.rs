// =============================================================================
// World generation: the starting set of cities.
// =============================================================================

use bevy::prelude::*;

use crate::cities::City;
use crate::config::{
    CITY_SIZE, STARTING_CITY_COUNT, STARTING_CITY_SPACING, WORLD_HEIGHT, WORLD_WIDTH,
};
use crate::sim_rng::SimRng;

const CITY_NAMES: [&str; 8] = [
    "Ashford", "Brookvale", "Cedar Point", "Dunmore", "Eastwick", "Fairhaven", "Glenrock",
    "Harrow",
];

/// Placement attempts per city before giving up on a crowded map.
const MAX_PLACEMENT_ATTEMPTS: usize = 64;

/// Marker resource that, when present, causes `init_world` to skip spawning
/// the starting cities. Used by the test harness to start with an empty map.
#[derive(Resource)]
pub struct SkipWorldInit;

pub fn init_world(mut commands: Commands, mut rng: ResMut<SimRng>, skip: Option<Res<SkipWorldInit>>) {
    if skip.is_some() {
        return;
    }

    let centers = starting_city_centers(&mut rng, STARTING_CITY_COUNT);
    for (i, center) in centers.iter().enumerate() {
        let name = CITY_NAMES[i % CITY_NAMES.len()];
        commands.spawn(City::new(name, *center, CITY_SIZE));
    }
    info!("Spawned {} starting cities", centers.len());
}

/// Pick up to `count` city centers inside the world, keeping every pair at
/// least `STARTING_CITY_SPACING` apart edge to edge.
pub fn starting_city_centers(rng: &mut SimRng, count: usize) -> Vec<Vec2> {
    let area = Rect::new(CITY_SIZE, CITY_SIZE, WORLD_WIDTH - CITY_SIZE, WORLD_HEIGHT - CITY_SIZE);
    let min_distance = CITY_SIZE + STARTING_CITY_SPACING;
    let mut centers: Vec<Vec2> = Vec::with_capacity(count);

    for _ in 0..count {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let candidate = rng.point_in(area);
            if centers
                .iter()
                .all(|c| c.distance(candidate) >= min_distance)
            {
                centers.push(candidate);
                break;
            }
        }
    }
    if centers.len() < count {
        warn!(
            "Placed only {} of {} starting cities",
            centers.len(),
            count
        );
    }
    centers
}
