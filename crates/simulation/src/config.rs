pub const WORLD_WIDTH: f32 = 1280.0;
pub const WORLD_HEIGHT: f32 = 720.0;

/// Side length of a city's square footprint in world units.
pub const CITY_SIZE: f32 = 40.0;

/// Number of cities spawned by `init_world` on a fresh start.
pub const STARTING_CITY_COUNT: usize = 6;

/// Minimum gap between two starting cities, measured between their edges.
pub const STARTING_CITY_SPACING: f32 = 60.0;

/// Fixed width of the road preview and of every committed road.
pub const ROAD_HINT_WIDTH: f32 = 10.0;

/// Tunable road-building parameters, defaulting to the constants above.
#[derive(bevy::prelude::Resource, Debug, Clone, Copy, PartialEq)]
pub struct RoadBuildingParams {
    /// Width passed to the geometry solver for the preview (and thus for the
    /// roads committed from it).
    pub road_width: f32,
}

impl Default for RoadBuildingParams {
    fn default() -> Self {
        Self {
            road_width: ROAD_HINT_WIDTH,
        }
    }
}
