//! City spawning and removal for integration tests.

use bevy::prelude::*;

use crate::cities::City;
use crate::config::CITY_SIZE;

use super::TestWorld;

impl TestWorld {
    // -----------------------------------------------------------------------
    // Cities
    // -----------------------------------------------------------------------

    /// Spawn a `CITY_SIZE` city centered on `center` and run a frame so it is
    /// registered as a candidate.
    pub fn spawn_city(&mut self, name: &str, center: Vec2) -> Entity {
        self.spawn_city_sized(name, center, CITY_SIZE)
    }

    /// Spawn a city with a custom footprint size.
    pub fn spawn_city_sized(&mut self, name: &str, center: Vec2, size: f32) -> Entity {
        let entity = self
            .app
            .world_mut()
            .spawn(City::new(name, center, size))
            .id();
        self.tick(1);
        entity
    }

    /// Builder form of `spawn_city`.
    pub fn with_city(mut self, name: &str, center: Vec2) -> Self {
        self.spawn_city(name, center);
        self
    }

    /// Despawn a city and run a frame so the registry drops it.
    pub fn despawn_city(&mut self, city: Entity) {
        self.app.world_mut().despawn(city);
        self.tick(1);
    }
}
