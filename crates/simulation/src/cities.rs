use bevy::prelude::*;

use crate::candidates::{Candidate, CandidateRegistry};
use crate::road_geometry::bounds_center;

/// A city on the ground plane. Owns its footprint; roads are tracked by the
/// road-building candidate registry.
#[derive(Component, Debug, Clone)]
pub struct City {
    pub name: String,
    pub bounds: Rect,
}

impl City {
    pub fn new(name: impl Into<String>, center: Vec2, size: f32) -> Self {
        Self {
            name: name.into(),
            bounds: Rect::from_center_size(center, Vec2::splat(size)),
        }
    }

    pub fn center(&self) -> Vec2 {
        bounds_center(self.bounds)
    }
}

/// Register freshly spawned cities as road-building candidates.
pub fn register_new_cities(
    cities: Query<(Entity, &City), Added<City>>,
    mut registry: ResMut<CandidateRegistry>,
) {
    for (entity, city) in &cities {
        if registry.contains(entity) {
            continue;
        }
        debug!("Registering city '{}' as road candidate", city.name);
        registry.add(Candidate::new(entity, city.bounds));
    }
}

/// Drop candidates whose city was despawned or lost its `City` component.
pub fn unregister_removed_cities(
    mut removed: RemovedComponents<City>,
    mut registry: ResMut<CandidateRegistry>,
) {
    for entity in removed.read() {
        registry.remove(entity);
    }
}
