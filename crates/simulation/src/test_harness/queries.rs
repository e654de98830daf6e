//! Query methods for `TestWorld`.

use bevy::prelude::*;

use crate::candidates::{Candidate, CandidateRegistry, CandidateVisual};
use crate::road_building::{HintLifecycleEvent, RoadBuildingState, RoadHint};
use crate::roads::{Road, RoadStore};
use crate::traffic::CommuterNetwork;

use super::{EventLog, TestWorld};

impl TestWorld {
    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Access the ECS world mutably.
    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    /// Add systems to the `Update` schedule, e.g. observers of the frame.
    pub fn add_update_systems<M>(&mut self, systems: impl IntoSystemConfigs<M>) {
        self.app.add_systems(Update, systems);
    }

    /// Get a reference to any resource.
    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn registry(&self) -> &CandidateRegistry {
        self.resource::<CandidateRegistry>()
    }

    pub fn roads(&self) -> &RoadStore {
        self.resource::<RoadStore>()
    }

    pub fn commuter_network(&self) -> &CommuterNetwork {
        self.resource::<CommuterNetwork>()
    }

    pub fn state(&self) -> &RoadBuildingState {
        self.resource::<RoadBuildingState>()
    }

    /// The candidate registered for `city`. Panics if it is not registered.
    pub fn candidate(&self, city: Entity) -> &Candidate {
        match self.registry().get(city) {
            Some(candidate) => candidate,
            None => panic!("{city} is not a registered candidate"),
        }
    }

    pub fn visual(&self, city: Entity) -> CandidateVisual {
        self.candidate(city).visual
    }

    pub fn selected(&self) -> Option<Entity> {
        self.state().selected
    }

    pub fn hint(&self) -> Option<&RoadHint> {
        self.state().hint.as_ref()
    }

    pub fn road_count(&self) -> usize {
        self.roads().len()
    }

    /// The most recently committed road.
    pub fn last_road(&self) -> Option<&Road> {
        self.roads().roads.last()
    }

    /// Number of candidates currently drawn as selected.
    pub fn selected_visual_count(&self) -> usize {
        self.registry()
            .iter()
            .filter(|c| c.visual == CandidateVisual::Selected)
            .count()
    }

    /// Number of candidates currently drawn as hovered.
    pub fn hovered_visual_count(&self) -> usize {
        self.registry()
            .iter()
            .filter(|c| c.visual == CandidateVisual::Hovered)
            .count()
    }

    pub fn events(&self) -> &EventLog {
        &self.log
    }

    pub fn hint_registrations(&self) -> usize {
        self.log
            .hint
            .iter()
            .filter(|e| matches!(e, HintLifecycleEvent::Registered(_)))
            .count()
    }

    pub fn hint_unregistrations(&self) -> usize {
        self.log
            .hint
            .iter()
            .filter(|e| matches!(e, HintLifecycleEvent::Unregistered(_)))
            .count()
    }
}
