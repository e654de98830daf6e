use bevy::prelude::*;

pub mod candidates;
pub mod cities;
pub mod config;
pub mod road_building;
pub mod road_geometry;
pub mod roads;
pub mod sim_rng;
pub mod simulation_sets;
pub mod traffic;
pub mod world_init;

#[cfg(test)]
mod integration_tests;
#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

use candidates::CandidateRegistry;
use config::RoadBuildingParams;
use road_building::{
    CursorFeedbackEvent, HintLifecycleEvent, PointerWorldPos, RoadBuildingState, RoadBuiltEvent,
};
use roads::RoadStore;
use sim_rng::SimRng;
use simulation_sets::RoadBuildingSet;
use traffic::CommuterNetwork;

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimRng>()
            .init_resource::<RoadBuildingParams>()
            .init_resource::<CandidateRegistry>()
            .init_resource::<RoadStore>()
            .init_resource::<CommuterNetwork>()
            .init_resource::<PointerWorldPos>()
            .init_resource::<RoadBuildingState>()
            .add_event::<HintLifecycleEvent>()
            .add_event::<RoadBuiltEvent>()
            .add_event::<CursorFeedbackEvent>()
            .configure_sets(
                Update,
                (
                    RoadBuildingSet::Registry,
                    RoadBuildingSet::Pointer,
                    RoadBuildingSet::Interaction,
                    RoadBuildingSet::Presentation,
                )
                    .chain(),
            )
            .add_systems(Startup, world_init::init_world)
            .add_systems(
                Update,
                (
                    cities::register_new_cities,
                    cities::unregister_removed_cities,
                )
                    .in_set(RoadBuildingSet::Registry),
            )
            .add_systems(
                Update,
                road_building::update_road_building.in_set(RoadBuildingSet::Interaction),
            );
    }
}
