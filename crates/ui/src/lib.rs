use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use simulation::simulation_sets::RoadBuildingSet;

pub mod road_building_panel;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<road_building_panel::RoadBuildingPanelCache>()
            .add_systems(
                Update,
                (
                    road_building_panel::refresh_road_building_panel,
                    road_building_panel::road_building_panel_ui,
                )
                    .chain()
                    .in_set(RoadBuildingSet::Presentation),
            );
    }
}
