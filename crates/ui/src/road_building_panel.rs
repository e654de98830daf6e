//! Road-building status panel.
//!
//! Shows the city picked as the road start, the live preview (length and
//! whether it currently snaps to a city), and every road built so far.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::cities::City;
use simulation::road_building::{HintTint, RoadBuildingState};
use simulation::roads::RoadStore;

/// One committed road as shown in the panel.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadLine {
    pub from: String,
    pub to: String,
    pub length: f32,
    pub commuters: usize,
}

/// Precomputed panel contents, refreshed when the road builder changes.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct RoadBuildingPanelCache {
    pub selected_city: Option<String>,
    pub preview_length: Option<f32>,
    /// City the preview snaps to; `None` while it follows the pointer.
    pub preview_target: Option<String>,
    pub roads: Vec<RoadLine>,
}

/// Build the panel contents. `name_of` resolves a city entity to a label.
pub fn describe_road_building(
    state: &RoadBuildingState,
    roads: &RoadStore,
    name_of: impl Fn(Entity) -> String,
) -> RoadBuildingPanelCache {
    let preview = state.hint.as_ref();
    RoadBuildingPanelCache {
        selected_city: state.selected.map(&name_of),
        preview_length: preview.map(|hint| hint.placement.length()),
        preview_target: preview
            .filter(|hint| hint.tint == HintTint::Available)
            .and_then(|hint| hint.target)
            .map(&name_of),
        roads: roads
            .roads
            .iter()
            .map(|road| RoadLine {
                from: name_of(road.from),
                to: name_of(road.to),
                length: road.length(),
                commuters: road.commuters.len(),
            })
            .collect(),
    }
}

pub fn refresh_road_building_panel(
    state: Res<RoadBuildingState>,
    roads: Res<RoadStore>,
    cities: Query<&City>,
    mut cache: ResMut<RoadBuildingPanelCache>,
) {
    if !state.is_changed() && !roads.is_changed() {
        return;
    }
    let name_of = |entity: Entity| {
        cities
            .get(entity)
            .map(|city| city.name.clone())
            .unwrap_or_else(|_| format!("{entity}"))
    };
    let fresh = describe_road_building(&state, &roads, name_of);
    if *cache != fresh {
        *cache = fresh;
    }
}

pub fn road_building_panel_ui(mut contexts: EguiContexts, cache: Res<RoadBuildingPanelCache>) {
    egui::Window::new("Road Building")
        .default_width(260.0)
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(8.0, 8.0))
        .show(contexts.ctx_mut(), |ui| {
            egui::Grid::new("road_building_status")
                .num_columns(2)
                .show(ui, |ui| {
                    ui.label("Start:");
                    ui.label(cache.selected_city.as_deref().unwrap_or("click a city"));
                    ui.end_row();

                    if let Some(length) = cache.preview_length {
                        ui.label("Preview:");
                        ui.label(format!("{length:.0}"));
                        ui.end_row();

                        ui.label("Target:");
                        match &cache.preview_target {
                            Some(target) => {
                                ui.colored_label(egui::Color32::from_rgb(0, 200, 0), target)
                            }
                            None => ui.colored_label(egui::Color32::from_rgb(220, 0, 0), "none"),
                        };
                        ui.end_row();
                    }
                });

            ui.separator();
            ui.label(format!("Roads: {}", cache.roads.len()));
            egui::ScrollArea::vertical()
                .max_height(200.0)
                .show(ui, |ui| {
                    for road in &cache.roads {
                        ui.label(format!(
                            "{} \u{2192} {}  ({:.0}, {} commuters)",
                            road.from, road.to, road.length, road.commuters
                        ));
                    }
                });
        });
}
