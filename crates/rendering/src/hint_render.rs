//! Mesh for the road preview.
//!
//! One mesh entity exists per registered hint. Its transform and tint are
//! refreshed from `RoadBuildingState` every frame while the hint lives.

use bevy::prelude::*;

use simulation::road_building::{HintId, HintLifecycleEvent, RoadBuildingState};

use crate::palette::hint_color;
use crate::road_render::{placement_transform, RoadRenderAssets};

/// Just above committed roads, still under the cities.
const HINT_Y: f32 = 0.75;
const HINT_THICKNESS: f32 = 1.5;

#[derive(Component)]
pub struct HintMesh {
    pub hint: HintId,
}

/// Spawn and despawn hint meshes as the road builder registers and
/// unregisters its preview.
pub fn sync_hint_lifecycle(
    mut commands: Commands,
    mut events: EventReader<HintLifecycleEvent>,
    existing: Query<(Entity, &HintMesh)>,
    assets: Res<RoadRenderAssets>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for event in events.read() {
        match *event {
            HintLifecycleEvent::Registered(hint) => {
                commands.spawn((
                    HintMesh { hint },
                    Mesh3d(assets.unit_box.clone()),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: Color::NONE,
                        alpha_mode: AlphaMode::Blend,
                        ..default()
                    })),
                    Transform::default(),
                ));
            }
            HintLifecycleEvent::Unregistered(hint) => {
                for (entity, mesh) in &existing {
                    if mesh.hint == hint {
                        commands.entity(entity).despawn();
                    }
                }
            }
        }
    }
}

pub fn update_hint_mesh(
    state: Res<RoadBuildingState>,
    mut hints: Query<(&HintMesh, &mut Transform, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(hint) = &state.hint else {
        return;
    };

    for (mesh, mut transform, material) in &mut hints {
        if mesh.hint != hint.id {
            continue;
        }
        *transform = placement_transform(&hint.placement, HINT_Y, HINT_THICKNESS);

        let color = hint_color(hint.tint);
        if materials.get(&material.0).is_some_and(|m| m.base_color != color) {
            if let Some(m) = materials.get_mut(&material.0) {
                m.base_color = color;
            }
        }
    }
}
