use bevy::prelude::*;

use simulation::road_building::RoadBuiltEvent;
use simulation::road_geometry::RoadPlacement;
use simulation::roads::RoadId;

use crate::palette::ROAD_COLOR;

/// Committed roads sit on the ground, under the hint and the cities.
pub const ROAD_Y: f32 = 0.5;
pub const ROAD_THICKNESS: f32 = 1.0;

/// Shortest mesh drawn for a placement; keeps the scale invertible.
const MIN_DRAWN_LENGTH: f32 = 0.01;

/// Marker component for committed road mesh entities.
#[derive(Component)]
pub struct RoadMesh {
    pub road: RoadId,
}

/// Shared unit box mesh for roads and the hint, plus the road material.
#[derive(Resource)]
pub struct RoadRenderAssets {
    pub unit_box: Handle<Mesh>,
    pub road_material: Handle<StandardMaterial>,
}

impl FromWorld for RoadRenderAssets {
    fn from_world(world: &mut World) -> Self {
        let unit_box = world
            .resource_mut::<Assets<Mesh>>()
            .add(Cuboid::new(1.0, 1.0, 1.0));
        let road_material = world
            .resource_mut::<Assets<StandardMaterial>>()
            .add(StandardMaterial {
                base_color: ROAD_COLOR,
                perceptual_roughness: 0.9,
                ..default()
            });
        Self {
            unit_box,
            road_material,
        }
    }
}

/// Transform that stretches the unit box over `placement` at height `y`.
///
/// Ground X is world X and ground Z is world Y, so a counter-clockwise
/// rotation in world space is a negative turn about the up axis.
pub fn placement_transform(placement: &RoadPlacement, y: f32, thickness: f32) -> Transform {
    let mid = placement.midpoint();
    Transform {
        translation: Vec3::new(mid.x, y, mid.y),
        rotation: Quat::from_rotation_y(-placement.rotation.to_radians()),
        scale: Vec3::new(
            placement.length().max(MIN_DRAWN_LENGTH),
            thickness,
            placement.height,
        ),
    }
}

/// Spawn a mesh for every road committed this frame.
pub fn spawn_road_meshes(
    mut commands: Commands,
    mut built: EventReader<RoadBuiltEvent>,
    assets: Res<RoadRenderAssets>,
) {
    for event in built.read() {
        commands.spawn((
            RoadMesh { road: event.road },
            Mesh3d(assets.unit_box.clone()),
            MeshMaterial3d(assets.road_material.clone()),
            placement_transform(&event.placement, ROAD_Y, ROAD_THICKNESS),
        ));
    }
}
