use bevy::prelude::*;

use simulation::config::{WORLD_HEIGHT, WORLD_WIDTH};
use simulation::simulation_sets::RoadBuildingSet;

pub mod camera;
pub mod city_render;
pub mod cursor;
pub mod hint_render;
pub mod palette;
pub mod pointer;
pub mod road_render;

use camera::{CameraDrag, OrbitCamera};
use cursor::CursorFeedback;
use road_render::RoadRenderAssets;

const GROUND_COLOR: Color = Color::srgb(0.86, 0.84, 0.78);

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitCamera>()
            .init_resource::<CameraDrag>()
            .init_resource::<CursorFeedback>()
            .init_resource::<RoadRenderAssets>()
            .add_systems(Startup, (camera::setup_camera, setup_scene))
            .add_systems(
                Update,
                (
                    camera::camera_keyboard,
                    camera::camera_mouse_drag,
                    camera::camera_zoom,
                )
                    .before(camera::apply_orbit_camera),
            )
            .add_systems(Update, camera::apply_orbit_camera)
            .add_systems(
                Update,
                pointer::update_pointer.in_set(RoadBuildingSet::Pointer),
            )
            .add_systems(
                Update,
                (
                    city_render::spawn_city_meshes,
                    city_render::apply_city_visuals,
                    hint_render::sync_hint_lifecycle,
                    hint_render::update_hint_mesh,
                    road_render::spawn_road_meshes,
                    cursor::track_cursor_feedback,
                    cursor::apply_cursor_icon,
                )
                    .chain()
                    .in_set(RoadBuildingSet::Presentation),
            );
    }
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Ambient light for baseline illumination
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.9, 0.9, 1.0),
        brightness: 300.0,
    });

    // Directional light (sun) angled from above
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::XYZ,
            -std::f32::consts::FRAC_PI_3,
            std::f32::consts::FRAC_PI_6,
            0.0,
        )),
    ));

    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(WORLD_WIDTH, WORLD_HEIGHT))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: GROUND_COLOR,
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::from_xyz(WORLD_WIDTH / 2.0, 0.0, WORLD_HEIGHT / 2.0),
    ));
}
