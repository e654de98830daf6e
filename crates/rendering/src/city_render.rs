use bevy::prelude::*;

use simulation::candidates::{CandidateRegistry, CandidateVisual};
use simulation::cities::City;

use crate::palette::{candidate_style, SELECTED_BORDER_COLOR, SELECTED_BORDER_WIDTH};

const CITY_HEIGHT: f32 = 12.0;
const BORDER_HEIGHT: f32 = 3.0;

/// Child of a city entity, shown while the city is the selected road start.
#[derive(Component)]
pub struct CityBorder;

/// Give every newly spawned city a box mesh with its own material, plus a
/// hidden border plate.
pub fn spawn_city_meshes(
    mut commands: Commands,
    cities: Query<(Entity, &City), Added<City>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (entity, city) in &cities {
        let size = city.bounds.size();
        let center = city.center();
        let style = candidate_style(CandidateVisual::Idle);

        let body_mesh = meshes.add(Cuboid::new(size.x, CITY_HEIGHT, size.y));
        let body_material = materials.add(StandardMaterial {
            base_color: style.fill,
            ..default()
        });
        let border_mesh = meshes.add(Cuboid::new(
            size.x + 2.0 * SELECTED_BORDER_WIDTH,
            BORDER_HEIGHT,
            size.y + 2.0 * SELECTED_BORDER_WIDTH,
        ));
        let border_material = materials.add(StandardMaterial {
            base_color: SELECTED_BORDER_COLOR,
            ..default()
        });

        commands
            .entity(entity)
            .insert((
                Mesh3d(body_mesh),
                MeshMaterial3d(body_material),
                Transform::from_xyz(center.x, CITY_HEIGHT / 2.0, center.y),
            ))
            .with_children(|parent| {
                parent.spawn((
                    CityBorder,
                    Mesh3d(border_mesh),
                    MeshMaterial3d(border_material),
                    Transform::from_xyz(0.0, (BORDER_HEIGHT - CITY_HEIGHT) / 2.0, 0.0),
                    Visibility::Hidden,
                ));
            });
    }
}

/// Push each candidate's visual state onto its city mesh.
pub fn apply_city_visuals(
    registry: Res<CandidateRegistry>,
    bodies: Query<(&MeshMaterial3d<StandardMaterial>, &Children), With<City>>,
    mut borders: Query<&mut Visibility, With<CityBorder>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !registry.is_changed() {
        return;
    }

    for candidate in registry.iter() {
        let Ok((material, children)) = bodies.get(candidate.id) else {
            continue;
        };
        let style = candidate_style(candidate.visual);

        if materials
            .get(&material.0)
            .is_some_and(|m| m.base_color != style.fill)
        {
            if let Some(m) = materials.get_mut(&material.0) {
                m.base_color = style.fill;
            }
        }

        let border_visibility = if style.border.is_some() {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        for child in children.iter() {
            if let Ok(mut visibility) = borders.get_mut(*child) {
                if *visibility != border_visibility {
                    *visibility = border_visibility;
                }
            }
        }
    }
}
