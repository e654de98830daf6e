//! Pointer source for road building.
//!
//! Casts the cursor onto the ground plane, writes the world-space pointer, and
//! sets each city's `hovered` / `clicked` flags ahead of the road builder.
//! While egui owns the pointer, or there is no window or camera to cast from,
//! every flag is cleared.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use simulation::candidates::CandidateRegistry;
use simulation::road_building::PointerWorldPos;

/// Intersect a camera ray with the Y=0 ground plane.
/// Ground X maps to world X and ground Z to world Y.
pub fn ground_hit(ray: Ray3d) -> Option<Vec2> {
    if ray.direction.y.abs() <= 0.001 {
        return None;
    }
    let t = -ray.origin.y / ray.direction.y;
    if t <= 0.0 {
        return None;
    }
    let hit = ray.origin + ray.direction * t;
    Some(Vec2::new(hit.x, hit.z))
}

/// Flag every candidate under `pointer` as hovered, and as clicked too when
/// the button went down this frame. `None` clears all flags.
pub fn apply_pointer_flags(registry: &mut CandidateRegistry, pointer: Option<Vec2>, pressed: bool) {
    let Some(pos) = pointer else {
        registry.clear_pointer_flags();
        return;
    };
    for candidate in registry.iter_mut() {
        let hovered = candidate.bounds.contains(pos);
        candidate.pointer.hovered = hovered;
        candidate.pointer.clicked = hovered && pressed;
    }
}

/// Egui is using the pointer (hovering a panel or mid-drag), so clicks must
/// not reach the cities underneath.
fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    let ctx = contexts.ctx_mut();
    ctx.wants_pointer_input() || ctx.is_pointer_over_area()
}

/// Ground point under the cursor, or `None` when anything between the window
/// and the ground is missing.
fn cursor_ground_hit(
    windows: &Query<&Window>,
    camera_q: &Query<(&Camera, &GlobalTransform), With<Camera3d>>,
) -> Option<Vec2> {
    let window = windows.get_single().ok()?;
    let (camera, cam_transform) = camera_q.get_single().ok()?;
    let screen_pos = window.cursor_position()?;
    let ray = camera.viewport_to_world(cam_transform, screen_pos).ok()?;
    ground_hit(ray)
}

pub fn update_pointer(
    windows: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut contexts: EguiContexts,
    mut pointer: ResMut<PointerWorldPos>,
    mut registry: ResMut<CandidateRegistry>,
) {
    let hit = if egui_wants_pointer(&mut contexts) {
        None
    } else {
        cursor_ground_hit(&windows, &camera_q)
    };

    if let Some(world_pos) = hit {
        pointer.world_pos = world_pos;
    }
    apply_pointer_flags(&mut registry, hit, buttons.just_pressed(MouseButton::Left));
}
