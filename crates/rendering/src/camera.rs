//! Map camera orbiting a focus point on the ground plane.
//!
//! Left click belongs to city picking, so the camera is driven by the
//! keyboard, the middle button (pan), the right button (orbit) and the wheel.

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use simulation::config::{WORLD_HEIGHT, WORLD_WIDTH};

const KEY_PAN_SPEED: f32 = 400.0;
const ZOOM_STEP: f32 = 0.15;
const MIN_DISTANCE: f32 = 150.0;
const MAX_DISTANCE: f32 = 2500.0;
const MIN_PITCH: f32 = 35.0 * std::f32::consts::PI / 180.0;
const MAX_PITCH: f32 = 89.0 * std::f32::consts::PI / 180.0;
const ORBIT_SENSITIVITY: f32 = 0.005;
/// How far the focus may wander past the world edge.
const FOCUS_MARGIN: f32 = 200.0;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Ground point the camera looks at.
    pub focus: Vec3,
    /// Turn about the up axis, radians.
    pub yaw: f32,
    /// Elevation above the ground, radians.
    pub pitch: f32,
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            focus: Vec3::new(WORLD_WIDTH / 2.0, 0.0, WORLD_HEIGHT / 2.0),
            yaw: 0.0,
            pitch: 80.0_f32.to_radians(),
            distance: 1100.0,
        }
    }
}

impl OrbitCamera {
    pub fn transform(&self) -> Transform {
        let offset = Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        ) * self.distance;
        Transform::from_translation(self.focus + offset).looking_at(self.focus, Vec3::Y)
    }

    /// Move the focus by a screen-space delta, turned by the current yaw and
    /// scaled with zoom.
    pub fn pan(&mut self, screen_delta: Vec2) {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let scale = self.distance / 1000.0;
        self.focus.x += (screen_delta.x * cos_yaw + screen_delta.y * sin_yaw) * scale;
        self.focus.z += (-screen_delta.x * sin_yaw + screen_delta.y * cos_yaw) * scale;
        self.focus.x = self.focus.x.clamp(-FOCUS_MARGIN, WORLD_WIDTH + FOCUS_MARGIN);
        self.focus.z = self.focus.z.clamp(-FOCUS_MARGIN, WORLD_HEIGHT + FOCUS_MARGIN);
    }

    pub fn orbit(&mut self, screen_delta: Vec2) {
        self.yaw += screen_delta.x * ORBIT_SENSITIVITY;
        self.pitch = (self.pitch - screen_delta.y * ORBIT_SENSITIVITY).clamp(MIN_PITCH, MAX_PITCH);
    }

    /// Positive steps zoom in.
    pub fn zoom(&mut self, steps: f32) {
        self.distance = (self.distance * (1.0 - steps * ZOOM_STEP)).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    Pan,
    Orbit,
}

/// Mouse drag in progress, if any.
#[derive(Resource, Debug, Default)]
pub struct CameraDrag {
    pub mode: Option<DragMode>,
    pub last_pos: Vec2,
}

pub fn setup_camera(mut commands: Commands, orbit: Res<OrbitCamera>) {
    commands.spawn((Camera3d::default(), orbit.transform()));
}

pub fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    mut cameras: Query<&mut Transform, With<Camera3d>>,
) {
    if !orbit.is_changed() {
        return;
    }
    if let Ok(mut transform) = cameras.get_single_mut() {
        *transform = orbit.transform();
    }
}

/// WASD / arrow keys pan relative to the current yaw.
pub fn camera_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let bindings = [
        (KeyCode::KeyW, KeyCode::ArrowUp, Vec2::NEG_Y),
        (KeyCode::KeyS, KeyCode::ArrowDown, Vec2::Y),
        (KeyCode::KeyA, KeyCode::ArrowLeft, Vec2::NEG_X),
        (KeyCode::KeyD, KeyCode::ArrowRight, Vec2::X),
    ];
    let dir: Vec2 = bindings
        .iter()
        .filter(|(key, alt, _)| keys.pressed(*key) || keys.pressed(*alt))
        .map(|(_, _, dir)| *dir)
        .sum();

    if dir != Vec2::ZERO {
        orbit.pan(dir.normalize() * KEY_PAN_SPEED * time.delta_secs());
    }
}

/// Middle button drags the map, right button orbits.
pub fn camera_mouse_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut drag: ResMut<CameraDrag>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(pos) = window.cursor_position() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Middle) {
        drag.mode = Some(DragMode::Pan);
        drag.last_pos = pos;
    } else if buttons.just_pressed(MouseButton::Right) {
        drag.mode = Some(DragMode::Orbit);
        drag.last_pos = pos;
    }

    let released = match drag.mode {
        Some(DragMode::Pan) => !buttons.pressed(MouseButton::Middle),
        Some(DragMode::Orbit) => !buttons.pressed(MouseButton::Right),
        None => false,
    };
    if released {
        drag.mode = None;
    }

    let delta = pos - drag.last_pos;
    match drag.mode {
        Some(DragMode::Pan) => orbit.pan(-delta),
        Some(DragMode::Orbit) => orbit.orbit(delta),
        None => return,
    }
    drag.last_pos = pos;
}

pub fn camera_zoom(mut wheel: EventReader<MouseWheel>, mut orbit: ResMut<OrbitCamera>) {
    for event in wheel.read() {
        let steps = match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y / 100.0,
        };
        orbit.zoom(steps);
    }
}
