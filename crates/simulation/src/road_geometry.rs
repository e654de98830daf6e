//! Geometry of a straight road between two points.
//!
//! The rotation is solved with the law of cosines over the triangle formed by
//! the vertical offset, the horizontal offset and the distance between the two
//! points, then sign-corrected for direction because `acos` alone cannot tell
//! "above" from "below".

use bevy::prelude::*;

/// Rectangular placement of a road on the ground plane.
///
/// `position` is the rectangle's anchor corner, `width` runs along the road
/// and `height` across it. `rotation` is in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RoadPlacement {
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
    pub rotation: f32,
}

impl RoadPlacement {
    /// Length of the road (the rectangle's long side).
    pub fn length(&self) -> f32 {
        self.width
    }

    /// Point the road starts from: the anchor corner shifted back by half
    /// the road width on both axes.
    pub fn start(&self) -> Vec2 {
        self.position + Vec2::splat(self.height / 2.0)
    }

    /// Point the road runs to, `length` units from `start` along `rotation`.
    pub fn end(&self) -> Vec2 {
        self.start() + Vec2::from_angle(self.rotation.to_radians()) * self.width
    }

    /// Midpoint between `start` and `end`.
    pub fn midpoint(&self) -> Vec2 {
        (self.start() + self.end()) / 2.0
    }
}

/// Center of an axis-aligned bounding box.
pub fn bounds_center(bounds: Rect) -> Vec2 {
    Vec2::new(
        (bounds.max.x - bounds.min.x) / 2.0 + bounds.min.x,
        (bounds.max.y - bounds.min.y) / 2.0 + bounds.min.y,
    )
}

/// Solve the placement of a road of `width` that visually connects `b` to `a`.
///
/// The rectangle is anchored at `b` minus half the width on both axes and
/// rotated so that it points towards `a`.
///
/// Coincident points yield a zero-length, unrotated placement. Vertically
/// aligned points (`dx == 0`) would divide by zero in the cosine formula and
/// take its limit instead, a quarter turn.
pub fn solve_road_placement(a: Vec2, b: Vec2, width: f32) -> RoadPlacement {
    let position = Vec2::new(b.x - width / 2.0, b.y - width / 2.0);

    // Euclidean distance between the two points
    let length = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
    if length <= f32::EPSILON {
        return RoadPlacement {
            position,
            width: 0.0,
            height: width,
            rotation: 0.0,
        };
    }

    // Law of cosines, solved for the angle opposite the vertical offset:
    // cos(alpha) = (-dy^2 + length^2 + dx^2) / (2 * length * dx)
    let dy = a.y - b.y;
    let dx = a.x - b.x;
    let cos_alpha = if dx.abs() <= f32::EPSILON {
        0.0
    } else {
        ((-dy.powi(2) + length.powi(2) + dx.powi(2)) / (2.0 * length * dx)).clamp(-1.0, 1.0)
    };
    let rotation = cos_alpha.acos().to_degrees();

    let dir_y = if a.y < b.y { -1.0 } else { 1.0 };

    RoadPlacement {
        position,
        width: length,
        height: width,
        rotation: rotation * dir_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;
    const POS_EPS: f32 = 1e-2;

    fn assert_vec_near(actual: Vec2, expected: Vec2) {
        assert!(
            (actual - expected).length() < POS_EPS,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_horizontal_road_to_the_right() {
        let p = solve_road_placement(Vec2::new(100.0, 0.0), Vec2::ZERO, 10.0);
        assert!((p.width - 100.0).abs() < EPS);
        assert!((p.height - 10.0).abs() < EPS);
        assert!(p.rotation.abs() < EPS, "rotation was {}", p.rotation);
        assert_vec_near(p.position, Vec2::new(-5.0, -5.0));
    }

    #[test]
    fn test_horizontal_road_to_the_left() {
        let p = solve_road_placement(Vec2::new(-50.0, 20.0), Vec2::new(0.0, 20.0), 10.0);
        assert!((p.width - 50.0).abs() < EPS);
        assert!((p.rotation - 180.0).abs() < EPS, "rotation was {}", p.rotation);
    }

    #[test]
    fn test_diagonal_rotation_sign_follows_vertical_direction() {
        let up = solve_road_placement(Vec2::new(10.0, 10.0), Vec2::ZERO, 10.0);
        assert!((up.rotation - 45.0).abs() < EPS, "rotation was {}", up.rotation);

        let down = solve_road_placement(Vec2::new(10.0, -10.0), Vec2::ZERO, 10.0);
        assert!(
            (down.rotation + 45.0).abs() < EPS,
            "rotation was {}",
            down.rotation
        );
    }

    #[test]
    fn test_length_is_euclidean_distance() {
        let p = solve_road_placement(Vec2::new(3.0, 4.0), Vec2::ZERO, 10.0);
        assert!((p.length() - 5.0).abs() < EPS);
    }

    #[test]
    fn test_coincident_points_fall_back_to_zero() {
        let point = Vec2::new(42.0, -7.0);
        let p = solve_road_placement(point, point, 10.0);
        assert_eq!(p.width, 0.0);
        assert_eq!(p.rotation, 0.0);
        assert!(p.rotation.is_finite());
        assert_vec_near(p.position, Vec2::new(37.0, -12.0));
    }

    #[test]
    fn test_vertical_alignment_is_a_quarter_turn() {
        let above = solve_road_placement(Vec2::new(0.0, 30.0), Vec2::ZERO, 10.0);
        assert!((above.rotation - 90.0).abs() < EPS);
        assert!((above.width - 30.0).abs() < EPS);

        let below = solve_road_placement(Vec2::new(0.0, -30.0), Vec2::ZERO, 10.0);
        assert!((below.rotation + 90.0).abs() < EPS);
    }

    #[test]
    fn test_placement_connects_both_points() {
        let a = Vec2::new(-37.0, 81.0);
        let b = Vec2::new(12.5, -3.0);
        let p = solve_road_placement(a, b, 10.0);
        assert_vec_near(p.start(), b);
        assert_vec_near(p.end(), a);
    }

    #[test]
    fn test_swapping_endpoints_keeps_the_same_segment() {
        let pairs = [
            (Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)),
            (Vec2::new(5.0, 5.0), Vec2::new(-20.0, 40.0)),
            (Vec2::new(-3.0, 9.0), Vec2::new(-3.0, -50.0)),
            (Vec2::new(250.0, -10.0), Vec2::new(10.0, 60.0)),
        ];
        for (a, b) in pairs {
            let forward = solve_road_placement(a, b, 10.0);
            let backward = solve_road_placement(b, a, 10.0);

            assert!((forward.width - backward.width).abs() < EPS);
            assert_vec_near(forward.start(), backward.end());
            assert_vec_near(forward.end(), backward.start());

            // Opposite directions along the same line: half a turn apart.
            let diff = (forward.rotation - backward.rotation).rem_euclid(360.0);
            assert!((diff - 180.0).abs() < EPS, "rotations {forward:?} {backward:?}");
        }
    }

    #[test]
    fn test_bounds_center() {
        let bounds = Rect::new(10.0, 20.0, 30.0, 60.0);
        assert_vec_near(bounds_center(bounds), Vec2::new(20.0, 40.0));

        let point = Rect::from_center_size(Vec2::new(7.0, 8.0), Vec2::ZERO);
        assert_vec_near(bounds_center(point), Vec2::new(7.0, 8.0));
    }
}
