//! Shape generation for a render frame
//!
//! Everything is emitted as a triangle list in screen space (y down). Outlines
//! are stroked as thin quads, two triangles per edge.

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::sim::{ObstacleSilhouette, RenderFrame, ShipPose};

/// Stroke width used for every outline, scaled from the ship size
pub fn line_width(ship_radius: f32) -> f32 {
    ship_radius * 2.0 / 20.0
}

/// Ship triangle: nose, rear left, rear right
pub fn ship_points(ship: &ShipPose) -> [Vec2; 3] {
    let (sin, cos) = ship.heading.sin_cos();
    let r = ship.radius;
    let (x, y) = (ship.pos.x, ship.pos.y);
    [
        Vec2::new(x + 4.0 / 3.0 * r * cos, y - 4.0 / 3.0 * r * sin),
        Vec2::new(
            x - r * (2.0 / 3.0 * cos + sin),
            y + r * (2.0 / 3.0 * sin - cos),
        ),
        Vec2::new(
            x - r * (2.0 / 3.0 * cos - sin),
            y + r * (2.0 / 3.0 * sin + cos),
        ),
    ]
}

/// Thrust flame behind the ship: rear left, tail tip, rear right
pub fn flame_points(ship: &ShipPose) -> [Vec2; 3] {
    let (sin, cos) = ship.heading.sin_cos();
    let r = ship.radius;
    let (x, y) = (ship.pos.x, ship.pos.y);
    [
        Vec2::new(
            x - r * (2.0 / 3.0 * cos + 0.5 * sin),
            y + r * (2.0 / 3.0 * sin - 0.5 * cos),
        ),
        Vec2::new(x - r * 4.0 / 3.0 * cos, y + r * 4.0 / 3.0 * sin),
        Vec2::new(
            x - r * (2.0 / 3.0 * cos - 0.5 * sin),
            y + r * (2.0 / 3.0 * sin + 0.5 * cos),
        ),
    ]
}

/// Stroke a single segment as a quad
pub fn segment(p1: Vec2, p2: Vec2, width: f32, color: [f32; 4], out: &mut Vec<Vertex>) {
    let dir = (p2 - p1).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let v1a = p1 + perp;
    let v1b = p1 - perp;
    let v2a = p2 + perp;
    let v2b = p2 - perp;

    out.push(Vertex::new(v1a.x, v1a.y, color));
    out.push(Vertex::new(v1b.x, v1b.y, color));
    out.push(Vertex::new(v2a.x, v2a.y, color));

    out.push(Vertex::new(v2a.x, v2a.y, color));
    out.push(Vertex::new(v1b.x, v1b.y, color));
    out.push(Vertex::new(v2b.x, v2b.y, color));
}

/// Stroke a closed polygon
pub fn outline(points: &[Vec2], width: f32, color: [f32; 4], out: &mut Vec<Vertex>) {
    if points.len() < 2 {
        return;
    }
    for (i, &p1) in points.iter().enumerate() {
        let p2 = points[(i + 1) % points.len()];
        segment(p1, p2, width, color, out);
    }
}

/// Fill a triangle
pub fn triangle(points: &[Vec2; 3], color: [f32; 4], out: &mut Vec<Vertex>) {
    for p in points {
        out.push(Vertex::new(p.x, p.y, color));
    }
}

/// Asteroid outline
pub fn asteroid(obstacle: &ObstacleSilhouette, width: f32, out: &mut Vec<Vertex>) {
    outline(&obstacle.points(), width, colors::ASTEROID, out);
}

/// Color to fill the frame's world area with before drawing its vertices
pub fn clear_color() -> [f32; 4] {
    colors::BACKGROUND
}

/// Triangle list for a whole frame, drawn after clearing to
/// [`clear_color`]: flame, ship, then asteroids in order.
pub fn frame_vertices(frame: &RenderFrame) -> Vec<Vertex> {
    let width = line_width(frame.ship.radius);
    let mut out = Vec::new();

    if frame.ship.thrusting {
        let flame = flame_points(&frame.ship);
        triangle(&flame, colors::FLAME_FILL, &mut out);
        outline(&flame, width, colors::FLAME_STROKE, &mut out);
    }

    outline(&ship_points(&frame.ship), width, colors::SHIP, &mut out);

    for obstacle in &frame.obstacles {
        asteroid(obstacle, width, &mut out);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WorldBounds;
    use std::f32::consts::FRAC_PI_2;

    fn pose(thrusting: bool) -> ShipPose {
        ShipPose {
            pos: Vec2::new(400.0, 300.0),
            heading: FRAC_PI_2,
            radius: 15.0,
            thrusting,
        }
    }

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn test_ship_points_facing_up() {
        let [nose, left, right] = ship_points(&pose(false));
        // Nose is above the center on screen
        assert!(close(nose, Vec2::new(400.0, 280.0)));
        assert!(close(left, Vec2::new(385.0, 310.0)));
        assert!(close(right, Vec2::new(415.0, 310.0)));
    }

    #[test]
    fn test_flame_behind_ship() {
        let [_, tip, _] = flame_points(&pose(true));
        assert!(close(tip, Vec2::new(400.0, 320.0)));
    }

    #[test]
    fn test_outline_vertex_count() {
        let mut out = Vec::new();
        let square = [Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y];
        outline(&square, 1.0, colors::SHIP, &mut out);
        assert_eq!(out.len(), 4 * 6);

        out.clear();
        outline(&[Vec2::ZERO], 1.0, colors::SHIP, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_frame_vertices() {
        let obstacle = ObstacleSilhouette {
            pos: Vec2::new(100.0, 100.0),
            radius: 50.0,
            angle: 0.0,
            vertex_count: 5,
            offsets: vec![1.0; 5],
        };
        let mut frame = RenderFrame {
            tick: 1,
            world: WorldBounds::new(800.0, 600.0),
            ship: pose(false),
            obstacles: vec![obstacle],
        };

        // Ship outline (3 edges) + asteroid (5 edges)
        assert_eq!(frame_vertices(&frame).len(), (3 + 5) * 6);

        // Flame adds a filled triangle and its outline
        frame.ship.thrusting = true;
        assert_eq!(frame_vertices(&frame).len(), 3 + 3 * 6 + (3 + 5) * 6);
    }

    #[test]
    fn test_clear_color_is_opaque_and_distinct() {
        let clear = clear_color();
        assert_eq!(clear[3], 1.0);
        for color in [colors::SHIP, colors::FLAME_FILL, colors::FLAME_STROKE, colors::ASTEROID] {
            assert_ne!(color, clear);
        }
    }

    #[test]
    fn test_line_width() {
        assert!((line_width(15.0) - 1.5).abs() < 1e-6);
    }
}
