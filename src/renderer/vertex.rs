//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for frame elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const SHIP: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const FLAME_FILL: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const FLAME_STROKE: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    /// Slate gray
    pub const ASTEROID: [f32; 4] = [0.439, 0.502, 0.565, 1.0];
}
