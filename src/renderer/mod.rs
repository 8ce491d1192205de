//! Render geometry
//!
//! Turns a [`crate::sim::RenderFrame`] into vertex data. Surface acquisition and
//! drawing are left to the host.

pub mod shapes;
pub mod vertex;

pub use shapes::{clear_color, frame_vertices};
pub use vertex::{Vertex, colors};
