//! WebGPU rendering module
//!
//! Flat-colored triangles for the play area; text and screens live in the
//! DOM overlay.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderState, area_to_ndc};
pub use vertex::Vertex;
