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

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.07, 0.09, 0.15, 1.0];
    /// Faint strip marking where catches happen
    pub const CATCH_BAND: [f32; 4] = [1.0, 1.0, 1.0, 0.04];
    pub const CATCHER: [f32; 4] = [0.98, 0.75, 0.14, 1.0];
    pub const CATCHER_RIM: [f32; 4] = [0.85, 0.47, 0.03, 1.0];
    pub const TILE: [f32; 4] = [0.95, 0.96, 0.98, 1.0];
    pub const OBSTACLE: [f32; 4] = [0.86, 0.15, 0.15, 1.0];
    pub const OBSTACLE_MARK: [f32; 4] = [1.0, 1.0, 1.0, 0.9];

    /// Brand tint per catalog entry, in catalog order
    pub const LOGOS: [[f32; 4]; 4] = [
        [0.06, 0.64, 0.50, 1.0], // OpenAI
        [0.26, 0.52, 0.96, 1.0], // Google AI
        [0.95, 0.31, 0.13, 1.0], // Microsoft AI
        [0.0, 0.40, 0.90, 1.0],  // Meta AI
    ];

    pub fn logo(index: usize) -> [f32; 4] {
        LOGOS[index % LOGOS.len()]
    }
}
