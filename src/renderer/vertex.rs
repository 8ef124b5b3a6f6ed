//! Vertex type and palette

use bytemuck::{Pod, Zeroable};

/// 2D vertex in logical screen coordinates with an RGBA color
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
        const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
            wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}

/// Same color with a different alpha
pub const fn with_alpha(color: [f32; 4], alpha: f32) -> [f32; 4] {
    [color[0], color[1], color[2], alpha]
}

/// Palette (sRGB, straight alpha)
pub mod colors {
    pub const SKY_TOP: [f32; 4] = [0.302, 0.722, 1.0, 1.0];
    pub const SKY_HORIZON: [f32; 4] = [0.702, 0.878, 1.0, 1.0];
    pub const CLOUD: [f32; 4] = [1.0, 1.0, 1.0, 0.7];
    pub const GRASS_TOP: [f32; 4] = [0.298, 0.686, 0.314, 1.0];
    pub const GRASS_BOTTOM: [f32; 4] = [0.180, 0.490, 0.196, 1.0];
    pub const TUFT: [f32; 4] = [0.220, 0.560, 0.235, 1.0];
    pub const TRUNK: [f32; 4] = [0.427, 0.298, 0.196, 1.0];
    pub const CANOPY: [f32; 4] = [0.196, 0.478, 0.220, 1.0];
    pub const HIVE: [f32; 4] = [0.867, 0.655, 0.196, 1.0];
    pub const HIVE_BAND: [f32; 4] = [0.690, 0.478, 0.118, 1.0];
    pub const HIVE_DOOR: [f32; 4] = [0.200, 0.120, 0.050, 1.0];
    pub const FROG: [f32; 4] = [0.380, 0.690, 0.250, 1.0];
    pub const BOSS: [f32; 4] = [0.260, 0.420, 0.180, 1.0];
    pub const FROG_BELLY: [f32; 4] = [0.800, 0.880, 0.560, 1.0];
    pub const EYE: [f32; 4] = [0.050, 0.050, 0.050, 1.0];
    pub const WASP: [f32; 4] = [1.0, 0.800, 0.100, 1.0];
    pub const STRIPE: [f32; 4] = [0.120, 0.100, 0.080, 1.0];
    pub const WING: [f32; 4] = [0.627, 0.824, 0.961, 0.55];
    pub const FRIEND_WING: [f32; 4] = [0.627, 0.824, 0.961, 0.45];
    pub const QUEEN_CROWN: [f32; 4] = [1.0, 0.843, 0.0, 1.0];
    pub const SHADOW: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const STICK_BASE: [f32; 4] = [1.0, 1.0, 1.0, 0.15];
    pub const STICK_KNOB: [f32; 4] = [1.0, 1.0, 1.0, 0.45];
    pub const OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 0.7];
    pub const LETTERBOX: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}
