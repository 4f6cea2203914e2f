//! GPU-side layouts of vertices and uniforms.

use bytemuck::{Pod, Zeroable};
use corelib::{DrawCommand, Frame};
use wgpu::{VertexBufferLayout, VertexStepMode};

/// Vertex: position + normal.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub const LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3],
    };
}

impl From<&asset::MeshVertex> for Vertex {
    fn from(v: &asset::MeshVertex) -> Self {
        Self {
            pos: v.position,
            normal: v.normal,
        }
    }
}

/// Per-frame UBO (group 0).
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct FrameUniform {
    pub projection: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub light_dir: [f32; 4],
}

impl From<&Frame<'_>> for FrameUniform {
    fn from(frame: &Frame<'_>) -> Self {
        Self {
            projection: frame.projection.to_cols_array_2d(),
            view: frame.view.to_cols_array_2d(),
            light_dir: frame.light_dir.extend(0.0).to_array(),
        }
    }
}

/// Per-draw UBO (group 1, dynamic offset).
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct DrawUniform {
    pub model_view: [[f32; 4]; 4],
    pub normals: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl From<&DrawCommand> for DrawUniform {
    fn from(cmd: &DrawCommand) -> Self {
        let [r, g, b] = cmd.color;
        Self {
            model_view: cmd.model_view.to_cols_array_2d(),
            normals: cmd.normals.to_cols_array_2d(),
            color: [r, g, b, 1.0],
        }
    }
}

pub const DRAW_UNIFORM_SIZE: u64 = std::mem::size_of::<DrawUniform>() as u64;

/// Distance between consecutive draws in the dynamic uniform buffer.
pub fn draw_stride(min_alignment: u32) -> u64 {
    let align = u64::from(min_alignment.max(1));
    DRAW_UNIFORM_SIZE.div_ceil(align) * align
}

/// Pack every draw at its stride-aligned slot.
pub fn pack_draws(draws: &[DrawCommand], stride: u64) -> Vec<u8> {
    let stride = stride as usize;
    let mut bytes = vec![0u8; draws.len() * stride];
    for (slot, cmd) in bytes.chunks_exact_mut(stride).zip(draws) {
        let uniform = DrawUniform::from(cmd);
        slot[..DRAW_UNIFORM_SIZE as usize].copy_from_slice(bytemuck::bytes_of(&uniform));
    }
    bytes
}
