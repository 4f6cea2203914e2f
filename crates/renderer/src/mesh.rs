//! Unit primitives uploaded once at init.

use asset::MeshData;
use asset::primitives::{self, CYLINDER_SEGMENTS, SPHERE_RINGS, SPHERE_SEGMENTS};
use corelib::{MeshKind, RenderMode};
use wgpu::util::DeviceExt;
use wgpu::{Buffer, BufferUsages, Device};

use crate::uniforms::Vertex;

/// CPU geometry behind each mesh kind.
pub fn mesh_data(kind: MeshKind) -> MeshData {
    match kind {
        MeshKind::Cube => primitives::cube(),
        MeshKind::Sphere => primitives::sphere(SPHERE_SEGMENTS, SPHERE_RINGS),
        MeshKind::Cylinder => primitives::cylinder(CYLINDER_SEGMENTS),
        MeshKind::Pyramid => primitives::pyramid(),
    }
}

pub struct GpuMesh {
    vertex_buf: Buffer,
    triangle_buf: Buffer,
    triangle_count: u32,
    line_buf: Buffer,
    line_count: u32,
}

impl GpuMesh {
    pub fn upload(device: &Device, kind: MeshKind) -> Self {
        let data = mesh_data(kind);
        let vertices: Vec<Vertex> = data.vertices.iter().map(Vertex::from).collect();
        let lines = data.edge_indices();
        log::debug!(
            "Uploading {:?}: {} vertices, {} triangles, {} edges",
            kind,
            vertices.len(),
            data.triangle_count(),
            lines.len() / 2
        );

        let vertex_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{kind:?} VB")),
            contents: bytemuck::cast_slice(&vertices),
            usage: BufferUsages::VERTEX,
        });
        let triangle_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{kind:?} IB")),
            contents: bytemuck::cast_slice(&data.indices),
            usage: BufferUsages::INDEX,
        });
        let line_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{kind:?} edges IB")),
            contents: bytemuck::cast_slice(&lines),
            usage: BufferUsages::INDEX,
        });

        Self {
            vertex_buf,
            triangle_buf,
            triangle_count: data.indices.len() as u32,
            line_buf,
            line_count: lines.len() as u32,
        }
    }

    /// Bind the buffers for `mode` and return the index count to draw.
    pub fn bind(&self, rpass: &mut wgpu::RenderPass<'_>, mode: RenderMode) -> u32 {
        rpass.set_vertex_buffer(0, self.vertex_buf.slice(..));
        match mode {
            RenderMode::Filled => {
                rpass.set_index_buffer(self.triangle_buf.slice(..), wgpu::IndexFormat::Uint32);
                self.triangle_count
            }
            RenderMode::Wireframe => {
                rpass.set_index_buffer(self.line_buf.slice(..), wgpu::IndexFormat::Uint32);
                self.line_count
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_valid_geometry() {
        for kind in MeshKind::ALL {
            let data = mesh_data(kind);
            assert!(data.is_valid(), "{kind:?}");
            assert!(!data.edge_indices().is_empty(), "{kind:?}");
        }
    }
}
