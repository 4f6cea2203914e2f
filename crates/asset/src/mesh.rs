//! CPU-side mesh representation produced by the geometry providers.

use std::collections::BTreeSet;

/// Vertex with position/normal. Values are in object space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl MeshVertex {
    pub fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }
}

/// Indexed triangle mesh with tightly-packed vertices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new(vertices: Vec<MeshVertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Returns `true` if the buffers are non-empty, the index count is a whole
    /// number of triangles and every index points at a vertex.
    pub fn is_valid(&self) -> bool {
        !self.vertices.is_empty()
            && !self.indices.is_empty()
            && self.indices.len() % 3 == 0
            && self
                .indices
                .iter()
                .all(|&i| (i as usize) < self.vertices.len())
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Line-list indices covering each triangle edge once.
    ///
    /// Edges are matched by vertex position, so seams between faces that
    /// duplicate vertices for flat normals do not produce doubled lines.
    pub fn edge_indices(&self) -> Vec<u32> {
        let key = |i: u32| self.vertices[i as usize].position.map(f32::to_bits);

        let mut seen = BTreeSet::new();
        let mut lines = Vec::new();
        for tri in self.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let (ka, kb) = (key(a), key(b));
                if ka == kb {
                    continue;
                }
                let edge = if ka < kb { (ka, kb) } else { (kb, ka) };
                if seen.insert(edge) {
                    lines.push(a);
                    lines.push(b);
                }
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> MeshData {
        let n = [0.0, 0.0, 1.0];
        MeshData::new(
            vec![
                MeshVertex::new([0.0, 0.0, 0.0], n),
                MeshVertex::new([1.0, 0.0, 0.0], n),
                MeshVertex::new([1.0, 1.0, 0.0], n),
                MeshVertex::new([0.0, 1.0, 0.0], n),
            ],
            vec![0, 1, 2, 2, 3, 0],
        )
    }

    #[test]
    fn mesh_data_validity() {
        assert!(quad().is_valid());
        assert!(!MeshData::default().is_valid());

        let mut broken = quad();
        broken.indices.push(9);
        assert!(!broken.is_valid());
    }

    #[test]
    fn shared_diagonal_is_emitted_once() {
        let edges = quad().edge_indices();
        // four sides plus the diagonal
        assert_eq!(edges.len(), 5 * 2);
    }

    #[test]
    fn duplicated_positions_share_edges() {
        let mut mesh = quad();
        // second triangle rebuilt on copies of vertices 0 and 2
        mesh.vertices.push(mesh.vertices[0]);
        mesh.vertices.push(mesh.vertices[2]);
        mesh.indices = vec![0, 1, 2, 5, 3, 4];
        assert_eq!(mesh.edge_indices().len(), 5 * 2);
    }
}
