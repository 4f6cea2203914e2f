//! Unit primitives centred at the origin, fitting the `[-0.5, 0.5]` cube.
//!
//! Round shapes (cylinder, pyramid apex) are built along +Y. All triangles are
//! counter-clockwise when seen from outside.

use std::f32::consts::{PI, TAU};

use crate::mesh::{MeshData, MeshVertex};

pub const SPHERE_SEGMENTS: u32 = 24;
pub const SPHERE_RINGS: u32 = 16;
pub const CYLINDER_SEGMENTS: u32 = 24;

/// Cube with four vertices per face for flat normals.
pub fn cube() -> MeshData {
    #[rustfmt::skip]
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        ([ 0.0,  0.0,  1.0], [[-0.5, -0.5,  0.5], [ 0.5, -0.5,  0.5], [ 0.5,  0.5,  0.5], [-0.5,  0.5,  0.5]]),
        ([ 0.0,  0.0, -1.0], [[ 0.5, -0.5, -0.5], [-0.5, -0.5, -0.5], [-0.5,  0.5, -0.5], [ 0.5,  0.5, -0.5]]),
        ([ 0.0,  1.0,  0.0], [[-0.5,  0.5,  0.5], [ 0.5,  0.5,  0.5], [ 0.5,  0.5, -0.5], [-0.5,  0.5, -0.5]]),
        ([ 0.0, -1.0,  0.0], [[-0.5, -0.5, -0.5], [ 0.5, -0.5, -0.5], [ 0.5, -0.5,  0.5], [-0.5, -0.5,  0.5]]),
        ([ 1.0,  0.0,  0.0], [[ 0.5, -0.5,  0.5], [ 0.5, -0.5, -0.5], [ 0.5,  0.5, -0.5], [ 0.5,  0.5,  0.5]]),
        ([-1.0,  0.0,  0.0], [[-0.5, -0.5, -0.5], [-0.5, -0.5,  0.5], [-0.5,  0.5,  0.5], [-0.5,  0.5, -0.5]]),
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (normal, corners) in faces {
        let base = vertices.len() as u32;
        vertices.extend(corners.iter().map(|&p| MeshVertex::new(p, normal)));
        indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }
    MeshData::new(vertices, indices)
}

/// UV sphere of radius 0.5.
pub fn sphere(segments: u32, rings: u32) -> MeshData {
    let segments = segments.max(3);
    let rings = rings.max(2);
    let mut vertices = Vec::with_capacity(((segments + 1) * (rings + 1)) as usize);
    let mut indices = Vec::with_capacity((segments * rings * 6) as usize);

    for ring in 0..=rings {
        let phi = PI * ring as f32 / rings as f32;
        let y = phi.cos();
        let ring_radius = phi.sin();

        for seg in 0..=segments {
            let theta = TAU * seg as f32 / segments as f32;
            let x = ring_radius * theta.cos();
            let z = ring_radius * theta.sin();
            vertices.push(MeshVertex::new([x * 0.5, y * 0.5, z * 0.5], [x, y, z]));
        }
    }

    for ring in 0..rings {
        for seg in 0..segments {
            let current = ring * (segments + 1) + seg;
            let next = current + segments + 1;
            indices.extend_from_slice(&[current, current + 1, next]);
            indices.extend_from_slice(&[current + 1, next + 1, next]);
        }
    }

    MeshData::new(vertices, indices)
}

/// Capped cylinder of radius 0.5 and height 1 along Y.
pub fn cylinder(segments: u32) -> MeshData {
    let segments = segments.max(3);
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    // side
    for seg in 0..=segments {
        let theta = TAU * seg as f32 / segments as f32;
        let (x, z) = (theta.cos(), theta.sin());
        vertices.push(MeshVertex::new([x * 0.5, -0.5, z * 0.5], [x, 0.0, z]));
        vertices.push(MeshVertex::new([x * 0.5, 0.5, z * 0.5], [x, 0.0, z]));
    }
    for seg in 0..segments {
        let b0 = seg * 2;
        let (t0, b1, t1) = (b0 + 1, b0 + 2, b0 + 3);
        indices.extend_from_slice(&[b0, t0, b1, b1, t0, t1]);
    }

    for (y, ny) in [(0.5, 1.0), (-0.5, -1.0)] {
        let centre = vertices.len() as u32;
        vertices.push(MeshVertex::new([0.0, y, 0.0], [0.0, ny, 0.0]));
        for seg in 0..segments {
            let theta = TAU * seg as f32 / segments as f32;
            vertices.push(MeshVertex::new(
                [theta.cos() * 0.5, y, theta.sin() * 0.5],
                [0.0, ny, 0.0],
            ));
        }
        for seg in 0..segments {
            let a = centre + 1 + seg;
            let b = centre + 1 + (seg + 1) % segments;
            if ny > 0.0 {
                indices.extend_from_slice(&[centre, b, a]);
            } else {
                indices.extend_from_slice(&[centre, a, b]);
            }
        }
    }

    MeshData::new(vertices, indices)
}

/// Square pyramid: unit base at `y = -0.5`, apex at `y = 0.5`.
pub fn pyramid() -> MeshData {
    const APEX: [f32; 3] = [0.0, 0.5, 0.0];
    // base corners, counter-clockwise seen from above
    const BASE: [[f32; 3]; 4] = [
        [-0.5, -0.5, 0.5],
        [0.5, -0.5, 0.5],
        [0.5, -0.5, -0.5],
        [-0.5, -0.5, -0.5],
    ];

    let mut vertices = Vec::with_capacity(16);
    let mut indices = Vec::with_capacity(18);

    for i in 0..4 {
        let (a, b) = (BASE[i], BASE[(i + 1) % 4]);
        let normal = face_normal(a, b, APEX);
        let base = vertices.len() as u32;
        vertices.extend([a, b, APEX].map(|p| MeshVertex::new(p, normal)));
        indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    let base = vertices.len() as u32;
    vertices.extend(BASE.iter().map(|&p| MeshVertex::new(p, [0.0, -1.0, 0.0])));
    indices.extend_from_slice(&[base, base + 3, base + 2, base + 2, base + 1, base]);

    MeshData::new(vertices, indices)
}

fn face_normal(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> [f32; 3] {
    let u = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
    let v = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
    let n = [
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ];
    let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
    n.map(|c| c / len)
}
