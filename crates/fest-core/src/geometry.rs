//! Unit meshes uploaded once by the renderer and sized per instance.

use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl MeshData {
    fn push(&mut self, position: [f32; 3], normal: [f32; 3]) -> u16 {
        self.vertices.push(Vertex { position, normal });
        (self.vertices.len() - 1) as u16
    }
}

/// Axis-aligned cube spanning -0.5..0.5, flat-shaded faces.
pub fn unit_cube() -> MeshData {
    let mut m = MeshData::default();
    // (normal, tangent u, tangent v) per face, u × v = normal
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ];
    for (n, u, v) in faces {
        let corner = |su: f32, sv: f32| {
            [
                0.5 * n[0] + 0.5 * su * u[0] + 0.5 * sv * v[0],
                0.5 * n[1] + 0.5 * su * u[1] + 0.5 * sv * v[1],
                0.5 * n[2] + 0.5 * su * u[2] + 0.5 * sv * v[2],
            ]
        };
        let a = m.push(corner(-1.0, -1.0), n);
        let b = m.push(corner(1.0, -1.0), n);
        let c = m.push(corner(1.0, 1.0), n);
        let d = m.push(corner(-1.0, 1.0), n);
        m.indices.extend_from_slice(&[a, b, c, a, c, d]);
    }
    m
}

/// Unit quad in the XY plane facing +Z.
pub fn unit_plane() -> MeshData {
    let mut m = MeshData::default();
    let n = [0.0, 0.0, 1.0];
    let a = m.push([-0.5, -0.5, 0.0], n);
    let b = m.push([0.5, -0.5, 0.0], n);
    let c = m.push([0.5, 0.5, 0.0], n);
    let d = m.push([-0.5, 0.5, 0.0], n);
    m.indices.extend_from_slice(&[a, b, c, a, c, d]);
    m
}

/// Radius-1 UV sphere.
pub fn unit_sphere(width_segments: u32, height_segments: u32) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut m = MeshData::default();
    for y in 0..=hs {
        let v = y as f32 / hs as f32;
        let theta = v * PI;
        for x in 0..=ws {
            let u = x as f32 / ws as f32;
            let phi = u * TAU;
            let p = [
                -phi.cos() * theta.sin(),
                theta.cos(),
                phi.sin() * theta.sin(),
            ];
            m.push(p, p);
        }
    }
    let row = ws + 1;
    for y in 0..hs {
        for x in 0..ws {
            let a = (y * row + x + 1) as u16;
            let b = (y * row + x) as u16;
            let c = ((y + 1) * row + x) as u16;
            let d = ((y + 1) * row + x + 1) as u16;
            if y != 0 {
                m.indices.extend_from_slice(&[a, b, d]);
            }
            if y != hs - 1 {
                m.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    m
}

/// Open cone of radius 1 and height 1 centred on the origin, apex at +Y.
pub fn unit_open_cone(radial_segments: u32) -> MeshData {
    let segs = radial_segments.max(3);
    let mut m = MeshData::default();
    let slope = 1.0_f32; // radius / height
    for i in 0..=segs {
        let a = i as f32 / segs as f32 * TAU;
        let (s, c) = a.sin_cos();
        let n = glam::Vec3::new(s, slope, c).normalize().to_array();
        m.push([0.0, 0.5, 0.0], n);
        m.push([s, -0.5, c], n);
    }
    for i in 0..segs {
        let apex = (i * 2) as u16;
        let base = apex + 1;
        let next_base = apex + 3;
        m.indices.extend_from_slice(&[apex, base, next_base]);
    }
    m
}
