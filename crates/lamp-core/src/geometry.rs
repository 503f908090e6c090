//! Parametric surface and wireframe generators.
//!
//! Every generator is a pure function of its parameters and returns a
//! [`Mesh`]: a list of [`Primitive`]s, each a run of vertices interpreted
//! according to its [`Topology`]. Surfaces of revolution are built around
//! the local Z axis starting at `z = 0`; callers orient them with a
//! transform. Use [`Mesh::to_indexed`] to turn the strips into plain
//! triangle/line lists for GPU submission.

use std::f32::consts::PI;

use glam::Vec3;
use thiserror::Error;

/// Minimum number of subdivisions around an axis of revolution.
pub const MIN_SLICES: u32 = 3;
/// Minimum number of latitude bands on a sphere.
pub const MIN_STACKS: u32 = 2;
/// Maximum number of cells along one side of a ground grid.
pub const MAX_GRID_CELLS: u32 = 1024;

/// Position + normal, laid out for direct upload as a vertex buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }

    /// Vertex of a line primitive. Lines are drawn unlit so they carry no normal.
    pub fn line(position: Vec3) -> Self {
        Self::new(position, Vec3::ZERO)
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from(self.position)
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::from(self.normal)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    /// Each vertex after the second closes a triangle with the previous two.
    TriangleStrip,
    /// Vertex pairs; each new pair closes a quad with the previous pair.
    QuadStrip,
    /// Independent quads, four vertices each.
    Quads,
    /// Independent segments, two vertices each.
    Lines,
    /// Closed polyline.
    LineLoop,
    /// Open polyline.
    LineStrip,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    pub topology: Topology,
    pub vertices: Vec<Vertex>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub primitives: Vec<Primitive>,
}

/// Flattened mesh: one shared vertex array indexed by a triangle list and a line list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IndexedMesh {
    pub vertices: Vec<Vertex>,
    pub triangles: Vec<u32>,
    pub lines: Vec<u32>,
}

impl Mesh {
    pub fn push(&mut self, topology: Topology, vertices: Vec<Vertex>) {
        self.primitives.push(Primitive { topology, vertices });
    }

    pub fn vertex_count(&self) -> usize {
        self.primitives.iter().map(|p| p.vertices.len()).sum()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.primitives.iter().flat_map(|p| p.vertices.iter())
    }

    /// Convert every primitive into indexed triangles or line segments.
    ///
    /// Strips too short to form a face (or a segment) contribute vertices
    /// but no indices.
    pub fn to_indexed(&self) -> IndexedMesh {
        let mut out = IndexedMesh {
            vertices: Vec::with_capacity(self.vertex_count()),
            ..Default::default()
        };
        for prim in &self.primitives {
            let base = out.vertices.len() as u32;
            let n = prim.vertices.len() as u32;
            out.vertices.extend_from_slice(&prim.vertices);
            match prim.topology {
                Topology::TriangleStrip => {
                    for i in 0..n.saturating_sub(2) {
                        // Flip every other triangle to keep a consistent winding.
                        let tri = if i % 2 == 0 {
                            [i, i + 1, i + 2]
                        } else {
                            [i + 1, i, i + 2]
                        };
                        out.triangles.extend(tri.map(|k| base + k));
                    }
                }
                Topology::QuadStrip => {
                    for q in 0..(n / 2).saturating_sub(1) {
                        let (a, b, c, d) = (2 * q, 2 * q + 1, 2 * q + 3, 2 * q + 2);
                        out.triangles
                            .extend([a, b, c, a, c, d].map(|k| base + k));
                    }
                }
                Topology::Quads => {
                    for q in 0..n / 4 {
                        let a = 4 * q;
                        out.triangles
                            .extend([a, a + 1, a + 2, a, a + 2, a + 3].map(|k| base + k));
                    }
                }
                Topology::Lines => {
                    for e in 0..n / 2 {
                        out.lines.extend([base + 2 * e, base + 2 * e + 1]);
                    }
                }
                Topology::LineLoop => {
                    if n >= 2 {
                        for i in 0..n {
                            out.lines.extend([base + i, base + (i + 1) % n]);
                        }
                    }
                }
                Topology::LineStrip => {
                    for i in 0..n.saturating_sub(1) {
                        out.lines.extend([base + i, base + i + 1]);
                    }
                }
            }
        }
        out
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("{shape}: {what} must be finite and positive, got {value}")]
    NonPositive {
        shape: &'static str,
        what: &'static str,
        value: f32,
    },
    #[error("{shape}: {what} must be finite and non-negative, got {value}")]
    Negative {
        shape: &'static str,
        what: &'static str,
        value: f32,
    },
    #[error("{shape}: {what} must be at least {min}, got {value}")]
    TooFewSegments {
        shape: &'static str,
        what: &'static str,
        min: u32,
        value: u32,
    },
    #[error("{shape}: {cells} cells per side exceeds the limit of {max}")]
    TooManyCells {
        shape: &'static str,
        cells: f32,
        max: u32,
    },
    #[error("disk: inner radius {inner} must be smaller than outer radius {outer}")]
    InvertedDisk { inner: f32, outer: f32 },
    #[error("cone: degenerate (base radius {base_radius}, top radius {top_radius}, height {height})")]
    DegenerateCone {
        base_radius: f32,
        top_radius: f32,
        height: f32,
    },
}

fn positive(shape: &'static str, what: &'static str, value: f32) -> Result<f32, GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::NonPositive { shape, what, value })
    }
}

fn non_negative(shape: &'static str, what: &'static str, value: f32) -> Result<f32, GeometryError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::Negative { shape, what, value })
    }
}

fn at_least(
    shape: &'static str,
    what: &'static str,
    min: u32,
    value: u32,
) -> Result<u32, GeometryError> {
    if value >= min {
        Ok(value)
    } else {
        Err(GeometryError::TooFewSegments {
            shape,
            what,
            min,
            value,
        })
    }
}

/// `(cos θ, sin θ)` for `θ = 2π·i/slices`, `i` in `0..=slices`.
fn ring(slices: u32) -> impl Iterator<Item = (f32, f32)> {
    (0..=slices).map(move |i| {
        let theta = 2.0 * PI * i as f32 / slices as f32;
        (theta.cos(), theta.sin())
    })
}

/// Open cylinder side along +Z from `z = 0` to `z = height`.
///
/// One quad strip of `slices + 1` (bottom, top) vertex pairs with radial normals.
pub fn cylinder(radius: f32, height: f32, slices: u32) -> Result<Mesh, GeometryError> {
    let radius = positive("cylinder", "radius", radius)?;
    let height = positive("cylinder", "height", height)?;
    let slices = at_least("cylinder", "slices", MIN_SLICES, slices)?;

    let mut vertices = Vec::with_capacity(2 * (slices as usize + 1));
    for (c, s) in ring(slices) {
        let normal = Vec3::new(c, s, 0.0);
        vertices.push(Vertex::new(Vec3::new(radius * c, radius * s, 0.0), normal));
        vertices.push(Vertex::new(
            Vec3::new(radius * c, radius * s, height),
            normal,
        ));
    }
    let mut mesh = Mesh::default();
    mesh.push(Topology::QuadStrip, vertices);
    Ok(mesh)
}

/// Truncated cone side: `base_radius` at `z = 0` narrowing (or widening) to
/// `top_radius` at `z = height`.
///
/// Either radius may be zero for a full cone. Equal radii with zero height
/// have no surface and are rejected.
pub fn cone(
    base_radius: f32,
    top_radius: f32,
    height: f32,
    slices: u32,
) -> Result<Mesh, GeometryError> {
    let base_radius = non_negative("cone", "base radius", base_radius)?;
    let top_radius = non_negative("cone", "top radius", top_radius)?;
    let height = non_negative("cone", "height", height)?;
    let slices = at_least("cone", "slices", MIN_SLICES, slices)?;

    let radius_diff = base_radius - top_radius;
    let slant = (radius_diff * radius_diff + height * height).sqrt();
    if slant <= f32::EPSILON || (base_radius == 0.0 && top_radius == 0.0) {
        return Err(GeometryError::DegenerateCone {
            base_radius,
            top_radius,
            height,
        });
    }
    let normal_z = radius_diff / slant;
    let normal_xy = height / slant;

    let mut vertices = Vec::with_capacity(2 * (slices as usize + 1));
    for (c, s) in ring(slices) {
        let normal = Vec3::new(normal_xy * c, normal_xy * s, normal_z);
        vertices.push(Vertex::new(
            Vec3::new(base_radius * c, base_radius * s, 0.0),
            normal,
        ));
        vertices.push(Vertex::new(
            Vec3::new(top_radius * c, top_radius * s, height),
            normal,
        ));
    }
    let mut mesh = Mesh::default();
    mesh.push(Topology::QuadStrip, vertices);
    Ok(mesh)
}

/// Flat annulus in the XY plane facing +Z. `inner_radius = 0` gives a filled circle.
pub fn disk(inner_radius: f32, outer_radius: f32, slices: u32) -> Result<Mesh, GeometryError> {
    let inner = non_negative("disk", "inner radius", inner_radius)?;
    let outer = positive("disk", "outer radius", outer_radius)?;
    let slices = at_least("disk", "slices", MIN_SLICES, slices)?;
    if inner >= outer {
        return Err(GeometryError::InvertedDisk { inner, outer });
    }

    let mut vertices = Vec::with_capacity(2 * (slices as usize + 1));
    for (c, s) in ring(slices) {
        vertices.push(Vertex::new(Vec3::new(inner * c, inner * s, 0.0), Vec3::Z));
        vertices.push(Vertex::new(Vec3::new(outer * c, outer * s, 0.0), Vec3::Z));
    }
    let mut mesh = Mesh::default();
    mesh.push(Topology::TriangleStrip, vertices);
    Ok(mesh)
}

/// Unit direction on the sphere for latitude `theta` (from +Z) and longitude `phi`.
#[inline]
fn sphere_dir(theta: f32, phi: f32) -> Vec3 {
    let (sin_t, cos_t) = theta.sin_cos();
    let (sin_p, cos_p) = phi.sin_cos();
    Vec3::new(cos_p * sin_t, sin_p * sin_t, cos_t)
}

/// Latitude/longitude sphere centred at the origin, poles on ±Z.
///
/// Emits one quad strip per stack band, `2·(slices + 1)` vertices each.
/// Normals are the unit radial direction.
pub fn uv_sphere(radius: f32, slices: u32, stacks: u32) -> Result<Mesh, GeometryError> {
    let radius = positive("sphere", "radius", radius)?;
    let slices = at_least("sphere", "slices", MIN_SLICES, slices)?;
    let stacks = at_least("sphere", "stacks", MIN_STACKS, stacks)?;

    let mut mesh = Mesh::default();
    for i in 0..stacks {
        let theta1 = PI * i as f32 / stacks as f32;
        let theta2 = PI * (i + 1) as f32 / stacks as f32;
        let mut band = Vec::with_capacity(2 * (slices as usize + 1));
        for j in 0..=slices {
            let phi = 2.0 * PI * j as f32 / slices as f32;
            let n1 = sphere_dir(theta1, phi);
            let n2 = sphere_dir(theta2, phi);
            band.push(Vertex::new(n1 * radius, n1));
            band.push(Vertex::new(n2 * radius, n2));
        }
        mesh.push(Topology::QuadStrip, band);
    }
    Ok(mesh)
}

/// Axis-aligned cube outline centred at the origin: 12 edges, 24 vertices.
pub fn wire_cube(size: f32) -> Result<Mesh, GeometryError> {
    let half = positive("wire cube", "size", size)? / 2.0;
    let corners = [
        Vec3::new(-half, -half, half),
        Vec3::new(half, -half, half),
        Vec3::new(half, half, half),
        Vec3::new(-half, half, half),
        Vec3::new(-half, -half, -half),
        Vec3::new(half, -half, -half),
        Vec3::new(half, half, -half),
        Vec3::new(-half, half, -half),
    ];
    const EDGES: [(usize, usize); 12] = [
        // front face
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 0),
        // back face
        (4, 5),
        (5, 6),
        (6, 7),
        (7, 4),
        // front to back
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];
    let vertices = EDGES
        .iter()
        .flat_map(|&(a, b)| [Vertex::line(corners[a]), Vertex::line(corners[b])])
        .collect();
    let mut mesh = Mesh::default();
    mesh.push(Topology::Lines, vertices);
    Ok(mesh)
}

/// Sphere outline: `stacks + 1` latitude loops of `slices` vertices, then
/// `slices` pole-to-pole longitude strips of `stacks + 1` vertices.
pub fn wire_sphere(radius: f32, slices: u32, stacks: u32) -> Result<Mesh, GeometryError> {
    let radius = positive("wire sphere", "radius", radius)?;
    let slices = at_least("wire sphere", "slices", MIN_SLICES, slices)?;
    let stacks = at_least("wire sphere", "stacks", MIN_STACKS, stacks)?;

    let mut mesh = Mesh::default();
    for i in 0..=stacks {
        let theta = PI * i as f32 / stacks as f32;
        let ring = (0..slices)
            .map(|j| {
                let phi = 2.0 * PI * j as f32 / slices as f32;
                Vertex::line(sphere_dir(theta, phi) * radius)
            })
            .collect();
        mesh.push(Topology::LineLoop, ring);
    }
    for j in 0..slices {
        let phi = 2.0 * PI * j as f32 / slices as f32;
        let meridian = (0..=stacks)
            .map(|i| {
                let theta = PI * i as f32 / stacks as f32;
                Vertex::line(sphere_dir(theta, phi) * radius)
            })
            .collect();
        mesh.push(Topology::LineStrip, meridian);
    }
    Ok(mesh)
}

/// Square ground grid in the XZ plane, centred at the origin, facing +Y.
///
/// Subdivided into `step`-sized quads so per-vertex lighting has samples
/// to work with. The cell count per side is rounded to a whole number and
/// may not exceed [`MAX_GRID_CELLS`].
pub fn table_grid(half_extent: f32, step: f32) -> Result<Mesh, GeometryError> {
    let half_extent = positive("table", "half extent", half_extent)?;
    let step = positive("table", "step", step)?;
    let ratio = (2.0 * half_extent / step).round();
    if ratio > MAX_GRID_CELLS as f32 {
        return Err(GeometryError::TooManyCells {
            shape: "table",
            cells: ratio,
            max: MAX_GRID_CELLS,
        });
    }
    let cells = (ratio as u32).max(1);
    let cell = 2.0 * half_extent / cells as f32;

    let mut vertices = Vec::with_capacity(4 * cells as usize * cells as usize);
    for ix in 0..cells {
        let x = -half_extent + ix as f32 * cell;
        for iz in 0..cells {
            let z = -half_extent + iz as f32 * cell;
            vertices.push(Vertex::new(Vec3::new(x, 0.0, z), Vec3::Y));
            vertices.push(Vertex::new(Vec3::new(x, 0.0, z + cell), Vec3::Y));
            vertices.push(Vertex::new(Vec3::new(x + cell, 0.0, z + cell), Vec3::Y));
            vertices.push(Vertex::new(Vec3::new(x + cell, 0.0, z), Vec3::Y));
        }
    }
    let mut mesh = Mesh::default();
    mesh.push(Topology::Quads, vertices);
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(topology: Topology, n: usize) -> Mesh {
        let mut mesh = Mesh::default();
        mesh.push(topology, vec![Vertex::default(); n]);
        mesh
    }

    #[test]
    fn quad_strip_indices_cover_each_quad_with_two_triangles() {
        let indexed = strip(Topology::QuadStrip, 6).to_indexed();
        assert_eq!(indexed.triangles, vec![0, 1, 3, 0, 3, 2, 2, 3, 5, 2, 5, 4]);
        assert!(indexed.lines.is_empty());
    }

    #[test]
    fn triangle_strip_alternates_winding() {
        let indexed = strip(Topology::TriangleStrip, 5).to_indexed();
        assert_eq!(indexed.triangles, vec![0, 1, 2, 2, 1, 3, 2, 3, 4]);
    }

    #[test]
    fn line_loop_closes_back_to_start() {
        let indexed = strip(Topology::LineLoop, 3).to_indexed();
        assert_eq!(indexed.lines, vec![0, 1, 1, 2, 2, 0]);
    }

    #[test]
    fn short_strips_produce_no_indices() {
        for topology in [Topology::TriangleStrip, Topology::QuadStrip, Topology::Quads] {
            let indexed = strip(topology, 2).to_indexed();
            assert_eq!(indexed.vertices.len(), 2);
            assert!(indexed.triangles.is_empty());
        }
        assert!(strip(Topology::LineStrip, 1).to_indexed().lines.is_empty());
        assert!(strip(Topology::LineLoop, 1).to_indexed().lines.is_empty());
    }

    #[test]
    fn indices_are_offset_per_primitive() {
        let mut mesh = strip(Topology::Lines, 2);
        mesh.push(Topology::LineStrip, vec![Vertex::default(); 3]);
        let indexed = mesh.to_indexed();
        assert_eq!(indexed.lines, vec![0, 1, 2, 3, 3, 4]);
    }
}
