// Procedural geometry: vertex counts, normals and parameter validation.

use glam::Vec3;
use lamp_core::geometry::*;

const EPS: f32 = 1e-5;

#[test]
fn cylinder_emits_one_strip_of_slice_pairs() {
    for slices in [3, 16, 32] {
        let mesh = cylinder(0.5, 2.0, slices).unwrap();
        assert_eq!(mesh.primitives.len(), 1);
        assert_eq!(mesh.primitives[0].topology, Topology::QuadStrip);
        assert_eq!(mesh.vertex_count(), 2 * (slices as usize + 1));
    }
}

#[test]
fn cylinder_vertices_lie_on_surface_with_radial_normals() {
    let (radius, height) = (0.75, 3.0);
    let mesh = cylinder(radius, height, 12).unwrap();
    for (i, v) in mesh.vertices().enumerate() {
        let p = v.position();
        let n = v.normal();
        assert!((p.truncate().length() - radius).abs() < EPS);
        let expected_z = if i % 2 == 0 { 0.0 } else { height };
        assert!((p.z - expected_z).abs() < EPS);
        assert!(n.z.abs() < EPS);
        assert!((n - Vec3::new(p.x / radius, p.y / radius, 0.0)).length() < EPS);
    }
}

#[test]
fn cylinder_strip_closes_the_seam() {
    let mesh = cylinder(1.0, 1.0, 8).unwrap();
    let verts = &mesh.primitives[0].vertices;
    let first = verts[0].position();
    let last_bottom = verts[verts.len() - 2].position();
    assert!((first - last_bottom).length() < EPS);
}

#[test]
fn cone_normals_tilt_by_slope() {
    let (base, top, height) = (0.32, 0.8, 1.2);
    let mesh = cone(base, top, height, 32).unwrap();
    let slant = ((base - top) * (base - top) + height * height).sqrt();
    for v in mesh.vertices() {
        let n = v.normal();
        assert!((n.length() - 1.0).abs() < EPS);
        assert!((n.z - (base - top) / slant).abs() < EPS);
        assert!((n.truncate().length() - height / slant).abs() < EPS);
    }
    assert_eq!(mesh.vertex_count(), 2 * 33);
}

#[test]
fn cone_normal_is_perpendicular_to_slant() {
    let mesh = cone(1.0, 0.25, 2.0, 8).unwrap();
    let verts = &mesh.primitives[0].vertices;
    for pair in verts.chunks(2) {
        let slant = pair[1].position() - pair[0].position();
        assert!(slant.dot(pair[0].normal()).abs() < 1e-4);
    }
}

#[test]
fn flat_cone_is_an_annulus_facing_up() {
    let mesh = cone(1.0, 0.5, 0.0, 8).unwrap();
    for v in mesh.vertices() {
        assert!((v.normal() - Vec3::Z).length() < EPS);
    }
}

#[test]
fn degenerate_cone_is_rejected() {
    assert!(matches!(
        cone(0.5, 0.5, 0.0, 16),
        Err(GeometryError::DegenerateCone { .. })
    ));
    assert!(matches!(
        cone(0.0, 0.0, 1.0, 16),
        Err(GeometryError::DegenerateCone { .. })
    ));
}

#[test]
fn disk_alternates_inner_and_outer_rim() {
    let mesh = disk(0.25, 1.0, 16).unwrap();
    assert_eq!(mesh.primitives[0].topology, Topology::TriangleStrip);
    assert_eq!(mesh.vertex_count(), 2 * 17);
    for (i, v) in mesh.vertices().enumerate() {
        let r = v.position().length();
        let expected = if i % 2 == 0 { 0.25 } else { 1.0 };
        assert!((r - expected).abs() < EPS);
        assert_eq!(v.normal(), Vec3::Z);
        assert_eq!(v.position().z, 0.0);
    }
}

#[test]
fn filled_disk_has_centre_vertices() {
    let mesh = disk(0.0, 1.0, 6).unwrap();
    for v in mesh.vertices().step_by(2) {
        assert_eq!(v.position(), Vec3::ZERO);
    }
}

#[test]
fn uv_sphere_has_one_strip_per_stack() {
    let (slices, stacks) = (16u32, 10u32);
    let mesh = uv_sphere(2.0, slices, stacks).unwrap();
    assert_eq!(mesh.primitives.len(), stacks as usize);
    for band in &mesh.primitives {
        assert_eq!(band.topology, Topology::QuadStrip);
        assert_eq!(band.vertices.len(), 2 * (slices as usize + 1));
    }
}

#[test]
fn uv_sphere_normals_are_unit_radial() {
    for radius in [0.01, 0.225, 1.0, 40.0] {
        let mesh = uv_sphere(radius, 12, 8).unwrap();
        for v in mesh.vertices() {
            let p = v.position();
            assert!((p.length() - radius).abs() < 1e-4 * radius.max(1.0));
            assert!((v.normal() - p / p.length()).length() < 1e-4);
        }
    }
}

#[test]
fn uv_sphere_spans_pole_to_pole() {
    let mesh = uv_sphere(1.0, 8, 4).unwrap();
    let first = mesh.primitives.first().unwrap().vertices[0].position();
    let last_band = &mesh.primitives.last().unwrap().vertices;
    let last = last_band[1].position();
    assert!((first - Vec3::Z).length() < EPS);
    assert!((last + Vec3::Z).length() < EPS);
}

#[test]
fn wire_cube_has_twelve_edges() {
    let mesh = wire_cube(2.0).unwrap();
    assert_eq!(mesh.primitives.len(), 1);
    assert_eq!(mesh.primitives[0].topology, Topology::Lines);
    assert_eq!(mesh.vertex_count(), 24);
    for edge in mesh.primitives[0].vertices.chunks(2) {
        let d = edge[1].position() - edge[0].position();
        assert!((d.length() - 2.0).abs() < EPS);
        // axis aligned: exactly one component changes
        assert_eq!(d.to_array().iter().filter(|c| c.abs() > EPS).count(), 1);
    }
    for v in mesh.vertices() {
        assert!(v.position().abs().cmpeq(Vec3::ONE).all());
    }
}

#[test]
fn wire_sphere_emits_latitude_loops_and_meridians() {
    let (slices, stacks) = (16u32, 16u32);
    let mesh = wire_sphere(0.375, slices, stacks).unwrap();
    let loops: Vec<_> = mesh
        .primitives
        .iter()
        .filter(|p| p.topology == Topology::LineLoop)
        .collect();
    let strips: Vec<_> = mesh
        .primitives
        .iter()
        .filter(|p| p.topology == Topology::LineStrip)
        .collect();
    assert_eq!(loops.len(), stacks as usize + 1);
    assert_eq!(strips.len(), slices as usize);
    assert!(loops.iter().all(|p| p.vertices.len() == slices as usize));
    assert!(strips.iter().all(|p| p.vertices.len() == stacks as usize + 1));
    for v in mesh.vertices() {
        assert!((v.position().length() - 0.375).abs() < EPS);
    }
}

#[test]
fn table_grid_covers_square_with_upward_quads() {
    let mesh = table_grid(10.0, 0.5).unwrap();
    assert_eq!(mesh.primitives[0].topology, Topology::Quads);
    assert_eq!(mesh.vertex_count(), 4 * 40 * 40);
    let (mut min, mut max) = (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN));
    for v in mesh.vertices() {
        assert_eq!(v.normal(), Vec3::Y);
        min = min.min(v.position());
        max = max.max(v.position());
    }
    assert!((min - Vec3::new(-10.0, 0.0, -10.0)).length() < 1e-4);
    assert!((max - Vec3::new(10.0, 0.0, 10.0)).length() < 1e-4);
}

#[test]
fn oversized_table_grid_is_rejected() {
    assert!(matches!(
        table_grid(10.0, 1e-4),
        Err(GeometryError::TooManyCells { max: MAX_GRID_CELLS, .. })
    ));
    assert!(table_grid(f32::MAX, 1.0).is_err());
    assert!(table_grid(1.0, f32::MIN_POSITIVE).is_err());

    // One cell past the limit.
    let half = (MAX_GRID_CELLS + 1) as f32 / 2.0;
    assert!(matches!(
        table_grid(half, 1.0),
        Err(GeometryError::TooManyCells { .. })
    ));
}

#[test]
fn invalid_parameters_are_rejected() {
    assert!(matches!(
        cylinder(0.0, 1.0, 8),
        Err(GeometryError::NonPositive { what: "radius", .. })
    ));
    assert!(matches!(
        cylinder(1.0, -1.0, 8),
        Err(GeometryError::NonPositive { what: "height", .. })
    ));
    assert!(matches!(
        cylinder(1.0, 1.0, 2),
        Err(GeometryError::TooFewSegments { min: MIN_SLICES, .. })
    ));
    assert!(matches!(
        uv_sphere(1.0, 8, 1),
        Err(GeometryError::TooFewSegments { min: MIN_STACKS, .. })
    ));
    assert!(uv_sphere(f32::NAN, 8, 8).is_err());
    assert!(wire_cube(0.0).is_err());
    assert!(wire_sphere(-1.0, 8, 8).is_err());
    assert!(matches!(
        disk(1.0, 0.5, 8),
        Err(GeometryError::InvertedDisk { .. })
    ));
    assert!(cone(-0.1, 1.0, 1.0, 8).is_err());
    assert!(table_grid(10.0, 0.0).is_err());
}

#[test]
fn errors_name_the_shape() {
    let err = cylinder(1.0, 1.0, 0).unwrap_err();
    assert_eq!(err.to_string(), "cylinder: slices must be at least 3, got 0");
}

#[test]
fn generation_is_pure() {
    assert_eq!(uv_sphere(1.0, 8, 6), uv_sphere(1.0, 8, 6));
    assert_eq!(wire_sphere(1.0, 8, 6), wire_sphere(1.0, 8, 6));
}

#[test]
fn indexed_cylinder_has_two_triangles_per_slice() {
    let indexed = cylinder(1.0, 1.0, 10).unwrap().to_indexed();
    assert_eq!(indexed.vertices.len(), 22);
    assert_eq!(indexed.triangles.len(), 10 * 2 * 3);
    assert!(indexed.lines.is_empty());
    assert!(indexed.triangles.iter().all(|&i| (i as usize) < indexed.vertices.len()));
}

#[test]
fn indexed_wire_sphere_is_lines_only() {
    let (slices, stacks) = (8u32, 4u32);
    let indexed = wire_sphere(1.0, slices, stacks).unwrap().to_indexed();
    assert!(indexed.triangles.is_empty());
    // loops: `slices` segments each; meridians: `stacks` segments each
    let segments = (stacks + 1) * slices + slices * stacks;
    assert_eq!(indexed.lines.len(), 2 * segments as usize);
}
