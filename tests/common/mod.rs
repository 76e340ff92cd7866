//! Common test helpers for sdf-canvas integration tests

#![allow(dead_code)]

use std::collections::HashMap;

use sdf_canvas::prelude::*;

// ============================================================================
// Standard test shapes
// ============================================================================

/// Radius-5 sphere centered on grid point (10, 10, 10)
pub fn test_sphere() -> SphereField {
    SphereField::new(Vec3::splat(10.0), 5.0, 1.0)
}

/// Radius-5 sphere whose center is off the grid
pub fn test_offset_sphere() -> SphereField {
    SphereField::new(Vec3::new(10.3, 9.7, 10.1), 5.0, 1.0)
}

/// Two overlapping spheres joined by a line, with a hole carved out
pub fn test_complex_shape() -> SharedField {
    let a = SphereField::new(Vec3::new(4.0, 6.0, 6.0), 3.0, 1.0);
    let b = SphereField::new(Vec3::new(8.0, 6.0, 6.0), 2.5, 1.0);
    let bridge = LineField::new(Vec3::new(4.0, 6.0, 6.0), Vec3::new(8.0, 9.0, 6.0), 1.0, 1.0);
    let hole = SphereField::new(Vec3::new(6.0, 6.0, 9.0), 1.5, 1.0);
    a.union(b).union(bridge).subtract(hole).shared()
}

/// 20^3 canvas at one cube per unit
pub fn test_canvas() -> Canvas {
    Canvas::new(20, 20, 20, 1.0).expect("valid canvas")
}

/// Canvas with `field` accumulated serially
pub fn canvas_with<F: Field<f32>>(field: &F) -> Canvas {
    let mut canvas = test_canvas();
    canvas.add_field(field);
    canvas
}

// ============================================================================
// Mesh measurements
// ============================================================================

/// Signed volume enclosed by the mesh (positive for outward winding)
pub fn signed_volume(mesh: &Mesh) -> f32 {
    mesh.triangles().map(|[a, b, c]| a.dot(b.cross(c))).sum::<f32>() / 6.0
}

/// Undirected edge use counts
pub fn edge_counts(mesh: &Mesh) -> HashMap<(u32, u32), u32> {
    let mut counts = HashMap::new();
    for tri in mesh.indices.chunks_exact(3) {
        for (i, j) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            *counts.entry((i.min(j), i.max(j))).or_insert(0) += 1;
        }
    }
    counts
}

// ============================================================================
// Assertion helpers
// ============================================================================

/// Assert two f32 values are close within tolerance
pub fn assert_close(a: f32, b: f32, tol: f32, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff={}, tol={})",
        msg,
        a,
        b,
        (a - b).abs(),
        tol
    );
}

/// Assert the buffers are structurally consistent
pub fn assert_valid_mesh(mesh: &Mesh) {
    assert_eq!(mesh.indices.len() % 3, 0, "Index count should be divisible by 3");
    assert_eq!(mesh.uvs.len(), mesh.positions.len(), "One UV per vertex");
    for &i in &mesh.indices {
        assert!((i as usize) < mesh.positions.len(), "Index {} out of range", i);
    }
    for p in &mesh.positions {
        assert!(p.is_finite(), "Non-finite vertex {:?}", p);
    }
}
