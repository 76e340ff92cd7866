//! Integration tests: Field algebra
//!
//! Verifies the pointwise identities of the combinators, mirror symmetry,
//! domain propagation, and channel sets end to end through the canvas.

mod common;

use common::*;
use sdf_canvas::prelude::*;

fn sample_points() -> Vec<Vec3> {
    let mut points = Vec::new();
    for i in 0..7 {
        for j in 0..7 {
            for k in 0..7 {
                points.push(Vec3::new(i as f32 * 3.1 - 1.0, j as f32 * 2.9, k as f32 * 3.3 - 2.0));
            }
        }
    }
    points
}

// ============================================================================
// Pointwise identities
// ============================================================================

#[test]
fn union_is_pointwise_min() {
    let a = test_sphere();
    let b = test_offset_sphere();
    let u = a.union(b);
    for p in sample_points() {
        assert_eq!(u.evaluate(p), a.evaluate(p).min(b.evaluate(p)));
    }
}

#[test]
fn subtract_is_max_of_negation() {
    let a = test_sphere();
    let b = SphereField::new(Vec3::new(14.0, 10.0, 10.0), 3.0, 1.0);
    let s = a.subtract(b);
    for p in sample_points() {
        assert_eq!(s.evaluate(p), a.evaluate(p).max(-b.evaluate(p)));
    }
}

#[test]
fn blend_is_pointwise_sum() {
    let a = test_sphere();
    let b = LineField::new(Vec3::ZERO, Vec3::splat(12.0), 1.0, 2.0);
    let sum = a.blend(b);
    for p in sample_points() {
        assert_close(sum.evaluate(p), a.evaluate(p) + b.evaluate(p), 1e-4, "sum");
    }
}

#[test]
fn mirror_is_symmetric() {
    let shape = test_complex_shape();
    for axis in Axis::ALL {
        let mirrored = shape.clone().mirror(axis);
        for p in sample_points() {
            let mut q = p;
            q[axis.index()] = -q[axis.index()];
            assert_eq!(mirrored.evaluate(p), mirrored.evaluate(q));
        }
    }
}

#[test]
fn mirror_is_identity_on_positive_side() {
    let shape = test_complex_shape();
    let mirrored = shape.clone().mirror(Axis::Y);
    for p in sample_points().into_iter().filter(|p| p.y >= 0.0) {
        assert_eq!(mirrored.evaluate(p), shape.evaluate(p));
    }
}

// ============================================================================
// Domains
// ============================================================================

#[test]
fn combinator_domains() {
    let a = SphereField::new(Vec3::new(2.0, 2.0, 2.0), 1.0, 1.0);
    let b = SphereField::new(Vec3::new(6.0, 2.0, 2.0), 2.0, 1.0);

    let u = a.union(b);
    assert_eq!(u.domain(), Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(8.0, 4.0, 4.0)));
    assert_eq!(a.blend(b).domain(), u.domain());
    assert_eq!(a.subtract(b).domain(), a.domain());

    let m = b.mirror(Axis::X);
    assert_eq!(m.domain(), Aabb::new(Vec3::new(-8.0, 0.0, 0.0), Vec3::new(8.0, 4.0, 4.0)));
}

#[test]
fn clipped_field_is_outside_beyond_domain() {
    let clipped = FnField::new(Aabb::new(Vec3::ZERO, Vec3::splat(4.0)), |_: Vec3| -1.0f32).clipped();
    let mut canvas = Canvas::new(8, 8, 8, 1.0).unwrap();
    canvas.add_field(&clipped);
    assert_eq!(canvas.value(2, 2, 2).unwrap(), -1.0);
    assert_eq!(canvas.value(6, 6, 6).unwrap(), FAR_OUTSIDE);

    // Surface only where the clipped cube meets the outside region
    let mesh = canvas.march(0.0);
    assert!(!mesh.is_empty());
    assert!(signed_volume(&mesh) > 0.0);
}

#[test]
fn finite_field_keeps_canvas_finite() {
    let broken = FnField::new(Aabb::EMPTY, |p: Vec3| if p.x > 3.0 { f32::NAN } else { p.x - 1.5 });
    let mut canvas = Canvas::new(6, 6, 6, 1.0).unwrap();
    canvas.add_field(&broken.finite());
    assert!(canvas.values().iter().all(|v| v.is_finite()));
    assert_valid_mesh(&canvas.march(0.0));
}

// ============================================================================
// Lines
// ============================================================================

#[test]
fn varying_line_meshes_with_tapering_radius() {
    let line = VaryingThicknessLine::new(
        vec![
            LinePoint { point: Vec3::new(4.0, 10.0, 10.0), radius: 1.5 },
            LinePoint { point: Vec3::new(16.0, 10.0, 10.0), radius: 3.5 },
        ],
        1.0,
    )
    .unwrap();
    let mesh = canvas_with(&line).march(0.0);
    assert_valid_mesh(&mesh);

    let bounds = mesh.bounds();
    assert!(bounds.max.y - 10.0 > 2.5, "thick end should reach further: {:?}", bounds);
    assert!(bounds.max.y < 10.0 + 3.6);
    assert!(bounds.min.x < 3.0);
}

#[test]
fn varying_line_rejects_single_point() {
    let err = VaryingThicknessLine::new(
        vec![LinePoint { point: Vec3::ZERO, radius: 1.0 }],
        1.0,
    )
    .unwrap_err();
    assert_eq!(err, FieldError::TooFewPoints { required: 2, actual: 1 });
    assert_eq!(err.to_string(), "line field requires at least 2 points, got 1");
}

// ============================================================================
// Channel sets
// ============================================================================

#[test]
fn combined_channels_mesh_with_blended_colors() {
    let left = SphereField::new(Vec3::new(7.0, 10.0, 10.0), 4.0, 1.0);
    let right = SphereField::new(Vec3::new(13.0, 10.0, 10.0), 4.0, 1.0);

    let red = FieldChannels::from_position(left.shared()).with_float3(
        COLOR_ATTRIBUTE,
        FnField::new(left.domain(), |_: Vec3| Vec3::new(1.0, 0.0, 0.0)).shared(),
    );
    let blue = FieldChannels::from_position(right.shared()).with_float3(
        COLOR_ATTRIBUTE,
        FnField::new(right.domain(), |_: Vec3| Vec3::new(0.0, 0.0, 1.0)).shared(),
    );

    let both = FieldChannels::combine([&red, &blue]);
    assert_eq!(both.domain(), left.domain().union(&right.domain()));

    let mut canvas = test_canvas();
    canvas.add_channels(&both).unwrap();
    let mesh = canvas.march_channels(&both, &MarchConfig::default());

    assert_valid_mesh(&mesh);
    let colors = &mesh.float3[COLOR_ATTRIBUTE];
    assert_eq!(colors.len(), mesh.vertex_count());
    assert!(colors.iter().all(|&c| c == Vec3::new(1.0, 0.0, 1.0)));
}

#[test]
fn subtracted_channels_carve_geometry() {
    let body = FieldChannels::from_position(test_sphere().shared());
    let bite = FieldChannels::from_position(SphereField::new(Vec3::new(15.0, 10.0, 10.0), 3.0, 1.0).shared());
    let carved = body.subtract(&bite).unwrap();

    let mut canvas = test_canvas();
    canvas.add_channels(&carved).unwrap();
    let mesh = canvas.march(0.0);
    assert!(mesh.bounds().max.x < 14.5);

    let full = canvas_with(&test_sphere()).march(0.0);
    assert!(signed_volume(&mesh) < signed_volume(&full));
}

#[test]
fn mirrored_channels_keep_names() {
    let set = FieldChannels::from_position(test_sphere().shared())
        .with_float2("Flow", FnField::new(Aabb::EMPTY, |p: Vec3| Vec2::new(p.x, p.y)).shared());
    let mirrored = set.mirror(Axis::X);
    assert!(mirrored.position().is_ok());
    assert!(mirrored.float2().contains_key("Flow"));
    assert_eq!(
        mirrored.float2()["Flow"].evaluate(Vec3::new(-2.0, 3.0, 0.0)),
        Vec2::new(2.0, 3.0)
    );
}
