//! Integration tests: Canvas construction and field accumulation
//!
//! Verifies zero initialization, additive blending, and that parallel
//! accumulation matches serial accumulation regardless of worker count.

mod common;

use common::*;
use sdf_canvas::prelude::*;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn fresh_canvas_is_all_zeros() {
    let canvas = test_canvas();
    assert_eq!(canvas.values().len(), 20 * 20 * 20);
    assert!(canvas.values().iter().all(|&v| v == 0.0));
}

#[test]
fn negative_dimension_is_rejected() {
    for (w, h, d, axis) in [(-1, 4, 4, Axis::X), (4, -2, 4, Axis::Y), (4, 4, -3, Axis::Z)] {
        match Canvas::new(w, h, d, 1.0) {
            Err(CanvasError::NegativeDimension { axis: got, .. }) => assert_eq!(got, axis),
            other => panic!("expected NegativeDimension on {axis}, got {:?}", other),
        }
    }
}

#[test]
fn invalid_resolution_is_rejected() {
    for cpu in [0.0, -1.0, f32::INFINITY, f32::NAN] {
        assert!(matches!(
            Canvas::new(4, 4, 4, cpu),
            Err(CanvasError::InvalidResolution(_))
        ));
    }
}

#[test]
fn config_round_trips_through_json() {
    let config = CanvasConfig {
        width: 12,
        height: 24,
        depth: 6,
        cubes_per_unit: 2.5,
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: CanvasConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(config, back);

    let canvas = Canvas::from_config(&back).unwrap();
    assert_eq!(canvas.dimensions(), (12, 24, 6));
    assert_eq!(canvas.cubes_per_unit(), 2.5);

    let march = MarchConfig {
        cutoff: 0.2,
        weld_decimals: 3,
        parallel: true,
    };
    let json = serde_json::to_string(&march).unwrap();
    assert_eq!(serde_json::from_str::<MarchConfig>(&json).unwrap(), march);
}

// ============================================================================
// Accumulation
// ============================================================================

#[test]
fn accumulation_is_commutative() {
    let a = test_sphere();
    let b = LineField::new(Vec3::new(2.0, 2.0, 2.0), Vec3::new(17.0, 15.0, 9.0), 2.0, 0.5);

    let mut ab = test_canvas();
    ab.add_field(&a);
    ab.add_field(&b);

    let mut ba = test_canvas();
    ba.add_field(&b);
    ba.add_field(&a);

    assert_eq!(ab.values(), ba.values());
}

#[test]
fn accumulation_adds_values() {
    let mut canvas = test_canvas();
    canvas.add_field(&test_sphere());
    canvas.add_field(&test_sphere());

    let single = canvas_with(&test_sphere());
    for (twice, once) in canvas.values().iter().zip(single.values()) {
        assert_eq!(*twice, once * 2.0);
    }
}

#[test]
fn parallel_accumulation_matches_serial() {
    let shape = test_complex_shape();
    let serial = canvas_with(&shape);

    let mut parallel = test_canvas();
    parallel.add_field_parallel(&shape);

    assert_eq!(serial.values(), parallel.values());
}

#[test]
fn parallel_accumulation_ignores_worker_count() {
    let shape = test_complex_shape();
    let run = |threads: usize| {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .unwrap();
        pool.install(|| {
            let mut canvas = test_canvas();
            canvas.add_field_parallel(&shape);
            canvas.add_field_parallel(&test_sphere());
            canvas
        })
    };

    assert_eq!(run(1), run(4));
}

#[test]
fn accumulated_values_match_field() {
    let sphere = test_sphere();
    let canvas = canvas_with(&sphere);
    for (x, y, z) in [(0, 0, 0), (10, 10, 10), (15, 10, 10), (3, 17, 8)] {
        let p = canvas.world_position(x, y, z);
        assert_eq!(canvas.value(x, y, z).unwrap(), sphere.evaluate(p));
    }
    assert_close(canvas.value(10, 10, 10).unwrap(), -5.0, 1e-6, "center");
}

#[test]
fn channels_accumulate_position_only() {
    let sphere = test_sphere();
    let channels = FieldChannels::from_position(sphere.shared())
        .with_float1("Heat", FnField::new(Aabb::EMPTY, |_: Vec3| 100.0f32).shared());

    let mut canvas = test_canvas();
    canvas.add_channels_parallel(&channels).unwrap();
    assert_eq!(canvas.values(), canvas_with(&sphere).values());

    let missing = FieldChannels::new(Aabb::EMPTY);
    assert_eq!(
        canvas.add_channels(&missing),
        Err(FieldError::MissingChannel(POSITION_ATTRIBUTE.to_string()))
    );
}

#[test]
fn clear_resets_canvas() {
    let mut canvas = canvas_with(&test_sphere());
    canvas.clear();
    assert!(canvas.values().iter().all(|&v| v == 0.0));
    assert!(canvas.march(0.0).is_empty());
}
