// Host-side tests for the pure scene math and geometry builders.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod cube {
    include!("../src/core/cube.rs");
}

use cube::*;

#[test]
fn spin_angles_never_decrease() {
    let mut prev = rotation_at(0.0);
    for i in 1..=600 {
        let r = rotation_at(i as f32 * 0.25);
        assert!(r.x >= prev.x, "rx decreased at step {}", i);
        assert!(r.y >= prev.y, "ry decreased at step {}", i);
        prev = r;
    }
}

#[test]
fn wobble_stays_within_amplitude() {
    for i in 0..=2000 {
        let r = rotation_at(i as f32 * 0.1);
        assert!(r.z >= -WOBBLE_Z_AMPLITUDE && r.z <= WOBBLE_Z_AMPLITUDE);
    }
}

#[test]
fn rotation_starts_at_identity() {
    assert_eq!(rotation_at(0.0), glam::Vec3::ZERO);
    assert_eq!(model_matrix(0.0), glam::Mat4::IDENTITY);
}

#[test]
fn rotation_rates_match_the_tuning() {
    let r = rotation_at(10.0);
    assert!((r.x - 0.6).abs() < 1e-5);
    assert!((r.y - 0.8).abs() < 1e-5);
}

#[test]
fn inner_overlay_copies_the_outer_rotation() {
    // the renderer writes exactly these uniforms to the two layers; the
    // overlay must receive the outer cube's mvp bit for bit at every tick
    for i in 0..100 {
        let t = i as f32 * 0.37;
        let [outer, inner] = layer_uniforms(t, 16.0 / 9.0);
        assert_eq!(outer.mvp, inner.mvp);
    }
}

#[test]
fn layers_keep_their_own_colors() {
    let [outer, inner] = layer_uniforms(3.0, 1.5);
    assert_eq!(outer.color, OUTER_COLOR);
    assert_eq!(inner.color, INNER_COLOR);
    assert_ne!(outer.color, inner.color);
}

#[test]
fn resize_changes_projection_and_repeats_are_stable() {
    let before = view_proj(800.0 / 600.0);
    let after = view_proj(1200.0 / 900.0);
    // 800x600 and 1200x900 share an aspect ratio; the projection must not
    // drift when dimensions change but aspect does not
    assert_eq!(before, after);

    let wide = view_proj(1920.0 / 1080.0);
    assert_ne!(before, wide);
    assert_eq!(wide, view_proj(1920.0 / 1080.0));
}

#[test]
fn resize_does_not_touch_rotation_state() {
    let t = 42.5;
    let before = rotation_at(t);
    let _ = view_proj(2.0);
    assert_eq!(rotation_at(t), before);
}

#[test]
fn pixel_ratio_is_capped() {
    assert_eq!(capped_pixel_ratio(1.0), 1.0);
    assert_eq!(capped_pixel_ratio(1.5), 1.5);
    assert_eq!(capped_pixel_ratio(2.0), PIXEL_RATIO_CAP);
    assert_eq!(capped_pixel_ratio(3.0), PIXEL_RATIO_CAP);
    // a host reporting no ratio reads as 1
    assert_eq!(capped_pixel_ratio(0.0), 1.0);
    assert_eq!(capped_pixel_ratio(-2.0), 1.0);
}

#[test]
fn wireframe_covers_every_triangle_edge() {
    let verts = wireframe_vertices(OUTER_EDGE);
    // 6 faces x 2 triangles x 3 edges x 2 endpoints
    assert_eq!(verts.len(), 72);
    let h = OUTER_EDGE * 0.5;
    for v in &verts {
        for c in v {
            assert!(c.abs() <= h + 1e-6);
        }
    }
    // each face contributes its triangulation diagonal
    let diag = OUTER_EDGE * std::f32::consts::SQRT_2;
    let has_diagonal = verts.chunks(2).any(|seg| {
        let d = ((seg[0][0] - seg[1][0]).powi(2)
            + (seg[0][1] - seg[1][1]).powi(2)
            + (seg[0][2] - seg[1][2]).powi(2))
        .sqrt();
        (d - diag).abs() < 1e-4
    });
    assert!(has_diagonal);
}

#[test]
fn edge_overlay_has_exactly_twelve_edges() {
    let verts = edge_vertices(INNER_EDGE);
    assert_eq!(verts.len(), 24);
    let h = INNER_EDGE * 0.5;
    for seg in verts.chunks(2) {
        // every endpoint is a corner
        for v in seg {
            for c in v {
                assert!((c.abs() - h).abs() < 1e-6);
            }
        }
        // every segment spans exactly one edge length
        let d = ((seg[0][0] - seg[1][0]).powi(2)
            + (seg[0][1] - seg[1][1]).powi(2)
            + (seg[0][2] - seg[1][2]).powi(2))
        .sqrt();
        assert!((d - INNER_EDGE).abs() < 1e-5);
    }
}

#[test]
fn scene_constants_match_the_design() {
    assert!((CAMERA_FOV_Y.to_degrees() - 60.0).abs() < 1e-4);
    assert_eq!(CAMERA_NEAR, 0.1);
    assert_eq!(CAMERA_FAR, 1000.0);
    assert_eq!(OUTER_EDGE, 3.2);
    assert_eq!(INNER_EDGE, 2.6);
    assert_eq!(OUTER_COLOR[3], 0.35);
    assert!(INNER_EDGE < OUTER_EDGE);
}
