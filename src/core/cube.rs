use glam::{Mat4, Vec3};

// Scene tuning constants used by the web frontend.

// Camera
pub const CAMERA_FOV_Y: f32 = std::f32::consts::PI / 3.0; // 60 degrees
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 5.0;

// Cube geometry
pub const OUTER_EDGE: f32 = 3.2;
pub const INNER_EDGE: f32 = 2.6;

// Layer colors (premultiplied nowhere; alpha-blended at draw time)
pub const OUTER_COLOR: [f32; 4] = [0.0, 1.0, 1.0, 0.35]; // translucent cyan
pub const INNER_COLOR: [f32; 4] = [1.0, 0.0, 1.0, 1.0]; // magenta

// Rotation rates, radians per elapsed second
pub const SPIN_X_PER_SEC: f32 = 0.06;
pub const SPIN_Y_PER_SEC: f32 = 0.08;
pub const WOBBLE_Z_RATE: f32 = 0.3;
pub const WOBBLE_Z_AMPLITUDE: f32 = 0.02;

// Backing-store cap: device pixel ratio above this wastes fill rate on a
// blurred decorative layer.
pub const PIXEL_RATIO_CAP: f64 = 1.75;

/// Device pixel ratio clamped to the cap; a non-positive ratio reads as 1.
#[inline]
pub fn capped_pixel_ratio(device_ratio: f64) -> f64 {
    let dpr = if device_ratio > 0.0 { device_ratio } else { 1.0 };
    dpr.min(PIXEL_RATIO_CAP)
}

/// Cube orientation after `t` elapsed seconds as XYZ Euler angles. The inner
/// overlay copies this orientation exactly; it has no independent motion.
#[inline]
pub fn rotation_at(t: f32) -> Vec3 {
    Vec3::new(
        SPIN_X_PER_SEC * t,
        SPIN_Y_PER_SEC * t,
        (WOBBLE_Z_RATE * t).sin() * WOBBLE_Z_AMPLITUDE,
    )
}

#[inline]
pub fn model_matrix(t: f32) -> Mat4 {
    let r = rotation_at(t);
    Mat4::from_euler(glam::EulerRot::XYZ, r.x, r.y, r.z)
}

/// Combined view-projection for the fixed camera at (0, 0, CAMERA_Z) looking
/// at the origin.
#[inline]
pub fn view_proj(aspect: f32) -> Mat4 {
    let proj = Mat4::perspective_rh(CAMERA_FOV_Y, aspect.max(1e-6), CAMERA_NEAR, CAMERA_FAR);
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, CAMERA_Z), Vec3::ZERO, Vec3::Y);
    proj * view
}

/// Uniform contents for one cube layer on one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerUniform {
    pub mvp: Mat4,
    pub color: [f32; 4],
}

/// Per-frame uniforms for both layers, outer first. The single mvp is
/// computed once and handed to both, so the inner overlay cannot drift
/// from the outer cube's orientation.
pub fn layer_uniforms(t: f32, aspect: f32) -> [LayerUniform; 2] {
    let mvp = view_proj(aspect) * model_matrix(t);
    [
        LayerUniform {
            mvp,
            color: OUTER_COLOR,
        },
        LayerUniform {
            mvp,
            color: INNER_COLOR,
        },
    ]
}

// Box faces as unit half-extent corner quads, counter-clockwise.
fn face_quads() -> [[[f32; 3]; 4]; 6] {
    [
        [[-1., -1., 1.], [1., -1., 1.], [1., 1., 1.], [-1., 1., 1.]], // +z
        [[1., -1., -1.], [-1., -1., -1.], [-1., 1., -1.], [1., 1., -1.]], // -z
        [[1., -1., 1.], [1., -1., -1.], [1., 1., -1.], [1., 1., 1.]], // +x
        [[-1., -1., -1.], [-1., -1., 1.], [-1., 1., 1.], [-1., 1., -1.]], // -x
        [[-1., 1., 1.], [1., 1., 1.], [1., 1., -1.], [-1., 1., -1.]], // +y
        [[-1., -1., -1.], [1., -1., -1.], [1., -1., 1.], [-1., -1., 1.]], // -y
    ]
}

/// Line-list for the outer cube drawn as a triangulated wireframe: every
/// triangle edge, diagonals included, matching the classic wireframe look.
/// Returns 72 vertices (36 segments).
pub fn wireframe_vertices(edge: f32) -> Vec<[f32; 3]> {
    let h = edge * 0.5;
    let mut out = Vec::with_capacity(72);
    for quad in face_quads() {
        let q: Vec<[f32; 3]> = quad.iter().map(|c| [c[0] * h, c[1] * h, c[2] * h]).collect();
        for tri in [[0usize, 1, 2], [0, 2, 3]] {
            for k in 0..3 {
                out.push(q[tri[k]]);
                out.push(q[tri[(k + 1) % 3]]);
            }
        }
    }
    out
}

/// Line-list of only the twelve hard edges of a box, for the inner overlay.
/// Returns 24 vertices (12 segments).
pub fn edge_vertices(edge: f32) -> Vec<[f32; 3]> {
    let h = edge * 0.5;
    let corner = |i: u8| -> [f32; 3] {
        [
            if i & 1 == 0 { -h } else { h },
            if i & 2 == 0 { -h } else { h },
            if i & 4 == 0 { -h } else { h },
        ]
    };
    let mut out = Vec::with_capacity(24);
    for a in 0..8u8 {
        for b in (a + 1)..8 {
            // corners joined by an edge differ in exactly one axis
            if (a ^ b).count_ones() == 1 {
                out.push(corner(a));
                out.push(corner(b));
            }
        }
    }
    out
}
