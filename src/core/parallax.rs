// Pointer-driven parallax. Pure math so it can be tested host-side.

/// Full sweep of the offset as the pointer crosses the viewport, in CSS px.
pub const PARALLAX_SPAN: f32 = 18.0;
/// Bound on either component of the offset (half the span).
pub const PARALLAX_MAX: f32 = 9.0;

/// Bounded 2D displacement derived from the latest pointer position.
/// Only the most recent value matters; no history is kept.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ParallaxOffset {
    pub x: f32,
    pub y: f32,
}

impl ParallaxOffset {
    pub const ZERO: ParallaxOffset = ParallaxOffset { x: 0.0, y: 0.0 };
}

/// Map a pointer position (viewport-relative, CSS px) to a bounded offset.
/// The position is normalized against the full viewport, not the scene mount.
#[inline]
pub fn offset_from_client(
    client_x: f32,
    client_y: f32,
    viewport_w: f32,
    viewport_h: f32,
) -> ParallaxOffset {
    let w = viewport_w.max(1.0);
    let h = viewport_h.max(1.0);
    ParallaxOffset {
        x: ((client_x / w - 0.5) * PARALLAX_SPAN).clamp(-PARALLAX_MAX, PARALLAX_MAX),
        y: ((client_y / h - 0.5) * PARALLAX_SPAN).clamp(-PARALLAX_MAX, PARALLAX_MAX),
    }
}

/// Per-element displacement: damped horizontally, damped and inverted
/// vertically. Damping factors are per-consumer configuration.
#[inline]
pub fn damped(offset: ParallaxOffset, damp_x: f32, damp_y: f32) -> (f32, f32) {
    (offset.x * damp_x, -offset.y * damp_y)
}
