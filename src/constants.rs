// Element ids the hero page exposes to the controllers, plus per-element
// parallax damping. Scene tuning constants live in `core/cube.rs`.

pub const SCENE_MOUNT_ID: &str = "scene-mount";
pub const HERO_TITLE_ID: &str = "hero-title";
pub const HERO_SUBTITLE_ID: &str = "hero-subtitle";

pub const MODAL_OVERLAY_ID: &str = "modal-overlay";
pub const MODAL_DIALOG_ID: &str = "modal-dialog";
pub const MODAL_CLOSE_ID: &str = "modal-close";

// Parallax damping per consumer (x factor, y factor); vertical inverts on
// apply so elements drift against the pointer.
pub const TITLE_DAMP: (f32, f32) = (0.35, 0.25);
pub const SUBTITLE_DAMP: (f32, f32) = (0.18, 0.12);
