// Scene lifecycle accounting. Acquisition and release must pair exactly
// once per mount, on every exit path; the ledger makes that countable.

/// Lifecycle phase of the embedded scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenePhase {
    /// Renderer attached and the frame loop is scheduled.
    Running,
    /// No rendering context could be created; the hero stays static.
    Degraded,
    /// Resources released; the controller is inert.
    TornDown,
}

impl ScenePhase {
    /// Claims the one permitted teardown: returns `true` and flips to
    /// `TornDown` the first time, `false` on every later call.
    pub fn take_teardown(&mut self) -> bool {
        if *self == ScenePhase::TornDown {
            false
        } else {
            *self = ScenePhase::TornDown;
            true
        }
    }
}

/// Counts acquire/release pairs for the resources a scene mount owns:
/// geometry buffers, material (color/uniform) buffers, window listeners.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ResourceLedger {
    pub geometries_acquired: u32,
    pub geometries_released: u32,
    pub materials_acquired: u32,
    pub materials_released: u32,
    pub listeners_added: u32,
    pub listeners_removed: u32,
}

impl ResourceLedger {
    pub fn acquire_geometry(&mut self) {
        self.geometries_acquired += 1;
    }

    pub fn release_geometry(&mut self) {
        self.geometries_released += 1;
    }

    pub fn acquire_material(&mut self) {
        self.materials_acquired += 1;
    }

    pub fn release_material(&mut self) {
        self.materials_released += 1;
    }

    pub fn add_listener(&mut self) {
        self.listeners_added += 1;
    }

    pub fn remove_listener(&mut self) {
        self.listeners_removed += 1;
    }

    /// True when every acquisition has been matched by exactly one release.
    pub fn balanced(&self) -> bool {
        self.geometries_acquired == self.geometries_released
            && self.materials_acquired == self.materials_released
            && self.listeners_added == self.listeners_removed
    }

    /// Number of resources still held (or over-released, counted the same).
    pub fn outstanding(&self) -> u32 {
        self.geometries_acquired.abs_diff(self.geometries_released)
            + self.materials_acquired.abs_diff(self.materials_released)
            + self.listeners_added.abs_diff(self.listeners_removed)
    }
}
