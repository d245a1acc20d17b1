// Modal finite-state machine. Pure: the DOM layer applies the returned
// page effects, so the transition/scroll-lock discipline is host-testable.

/// Identifier of a dialog panel that can be brought in front of the hero card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    About,
    Projects,
    Contact,
    Links,
}

impl ModalKind {
    pub const ALL: [ModalKind; 4] = [
        ModalKind::About,
        ModalKind::Projects,
        ModalKind::Contact,
        ModalKind::Links,
    ];

    /// Opaque trigger name passed in from the view layer's click handlers.
    pub fn from_trigger(name: &str) -> Option<ModalKind> {
        match name {
            "about" => Some(ModalKind::About),
            "projects" => Some(ModalKind::Projects),
            "contact" => Some(ModalKind::Contact),
            "links" => Some(ModalKind::Links),
            _ => None,
        }
    }

    pub fn trigger(self) -> &'static str {
        match self {
            ModalKind::About => "about",
            ModalKind::Projects => "projects",
            ModalKind::Contact => "contact",
            ModalKind::Links => "links",
        }
    }
}

/// Which dialog is in front, if any. Exactly one value is active at a time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    About,
    Projects,
    Contact,
    Links,
}

impl ModalState {
    pub fn is_open(self) -> bool {
        self != ModalState::Closed
    }

    pub fn kind(self) -> Option<ModalKind> {
        match self {
            ModalState::Closed => None,
            ModalState::About => Some(ModalKind::About),
            ModalState::Projects => Some(ModalKind::Projects),
            ModalState::Contact => Some(ModalKind::Contact),
            ModalState::Links => Some(ModalKind::Links),
        }
    }
}

impl From<ModalKind> for ModalState {
    fn from(kind: ModalKind) -> ModalState {
        match kind {
            ModalKind::About => ModalState::About,
            ModalKind::Projects => ModalState::Projects,
            ModalKind::Contact => ModalState::Contact,
            ModalKind::Links => ModalState::Links,
        }
    }
}

/// Page-level work the caller must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEffect {
    /// First open from `Closed`: lock page scrolling and move focus into
    /// the dialog on the next tick.
    Lock,
    /// Back to `Closed`: restore the overflow value saved when the page
    /// locked. Restored verbatim, never a hardcoded default.
    Unlock { overflow: String },
    /// No page-level change (e.g. switching between open dialogs, or a
    /// close request while already closed).
    None,
}

/// State machine over the five modal states. Owns the scroll snapshot taken
/// when the page first locks; the snapshot lives exactly as long as a dialog
/// is open.
#[derive(Debug, Default)]
pub struct ModalMachine {
    state: ModalState,
    saved_overflow: Option<String>,
}

impl ModalMachine {
    pub fn new() -> ModalMachine {
        ModalMachine::default()
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// From any state to `kind`. The overflow snapshot is taken only on the
    /// Closed -> open edge, so switching panels never re-snapshots a value
    /// the machine itself wrote.
    #[must_use]
    pub fn open(&mut self, kind: ModalKind, current_overflow: &str) -> PageEffect {
        let was_closed = !self.state.is_open();
        self.state = kind.into();
        if was_closed {
            self.saved_overflow = Some(current_overflow.to_string());
            PageEffect::Lock
        } else {
            PageEffect::None
        }
    }

    /// From any open state back to `Closed`. Idempotent: closing while
    /// already closed has no effect.
    #[must_use]
    pub fn close(&mut self) -> PageEffect {
        if !self.state.is_open() {
            return PageEffect::None;
        }
        self.state = ModalState::Closed;
        let overflow = self.saved_overflow.take().unwrap_or_default();
        PageEffect::Unlock { overflow }
    }

    /// Escape closes whatever is open; inert while closed.
    #[must_use]
    pub fn on_escape(&mut self) -> PageEffect {
        self.close()
    }

    /// Pointer release on the dimmed backdrop closes the dialog; anywhere
    /// inside the dialog content does not. `hit_backdrop` is the DOM layer's
    /// target == currentTarget check on the overlay element.
    #[must_use]
    pub fn on_backdrop_click(&mut self, hit_backdrop: bool) -> PageEffect {
        if hit_backdrop {
            self.close()
        } else {
            PageEffect::None
        }
    }
}
