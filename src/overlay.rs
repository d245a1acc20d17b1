use crate::constants::{MODAL_DIALOG_ID, MODAL_OVERLAY_ID};
use crate::core::{ModalKind, ModalMachine, PageEffect};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drives the modal state machine and applies its page effects: overlay
/// visibility, the body scroll lock, and deferred focus into the dialog.
#[derive(Default)]
pub struct ModalController {
    machine: ModalMachine,
}

impl ModalController {
    pub fn new() -> ModalController {
        ModalController::default()
    }

    pub fn open(&mut self, kind: ModalKind) {
        let Some(document) = dom::window_document() else {
            return;
        };
        let current = body_overflow(&document);
        if self.machine.open(kind, &current) == PageEffect::Lock {
            set_body_overflow(&document, "hidden");
        }
        log::info!("[modal] open {}", kind.trigger());
        show(&document, kind);
        // deferred so the panel is visible before focus moves
        schedule_dialog_focus();
    }

    pub fn close(&mut self) {
        self.apply_close(self.machine.close());
    }

    pub fn on_escape(&mut self) {
        self.apply_close(self.machine.on_escape());
    }

    pub fn on_backdrop_click(&mut self, hit_backdrop: bool) {
        self.apply_close(self.machine.on_backdrop_click(hit_backdrop));
    }

    fn apply_close(&mut self, effect: PageEffect) {
        if let PageEffect::Unlock { overflow } = effect {
            if let Some(document) = dom::window_document() {
                // restore the exact pre-open value; an empty snapshot
                // clears the property, same as the assignment that saved it
                set_body_overflow(&document, &overflow);
                hide(&document);
                log::info!("[modal] closed");
            }
        }
    }
}

#[inline]
fn section_id(kind: ModalKind) -> String {
    format!("modal-{}", kind.trigger())
}

// Visibility toggles go through the `hidden` class, with an inline
// `display` fallback for environments without the CSS class. Only the
// display property is touched, never the rest of the element's style.
fn reveal(el: &web::Element) {
    _ = el.class_list().remove_1("hidden");
    if let Some(el) = el.dyn_ref::<web::HtmlElement>() {
        _ = el.style().remove_property("display");
    }
}

fn conceal(el: &web::Element) {
    _ = el.class_list().add_1("hidden");
    if let Some(el) = el.dyn_ref::<web::HtmlElement>() {
        _ = el.style().set_property("display", "none");
    }
}

/// Reveal the overlay with only `kind`'s panel visible.
pub fn show(document: &web::Document, kind: ModalKind) {
    if let Some(el) = document.get_element_by_id(MODAL_OVERLAY_ID) {
        reveal(&el);
    }
    for other in ModalKind::ALL {
        if let Some(el) = document.get_element_by_id(&section_id(other)) {
            if other == kind {
                reveal(&el);
            } else {
                conceal(&el);
            }
        }
    }
}

pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MODAL_OVERLAY_ID) {
        conceal(&el);
    }
}

fn body_overflow(document: &web::Document) -> String {
    document
        .body()
        .and_then(|b| b.style().get_property_value("overflow").ok())
        .unwrap_or_default()
}

fn set_body_overflow(document: &web::Document, value: &str) {
    if let Some(body) = document.body() {
        _ = body.style().set_property("overflow", value);
    }
}

// Move focus to the dialog container on the next tick, once it exists in
// the presentation layer. `once_into_js` frees the callback after it fires.
fn schedule_dialog_focus() {
    let Some(window) = web::window() else {
        return;
    };
    let cb = Closure::once_into_js(move || {
        if let Some(document) = dom::window_document() {
            if let Some(el) = document.get_element_by_id(MODAL_DIALOG_ID) {
                if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
                    _ = el.focus();
                }
            }
        }
    });
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), 0);
}
