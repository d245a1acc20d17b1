use crate::constants::{
    HERO_SUBTITLE_ID, HERO_TITLE_ID, MODAL_CLOSE_ID, MODAL_OVERLAY_ID, SUBTITLE_DAMP, TITLE_DAMP,
};
use crate::core::{damped, offset_from_client, ModalKind, ParallaxOffset};
use crate::dom;
use crate::overlay::ModalController;
use crate::scene::SceneController;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

// ---------------- Parallax ----------------

/// Track pointer and touch movement across the whole viewport and push the
/// damped offsets onto the hero elements. Only the latest offset matters.
pub fn wire_pointer_parallax(offset: Rc<RefCell<ParallaxOffset>>) {
    let Some(window) = web::window() else {
        return;
    };

    let offset_pointer = offset.clone();
    let pointer = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if let Some(w) = web::window() {
            let (vw, vh) = dom::viewport_size(&w);
            let next = offset_from_client(ev.client_x() as f32, ev.client_y() as f32, vw, vh);
            *offset_pointer.borrow_mut() = next;
            if let Some(document) = dom::window_document() {
                apply_offset(&document, next);
            }
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pointermove", pointer.as_ref().unchecked_ref());
    pointer.forget();

    let touch = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        // an event with no contact points is ignored outright
        let Some(contact) = ev.touches().get(0) else {
            return;
        };
        if let Some(w) = web::window() {
            let (vw, vh) = dom::viewport_size(&w);
            let next =
                offset_from_client(contact.client_x() as f32, contact.client_y() as f32, vw, vh);
            *offset.borrow_mut() = next;
            if let Some(document) = dom::window_document() {
                apply_offset(&document, next);
            }
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("touchmove", touch.as_ref().unchecked_ref());
    touch.forget();
}

fn apply_offset(document: &web::Document, offset: ParallaxOffset) {
    let (tx, ty) = damped(offset, TITLE_DAMP.0, TITLE_DAMP.1);
    set_translate(document, HERO_TITLE_ID, tx, ty);
    let (sx, sy) = damped(offset, SUBTITLE_DAMP.0, SUBTITLE_DAMP.1);
    set_translate(document, HERO_SUBTITLE_ID, sx, sy);
}

fn set_translate(document: &web::Document, id: &str, dx: f32, dy: f32) {
    if let Some(el) = document.get_element_by_id(id) {
        if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
            _ = el
                .style()
                .set_property("transform", &format!("translate3d({dx:.2}px, {dy:.2}px, 0)"));
        }
    }
}

// ---------------- Modal ----------------

/// Wire the four navigation triggers plus the close button.
pub fn wire_modal_triggers(modal: Rc<RefCell<ModalController>>, document: &web::Document) {
    for kind in ModalKind::ALL {
        let modal = modal.clone();
        dom::add_click_listener(document, &format!("nav-{}", kind.trigger()), move || {
            modal.borrow_mut().open(kind);
        });
    }
    let modal_close = modal.clone();
    dom::add_click_listener(document, MODAL_CLOSE_ID, move || {
        modal_close.borrow_mut().close();
    });
}

/// A click that lands on the overlay backdrop itself dismisses the dialog;
/// clicks on dialog content bubble up with a different target and do not.
pub fn wire_backdrop_dismiss(modal: Rc<RefCell<ModalController>>, document: &web::Document) {
    let Some(el) = document.get_element_by_id(MODAL_OVERLAY_ID) else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let hit_backdrop = matches!(
            (ev.target(), ev.current_target()),
            (Some(t), Some(c)) if same_target(&t, &c)
        );
        modal.borrow_mut().on_backdrop_click(hit_backdrop);
    }) as Box<dyn FnMut(_)>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// One permanent keydown listener; the state machine makes Escape inert
/// while nothing is open, so the listener count never grows.
pub fn wire_escape_close(modal: Rc<RefCell<ModalController>>) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.key() == "Escape" {
            modal.borrow_mut().on_escape();
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
fn same_target(a: &web::EventTarget, b: &web::EventTarget) -> bool {
    let a: &JsValue = a.as_ref();
    let b: &JsValue = b.as_ref();
    a == b
}

// ---------------- Lifecycle ----------------

/// Run the scene's release path when the page goes away, so a forced unmount
/// still tears down deterministically.
pub fn wire_page_teardown(scene: Rc<RefCell<SceneController>>) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move || {
        scene.borrow_mut().teardown();
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}
