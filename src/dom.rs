use crate::core::capped_pixel_ratio;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Viewport size in CSS pixels; falls back to 1x1 if the host reports nothing.
#[inline]
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    (w as f32, h as f32)
}

/// Size the canvas backing store to the mount's CSS size times the capped
/// device pixel ratio. Reads the mount, not the canvas, so it works before
/// the canvas has been laid out.
pub fn sync_canvas_to_mount(canvas: &web::HtmlCanvasElement, mount: &web::HtmlElement) {
    if let Some(w) = web::window() {
        let dpr = capped_pixel_ratio(w.device_pixel_ratio());
        let rect = mount.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
