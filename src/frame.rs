use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame state: the renderer, the canvas whose backing size it tracks,
/// and the monotonic clock started at initialize.
pub struct FrameContext {
    pub gpu: render::GpuState<'static>,
    pub canvas: web::HtmlCanvasElement,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let t = self.started.elapsed().as_secs_f32();
        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        if let Err(e) = self.gpu.render(t) {
            log::error!("render error: {:?}", e);
        }
    }
}

/// Handle to the self-rescheduling requestAnimationFrame loop. The loop owns
/// its own closure through a cycle; `cancel` breaks the cycle, so dropping an
/// uncancelled handle leaks the loop by design of the host API.
pub struct RafLoop {
    raf_id: Rc<Cell<i32>>,
    cancelled: Rc<Cell<bool>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> RafLoop {
    let raf_id = Rc::new(Cell::new(0_i32));
    let cancelled = Rc::new(Cell::new(false));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let raf_for_tick = raf_id.clone();
    let cancelled_for_tick = cancelled.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if cancelled_for_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    raf_for_tick.set(id);
                }
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                raf_id.set(id);
            }
        }
    }

    RafLoop {
        raf_id,
        cancelled,
        tick,
    }
}

impl RafLoop {
    /// Stop the loop: cancel the pending frame and drop the tick closure.
    /// Idempotent, and safe after the canvas has already been detached.
    pub fn cancel(&self) {
        if self.cancelled.replace(true) {
            return;
        }
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(self.raf_id.get());
        }
        self.tick.borrow_mut().take();
    }
}
