use crate::core::{ResourceLedger, ScenePhase};
use crate::{dom, frame, render};
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Owns the embedded 3D scene: canvas, renderer, frame loop, and the window
/// resize listener. Everything acquired in `initialize` is released exactly
/// once in `teardown`, whichever exit path runs first.
pub struct SceneController {
    mount: web::HtmlElement,
    canvas: web::HtmlCanvasElement,
    frame_ctx: Option<Rc<RefCell<frame::FrameContext>>>,
    raf: Option<frame::RafLoop>,
    resize_listener: Option<Closure<dyn FnMut()>>,
    ledger: ResourceLedger,
    phase: ScenePhase,
}

impl SceneController {
    /// Attach a canvas to the mount and bring up the renderer. A missing
    /// rendering context is non-fatal: the controller logs once and stays
    /// static, leaving the page's decorative layers untouched.
    pub async fn initialize(mount: web::HtmlElement) -> anyhow::Result<Rc<RefCell<Self>>> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        _ = canvas.set_attribute("style", "display:block;width:100%;height:100%");
        dom::sync_canvas_to_mount(&canvas, &mount);
        mount
            .append_child(&canvas)
            .map_err(|e| anyhow::anyhow!("attach canvas: {:?}", e))?;

        let mut ledger = ResourceLedger::default();
        let gpu = init_gpu(&canvas, &mut ledger).await;

        let controller = match gpu {
            Some(gpu) => {
                let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
                    gpu,
                    canvas: canvas.clone(),
                    started: Instant::now(),
                }));
                let raf = frame::start_loop(frame_ctx.clone());
                Rc::new(RefCell::new(SceneController {
                    mount,
                    canvas,
                    frame_ctx: Some(frame_ctx),
                    raf: Some(raf),
                    resize_listener: None,
                    ledger,
                    phase: ScenePhase::Running,
                }))
            }
            None => {
                // Degrade to a static background: drop the canvas again so
                // the decorative CSS layers stay visible.
                if let Some(parent) = canvas.parent_node() {
                    _ = parent.remove_child(&canvas);
                }
                Rc::new(RefCell::new(SceneController {
                    mount,
                    canvas,
                    frame_ctx: None,
                    raf: None,
                    resize_listener: None,
                    ledger,
                    phase: ScenePhase::Degraded,
                }))
            }
        };

        if controller.borrow().phase == ScenePhase::Running {
            wire_resize(&controller);
        }
        Ok(controller)
    }

    pub fn phase(&self) -> ScenePhase {
        self.phase
    }

    /// Recompute the backing store and projection for the mount's current
    /// size. Repeated identical dimensions are a no-op downstream.
    pub fn on_resize(&mut self) {
        if self.phase != ScenePhase::Running {
            return;
        }
        dom::sync_canvas_to_mount(&self.canvas, &self.mount);
        if let Some(ctx) = &self.frame_ctx {
            let (w, h) = (self.canvas.width(), self.canvas.height());
            ctx.borrow_mut().gpu.resize_if_needed(w, h);
        }
    }

    /// Release everything acquired by `initialize`: cancel the frame loop,
    /// drop the resize listener, detach the canvas (a no-op if an external
    /// actor already removed it), and destroy both geometry/material pairs.
    /// Runs at most once; later calls return immediately.
    pub fn teardown(&mut self) {
        if !self.phase.take_teardown() {
            return;
        }
        if let Some(raf) = self.raf.take() {
            raf.cancel();
        }
        if let Some(listener) = self.resize_listener.take() {
            if let Some(w) = web::window() {
                _ = w.remove_event_listener_with_callback(
                    "resize",
                    listener.as_ref().unchecked_ref(),
                );
            }
            self.ledger.remove_listener();
        }
        if let Some(parent) = self.canvas.parent_node() {
            _ = parent.remove_child(&self.canvas);
        }
        if let Some(ctx) = self.frame_ctx.take() {
            // cancel() above dropped the tick closure's clone, so this is
            // the last strong reference
            if let Ok(cell) = Rc::try_unwrap(ctx) {
                cell.into_inner().gpu.dispose(&mut self.ledger);
            }
        }
        log::info!(
            "scene torn down; resources balanced={}",
            self.ledger.balanced()
        );
    }
}

async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    ledger: &mut ResourceLedger,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, ledger).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::warn!("rendering context unavailable; hero stays static: {:?}", e);
            None
        }
    }
}

fn wire_resize(controller: &Rc<RefCell<SceneController>>) {
    let weak: Weak<RefCell<SceneController>> = Rc::downgrade(controller);
    let closure = Closure::wrap(Box::new(move || {
        if let Some(rc) = weak.upgrade() {
            rc.borrow_mut().on_resize();
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        let mut c = controller.borrow_mut();
        c.resize_listener = Some(closure);
        c.ledger.add_listener();
    }
}
