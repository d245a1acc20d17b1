#![cfg(target_arch = "wasm32")]
use crate::core::ParallaxOffset;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod scene;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("neon-hero-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let mount: web::HtmlElement = document
        .get_element_by_id(constants::SCENE_MOUNT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::SCENE_MOUNT_ID))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    // Embedded 3D scene; degrades to a static background on its own.
    let scene = scene::SceneController::initialize(mount).await?;
    events::wire_page_teardown(scene.clone());

    // Pointer/touch parallax over the whole viewport.
    let offset = Rc::new(RefCell::new(ParallaxOffset::ZERO));
    events::wire_pointer_parallax(offset);

    // Modal overlay: nav triggers, backdrop dismiss, Escape.
    let modal = Rc::new(RefCell::new(overlay::ModalController::new()));
    events::wire_modal_triggers(modal.clone(), &document);
    events::wire_backdrop_dismiss(modal.clone(), &document);
    events::wire_escape_close(modal);

    log::info!("hero wired: scene phase {:?}", scene.borrow().phase());
    Ok(())
}
