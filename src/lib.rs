#![cfg(target_arch = "wasm32")]
use backdrop_core::{ProfileFrame, Scene, SceneParams};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod logos;

use canvas::CanvasSurface;
use constants::{BACKGROUND_CANVAS_ID, PROFILE_CONTAINER_SELECTOR, PROFILE_IMAGE_SELECTOR};
use logos::LogoAtlas;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("neural-backdrop starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document: web::Document =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Page canvas
    let canvas = dom::canvas_by_id(&document, BACKGROUND_CANVAS_ID)?;
    let ctx = dom::context_2d(&canvas)?;
    let viewport = dom::window_viewport()?;
    dom::sync_canvas_backing_size(&canvas, &ctx, &viewport);

    // Profile photo and its overlay
    let container = dom::query_html(&document, PROFILE_CONTAINER_SELECTOR)?;
    let photo = dom::query_html(&document, PROFILE_IMAGE_SELECTOR)?;
    dom::style_profile(&container, &photo);
    let (_overlay, overlay_ctx) = dom::mount_overlay(&document, &container)?;

    let params = SceneParams::default();
    let scene = Rc::new(RefCell::new(Scene::new(
        &params,
        viewport,
        dom::profile_box(&container),
        rand::random(),
    )));
    let logos = Rc::new(LogoAtlas::load(&params.techs, &scene));

    events::wire_profile_pointer(&container, &scene);
    events::wire_resize(canvas, ctx.clone(), container.clone(), scene.clone());

    let background = Rc::new(RefCell::new(frame::BackgroundContext {
        scene: scene.clone(),
        surface: CanvasSurface::with_logos(ctx, logos),
        container: container.clone(),
        last_instant: Instant::now(),
    }));
    let profile = Rc::new(RefCell::new(frame::ProfileContext {
        scene,
        frame: ProfileFrame::new(),
        surface: CanvasSurface::new(overlay_ctx),
        container,
    }));
    let loops = frame::start_loops(background, profile);
    events::wire_visibility(&document, loops);

    Ok(())
}
