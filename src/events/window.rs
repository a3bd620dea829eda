use crate::dom;
use crate::frame::RafLoop;
use backdrop_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Keep the page canvas at viewport size and the ring anchored to the
/// photo when the layout changes.
pub fn wire_resize(
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    container: web::HtmlElement,
    scene: Rc<RefCell<Scene>>,
) {
    let Some(window) = web::window() else {
        return;
    };
    let scene_scroll = scene.clone();
    let container_scroll = container.clone();

    dom::add_listener(&window, "resize", move || {
        let viewport = match dom::window_viewport() {
            Ok(v) => v,
            Err(e) => {
                log::debug!("[resize] ignored: {}", e);
                return;
            }
        };
        dom::sync_canvas_backing_size(&canvas, &ctx, &viewport);
        let mut scene = scene.borrow_mut();
        scene.resize(viewport);
        scene.refresh_profile(dom::profile_box(&container));
    });

    dom::add_listener(&window, "scroll", move || {
        scene_scroll
            .borrow_mut()
            .refresh_profile(dom::profile_box(&container_scroll));
    });
}

/// Suspend both loops while the page is hidden.
pub fn wire_visibility(document: &web::Document, loops: [RafLoop; 2]) {
    let doc = document.clone();
    dom::add_listener(document, "visibilitychange", move || {
        let hidden = doc.hidden();
        for l in &loops {
            if hidden {
                l.stop();
            } else {
                l.start();
            }
        }
        log::info!("[loop] {}", if hidden { "suspended" } else { "resumed" });
    });
}
