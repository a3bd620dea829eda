use anyhow::anyhow;
use backdrop_core::{ProfileBox, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn query_html(document: &web::Document, selector: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .query_selector(selector)
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("missing {}", selector))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("{:?}", e))
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("{:?}", e))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("{:?}", e))
}

/// Current device pixel ratio, falling back to 1 where the browser
/// reports nothing usable.
pub fn pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|r| r.is_finite() && *r > 0.0)
        .unwrap_or(1.0)
}

pub fn window_viewport() -> anyhow::Result<Viewport> {
    let w = web::window().ok_or_else(|| anyhow!("no window"))?;
    let width = w
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = w
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Ok(Viewport::new(width, height, pixel_ratio())?)
}

/// Size the backing store for `viewport` and scale drawing so callers work
/// in CSS pixels.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    viewport: &Viewport,
) {
    let (w_px, h_px) = viewport.backing_size();
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    let (w_css, h_css) = viewport.style_size();
    let style = canvas.style();
    _ = style.set_property("width", &w_css);
    _ = style.set_property("height", &h_css);
    let dpr = viewport.pixel_ratio;
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
}

pub fn profile_box(container: &web::HtmlElement) -> ProfileBox {
    let rect = container.get_bounding_client_rect();
    ProfileBox::from_rect(rect.left(), rect.top(), rect.width(), rect.height())
}

fn set_styles(el: &web::HtmlElement, props: &[(&str, &str)]) {
    let style = el.style();
    for (name, value) in props {
        _ = style.set_property(name, value);
    }
}

/// Round, fixed-size container that lets the overlay spill outside it.
pub fn style_profile(container: &web::HtmlElement, photo: &web::HtmlElement) {
    let size = format!("{}px", CONTAINER_SIZE_PX);
    set_styles(
        container,
        &[
            ("border", "none"),
            ("box-shadow", "none"),
            ("overflow", "visible"),
            ("width", &size),
            ("height", &size),
            ("border-radius", "50%"),
            ("position", "relative"),
        ],
    );
    set_styles(
        photo,
        &[
            ("width", "100%"),
            ("height", "100%"),
            ("border-radius", "75%"),
        ],
    );
}

/// Create the density-scaled overlay canvas and mount it inside the
/// profile container.
pub fn mount_overlay(
    document: &web::Document,
    container: &web::HtmlElement,
) -> anyhow::Result<(web::HtmlCanvasElement, web::CanvasRenderingContext2d)> {
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("{:?}", e))?;
    let ctx = context_2d(&canvas)?;
    let viewport = Viewport::new(OVERLAY_SIZE_PX, OVERLAY_SIZE_PX, pixel_ratio())?;
    sync_canvas_backing_size(&canvas, &ctx, &viewport);

    let offset = format!("{}px", OVERLAY_OFFSET_PX);
    set_styles(
        &canvas,
        &[
            ("position", "absolute"),
            ("top", &offset),
            ("left", &offset),
            ("z-index", OVERLAY_Z_INDEX),
            ("pointer-events", "none"),
            ("border-radius", "50%"),
        ],
    );
    container
        .append_child(&canvas)
        .map_err(|e| anyhow!("{:?}", e))?;
    Ok((canvas, ctx))
}

pub fn set_transform(el: &web::HtmlElement, css: &str) {
    _ = el.style().set_property("transform", css);
}

pub fn add_listener<T>(target: &web::EventTarget, event: &str, handler: T)
where
    T: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
