use crate::canvas::CanvasSurface;
use crate::constants::MAX_FRAME_DT_MS;
use crate::dom;
use backdrop_core::{ProfileFrame, Scene};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Page canvas loop: dust, badges, ring projections, bursts and links.
pub struct BackgroundContext {
    pub scene: Rc<RefCell<Scene>>,
    pub surface: CanvasSurface,
    pub container: web::HtmlElement,
    pub last_instant: Instant,
}

impl BackgroundContext {
    pub fn frame(&mut self) {
        let dt = frame_dt(&mut self.last_instant);
        let profile = dom::profile_box(&self.container);
        self.scene
            .borrow_mut()
            .frame(dt, profile, &mut self.surface);
    }
}

/// Overlay loop: ring around the photo, outline and container transform.
pub struct ProfileContext {
    pub scene: Rc<RefCell<Scene>>,
    pub frame: ProfileFrame,
    pub surface: CanvasSurface,
    pub container: web::HtmlElement,
}

impl ProfileContext {
    pub fn frame(&mut self) {
        let transform = {
            let scene = self.scene.borrow();
            self.frame.frame(&scene, &mut self.surface)
        };
        dom::set_transform(&self.container, &transform.to_css());
    }
}

fn frame_dt(last: &mut Instant) -> Duration {
    let now = Instant::now();
    let dt = now - *last;
    *last = now;
    dt.min(Duration::from_millis(MAX_FRAME_DT_MS))
}

/// A self-rescheduling `requestAnimationFrame` callback that can be
/// suspended and resumed.
#[derive(Clone)]
pub struct RafLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl RafLoop {
    pub fn new(mut body: impl FnMut() + 'static) -> Self {
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick_clone = tick.clone();
        let pending_clone = pending.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_clone.set(None);
            body();
            pending_clone.set(request(&tick_clone));
        }) as Box<dyn FnMut()>));
        Self { tick, pending }
    }

    pub fn is_running(&self) -> bool {
        self.pending.get().is_some()
    }

    pub fn start(&self) {
        if self.is_running() {
            return;
        }
        self.pending.set(request(&self.tick));
    }

    pub fn stop(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

fn request(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let w = web::window()?;
    let cb = tick.borrow();
    let cb = cb.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

pub fn start_loops(
    background: Rc<RefCell<BackgroundContext>>,
    profile: Rc<RefCell<ProfileContext>>,
) -> [RafLoop; 2] {
    let page = RafLoop::new(move || background.borrow_mut().frame());
    let overlay = RafLoop::new(move || profile.borrow_mut().frame());
    page.start();
    overlay.start();
    log::info!("[loop] page and profile loops started");
    [page, overlay]
}
