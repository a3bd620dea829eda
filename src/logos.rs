//! Tech logo images, fetched once at startup.
//!
//! Each image reports back into the scene when it finishes: a loaded logo
//! starts fading in and out, a failed one keeps its badge invisible. There
//! is no retry.

use backdrop_core::{LogoState, Scene, Tech};
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Default)]
pub struct LogoAtlas {
    images: FnvHashMap<Tech, web::HtmlImageElement>,
}

impl LogoAtlas {
    pub fn image(&self, tech: Tech) -> Option<&web::HtmlImageElement> {
        self.images.get(&tech)
    }

    /// Start fetching every logo. Load results are delivered to `scene`.
    pub fn load(techs: &[Tech], scene: &Rc<RefCell<Scene>>) -> Self {
        let mut images = FnvHashMap::default();
        for &tech in techs {
            let img = match web::HtmlImageElement::new() {
                Ok(i) => i,
                Err(_) => continue,
            };
            wire_result(&img, tech, scene);
            img.set_src(tech.logo_url());
            images.insert(tech, img);
        }
        Self { images }
    }
}

fn wire_result(img: &web::HtmlImageElement, tech: Tech, scene: &Rc<RefCell<Scene>>) {
    let scene_ok = scene.clone();
    let onload = Closure::wrap(Box::new(move || {
        scene_ok.borrow_mut().set_logo(tech, LogoState::Ready);
        log::info!("[logo] {} ready", tech.id());
    }) as Box<dyn FnMut()>);
    img.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    let scene_err = scene.clone();
    let onerror = Closure::wrap(Box::new(move || {
        scene_err.borrow_mut().set_logo(tech, LogoState::Failed);
        log::debug!("[logo] {} failed to load", tech.id());
    }) as Box<dyn FnMut()>);
    img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();
}
