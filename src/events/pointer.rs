use backdrop_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Hover speeds the ring up, leaving restores it, a click throws a burst.
pub fn wire_profile_pointer(container: &web::HtmlElement, scene: &Rc<RefCell<Scene>>) {
    wire_mouseenter(container, scene.clone());
    wire_mouseleave(container, scene.clone());
    wire_click(container, scene.clone());
}

fn wire_mouseenter(container: &web::HtmlElement, scene: Rc<RefCell<Scene>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_: web::MouseEvent| {
        scene.borrow_mut().hover_enter();
    }) as Box<dyn FnMut(_)>);
    _ = container.add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mouseleave(container: &web::HtmlElement, scene: Rc<RefCell<Scene>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_: web::MouseEvent| {
        scene.borrow_mut().hover_leave();
    }) as Box<dyn FnMut(_)>);
    _ = container.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_click(container: &web::HtmlElement, scene: Rc<RefCell<Scene>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_: web::MouseEvent| {
        scene.borrow_mut().burst();
    }) as Box<dyn FnMut(_)>);
    _ = container.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
