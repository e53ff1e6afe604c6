use super::SharedPage;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed window-level pointer moves into the spotlight. The listener is
/// removed when the returned guard is dropped.
pub fn wire_pointermove(window: &web::Window, page: SharedPage) -> EventListener {
    EventListener::new(window, "pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        page.borrow_mut()
            .pointer_moved(ev.client_x() as f32, ev.client_y() as f32);
    })
}
