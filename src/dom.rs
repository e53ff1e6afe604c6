use crate::core::{Rect, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

/// All elements matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
fn scroll_offset(window: &web::Window) -> (f32, f32) {
    (
        window.scroll_x().unwrap_or(0.0) as f32,
        window.scroll_y().unwrap_or(0.0) as f32,
    )
}

/// Current scroll position and inner size of the window.
pub fn viewport_snapshot(window: &web::Window) -> Viewport {
    let (sx, sy) = scroll_offset(window);
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    Viewport::new(sx, sy, w, h)
}

/// Element bounds in document coordinates (client rect shifted by scroll).
pub fn document_bounds(window: &web::Window, el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    let (sx, sy) = scroll_offset(window);
    Rect::new(
        r.left() as f32 + sx,
        r.top() as f32 + sy,
        r.width() as f32,
        r.height() as f32,
    )
}

#[inline]
pub fn set_style_var(el: &web::HtmlElement, name: &str, value: &str) {
    _ = el.style().set_property(name, value);
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    if on {
        _ = cl.add_1(class);
    } else {
        _ = cl.remove_1(class);
    }
}
