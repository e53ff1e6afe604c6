use super::SharedPage;
use crate::core::ElementId;
use crate::dom;
use crate::render;
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys as web;

/// Revealable elements collected at mount, paired with their ids.
pub type RevealTargets = Rc<Vec<(ElementId, web::Element)>>;

fn apply(window: &web::Window, page: &SharedPage, targets: &RevealTargets) {
    let viewport = dom::viewport_snapshot(window);
    let revealed = page.borrow_mut().viewport_changed(&viewport);
    for id in revealed {
        if let Some((_, el)) = targets.iter().find(|(tid, _)| *tid == id) {
            render::mark_revealed(el);
        }
    }
}

/// Check visibility once now and again on every scroll / resize. Resizes
/// also refresh element bounds since layout may have reflowed.
pub fn wire_viewport(
    window: &web::Window,
    page: &SharedPage,
    targets: RevealTargets,
) -> Vec<EventListener> {
    apply(window, page, &targets);

    let scroll = {
        let (w, page, targets) = (window.clone(), page.clone(), targets.clone());
        EventListener::new(window, "scroll", move |_| {
            apply(&w, &page, &targets);
        })
    };
    let resize = {
        let (window_ref, page) = (window.clone(), page.clone());
        EventListener::new(window, "resize", move |_| {
            let window = &window_ref;
            {
                let mut p = page.borrow_mut();
                for (id, el) in targets.iter() {
                    p.refresh_bounds(*id, dom::document_bounds(window, el));
                }
            }
            apply(window, &page, &targets);
        })
    };
    vec![scroll, resize]
}
