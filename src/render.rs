use crate::constants::*;
use crate::core::{DifficultyTier, LandingViewModel};
use crate::dom;
use glam::Vec2;
use web_sys as web;

fn apply_selection(document: &web::Document, selected: DifficultyTier) {
    for card in dom::query_all(document, TIER_CARD_SELECTOR) {
        let is_selected = card
            .get_attribute(TIER_ATTRIBUTE)
            .and_then(|v| v.parse::<DifficultyTier>().ok())
            == Some(selected);
        dom::set_class(&card, SELECTED_CLASS, is_selected);
    }
}

fn apply_spotlight(el: &web::HtmlElement, pos: Vec2) {
    dom::set_style_var(el, SPOTLIGHT_VAR_X, &format!("{:.2}px", pos.x));
    dom::set_style_var(el, SPOTLIGHT_VAR_Y, &format!("{:.2}px", pos.y));
}

#[inline]
pub fn mark_revealed(el: &web::Element) {
    dom::set_class(el, VISIBLE_CLASS, true);
}

/// Subscribe the DOM to the view model. Subscriptions replay the current
/// values, so the default tier is highlighted right away.
pub fn bind(view_model: &mut LandingViewModel, document: &web::Document) {
    use wasm_bindgen::JsCast;

    match document
        .get_element_by_id(SPOTLIGHT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        Some(glow) => {
            view_model
                .spotlight
                .subscribe(move |pos| apply_spotlight(&glow, *pos));
        }
        None => log::warn!("[render] missing #{}, spotlight disabled", SPOTLIGHT_ID),
    }

    let doc = document.clone();
    view_model
        .selected_tier
        .subscribe(move |tier| apply_selection(&doc, *tier));
}
