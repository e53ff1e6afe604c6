use super::SharedPage;
use crate::constants::{TIER_ATTRIBUTE, TIER_CARD_SELECTOR};
use crate::core::DifficultyTier;
use crate::dom;
use gloo::events::EventListener;
use web_sys as web;

/// One click listener per rendered tier card.
pub fn wire_tier_cards(document: &web::Document, page: &SharedPage) -> Vec<EventListener> {
    dom::query_all(document, TIER_CARD_SELECTOR)
        .into_iter()
        .filter_map(|card| {
            let raw = card.get_attribute(TIER_ATTRIBUTE)?;
            let tier = match raw.parse::<DifficultyTier>() {
                Ok(t) => t,
                Err(e) => {
                    log::warn!("[click] skipping card: {}", e);
                    return None;
                }
            };
            let page = page.clone();
            Some(EventListener::new(&card, "click", move |_| {
                page.borrow_mut().select(tier);
            }))
        })
        .collect()
}
