//! Landing page front-end for PaintByNumbers.AI.
//!
//! The effect logic in [`core`] is platform independent and tested on the
//! host. The DOM wiring below only builds for `wasm32`.

pub mod config;
pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
pub use web_entry::{mount, start, unmount};

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::config::PageConfig;
    use crate::constants::{REVEAL_READY_CLASS, REVEAL_SELECTOR, ROOT_ID};
    use crate::core::{LandingPage, SystemClock};
    use crate::events::{self, RevealTargets, SharedPage};
    use crate::{dom, frame, render};
    use gloo::events::EventListener;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys as web;

    struct Mounted {
        page: SharedPage,
        frames: frame::FrameLoop,
        listeners: Vec<EventListener>,
    }

    impl Mounted {
        fn teardown(self) {
            // Listeners first so nothing can poke the page mid-teardown.
            drop(self.listeners);
            self.frames.stop();
            self.page.borrow_mut().unmount();
            if let Some(root) = web::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(ROOT_ID))
            {
                dom::set_class(&root, REVEAL_READY_CLASS, false);
            }
        }
    }

    thread_local! {
        static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
    }

    fn read_config(document: &web::Document) -> PageConfig {
        let Some(root) = document.get_element_by_id(ROOT_ID) else {
            return PageConfig::default();
        };
        PageConfig::from_attributes(|name| root.get_attribute(name)).unwrap_or_else(|e| {
            log::warn!("[config] {}; using defaults", e);
            PageConfig::default()
        })
    }

    fn mount_inner() -> anyhow::Result<Mounted> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let config = read_config(&document);

        let page: SharedPage = Rc::new(RefCell::new(LandingPage::mount(
            config,
            SystemClock::new(),
        )));
        render::bind(page.borrow_mut().view_model_mut(), &document);

        // One-time registration: later additions to the document are not picked up.
        let targets: RevealTargets = {
            let mut p = page.borrow_mut();
            Rc::new(
                dom::query_all(&document, REVEAL_SELECTOR)
                    .into_iter()
                    .filter_map(|el| {
                        let id = p.register_revealable(dom::document_bounds(&window, &el))?;
                        Some((id, el))
                    })
                    .collect(),
            )
        };
        log::info!("[mount] {} revealable elements", targets.len());
        // Content stays visible until here, so a failed mount hides nothing.
        if let Some(root) = document.get_element_by_id(ROOT_ID) {
            dom::set_class(&root, REVEAL_READY_CLASS, true);
        }

        let mut listeners = vec![events::wire_pointermove(&window, page.clone())];
        listeners.extend(events::wire_tier_cards(&document, &page));
        listeners.extend(events::wire_viewport(&window, &page, targets));

        let frames = frame::start_loop(page.clone());
        Ok(Mounted {
            page,
            frames,
            listeners,
        })
    }

    /// Mount the page effects, replacing any previous mount.
    #[wasm_bindgen]
    pub fn mount() -> Result<(), JsValue> {
        unmount();
        let mounted = mount_inner().map_err(|e| JsValue::from_str(&e.to_string()))?;
        MOUNTED.with(|m| *m.borrow_mut() = Some(mounted));
        Ok(())
    }

    /// Tear down listeners, the frame loop and the reveal watcher.
    #[wasm_bindgen]
    pub fn unmount() {
        if let Some(m) = MOUNTED.with(|m| m.borrow_mut().take()) {
            m.teardown();
        }
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("paint-landing starting");

        if let Err(e) = mount() {
            log::error!("mount error: {:?}", e);
        }
        Ok(())
    }
}
