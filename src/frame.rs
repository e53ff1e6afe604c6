use crate::events::SharedPage;
use gloo::render::{request_animation_frame, AnimationFrame};
use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

type PendingFrame = Rc<RefCell<Option<AnimationFrame>>>;

/// requestAnimationFrame chain driving [`crate::core::LandingPage::frame`].
///
/// Each tick asks for the next frame only when the page says `Continue`.
/// Dropping the pending [`AnimationFrame`] cancels it.
pub struct FrameLoop {
    pending: PendingFrame,
}

fn schedule(page: SharedPage, pending: PendingFrame) {
    let next = pending.clone();
    let handle = request_animation_frame(move |_| {
        next.borrow_mut().take();
        let flow = page.borrow_mut().frame();
        match flow {
            ControlFlow::Continue(()) => schedule(page, next),
            ControlFlow::Break(()) => log::debug!("[frame] loop stopped"),
        }
    });
    *pending.borrow_mut() = Some(handle);
}

pub fn start_loop(page: SharedPage) -> FrameLoop {
    let pending: PendingFrame = Rc::new(RefCell::new(None));
    schedule(page, pending.clone());
    FrameLoop { pending }
}

impl FrameLoop {
    pub fn stop(self) {
        self.pending.borrow_mut().take();
    }
}
