use crate::core::{LandingPage, SystemClock};
use std::cell::RefCell;
use std::rc::Rc;

mod click;
mod pointer;
mod viewport;

pub use click::wire_tier_cards;
pub use pointer::wire_pointermove;
pub use viewport::{wire_viewport, RevealTargets};

pub type SharedPage = Rc<RefCell<LandingPage<SystemClock>>>;
