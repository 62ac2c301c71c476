// src/effects/navbar.rs  -  `scrolled` class, applied at most once per frame
use crate::dom::{Document, NodeId};

pub const NAVBAR_ID:      &str = "navbar";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const DEFAULT_THRESHOLD: f64 = 50.0;

pub struct NavbarScroll {
    navbar:    Option<NodeId>,
    threshold: f64,
    /// A frame update is pending
    ticking:   bool,
}

impl NavbarScroll {
    pub fn init(doc: &Document, threshold: f64) -> Self {
        let navbar = doc.get_by_id(NAVBAR_ID);
        if navbar.is_none() {
            log::debug!("[navbar] no #{} element", NAVBAR_ID);
        }
        Self { navbar, threshold, ticking: false }
    }

    /// Scroll event. Returns true when this event scheduled a frame update;
    /// further events before that frame are coalesced.
    pub fn on_scroll(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    pub fn frame(&mut self, doc: &mut Document, scroll_y: f64) {
        if !self.ticking {
            return;
        }
        self.ticking = false;
        if let Some(nav) = self.navbar {
            doc.toggle_class(nav, SCROLLED_CLASS, Some(scroll_y > self.threshold));
        }
    }
}
