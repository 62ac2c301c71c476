// src/effects/menu.rs  -  Mobile hamburger menu
use crate::dom::{Document, NodeId, Tag};

pub const TOGGLE_ID:  &str = "mobileToggle";
pub const LINKS_ID:   &str = "navLinks";
pub const OPEN_CLASS: &str = "open";

/// Bar styles while open: top and bottom rotate into an X, middle fades out
const OPEN_BARS: [(&str, &str); 3] = [
    ("transform", "translateY(8px) rotate(45deg)"),
    ("opacity",   "0"),
    ("transform", "translateY(-8px) rotate(-45deg)"),
];

pub struct MobileMenu {
    toggle: NodeId,
    links:  NodeId,
}

impl MobileMenu {
    /// `None` unless both the toggle and the link list exist
    pub fn init(doc: &Document) -> Option<Self> {
        let toggle = doc.get_by_id(TOGGLE_ID)?;
        let links  = doc.get_by_id(LINKS_ID)?;
        Some(Self { toggle, links })
    }

    pub fn is_open(&self, doc: &Document) -> bool {
        doc.has_class(self.links, OPEN_CLASS)
    }

    /// Links inside the list; clicking any of them closes the menu
    pub fn links(&self, doc: &Document) -> Vec<NodeId> {
        doc.descendants_with_tag(self.links, Tag::A)
    }

    pub fn toggle(&self, doc: &mut Document) {
        let open = doc.toggle_class(self.links, OPEN_CLASS, None);
        let bars = self.bars(doc);
        if open {
            for (&bar, (prop, value)) in bars.iter().zip(OPEN_BARS) {
                doc.set_style(bar, prop, value);
            }
        } else {
            for (&bar, (prop, _)) in bars.iter().zip(OPEN_BARS) {
                doc.set_style(bar, prop, "");
            }
        }
        log::debug!("[menu] {}", if open { "open" } else { "closed" });
    }

    pub fn close(&self, doc: &mut Document) {
        doc.remove_class(self.links, OPEN_CLASS);
        for bar in self.bars(doc) {
            doc.set_style(bar, "transform", "");
            doc.set_style(bar, "opacity", "");
        }
    }

    fn bars(&self, doc: &Document) -> Vec<NodeId> {
        doc.descendants_with_tag(self.toggle, Tag::Span)
    }
}
