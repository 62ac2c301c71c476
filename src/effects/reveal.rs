// src/effects/reveal.rs  -  `.reveal` → `.visible` once on scroll
use super::observer::{IntersectionObserver, Viewport};
use crate::dom::Document;

pub const REVEAL_CLASS:  &str = "reveal";
pub const VISIBLE_CLASS: &str = "visible";

const THRESHOLD:     f64 = 0.1;
const BOTTOM_MARGIN: f64 = 60.0;

pub struct ScrollReveal {
    observer: IntersectionObserver,
}

impl ScrollReveal {
    pub fn init(doc: &Document) -> Self {
        let mut observer = IntersectionObserver::new(THRESHOLD, BOTTOM_MARGIN);
        for n in doc.query_class(REVEAL_CLASS) {
            observer.observe(n);
        }
        log::debug!("[reveal] observing {} nodes", observer.watching());
        Self { observer }
    }

    /// Mark newly intersecting nodes visible; returns how many were revealed
    pub fn check(&mut self, doc: &mut Document, vp: &Viewport) -> usize {
        let hits = self.observer.take_intersecting(doc, vp);
        for &n in &hits {
            doc.add_class(n, VISIBLE_CLASS);
        }
        hits.len()
    }

    pub fn pending(&self) -> usize { self.observer.watching() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{LayoutBox, Tag};

    #[test]
    fn reveal_is_permanent() {
        let mut doc = Document::new();
        let root = doc.root();
        let card = doc.add(root, Tag::Div);
        doc.add_class(card, REVEAL_CLASS);
        doc.set_layout(card, LayoutBox::new(900.0, 300.0));
        let plain = doc.add(root, Tag::Div);
        doc.set_layout(plain, LayoutBox::new(0.0, 100.0));

        let mut reveal = ScrollReveal::init(&doc);
        let mut vp = Viewport::new(800.0, 3000.0);
        assert_eq!(reveal.check(&mut doc, &vp), 0);

        vp.scroll_to(400.0);
        assert_eq!(reveal.check(&mut doc, &vp), 1);
        assert!(doc.has_class(card, VISIBLE_CLASS));
        assert!(!doc.has_class(plain, VISIBLE_CLASS));

        vp.scroll_to(0.0);
        assert_eq!(reveal.check(&mut doc, &vp), 0);
        assert!(doc.has_class(card, VISIBLE_CLASS));
        assert_eq!(reveal.pending(), 0);
    }

    #[test]
    fn needs_ten_percent_above_margin() {
        let mut doc = Document::new();
        let root = doc.root();
        let card = doc.add(root, Tag::Div);
        doc.add_class(card, REVEAL_CLASS);
        // Viewport bottom minus margin = 740; 20px of a 300px box is under 10%
        doc.set_layout(card, LayoutBox::new(720.0, 300.0));
        let mut reveal = ScrollReveal::init(&doc);
        let mut vp = Viewport::new(800.0, 3000.0);
        assert_eq!(reveal.check(&mut doc, &vp), 0);
        // 30px of 300px meets the threshold exactly
        vp.scroll_to(10.0);
        assert_eq!(reveal.check(&mut doc, &vp), 1);
    }
}
