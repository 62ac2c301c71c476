// src/effects/observer.rs  -  Viewport + one-shot intersection observer
use crate::dom::{Document, LayoutBox, NodeId};

/// Visible window onto the page, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_y:       f64,
    pub height:         f64,
    pub content_height: f64,
}

impl Viewport {
    pub fn new(height: f64, content_height: f64) -> Self {
        Self { scroll_y: 0.0, height, content_height }
    }

    pub fn max_scroll(&self) -> f64 {
        (self.content_height - self.height).max(0.0)
    }

    /// Scroll to `y`, clamped to the scrollable range; returns the new position
    pub fn scroll_to(&mut self, y: f64) -> f64 {
        self.scroll_y = y.clamp(0.0, self.max_scroll());
        self.scroll_y
    }

    /// Share of `b` inside the viewport after shrinking its bottom edge by
    /// `bottom_margin` pixels
    pub fn visible_ratio(&self, b: LayoutBox, bottom_margin: f64) -> f64 {
        let top    = self.scroll_y;
        let bottom = self.scroll_y + self.height - bottom_margin;
        if b.height <= 0.0 {
            return if b.top >= top && b.top <= bottom { 1.0 } else { 0.0 };
        }
        let overlap = (b.bottom().min(bottom) - b.top.max(top)).max(0.0);
        overlap / b.height
    }
}

/// Fires once per target when it crosses `threshold`, then stops watching it
#[derive(Debug, Clone)]
pub struct IntersectionObserver {
    threshold:     f64,
    bottom_margin: f64,
    targets:       Vec<NodeId>,
}

impl IntersectionObserver {
    pub fn new(threshold: f64, bottom_margin: f64) -> Self {
        Self { threshold, bottom_margin, targets: Vec::new() }
    }

    pub fn observe(&mut self, node: NodeId) {
        if !self.targets.contains(&node) {
            self.targets.push(node);
        }
    }

    pub fn watching(&self) -> usize { self.targets.len() }

    /// Targets intersecting now; each is unobserved as it is returned
    pub fn take_intersecting(&mut self, doc: &Document, vp: &Viewport) -> Vec<NodeId> {
        let (hit, keep): (Vec<NodeId>, Vec<NodeId>) = self.targets.iter().partition(|&&n| {
            let r = vp.visible_ratio(doc.layout(n), self.bottom_margin);
            r > 0.0 && r >= self.threshold
        });
        self.targets = keep;
        hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Tag;

    #[test]
    fn ratio_respects_bottom_margin() {
        let vp = Viewport::new(800.0, 4000.0);
        // box 700..800: fully inside the raw viewport, only 40px inside after a 60px margin
        let b = LayoutBox::new(700.0, 100.0);
        assert_eq!(vp.visible_ratio(b, 0.0), 1.0);
        assert!((vp.visible_ratio(b, 60.0) - 0.4).abs() < 1e-9);
        assert_eq!(vp.visible_ratio(LayoutBox::new(900.0, 100.0), 0.0), 0.0);
    }

    #[test]
    fn scroll_is_clamped() {
        let mut vp = Viewport::new(800.0, 1000.0);
        assert_eq!(vp.scroll_to(-20.0), 0.0);
        assert_eq!(vp.scroll_to(5000.0), 200.0);
        let mut short = Viewport::new(800.0, 300.0);
        assert_eq!(short.scroll_to(100.0), 0.0);
    }

    #[test]
    fn observer_fires_once() {
        let mut doc = Document::new();
        let root = doc.root();
        let near = doc.add(root, Tag::Div);
        let far  = doc.add(root, Tag::Div);
        doc.set_layout(near, LayoutBox::new(100.0, 200.0));
        doc.set_layout(far,  LayoutBox::new(2000.0, 200.0));

        let mut obs = IntersectionObserver::new(0.1, 60.0);
        obs.observe(near);
        obs.observe(far);
        obs.observe(far);
        assert_eq!(obs.watching(), 2);

        let mut vp = Viewport::new(800.0, 4000.0);
        assert_eq!(obs.take_intersecting(&doc, &vp), vec![near]);
        assert!(obs.take_intersecting(&doc, &vp).is_empty());

        vp.scroll_to(1500.0);
        assert_eq!(obs.take_intersecting(&doc, &vp), vec![far]);
        assert_eq!(obs.watching(), 0);
    }
}
