// src/effects/scroll.rs  -  Smooth scrolling for in-page `#fragment` links
use super::observer::Viewport;
use super::timing::{ease_in_out_cubic, lerp, progress};
use crate::dom::{Document, NodeId};
use std::time::Duration;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Animation {
    from:  f64,
    to:    f64,
    start: Duration,
}

pub struct SmoothScroll {
    anchors:  Vec<NodeId>,
    active:   Option<Animation>,
    duration: Duration,
}

/// Element an anchor points at, if the fragment resolves
pub fn anchor_target(doc: &Document, anchor: NodeId) -> Option<NodeId> {
    let href = doc.attr(anchor, "href")?;
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    doc.get_by_id(id)
}

impl SmoothScroll {
    pub fn init(doc: &Document, duration: Duration) -> Self {
        let anchors = doc.fragment_links();
        log::debug!("[scroll] {} in-page anchors", anchors.len());
        Self { anchors, active: None, duration }
    }

    pub fn anchors(&self) -> &[NodeId] { &self.anchors }

    /// Anchor click. Returns true when the default jump was replaced by an
    /// animated scroll; anchors without a resolvable target are left alone.
    pub fn click(&mut self, doc: &Document, anchor: NodeId, vp: &Viewport, now: Duration) -> bool {
        if !self.anchors.contains(&anchor) {
            return false;
        }
        let Some(target) = anchor_target(doc, anchor) else {
            return false;
        };
        let to = doc.layout(target).top.clamp(0.0, vp.max_scroll());
        log::debug!("[scroll] {:.0} → {:.0}", vp.scroll_y, to);
        self.active = Some(Animation { from: vp.scroll_y, to, start: now });
        true
    }

    /// User scrolling takes over from an animation in flight
    pub fn cancel(&mut self) {
        self.active = None;
    }

    pub fn is_animating(&self) -> bool { self.active.is_some() }

    /// Scroll position for this frame, or `None` when idle
    pub fn frame(&mut self, now: Duration) -> Option<f64> {
        let a = self.active?;
        let p = progress(now.saturating_sub(a.start), self.duration);
        if p >= 1.0 {
            self.active = None;
        }
        Some(lerp(a.from, a.to, ease_in_out_cubic(p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{LayoutBox, Tag};

    fn doc() -> (Document, NodeId, NodeId) {
        let mut doc = Document::new();
        let root = doc.root();
        let good = doc.add(root, Tag::A);
        doc.set_attr(good, "href", "#download");
        let dead = doc.add(root, Tag::A);
        doc.set_attr(dead, "href", "#nowhere");
        let section = doc.add(root, Tag::Section);
        doc.get_mut(section).id = Some("download".into());
        doc.set_layout(section, LayoutBox::new(1200.0, 600.0));
        (doc, good, dead)
    }

    #[test]
    fn animates_to_target_top() {
        let (doc, good, _) = doc();
        let mut s = SmoothScroll::init(&doc, DEFAULT_DURATION);
        let vp = Viewport::new(800.0, 3000.0);
        assert!(s.click(&doc, good, &vp, Duration::ZERO));

        let mid = s.frame(Duration::from_millis(300)).unwrap();
        assert!((mid - 600.0).abs() < 1e-9);
        assert_eq!(s.frame(Duration::from_millis(600)), Some(1200.0));
        assert!(!s.is_animating());
        assert_eq!(s.frame(Duration::from_millis(700)), None);
    }

    #[test]
    fn unresolved_fragment_keeps_default() {
        let (doc, _, dead) = doc();
        let mut s = SmoothScroll::init(&doc, DEFAULT_DURATION);
        let vp = Viewport::new(800.0, 3000.0);
        assert!(!s.click(&doc, dead, &vp, Duration::ZERO));
        assert!(!s.is_animating());
    }

    #[test]
    fn target_clamped_to_scroll_range() {
        let (doc, good, _) = doc();
        let mut s = SmoothScroll::init(&doc, DEFAULT_DURATION);
        let vp = Viewport::new(800.0, 1500.0);
        s.click(&doc, good, &vp, Duration::ZERO);
        assert_eq!(s.frame(Duration::from_secs(1)), Some(700.0));
    }

    #[test]
    fn cancel_stops_animation() {
        let (doc, good, _) = doc();
        let mut s = SmoothScroll::init(&doc, DEFAULT_DURATION);
        s.click(&doc, good, &Viewport::new(800.0, 3000.0), Duration::ZERO);
        s.cancel();
        assert_eq!(s.frame(Duration::from_millis(100)), None);
    }
}
