// src/effects/counter.rs  -  `.count-up[data-target]` eased number animation
use super::observer::{IntersectionObserver, Viewport};
use super::timing::{ease_out_cubic, progress};
use crate::dom::{Document, NodeId};
use std::time::Duration;

pub const COUNTER_CLASS: &str = "count-up";
pub const TARGET_ATTR:   &str = "data-target";

pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);
const THRESHOLD: f64 = 0.5;

/// Displayed value for `target` at `progress` (0..=1), cubic ease-out
pub fn eased_value(target: i64, progress: f64) -> i64 {
    (ease_out_cubic(progress) * target as f64).round() as i64
}

/// Leading integer of a `data-target` value, `parseInt` style
pub fn parse_target(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let end = s
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map_or(s.len(), |(i, _)| i);
    s[..end].parse().ok()
}

#[derive(Debug, Clone, Copy)]
struct Running {
    node:   NodeId,
    target: i64,
    start:  Duration,
}

pub struct Counters {
    observer: IntersectionObserver,
    targets:  Vec<(NodeId, i64)>,
    running:  Vec<Running>,
    duration: Duration,
}

impl Counters {
    pub fn init(doc: &Document, duration: Duration) -> Self {
        let mut observer = IntersectionObserver::new(THRESHOLD, 0.0);
        let mut targets  = Vec::new();
        for n in doc.query_class(COUNTER_CLASS) {
            let Some(raw) = doc.attr(n, TARGET_ATTR) else { continue };
            match parse_target(raw) {
                Some(t) => {
                    observer.observe(n);
                    targets.push((n, t));
                }
                None => log::warn!("[counter] node {} has non-numeric {}={:?}", n, TARGET_ATTR, raw),
            }
        }
        log::debug!("[counter] observing {} counters", targets.len());
        Self { observer, targets, running: Vec::new(), duration }
    }

    /// Start animations for counters that just became half visible
    pub fn check(&mut self, doc: &Document, vp: &Viewport, now: Duration) {
        for n in self.observer.take_intersecting(doc, vp) {
            if let Some(&(_, target)) = self.targets.iter().find(|(t, _)| *t == n) {
                log::debug!("[counter] start node={} target={}", n, target);
                self.running.push(Running { node: n, target, start: now });
            }
        }
    }

    /// One animation frame: write the current value, drop finished counters
    pub fn frame(&mut self, doc: &mut Document, now: Duration) {
        let duration = self.duration;
        self.running.retain(|r| {
            let p = progress(now.saturating_sub(r.start), duration);
            doc.set_text_content(r.node, &eased_value(r.target, p).to_string());
            p < 1.0
        });
    }

    /// Write final values for every running counter and stop them
    pub fn finish(&mut self, doc: &mut Document) {
        for r in self.running.drain(..) {
            doc.set_text_content(r.node, &r.target.to_string());
        }
    }

    pub fn is_animating(&self) -> bool { !self.running.is_empty() }
}
