// src/effects/slider.rs  -  Desktop + phone screenshot slider with autoplay
use crate::dom::{Document, NodeId};
use std::time::Duration;

pub const DESKTOP_ID: &str = "desktopSlider";
pub const PHONE_ID:   &str = "phoneSlider";
pub const DOT_CLASS:  &str = "slide-dot";
pub const ACTIVE_CLASS: &str = "active";

pub const DESKTOP_COUNT: usize = 3;
pub const PHONE_COUNT:   usize = 6;
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5000);

/// Phone image shown with desktop slide `index` (two phone shots per slide)
pub fn phone_index(index: usize) -> usize {
    (index * 2) % PHONE_COUNT
}

fn track_offset(index: usize) -> String {
    format!("translateX(-{}%)", index * 100)
}

pub struct Slider {
    index:    usize,
    /// `None` disables autoplay
    interval: Option<Duration>,
    next_at:  Option<Duration>,
}

impl Slider {
    /// Timer starts immediately; nothing is rendered until the first move
    pub fn new(interval: Option<Duration>, now: Duration) -> Self {
        Self { index: 0, interval, next_at: interval.map(|i| now + i) }
    }

    pub fn index(&self) -> usize { self.index }

    /// Jump to `index` (wrapped into range), update tracks and dots, restart the timer
    pub fn slide_to(&mut self, doc: &mut Document, index: usize, now: Duration) {
        let index = index % DESKTOP_COUNT;
        self.index = index;

        if let Some(d) = doc.get_by_id(DESKTOP_ID) {
            doc.set_style(d, "transform", &track_offset(index));
        }
        if let Some(p) = doc.get_by_id(PHONE_ID) {
            doc.set_style(p, "transform", &track_offset(phone_index(index)));
        }
        let dots: Vec<NodeId> = doc.query_class(DOT_CLASS);
        for (i, dot) in dots.into_iter().enumerate() {
            doc.toggle_class(dot, ACTIVE_CLASS, Some(i == index));
        }

        self.next_at = self.interval.map(|i| now + i);
        log::debug!("[slider] slide {} (phone {})", index, phone_index(index));
    }

    pub fn next(&mut self, doc: &mut Document, now: Duration) {
        self.slide_to(doc, (self.index + 1) % DESKTOP_COUNT, now);
    }

    pub fn prev(&mut self, doc: &mut Document, now: Duration) {
        self.slide_to(doc, (self.index + DESKTOP_COUNT - 1) % DESKTOP_COUNT, now);
    }

    /// Autoplay: advance when the timer has elapsed
    pub fn tick(&mut self, doc: &mut Document, now: Duration) -> bool {
        match self.next_at {
            Some(at) if now >= at => {
                self.next(doc, now);
                true
            }
            _ => false,
        }
    }
}
