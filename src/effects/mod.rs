// src/effects/mod.rs  -  Scroll, animation and widget behaviours
pub mod counter;
pub mod menu;
pub mod modal;
pub mod navbar;
pub mod observer;
pub mod particles;
pub mod reveal;
pub mod scroll;
pub mod slider;
pub mod timing;

pub use counter::Counters;
pub use menu::MobileMenu;
pub use navbar::NavbarScroll;
pub use observer::Viewport;
pub use reveal::ScrollReveal;
pub use scroll::SmoothScroll;
pub use slider::Slider;
pub use timing::{Clock, MonotonicClock};
