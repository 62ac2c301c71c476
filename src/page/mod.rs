// src/page/mod.rs  -  Page controller: owns the document and every behaviour
pub mod landing;
pub mod localize;
pub mod outline;

use crate::config::AppConfig;
use crate::dom::{Document, NodeId};
use crate::effects::{
    counter, modal, navbar, particles, scroll, slider,
    Counters, MobileMenu, NavbarScroll, ScrollReveal, Slider, SmoothScroll, Viewport,
};
use crate::i18n::{self, Translations};
use localize::Localizer;
use rand::Rng;
use std::time::Duration;

/// Input delivered to the page, mirroring the browser events it listens for
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// Dropdown `change`
    SelectLanguage(String),
    /// Click on the n-th language chip
    ClickChip(usize),
    ScrollBy(f64),
    ScrollTo(f64),
    /// Click on a link; in-page fragments scroll smoothly, menu links close the menu
    ClickAnchor(NodeId),
    ToggleMenu,
    KeyDown(String),
    SlideTo(usize),
    NextSlide,
    PrevSlide,
    /// Windows download button: shows the SmartScreen help
    OpenDownload,
    /// Viewport height changed (px)
    Resize(f64),
}

#[derive(Debug, Clone)]
pub struct PageOptions {
    /// Explicit language; `Some` skips locale detection
    pub language:         Option<String>,
    /// Preferred language tag, as a browser would report it
    pub locale:           Option<String>,
    pub detect_locale:    bool,
    pub counter_duration: Duration,
    pub smooth_scroll:    Duration,
    pub navbar_threshold: f64,
    /// `None` disables slider autoplay
    pub autoplay:         Option<Duration>,
    pub particle_count:   usize,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            language:         None,
            locale:           None,
            detect_locale:    true,
            counter_duration: counter::DEFAULT_DURATION,
            smooth_scroll:    scroll::DEFAULT_DURATION,
            navbar_threshold: navbar::DEFAULT_THRESHOLD,
            autoplay:         Some(slider::DEFAULT_INTERVAL),
            particle_count:   particles::DEFAULT_COUNT,
        }
    }
}

impl From<&AppConfig> for PageOptions {
    fn from(cfg: &AppConfig) -> Self {
        Self {
            language:         cfg.language.clone(),
            locale:           cfg.preferred_locale(),
            detect_locale:    cfg.detect_locale,
            counter_duration: Duration::from_millis(cfg.counter_duration_ms),
            smooth_scroll:    Duration::from_millis(cfg.smooth_scroll_ms),
            navbar_threshold: cfg.navbar_threshold_px,
            autoplay:         cfg.autoplay.then(|| Duration::from_millis(cfg.autoplay_ms)),
            particle_count:   cfg.particle_count,
        }
    }
}

pub struct Page {
    doc:       Document,
    viewport:  Viewport,
    localizer: Localizer,
    reveal:    ScrollReveal,
    counters:  Counters,
    navbar:    NavbarScroll,
    menu:      Option<MobileMenu>,
    scroll:    SmoothScroll,
    slider:    Slider,
    particles: Vec<NodeId>,
}

impl Page {
    /// Wire up every behaviour on a loaded document, then pick the language
    pub fn load<R: Rng>(
        mut doc:         Document,
        translations:    Translations,
        opts:            &PageOptions,
        viewport_height: f64,
        now:             Duration,
        rng:             &mut R,
    ) -> Self {
        let slider = Slider::new(opts.autoplay, now);

        localize::build_selector(&mut doc);
        localize::build_grid(&mut doc);
        let reveal    = ScrollReveal::init(&doc);
        let counters  = Counters::init(&doc, opts.counter_duration);
        let navbar    = NavbarScroll::init(&doc, opts.navbar_threshold);
        let menu      = MobileMenu::init(&doc);
        let particles = particles::spawn(&mut doc, opts.particle_count, rng);
        let scroll    = SmoothScroll::init(&doc, opts.smooth_scroll);
        let viewport  = Viewport::new(viewport_height, doc.content_height());

        let mut page = Self {
            doc,
            viewport,
            localizer: Localizer::new(translations),
            reveal,
            counters,
            navbar,
            menu,
            scroll,
            slider,
            particles,
        };
        page.apply_initial_language(opts);
        page
    }

    fn apply_initial_language(&mut self, opts: &PageOptions) {
        if let Some(code) = &opts.language {
            if i18n::language(code).is_none() {
                log::warn!("[i18n] '{}' is not a supported language", code);
            }
            self.choose_language(code);
            return;
        }
        if !opts.detect_locale {
            return;
        }
        let detected = opts.locale.as_deref().and_then(|tag| self.localizer.detect(tag));
        match detected {
            Some(code) => {
                log::info!("[i18n] detected locale {:?} → {}", opts.locale, code);
                self.choose_language(&code);
            }
            None => log::debug!("[i18n] no translation set for locale {:?}", opts.locale),
        }
    }

    /// Language change plus dropdown sync, as a chip click does it
    fn choose_language(&mut self, code: &str) {
        self.localizer.set_language(&mut self.doc, code);
        localize::sync_selector(&mut self.doc, code);
    }

    pub fn handle(&mut self, event: PageEvent, now: Duration) {
        log::trace!("[page] {:?}", event);
        match event {
            PageEvent::SelectLanguage(code) => self.choose_language(&code),
            PageEvent::ClickChip(i) => {
                let code = localize::chips(&self.doc)
                    .get(i)
                    .and_then(|&chip| self.doc.attr(chip, localize::CHIP_LANG_ATTR))
                    .map(str::to_string);
                if let Some(code) = code {
                    self.choose_language(&code);
                }
            }
            PageEvent::ScrollBy(dy) => self.user_scroll(self.viewport.scroll_y + dy),
            PageEvent::ScrollTo(y) => self.user_scroll(y),
            PageEvent::ClickAnchor(a) => {
                if let Some(menu) = &self.menu {
                    if menu.links(&self.doc).contains(&a) {
                        menu.close(&mut self.doc);
                    }
                }
                self.scroll.click(&self.doc, a, &self.viewport, now);
            }
            PageEvent::ToggleMenu => {
                if let Some(menu) = &self.menu {
                    menu.toggle(&mut self.doc);
                }
            }
            PageEvent::KeyDown(key) => { modal::on_key(&mut self.doc, &key); }
            PageEvent::SlideTo(i) => self.slider.slide_to(&mut self.doc, i, now),
            PageEvent::NextSlide => self.slider.next(&mut self.doc, now),
            PageEvent::PrevSlide => self.slider.prev(&mut self.doc, now),
            PageEvent::OpenDownload => modal::open(&mut self.doc),
            PageEvent::Resize(h) => {
                self.viewport.height = h.max(0.0);
                let y = self.viewport.scroll_y;
                self.viewport.scroll_to(y);
            }
        }
    }

    fn user_scroll(&mut self, y: f64) {
        self.scroll.cancel();
        self.viewport.scroll_to(y);
        self.navbar.on_scroll();
    }

    /// One animation frame
    pub fn frame(&mut self, now: Duration) {
        if let Some(y) = self.scroll.frame(now) {
            self.viewport.scroll_to(y);
            self.navbar.on_scroll();
        }
        self.navbar.frame(&mut self.doc, self.viewport.scroll_y);
        self.reveal.check(&mut self.doc, &self.viewport);
        self.counters.check(&self.doc, &self.viewport, now);
        self.counters.frame(&mut self.doc, now);
        self.slider.tick(&mut self.doc, now);
    }

    /// One frame, then every counter it started jumps to its final value.
    /// Used for one-shot renders that never see later frames.
    pub fn settle(&mut self, now: Duration) {
        self.frame(now);
        self.counters.finish(&mut self.doc);
    }

    // ── Read access for renderers ─────────────────────────────────────────────

    pub fn doc(&self) -> &Document { &self.doc }
    pub fn viewport(&self) -> &Viewport { &self.viewport }
    pub fn localizer(&self) -> &Localizer { &self.localizer }
    pub fn language(&self) -> &str { self.localizer.current() }
    pub fn slider(&self) -> &Slider { &self.slider }
    pub fn particles(&self) -> &[NodeId] { &self.particles }
    pub fn anchors(&self) -> &[NodeId] { self.scroll.anchors() }
    pub fn is_scrolling(&self) -> bool { self.scroll.is_animating() }

    pub fn menu_open(&self) -> bool {
        self.menu.as_ref().is_some_and(|m| m.is_open(&self.doc))
    }

    pub fn menu_links(&self) -> Vec<NodeId> {
        self.menu.as_ref().map(|m| m.links(&self.doc)).unwrap_or_default()
    }

    pub fn modal_open(&self) -> bool { modal::is_open(&self.doc) }
}
