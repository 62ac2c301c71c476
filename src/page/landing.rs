// src/page/landing.rs  -  MyBills landing page structure
use super::localize::{hero_tagline, GRID_ID, KEY_BEFORE, KEY_HIGHLIGHT, SELECT_ID};
use crate::dom::{Document, LayoutBox, NodeId, Tag, I18N_ATTR};
use crate::effects::{counter, menu, modal, navbar, particles, reveal, slider};
use crate::i18n::{Translations, DEFAULT_LANG};

/// Stat counters: (target, label key)
pub const STATS: [(i64, &str); 3] = [
    (50_000,  "stats_users"),
    (250_000, "stats_bills"),
    (23,      "stats_languages"),
];

/// Navigation entries: (fragment, label key)
pub const NAV: [(&str, &str); 5] = [
    ("features",    "nav_features"),
    ("stats",       "nav_stats"),
    ("languages",   "nav_languages"),
    ("screenshots", "nav_screenshots"),
    ("download",    "nav_download"),
];

const FEATURES: [(&str, &str); 3] = [
    ("feature_scan_title",   "feature_scan_desc"),
    ("feature_remind_title", "feature_remind_desc"),
    ("feature_split_title",  "feature_split_desc"),
];

struct Builder<'a> {
    doc: Document,
    tr:  &'a Translations,
}

impl Builder<'_> {
    fn el(&mut self, parent: NodeId, tag: Tag, id: Option<&str>, classes: &[&str], top: f64, height: f64) -> NodeId {
        let n = self.doc.add(parent, tag);
        self.doc.get_mut(n).id = id.map(str::to_string);
        for c in classes {
            self.doc.add_class(n, c);
        }
        self.doc.set_layout(n, LayoutBox::new(top, height));
        n
    }

    /// Localized node pre-filled with the English text the page ships with
    fn text(&mut self, parent: NodeId, tag: Tag, key: &str, classes: &[&str], top: f64, height: f64) -> NodeId {
        let n = self.el(parent, tag, None, classes, top, height);
        self.doc.set_attr(n, I18N_ATTR, key);
        let en = self.tr.translate(key, DEFAULT_LANG).to_string();
        if tag.is_text_input() {
            self.doc.get_mut(n).placeholder = en;
        } else {
            self.doc.set_text_content(n, &en);
        }
        n
    }

    fn link(&mut self, parent: NodeId, fragment: &str, key: &str, classes: &[&str], top: f64) -> NodeId {
        let a = self.text(parent, Tag::A, key, classes, top, 40.0);
        self.doc.set_attr(a, "href", &format!("#{fragment}"));
        a
    }
}

/// Build the page document. Static text starts out in English.
pub fn build(tr: &Translations) -> Document {
    let mut b = Builder { doc: Document::new(), tr };
    let root = b.doc.root();
    b.doc.set_attr(root, "lang", DEFAULT_LANG);
    b.doc.set_attr(root, "dir", "ltr");

    // ── Navbar ────────────────────────────────────────────────────────────────
    let nav = b.el(root, Tag::Nav, Some(navbar::NAVBAR_ID), &["navbar"], 0.0, 70.0);
    let logo = b.el(nav, Tag::A, None, &["logo"], 0.0, 70.0);
    b.doc.set_attr(logo, "href", "#hero");
    b.doc.set_text_content(logo, "MyBills");
    let links = b.el(nav, Tag::Div, Some(menu::LINKS_ID), &["nav-links"], 0.0, 70.0);
    for (frag, key) in NAV {
        b.link(links, frag, key, &[], 0.0);
    }
    b.el(nav, Tag::Select, Some(SELECT_ID), &["lang-select"], 0.0, 40.0);
    let toggle = b.el(nav, Tag::Button, Some(menu::TOGGLE_ID), &["mobile-toggle"], 0.0, 40.0);
    for _ in 0..3 {
        b.el(toggle, Tag::Span, None, &[], 0.0, 3.0);
    }

    // ── Hero ──────────────────────────────────────────────────────────────────
    let hero = b.el(root, Tag::Section, Some("hero"), &["hero"], 0.0, 700.0);
    b.el(hero, Tag::Div, Some(particles::CONTAINER_ID), &["particles"], 0.0, 700.0);
    b.text(hero, Tag::Span, "hero_badge", &["hero-badge"], 150.0, 30.0);
    let h1 = b.el(hero, Tag::H1, None, &["hero-title"], 200.0, 120.0);
    let before = b.text(h1, Tag::Span, KEY_BEFORE, &[], 200.0, 60.0);
    let highlight = b.text(h1, Tag::Span, KEY_HIGHLIGHT, &["highlight"], 260.0, 60.0);
    let tagline = hero_tagline(tr, DEFAULT_LANG);
    b.doc.set_text_content(before, &tagline.before);
    b.doc.set_text_content(highlight, &tagline.highlight);
    b.text(hero, Tag::P, "hero_subtitle", &["hero-subtitle"], 340.0, 60.0);
    b.link(hero, "download", "hero_cta_download", &["btn", "btn-primary"], 430.0);
    b.link(hero, "features", "hero_cta_learn", &["btn", "btn-outline"], 480.0);

    // ── Stats ─────────────────────────────────────────────────────────────────
    let stats = b.el(root, Tag::Section, Some("stats"), &["stats"], 700.0, 300.0);
    for (i, (target, key)) in STATS.iter().enumerate() {
        let top = 760.0 + i as f64 * 60.0;
        let card = b.el(stats, Tag::Div, None, &["stat", reveal::REVEAL_CLASS], top, 60.0);
        let num = b.el(card, Tag::Span, None, &[counter::COUNTER_CLASS], top, 30.0);
        b.doc.set_attr(num, counter::TARGET_ATTR, &target.to_string());
        b.doc.set_text_content(num, "0");
        b.text(card, Tag::P, key, &["stat-label"], top + 30.0, 30.0);
    }

    // ── Features ──────────────────────────────────────────────────────────────
    let features = b.el(root, Tag::Section, Some("features"), &["features"], 1000.0, 700.0);
    b.text(features, Tag::H2, "features_title", &[reveal::REVEAL_CLASS], 1040.0, 50.0);
    for (i, (title, desc)) in FEATURES.iter().enumerate() {
        let top = 1120.0 + i as f64 * 180.0;
        let card = b.el(features, Tag::Div, None, &["feature-card", reveal::REVEAL_CLASS], top, 160.0);
        b.text(card, Tag::H3, title, &[], top + 20.0, 40.0);
        b.text(card, Tag::P, desc, &[], top + 70.0, 60.0);
    }

    // ── Languages ─────────────────────────────────────────────────────────────
    let langs = b.el(root, Tag::Section, Some("languages"), &["languages"], 1700.0, 600.0);
    b.text(langs, Tag::H2, "languages_title", &[reveal::REVEAL_CLASS], 1740.0, 50.0);
    b.text(langs, Tag::P, "languages_subtitle", &[reveal::REVEAL_CLASS], 1800.0, 40.0);
    b.el(langs, Tag::Div, Some(GRID_ID), &["languages-grid"], 1860.0, 400.0);

    // ── Screenshots ───────────────────────────────────────────────────────────
    let shots = b.el(root, Tag::Section, Some("screenshots"), &["screenshots"], 2300.0, 700.0);
    b.text(shots, Tag::H2, "screenshots_title", &[reveal::REVEAL_CLASS], 2340.0, 50.0);
    b.text(shots, Tag::P, "screenshots_subtitle", &[], 2400.0, 40.0);
    let desktop = b.el(shots, Tag::Div, Some(slider::DESKTOP_ID), &["slider-track"], 2460.0, 360.0);
    for i in 0..slider::DESKTOP_COUNT {
        let img = b.el(desktop, Tag::Img, None, &["slide"], 2460.0, 360.0);
        b.doc.set_attr(img, "src", &format!("screenshots/desktop-{}.png", i + 1));
    }
    let phone = b.el(shots, Tag::Div, Some(slider::PHONE_ID), &["slider-track"], 2460.0, 360.0);
    for i in 0..slider::PHONE_COUNT {
        let img = b.el(phone, Tag::Img, None, &["slide"], 2460.0, 360.0);
        b.doc.set_attr(img, "src", &format!("screenshots/phone-{}.png", i + 1));
    }
    let dots = b.el(shots, Tag::Div, None, &["slider-dots"], 2840.0, 20.0);
    for i in 0..slider::DESKTOP_COUNT {
        let classes: &[&str] = if i == 0 { &[slider::DOT_CLASS, slider::ACTIVE_CLASS] } else { &[slider::DOT_CLASS] };
        b.el(dots, Tag::Span, None, classes, 2840.0, 20.0);
    }

    // ── Download ──────────────────────────────────────────────────────────────
    let dl = b.el(root, Tag::Section, Some("download"), &["download"], 3000.0, 500.0);
    b.text(dl, Tag::H2, "download_title", &[reveal::REVEAL_CLASS], 3040.0, 50.0);
    b.text(dl, Tag::P, "download_subtitle", &[], 3100.0, 40.0);
    b.text(dl, Tag::Button, "download_windows", &["btn", "btn-primary"], 3160.0, 50.0);
    b.text(dl, Tag::Button, "download_android", &["btn", "btn-outline"], 3220.0, 50.0);
    b.text(dl, Tag::Input, "newsletter_placeholder", &["newsletter-input"], 3320.0, 40.0);
    b.text(dl, Tag::Button, "newsletter_button", &["btn"], 3370.0, 40.0);

    // ── Footer ────────────────────────────────────────────────────────────────
    let footer = b.el(root, Tag::Footer, None, &["footer"], 3500.0, 150.0);
    b.text(footer, Tag::P, "footer_rights", &[], 3560.0, 30.0);

    // ── SmartScreen modal (fixed position, no flow height) ───────────────────
    let m = b.el(root, Tag::Div, Some(modal::MODAL_ID), &["modal"], 0.0, 0.0);
    b.text(m, Tag::H3, "modal_title", &[], 0.0, 0.0);
    b.text(m, Tag::P, "modal_body", &[], 0.0, 0.0);
    b.text(m, Tag::Button, "modal_close", &["btn"], 0.0, 0.0);

    b.doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::RenderTarget;

    #[test]
    fn page_has_every_hook() {
        let doc = build(&Translations::builtin());
        for id in [
            navbar::NAVBAR_ID, menu::TOGGLE_ID, menu::LINKS_ID, SELECT_ID, GRID_ID,
            particles::CONTAINER_ID, slider::DESKTOP_ID, slider::PHONE_ID, modal::MODAL_ID,
        ] {
            assert!(doc.get_by_id(id).is_some(), "#{id} missing");
        }
        assert_eq!(doc.query_class(slider::DOT_CLASS).len(), 3);
        assert_eq!(doc.query_class(counter::COUNTER_CLASS).len(), 3);
        assert!(!doc.query_class(reveal::REVEAL_CLASS).is_empty());
        assert_eq!(doc.content_height(), 3650.0);
    }

    #[test]
    fn every_localized_key_has_english_text() {
        let tr = Translations::builtin();
        let doc = build(&tr);
        for n in doc.localized_nodes() {
            assert_ne!(tr.translate(&n.key, "en"), n.key, "no English text for {}", n.key);
        }
    }

    #[test]
    fn ships_in_english() {
        let doc = build(&Translations::builtin());
        let before = doc.node_for_key(KEY_BEFORE).unwrap();
        assert_eq!(doc.text(before), "Track every bill,");
        let input = doc.node_for_key("newsletter_placeholder").unwrap();
        assert_eq!(doc.get(input).placeholder, "Your email address");
    }

    #[test]
    fn nav_links_point_at_sections() {
        let doc = build(&Translations::builtin());
        for (frag, _) in NAV {
            assert!(doc.get_by_id(frag).is_some(), "#{frag}");
        }
    }
}
