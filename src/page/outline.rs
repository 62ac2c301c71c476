// src/page/outline.rs  -  Flatten the page into renderable lines
use super::localize::{self, GRID_ID, KEY_BEFORE, KEY_HIGHLIGHT};
use super::Page;
use crate::dom::{Document, NodeId, Tag, I18N_ATTR};
use crate::effects::{counter, menu, modal, navbar, particles, reveal, slider};
use crate::i18n;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind { Heading, Text, Hero, Counter, Button, Input, Chips, Slider }

#[derive(Debug, Clone, PartialEq)]
pub struct OutlineLine {
    /// Page offset, px
    pub top:       f64,
    pub kind:      LineKind,
    pub text:      String,
    /// Emphasised tail (hero highlight)
    pub highlight: String,
    /// Waiting for its scroll reveal
    pub hidden:    bool,
}

/// Body content in document order; navbar and modal are rendered separately
pub fn outline(page: &Page) -> Vec<OutlineLine> {
    let doc = page.doc();
    let mut out = Vec::new();
    for &child in &doc.get(doc.root()).children {
        visit(page, child, false, &mut out);
    }
    out
}

fn is_skipped(doc: &Document, n: NodeId) -> bool {
    matches!(
        doc.get(n).id.as_deref(),
        Some(navbar::NAVBAR_ID | modal::MODAL_ID | particles::CONTAINER_ID | slider::PHONE_ID)
    )
}

fn visit(page: &Page, n: NodeId, hidden: bool, out: &mut Vec<OutlineLine>) {
    let doc = page.doc();
    if is_skipped(doc, n) {
        return;
    }
    let el = doc.get(n);
    let hidden = hidden
        || (doc.has_class(n, reveal::REVEAL_CLASS) && !doc.has_class(n, reveal::VISIBLE_CLASS));
    let line = |kind, text: String| OutlineLine {
        top: el.layout.top, kind, text, highlight: String::new(), hidden,
    };

    match el.id.as_deref() {
        Some(GRID_ID) => {
            out.push(line(LineKind::Chips, chips_text(doc, page.language())));
            return;
        }
        Some(slider::DESKTOP_ID) => {
            out.push(line(LineKind::Slider, slider_text(page.slider().index())));
            return;
        }
        _ => {}
    }

    if el.tag == Tag::H1 {
        let part = |key: &str| doc.node_for_key_in(n, key).map(|k| doc.text(k).to_string()).unwrap_or_default();
        out.push(OutlineLine {
            highlight: part(KEY_HIGHLIGHT),
            ..line(LineKind::Hero, part(KEY_BEFORE))
        });
        return;
    }

    if doc.has_class(n, counter::COUNTER_CLASS) {
        out.push(line(LineKind::Counter, el.text.clone()));
    } else if el.attrs.contains_key(I18N_ATTR) {
        let (kind, text) = match el.tag {
            Tag::H2 | Tag::H3        => (LineKind::Heading, el.text.clone()),
            Tag::A | Tag::Button     => (LineKind::Button, el.text.clone()),
            Tag::Input | Tag::Textarea => (LineKind::Input, el.placeholder.clone()),
            _                        => (LineKind::Text, el.text.clone()),
        };
        out.push(line(kind, text));
    }

    for &c in &el.children {
        visit(page, c, hidden, out);
    }
}

fn chips_text(doc: &Document, current: &str) -> String {
    localize::chips(doc)
        .into_iter()
        .filter_map(|c| doc.attr(c, localize::CHIP_LANG_ATTR))
        .filter_map(i18n::language)
        .map(|l| if l.code == current { format!("[{}]", l.native) } else { l.native.to_string() })
        .collect::<Vec<_>>()
        .join(" · ")
}

fn slider_text(index: usize) -> String {
    let dots: Vec<&str> = (0..slider::DESKTOP_COUNT)
        .map(|i| if i == index { "●" } else { "○" })
        .collect();
    format!(
        "Desktop {}/{}   Phone {}/{}   {}",
        index + 1, slider::DESKTOP_COUNT,
        slider::phone_index(index) + 1, slider::PHONE_COUNT,
        dots.join(" ")
    )
}

/// Localized labels of the navbar links
pub fn nav_labels(page: &Page) -> Vec<String> {
    let doc = page.doc();
    doc.get_by_id(menu::LINKS_ID)
        .map(|links| {
            doc.descendants_with_tag(links, Tag::A)
                .into_iter()
                .map(|a| doc.text(a).to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// Title, body and button of the SmartScreen modal
pub fn modal_text(page: &Page) -> Vec<String> {
    let doc = page.doc();
    let Some(m) = doc.get_by_id(modal::MODAL_ID) else { return Vec::new() };
    doc.descendants(m, false)
        .into_iter()
        .filter(|&n| doc.attr(n, I18N_ATTR).is_some())
        .map(|n| doc.text(n).to_string())
        .collect()
}

/// Plain-text dump of the page in its current language
pub fn render_plain(page: &Page) -> String {
    let mut s = String::new();
    let lang = i18n::language(page.language());
    let _ = writeln!(
        s,
        "lang={} ({}) dir={}",
        page.language(),
        lang.map_or("unknown", |l| l.name),
        page.doc().attr(page.doc().root(), "dir").unwrap_or("ltr"),
    );
    let _ = writeln!(s, "MyBills | {}", nav_labels(page).join(" | "));
    let _ = writeln!(s);
    for l in outline(page) {
        let text = match l.kind {
            LineKind::Heading => format!("## {}", l.text),
            LineKind::Hero    => format!("# {} *{}*", l.text, l.highlight).trim().to_string(),
            LineKind::Button  => format!("[ {} ]", l.text),
            LineKind::Input   => format!("[ {} ____ ]", l.text),
            _                 => l.text,
        };
        let _ = writeln!(s, "{text}");
    }
    let _ = writeln!(s);
    for line in modal_text(page) {
        let _ = writeln!(s, "> {line}");
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Translations;
    use crate::page::{landing, PageEvent, PageOptions};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::time::Duration;

    fn page() -> Page {
        let tr = Translations::builtin();
        let doc = landing::build(&tr);
        let mut rng = SmallRng::seed_from_u64(3);
        Page::load(doc, tr, &PageOptions::default(), 800.0, Duration::ZERO, &mut rng)
    }

    #[test]
    fn hero_line_carries_both_fragments() {
        let p = page();
        let hero = outline(&p).into_iter().find(|l| l.kind == LineKind::Hero).unwrap();
        assert_eq!(hero.text, "Track every bill,");
        assert_eq!(hero.highlight, "never miss a due date");
        assert!(!hero.hidden);
    }

    #[test]
    fn unrevealed_sections_are_hidden() {
        let mut p = page();
        let line = |p: &Page| outline(p).into_iter().find(|l| l.text == "Everything your bills need").unwrap();
        assert!(line(&p).hidden);
        p.handle(PageEvent::ScrollTo(800.0), Duration::ZERO);
        p.frame(Duration::from_millis(16));
        assert!(!line(&p).hidden);
    }

    #[test]
    fn chips_mark_current_language() {
        let mut p = page();
        p.handle(PageEvent::SelectLanguage("bn".into()), Duration::ZERO);
        let chips = outline(&p).into_iter().find(|l| l.kind == LineKind::Chips).unwrap();
        assert!(chips.text.contains("[বাংলা]"));
        assert!(chips.text.starts_with("English · "));
    }

    #[test]
    fn slider_line_tracks_index() {
        assert_eq!(slider_text(1), "Desktop 2/3   Phone 3/6   ○ ● ○");
    }

    #[test]
    fn plain_render_in_urdu() {
        let mut p = page();
        p.handle(PageEvent::SelectLanguage("ur".into()), Duration::ZERO);
        let text = render_plain(&p);
        assert!(text.starts_with("lang=ur (Urdu) dir=rtl"));
        assert!(text.contains("خصوصیات"));
        assert!(text.contains("[ آپ کا ای میل پتہ ____ ]"));
        assert!(!text.contains("Track every bill"));
    }
}
