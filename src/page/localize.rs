// src/page/localize.rs  -  Language switching + localized rendering
use crate::dom::{Document, NodeId, RenderTarget, Tag};
use crate::i18n::{self, Direction, Translations, LANGUAGES};

pub const SELECT_ID: &str = "langSelect";
pub const GRID_ID:   &str = "languagesGrid";
pub const CHIP_CLASS: &str = "lang-chip";
pub const CHIP_LANG_ATTR: &str = "data-lang";

pub const KEY_TAGLINE:   &str = "hero_tagline";
pub const KEY_BEFORE:    &str = "hero_tagline_before";
pub const KEY_HIGHLIGHT: &str = "hero_tagline_highlight";

/// The two rendered fragments of the hero headline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroTagline {
    pub before:    String,
    pub highlight: String,
}

/// Dedicated `hero_tagline_before`/`_highlight` entries win; otherwise the
/// full tagline is split after its first comma.
///
/// A translation that happens to equal its own key is treated as missing.
pub fn hero_tagline(tr: &Translations, code: &str) -> HeroTagline {
    let before = tr.translate(KEY_BEFORE, code);
    if before != KEY_BEFORE {
        let highlight = tr.translate(KEY_HIGHLIGHT, code);
        return HeroTagline {
            before:    before.to_string(),
            highlight: if highlight != KEY_HIGHLIGHT { highlight.to_string() } else { String::new() },
        };
    }
    let tagline = tr.translate(KEY_TAGLINE, code);
    match tagline.split_once(',') {
        Some((head, rest)) => HeroTagline {
            before:    format!("{head},"),
            highlight: rest.trim().to_string(),
        },
        None => HeroTagline {
            before:    String::new(),
            highlight: tagline.to_string(),
        },
    }
}

/// Owns the current language and renders it into a target
pub struct Localizer {
    current:      String,
    translations: Translations,
}

impl Localizer {
    pub fn new(translations: Translations) -> Self {
        Self { current: i18n::DEFAULT_LANG.to_string(), translations }
    }

    pub fn current(&self) -> &str { &self.current }

    pub fn translations(&self) -> &Translations { &self.translations }

    /// Switch to `code` and re-render every localized node. The code is not
    /// validated; unknown codes render raw keys.
    pub fn set_language<R: RenderTarget + ?Sized>(&mut self, target: &mut R, code: &str) {
        self.current = code.to_string();

        target.set_root_attribute("dir", Direction::for_code(code).as_str());
        target.set_root_attribute("lang", code);

        let nodes = target.localized_nodes();
        for n in &nodes {
            let text = self.translations.translate(&n.key, code);
            if n.text_input {
                target.set_placeholder(n.node, text);
            } else {
                target.set_text(n.node, text);
            }
        }

        if let (Some(before_el), Some(highlight_el)) =
            (target.node_for_key(KEY_BEFORE), target.node_for_key(KEY_HIGHLIGHT))
        {
            let hero = hero_tagline(&self.translations, code);
            target.set_text(before_el, &hero.before);
            target.set_text(highlight_el, &hero.highlight);
        }

        log::info!("[i18n] language={} dir={} nodes={}",
            code, Direction::for_code(code).as_str(), nodes.len());
    }

    /// Primary subtag of `tag` if a translation set exists for it
    pub fn detect(&self, tag: &str) -> Option<String> {
        let sub = i18n::primary_subtag(tag);
        self.translations.has_language(&sub).then_some(sub)
    }
}

// ── Language picker widgets ───────────────────────────────────────────────────

/// Fill `#langSelect` with one option per language, English selected
pub fn build_selector(doc: &mut Document) -> Option<NodeId> {
    let select = doc.get_by_id(SELECT_ID)?;
    for l in LANGUAGES {
        let opt = doc.add(select, Tag::Option);
        doc.set_attr(opt, "value", l.code);
        doc.set_text_content(opt, &l.label());
        if l.code == i18n::DEFAULT_LANG {
            doc.set_attr(opt, "selected", "");
        }
    }
    doc.set_attr(select, "value", i18n::DEFAULT_LANG);
    Some(select)
}

/// Reflect `code` as the dropdown's value; `selected` follows the matching option
pub fn sync_selector(doc: &mut Document, code: &str) {
    let Some(select) = doc.get_by_id(SELECT_ID) else { return };
    doc.set_attr(select, "value", code);
    for opt in doc.descendants_with_tag(select, Tag::Option) {
        if doc.attr(opt, "value") == Some(code) {
            doc.set_attr(opt, "selected", "");
        } else {
            doc.remove_attr(opt, "selected");
        }
    }
}

pub fn selector_value(doc: &Document) -> Option<&str> {
    doc.attr(doc.get_by_id(SELECT_ID)?, "value")
}

/// Animation delay of the chip at `index`: 0.05s per position
pub fn chip_delay(index: usize) -> String {
    format!("{}s", (index * 5) as f64 / 100.0)
}

/// One chip per language in `#languagesGrid`; missing grid → no chips
pub fn build_grid(doc: &mut Document) -> Vec<NodeId> {
    let Some(grid) = doc.get_by_id(GRID_ID) else {
        log::debug!("[i18n] no #{} container", GRID_ID);
        return Vec::new();
    };
    LANGUAGES
        .iter()
        .enumerate()
        .map(|(i, l)| {
            let chip = doc.add(grid, Tag::Div);
            doc.add_class(chip, CHIP_CLASS);
            doc.set_attr(chip, CHIP_LANG_ATTR, l.code);
            doc.set_style(chip, "animation-delay", &chip_delay(i));
            let native = doc.add(chip, Tag::Span);
            doc.add_class(native, "lang-native");
            doc.set_text_content(native, l.native);
            let name = doc.add(chip, Tag::Span);
            doc.set_text_content(name, l.name);
            chip
        })
        .collect()
}

pub fn chips(doc: &Document) -> Vec<NodeId> {
    doc.query_class(CHIP_CLASS)
}

/// Language `step` places away from `current`, among those with a translation set
pub fn cycle_language(tr: &Translations, current: &str, step: isize) -> String {
    let codes: Vec<&str> = LANGUAGES
        .iter()
        .map(|l| l.code)
        .filter(|c| tr.has_language(c))
        .collect();
    if codes.is_empty() {
        return current.to_string();
    }
    let n   = codes.len() as isize;
    let pos = codes.iter().position(|&c| c == current).unwrap_or(0) as isize;
    codes[(pos + step).rem_euclid(n) as usize].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{LocalizedNode, I18N_ATTR};
    use std::collections::BTreeMap;

    fn table(entries: &[(&str, &str, &str)]) -> Translations {
        let mut t = Translations::empty();
        for (code, k, v) in entries {
            t.insert(code, k, v);
        }
        t
    }

    #[test]
    fn tagline_splits_on_first_comma() {
        let t = table(&[("en", "hero_tagline", "Simplify, your bills")]);
        let h = hero_tagline(&t, "en");
        assert_eq!(h.before, "Simplify,");
        assert_eq!(h.highlight, "your bills");
    }

    #[test]
    fn tagline_without_comma_is_all_highlight() {
        let t = table(&[("en", "hero_tagline", "SimplifyBills")]);
        let h = hero_tagline(&t, "en");
        assert_eq!(h.before, "");
        assert_eq!(h.highlight, "SimplifyBills");
    }

    #[test]
    fn tagline_keeps_later_commas() {
        let t = table(&[("en", "hero_tagline", "Bills, dues, and more")]);
        let h = hero_tagline(&t, "en");
        assert_eq!(h.before, "Bills,");
        assert_eq!(h.highlight, "dues, and more");
    }

    #[test]
    fn dedicated_keys_win() {
        let t = table(&[
            ("hi", "hero_tagline", "a, b"),
            ("hi", "hero_tagline_before", "पहले"),
            ("hi", "hero_tagline_highlight", "मुख्य"),
        ]);
        let h = hero_tagline(&t, "hi");
        assert_eq!(h, HeroTagline { before: "पहले".into(), highlight: "मुख्य".into() });
    }

    #[test]
    fn dedicated_before_without_highlight_gives_empty_highlight() {
        let t = table(&[("hi", "hero_tagline_before", "पहले")]);
        assert_eq!(hero_tagline(&t, "hi").highlight, "");
    }

    #[test]
    fn unknown_language_splits_echoed_key() {
        let h = hero_tagline(&Translations::builtin(), "zz");
        assert_eq!(h.before, "");
        assert_eq!(h.highlight, "hero_tagline");
    }

    /// Records every call so the render contract can be checked without a document
    #[derive(Default)]
    struct Recorder {
        nodes: Vec<LocalizedNode>,
        root:  BTreeMap<String, String>,
        text:  BTreeMap<NodeId, String>,
        hint:  BTreeMap<NodeId, String>,
    }

    impl Recorder {
        fn with(keys: &[(&str, bool)]) -> Self {
            let nodes = keys.iter().enumerate()
                .map(|(i, (k, input))| LocalizedNode { node: i, key: k.to_string(), text_input: *input })
                .collect();
            Self { nodes, ..Default::default() }
        }
    }

    impl RenderTarget for Recorder {
        fn set_root_attribute(&mut self, name: &str, value: &str) {
            self.root.insert(name.into(), value.into());
        }
        fn localized_nodes(&self) -> Vec<LocalizedNode> { self.nodes.clone() }
        fn node_for_key(&self, key: &str) -> Option<NodeId> {
            self.nodes.iter().find(|n| n.key == key).map(|n| n.node)
        }
        fn set_text(&mut self, node: NodeId, text: &str) { self.text.insert(node, text.into()); }
        fn set_placeholder(&mut self, node: NodeId, text: &str) { self.hint.insert(node, text.into()); }
    }

    #[test]
    fn renders_text_and_placeholders() {
        let t = table(&[("en", "title", "Hello"), ("en", "email", "Your email")]);
        let mut loc = Localizer::new(t);
        let mut r = Recorder::with(&[("title", false), ("email", true), ("missing", false)]);
        loc.set_language(&mut r, "en");
        assert_eq!(r.text[&0], "Hello");
        assert_eq!(r.hint[&1], "Your email");
        assert!(!r.text.contains_key(&1));
        assert_eq!(r.text[&2], "missing");
        assert_eq!(r.root["lang"], "en");
        assert_eq!(r.root["dir"], "ltr");
    }

    #[test]
    fn rtl_codes_flip_direction() {
        let mut loc = Localizer::new(Translations::builtin());
        let mut r = Recorder::default();
        for l in LANGUAGES {
            loc.set_language(&mut r, l.code);
            let want = if i18n::RTL_LANGS.contains(&l.code) { "rtl" } else { "ltr" };
            assert_eq!(r.root["dir"], want, "{}", l.code);
            assert_eq!(loc.current(), l.code);
        }
    }

    #[test]
    fn hero_nodes_use_split_fallback() {
        let t = table(&[("ta", "hero_tagline", "Simplify, your bills")]);
        let mut loc = Localizer::new(t);
        let mut r = Recorder::with(&[(KEY_BEFORE, false), (KEY_HIGHLIGHT, false)]);
        loc.set_language(&mut r, "ta");
        assert_eq!(r.text[&0], "Simplify,");
        assert_eq!(r.text[&1], "your bills");
    }

    #[test]
    fn hero_special_case_needs_both_nodes() {
        let t = table(&[("en", "hero_tagline", "A, B")]);
        let mut loc = Localizer::new(t);
        let mut r = Recorder::with(&[(KEY_BEFORE, false)]);
        loc.set_language(&mut r, "en");
        // Only the generic pass ran: the key echoes
        assert_eq!(r.text[&0], KEY_BEFORE);
    }

    #[test]
    fn set_language_is_idempotent_on_document() {
        let mut doc = Document::new();
        let root = doc.root();
        for key in ["nav_features", KEY_BEFORE, KEY_HIGHLIGHT, "newsletter_placeholder"] {
            let tag = if key.starts_with("newsletter") { Tag::Input } else { Tag::Span };
            let n = doc.add(root, tag);
            doc.set_attr(n, I18N_ATTR, key);
        }
        let mut loc = Localizer::new(Translations::builtin());
        loc.set_language(&mut doc, "ur");
        let once = format!("{:?}", doc);
        loc.set_language(&mut doc, "ur");
        assert_eq!(format!("{:?}", doc), once);
        assert_eq!(doc.attr(root, "dir"), Some("rtl"));
    }

    #[test]
    fn detect_uses_primary_subtag() {
        let loc = Localizer::new(Translations::builtin());
        assert_eq!(loc.detect("hi-IN").as_deref(), Some("hi"));
        assert_eq!(loc.detect("ur_PK.UTF-8").as_deref(), Some("ur"));
        assert_eq!(loc.detect("fr-FR"), None);
        assert_eq!(loc.detect("C"), None);
    }

    #[test]
    fn selector_lists_every_language() {
        let mut doc = Document::new();
        let root = doc.root();
        let sel = doc.add(root, Tag::Select);
        doc.get_mut(sel).id = Some(SELECT_ID.into());
        build_selector(&mut doc).unwrap();
        let opts = doc.get(sel).children.clone();
        assert_eq!(opts.len(), LANGUAGES.len());
        assert_eq!(doc.text(opts[1]), "हिंदी (Hindi)");
        assert_eq!(doc.attr(opts[0], "selected"), Some(""));
        assert_eq!(doc.attr(opts[1], "selected"), None);
        assert_eq!(selector_value(&doc), Some("en"));
        sync_selector(&mut doc, "ta");
        assert_eq!(selector_value(&doc), Some("ta"));
        assert_eq!(doc.attr(opts[0], "selected"), None);
        assert_eq!(doc.attr(opts[2], "selected"), Some(""));
        let selected = opts.iter().filter(|&&o| doc.attr(o, "selected").is_some()).count();
        assert_eq!(selected, 1);
    }

    #[test]
    fn grid_chips_stagger() {
        assert_eq!(chip_delay(0), "0s");
        assert_eq!(chip_delay(1), "0.05s");
        assert_eq!(chip_delay(22), "1.1s");

        let mut doc = Document::new();
        let root = doc.root();
        let grid = doc.add(root, Tag::Div);
        doc.get_mut(grid).id = Some(GRID_ID.into());
        let chips = build_grid(&mut doc);
        assert_eq!(chips.len(), 23);
        assert_eq!(doc.attr(chips[13], CHIP_LANG_ATTR), Some("ur"));
        assert_eq!(doc.style(chips[2], "animation-delay"), Some("0.1s"));
    }

    #[test]
    fn grid_missing_is_noop() {
        let mut doc = Document::new();
        assert!(build_grid(&mut doc).is_empty());
    }

    #[test]
    fn cycling_skips_languages_without_tables() {
        let tr = Translations::builtin();
        assert_eq!(cycle_language(&tr, "en", 1), "hi");
        assert_eq!(cycle_language(&tr, "bn", 1), "ur");
        assert_eq!(cycle_language(&tr, "ur", 1), "en");
        assert_eq!(cycle_language(&tr, "en", -1), "ur");
        assert_eq!(cycle_language(&tr, "te", 1), "hi");
    }
}
