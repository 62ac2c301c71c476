// src/i18n/mod.rs  -  Supported languages + translation tables
mod tables;

use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::path::Path;

/// One entry of the language picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code:   &'static str,
    /// English display name
    pub name:   &'static str,
    /// Self-name in the native script
    pub native: &'static str,
}

impl Language {
    /// Dropdown label: `"<native> (<name>)"`
    pub fn label(&self) -> String {
        format!("{} ({})", self.native, self.name)
    }
}

pub static LANGUAGES: &[Language] = &[
    Language { code: "en",  name: "English",   native: "English" },
    Language { code: "hi",  name: "Hindi",     native: "हिंदी" },
    Language { code: "ta",  name: "Tamil",     native: "தமிழ்" },
    Language { code: "bn",  name: "Bengali",   native: "বাংলা" },
    Language { code: "te",  name: "Telugu",    native: "తెలుగు" },
    Language { code: "mr",  name: "Marathi",   native: "मराठी" },
    Language { code: "ml",  name: "Malayalam", native: "മലയാളം" },
    Language { code: "kn",  name: "Kannada",   native: "ಕನ್ನಡ" },
    Language { code: "gu",  name: "Gujarati",  native: "ગુજરાતી" },
    Language { code: "pa",  name: "Punjabi",   native: "ਪੰਜਾਬੀ" },
    Language { code: "or",  name: "Odia",      native: "ଓଡ଼ିଆ" },
    Language { code: "as",  name: "Assamese",  native: "অসমীয়া" },
    Language { code: "ne",  name: "Nepali",    native: "नेपाली" },
    Language { code: "ur",  name: "Urdu",      native: "اردو" },
    Language { code: "sd",  name: "Sindhi",    native: "سنڌي" },
    Language { code: "ks",  name: "Kashmiri",  native: "कश्मीरी" },
    Language { code: "sa",  name: "Sanskrit",  native: "संस्कृतम्" },
    Language { code: "kok", name: "Konkani",   native: "कोंकणी" },
    Language { code: "mai", name: "Maithili",  native: "मैथिली" },
    Language { code: "doi", name: "Dogri",     native: "डोगरी" },
    Language { code: "brx", name: "Bodo",      native: "बड़ो" },
    Language { code: "mni", name: "Manipuri",  native: "মৈতৈলোন্" },
    Language { code: "sat", name: "Santali",   native: "ᱥᱟᱱᱛᱟᱲᱤ" },
];

/// Codes written right-to-left
pub static RTL_LANGS: &[&str] = &["ur", "sd"];

pub const DEFAULT_LANG: &str = "en";

pub fn language(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|l| l.code == code)
}

pub fn language_index(code: &str) -> Option<usize> {
    LANGUAGES.iter().position(|l| l.code == code)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction { Ltr, Rtl }

impl Direction {
    pub fn for_code(code: &str) -> Self {
        if RTL_LANGS.contains(&code) { Direction::Rtl } else { Direction::Ltr }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

/// Primary subtag of a language tag: `"hi-IN"` → `"hi"`.
/// POSIX locale strings (`hi_IN.UTF-8`) are accepted as well.
pub fn primary_subtag(tag: &str) -> String {
    tag.split(['-', '_', '.', '@'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

// ── Translation table ─────────────────────────────────────────────────────────

/// language code → (key → text)
#[derive(Debug, Clone, Default)]
pub struct Translations {
    tables: HashMap<String, HashMap<String, String>>,
}

impl Translations {
    pub fn empty() -> Self { Self::default() }

    /// Tables compiled into the binary
    pub fn builtin() -> Self {
        let mut t = Self::empty();
        for table in tables::BUILTIN {
            for (k, v) in table.entries {
                t.insert(table.code, k, v);
            }
        }
        t
    }

    pub fn insert(&mut self, code: &str, key: &str, text: &str) {
        self.tables
            .entry(code.to_string())
            .or_default()
            .insert(key.to_string(), text.to_string());
    }

    pub fn has_language(&self, code: &str) -> bool {
        self.tables.contains_key(code)
    }

    pub fn codes(&self) -> Vec<&str> {
        let mut v: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        v.sort_unstable();
        v
    }

    pub fn entry_count(&self, code: &str) -> usize {
        self.tables.get(code).map_or(0, HashMap::len)
    }

    /// Look up `key` under `code`. An unknown language or key echoes the key
    /// back unchanged, which callers use as the "not translated" signal.
    pub fn translate<'a>(&'a self, key: &'a str, code: &str) -> &'a str {
        self.tables
            .get(code)
            .and_then(|m| m.get(key))
            .map(String::as_str)
            .unwrap_or(key)
    }

    /// Entries of `other` win over existing ones
    pub fn merge(&mut self, other: Translations) {
        for (code, entries) in other.tables {
            self.tables.entry(code).or_default().extend(entries);
        }
    }

    /// `[code]` tables of `key = "text"` pairs
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let tables: HashMap<String, HashMap<String, String>> = toml::from_str(raw)?;
        Ok(Self { tables })
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Reading translations {:?}", path))?;
        let t = Self::from_toml_str(&raw)
            .with_context(|| format!("Parsing translations {:?}", path))?;
        for code in t.codes() {
            if language(code).is_none() {
                log::warn!("[i18n] {:?}: table '{}' is not in the language list", path, code);
            }
        }
        Ok(t)
    }

    /// The English table is the ultimate fallback and must exist
    pub fn validate(&self) -> Result<()> {
        if !self.has_language(DEFAULT_LANG) {
            bail!("translation set has no '{}' table", DEFAULT_LANG);
        }
        Ok(())
    }
}

// ── Helper macro ──────────────────────────────────────────────────────────────

/// Static key/text table for one language
pub struct LangTable {
    pub code:    &'static str,
    pub entries: &'static [(&'static str, &'static str)],
}

macro_rules! lang_table {
    ($name:ident, $code:literal, [ $( $k:literal => $v:literal ),* $(,)? ]) => {
        pub static $name: $crate::i18n::LangTable = $crate::i18n::LangTable {
            code:    $code,
            entries: &[ $( ($k, $v), )* ],
        };
    };
}
pub(crate) use lang_table;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn language_codes_are_unique() {
        let codes: HashSet<_> = LANGUAGES.iter().map(|l| l.code).collect();
        assert_eq!(codes.len(), LANGUAGES.len());
        assert_eq!(LANGUAGES.len(), 23);
    }

    #[test]
    fn label_shows_native_then_english() {
        assert_eq!(language("hi").unwrap().label(), "हिंदी (Hindi)");
        assert_eq!(language("en").unwrap().label(), "English (English)");
    }

    #[test]
    fn direction_per_code() {
        for l in LANGUAGES {
            let want = if l.code == "ur" || l.code == "sd" { Direction::Rtl } else { Direction::Ltr };
            assert_eq!(Direction::for_code(l.code), want, "{}", l.code);
        }
        assert_eq!(Direction::for_code("xx").as_str(), "ltr");
    }

    #[test]
    fn unknown_language_echoes_every_key() {
        let t = Translations::builtin();
        for key in ["hero_tagline", "nav_features", "no_such_key", ""] {
            assert_eq!(t.translate(key, "xx"), key);
        }
    }

    #[test]
    fn known_key_returns_mapped_text() {
        let mut t = Translations::empty();
        t.insert("en", "greeting", "Hello");
        assert_eq!(t.translate("greeting", "en"), "Hello");
        assert_eq!(t.translate("farewell", "en"), "farewell");
    }

    #[test]
    fn builtin_english_is_complete_reference() {
        let t = Translations::builtin();
        t.validate().unwrap();
        for table in tables::BUILTIN {
            for (k, _) in table.entries {
                assert_ne!(t.translate(k, "en"), *k, "'{}' missing from en", k);
            }
        }
    }

    #[test]
    fn primary_subtag_forms() {
        assert_eq!(primary_subtag("hi-IN"), "hi");
        assert_eq!(primary_subtag("ur"), "ur");
        assert_eq!(primary_subtag("ta_IN.UTF-8"), "ta");
        assert_eq!(primary_subtag("EN-us"), "en");
        assert_eq!(primary_subtag(""), "");
    }

    #[test]
    fn toml_merge_overrides_builtin() {
        let mut t = Translations::builtin();
        let extra = Translations::from_toml_str(
            "[te]\nhero_tagline = \"బిల్లులు, సులభం\"\n\n[en]\nnav_features = \"What it does\"\n",
        ).unwrap();
        t.merge(extra);
        assert_eq!(t.translate("nav_features", "en"), "What it does");
        assert_eq!(t.translate("hero_tagline", "te"), "బిల్లులు, సులభం");
        assert!(t.has_language("te"));
    }

    #[test]
    fn load_file_reports_parse_errors() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[hi\nkey = 1").unwrap();
        let err = Translations::load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Parsing translations"));
    }

    #[test]
    fn validate_requires_english() {
        let mut t = Translations::empty();
        t.insert("hi", "k", "v");
        assert!(t.validate().is_err());
    }
}
