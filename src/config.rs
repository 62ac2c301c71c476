// src/config.rs  -  Runtime configuration (CLI + TOML)
use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The example config is embedded directly in the binary at compile time.
/// Users can write it out with:  mybills-landing --write-config
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../config.toml.example");

// ── CLI ───────────────────────────────────────────────────────────────────────
#[derive(Parser, Debug, Default)]
#[command(
    name  = "mybills-landing",
    about = "MyBills landing page  |  live multi-language preview",
    version,
)]
pub struct Cli {
    /// Config file path (default: ~/.config/mybills-landing/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Page language code (en, hi, ta, bn, ur ...); skips locale detection
    #[arg(long)]
    pub lang: Option<String>,

    /// Preferred language tag as a browser reports it (e.g. hi-IN).
    /// Defaults to $LC_ALL / $LC_MESSAGES / $LANG.
    #[arg(long)]
    pub locale: Option<String>,

    /// Do not pick the page language from the locale
    #[arg(long, action)]
    pub no_detect: bool,

    /// Extra translation file merged over the built-in tables
    #[arg(long)]
    pub translations: Option<PathBuf>,

    /// Slider autoplay interval in milliseconds
    #[arg(long)]
    pub autoplay_ms: Option<u64>,

    /// Disable slider autoplay
    #[arg(long, action)]
    pub no_autoplay: bool,

    /// Number of background particles
    #[arg(long)]
    pub particles: Option<usize>,

    /// List supported languages and exit
    #[arg(long, action)]
    pub list_langs: bool,

    /// Print the localized page as plain text and exit
    #[arg(long, action)]
    pub render: bool,

    /// Write the built-in default config.toml to the config path and exit.
    /// Use --config <PATH> to write to a custom location.
    #[arg(long, action)]
    pub write_config: bool,

    /// Print the built-in default config.toml to stdout and exit
    #[arg(long, action)]
    pub print_config: bool,
}

// ── TOML file structure ───────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    pub general:   Option<GeneralCfg>,
    pub motion:    Option<MotionCfg>,
    pub slider:    Option<SliderCfg>,
    pub particles: Option<ParticlesCfg>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralCfg {
    pub language:      Option<String>,
    pub locale:        Option<String>,
    pub detect_locale: Option<bool>,
    pub translations:  Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionCfg {
    /// Counter animation length (ms)
    pub counter_duration_ms: Option<u64>,
    /// Anchor smooth-scroll length (ms)
    pub smooth_scroll_ms:    Option<u64>,
    /// Scroll offset after which the navbar turns solid (px)
    pub navbar_threshold_px: Option<f64>,
    pub fps:                 Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderCfg {
    pub autoplay:    Option<bool>,
    pub autoplay_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticlesCfg {
    pub count: Option<usize>,
}

// ── Resolved / merged config ──────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Page language; `None` leaves the choice to locale detection
    pub language:            Option<String>,
    /// Explicit language tag; `None` falls back to the environment
    pub locale:              Option<String>,
    pub detect_locale:       bool,
    pub translations:        Option<PathBuf>,
    pub counter_duration_ms: u64,
    pub smooth_scroll_ms:    u64,
    pub navbar_threshold_px: f64,
    pub fps:                 u32,
    pub autoplay:            bool,
    pub autoplay_ms:         u64,
    pub particle_count:      usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language:            None,
            locale:              None,
            detect_locale:       true,
            translations:        None,
            counter_duration_ms: 2000,
            smooth_scroll_ms:    600,
            navbar_threshold_px: 50.0,
            fps:                 60,
            autoplay:            true,
            autoplay_ms:         5000,
            particle_count:      20,
        }
    }
}

// ── Config loader ─────────────────────────────────────────────────────────────
impl AppConfig {
    /// Write the embedded default config to disk.
    /// Returns the path it was written to.
    pub fn write_default_config(cli: &Cli) -> Result<PathBuf> {
        let path = cli.config.clone().unwrap_or_else(default_config_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Creating config directory {:?}", parent))?;
        }
        std::fs::write(&path, DEFAULT_CONFIG_TOML)
            .with_context(|| format!("Writing config to {:?}", path))?;
        Ok(path)
    }

    pub fn load(cli: &Cli) -> Result<Self> {
        let mut cfg = Self::default();

        // 1. Load TOML file
        let path = cli.config.clone().unwrap_or_else(default_config_path);
        if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Reading config {:?}", path))?;
            let fc: FileConfig = toml::from_str(&raw)
                .with_context(|| format!("Parsing config {:?}", path))?;
            cfg.apply_file(&fc);
        } else {
            log::info!("[config] no config file at {}, using defaults", path.display());
        }

        // 2. Apply CLI overrides
        cfg.apply_cli(cli);
        Ok(cfg)
    }

    fn apply_file(&mut self, fc: &FileConfig) {
        if let Some(g) = &fc.general {
            if let Some(v) = &g.language      { self.language      = Some(v.clone()); }
            if let Some(v) = &g.locale        { self.locale        = Some(v.clone()); }
            if let Some(v) = g.detect_locale  { self.detect_locale = v; }
            if let Some(v) = &g.translations  { self.translations  = Some(v.clone()); }
        }
        if let Some(m) = &fc.motion {
            if let Some(v) = m.counter_duration_ms { self.counter_duration_ms = v; }
            if let Some(v) = m.smooth_scroll_ms    { self.smooth_scroll_ms    = v; }
            if let Some(v) = m.navbar_threshold_px { self.navbar_threshold_px = v; }
            if let Some(v) = m.fps                 { self.fps                 = v.max(1); }
        }
        if let Some(s) = &fc.slider {
            if let Some(v) = s.autoplay    { self.autoplay    = v; }
            if let Some(v) = s.autoplay_ms { self.autoplay_ms = v; }
        }
        if let Some(p) = &fc.particles {
            if let Some(v) = p.count { self.particle_count = v; }
        }
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(v) = &cli.lang         { self.language       = Some(v.clone()); }
        if let Some(v) = &cli.locale       { self.locale         = Some(v.clone()); }
        if cli.no_detect                   { self.detect_locale  = false; }
        if let Some(v) = &cli.translations { self.translations   = Some(v.clone()); }
        if let Some(v) = cli.autoplay_ms   { self.autoplay_ms    = v; }
        if cli.no_autoplay                 { self.autoplay       = false; }
        if let Some(v) = cli.particles     { self.particle_count = v; }
    }

    /// Preferred language tag: configured value, else the POSIX locale variables
    pub fn preferred_locale(&self) -> Option<String> {
        self.locale.clone().or_else(|| {
            ["LC_ALL", "LC_MESSAGES", "LANG"]
                .iter()
                .filter_map(|k| std::env::var(k).ok())
                .find(|v| !v.is_empty())
        })
    }

    /// Frame interval derived from `fps`
    pub fn frame_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.fps.max(1) as f64)
    }
}

fn default_config_path() -> PathBuf {
    dirs_next().join("mybills-landing").join("config.toml")
}

fn dirs_next() -> PathBuf {
    if let Ok(v) = std::env::var("XDG_CONFIG_HOME") { return PathBuf::from(v); }
    if let Ok(v) = std::env::var("APPDATA")          { return PathBuf::from(v); }
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_default();
    PathBuf::from(home).join(".config")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli_with(path: PathBuf) -> Cli {
        Cli { config: Some(path), ..Default::default() }
    }

    #[test]
    fn embedded_example_parses_to_defaults() {
        let fc: FileConfig = toml::from_str(DEFAULT_CONFIG_TOML).unwrap();
        let mut cfg = AppConfig::default();
        cfg.apply_file(&fc);
        assert_eq!(cfg.language, None);
        assert_eq!(cfg.counter_duration_ms, 2000);
        assert_eq!(cfg.autoplay_ms, 5000);
        assert_eq!(cfg.particle_count, 20);
        assert!(cfg.detect_locale);
    }

    #[test]
    fn file_then_cli_overrides() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[general]\nlanguage = \"hi\"\n\n[slider]\nautoplay_ms = 3000\n\n[particles]\ncount = 8\n").unwrap();

        let mut cli = cli_with(path);
        let cfg = AppConfig::load(&cli).unwrap();
        assert_eq!(cfg.language.as_deref(), Some("hi"));
        assert_eq!(cfg.autoplay_ms, 3000);
        assert_eq!(cfg.particle_count, 8);

        cli.lang = Some("ta".into());
        cli.no_autoplay = true;
        let cfg = AppConfig::load(&cli).unwrap();
        assert_eq!(cfg.language.as_deref(), Some("ta"));
        assert!(!cfg.autoplay);
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load(&cli_with(dir.path().join("absent.toml"))).unwrap();
        assert_eq!(cfg.navbar_threshold_px, 50.0);
        assert_eq!(cfg.smooth_scroll_ms, 600);
    }

    #[test]
    fn bad_file_is_an_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[motion]\nfps = \"fast\"\n").unwrap();
        let err = AppConfig::load(&cli_with(path)).unwrap_err();
        assert!(format!("{err:#}").contains("Parsing config"));
    }

    #[test]
    fn lang_flag_en_is_still_explicit() {
        let dir = tempfile::tempdir().unwrap();
        let mut cli = cli_with(dir.path().join("absent.toml"));
        cli.lang = Some("en".into());
        let cfg = AppConfig::load(&cli).unwrap();
        assert_eq!(cfg.language.as_deref(), Some("en"));
    }

    #[test]
    fn explicit_locale_wins_over_environment() {
        let cfg = AppConfig { locale: Some("ur-PK".into()), ..Default::default() };
        assert_eq!(cfg.preferred_locale().as_deref(), Some("ur-PK"));
    }

    #[test]
    fn write_default_config_roundtrip() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let written = AppConfig::write_default_config(&cli_with(path.clone())).unwrap();
        assert_eq!(written, path);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG_TOML);
    }
}
