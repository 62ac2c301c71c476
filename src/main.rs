// src/main.rs  -  mybills-landing  entry point
mod config;
mod dom;
mod effects;
mod i18n;
mod page;
mod tui;

use anyhow::Result;
use clap::Parser;
use config::{AppConfig, Cli};
use effects::{Clock, MonotonicClock};
use i18n::Translations;
use page::{landing, outline, Page, PageOptions};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Viewport used when printing the page without a terminal UI
const RENDER_VIEWPORT_PX: f64 = 800.0;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // ── --print-config  ───────────────────────────────────────────────────────
    if cli.print_config {
        print!("{}", config::DEFAULT_CONFIG_TOML);
        return Ok(());
    }

    // ── --write-config  ───────────────────────────────────────────────────────
    if cli.write_config {
        let path = AppConfig::write_default_config(&cli)?;
        println!("Config written to: {}", path.display());
        println!("Edit it to set the language, slider speed, particles, etc.");
        return Ok(());
    }

    // ── Load config + translations ────────────────────────────────────────────
    let cfg = AppConfig::load(&cli)?;
    let translations = load_translations(&cfg)?;

    // ── --list-langs  ─────────────────────────────────────────────────────────
    if cli.list_langs {
        println!("Supported languages:");
        for l in i18n::LANGUAGES {
            let n = translations.entry_count(l.code);
            let status = if n > 0 { format!("{n} strings") } else { "no translations".into() };
            println!(
                "  {:<4} {:<28} {}  {}",
                l.code,
                l.label(),
                i18n::Direction::for_code(l.code).as_str(),
                status
            );
        }
        return Ok(());
    }

    // ── Page ──────────────────────────────────────────────────────────────────
    let clock   = MonotonicClock::new();
    let mut rng = SmallRng::from_entropy();
    let opts    = PageOptions::from(&cfg);
    let doc     = landing::build(&translations);
    let mut page = Page::load(doc, translations, &opts, RENDER_VIEWPORT_PX, clock.now(), &mut rng);

    #[cfg(feature = "tui")]
    {
        if !cli.render {
            return run_tui(page, &cfg, &clock);
        }
    }

    page.settle(clock.now());
    print!("{}", outline::render_plain(&page));
    Ok(())
}

fn load_translations(cfg: &AppConfig) -> Result<Translations> {
    let mut tr = Translations::builtin();
    if let Some(path) = &cfg.translations {
        tr.merge(Translations::load_file(path)?);
        log::info!("[i18n] merged translations from {}", path.display());
    }
    tr.validate()?;
    Ok(tr)
}

#[cfg(feature = "tui")]
fn run_tui(mut page: Page, cfg: &AppConfig, clock: &MonotonicClock) -> Result<()> {
    let mut tui = tui::Tui::new()?;
    let result = event_loop(&mut tui, &mut page, cfg, clock);
    tui.cleanup();
    result?;
    println!("\nThanks for visiting MyBills.\n");
    Ok(())
}

#[cfg(feature = "tui")]
fn event_loop(tui: &mut tui::Tui, page: &mut Page, cfg: &AppConfig, clock: &MonotonicClock) -> Result<()> {
    use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
    use crate::effects::modal;
    use crate::page::PageEvent;
    use std::time::Duration;

    page.handle(PageEvent::Resize(tui.viewport_height()?), clock.now());
    let tick = cfg.frame_interval();
    let step = 3.0 * tui::ROW_PX;
    // Next navbar link followed by `a`
    let mut link = 0usize;

    'main: loop {
        // ── Single crossterm event reader ─────────────────────────────────────
        while event::poll(Duration::from_millis(0))? {
            let now = clock.now();
            match event::read()? {
                Event::Key(k) if k.kind != KeyEventKind::Release => {
                    if k.code == KeyCode::Char('c') && k.modifiers.contains(KeyModifiers::CONTROL) {
                        break 'main;
                    }
                    let ev = match k.code {
                        KeyCode::Char('q') => break 'main,
                        KeyCode::Esc if !page.modal_open() => break 'main,
                        KeyCode::Esc      => PageEvent::KeyDown(modal::ESCAPE.into()),
                        KeyCode::Up       => PageEvent::ScrollBy(-step),
                        KeyCode::Down     => PageEvent::ScrollBy(step),
                        KeyCode::PageUp   => PageEvent::ScrollBy(-page.viewport().height),
                        KeyCode::PageDown => PageEvent::ScrollBy(page.viewport().height),
                        KeyCode::Home     => PageEvent::ScrollTo(0.0),
                        KeyCode::End      => PageEvent::ScrollTo(page.viewport().max_scroll()),
                        KeyCode::Left     => PageEvent::PrevSlide,
                        KeyCode::Right    => PageEvent::NextSlide,
                        KeyCode::Char(c @ '1'..='3') => PageEvent::SlideTo(c as usize - '1' as usize),
                        KeyCode::Char(c @ ('l' | 'L')) => {
                            let dir = if c == 'l' { 1 } else { -1 };
                            let tr  = page.localizer().translations();
                            PageEvent::SelectLanguage(crate::page::localize::cycle_language(tr, page.language(), dir))
                        }
                        KeyCode::Char('m') => PageEvent::ToggleMenu,
                        KeyCode::Char('d') => PageEvent::OpenDownload,
                        KeyCode::Char('a') => {
                            let links = page.menu_links();
                            let Some(&a) = links.get(link % links.len().max(1)) else { continue };
                            link += 1;
                            PageEvent::ClickAnchor(a)
                        }
                        _ => continue,
                    };
                    page.handle(ev, now);
                }
                Event::Resize(..) => page.handle(PageEvent::Resize(tui.viewport_height()?), now),
                _ => {}
            }
        }

        page.frame(clock.now());
        tui.draw(page)?;
        std::thread::sleep(tick);
    }
    Ok(())
}
