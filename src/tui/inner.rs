// src/tui/inner.rs  -  ratatui layout
use super::ROW_PX;
use anyhow::{Context, Result};
use crossterm::{execute, terminal::{self, EnterAlternateScreen, LeaveAlternateScreen}};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Terminal,
};
use crate::effects::navbar::{NAVBAR_ID, SCROLLED_CLASS};
use crate::effects::particles;
use crate::i18n;
use crate::page::outline::{self, LineKind, OutlineLine};
use crate::page::Page;
use std::io::stdout;

/// Rows taken by header, footer and the body frame
const CHROME_ROWS: u16 = 3 + 1 + 2;

pub struct Tui {
    terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
}

impl Tui {
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode().context("Enabling raw mode")?;
        let mut out = stdout();
        execute!(out, EnterAlternateScreen)?;
        let backend  = CrosstermBackend::new(out);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    pub fn cleanup(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
    }

    /// Page pixels that fit in the body for the current terminal size
    pub fn viewport_height(&self) -> Result<f64> {
        let size = self.terminal.size()?;
        Ok(f64::from(size.height.saturating_sub(CHROME_ROWS)) * ROW_PX)
    }

    pub fn draw(&mut self, page: &Page) -> Result<()> {
        self.terminal.draw(|f| {
            let area = f.area();
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),  // navbar
                    Constraint::Min(4),     // page body
                    Constraint::Length(1),  // footer hints
                ])
                .split(area);

            f.render_widget(navbar(page), chunks[0]);
            f.render_widget(body(page), chunks[1]);

            let footer = Paragraph::new(
                " ↑↓ PgUp PgDn scroll   l/L language   ←→ 1-3 slides   m menu   a link   d download   Esc/q quit",
            )
            .style(Style::default().fg(Color::DarkGray).bg(Color::Black));
            f.render_widget(footer, chunks[2]);

            if page.modal_open() {
                let rect = centered(area, 60, 9);
                f.render_widget(Clear, rect);
                f.render_widget(modal(page), rect);
            }
        })?;
        Ok(())
    }
}

// ── Widgets ───────────────────────────────────────────────────────────────────

fn navbar(page: &Page) -> Paragraph<'static> {
    let doc = page.doc();
    let scrolled = doc
        .get_by_id(NAVBAR_ID)
        .is_some_and(|n| doc.has_class(n, SCROLLED_CLASS));
    let bg = if scrolled { Color::Cyan } else { Color::Blue };

    let lang = i18n::language(page.language())
        .map_or_else(|| page.language().to_string(), |l| l.label());
    let dir = doc.attr(doc.root(), "dir").unwrap_or("ltr").to_string();

    let mut lines = vec![
        Line::from(vec![
            Span::styled(" MyBills ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(" {}", outline::nav_labels(page).join("  |  "))),
        ]),
        Line::from(format!(
            " {}  [{}]  scroll {:.0}px{}",
            lang,
            dir,
            page.viewport().scroll_y,
            if page.is_scrolling() { "  ..." } else { "" },
        )),
    ];
    if page.menu_open() {
        lines.push(Line::from(" ☰ menu open"));
    }
    Paragraph::new(lines).style(Style::default().fg(Color::Black).bg(bg))
}

fn body(page: &Page) -> Paragraph<'static> {
    let vp     = page.viewport();
    let bottom = vp.scroll_y + vp.height;
    let mut lines: Vec<Line> = Vec::new();

    let field = page.doc().get_by_id(particles::CONTAINER_ID).map(|n| page.doc().layout(n));
    if field.is_some_and(|b| vp.scroll_y < b.bottom()) && !page.particles().is_empty() {
        lines.push(Line::from(Span::styled(
            format!("✦ {} particles drifting ✦", page.particles().len()),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.extend(
        outline::outline(page)
            .into_iter()
            .filter(|l| l.top >= vp.scroll_y && l.top < bottom)
            .map(styled),
    );

    let align = match doc_dir(page) {
        i18n::Direction::Rtl => Alignment::Right,
        i18n::Direction::Ltr => Alignment::Left,
    };
    Paragraph::new(lines)
        .alignment(align)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)))
        .wrap(Wrap { trim: true })
}

fn doc_dir(page: &Page) -> i18n::Direction {
    match page.doc().attr(page.doc().root(), "dir") {
        Some("rtl") => i18n::Direction::Rtl,
        _           => i18n::Direction::Ltr,
    }
}

fn styled(l: OutlineLine) -> Line<'static> {
    if l.hidden {
        return Line::from(Span::styled(l.text, Style::default().fg(Color::DarkGray)));
    }
    match l.kind {
        LineKind::Hero => Line::from(vec![
            Span::styled(format!("{} ", l.text), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(l.highlight, Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        ]),
        LineKind::Heading => Line::from(Span::styled(
            l.text, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        LineKind::Counter => Line::from(Span::styled(
            l.text, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        LineKind::Button  => Line::from(Span::styled(format!("[ {} ]", l.text), Style::default().fg(Color::Magenta))),
        LineKind::Input   => Line::from(Span::styled(format!("[ {} ____ ]", l.text), Style::default().fg(Color::Gray))),
        LineKind::Chips   => Line::from(Span::styled(l.text, Style::default().fg(Color::White))),
        LineKind::Slider  => Line::from(Span::styled(l.text, Style::default().fg(Color::LightBlue))),
        LineKind::Text    => Line::from(l.text),
    }
}

fn modal(page: &Page) -> Paragraph<'static> {
    let mut text = outline::modal_text(page).into_iter();
    let title = text.next().unwrap_or_default();
    let lines: Vec<Line> = text
        .map(Line::from)
        .chain(std::iter::once(Line::from(Span::styled(
            "Esc",
            Style::default().fg(Color::DarkGray),
        ))))
        .collect();
    Paragraph::new(lines)
        .block(Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)))
        .wrap(Wrap { trim: true })
}

fn centered(area: Rect, width_pct: u16, height: u16) -> Rect {
    let w = (u32::from(area.width) * u32::from(width_pct) / 100) as u16;
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}
