use std::ops::Range;
use std::time::Duration;

use chrono::{Datelike, Local};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use folio_config::{Config, ProfileSettings};
use folio_core::{AccentColor, SectionId};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::background::Background;
use crate::content::BRAND;
use crate::page::{MAX_PAGE_WIDTH, Page};
use crate::scroll::{MARKER_ROW, ScrollTracker};

/// Longest the loop waits for input when no frame is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Rows scrolled per mouse wheel notch.
const WHEEL_STEP: isize = 3;

/// Gap between navigation labels.
const NAV_GAP: u16 = 3;

/// Blank columns on each side of the navigation bar and page column.
const MARGIN: u16 = 2;

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    profile: ProfileSettings,
    accent: AccentColor,
    background: Background,
    tracker: ScrollTracker,
    page: Page,
    /// Width the page was last laid out for.
    page_width: u16,
    /// First page row shown in the content area.
    scroll: usize,
    content_height: u16,
    /// Terminal size the background was last told about.
    size: (u16, u16),
    /// Section to jump to once the first layout is known.
    pending_jump: Option<SectionId>,
    year: i32,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let size = crossterm::terminal::size().unwrap_or((80, 24));
        let year = Local::now().year();
        let accent = config.ui.accent;
        let start = config.ui.start_section;
        let page_width = page_column(Rect::new(0, 0, size.0, size.1)).width;

        Self {
            running: false,
            page: Page::build(page_width, &config.profile, accent.color(), year),
            profile: config.profile,
            accent,
            background: Background::new(config.background, size.0, size.1),
            tracker: ScrollTracker::new(start),
            page_width,
            scroll: 0,
            content_height: size.1.saturating_sub(2),
            size,
            pending_jump: (start != SectionId::Hero).then_some(start),
            year,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        tracing::info!(
            background = self.background.is_enabled(),
            section = self.tracker.active().id(),
            "portfolio started"
        );
        while self.running {
            self.background.tick();
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::vertical([
            Constraint::Length(1), // Navigation
            Constraint::Fill(1),   // Page
            Constraint::Length(1), // Help text
        ])
        .split(area);
        self.layout(area, chunks[1]);

        // The background goes first so the page is drawn over it.
        self.background.render(frame, area);

        let accent = self.accent.color();
        frame.render_widget(nav_line(chunks[0].width, self.tracker.active(), accent), chunks[0]);

        let column = page_column(chunks[1]);
        let visible: Vec<Line> = self
            .page
            .lines()
            .iter()
            .skip(self.scroll)
            .take(column.height as usize)
            .cloned()
            .collect();
        frame.render_widget(Paragraph::new(visible), column);

        frame.render_widget(help_line(accent, self.background.is_enabled()), chunks[2]);
    }

    /// Bring page layout, scroll position and background size in line with
    /// the terminal area.
    fn layout(&mut self, area: Rect, content: Rect) {
        if (area.width, area.height) != self.size {
            self.size = (area.width, area.height);
            self.background.resized(area.width, area.height);
        }

        let width = page_column(content).width;
        if width != self.page_width {
            self.page_width = width;
            self.rebuild_page();
        }
        self.content_height = content.height;

        if let Some(section) = self.pending_jump.take() {
            self.scroll_to(section);
        }
        self.scroll = self.scroll.min(self.max_scroll());
        self.refresh_active();
    }

    fn rebuild_page(&mut self) {
        self.page = Page::build(self.page_width, &self.profile, self.accent.color(), self.year);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits no longer than the next background frame.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let timeout = self.background.time_until_due().unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                // Picked up by the next layout pass.
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        let page = self.content_height.saturating_sub(1).max(1) as isize;
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('j') | KeyCode::Down) => self.scroll_by(1),
            (_, KeyCode::Char('k') | KeyCode::Up) => self.scroll_by(-1),
            (_, KeyCode::PageDown | KeyCode::Char(' ')) => self.scroll_by(page),
            (_, KeyCode::PageUp) => self.scroll_by(-page),
            (_, KeyCode::Home | KeyCode::Char('g')) => self.scroll_to(SectionId::Hero),
            (_, KeyCode::End | KeyCode::Char('G')) => self.scroll_by(isize::MAX),
            (_, KeyCode::Tab) => self.scroll_to(self.tracker.active().next()),
            (_, KeyCode::BackTab) => self.scroll_to(self.tracker.active().prev()),
            (_, KeyCode::Char(c @ '1'..='5')) => {
                let index = c as usize - '1' as usize;
                self.scroll_to(SectionId::NAV[index]);
            }
            (_, KeyCode::Char('c')) => self.cycle_accent(),
            (_, KeyCode::Char('b')) => self.background.toggle(),
            _ => {}
        }
    }

    /// Forwards pointer input to the background and handles wheel
    /// scrolling and navigation clicks.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.background.pointer_moved(mouse.column, mouse.row);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.background.clicked();
                if mouse.row != 0 {
                    return;
                }
                if let Some(section) = nav_hit(self.size.0, mouse.column) {
                    self.scroll_to(section);
                }
            }
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_STEP),
            MouseEventKind::ScrollUp => self.scroll_by(-WHEEL_STEP),
            _ => {}
        }
    }

    /// The page scrolls until its last row reaches the bottom of the
    /// content area, or further if needed to bring the last section's top
    /// under the marker row on tall terminals.
    fn max_scroll(&self) -> usize {
        let last_start = self.page.spans().last().map_or(0, |(_, span)| span.start);
        self.page
            .height()
            .saturating_sub(self.content_height as usize)
            .max(last_start)
    }

    fn scroll_by(&mut self, delta: isize) {
        self.scroll = self.scroll.saturating_add_signed(delta).min(self.max_scroll());
        self.refresh_active();
    }

    /// Scroll so `section` starts at the top of the content area.
    fn scroll_to(&mut self, section: SectionId) {
        if let Some(span) = self.page.span(section) {
            self.scroll = span.start.min(self.max_scroll());
            self.refresh_active();
        }
    }

    fn refresh_active(&mut self) {
        self.tracker.update(self.page.spans(), self.scroll, MARKER_ROW);
    }

    /// Cycle through available accent colors.
    fn cycle_accent(&mut self) {
        self.accent = self.accent.next();
        self.rebuild_page();
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        tracing::info!("quit requested");
        self.running = false;
    }
}

/// The page column inside the content area: centered, at most
/// [`MAX_PAGE_WIDTH`] wide.
fn page_column(content: Rect) -> Rect {
    let width = content
        .width
        .saturating_sub(MARGIN * 2)
        .clamp(1, MAX_PAGE_WIDTH)
        .min(content.width);
    Rect {
        x: content.x + (content.width - width) / 2,
        width,
        ..content
    }
}

/// Column ranges of the navigation labels, right aligned in a bar `width`
/// cells wide.
fn nav_layout(width: u16) -> Vec<(SectionId, Range<u16>)> {
    let labels: u16 = SectionId::NAV.iter().map(|s| s.label().len() as u16).sum();
    let gaps = NAV_GAP * (SectionId::NAV.len() as u16 - 1);
    let mut x = width.saturating_sub(labels + gaps + MARGIN);

    let mut layout = Vec::with_capacity(SectionId::NAV.len());
    for section in SectionId::NAV {
        let end = x + section.label().len() as u16;
        layout.push((section, x..end));
        x = end + NAV_GAP;
    }
    layout
}

/// Navigation item under column `col` of a bar `width` cells wide.
fn nav_hit(width: u16, col: u16) -> Option<SectionId> {
    nav_layout(width)
        .into_iter()
        .find(|(_, range)| range.contains(&col))
        .map(|(section, _)| section)
}

fn nav_line(width: u16, active: SectionId, accent: Color) -> Line<'static> {
    let mut spans: Vec<Span> = vec![" ".repeat(MARGIN as usize).into(), BRAND.bold().fg(accent)];
    let mut x = MARGIN + BRAND.len() as u16;
    for (section, range) in nav_layout(width) {
        if range.start < x {
            // Not enough room: the labels would overlap the brand.
            break;
        }
        spans.push(" ".repeat((range.start - x) as usize).into());
        let label = section.label();
        spans.push(if section == active {
            label.bold().fg(accent)
        } else {
            label.gray()
        });
        x = range.end;
    }
    Line::from(spans)
}

fn help_line(accent: Color, background: bool) -> Line<'static> {
    let toggle = if background {
        " hide background"
    } else {
        " show background"
    };
    Line::from(vec![
        "q".bold().fg(accent),
        " quit  ".dark_gray(),
        "j/k".bold().fg(accent),
        " scroll  ".dark_gray(),
        "1-5".bold().fg(accent),
        " jump  ".dark_gray(),
        "c".bold().fg(accent),
        " cycle color  ".dark_gray(),
        "b".bold().fg(accent),
        toggle.dark_gray(),
    ])
    .centered()
}
