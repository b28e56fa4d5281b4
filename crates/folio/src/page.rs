//! Page layout: turns the portfolio content into styled lines and records
//! which rows each section occupies.

use folio_config::ProfileSettings;
use folio_core::SectionId;
use folio_fonts::{banner_width, build_banner};
use ratatui::{
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
};

use crate::content::{
    self, ABOUT, CERTIFICATIONS, CONTACT_PITCH, EXPERIENCE, FOCUS_AREAS, Highlight, LOCATION,
    PROJECTS, SKILLS, SUMMARY, TAGLINE,
};

/// Widest column the page text is laid out in.
pub const MAX_PAGE_WIDTH: u16 = 100;

/// Width of one cell in the skills grid.
const SKILL_CELL_WIDTH: usize = 28;

/// Columns skill icons are right-aligned in.
const ICON_WIDTH: usize = 3;

/// Rows occupied by a section, `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub start: usize,
    pub end: usize,
}

/// The laid out page.
#[derive(Debug, Clone)]
pub struct Page {
    lines: Vec<Line<'static>>,
    spans: Vec<(SectionId, SectionSpan)>,
}

impl Page {
    /// Lay out the page for a column `width` cells wide.
    pub fn build(width: u16, profile: &ProfileSettings, accent: Color, year: i32) -> Self {
        let mut builder = Builder {
            width: width.clamp(1, MAX_PAGE_WIDTH) as usize,
            accent,
            lines: Vec::new(),
            spans: Vec::new(),
        };

        builder.section(SectionId::Hero, |b| b.hero(profile));
        builder.section(SectionId::About, Builder::about);
        builder.section(SectionId::Skills, Builder::skills);
        builder.section(SectionId::Experience, Builder::experience);
        builder.section(SectionId::Projects, Builder::projects);
        builder.section(SectionId::Contact, |b| b.contact(profile));
        builder.footer(year);

        Page {
            lines: builder.lines,
            spans: builder.spans,
        }
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Section spans in page order.
    pub fn spans(&self) -> &[(SectionId, SectionSpan)] {
        &self.spans
    }

    pub fn span(&self, id: SectionId) -> Option<SectionSpan> {
        self.spans
            .iter()
            .find(|(section, _)| *section == id)
            .map(|(_, span)| *span)
    }
}

struct Builder {
    width: usize,
    accent: Color,
    lines: Vec<Line<'static>>,
    spans: Vec<(SectionId, SectionSpan)>,
}

impl Builder {
    fn section(&mut self, id: SectionId, body: impl FnOnce(&mut Self)) {
        let start = self.lines.len();
        body(self);
        self.spans.push((
            id,
            SectionSpan {
                start,
                end: self.lines.len(),
            },
        ));
    }

    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn blank(&mut self, n: usize) {
        for _ in 0..n {
            self.lines.push(Line::default());
        }
    }

    fn heading(&mut self, title: &'static str) {
        self.blank(2);
        self.push(Line::from(title.bold().fg(self.accent)).centered());
        let rule = "─".repeat(title.chars().count().min(self.width));
        self.push(Line::from(rule.fg(self.accent)).centered());
        self.blank(1);
    }

    fn paragraph(&mut self, text: &str, style: Style) {
        for row in wrap(text, self.width) {
            self.push(Line::styled(row, style));
        }
    }

    fn centered_paragraph(&mut self, text: &str, style: Style) {
        for row in wrap(text, self.width) {
            self.push(Line::styled(row, style).centered());
        }
    }

    fn hero(&mut self, profile: &ProfileSettings) {
        self.blank(2);
        let name = content::NAME.to_uppercase();
        let title = Style::new().fg(self.accent).add_modifier(Modifier::BOLD);
        if banner_width(&name) <= self.width {
            for row in build_banner(&name) {
                self.push(Line::styled(row, title).centered());
            }
        } else if name.split(' ').all(|word| banner_width(word) <= self.width) {
            for (i, word) in name.split(' ').enumerate() {
                if i > 0 {
                    self.blank(1);
                }
                for row in build_banner(word) {
                    self.push(Line::styled(row, title).centered());
                }
            }
        } else {
            self.push(Line::styled(name, title).centered());
        }

        self.blank(1);
        self.push(Line::from(content::ROLE.bold().white()).centered());
        self.blank(1);
        self.centered_paragraph(SUMMARY, Style::new().gray());

        let links = profile_links(profile);
        if !links.is_empty() {
            self.blank(1);
            let mut spans = Vec::new();
            for (i, (label, _)) in links.iter().enumerate() {
                if i > 0 {
                    spans.push("   ".into());
                }
                spans.push(format!("[{label}]").bold().fg(self.accent));
            }
            self.push(Line::from(spans).centered());
        }

        self.blank(2);
        self.push(Line::from("▼".fg(self.accent)).centered());
        self.blank(1);
    }

    fn about(&mut self) {
        self.heading("About Me");
        for (i, text) in ABOUT.iter().enumerate() {
            if i > 0 {
                self.blank(1);
            }
            self.paragraph(text, Style::new().gray());
        }
        self.blank(1);
        self.highlight(CERTIFICATIONS);
        self.push(Line::from(vec!["⌖ ".fg(self.accent), LOCATION.into()]));
        self.blank(1);
        self.highlight(FOCUS_AREAS);
    }

    fn highlight(&mut self, highlight: Highlight) {
        self.push(Line::from(highlight.title.bold().fg(self.accent)));
        self.paragraph(highlight.body, Style::new().gray());
    }

    fn skills(&mut self) {
        self.heading("Technical Skills");
        let columns = (self.width / SKILL_CELL_WIDTH).max(1);
        for row in SKILLS.chunks(columns) {
            let mut spans = Vec::new();
            for skill in row {
                let glyph = skill.icon.glyph();
                let indent = ICON_WIDTH.saturating_sub(display_width(glyph));
                let icon = format!("{}{glyph} ", " ".repeat(indent)).fg(self.accent);
                let name = Span::raw(skill.name);
                let pad = SKILL_CELL_WIDTH.saturating_sub(icon.width() + name.width());
                spans.push(icon);
                spans.push(name);
                spans.push(Span::raw(" ".repeat(pad)));
            }
            self.push(Line::from(spans));
        }
    }

    fn experience(&mut self) {
        self.heading("Experience");
        for (i, job) in EXPERIENCE.iter().enumerate() {
            if i > 0 {
                self.blank(1);
            }
            self.push(Line::from(job.title.bold().white()));
            self.push(Line::from(vec![
                job.organization.fg(self.accent),
                "  ".into(),
                job.duration.dark_gray(),
            ]));
            self.paragraph(job.description, Style::new().gray());
        }
    }

    fn projects(&mut self) {
        self.heading("Featured Projects");
        for (i, project) in PROJECTS.iter().enumerate() {
            if i > 0 {
                self.blank(1);
            }
            self.push(Line::from(project.title.bold().white()));
            self.paragraph(project.description, Style::new().gray());
            let tags: Vec<String> = project.tech.iter().map(|t| format!("[{t}]")).collect();
            self.paragraph(&tags.join(" "), Style::new().fg(self.accent));
            self.push(Line::from(vec![
                link_span("Demo", project.demo, self.accent),
                "  ".into(),
                link_span("Code", project.code, self.accent),
            ]));
        }
    }

    fn contact(&mut self, profile: &ProfileSettings) {
        self.heading("Get In Touch");
        self.centered_paragraph(CONTACT_PITCH, Style::new().gray());
        self.blank(1);

        let links = profile_links(profile);
        if links.is_empty() {
            self.push(Line::from("No contact details configured.".dark_gray()).centered());
        }
        for (label, value) in links {
            self.push(
                Line::from(vec![
                    format!("{label}: ").bold().fg(self.accent),
                    Span::raw(value.to_owned()),
                ])
                .centered(),
            );
        }
    }

    fn footer(&mut self, year: i32) {
        self.blank(2);
        let text = footer_text(year);
        self.centered_paragraph(&text, Style::new().dark_gray());
        self.blank(1);
    }
}

/// Footer line for `year`.
pub fn footer_text(year: i32) -> String {
    format!("© {year} {}. {TAGLINE}", content::NAME)
}

/// Configured profile links as (label, value), in display order.
fn profile_links(profile: &ProfileSettings) -> Vec<(&'static str, &str)> {
    [
        ("Email", &profile.email),
        ("Phone", &profile.phone),
        ("LinkedIn", &profile.linkedin),
        ("GitHub", &profile.github),
        ("Resume", &profile.resume),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
    .collect()
}

fn link_span(label: &'static str, target: Option<&'static str>, accent: Color) -> Span<'static> {
    match target {
        Some(url) => format!("↗ {label} {url}").fg(accent),
        None => format!("↗ {label}").dark_gray(),
    }
}

/// Terminal columns taken by `text`.
fn display_width(text: &str) -> usize {
    Span::raw(text).width()
}

/// Greedy word wrap to `width` columns. Words longer than a line are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        for piece in split_word(word, width) {
            let piece_width = display_width(&piece);
            if !current.is_empty() && current_width + 1 + piece_width > width {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(&piece);
            current_width += piece_width;
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

/// Break `word` into pieces no wider than `width` columns. A single
/// character wider than `width` gets a piece of its own.
fn split_word(word: &str, width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0;
    let mut buf = [0; 4];
    for ch in word.chars() {
        let ch_width = display_width(ch.encode_utf8(&mut buf));
        if !piece.is_empty() && piece_width + ch_width > width {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(ch);
        piece_width += ch_width;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}
