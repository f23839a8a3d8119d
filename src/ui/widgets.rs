//! Building blocks shared by the section renderers.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::scheduler::Popup;
use crate::theme::{gradient_color, Theme};
use crate::utils::TabStrip;

/// Columns reserved on each side of a tab strip for its shadow marker.
pub const SHADOW_WIDTH: u16 = 2;

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Text coloured along the theme gradient, one step per character.
pub fn gradient_line(text: &str, theme: &Theme, bold: bool) -> Line<'static> {
    let total = text.chars().count();
    let base = if bold {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(
        text.chars()
            .enumerate()
            .map(|(i, c)| Span::styled(c.to_string(), base.fg(gradient_color(theme, i, total))))
            .collect::<Vec<_>>(),
    )
}

pub fn heading(text: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Bracketed tag, e.g. `[React]`.
pub fn chip(label: &str, color: Color) -> Span<'static> {
    Span::styled(format!("[{}]", label), Style::default().fg(color))
}

/// Chips packed into lines no wider than `width`.
pub fn chip_lines(labels: &[&str], color: Color, width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0;
    for label in labels {
        let len = label.chars().count() + 2;
        if used > 0 && used + 1 + len > width {
            lines.push(Line::from(std::mem::take(&mut current)));
            used = 0;
        }
        if used > 0 {
            current.push(Span::raw(" "));
            used += 1;
        }
        current.push(chip(label, color));
        used += len;
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

/// `● ○ ○` style page indicator for a zero-based page.
pub fn page_dots(current: usize, total: usize, theme: &Theme) -> Line<'static> {
    let spans: Vec<Span> = (0..total)
        .map(|i| {
            if i == current {
                Span::styled("● ", Style::default().fg(theme.accent))
            } else {
                Span::styled("○ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();
    Line::from(spans)
}

/// Placeholder bar shown while a section loads.
pub fn skeleton_line(width: u16) -> Line<'static> {
    Line::from(Span::styled(
        "░".repeat(usize::from(width)),
        Style::default().fg(Color::DarkGray),
    ))
}

pub fn spinner_frame(tick: u128) -> &'static str {
    SPINNER[(tick as usize) % SPINNER.len()]
}

/// Render a horizontally scrolled tab strip with its shadow markers.
///
/// `area` must be one row tall; the strip itself gets the width minus the
/// shadow columns.
pub fn render_tab_strip(
    frame: &mut Frame,
    area: Rect,
    strip: &TabStrip,
    labels: &[&str],
    active: usize,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SHADOW_WIDTH),
            Constraint::Fill(1),
            Constraint::Length(SHADOW_WIDTH),
        ])
        .split(area);

    let shadow_style = Style::default()
        .fg(theme.accent)
        .add_modifier(Modifier::BOLD);
    let left = if strip.shadows.left { "‹ " } else { "  " };
    let right = if strip.shadows.right { " ›" } else { "  " };
    frame.render_widget(Paragraph::new(Span::styled(left, shadow_style)), chunks[0]);
    frame.render_widget(Paragraph::new(Span::styled(right, shadow_style)), chunks[2]);

    // Lay every tab out cell by cell, then cut the visible window
    let mut cells: Vec<(char, Style)> = Vec::new();
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            cells.push((' ', Style::default()));
        }
        let style = if i == active {
            Style::default()
                .fg(Color::White)
                .bg(theme.secondary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let text = format!("  {}  ", label);
        cells.extend(text.chars().map(|c| (c, style)));
    }

    let visible: Vec<Span> = cells
        .into_iter()
        .skip(usize::from(strip.offset))
        .take(usize::from(chunks[1].width))
        .map(|(c, style)| Span::styled(c.to_string(), style))
        .collect();
    frame.render_widget(Paragraph::new(Line::from(visible)), chunks[1]);
}

/// Centered rectangle of `percent_x` by `height` inside `area`.
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = area.width * percent_x.min(100) / 100;
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Draw the scheduling popup over `area`, `drop` rows above its resting place.
pub fn render_popup(
    frame: &mut Frame,
    area: Rect,
    popup: &Popup,
    theme: &Theme,
    tick: u128,
    drop: u16,
) {
    let (title, lines) = match popup {
        Popup::Hidden => return,
        Popup::Loading { url, .. } => (
            " Schedule a Call ",
            vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled(spinner_frame(tick), Style::default().fg(theme.accent)),
                    Span::raw(" Loading scheduler..."),
                ]),
                Line::from(""),
                Line::from(Span::styled(
                    url.as_str().to_string(),
                    Style::default().fg(Color::DarkGray),
                )),
            ],
        ),
        Popup::Open { url } => (
            " Schedule a Call ",
            vec![
                Line::from(""),
                Line::from("Pick a time that works for you:"),
                Line::from(""),
                Line::from(Span::styled(
                    url.as_str().to_string(),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::UNDERLINED),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "[Enter] Open in browser | [Esc] Hide | [x] Close",
                    Style::default().fg(Color::Gray),
                )),
            ],
        ),
    };

    let mut rect = centered_rect(70, 10, area);
    rect.y = rect.y.saturating_sub(drop).max(area.y);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            title,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(theme.secondary));

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(ratatui::layout::Alignment::Center)
            .wrap(Wrap { trim: true }),
        rect,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::theme_by_id;

    #[test]
    fn test_chip_lines_respect_width() {
        let labels = ["React", "TypeScript", "Node.js", "Tailwind CSS"];
        let lines = chip_lines(&labels, Color::Gray, 20);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.width() <= 20);
        }
        assert!(chip_lines(&[], Color::Gray, 20).is_empty());
    }

    #[test]
    fn test_page_dots() {
        let line = page_dots(1, 3, theme_by_id("purple"));
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "○ ● ○ ");
    }

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(0, 0, 100, 8);
        let rect = centered_rect(70, 10, area);
        assert_eq!(rect.width, 70);
        assert_eq!(rect.height, 8);
        assert_eq!(rect.x, 15);
    }
}
