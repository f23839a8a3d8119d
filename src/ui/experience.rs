//! Experience section UI.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::about::push_wrapped;
use super::widgets::{chip_lines, heading, render_tab_strip};
use crate::app::{App, Viewport};
use crate::models::{Experience, EXPERIENCES};
use crate::theme::Theme;

/// Rows above the cards: tab strip, progress track, spacer.
const TIMELINE_ROWS: u16 = 3;
/// Left indent of card bodies.
const CARD_INDENT: u16 = 2;

/// Wrap width and height of the card list inside `viewport`.
pub fn card_area(viewport: Viewport) -> (u16, u16) {
    (
        viewport.width.saturating_sub(CARD_INDENT).max(1),
        viewport.height.saturating_sub(TIMELINE_ROWS),
    )
}

/// Lines of one card. Its length always equals
/// [`crate::app::card_height`] for the same arguments.
fn card_lines(
    exp: &Experience,
    selected: bool,
    expanded: bool,
    wrap_width: u16,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let muted = Style::default().fg(Color::Gray);
    let marker = if selected { "▸ " } else { "  " };
    let title_style = if selected {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };
    let toggle = if expanded { "▾" } else { "▸" };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::styled(exp.role, title_style),
            Span::styled(format!(" @ {} ", exp.company), muted),
            Span::styled(toggle, Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::styled(
            format!("  {} · {}", exp.period, exp.location),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let indent = " ".repeat(usize::from(CARD_INDENT));
    let mut body = Vec::new();
    push_wrapped(&mut body, exp.description, wrap_width, 0, muted);
    for line in body {
        let mut spans = vec![Span::raw(indent.clone())];
        spans.extend(line.spans);
        lines.push(Line::from(spans));
    }

    if expanded {
        lines.push(heading("  Key Achievements", theme));
        for achievement in exp.achievements {
            lines.push(Line::from(vec![
                Span::styled("  • ", Style::default().fg(theme.accent)),
                Span::styled(*achievement, Style::default().fg(Color::White)),
            ]));
        }
        if !exp.highlights.is_empty() {
            lines.push(heading("  Highlights", theme));
            for h in exp.highlights {
                lines.push(Line::from(vec![
                    Span::styled("  ★ ", Style::default().fg(Color::Yellow)),
                    Span::styled(h.title, Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(format!(": {}", h.description), muted),
                ]));
            }
        }
        if !exp.skills.is_empty() {
            lines.push(heading("  Skills", theme));
            // One row; the rest is clipped by the panel
            let mut spans = vec![Span::raw(indent.clone())];
            if let Some(row) = chip_lines(exp.skills, theme.secondary, u16::MAX).pop() {
                spans.extend(row.spans);
            }
            lines.push(Line::from(spans));
        }
    }

    lines.push(Line::from(Span::styled(
        "─".repeat(usize::from(wrap_width + CARD_INDENT)),
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

fn timeline_track(active: usize, theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for i in 0..EXPERIENCES.len() {
        if i > 0 {
            let style = if i <= active {
                Style::default().fg(theme.accent)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled("────", style));
        }
        if i <= active {
            spans.push(Span::styled("●", Style::default().fg(theme.accent)));
        } else {
            spans.push(Span::styled("○", Style::default().fg(Color::DarkGray)));
        }
    }
    spans.push(Span::styled(
        format!("  {}", EXPERIENCES[active.min(EXPERIENCES.len() - 1)].period),
        Style::default().fg(Color::Gray),
    ));
    Line::from(spans)
}

/// Render the timeline strip and the scrolled card list.
pub fn render_experience(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.portfolio.current_theme;
    let exp = &app.experience;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(TIMELINE_ROWS - 2),
            Constraint::Fill(1),
        ])
        .split(area);

    let labels: Vec<&str> = EXPERIENCES.iter().map(|e| e.timeline_label()).collect();
    render_tab_strip(frame, chunks[0], &exp.timeline, &labels, exp.current_highlight, theme);
    frame.render_widget(
        Paragraph::new(timeline_track(exp.active_timeline_point, theme)),
        chunks[1],
    );

    let lines: Vec<Line> = EXPERIENCES
        .iter()
        .enumerate()
        .flat_map(|(i, e)| {
            card_lines(
                e,
                i == exp.selected,
                exp.expanded == Some(i),
                exp.wrap_width(),
                theme,
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).scroll((exp.scroll, 0)), chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::card_height;
    use crate::theme::theme_by_id;

    #[test]
    fn test_card_lines_match_card_height() {
        let theme = theme_by_id("purple");
        for width in [20u16, 45, 90] {
            for exp in EXPERIENCES {
                for expanded in [false, true] {
                    assert_eq!(
                        card_lines(exp, false, expanded, width, theme).len() as u16,
                        card_height(exp, expanded, width),
                        "{} width={} expanded={}",
                        exp.company,
                        width,
                        expanded
                    );
                }
            }
        }
    }

    #[test]
    fn test_card_area() {
        let (wrap, height) = card_area(Viewport {
            width: 80,
            height: 20,
        });
        assert_eq!(wrap, 78);
        assert_eq!(height, 17);
    }
}
