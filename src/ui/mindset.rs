//! Mindset section UI.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::widgets::{gradient_line, render_tab_strip};
use crate::app::App;
use crate::models::{Trait, MINDSET_CATEGORIES, VISION, VISION_SUBTITLE};
use crate::theme::Theme;

fn trait_lines(t: &Trait, selected: bool, theme: &Theme) -> Vec<Line<'static>> {
    let (marker, title_style) = if selected {
        (
            "▸ ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            "  ",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    };
    let mut lines = vec![
        Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::styled(t.title, title_style),
        ]),
        Line::from(Span::styled(
            format!("  {}", t.description),
            Style::default().fg(Color::Gray),
        )),
    ];
    if selected {
        lines.push(Line::from(Span::styled(
            format!("  {}", t.details),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )));
        let stats: Vec<Span> = t
            .stats
            .iter()
            .flat_map(|s| {
                [
                    Span::styled(
                        format!("  {} ", s.value),
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(s.label, Style::default().fg(Color::DarkGray)),
                ]
            })
            .collect();
        lines.push(Line::from(stats));
    }
    lines.push(Line::from(""));
    lines
}

/// Render the vision statement, the category strip and its traits.
pub fn render_mindset(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.portfolio.current_theme;
    let state = &app.mindset;
    let category = &MINDSET_CATEGORIES[state.category.min(MINDSET_CATEGORIES.len() - 1)];

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Fill(1),
        ])
        .split(area);

    let vision = vec![
        gradient_line("My Vision", theme, true),
        Line::from(Span::styled(
            format!("\"{}\"", VISION),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(VISION_SUBTITLE, Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(Paragraph::new(vision).wrap(Wrap { trim: true }), chunks[0]);

    let labels: Vec<&str> = MINDSET_CATEGORIES.iter().map(|c| c.title).collect();
    render_tab_strip(frame, chunks[1], &state.tabs, &labels, state.category, theme);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            category.description,
            Style::default().fg(Color::Gray),
        ))),
        chunks[2],
    );

    let lines: Vec<Line> = category
        .traits
        .iter()
        .enumerate()
        .flat_map(|(i, t)| trait_lines(t, i == state.selected_trait, theme))
        .collect();
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {} ", category.title),
            Style::default().fg(theme.accent),
        ));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        chunks[3],
    );
}
