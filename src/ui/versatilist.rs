//! Versatilist section UI.
//!
//! The skill card is built from [`skill_for_display`]. A lookup failure is
//! returned to the caller, which latches it so that the section shows the
//! error panel until the next reload.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use super::about::push_wrapped;
use super::widgets::{chip_lines, gradient_line, heading, render_tab_strip, skeleton_line};
use crate::app::{skill_for_display, App, SectionError, Viewport};
use crate::models::{
    VersatileSkill, HEADER_BADGE, HEADER_DESCRIPTION, HEADER_TITLE, LEVEL_PIPS,
    VERSATILE_SKILLS,
};
use crate::theme::{theme_by_id, Theme};

/// Rows above the card: badge, title, description, tab strip, spacer.
const HEADER_ROWS: u16 = 5;

fn skill_lines(skill: &VersatileSkill, theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let text = Style::default().fg(Color::White);
    let muted = Style::default().fg(Color::Gray);
    let mut lines = Vec::new();

    lines.push(gradient_line(skill.title, theme, true));
    push_wrapped(&mut lines, skill.description, width, 0, muted);
    lines.push(Line::from(""));

    lines.push(heading("Core Skills", theme));
    lines.extend(chip_lines(skill.primary_skills, theme.accent, width));
    for detail in skill.detailed_skills {
        lines.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(theme.accent)),
            Span::styled(*detail, text),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(heading("Achievements", theme));
    for stat in skill.achievements {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>6} ", stat.value),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(stat.label, muted),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(heading("Proficiency", theme));
    for detail in skill.skill_details {
        let filled = detail.filled_pips();
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<24}", detail.area), text),
            Span::styled("●".repeat(filled), Style::default().fg(theme.accent)),
            Span::styled(
                "○".repeat(LEVEL_PIPS - filled),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!(" {} · {}y", detail.level.as_str(), detail.years),
                muted,
            ),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(heading("Tools", theme));
    lines.extend(chip_lines(skill.tools, theme.secondary, width));
    lines.push(Line::from(""));

    let case = &skill.case_study;
    lines.push(heading("Case Study", theme));
    lines.push(Line::from(Span::styled(
        case.title,
        text.add_modifier(Modifier::BOLD),
    )));
    push_wrapped(&mut lines, case.description, width, 0, muted);
    for impact in case.impact {
        lines.push(Line::from(vec![
            Span::styled("  ✓ ", Style::default().fg(Color::Green)),
            Span::styled(*impact, text),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(heading("Recent Projects", theme));
    for project in skill.recent_projects {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}", project.name), text),
            Span::styled(format!("  {}", project.date), Style::default().fg(Color::DarkGray)),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(heading("Soft Skills", theme));
    lines.extend(chip_lines(skill.soft_skills, theme.primary, width));
    lines
}

/// Height of the scrolled card for skill `active` at `width`.
/// Zero when the skill cannot be displayed.
pub fn content_height(active: usize, width: u16) -> u16 {
    skill_for_display(active)
        .map(|skill| skill_lines(skill, theme_by_id(""), width).len() as u16)
        .unwrap_or(0)
}

pub fn max_scroll(active: usize, viewport: Viewport) -> u16 {
    content_height(active, viewport.width)
        .saturating_sub(viewport.height.saturating_sub(HEADER_ROWS))
}

fn render_error(frame: &mut Frame, area: Rect, error: &SectionError) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Something went wrong loading this section.",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[R]", Style::default().fg(Color::Yellow)),
            Span::raw(" Reload"),
        ]),
    ];
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_skeleton(frame: &mut Frame, area: Rect) {
    let widths = [area.width / 3, area.width * 2 / 3, area.width / 2];
    let lines: Vec<Line> = (0..area.height)
        .map(|row| {
            if row % 4 == 3 {
                Line::from("")
            } else {
                skeleton_line(widths[usize::from(row) % widths.len()])
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

/// Render the Versatilist section.
///
/// Returns the lookup error when the active skill cannot be displayed. The
/// section panel is left showing the error message in that case.
pub fn render_versatilist(frame: &mut Frame, app: &App, area: Rect) -> Result<(), SectionError> {
    if let Some(error) = &app.versatilist.error {
        render_error(frame, area, error);
        return Ok(());
    }

    let theme = app.portfolio.current_theme;
    let state = &app.versatilist;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(HEADER_ROWS - 4),
            Constraint::Fill(1),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("✦ {}", HEADER_BADGE),
            Style::default().fg(theme.accent),
        ))),
        chunks[0],
    );
    frame.render_widget(Paragraph::new(gradient_line(HEADER_TITLE, theme, true)), chunks[1]);
    frame.render_widget(
        Paragraph::new(Span::styled(HEADER_DESCRIPTION, Style::default().fg(Color::Gray))),
        chunks[2],
    );

    if state.is_loading() {
        render_skeleton(frame, chunks[3].union(chunks[5]));
        return Ok(());
    }

    let labels: Vec<&str> = VERSATILE_SKILLS.iter().map(|s| s.title).collect();
    render_tab_strip(frame, chunks[3], &state.tabs, &labels, state.active, theme);

    let skill = match skill_for_display(state.active) {
        Ok(skill) => skill,
        Err(e) => {
            render_error(frame, area, &e);
            return Err(e);
        }
    };
    let body = chunks[5];
    let lines = skill_lines(skill, theme, body.width);
    let scroll = state.scroll.min(max_scroll(
        state.active,
        Viewport {
            width: area.width,
            height: area.height,
        },
    ));
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), body);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_height_matches_lines() {
        let theme = theme_by_id("ember");
        for (i, skill) in VERSATILE_SKILLS.iter().enumerate() {
            assert_eq!(
                skill_lines(skill, theme, 70).len() as u16,
                content_height(i, 70)
            );
        }
    }

    #[test]
    fn test_missing_skill_has_no_content() {
        assert_eq!(content_height(VERSATILE_SKILLS.len(), 70), 0);
        assert_eq!(
            max_scroll(
                VERSATILE_SKILLS.len(),
                Viewport {
                    width: 70,
                    height: 20
                }
            ),
            0
        );
    }

    #[test]
    fn test_max_scroll_accounts_for_header() {
        let viewport = Viewport {
            width: 70,
            height: 20,
        };
        assert_eq!(
            max_scroll(0, viewport),
            content_height(0, 70).saturating_sub(20 - HEADER_ROWS)
        );
    }
}
