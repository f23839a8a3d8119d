//! Contact section UI.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::widgets::heading;
use crate::app::{App, ContactTarget};
use crate::models::{
    AvailabilityStatus, ContactAction, AVAILABILITY, CONTACT_HIGHLIGHTS, CONTACT_METHODS,
    COPYRIGHT, FOOTER_MESSAGE, SCHEDULER_DESCRIPTION, SCHEDULER_HEADLINE, SCHEDULING_OPTIONS,
    SOCIAL_LINKS,
};
use crate::scheduler::LoadState;
use crate::theme::Theme;

fn status_color(status: AvailabilityStatus) -> Color {
    match status {
        AvailabilityStatus::Available => Color::Green,
        AvailabilityStatus::Away => Color::Yellow,
        AvailabilityStatus::Offline => Color::DarkGray,
    }
}

/// Selection marker and label style for one entry.
fn entry_styles(selected: bool, enabled: bool, theme: &Theme) -> (Span<'static>, Style) {
    let marker = if selected {
        Span::styled(
            "▸ ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw("  ")
    };
    let style = match (enabled, selected) {
        (false, _) => Style::default().fg(Color::DarkGray),
        (true, true) => Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(Color::White),
    };
    (marker, style)
}

/// Suffix for scheduling controls while the widget is unavailable.
fn scheduler_note(load: &LoadState) -> Option<&'static str> {
    match load {
        LoadState::Loaded => None,
        LoadState::Loading => Some(" (loading...)"),
        LoadState::Failed(_) => Some(" (unavailable)"),
    }
}

/// Render the Contact section.
pub fn render_contact(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_reach_panel(frame, app, chunks[0]);
    render_connect_panel(frame, app, chunks[1]);
}

fn render_reach_panel(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.portfolio.current_theme;
    let selected = app.contact.selected_target();
    let clock = &app.contact.clock;
    let note = scheduler_note(app.scheduler.load_state());
    let muted = Style::default().fg(Color::Gray);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Local ", muted),
            Span::styled(
                clock.local.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Sarajevo ", muted),
            Span::styled(
                clock.sarajevo.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("● ", Style::default().fg(status_color(clock.status))),
            Span::styled(clock.status.text(), Style::default().fg(status_color(clock.status))),
        ]),
        Line::from(""),
        heading("Contact Methods", theme),
    ];

    for (i, method) in CONTACT_METHODS.iter().enumerate() {
        let is_schedule = matches!(method.action, ContactAction::Schedule(_));
        let enabled = !is_schedule || note.is_none();
        let (marker, style) = entry_styles(selected == ContactTarget::Method(i), enabled, theme);
        let mut spans = vec![
            marker,
            Span::styled(method.title, style),
            Span::styled(format!(" · {} ", method.description), muted),
            Span::styled(
                format!("[{}]", method.action_label),
                Style::default().fg(if enabled { Color::Yellow } else { Color::DarkGray }),
            ),
        ];
        if is_schedule {
            if let Some(note) = note {
                spans.push(Span::styled(note, Style::default().fg(Color::DarkGray)));
            }
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(heading(SCHEDULER_HEADLINE, theme));
    lines.push(Line::from(Span::styled(SCHEDULER_DESCRIPTION, muted)));
    for (i, option) in SCHEDULING_OPTIONS.iter().enumerate() {
        let enabled = note.is_none();
        let (marker, style) =
            entry_styles(selected == ContactTarget::Scheduling(i), enabled, theme);
        let mut spans = vec![
            marker,
            Span::styled(format!("{:<7}", option.duration), Style::default().fg(theme.accent)),
            Span::styled(option.title, style),
            Span::styled(format!(" · {}", option.description), muted),
        ];
        if let Some(note) = note {
            spans.push(Span::styled(note, Style::default().fg(Color::DarkGray)));
        }
        lines.push(Line::from(spans));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            " Get in Touch ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(theme.secondary));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_connect_panel(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.portfolio.current_theme;
    let selected = app.contact.selected_target();
    let muted = Style::default().fg(Color::Gray);

    let mut lines = vec![heading("Connect", theme)];
    for (i, link) in SOCIAL_LINKS.iter().enumerate() {
        let (marker, style) = entry_styles(selected == ContactTarget::Social(i), true, theme);
        lines.push(Line::from(vec![marker, Span::styled(link.label, style)]));
        lines.push(Line::from(Span::styled(
            format!("    {}", link.url),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(heading("Availability", theme));
    for slot in AVAILABILITY {
        lines.push(Line::from(Span::styled(format!("  {}", slot), muted)));
    }
    lines.push(Line::from(""));
    for h in CONTACT_HIGHLIGHTS {
        lines.push(Line::from(vec![
            Span::styled("✓ ", Style::default().fg(Color::Green)),
            Span::styled(h.title, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!(" · {}", h.description), muted),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        FOOTER_MESSAGE,
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::ITALIC),
    )));
    lines.push(Line::from(Span::styled(
        COPYRIGHT,
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheduler_note() {
        assert_eq!(scheduler_note(&LoadState::Loaded), None);
        assert_eq!(scheduler_note(&LoadState::Loading), Some(" (loading...)"));
        assert_eq!(
            scheduler_note(&LoadState::Failed("timeout".into())),
            Some(" (unavailable)")
        );
    }
}
