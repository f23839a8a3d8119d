//! Dashboard UI layout.
//!
//! Frame shared by every section: navigation bar, section panel, log window
//! and status bar.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use super::about::render_about;
use super::contact::render_contact;
use super::experience::render_experience;
use super::mindset::render_mindset;
use super::projects::render_projects;
use super::versatilist::render_versatilist;
use super::widgets::render_popup;
use super::{LOG_HEIGHT, NAV_HEIGHT, STATUS_HEIGHT};
use crate::app::{App, NavigationOps, SectionError, Section};
use crate::models::NAME;
use crate::theme::lerp_color;

const LOGO_MARK: &str = "✦";

fn now_secs() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

/// Render the whole UI.
///
/// Returns the Versatilist lookup error when its card could not be built
/// this frame, so the caller can latch it.
pub fn render_dashboard(frame: &mut Frame, app: &App, logs: &[String]) -> Option<SectionError> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(LOG_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    render_nav_bar(frame, app, chunks[0]);

    let section = app.section();
    let theme = app.portfolio.current_theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", section.title()),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(Color::DarkGray));
    let content = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);
    if app.motion_enabled() {
        frame.render_widget(&app.starfield, content);
    }

    // Page transition: the panel slides up into place and fades in
    let now = Instant::now();
    let offset = app.page_offset(now).min(content.height);
    let panel = Rect {
        y: content.y + offset,
        height: content.height - offset,
        ..content
    };

    let mut failure = None;
    match section {
        Section::About => render_about(frame, app, panel),
        Section::Experience => render_experience(frame, app, panel),
        Section::Contact => render_contact(frame, app, panel),
        Section::Versatilist => {
            if let Err(e) = render_versatilist(frame, app, panel) {
                failure = Some(e);
            }
        }
        Section::Projects => render_projects(frame, app, panel),
        Section::Mindset => render_mindset(frame, app, panel),
    }

    if app.transition_progress(now) < 1.0 {
        frame
            .buffer_mut()
            .set_style(content, Style::default().add_modifier(Modifier::DIM));
    }

    render_logs(frame, logs, chunks[2]);
    render_status_bar(frame, app, chunks[3], now);

    let tick = (now_secs() * 10.0) as u128;
    let area = frame.area();
    render_popup(frame, area, app.scheduler.popup(), theme, tick, app.popup_drop(now));

    failure
}

fn nav_spans(sections: &[Section], active: Section, accent: Color) -> Vec<Span<'static>> {
    sections
        .iter()
        .flat_map(|section| {
            let style = if *section == active {
                Style::default().fg(accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            vec![
                Span::styled("[", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    (section.index() + 1).to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("]", Style::default().fg(Color::DarkGray)),
                Span::styled(section.title(), style),
                Span::raw("  "),
            ]
        })
        .collect()
}

/// Render the navigation bar: two groups of sections around the logo.
fn render_nav_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.portfolio.current_theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::DarkGray));
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let title_color = if app.motion_enabled() {
        let intensity = (now_secs() * 3.0).sin() * 0.5 + 0.5;
        lerp_color(theme.gradient.0, theme.gradient.1, intensity)
    } else {
        theme.secondary
    };

    let logo = Line::from(vec![
        Span::styled(
            LOGO_MARK,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            NAME,
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    let logo_width = logo.width() as u16 + 4;

    let (left, right) = Section::ALL.split_at(Section::ALL.len() / 2);
    let active = app.section();
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(logo_width),
            Constraint::Fill(1),
        ])
        .split(inner_area);

    frame.render_widget(
        Paragraph::new(Line::from(nav_spans(left, active, theme.accent))).alignment(Alignment::Right),
        layout[0],
    );
    frame.render_widget(Paragraph::new(logo).alignment(Alignment::Center), layout[1]);
    frame.render_widget(
        Paragraph::new(Line::from(nav_spans(right, active, theme.accent))),
        layout[2],
    );
}

/// Render the log window.
fn render_logs(frame: &mut Frame, logs: &[String], area: Rect) {
    let max_lines = area.height.saturating_sub(2) as usize;
    if max_lines == 0 {
        return;
    }

    let log_lines: Vec<ListItem> = logs
        .iter()
        .rev()
        .take(max_lines)
        .rev()
        .map(|log| {
            ListItem::new(Line::from(Span::styled(
                log.as_str(),
                Style::default().fg(Color::Gray),
            )))
        })
        .collect();

    let logs_list = List::new(log_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Logs ")
            .style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(logs_list, area);
}

fn shortcuts(section: Section) -> &'static str {
    match section {
        Section::About => "[←/→/Home/End] Testimonials | [↑/↓] Scroll | [Enter] Contact",
        Section::Experience => "[↑/↓] Select | [Enter] Expand | [←/→] Timeline",
        Section::Contact => "[↑/↓] Select | [Enter] Activate | [p] Reopen",
        Section::Versatilist => "[←/→] Skill | [↑/↓] Scroll | [R] Reload",
        Section::Projects => "[h/l] Category | [←/→] Page | [v] View",
        Section::Mindset => "[←/→] Category | [↑/↓] Trait",
    }
}

/// Render the bottom status bar with shortcuts.
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect, now: Instant) {
    let theme = app.portfolio.current_theme;
    let motion = if app.motion_enabled() { "on" } else { "off" };

    let mut stats_spans = vec![
        Span::styled("Theme: ", Style::default().fg(Color::Gray)),
        Span::styled(
            theme.name,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled("Motion: ", Style::default().fg(Color::Gray)),
        Span::styled(
            motion,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(toast) = app.toast_reveal(now) {
        stats_spans.push(Span::raw(" | "));
        stats_spans.push(Span::styled(
            toast,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::White));
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let stats_display_width = Line::from(stats_spans.clone()).width() as u16 + 2;
    let available_width = inner_area.width.saturating_sub(stats_display_width);
    let shortcuts = shortcuts(app.section());
    let shortcuts_text = if available_width >= shortcuts.chars().count() as u16 + 2 {
        shortcuts
    } else if available_width >= 20 {
        "[t] Theme | [q] Quit"
    } else {
        ""
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(stats_display_width), Constraint::Min(0)])
        .split(inner_area);

    frame.render_widget(
        Paragraph::new(Line::from(stats_spans)).alignment(Alignment::Left),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(shortcuts_text)).alignment(Alignment::Right),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{AppConfig, UiEvent};
    use crate::constants::SKILLS_LOADING;
    use ratatui::{backend::TestBackend, Terminal};

    fn test_app() -> App {
        let mut app = App::new(AppConfig {
            animations_enabled: false,
            ..AppConfig::default()
        });
        app.on_resize(100, 40);
        app
    }

    fn draw(app: &App, logs: &[String]) -> (String, Option<SectionError>) {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut failure = None;
        terminal
            .draw(|f| failure = render_dashboard(f, app, logs))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        (text, failure)
    }

    #[test]
    fn test_every_section_renders() {
        let mut app = test_app();
        for section in Section::ALL {
            app.navigate_to(section);
            let (text, failure) = draw(&app, &[]);
            assert!(failure.is_none(), "{:?}", section);
            assert!(text.contains(section.title()), "{:?}", section);
            assert!(text.contains(NAME));
        }
    }

    #[test]
    fn test_logs_show_latest_lines() {
        let app = test_app();
        let logs: Vec<String> = (0..10).map(|i| format!("log line {}", i)).collect();
        let (text, _) = draw(&app, &logs);
        assert!(text.contains("log line 9"));
        assert!(!text.contains("log line 0"));
    }

    #[test]
    fn test_toast_in_status_bar() {
        let mut app = test_app();
        app.handle_ui_event(UiEvent::Copied(crate::clipboard::CopyOutcome::Copied {
            label: "Email".into(),
        }));
        let (text, _) = draw(&app, &[]);
        assert!(text.contains("Email copied!"));
    }

    #[test]
    fn test_tripped_versatilist_shows_boundary() {
        let mut app = test_app();
        app.navigate_to(Section::Versatilist);
        let later = Instant::now() + SKILLS_LOADING;
        app.versatilist.finish_loading(later);
        app.versatilist.trip(SectionError::MissingSkill(99));
        let (text, failure) = draw(&app, &[]);
        assert!(failure.is_none());
        assert!(text.contains("Something went wrong loading this section."));
    }
}
