//! Projects section UI.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::widgets::{chip, chip_lines, page_dots, render_tab_strip, skeleton_line};
use crate::app::{App, ViewMode};
use crate::assets::ResolvedImage;
use crate::constants::PROJECTS_PER_PAGE;
use crate::models::{category_name, category_tabs, Project, PROJECTS, PROJECT_CATEGORIES};
use crate::theme::Theme;
use crate::utils::ALL_CATEGORIES;

/// Resolved image of `project`, looked up by its position in [`PROJECTS`].
fn project_image<'a>(project: &Project, images: &'a [ResolvedImage]) -> Option<&'a ResolvedImage> {
    PROJECTS
        .iter()
        .position(|p| p.title == project.title)
        .and_then(|i| images.get(i))
}

fn image_label(image: Option<&ResolvedImage>) -> String {
    match image {
        Some(img) => {
            let name = img
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            match (img.is_fallback, img.dimensions) {
                (true, _) => format!("▣ {} (fallback)", name),
                (false, Some((w, h))) => format!("▣ {} {}x{}", name, w, h),
                (false, None) => format!("▣ {}", name),
            }
        }
        None => "▣ no image".to_string(),
    }
}

fn category_description(id: &str) -> &'static str {
    if id == ALL_CATEGORIES {
        return "Everything I have built, designed and shipped";
    }
    PROJECT_CATEGORIES
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.description)
        .unwrap_or("")
}

fn card_lines(
    project: &Project,
    image: Option<&ResolvedImage>,
    view: ViewMode,
    width: u16,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let muted = Style::default().fg(Color::Gray);
    let body = match view {
        ViewMode::Grid => project.description,
        ViewMode::List => project.long_description,
    };

    let mut lines = vec![
        Line::from(Span::styled(image_label(image), Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(body, muted)),
    ];
    let chips: Vec<Span> = project
        .category
        .iter()
        .flat_map(|id| [chip(category_name(id), theme.secondary), Span::raw(" ")])
        .collect();
    lines.push(Line::from(chips));
    lines.extend(chip_lines(project.tech, theme.accent, width));
    if project.link().is_some() {
        lines.push(Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
            Span::styled(
                " View Project ↗",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    lines
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    project: &Project,
    app: &App,
    selected: bool,
) {
    let theme = app.portfolio.current_theme;
    let border = if selected {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(
            format!(" {} ", project.title),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
    let lines = card_lines(
        project,
        project_image(project, &app.project_images),
        app.projects.view,
        area.width.saturating_sub(2),
        theme,
    );
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

/// Card rectangles for a page of `count` projects.
fn card_rects(area: Rect, view: ViewMode, count: usize) -> Vec<Rect> {
    match view {
        ViewMode::List => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![Constraint::Ratio(1, PROJECTS_PER_PAGE as u32); PROJECTS_PER_PAGE])
                .split(area);
            rows.iter().take(count).copied().collect()
        }
        ViewMode::Grid => {
            let row_count = PROJECTS_PER_PAGE.div_ceil(2);
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![Constraint::Ratio(1, row_count as u32); row_count])
                .split(area);
            rows.iter()
                .flat_map(|row| {
                    Layout::default()
                        .direction(Direction::Horizontal)
                        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                        .split(*row)
                        .to_vec()
                })
                .take(count)
                .collect()
        }
    }
}

/// Render the category strip, the current page of cards and the pager.
pub fn render_projects(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.portfolio.current_theme;
    let state = &app.projects;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(area);

    let labels: Vec<&str> = category_tabs().into_iter().map(category_name).collect();
    render_tab_strip(frame, chunks[0], &state.tabs, &labels, state.category, theme);

    let view_label = match state.view {
        ViewMode::Grid => "grid",
        ViewMode::List => "list",
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                category_description(state.selected_category()),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!("  ({} projects, {} view)", state.filtered().len(), view_label),
                Style::default().fg(Color::DarkGray),
            ),
        ])),
        chunks[1],
    );

    if state.is_loading() {
        let lines: Vec<Line> = (0..chunks[2].height)
            .map(|row| {
                if row % 3 == 2 {
                    Line::from("")
                } else {
                    skeleton_line(chunks[2].width / (2 + row % 2))
                }
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), chunks[2]);
    } else {
        let visible = state.visible();
        if visible.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "No projects in this category yet.",
                    Style::default().fg(Color::DarkGray),
                )),
                chunks[2],
            );
        }
        for (i, (project, rect)) in visible
            .iter()
            .zip(card_rects(chunks[2], state.view, visible.len()))
            .enumerate()
        {
            render_card(frame, rect, project, app, i == state.selected);
        }
    }

    let pages = state.total_pages();
    let mut pager = page_dots(state.page - 1, pages, theme);
    pager.spans.push(Span::styled(
        format!("  page {}/{}", state.page, pages),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(pager), chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_project_image_lookup() {
        let images: Vec<ResolvedImage> = PROJECTS
            .iter()
            .map(|p| ResolvedImage {
                path: PathBuf::from(p.image.trim_start_matches('/')),
                dimensions: None,
                is_fallback: false,
            })
            .collect();
        let image = project_image(&PROJECTS[1], &images).map(|i| i.path.clone());
        assert_eq!(image, Some(PathBuf::from("imgs/Portfolio.jpg")));
    }

    #[test]
    fn test_image_label() {
        let fallback = ResolvedImage {
            path: PathBuf::from("assets/imgs/fallback.jpg"),
            dimensions: Some((10, 10)),
            is_fallback: true,
        };
        assert_eq!(image_label(Some(&fallback)), "▣ fallback.jpg (fallback)");
        assert_eq!(image_label(None), "▣ no image");
    }

    #[test]
    fn test_card_rects_fill_page() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(card_rects(area, ViewMode::Grid, 4).len(), 4);
        assert_eq!(card_rects(area, ViewMode::Grid, 3).len(), 3);
        let list = card_rects(area, ViewMode::List, 2);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].width, 80);
    }

    #[test]
    fn test_view_project_only_with_link() {
        let theme = crate::theme::theme_by_id("purple");
        let has_link = |p: &Project| {
            card_lines(p, None, ViewMode::Grid, 40, theme)
                .iter()
                .any(|l| l.spans.iter().any(|s| s.content.contains("View Project")))
        };
        for project in PROJECTS {
            assert_eq!(has_link(project), project.link().is_some(), "{}", project.title);
        }
    }
}
