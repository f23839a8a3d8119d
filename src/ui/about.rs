//! About section UI.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::widgets::{chip_lines, gradient_line, heading, page_dots};
use crate::app::{App, Viewport};
use crate::assets::ResolvedImage;
use crate::constants::TESTIMONIALS_PER_PAGE;
use crate::models::{
    CTA_BODY, CTA_BUTTON, CTA_TITLE, EMAIL, IMPACT_STATS, LOCATION, NAME, SERVICES, STATUS,
    SUMMARY, TAGLINE, TESTIMONIALS,
};
use crate::theme::{theme_by_id, Theme};
use crate::utils::{paginate_zero_based, total_pages, wrap_text};

/// Wrap `text` and push it with a left indent.
pub(crate) fn push_wrapped(
    lines: &mut Vec<Line<'static>>,
    text: &str,
    width: u16,
    indent: u16,
    style: Style,
) {
    let pad = " ".repeat(usize::from(indent));
    let avail = usize::from(width.saturating_sub(indent).max(1));
    for part in wrap_text(text, avail) {
        lines.push(Line::from(Span::styled(format!("{}{}", pad, part), style)));
    }
}

fn avatar_label(avatar: Option<&ResolvedImage>) -> String {
    match avatar {
        Some(img) if !img.is_fallback => format!("avatar: {}", img.path.display()),
        Some(img) => format!("avatar: {} (default)", img.path.display()),
        None => "avatar: default".to_string(),
    }
}

/// Every line of the About section at `width`, with testimonials of `page`.
fn build_about_lines(
    page: usize,
    avatars: &[ResolvedImage],
    theme: &Theme,
    width: u16,
) -> Vec<Line<'static>> {
    let text = Style::default().fg(Color::White);
    let muted = Style::default().fg(Color::Gray);
    let mut lines = Vec::new();

    // Hero
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("● ", Style::default().fg(Color::Green)),
        Span::styled(STATUS, Style::default().fg(Color::Green)),
    ]));
    lines.push(gradient_line(NAME, theme, true));
    push_wrapped(&mut lines, TAGLINE, width, 0, text.add_modifier(Modifier::BOLD));
    lines.push(Line::from(""));
    push_wrapped(&mut lines, SUMMARY, width, 0, muted);
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("⌖ ", Style::default().fg(theme.accent)),
        Span::styled(LOCATION, muted),
    ]));
    lines.push(Line::from(vec![
        Span::styled("✉ ", Style::default().fg(theme.accent)),
        Span::styled(EMAIL, muted),
    ]));
    lines.push(Line::from(vec![
        Span::styled("[d]", Style::default().fg(Color::Yellow)),
        Span::raw(" Download CV   "),
        Span::styled("[v]", Style::default().fg(Color::Yellow)),
        Span::raw(" View CV"),
    ]));
    lines.push(Line::from(""));

    // Core services
    lines.push(heading("Core Services", theme));
    for service in SERVICES {
        lines.push(Line::from(vec![
            Span::styled("▸ ", Style::default().fg(theme.accent)),
            Span::styled(service.title, text.add_modifier(Modifier::BOLD)),
        ]));
        push_wrapped(&mut lines, service.description, width, 2, muted);
        for pro in service.pros {
            lines.push(Line::from(vec![
                Span::styled("  ✓ ", Style::default().fg(Color::Green)),
                Span::styled(*pro, text),
            ]));
        }
        for line in chip_lines(service.features, theme.accent, width.saturating_sub(2)) {
            let mut spans = vec![Span::raw("  ")];
            spans.extend(line.spans);
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(""));
    }

    // Professional impact, two stats per row
    lines.push(heading("Professional Impact", theme));
    for pair in IMPACT_STATS.chunks(2) {
        let spans: Vec<Span> = pair
            .iter()
            .flat_map(|stat| {
                vec![
                    Span::styled(
                        format!("{:>6} ", stat.value),
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("{:<28}", stat.label), muted),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));

    // Testimonials
    let pages = total_pages(TESTIMONIALS.len(), TESTIMONIALS_PER_PAGE);
    lines.push(heading("Client Testimonials", theme));
    let mut nav = page_dots(page, pages, theme);
    nav.spans.push(Span::styled(
        format!("  [←/→] page {}/{}", page + 1, pages),
        Style::default().fg(Color::DarkGray),
    ));
    lines.push(nav);
    let offset = page.min(pages.saturating_sub(1)) * TESTIMONIALS_PER_PAGE;
    for (i, t) in paginate_zero_based(TESTIMONIALS, TESTIMONIALS_PER_PAGE, page)
        .iter()
        .enumerate()
    {
        lines.push(Line::from(vec![
            Span::styled(t.name, text.add_modifier(Modifier::BOLD)),
            Span::styled(format!(" · {}", t.role), muted),
        ]));
        lines.push(Line::from(Span::styled(
            avatar_label(avatars.get(offset + i)),
            Style::default().fg(Color::DarkGray),
        )));
        push_wrapped(
            &mut lines,
            &format!("\"{}\"", t.content),
            width,
            2,
            muted.add_modifier(Modifier::ITALIC),
        );
        lines.push(Line::from(""));
    }

    // Call to action
    lines.push(gradient_line(CTA_TITLE, theme, true));
    push_wrapped(&mut lines, CTA_BODY, width, 0, muted);
    lines.push(Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
        Span::styled(
            format!(" {} →", CTA_BUTTON),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines
}

/// Total line count of the About section for a testimonial page.
pub fn content_height(page: usize, width: u16) -> u16 {
    build_about_lines(page, &[], theme_by_id(""), width).len() as u16
}

pub fn max_scroll(page: usize, viewport: Viewport) -> u16 {
    content_height(page, viewport.width).saturating_sub(viewport.height)
}

/// Render the About section.
pub fn render_about(frame: &mut Frame, app: &App, area: Rect) {
    let lines = build_about_lines(
        app.about.testimonial_page,
        &app.avatars,
        app.portfolio.current_theme,
        area.width,
    );
    let scroll = app.about.scroll.min(max_scroll(
        app.about.testimonial_page,
        Viewport {
            width: area.width,
            height: area.height,
        },
    ));
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_matches_rendered_lines() {
        let theme = theme_by_id("cyber");
        for page in 0..2 {
            let lines = build_about_lines(page, &[], theme, 60);
            assert_eq!(lines.len() as u16, content_height(page, 60));
        }
    }

    #[test]
    fn test_narrow_width_scrolls_further() {
        let wide = max_scroll(0, Viewport { width: 120, height: 20 });
        let narrow = max_scroll(0, Viewport { width: 40, height: 20 });
        assert!(narrow > wide);
    }
}
