//! Keyboard and mouse handling.
//!
//! Handlers mutate [`App`] directly and return the [`Effect`]s the event loop
//! has to carry out (timers, clipboard, browser, config writes).

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use super::{
    Action, App, AppState, ContactTarget, NavigationOps, Section, StateOps, LOADING_POPUP,
    LOADING_PROJECTS,
};
use crate::models::{
    scheduling_url, ContactAction, CONTACT_METHODS, CV_DOWNLOAD_URL, CV_PREVIEW_URL,
    SCHEDULING_OPTIONS, SOCIAL_LINKS,
};
use crate::theme::next_theme_id;

/// Lines moved by one wheel notch in scrollable sections.
const WHEEL_LINES: i32 = 3;

/// Work the event loop performs on behalf of a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Quit,
    /// A tab strip moved. Shadows are recomputed once it settles.
    RefreshShadows,
    /// The experience cards scrolled. The timeline follows once it settles.
    TrackTimeline,
    Copy { label: String, value: String },
    OpenUrl(String),
    SaveConfig,
    Log(String),
}

pub trait InputOps {
    fn handle_key(&mut self, key: KeyEvent) -> Vec<Effect>;
    fn handle_mouse(&mut self, mouse: MouseEvent) -> bool;
    fn apply_wheel(&mut self) -> Vec<Effect>;
}

impl InputOps for App {
    /// Route a key press: popup first, then global keys, then the section.
    fn handle_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.change_state(AppState::Exit);
            return vec![Effect::Quit];
        }

        if self.scheduler.is_popup_visible() {
            return self.handle_popup_key(key);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.change_state(AppState::Exit);
                vec![Effect::Quit]
            }
            KeyCode::Char(c @ '1'..='6') => {
                self.navigate_to_index(c as usize - '1' as usize);
                vec![Effect::RefreshShadows]
            }
            KeyCode::Tab => {
                self.next_section();
                vec![Effect::RefreshShadows]
            }
            KeyCode::BackTab => {
                self.prev_section();
                vec![Effect::RefreshShadows]
            }
            KeyCode::Char('t') => self.cycle_theme(),
            KeyCode::Char('m') => self.toggle_motion(),
            KeyCode::Char('R') => {
                self.reload();
                vec![
                    Effect::Log("Reloaded.".to_string()),
                    Effect::RefreshShadows,
                    Effect::TrackTimeline,
                ]
            }
            _ => match self.section() {
                Section::About => self.handle_about_key(key),
                Section::Experience => self.handle_experience_key(key),
                Section::Contact => self.handle_contact_key(key),
                Section::Versatilist => self.handle_versatilist_key(key),
                Section::Projects => self.handle_projects_key(key),
                Section::Mindset => self.handle_mindset_key(key),
            },
        }
    }

    /// Queue wheel motion. Returns true when the throttled step should fire.
    fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.wheel_delta += 1;
                true
            }
            MouseEventKind::ScrollUp => {
                self.wheel_delta -= 1;
                true
            }
            _ => false,
        }
    }

    /// Apply the wheel motion queued since the last step.
    fn apply_wheel(&mut self) -> Vec<Effect> {
        let delta = std::mem::take(&mut self.wheel_delta);
        if delta == 0 || self.scheduler.is_popup_visible() {
            return Vec::new();
        }

        match self.section() {
            Section::About => {
                let max = self.about_max_scroll();
                let next = (i32::from(self.about.scroll) + delta * WHEEL_LINES)
                    .clamp(0, i32::from(max));
                self.about.scroll = next as u16;
                Vec::new()
            }
            Section::Experience => {
                self.experience.scroll_by(delta * WHEEL_LINES);
                vec![Effect::TrackTimeline]
            }
            Section::Versatilist => {
                let max = self.versatilist_max_scroll();
                let next = (i32::from(self.versatilist.scroll) + delta * WHEEL_LINES)
                    .clamp(0, i32::from(max));
                self.versatilist.scroll = next as u16;
                Vec::new()
            }
            Section::Contact => {
                for _ in 0..delta.unsigned_abs() {
                    if delta > 0 {
                        self.contact.select_next();
                    } else {
                        self.contact.select_prev();
                    }
                }
                Vec::new()
            }
            Section::Projects => {
                for _ in 0..delta.unsigned_abs() {
                    if delta > 0 {
                        self.projects.select_next();
                    } else {
                        self.projects.select_prev();
                    }
                }
                Vec::new()
            }
            Section::Mindset => {
                for _ in 0..delta.unsigned_abs() {
                    if delta > 0 {
                        self.mindset.select_next_trait();
                    } else {
                        self.mindset.select_prev_trait();
                    }
                }
                Vec::new()
            }
        }
    }
}

impl App {
    fn cycle_theme(&mut self) -> Vec<Effect> {
        let next = next_theme_id(&self.config.theme);
        self.config.theme = next.to_string();
        self.dispatch(Action::SetTheme(next.to_string()));
        vec![
            Effect::Log(format!("Theme: {}", self.portfolio.current_theme.name)),
            Effect::SaveConfig,
        ]
    }

    fn toggle_motion(&mut self) -> Vec<Effect> {
        let mut prefs = self.portfolio.animation_preferences;
        prefs.enabled = !prefs.enabled;
        self.config.animations_enabled = prefs.enabled;
        self.dispatch(Action::SetAnimationPreferences(prefs));
        let status = if prefs.enabled { "on" } else { "off" };
        vec![
            Effect::Log(format!("Motion {}", status)),
            Effect::SaveConfig,
        ]
    }

    fn handle_popup_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        let result = match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.scheduler.hide_popup_widget(),
            KeyCode::Char('x') => self.scheduler.close_popup_widget(),
            KeyCode::Enter => {
                return match self.scheduler.popup_target() {
                    Some(url) => vec![Effect::OpenUrl(url.to_string())],
                    None => Vec::new(),
                };
            }
            _ => return Vec::new(),
        };
        self.set_loading(LOADING_POPUP, false);
        match result {
            Ok(()) => Vec::new(),
            Err(e) => vec![Effect::Log(format!("Scheduler: {}", e))],
        }
    }

    /// Open the scheduling popup for an event slug.
    fn open_scheduler(&mut self, slug: &str) -> Vec<Effect> {
        let url = scheduling_url(&self.config.scheduler_url, slug);
        match self.scheduler.init_popup_widget(&url) {
            Ok(()) => {
                self.set_loading(LOADING_POPUP, true);
                vec![Effect::Log(format!("Opening scheduler ({})...", slug))]
            }
            Err(e) => vec![Effect::Log(format!("Scheduling unavailable: {}", e))],
        }
    }

    fn handle_about_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Left => self.about.prev_page(),
            KeyCode::Right => self.about.next_page(),
            KeyCode::Home => self.about.go_to_page(0),
            KeyCode::End => {
                let last = self.about.total_pages().saturating_sub(1);
                self.about.go_to_page(last);
            }
            KeyCode::Up => self.about.scroll_up(),
            KeyCode::Down => {
                let max = self.about_max_scroll();
                self.about.scroll_down(max);
            }
            KeyCode::Enter | KeyCode::Char('c') => {
                self.navigate_to(Section::Contact);
            }
            KeyCode::Char('d') => return vec![Effect::OpenUrl(CV_DOWNLOAD_URL.to_string())],
            KeyCode::Char('v') => return vec![Effect::OpenUrl(CV_PREVIEW_URL.to_string())],
            _ => {}
        }
        Vec::new()
    }

    fn handle_experience_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        let exp = &mut self.experience;
        match key.code {
            KeyCode::Up => exp.select_prev(),
            KeyCode::Down => exp.select_next(),
            KeyCode::PageUp => exp.scroll_by(-i32::from(exp.viewport_height())),
            KeyCode::PageDown => exp.scroll_by(i32::from(exp.viewport_height())),
            KeyCode::Enter | KeyCode::Char(' ') => exp.toggle_expanded(),
            KeyCode::Left => {
                let target = exp.selected.saturating_sub(1);
                exp.select_from_timeline(target);
                return vec![Effect::TrackTimeline, Effect::RefreshShadows];
            }
            KeyCode::Right => {
                let target = exp.selected + 1;
                exp.select_from_timeline(target);
                return vec![Effect::TrackTimeline, Effect::RefreshShadows];
            }
            KeyCode::Char('[') => {
                exp.timeline.scroll_left();
                return vec![Effect::RefreshShadows];
            }
            KeyCode::Char(']') => {
                exp.timeline.scroll_right();
                return vec![Effect::RefreshShadows];
            }
            _ => return Vec::new(),
        }
        vec![Effect::TrackTimeline]
    }

    fn handle_contact_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Up => self.contact.select_prev(),
            KeyCode::Down => self.contact.select_next(),
            KeyCode::Char('p') => {
                return match self.scheduler.reopen() {
                    Ok(true) => Vec::new(),
                    Ok(false) => vec![Effect::Log("No scheduler to reopen.".to_string())],
                    Err(e) => vec![Effect::Log(format!("Scheduler: {}", e))],
                };
            }
            KeyCode::Enter => {
                return match self.contact.selected_target() {
                    ContactTarget::Method(i) => {
                        let method = &CONTACT_METHODS[i];
                        match method.action {
                            ContactAction::Schedule(slug) => self.open_scheduler(slug),
                            ContactAction::Copy(value) => vec![Effect::Copy {
                                label: method.title.to_string(),
                                value: value.to_string(),
                            }],
                        }
                    }
                    ContactTarget::Scheduling(i) => self.open_scheduler(SCHEDULING_OPTIONS[i].slug),
                    ContactTarget::Social(i) => vec![Effect::OpenUrl(SOCIAL_LINKS[i].url.to_string())],
                };
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_versatilist_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        // Tripped boundary: only a reload recovers
        if self.versatilist.error.is_some() || self.versatilist.is_loading() {
            return Vec::new();
        }
        match key.code {
            KeyCode::Left => self.versatilist.prev_skill(),
            KeyCode::Right => self.versatilist.next_skill(),
            KeyCode::Char('[') => self.versatilist.tabs.scroll_left(),
            KeyCode::Char(']') => self.versatilist.tabs.scroll_right(),
            KeyCode::Up => {
                self.versatilist.scroll = self.versatilist.scroll.saturating_sub(1);
                return Vec::new();
            }
            KeyCode::Down => {
                let max = self.versatilist_max_scroll();
                self.versatilist.scroll = (self.versatilist.scroll + 1).min(max);
                return Vec::new();
            }
            _ => return Vec::new(),
        }
        vec![Effect::RefreshShadows]
    }

    fn handle_projects_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        let now = Instant::now();
        let page_before = (self.projects.category, self.projects.page);
        let mut effects = Vec::new();

        match key.code {
            KeyCode::Char('h') | KeyCode::Char('[') => {
                self.projects.prev_category(now);
                effects.push(Effect::RefreshShadows);
            }
            KeyCode::Char('l') | KeyCode::Char(']') => {
                self.projects.next_category(now);
                effects.push(Effect::RefreshShadows);
            }
            KeyCode::Left => self.projects.prev_page(now),
            KeyCode::Right => self.projects.next_page(now),
            KeyCode::Up => self.projects.select_prev(),
            KeyCode::Down => self.projects.select_next(),
            KeyCode::Char('v') => {
                self.projects.toggle_view();
                self.config.projects_view = self.projects.view;
                effects.push(Effect::SaveConfig);
            }
            KeyCode::Enter => {
                if let Some(project) = self.projects.selected_project() {
                    effects.push(match project.link() {
                        Some(link) => Effect::OpenUrl(link.to_string()),
                        None => Effect::Log(format!("{} has no live link.", project.title)),
                    });
                }
            }
            _ => {}
        }

        if (self.projects.category, self.projects.page) != page_before {
            self.set_loading(LOADING_PROJECTS, true);
        }
        effects
    }

    fn handle_mindset_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Left => self.mindset.prev_category(),
            KeyCode::Right => self.mindset.next_category(),
            KeyCode::Char('[') => self.mindset.tabs.scroll_left(),
            KeyCode::Char(']') => self.mindset.tabs.scroll_right(),
            KeyCode::Up => {
                self.mindset.select_prev_trait();
                return Vec::new();
            }
            KeyCode::Down => {
                self.mindset.select_next_trait();
                return Vec::new();
            }
            _ => return Vec::new(),
        }
        vec![Effect::RefreshShadows]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{AppConfig, ViewMode};
    use crate::scheduler::{Popup, SchedulerMessage, WidgetAssets};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        let mut app = App::new(AppConfig::default());
        app.on_resize(100, 30);
        app
    }

    #[test]
    fn test_number_keys_jump_to_sections() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('5')));
        assert_eq!(app.section(), Section::Projects);
        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.section(), Section::About);
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.section(), Section::Mindset);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.section(), Section::About);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), vec![Effect::Quit]);
        assert_eq!(app.state, AppState::Exit);

        let mut app = self::app();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key(ctrl_c), vec![Effect::Quit]);
    }

    #[test]
    fn test_theme_cycle_saves_config() {
        let mut app = app();
        let effects = app.handle_key(key(KeyCode::Char('t')));
        assert_eq!(app.config.theme, "cyber");
        assert_eq!(app.portfolio.current_theme.id, "cyber");
        assert!(effects.contains(&Effect::SaveConfig));
    }

    #[test]
    fn test_motion_toggle() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('m')));
        assert!(!app.portfolio.animation_preferences.enabled);
        assert!(!app.config.animations_enabled);
    }

    #[test]
    fn test_about_cta_goes_to_contact() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.section(), Section::Contact);
    }

    #[test]
    fn test_about_home_end_jump_between_testimonial_pages() {
        let mut app = app();
        let last = app.about.total_pages() - 1;
        app.handle_key(key(KeyCode::End));
        assert_eq!(app.about.testimonial_page, last);
        app.handle_key(key(KeyCode::End));
        assert_eq!(app.about.testimonial_page, last);
        app.handle_key(key(KeyCode::Home));
        assert_eq!(app.about.testimonial_page, 0);
    }

    #[test]
    fn test_contact_copy_email() {
        let mut app = app();
        app.navigate_to(Section::Contact);
        app.handle_key(key(KeyCode::Down));
        let effects = app.handle_key(key(KeyCode::Enter));
        assert_eq!(
            effects,
            vec![Effect::Copy {
                label: "Email".to_string(),
                value: "zuga677@gmail.com".to_string(),
            }]
        );
    }

    #[test]
    fn test_schedule_before_widget_loads_is_inert() {
        let mut app = app();
        app.navigate_to(Section::Contact);
        let effects = app.handle_key(key(KeyCode::Enter));
        assert!(!app.scheduler.is_popup_visible());
        assert!(matches!(&effects[..], [Effect::Log(msg)] if msg.contains("unavailable")));
    }

    #[test]
    fn test_schedule_opens_popup_and_esc_hides() {
        let mut app = app();
        app.scheduler.handle_message(SchedulerMessage::Loaded(WidgetAssets {
            script_bytes: 1,
            stylesheet_bytes: 1,
        }));
        app.navigate_to(Section::Contact);
        app.handle_key(key(KeyCode::Enter));
        assert!(matches!(app.scheduler.popup(), Popup::Loading { .. }));
        assert!(app.portfolio.is_loading(LOADING_POPUP));

        // Esc hides the popup instead of quitting
        assert!(app.handle_key(key(KeyCode::Esc)).is_empty());
        assert_eq!(app.state, AppState::Running);
        assert!(!app.scheduler.is_popup_visible());

        app.handle_key(key(KeyCode::Char('p')));
        assert!(app.scheduler.is_popup_visible());
    }

    #[test]
    fn test_projects_keys() {
        let mut app = app();
        app.navigate_to(Section::Projects);
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.projects.page, 2);
        assert!(app.portfolio.is_loading(LOADING_PROJECTS));

        app.handle_key(key(KeyCode::Char(']')));
        assert_eq!(app.projects.selected_category(), "web");
        assert_eq!(app.projects.page, 1);

        let effects = app.handle_key(key(KeyCode::Char('v')));
        assert_eq!(app.config.projects_view, ViewMode::List);
        assert!(effects.contains(&Effect::SaveConfig));
    }

    #[test]
    fn test_project_without_link_logs() {
        let mut app = app();
        app.navigate_to(Section::Projects);
        // First project has no link
        let effects = app.handle_key(key(KeyCode::Enter));
        assert!(matches!(&effects[..], [Effect::Log(_)]));

        app.handle_key(key(KeyCode::Down));
        let effects = app.handle_key(key(KeyCode::Enter));
        assert_eq!(
            effects,
            vec![Effect::OpenUrl("https://amarsportfolio.fly.dev/".to_string())]
        );
    }

    #[test]
    fn test_experience_keys_track_timeline() {
        let mut app = app();
        app.navigate_to(Section::Experience);
        let effects = app.handle_key(key(KeyCode::Enter));
        assert_eq!(effects, vec![Effect::TrackTimeline]);
        assert_eq!(app.experience.expanded, Some(0));

        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.experience.selected, 1);
        assert_eq!(app.experience.expanded, Some(1));
    }

    #[test]
    fn test_wheel_steps_accumulate() {
        let mut app = app();
        app.navigate_to(Section::Experience);
        let scroll = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert!(app.handle_mouse(scroll));
        assert!(app.handle_mouse(scroll));
        assert_eq!(app.apply_wheel(), vec![Effect::TrackTimeline]);
        assert_eq!(app.experience.scroll, (2 * WHEEL_LINES as u16).min(app.experience.max_scroll()));
        assert!(app.apply_wheel().is_empty());
    }
}
