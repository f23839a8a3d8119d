//! Application state and main logic loop.
//!
//! Owns every section's UI state, the shared portfolio state and the
//! scheduling widget handle. The event loop in `main` drives it through
//! [`App::tick`], [`InputOps`] and [`App::handle_ui_event`].

mod config;
mod input;
mod navigation;
mod sections;
mod state;
pub use config::*;
pub use input::*;
pub use navigation::*;
pub use sections::*;
pub use state::*;

use std::time::{Duration, Instant};

use crate::assets::{ImageResolver, ResolvedImage};
use crate::clipboard::CopyOutcome;
use crate::constants::{CLOCK_REFRESH, PAGE_SLIDE_ROWS, POPUP_DROP_ROWS, TICK_INTERVAL};
use crate::models::{DEFAULT_AVATAR, PROJECTS, PROJECT_FALLBACK_IMAGE, TESTIMONIALS};
use crate::scheduler::{Popup, SchedulerWidget};
use crate::theme::AnimationPreferences;
use crate::ui::starfield::Starfield;

/// How long a copy confirmation stays in the status bar.
const TOAST_DURATION: Duration = Duration::from_secs(2);

/// Inner size of the section content area, in cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

/// Events posted back to the loop by timers and background tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Debounced: tab strips stopped moving.
    ShadowsSettled,
    /// Debounced: experience cards stopped scrolling.
    TimelineSettled,
    /// Throttled mouse-wheel step.
    WheelStep,
    Copied(CopyOutcome),
}

/// The main application.
pub struct App {
    pub state: AppState,
    pub portfolio: PortfolioState,
    pub config: AppConfig,
    pub scheduler: SchedulerWidget,
    pub viewport: Viewport,
    /// Start of the current section transition.
    pub transition_started: Option<Instant>,
    /// Short confirmation shown in the status bar.
    pub toast: Option<(String, Instant)>,

    pub about: AboutState,
    pub experience: ExperienceState,
    pub contact: ContactState,
    pub versatilist: VersatilistState,
    pub projects: ProjectsState,
    pub mindset: MindsetState,
    pub starfield: Starfield,

    images: ImageResolver,
    /// Resolved image of every project, in `PROJECTS` order.
    pub project_images: Vec<ResolvedImage>,
    /// Resolved avatar of every testimonial, in `TESTIMONIALS` order.
    pub avatars: Vec<ResolvedImage>,

    /// Wheel notches queued for the next throttled step.
    wheel_delta: i32,
}

impl App {
    /// Create a new application instance from the loaded configuration.
    pub fn new(config: AppConfig) -> Self {
        let now = Instant::now();
        let mut app = Self {
            state: AppState::Running,
            portfolio: PortfolioState::default(),
            images: ImageResolver::new(config.assets_dir.clone()),
            projects: ProjectsState::new(config.projects_view),
            config,
            scheduler: SchedulerWidget::new(),
            viewport: Viewport::default(),
            transition_started: None,
            toast: None,
            about: AboutState::default(),
            experience: ExperienceState::new(now),
            contact: ContactState::new(now),
            versatilist: VersatilistState::new(now),
            mindset: MindsetState::default(),
            starfield: Starfield::default(),
            project_images: Vec::new(),
            avatars: Vec::new(),
            wheel_delta: 0,
        };

        app.dispatch(Action::SetTheme(app.config.theme.clone()));
        app.dispatch(Action::SetAnimationPreferences(AnimationPreferences {
            enabled: app.config.animations_enabled,
            ..AnimationPreferences::default()
        }));
        app.resolve_images();
        app
    }

    fn resolve_images(&mut self) {
        self.project_images = PROJECTS
            .iter()
            .map(|p| self.images.resolve_image(p.image, PROJECT_FALLBACK_IMAGE))
            .collect();
        self.avatars = TESTIMONIALS
            .iter()
            .map(|t| self.images.resolve_image(t.image, DEFAULT_AVATAR))
            .collect();

        let failed = self.images.failed_count();
        if failed > 0 {
            tracing::warn!(
                "{} image(s) missing under {}, using fallbacks",
                failed,
                self.images.root().display()
            );
        }
    }

    pub fn motion_enabled(&self) -> bool {
        self.portfolio.animation_preferences.enabled
    }

    /// Progress of the current section transition, `1.0` once finished.
    pub fn transition_progress(&self, now: Instant) -> f64 {
        let prefs = &self.portfolio.animation_preferences;
        match self.transition_started {
            Some(started) => {
                prefs.progress(now.saturating_duration_since(started), prefs.transition.page)
            }
            None => 1.0,
        }
    }

    /// Rows the entering section panel is still below its resting place.
    pub fn page_offset(&self, now: Instant) -> u16 {
        let prefs = &self.portfolio.animation_preferences;
        match self.transition_started {
            Some(started) => prefs.remaining(
                prefs.spring.medium,
                now.saturating_duration_since(started),
                PAGE_SLIDE_ROWS,
            ),
            None => 0,
        }
    }

    pub fn toast_text(&self) -> Option<&str> {
        self.toast.as_ref().map(|(text, _)| text.as_str())
    }

    /// Part of the toast revealed so far; it types in on the light spring.
    pub fn toast_reveal(&self, now: Instant) -> Option<String> {
        let (text, since) = self.toast.as_ref()?;
        let prefs = &self.portfolio.animation_preferences;
        let len = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let hidden = prefs.remaining(
            prefs.spring.light,
            now.saturating_duration_since(*since),
            len,
        );
        Some(text.chars().take(usize::from(len - hidden)).collect())
    }

    /// Rows the scheduling popup still has to drop, on the heavy spring.
    pub fn popup_drop(&self, now: Instant) -> u16 {
        let prefs = &self.portfolio.animation_preferences;
        match self.scheduler.popup() {
            Popup::Loading { since, .. } => prefs.remaining(
                prefs.spring.heavy,
                now.saturating_duration_since(*since),
                POPUP_DROP_ROWS,
            ),
            _ => 0,
        }
    }

    /// Reset every section to its initial state and return to About.
    ///
    /// The loaded scheduling widget and the configuration survive.
    pub fn reload(&mut self) {
        tracing::info!("Reloading all sections");
        let now = Instant::now();

        if self.scheduler.is_popup_visible() {
            if let Err(e) = self.scheduler.close_popup_widget() {
                tracing::warn!("Failed to close scheduling popup: {}", e);
            }
        }

        for section in Section::ALL {
            self.remount(section, now);
        }
        self.versatilist.error = None;
        self.wheel_delta = 0;
        self.toast = None;

        for key in [LOADING_SKILLS, LOADING_POPUP, LOADING_PROJECTS] {
            self.set_loading(key, false);
        }
        self.dispatch(Action::SetActiveSection(Section::About.index()));
        self.transition_started = Some(now);

        self.images.clear();
        self.resolve_images();
        self.apply_viewport();
    }

    /// Put `section` back into its initial state, as shown on first entry.
    ///
    /// A latched Versatilist error survives; only [`App::reload`] clears it.
    pub(crate) fn remount(&mut self, section: Section, now: Instant) {
        match section {
            Section::About => self.about = AboutState::default(),
            Section::Experience => self.experience = ExperienceState::new(now),
            Section::Contact => self.contact = ContactState::new(now),
            Section::Versatilist => {
                let error = self.versatilist.error.take();
                self.versatilist = VersatilistState::new(now);
                self.versatilist.error = error;
            }
            Section::Projects => {
                self.projects = ProjectsState::new(self.config.projects_view);
                self.set_loading(LOADING_PROJECTS, false);
            }
            Section::Mindset => self.mindset = MindsetState::default(),
        }
        self.apply_viewport();
    }

    /// Record a new terminal size and re-measure everything laid out from it.
    pub fn on_resize(&mut self, width: u16, height: u16) -> Vec<Effect> {
        self.viewport = crate::ui::content_size(width, height);
        self.apply_viewport();
        vec![Effect::RefreshShadows, Effect::TrackTimeline]
    }

    fn apply_viewport(&mut self) {
        let strip = crate::ui::strip_width(self.viewport);
        for tabs in [
            &mut self.experience.timeline,
            &mut self.projects.tabs,
            &mut self.mindset.tabs,
            &mut self.versatilist.tabs,
        ] {
            tabs.measure(strip);
        }

        let (wrap_width, card_height) = crate::ui::experience::card_area(self.viewport);
        self.experience.measure(wrap_width, card_height);
        self.about.scroll = self.about.scroll.min(self.about_max_scroll());
        self.versatilist.scroll = self.versatilist.scroll.min(self.versatilist_max_scroll());
    }

    pub fn about_max_scroll(&self) -> u16 {
        crate::ui::about::max_scroll(self.about.testimonial_page, self.viewport)
    }

    pub fn versatilist_max_scroll(&self) -> u16 {
        crate::ui::versatilist::max_scroll(self.versatilist.active, self.viewport)
    }

    fn refresh_shadows(&mut self) {
        self.experience.timeline.refresh_shadows();
        self.projects.tabs.refresh_shadows();
        self.mindset.tabs.refresh_shadows();
        self.versatilist.tabs.refresh_shadows();
    }

    /// Advance timers. Called on every render tick.
    pub fn tick(&mut self, now: Instant) -> Vec<Effect> {
        let mut effects = Vec::new();

        if self.scheduler.tick(now) {
            self.set_loading(LOADING_POPUP, false);
        }
        if self.projects.finish_loading(now) {
            self.set_loading(LOADING_PROJECTS, false);
        }
        if self.versatilist.finish_loading(now) {
            self.set_loading(LOADING_SKILLS, false);
        }

        if self.motion_enabled() {
            self.starfield.advance(TICK_INTERVAL);
        }
        match self.section() {
            Section::Experience => {
                if self.experience.rotate_highlight(now) {
                    effects.push(Effect::RefreshShadows);
                }
            }
            Section::Contact => {
                self.contact.refresh_clock(now, CLOCK_REFRESH);
            }
            _ => {}
        }

        if self.transition_progress(now) >= 1.0 {
            self.transition_started = None;
        }
        if let Some((_, since)) = &self.toast {
            if now.saturating_duration_since(*since) >= TOAST_DURATION {
                self.toast = None;
            }
        }
        effects
    }

    /// Apply an event posted by a timer or background task.
    pub fn handle_ui_event(&mut self, event: UiEvent) -> Vec<Effect> {
        match event {
            UiEvent::ShadowsSettled => {
                self.refresh_shadows();
                Vec::new()
            }
            UiEvent::TimelineSettled => {
                if self.experience.settle_timeline() {
                    tracing::debug!(
                        "Timeline point -> {}",
                        self.experience.active_timeline_point
                    );
                }
                Vec::new()
            }
            UiEvent::WheelStep => self.apply_wheel(),
            UiEvent::Copied(CopyOutcome::Copied { label }) => {
                self.toast = Some((format!("{} copied!", label), Instant::now()));
                vec![Effect::Log(format!("{} copied to clipboard.", label))]
            }
            UiEvent::Copied(CopyOutcome::Failed { label, reason }) => {
                vec![Effect::Log(format!("Failed to copy {}: {}", label, reason))]
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{PAGE_CHANGE_LOADING, SKILLS_LOADING};

    fn app() -> App {
        let mut app = App::new(AppConfig {
            theme: "ember".to_string(),
            animations_enabled: false,
            ..AppConfig::default()
        });
        app.on_resize(120, 40);
        app
    }

    #[test]
    fn test_new_applies_config() {
        let app = app();
        assert_eq!(app.state, AppState::Running);
        assert_eq!(app.portfolio.current_theme.id, "ember");
        assert!(!app.motion_enabled());
        assert_eq!(app.section(), Section::About);
        assert_eq!(app.project_images.len(), PROJECTS.len());
        assert_eq!(app.avatars.len(), TESTIMONIALS.len());
    }

    #[test]
    fn test_missing_images_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(AppConfig {
            assets_dir: dir.path().to_path_buf(),
            ..AppConfig::default()
        });
        assert!(app.project_images.iter().all(|img| img.is_fallback));
        assert_eq!(
            app.project_images[0].path,
            dir.path().join(PROJECT_FALLBACK_IMAGE)
        );
    }

    #[test]
    fn test_app_state_change() {
        let mut app = app();
        app.change_state(AppState::Exit);
        assert_eq!(app.state, AppState::Exit);
    }

    #[test]
    fn test_on_resize_measures_strips() {
        let mut app = app();
        let effects = app.on_resize(60, 30);
        assert!(effects.contains(&Effect::RefreshShadows));
        assert_eq!(
            app.mindset.tabs.client_width(),
            crate::ui::strip_width(app.viewport)
        );
        assert!(app.experience.wrap_width() > 0);
    }

    #[test]
    fn test_navigation_to_versatilist_shows_skeleton() {
        let mut app = app();
        app.navigate_to(Section::Versatilist);
        let now = Instant::now();
        assert!(app.portfolio.is_loading(LOADING_SKILLS));
        assert!(app.versatilist.is_loading());

        app.tick(now + SKILLS_LOADING);
        assert!(!app.portfolio.is_loading(LOADING_SKILLS));
        assert!(!app.versatilist.is_loading());
    }

    #[test]
    fn test_sections_start_over_when_entered_again() {
        let mut app = app();
        let now = Instant::now();
        app.about.next_page();

        app.navigate_to(Section::Projects);
        app.projects.next_category(now);
        app.projects.toggle_view();
        app.navigate_to(Section::Versatilist);
        app.tick(Instant::now() + SKILLS_LOADING);
        app.versatilist.next_skill();
        app.versatilist.next_skill();
        app.navigate_to(Section::Mindset);
        app.mindset.next_category();

        app.navigate_to(Section::About);
        assert_eq!(app.about.testimonial_page, 0);
        app.navigate_to(Section::Projects);
        assert_eq!(app.projects.selected_category(), crate::utils::ALL_CATEGORIES);
        assert_eq!(app.projects.page, 1);
        assert_eq!(app.projects.view, app.config.projects_view);
        app.navigate_to(Section::Mindset);
        assert_eq!(
            crate::models::MINDSET_CATEGORIES[app.mindset.category].id,
            "versatility"
        );

        // The skeleton replays over the first skill, not the one left behind
        app.navigate_to(Section::Versatilist);
        assert_eq!(app.versatilist.active, 0);
        assert_eq!(app.versatilist.scroll, 0);
        assert!(app.versatilist.is_loading());
        assert!(app.portfolio.is_loading(LOADING_SKILLS));
    }

    #[test]
    fn test_latched_error_survives_reentry() {
        let mut app = app();
        app.navigate_to(Section::Versatilist);
        app.versatilist.trip(SectionError::MissingSkill(7));
        app.navigate_to(Section::About);
        app.navigate_to(Section::Versatilist);
        assert_eq!(app.versatilist.error, Some(SectionError::MissingSkill(7)));
    }

    #[test]
    fn test_starfield_drifts_behind_every_section() {
        let mut app = app();
        app.dispatch(Action::SetAnimationPreferences(AnimationPreferences::default()));
        for section in [Section::Mindset, Section::Contact, Section::Projects] {
            app.navigate_to(section);
            let before = app.starfield.clone();
            app.tick(Instant::now());
            assert_ne!(app.starfield, before, "{:?}", section);
        }

        // Motion off freezes it
        app.dispatch(Action::SetAnimationPreferences(AnimationPreferences {
            enabled: false,
            ..AnimationPreferences::default()
        }));
        let before = app.starfield.clone();
        app.tick(Instant::now());
        assert_eq!(app.starfield, before);
    }

    #[test]
    fn test_spring_motion_settles() {
        let mut app = app();
        app.dispatch(Action::SetAnimationPreferences(AnimationPreferences::default()));
        let page = app.portfolio.animation_preferences.transition.page;

        app.navigate_to(Section::Mindset);
        let started = app.transition_started.unwrap();
        assert_eq!(app.page_offset(started), PAGE_SLIDE_ROWS);
        assert_eq!(app.page_offset(started + page), 0);

        app.handle_ui_event(UiEvent::Copied(CopyOutcome::Copied {
            label: "Email".to_string(),
        }));
        let since = app.toast.as_ref().map(|(_, t)| *t).unwrap();
        assert_eq!(app.toast_reveal(since).as_deref(), Some(""));
        assert_eq!(
            app.toast_reveal(since + Duration::from_secs(1)).as_deref(),
            Some("Email copied!")
        );

        app.scheduler.handle_message(crate::scheduler::SchedulerMessage::Loaded(
            crate::scheduler::WidgetAssets {
                script_bytes: 1,
                stylesheet_bytes: 1,
            },
        ));
        app.navigate_to(Section::Contact);
        app.handle_key(crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Enter,
            crossterm::event::KeyModifiers::NONE,
        ));
        let Popup::Loading { since, .. } = app.scheduler.popup().clone() else {
            panic!("popup should be loading");
        };
        assert_eq!(app.popup_drop(since), POPUP_DROP_ROWS);
        assert_eq!(app.popup_drop(since + Duration::from_secs(1)), 0);
    }

    #[test]
    fn test_motion_off_skips_spring_offsets() {
        let mut app = app();
        app.navigate_to(Section::Projects);
        let started = app.transition_started.unwrap();
        assert_eq!(app.page_offset(started), 0);
    }

    #[test]
    fn test_tick_clears_project_loading() {
        let mut app = app();
        let now = Instant::now();
        app.navigate_to(Section::Projects);
        app.projects.next_page(now);
        app.set_loading(LOADING_PROJECTS, true);

        app.tick(now + PAGE_CHANGE_LOADING);
        assert!(!app.portfolio.is_loading(LOADING_PROJECTS));
    }

    #[test]
    fn test_transition_finishes_immediately_without_motion() {
        let mut app = app();
        app.navigate_to(Section::Mindset);
        assert!(app.transition_started.is_some());
        assert_eq!(app.transition_progress(Instant::now()), 1.0);
        app.tick(Instant::now());
        assert!(app.transition_started.is_none());
    }

    #[test]
    fn test_reload_resets_sections() {
        let mut app = app();
        let now = Instant::now();
        app.navigate_to(Section::Projects);
        app.projects.next_page(now);
        app.about.next_page();
        app.mindset.next_category();
        app.versatilist.trip(SectionError::MissingSkill(42));

        app.reload();

        assert_eq!(app.section(), Section::About);
        assert_eq!(app.projects.page, 1);
        assert_eq!(app.about.testimonial_page, 0);
        assert_eq!(
            crate::models::MINDSET_CATEGORIES[app.mindset.category].id,
            "versatility"
        );
        assert!(app.versatilist.error.is_none());
        assert!(!app.portfolio.is_loading(LOADING_PROJECTS));
    }

    #[test]
    fn test_copy_outcome_sets_toast() {
        let mut app = app();
        let effects = app.handle_ui_event(UiEvent::Copied(CopyOutcome::Copied {
            label: "Email".to_string(),
        }));
        assert_eq!(app.toast_text(), Some("Email copied!"));
        assert_eq!(effects.len(), 1);

        let since = app.toast.as_ref().map(|(_, t)| *t).unwrap();
        app.tick(since + TOAST_DURATION);
        assert!(app.toast.is_none());

        let effects = app.handle_ui_event(UiEvent::Copied(CopyOutcome::Failed {
            label: "Email".to_string(),
            reason: "no display".to_string(),
        }));
        assert!(matches!(&effects[..], [Effect::Log(msg)] if msg.contains("no display")));
    }

    #[test]
    fn test_timeline_settles_after_scroll() {
        let mut app = app();
        app.navigate_to(Section::Experience);
        let max = app.experience.max_scroll();
        app.experience.scroll_by(i32::from(max));
        app.handle_ui_event(UiEvent::TimelineSettled);
        if max > 0 {
            assert_eq!(
                app.experience.active_timeline_point,
                crate::models::EXPERIENCES.len() - 1
            );
        }
    }

    #[test]
    fn test_shadows_settle() {
        let mut app = app();
        app.on_resize(40, 30);
        app.navigate_to(Section::Mindset);
        app.mindset.set_category(6);
        app.handle_ui_event(UiEvent::ShadowsSettled);
        assert!(app.mindset.tabs.shadows.left);
        assert!(!app.mindset.tabs.shadows.right);
    }
}
