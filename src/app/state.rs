use std::collections::HashMap;

use super::App;
use crate::theme::{theme_by_id, AnimationPreferences, Theme};

/// Application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Running,
    Exit,
}

/// Loading flag for the Versatilist skeleton.
pub const LOADING_SKILLS: &str = "skills";
/// Loading flag for the scheduling popup overlay.
pub const LOADING_POPUP: &str = "popup";
/// Loading flag for a Projects page or category change.
pub const LOADING_PROJECTS: &str = "projects";

/// Shared presentation state.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioState {
    /// Theme id as requested, which may be unknown.
    pub theme: String,
    pub loading: HashMap<String, bool>,
    pub animation_preferences: AnimationPreferences,
    pub active_section: usize,
    /// Resolved theme, the first theme when `theme` is unknown.
    pub current_theme: &'static Theme,
}

impl Default for PortfolioState {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            loading: HashMap::new(),
            animation_preferences: AnimationPreferences::default(),
            active_section: 0,
            current_theme: theme_by_id(""),
        }
    }
}

impl PortfolioState {
    pub fn is_loading(&self, key: &str) -> bool {
        self.loading.get(key).copied().unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetTheme(String),
    SetLoading { key: String, value: bool },
    SetAnimationPreferences(AnimationPreferences),
    SetActiveSection(usize),
}

/// Apply `action` to `state`.
pub fn reduce(mut state: PortfolioState, action: Action) -> PortfolioState {
    match action {
        Action::SetTheme(id) => {
            state.current_theme = theme_by_id(&id);
            state.theme = id;
        }
        Action::SetLoading { key, value } => {
            state.loading.insert(key, value);
        }
        Action::SetAnimationPreferences(prefs) => {
            state.animation_preferences = prefs;
        }
        Action::SetActiveSection(index) => {
            state.active_section = index;
        }
    }
    state
}

pub trait StateOps {
    fn dispatch(&mut self, action: Action);
    fn set_loading(&mut self, key: &str, value: bool);
    fn change_state(&mut self, new_state: AppState);
}

impl StateOps for App {
    /// Run an action through the reducer.
    fn dispatch(&mut self, action: Action) {
        tracing::debug!("Dispatch: {:?}", action);
        let state = std::mem::take(&mut self.portfolio);
        self.portfolio = reduce(state, action);
    }

    fn set_loading(&mut self, key: &str, value: bool) {
        self.dispatch(Action::SetLoading {
            key: key.to_string(),
            value,
        });
    }

    /// Change the application state.
    fn change_state(&mut self, new_state: AppState) {
        tracing::info!("State change: {:?} -> {:?}", self.state, new_state);
        self.state = new_state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_falls_back_to_first() {
        let state = reduce(PortfolioState::default(), Action::SetTheme("neon".into()));
        assert_eq!(state.theme, "neon");
        assert_eq!(state.current_theme.id, "purple");

        let state = reduce(state, Action::SetTheme("cyber".into()));
        assert_eq!(state.current_theme.name, "Cyber Blue");
    }

    #[test]
    fn test_loading_flags_merge_per_key() {
        let state = reduce(
            PortfolioState::default(),
            Action::SetLoading {
                key: LOADING_SKILLS.into(),
                value: true,
            },
        );
        let state = reduce(
            state,
            Action::SetLoading {
                key: LOADING_POPUP.into(),
                value: true,
            },
        );
        let state = reduce(
            state,
            Action::SetLoading {
                key: LOADING_SKILLS.into(),
                value: false,
            },
        );
        assert!(!state.is_loading(LOADING_SKILLS));
        assert!(state.is_loading(LOADING_POPUP));
        assert!(!state.is_loading("unknown"));
    }

    #[test]
    fn test_other_fields_untouched() {
        let before = PortfolioState::default();
        let after = reduce(before.clone(), Action::SetActiveSection(4));
        assert_eq!(after.active_section, 4);
        assert_eq!(after.theme, before.theme);
        assert_eq!(after.animation_preferences, before.animation_preferences);

        let prefs = AnimationPreferences {
            enabled: false,
            ..Default::default()
        };
        let after = reduce(after, Action::SetAnimationPreferences(prefs));
        assert!(!after.animation_preferences.enabled);
        assert_eq!(after.active_section, 4);
    }
}
