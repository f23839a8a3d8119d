use std::time::Instant;

use super::{Action, App, StateOps, LOADING_SKILLS};

/// Portfolio sections, in navigation bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    About,
    Experience,
    Contact,
    Versatilist,
    Projects,
    Mindset,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::About,
        Section::Experience,
        Section::Contact,
        Section::Versatilist,
        Section::Projects,
        Section::Mindset,
    ];

    /// Section for a numeric index. Anything out of range is About.
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Section::About)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
            Section::Versatilist => "Versatilist",
            Section::Projects => "Projects",
            Section::Mindset => "Mindset",
        }
    }

    pub fn next(self) -> Self {
        Self::from_index((self.index() + 1) % Self::ALL.len())
    }

    pub fn prev(self) -> Self {
        Self::from_index((self.index() + Self::ALL.len() - 1) % Self::ALL.len())
    }
}

pub trait NavigationOps {
    fn section(&self) -> Section;
    fn navigate_to(&mut self, section: Section);
    fn navigate_to_index(&mut self, index: usize);
    fn next_section(&mut self);
    fn prev_section(&mut self);
}

impl NavigationOps for App {
    /// Section currently shown.
    fn section(&self) -> Section {
        Section::from_index(self.portfolio.active_section)
    }

    /// Switch section and start the page transition.
    fn navigate_to(&mut self, section: Section) {
        if section == self.section() {
            return;
        }
        tracing::info!("Section change: {:?} -> {:?}", self.section(), section);
        let now = Instant::now();
        self.dispatch(Action::SetActiveSection(section.index()));
        self.transition_started = Some(now);

        // Entering a section starts it over from its initial state
        self.remount(section, now);
        if section == Section::Versatilist {
            self.set_loading(LOADING_SKILLS, true);
        }
    }

    fn navigate_to_index(&mut self, index: usize) {
        self.navigate_to(Section::from_index(index));
    }

    fn next_section(&mut self) {
        self.navigate_to(self.section().next());
    }

    fn prev_section(&mut self) {
        self.navigate_to(self.section().prev());
    }
}
