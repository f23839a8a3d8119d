//! Per-section UI state.
//!
//! Every section owns only ephemeral state (selection, page, scroll) over the
//! static content in [`crate::models`].

use std::time::Instant;

use chrono::{DateTime, FixedOffset, Utc};
use thiserror::Error;

use super::config::ViewMode;
use crate::constants::{
    HIGHLIGHT_ROTATION, PAGE_CHANGE_LOADING, PROJECTS_PER_PAGE, SARAJEVO_UTC_OFFSET_HOURS,
    SKILLS_LOADING, TESTIMONIALS_PER_PAGE,
};
use crate::models::{
    category_name, category_tabs, mindset_index, AvailabilityStatus, Experience, Project,
    Testimonial, VersatileSkill, CONTACT_METHODS, DEFAULT_MINDSET_CATEGORY, EXPERIENCES,
    MINDSET_CATEGORIES, PROJECTS, SCHEDULING_OPTIONS, SOCIAL_LINKS, TESTIMONIALS,
    VERSATILE_SKILLS,
};
use crate::utils::{
    clamp_page, filter_by_category, paginate, paginate_zero_based, total_pages, wrap_text,
    TabStrip,
};

/// Gap between tabs on every strip.
const TAB_GAP: u16 = 1;

// =============================================================================
// About
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AboutState {
    /// Zero-based testimonial page.
    pub testimonial_page: usize,
    pub scroll: u16,
}

impl AboutState {
    pub fn total_pages(&self) -> usize {
        total_pages(TESTIMONIALS.len(), TESTIMONIALS_PER_PAGE)
    }

    pub fn can_prev(&self) -> bool {
        self.testimonial_page > 0
    }

    pub fn can_next(&self) -> bool {
        self.testimonial_page + 1 < self.total_pages()
    }

    pub fn prev_page(&mut self) {
        if self.can_prev() {
            self.testimonial_page -= 1;
        }
    }

    pub fn next_page(&mut self) {
        if self.can_next() {
            self.testimonial_page += 1;
        }
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.testimonial_page = page.min(self.total_pages().saturating_sub(1));
    }

    pub fn visible_testimonials(&self) -> &'static [Testimonial] {
        paginate_zero_based(TESTIMONIALS, TESTIMONIALS_PER_PAGE, self.testimonial_page)
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self, max_scroll: u16) {
        self.scroll = (self.scroll + 1).min(max_scroll);
    }
}

// =============================================================================
// Experience
// =============================================================================

/// Lines a card occupies when rendered `width` columns wide.
///
/// Header, meta line and separator always; the description wraps. Expanded
/// cards add the achievements, highlights and skills blocks, each with a
/// heading.
pub fn card_height(exp: &Experience, expanded: bool, width: u16) -> u16 {
    let description = wrap_text(exp.description, usize::from(width.max(1))).len() as u16;
    let mut height = 3 + description;
    if expanded {
        height += 1 + exp.achievements.len() as u16;
        if !exp.highlights.is_empty() {
            height += 1 + exp.highlights.len() as u16;
        }
        if !exp.skills.is_empty() {
            height += 2;
        }
    }
    height
}

/// Timeline point for a scroll progress in `0.0..=1.0`.
pub fn timeline_point(progress: f64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let point = (progress.clamp(0.0, 1.0) * len as f64).floor() as usize;
    point.min(len - 1)
}

#[derive(Debug, Clone)]
pub struct ExperienceState {
    pub selected: usize,
    pub expanded: Option<usize>,
    /// Timeline point following the card scroll position.
    pub active_timeline_point: usize,
    /// Auto-advancing highlight on the timeline strip.
    pub current_highlight: usize,
    pub scroll: u16,
    pub timeline: TabStrip,
    viewport_height: u16,
    wrap_width: u16,
    last_rotation: Instant,
}

impl ExperienceState {
    pub fn new(now: Instant) -> Self {
        let labels: Vec<&str> = EXPERIENCES.iter().map(|e| e.timeline_label()).collect();
        Self {
            selected: 0,
            expanded: None,
            active_timeline_point: 0,
            current_highlight: 0,
            scroll: 0,
            timeline: TabStrip::new(&labels, TAB_GAP),
            viewport_height: 0,
            wrap_width: 1,
            last_rotation: now,
        }
    }

    /// Record the card list viewport.
    pub fn measure(&mut self, wrap_width: u16, viewport_height: u16) {
        self.wrap_width = wrap_width.max(1);
        self.viewport_height = viewport_height;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    pub fn wrap_width(&self) -> u16 {
        self.wrap_width
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    pub fn content_height(&self) -> u16 {
        EXPERIENCES
            .iter()
            .enumerate()
            .map(|(i, e)| card_height(e, self.expanded == Some(i), self.wrap_width))
            .sum()
    }

    pub fn max_scroll(&self) -> u16 {
        self.content_height().saturating_sub(self.viewport_height)
    }

    /// First line of card `index`.
    pub fn card_top(&self, index: usize) -> u16 {
        EXPERIENCES
            .iter()
            .enumerate()
            .take(index)
            .map(|(i, e)| card_height(e, self.expanded == Some(i), self.wrap_width))
            .sum()
    }

    /// How far through the card list the viewport bottom is.
    pub fn scroll_progress(&self) -> f64 {
        let content = self.content_height();
        if content == 0 {
            return 0.0;
        }
        let seen = f64::from(self.viewport_height) + f64::from(self.scroll);
        (seen / f64::from(content)).clamp(0.0, 1.0)
    }

    /// Recompute the timeline point from the scroll position.
    /// Returns true when it moved.
    pub fn settle_timeline(&mut self) -> bool {
        let point = timeline_point(self.scroll_progress(), EXPERIENCES.len());
        let changed = point != self.active_timeline_point;
        self.active_timeline_point = point;
        changed
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll()));
        self.scroll = next as u16;
    }

    fn scroll_to_card(&mut self, index: usize) {
        self.scroll = self.card_top(index).min(self.max_scroll());
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < EXPERIENCES.len() {
            self.selected += 1;
            self.scroll_to_card(self.selected);
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.scroll_to_card(self.selected);
        }
    }

    /// Expand the selected card, or collapse it if already expanded.
    pub fn toggle_expanded(&mut self) {
        self.expanded = if self.expanded == Some(self.selected) {
            None
        } else {
            Some(self.selected)
        };
        self.scroll_to_card(self.selected);
    }

    /// Jump from the timeline strip: select, expand and centre the tab.
    pub fn select_from_timeline(&mut self, index: usize) {
        if index >= EXPERIENCES.len() {
            return;
        }
        self.selected = index;
        self.expanded = Some(index);
        self.timeline.center_on(index);
        self.scroll_to_card(index);
    }

    /// Advance the highlight when the rotation period has passed.
    pub fn rotate_highlight(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_rotation) < HIGHLIGHT_ROTATION {
            return false;
        }
        self.last_rotation = now;
        self.current_highlight = (self.current_highlight + 1) % EXPERIENCES.len();
        self.timeline.center_on(self.current_highlight);
        true
    }
}

// =============================================================================
// Contact
// =============================================================================

/// Focusable entries of the Contact section, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactTarget {
    Method(usize),
    Scheduling(usize),
    Social(usize),
}

pub fn contact_targets() -> Vec<ContactTarget> {
    (0..CONTACT_METHODS.len())
        .map(ContactTarget::Method)
        .chain((0..SCHEDULING_OPTIONS.len()).map(ContactTarget::Scheduling))
        .chain((0..SOCIAL_LINKS.len()).map(ContactTarget::Social))
        .collect()
}

/// Local and Sarajevo wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockReading {
    pub local: String,
    pub sarajevo: String,
    pub status: AvailabilityStatus,
}

impl ClockReading {
    pub fn at(now: DateTime<Utc>, local_offset: FixedOffset) -> Self {
        let sarajevo_offset = FixedOffset::east_opt(SARAJEVO_UTC_OFFSET_HOURS * 3600)
            .unwrap_or(local_offset);
        let local = now.with_timezone(&local_offset);
        let sarajevo = now.with_timezone(&sarajevo_offset);
        Self {
            local: local.format("%I:%M %p").to_string(),
            sarajevo: sarajevo.format("%I:%M %p").to_string(),
            status: AvailabilityStatus::at(sarajevo.naive_local()),
        }
    }

    pub fn now() -> Self {
        let now = chrono::Local::now();
        Self::at(now.with_timezone(&Utc), *now.offset())
    }
}

#[derive(Debug, Clone)]
pub struct ContactState {
    pub selected: usize,
    pub clock: ClockReading,
    last_clock: Instant,
}

impl ContactState {
    pub fn new(now: Instant) -> Self {
        Self {
            selected: 0,
            clock: ClockReading::now(),
            last_clock: now,
        }
    }

    pub fn selected_target(&self) -> ContactTarget {
        contact_targets()
            .get(self.selected)
            .copied()
            .unwrap_or(ContactTarget::Method(0))
    }

    pub fn select_next(&mut self) {
        let count = contact_targets().len();
        if self.selected + 1 < count {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Refresh the clock once per refresh period.
    pub fn refresh_clock(&mut self, now: Instant, period: std::time::Duration) -> bool {
        if now.saturating_duration_since(self.last_clock) < period {
            return false;
        }
        self.last_clock = now;
        self.clock = ClockReading::now();
        true
    }
}

// =============================================================================
// Projects
// =============================================================================

#[derive(Debug, Clone)]
pub struct ProjectsState {
    /// Index into [`category_tabs`].
    pub category: usize,
    /// One-based page.
    pub page: usize,
    pub view: ViewMode,
    /// Selection within the visible page.
    pub selected: usize,
    pub tabs: TabStrip,
    loading_since: Option<Instant>,
}

impl ProjectsState {
    pub fn new(view: ViewMode) -> Self {
        let labels: Vec<&str> = category_tabs().into_iter().map(category_name).collect();
        Self {
            category: 0,
            page: 1,
            view,
            selected: 0,
            tabs: TabStrip::new(&labels, TAB_GAP),
            loading_since: None,
        }
    }

    pub fn selected_category(&self) -> &'static str {
        category_tabs()
            .get(self.category)
            .copied()
            .unwrap_or(crate::utils::ALL_CATEGORIES)
    }

    pub fn filtered(&self) -> Vec<&'static Project> {
        filter_by_category(PROJECTS, self.selected_category())
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), PROJECTS_PER_PAGE)
    }

    pub fn visible(&self) -> Vec<&'static Project> {
        let filtered = self.filtered();
        paginate(&filtered, PROJECTS_PER_PAGE, self.page).to_vec()
    }

    pub fn selected_project(&self) -> Option<&'static Project> {
        self.visible().get(self.selected).copied()
    }

    /// Switch category, back to page 1.
    pub fn set_category(&mut self, index: usize, now: Instant) {
        let index = index.min(category_tabs().len() - 1);
        if index == self.category {
            return;
        }
        self.category = index;
        self.page = 1;
        self.selected = 0;
        self.tabs.center_on(index);
        self.loading_since = Some(now);
    }

    pub fn next_category(&mut self, now: Instant) {
        self.set_category(self.category + 1, now);
    }

    pub fn prev_category(&mut self, now: Instant) {
        self.set_category(self.category.saturating_sub(1), now);
    }

    pub fn can_prev_page(&self) -> bool {
        self.page > 1
    }

    pub fn can_next_page(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn go_to_page(&mut self, page: usize, now: Instant) {
        let page = clamp_page(page, self.total_pages());
        if page != self.page {
            self.page = page;
            self.selected = 0;
            self.loading_since = Some(now);
        }
    }

    pub fn next_page(&mut self, now: Instant) {
        if self.can_next_page() {
            self.go_to_page(self.page + 1, now);
        }
    }

    pub fn prev_page(&mut self, now: Instant) {
        if self.can_prev_page() {
            self.go_to_page(self.page - 1, now);
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.visible().len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn toggle_view(&mut self) {
        self.view = self.view.toggled();
    }

    pub fn is_loading(&self) -> bool {
        self.loading_since.is_some()
    }

    /// Clear the page-change overlay once it has shown long enough.
    pub fn finish_loading(&mut self, now: Instant) -> bool {
        match self.loading_since {
            Some(since) if now.saturating_duration_since(since) >= PAGE_CHANGE_LOADING => {
                self.loading_since = None;
                true
            }
            _ => false,
        }
    }
}

// =============================================================================
// Mindset
// =============================================================================

#[derive(Debug, Clone)]
pub struct MindsetState {
    pub category: usize,
    pub selected_trait: usize,
    pub tabs: TabStrip,
}

impl Default for MindsetState {
    fn default() -> Self {
        let labels: Vec<&str> = MINDSET_CATEGORIES.iter().map(|c| c.title).collect();
        Self {
            category: mindset_index(DEFAULT_MINDSET_CATEGORY).unwrap_or(0),
            selected_trait: 0,
            tabs: TabStrip::new(&labels, TAB_GAP),
        }
    }
}

impl MindsetState {
    pub fn set_category(&mut self, index: usize) {
        let index = index.min(MINDSET_CATEGORIES.len() - 1);
        self.category = index;
        self.selected_trait = 0;
        self.tabs.center_on(index);
    }

    pub fn next_category(&mut self) {
        self.set_category(self.category + 1);
    }

    pub fn prev_category(&mut self) {
        self.set_category(self.category.saturating_sub(1));
    }

    pub fn select_next_trait(&mut self) {
        let count = MINDSET_CATEGORIES[self.category].traits.len();
        if self.selected_trait + 1 < count {
            self.selected_trait += 1;
        }
    }

    pub fn select_prev_trait(&mut self) {
        self.selected_trait = self.selected_trait.saturating_sub(1);
    }
}

// =============================================================================
// Versatilist
// =============================================================================

/// Failure while building a section for display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionError {
    #[error("skill {0} does not exist")]
    MissingSkill(usize),
    #[error("skill {0:?} has no {1}")]
    IncompleteSkill(&'static str, &'static str),
}

/// Look up a skill and check it has everything its card shows.
pub fn skill_for_display(index: usize) -> Result<&'static VersatileSkill, SectionError> {
    let skill = VERSATILE_SKILLS
        .get(index)
        .ok_or(SectionError::MissingSkill(index))?;
    if skill.primary_skills.is_empty() {
        return Err(SectionError::IncompleteSkill(skill.title, "primary skills"));
    }
    if skill.skill_details.is_empty() {
        return Err(SectionError::IncompleteSkill(skill.title, "skill details"));
    }
    Ok(skill)
}

#[derive(Debug, Clone)]
pub struct VersatilistState {
    pub active: usize,
    pub scroll: u16,
    pub tabs: TabStrip,
    /// Set once rendering fails. Cleared only by a reload.
    pub error: Option<SectionError>,
    loading_since: Option<Instant>,
}

impl VersatilistState {
    pub fn new(now: Instant) -> Self {
        let labels: Vec<&str> = VERSATILE_SKILLS.iter().map(|s| s.title).collect();
        Self {
            active: 0,
            scroll: 0,
            tabs: TabStrip::new(&labels, TAB_GAP),
            error: None,
            loading_since: Some(now),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading_since.is_some()
    }

    /// End the loading skeleton once it has shown long enough.
    pub fn finish_loading(&mut self, now: Instant) -> bool {
        match self.loading_since {
            Some(since) if now.saturating_duration_since(since) >= SKILLS_LOADING => {
                self.loading_since = None;
                true
            }
            _ => false,
        }
    }

    pub fn set_active(&mut self, index: usize) {
        self.active = index.min(VERSATILE_SKILLS.len() - 1);
        self.scroll = 0;
        self.tabs.center_on(self.active);
    }

    pub fn next_skill(&mut self) {
        self.set_active(self.active + 1);
    }

    pub fn prev_skill(&mut self) {
        self.set_active(self.active.saturating_sub(1));
    }

    /// Latch a render failure.
    pub fn trip(&mut self, error: SectionError) {
        if self.error.is_none() {
            tracing::error!("Versatilist section failed: {}", error);
            self.error = Some(error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CLOCK_REFRESH;
    use chrono::TimeZone;
    use std::time::Duration;

    #[test]
    fn test_testimonial_pages_clamp() {
        let mut about = AboutState::default();
        assert_eq!(about.total_pages(), 2);
        assert!(!about.can_prev());
        about.prev_page();
        assert_eq!(about.testimonial_page, 0);

        about.next_page();
        about.next_page();
        assert_eq!(about.testimonial_page, 1);
        assert!(!about.can_next());
        assert_eq!(about.visible_testimonials()[0].name, "David Williams");

        about.go_to_page(9);
        assert_eq!(about.testimonial_page, 1);
    }

    #[test]
    fn test_timeline_point() {
        assert_eq!(timeline_point(0.0, 4), 0);
        assert_eq!(timeline_point(0.49, 4), 1);
        assert_eq!(timeline_point(0.5, 4), 2);
        assert_eq!(timeline_point(1.0, 4), 3);
        assert_eq!(timeline_point(7.0, 4), 3);
        assert_eq!(timeline_point(0.5, 0), 0);
    }

    #[test]
    fn test_experience_scroll_moves_timeline() {
        let mut exp = ExperienceState::new(Instant::now());
        exp.measure(60, 10);
        assert!(exp.max_scroll() > 0);
        exp.settle_timeline();
        let start = exp.active_timeline_point;

        exp.scroll_by(i32::from(exp.max_scroll()));
        assert!(exp.settle_timeline());
        assert_eq!(exp.active_timeline_point, EXPERIENCES.len() - 1);
        assert!(exp.active_timeline_point > start);
    }

    #[test]
    fn test_experience_expand_toggle() {
        let mut exp = ExperienceState::new(Instant::now());
        exp.measure(60, 10);
        let collapsed = exp.content_height();

        exp.toggle_expanded();
        assert_eq!(exp.expanded, Some(0));
        assert!(exp.content_height() > collapsed);

        exp.toggle_expanded();
        assert_eq!(exp.expanded, None);

        exp.select_from_timeline(2);
        assert_eq!(exp.selected, 2);
        assert_eq!(exp.expanded, Some(2));
        assert_eq!(exp.scroll, exp.card_top(2).min(exp.max_scroll()));
    }

    #[test]
    fn test_highlight_rotation() {
        let start = Instant::now();
        let mut exp = ExperienceState::new(start);
        assert!(!exp.rotate_highlight(start + Duration::from_secs(1)));
        assert!(exp.rotate_highlight(start + HIGHLIGHT_ROTATION));
        assert_eq!(exp.current_highlight, 1);

        let mut t = start + HIGHLIGHT_ROTATION;
        for _ in 0..EXPERIENCES.len() - 1 {
            t += HIGHLIGHT_ROTATION;
            assert!(exp.rotate_highlight(t));
        }
        assert_eq!(exp.current_highlight, 0);
    }

    #[test]
    fn test_clock_reading() {
        let utc = Utc.with_ymd_and_hms(2025, 1, 6, 8, 5, 0).unwrap();
        let new_york = FixedOffset::west_opt(5 * 3600).unwrap();
        let reading = ClockReading::at(utc, new_york);
        assert_eq!(reading.local, "03:05 AM");
        assert_eq!(reading.sarajevo, "10:05 AM");
        assert_eq!(reading.status, AvailabilityStatus::Available);
    }

    #[test]
    fn test_clock_refresh_period() {
        let start = Instant::now();
        let mut contact = ContactState::new(start);
        assert!(!contact.refresh_clock(start + Duration::from_secs(59), CLOCK_REFRESH));
        assert!(contact.refresh_clock(start + CLOCK_REFRESH, CLOCK_REFRESH));
    }

    #[test]
    fn test_contact_targets_order() {
        let targets = contact_targets();
        assert_eq!(targets[0], ContactTarget::Method(0));
        assert_eq!(targets.len(), 3 + 2 + 4);
        assert_eq!(targets.last(), Some(&ContactTarget::Social(3)));

        let mut contact = ContactState::new(Instant::now());
        for _ in 0..20 {
            contact.select_next();
        }
        assert_eq!(contact.selected_target(), ContactTarget::Social(3));
    }

    #[test]
    fn test_projects_category_resets_page() {
        let now = Instant::now();
        let mut projects = ProjectsState::new(ViewMode::Grid);
        assert_eq!(projects.total_pages(), 2);
        projects.next_page(now);
        assert_eq!(projects.page, 2);
        assert!(projects.is_loading());
        projects.next_page(now);
        assert_eq!(projects.page, 2);

        // design
        projects.set_category(2, now);
        assert_eq!(projects.selected_category(), "design");
        assert_eq!(projects.page, 1);
        assert_eq!(projects.visible().len(), 4);

        // support has a single project
        projects.set_category(3, now);
        assert_eq!(projects.total_pages(), 1);
        assert!(!projects.can_next_page());
        assert!(!projects.can_prev_page());
    }

    #[test]
    fn test_projects_loading_clears() {
        let now = Instant::now();
        let mut projects = ProjectsState::new(ViewMode::List);
        projects.next_page(now);
        assert!(!projects.finish_loading(now));
        assert!(projects.finish_loading(now + PAGE_CHANGE_LOADING));
        assert!(!projects.is_loading());
    }

    #[test]
    fn test_projects_selection_bounded_by_page() {
        let mut projects = ProjectsState::new(ViewMode::Grid);
        for _ in 0..10 {
            projects.select_next();
        }
        assert_eq!(projects.selected, PROJECTS_PER_PAGE - 1);
        assert!(projects.selected_project().is_some());
    }

    #[test]
    fn test_mindset_defaults_and_bounds() {
        let mut mindset = MindsetState::default();
        assert_eq!(MINDSET_CATEGORIES[mindset.category].id, "versatility");
        mindset.prev_category();
        assert_eq!(mindset.category, 0);
        for _ in 0..20 {
            mindset.next_category();
        }
        assert_eq!(mindset.category, MINDSET_CATEGORIES.len() - 1);
        mindset.select_next_trait();
        mindset.select_next_trait();
        mindset.select_next_trait();
        assert_eq!(mindset.selected_trait, 2);
    }

    #[test]
    fn test_versatilist_loading_and_error_latch() {
        let start = Instant::now();
        let mut vers = VersatilistState::new(start);
        assert!(vers.is_loading());
        assert!(!vers.finish_loading(start + Duration::from_millis(100)));
        assert!(vers.finish_loading(start + SKILLS_LOADING));

        vers.trip(SectionError::MissingSkill(9));
        vers.trip(SectionError::MissingSkill(1));
        assert_eq!(vers.error, Some(SectionError::MissingSkill(9)));
    }

    #[test]
    fn test_skill_for_display() {
        assert!(skill_for_display(0).is_ok());
        assert_eq!(
            skill_for_display(VERSATILE_SKILLS.len()),
            Err(SectionError::MissingSkill(VERSATILE_SKILLS.len()))
        );
    }
}
