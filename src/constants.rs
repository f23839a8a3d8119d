//! Core constants for the portfolio.
//!
//! Timing windows, page sizes, and the external scheduling widget endpoints.

use std::time::Duration;

/// Render tick of the main loop
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Quiet period before scroll shadows are recalculated after a resize or strip scroll
pub const SHADOW_DEBOUNCE: Duration = Duration::from_millis(50);

/// Quiet period before the experience timeline point follows the card scroll
pub const TIMELINE_DEBOUNCE: Duration = Duration::from_millis(100);

/// Minimum spacing between two handled mouse-wheel scroll steps
pub const WHEEL_THROTTLE: Duration = Duration::from_millis(40);

/// Experience highlight auto-advance period
pub const HIGHLIGHT_ROTATION: Duration = Duration::from_secs(3);

/// Contact clock refresh period
pub const CLOCK_REFRESH: Duration = Duration::from_secs(60);

/// Simulated loading time of the Versatilist section
pub const SKILLS_LOADING: Duration = Duration::from_millis(500);

/// Loading overlay shown after a projects page or category change
pub const PAGE_CHANGE_LOADING: Duration = Duration::from_millis(200);

/// How long the scheduling popup shows its loading overlay before appearing
pub const POPUP_LOADING: Duration = Duration::from_millis(1000);

/// Request timeout for fetching the scheduling widget assets
pub const WIDGET_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

// =============================================================================
// Layout
// =============================================================================

/// Testimonials shown per About page
pub const TESTIMONIALS_PER_PAGE: usize = 2;

/// Projects shown per Projects page
pub const PROJECTS_PER_PAGE: usize = 4;

/// Cells of slack before a tab strip shows its scroll shadow
pub const SCROLL_SHADOW_THRESHOLD: u16 = 2;

/// Fraction of the visible strip width moved by one scroll step
pub const TAB_SCROLL_FRACTION: f64 = 0.3;

/// Rows a section panel slides up while entering
pub const PAGE_SLIDE_ROWS: u16 = 2;

/// Rows the scheduling popup drops in from
pub const POPUP_DROP_ROWS: u16 = 3;

/// Maximum retained status log lines
pub const MAX_LOG_LINES: usize = 100;

// =============================================================================
// Scheduling widget
// =============================================================================

/// Scheduling widget script
pub const WIDGET_SCRIPT_URL: &str = "https://assets.calendly.com/assets/external/widget.js";

/// Scheduling widget stylesheet
pub const WIDGET_STYLESHEET_URL: &str = "https://assets.calendly.com/assets/external/widget.css";

/// Default scheduling page
pub const DEFAULT_SCHEDULER_URL: &str = "https://calendly.com/amar-zuga";

/// Widget brand colours passed to `init_popup_widget`
pub const WIDGET_PRIMARY_COLOR: &str = "#8B5CF6";
pub const WIDGET_SECONDARY_COLOR: &str = "#EC4899";

/// Sarajevo offset from UTC in hours, as shown by the contact clock
pub const SARAJEVO_UTC_OFFSET_HOURS: i32 = 2;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_urls() {
        assert!(WIDGET_SCRIPT_URL.starts_with("https://"));
        assert!(WIDGET_SCRIPT_URL.ends_with("widget.js"));
        assert!(WIDGET_STYLESHEET_URL.ends_with("widget.css"));
    }

    #[test]
    fn test_intervals() {
        assert_eq!(HIGHLIGHT_ROTATION.as_secs(), 3);
        assert_eq!(CLOCK_REFRESH.as_secs(), 60);
        assert!(SHADOW_DEBOUNCE < TIMELINE_DEBOUNCE);
    }
}
