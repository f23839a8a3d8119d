//! Terminal UI module.
//!
//! Provides the ratatui-based user interface.

pub mod about;
pub mod contact;
pub mod dashboard;
pub mod experience;
pub mod mindset;
pub mod projects;
pub mod starfield;
pub mod versatilist;
pub mod widgets;

pub use dashboard::*;

use crate::app::Viewport;

/// Navigation bar height
pub const NAV_HEIGHT: u16 = 3;
/// Log window height
pub const LOG_HEIGHT: u16 = 6;
/// Status bar height
pub const STATUS_HEIGHT: u16 = 3;

/// Inner size of the section panel for a terminal of `width` x `height`.
pub fn content_size(width: u16, height: u16) -> Viewport {
    Viewport {
        width: width.saturating_sub(2),
        height: height.saturating_sub(NAV_HEIGHT + LOG_HEIGHT + STATUS_HEIGHT + 2),
    }
}

/// Visible width of a tab strip spanning the section panel.
pub fn strip_width(viewport: Viewport) -> u16 {
    viewport.width.saturating_sub(2 * widgets::SHADOW_WIDTH)
}
