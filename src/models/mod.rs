//! Static content for the portfolio sections.

pub mod about;
pub mod contact;
pub mod experience;
pub mod mindset;
pub mod project;
pub mod versatilist;

pub use about::*;
pub use contact::*;
pub use experience::*;
pub use mindset::*;
pub use project::*;
pub use versatilist::*;

/// A headline number with its caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// A titled one-liner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}
