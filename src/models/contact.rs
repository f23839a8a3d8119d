//! Contact methods, social links and availability.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

use super::Highlight;

pub const SCHEDULER_HEADLINE: &str = "Schedule a Call";
pub const SCHEDULER_DESCRIPTION: &str = "Let's discuss your project in detail";
pub const FOOTER_MESSAGE: &str = "Looking forward to creating something amazing together!";
pub const COPYRIGHT: &str = "© 2025 Amar Zuga. All rights reserved.";

/// What activating a contact method does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactAction {
    /// Open the scheduling popup for this event slug.
    Schedule(&'static str),
    /// Copy this value to the clipboard.
    Copy(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactMethod {
    pub title: &'static str,
    pub description: &'static str,
    /// Button label.
    pub action_label: &'static str,
    pub action: ContactAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulingOption {
    pub duration: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Event slug under the configured scheduling page.
    pub slug: &'static str,
}

pub const CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod {
        title: "Schedule a Call",
        description: "Book a 30-minute intro call",
        action_label: "Schedule",
        action: ContactAction::Schedule("30min"),
    },
    ContactMethod {
        title: "Email",
        description: "zuga677@gmail.com",
        action_label: "Copy",
        action: ContactAction::Copy("zuga677@gmail.com"),
    },
    ContactMethod {
        title: "WhatsApp/Viber",
        description: "+38762287237",
        action_label: "Copy",
        action: ContactAction::Copy("+38762287237"),
    },
];

/// Links shown next to the contact methods.
pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "LinkedIn",
        url: "https://linkedin.com/in/azuga",
    },
    SocialLink {
        label: "Portfolio",
        url: "https://amarsportfolio.fly.dev/",
    },
    SocialLink {
        label: "Gmail",
        url: "https://mail.google.com/mail/?view=cm&fs=1&to=zuga677@gmail.com",
    },
    SocialLink {
        label: "Location",
        url: "https://maps.google.com/?q=Sarajevo",
    },
];

pub const AVAILABILITY: &[&str] = &[
    "Monday - Friday",
    "9:00 AM - 6:00 PM (GMT+2)",
    "Flexible for different time zones",
];

pub const CONTACT_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Quick Response",
        description: "Usually within 24 hours",
    },
    Highlight {
        title: "Flexible Schedule",
        description: "Available for your timezone",
    },
    Highlight {
        title: "Professional Support",
        description: "Clear communication & updates",
    },
];

pub const SCHEDULING_OPTIONS: &[SchedulingOption] = &[
    SchedulingOption {
        duration: "30 min",
        title: "Quick Consultation",
        description: "Brief project discussion and Q&A",
        slug: "30min",
    },
    SchedulingOption {
        duration: "60 min",
        title: "In-Depth Discussion",
        description: "Detailed project planning and strategy",
        slug: "60min",
    },
];

/// Full URL of an event slug under the scheduling page `base`.
pub fn scheduling_url(base: &str, slug: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), slug)
}

/// Live availability badge derived from Sarajevo wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityStatus {
    Available,
    Away,
    Offline,
}

impl AvailabilityStatus {
    pub fn text(&self) -> &'static str {
        match self {
            AvailabilityStatus::Available => "Available Now",
            AvailabilityStatus::Away => "Response Delayed",
            AvailabilityStatus::Offline => "Currently Offline",
        }
    }

    /// Working hours are 9:00-18:00 on weekdays, delayed replies until 22:00.
    pub fn at(sarajevo: NaiveDateTime) -> Self {
        let weekday = !matches!(sarajevo.weekday(), Weekday::Sat | Weekday::Sun);
        match sarajevo.hour() {
            9..=17 if weekday => AvailabilityStatus::Available,
            7..=21 => AvailabilityStatus::Away,
            _ => AvailabilityStatus::Offline,
        }
    }
}
