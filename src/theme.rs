//! Colour themes and motion presets.

use std::time::Duration;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// A named colour theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    /// Two-stop gradient used for titles and the logo.
    pub gradient: (Color, Color),
}

pub const THEMES: &[Theme] = &[
    Theme {
        id: "purple",
        name: "Cosmic Purple",
        primary: Color::Rgb(76, 29, 149),
        secondary: Color::Rgb(124, 58, 237),
        accent: Color::Rgb(168, 85, 247),
        gradient: (Color::Rgb(76, 29, 149), Color::Rgb(124, 58, 237)),
    },
    Theme {
        id: "cyber",
        name: "Cyber Blue",
        primary: Color::Rgb(6, 182, 212),
        secondary: Color::Rgb(59, 130, 246),
        accent: Color::Rgb(99, 102, 241),
        gradient: (Color::Rgb(6, 182, 212), Color::Rgb(59, 130, 246)),
    },
    Theme {
        id: "ember",
        name: "Ember Gold",
        primary: Color::Rgb(245, 158, 11),
        secondary: Color::Rgb(249, 115, 22),
        accent: Color::Rgb(239, 68, 68),
        gradient: (Color::Rgb(245, 158, 11), Color::Rgb(249, 115, 22)),
    },
];

/// Look up a theme by id, falling back to the first theme.
pub fn theme_by_id(id: &str) -> &'static Theme {
    THEMES.iter().find(|t| t.id == id).unwrap_or(&THEMES[0])
}

/// Id of the theme after `id`, wrapping around.
pub fn next_theme_id(id: &str) -> &'static str {
    let idx = THEMES.iter().position(|t| t.id == id).unwrap_or(0);
    THEMES[(idx + 1) % THEMES.len()].id
}

/// Linear interpolation between two RGB colours.
/// Non-RGB colours are returned unchanged from the nearer stop.
pub fn lerp_color(from: Color, to: Color, fraction: f64) -> Color {
    let t = fraction.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t) as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

/// Colour of line `index` of `total` along the theme gradient.
pub fn gradient_color(theme: &Theme, index: usize, total: usize) -> Color {
    let fraction = index as f64 / (total.max(2) - 1) as f64;
    lerp_color(theme.gradient.0, theme.gradient.1, fraction)
}

// =============================================================================
// Motion
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spring {
    pub stiffness: f32,
    pub damping: f32,
}

impl Spring {
    /// Position of a unit mass pulled from `0.0` towards rest at `1.0`,
    /// `t` seconds after release.
    ///
    /// Springs at or above critical damping follow the critically damped curve.
    pub fn position(&self, t: f64) -> f64 {
        let omega = f64::from(self.stiffness).max(f64::EPSILON).sqrt();
        let zeta = f64::from(self.damping).max(0.0) / (2.0 * omega);
        let t = t.max(0.0);
        let decay = (-zeta * omega * t).exp();
        if zeta < 1.0 {
            let damped = omega * (1.0 - zeta * zeta).sqrt();
            1.0 - decay * ((damped * t).cos() + zeta * omega / damped * (damped * t).sin())
        } else {
            1.0 - decay * (1.0 + omega * t)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringPresets {
    pub light: Spring,
    pub medium: Spring,
    pub heavy: Spring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transitions {
    #[serde(with = "millis")]
    pub hover: Duration,
    #[serde(with = "millis")]
    pub click: Duration,
    #[serde(with = "millis")]
    pub page: Duration,
}

/// Animation settings shared by every section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationPreferences {
    pub enabled: bool,
    pub spring: SpringPresets,
    pub transition: Transitions,
}

impl Default for AnimationPreferences {
    fn default() -> Self {
        Self {
            enabled: true,
            spring: SpringPresets {
                light: Spring {
                    stiffness: 300.0,
                    damping: 20.0,
                },
                medium: Spring {
                    stiffness: 400.0,
                    damping: 25.0,
                },
                heavy: Spring {
                    stiffness: 500.0,
                    damping: 30.0,
                },
            },
            transition: Transitions {
                hover: Duration::from_millis(200),
                click: Duration::from_millis(100),
                page: Duration::from_millis(300),
            },
        }
    }
}

impl AnimationPreferences {
    /// Progress `0.0..=1.0` of a transition started `elapsed` ago.
    /// Always complete when motion is disabled.
    pub fn progress(&self, elapsed: Duration, duration: Duration) -> f64 {
        if !self.enabled || duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
    }

    /// Cells still left to travel `elapsed` into a `spring` move over
    /// `distance` cells. Overshoot reads as arrived.
    pub fn remaining(&self, spring: Spring, elapsed: Duration, distance: u16) -> u16 {
        if !self.enabled {
            return 0;
        }
        let left = (1.0 - spring.position(elapsed.as_secs_f64())) * f64::from(distance);
        left.round().clamp(0.0, f64::from(distance)) as u16
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
