//! Twinkling parallax starfield drawn behind every section panel.

use std::time::Duration;

use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// Drift speed of each depth layer, far to near.
const LAYER_SPEEDS: [f32; 3] = [0.2, 0.5, 0.8];
const LAYER_GLYPHS: [&str; 3] = ["·", "•", "✦"];
const STARS_PER_LAYER: [usize; 3] = [60, 20, 6];
/// Fraction of the width a speed-1.0 layer crosses per second.
const DRIFT_PER_SECOND: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Star {
    /// Position as fractions of the area, `0.0..1.0`.
    x: f32,
    y: f32,
    layer: usize,
    /// Twinkle phase offset in radians.
    phase: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Starfield {
    stars: Vec<Star>,
    elapsed: f32,
}

impl Default for Starfield {
    fn default() -> Self {
        Self::new(&mut rand::thread_rng())
    }
}

impl Starfield {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let stars = STARS_PER_LAYER
            .iter()
            .enumerate()
            .flat_map(|(layer, &count)| std::iter::repeat(layer).take(count))
            .map(|layer| Star {
                x: rng.gen_range(0.0..1.0),
                y: rng.gen_range(0.0..1.0),
                layer,
                phase: rng.gen_range(0.0..std::f32::consts::TAU),
            })
            .collect();
        Self {
            stars,
            elapsed: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Drift every layer left by its own speed, wrapping at the edge.
    pub fn advance(&mut self, dt: Duration) {
        let secs = dt.as_secs_f32();
        self.elapsed += secs;
        for star in &mut self.stars {
            star.x -= LAYER_SPEEDS[star.layer] * DRIFT_PER_SECOND * secs;
            if star.x < 0.0 {
                star.x += 1.0;
            }
        }
    }

    fn brightness(&self, star: &Star) -> f32 {
        (self.elapsed * 2.0 + star.phase).sin() * 0.5 + 0.5
    }
}

impl Widget for &Starfield {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        for star in &self.stars {
            let x = area.x + ((star.x * f32::from(area.width)) as u16).min(area.width - 1);
            let y = area.y + ((star.y * f32::from(area.height)) as u16).min(area.height - 1);
            let level = 70.0 + 150.0 * self.brightness(star) * (0.5 + 0.25 * star.layer as f32);
            let gray = level.min(255.0) as u8;
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(LAYER_GLYPHS[star.layer])
                    .set_style(Style::default().fg(Color::Rgb(gray, gray, gray)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_layers_drift_at_their_own_speed() {
        let mut field = Starfield::new(&mut StdRng::seed_from_u64(7));
        assert_eq!(field.len(), STARS_PER_LAYER.iter().sum::<usize>());
        let before = field.stars.clone();

        field.advance(Duration::from_secs(1));
        for (old, new) in before.iter().zip(&field.stars) {
            let moved = (old.x - new.x).rem_euclid(1.0);
            let expected = LAYER_SPEEDS[old.layer] * DRIFT_PER_SECOND;
            assert!((moved - expected).abs() < 1e-4);
            assert!((0.0..1.0).contains(&new.x));
            assert_eq!(old.y, new.y);
        }
    }

    #[test]
    fn test_render_stays_inside_area() {
        let field = Starfield::new(&mut StdRng::seed_from_u64(1));
        let area = Rect::new(2, 1, 20, 5);
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 10));
        (&field).render(area, &mut buf);

        for y in 0..10 {
            for x in 0..30 {
                let inside = area.contains((x, y).into());
                let symbol = buf[(x, y)].symbol();
                if !inside {
                    assert_eq!(symbol, " ");
                }
            }
        }
    }
}
