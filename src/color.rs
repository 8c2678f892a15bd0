use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Score gradient: sentiment value → Color32
// ---------------------------------------------------------------------------

/// Maps a score inside `[lo, hi]` onto a red → yellow → green hue ramp.
#[derive(Debug, Clone, Copy)]
pub struct ScoreGradient {
    lo: f64,
    hi: f64,
}

impl ScoreGradient {
    pub fn new((lo, hi): (f64, f64)) -> Self {
        ScoreGradient { lo, hi }
    }

    /// Colour for a score; values outside the range clamp to the endpoints,
    /// non-finite values fall back to the midpoint.
    pub fn color_for(&self, value: f64) -> Color32 {
        let span = self.hi - self.lo;
        let mut t = if span.abs() < f64::EPSILON {
            0.5
        } else {
            ((value - self.lo) / span).clamp(0.0, 1.0)
        };
        if !t.is_finite() {
            t = 0.5;
        }

        // Hue 0 = red (most negative), 120 = green (most positive).
        let hsl = Hsl::new(t as f32 * 120.0, 0.7, 0.5);
        let rgb: Srgb = hsl.into_color();
        Color32::from_rgb(
            (rgb.red * 255.0) as u8,
            (rgb.green * 255.0) as u8,
            (rgb.blue * 255.0) as u8,
        )
    }
}
