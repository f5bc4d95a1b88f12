//! Temperature to color mapping
//!
//! A temperature is clamped into the scale's range and blended linearly from
//! pure blue (cold) to pure red (hot). Green is always zero, so the red and
//! blue components always sum to 255.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::RgbColor;
use heapless::String;
use serde::{Deserialize, Serialize};

/// Temperature (°C) rendered as pure blue
pub const TEMPERATURE_COLOR_MIN: f32 = 10.0;

/// Temperature (°C) rendered as pure red
pub const TEMPERATURE_COLOR_MAX: f32 = 80.0;

/// Color shown for a channel that has not reported yet
pub const NO_READING_RGB: &str = "255, 255, 255";

/// Longest possible triple is `"255, 255, 255"`
pub const MAX_RGB_TEXT_LENGTH: usize = 16;

/// Fixed-capacity text form of a color triple
pub type RgbText = String<MAX_RGB_TEXT_LENGTH>;

/// Linear blue-to-red color scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    /// Temperature mapped to pure blue
    pub min: f32,
    /// Temperature mapped to pure red
    pub max: f32,
}

impl Default for ColorScale {
    fn default() -> Self {
        Self {
            min: TEMPERATURE_COLOR_MIN,
            max: TEMPERATURE_COLOR_MAX,
        }
    }
}

impl ColorScale {
    /// Create a scale from `min` (blue) to `max` (red)
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Check that the scale spans a positive, finite range
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.max > self.min
    }

    /// Red intensity (0-255) for a value
    ///
    /// Out-of-range values clamp, NaN counts as the cold end. An exact
    /// half-way point rounds toward the cold end.
    pub fn red_level(&self, value: f32) -> u8 {
        if !self.is_valid() {
            return if value >= self.max { u8::MAX } else { 0 };
        }

        let clamped = if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        };

        let scaled = (clamped - self.min) / (self.max - self.min) * f32::from(u8::MAX);
        libm::ceilf(scaled - 0.5).clamp(0.0, f32::from(u8::MAX)) as u8
    }

    /// Color for a value
    pub fn color(&self, value: f32) -> Rgb888 {
        let red = self.red_level(value);
        Rgb888::new(red, 0, u8::MAX - red)
    }

    /// Color for a value as `"R, 0, B"`
    pub fn rgb_text(&self, value: f32) -> RgbText {
        rgb_text(self.color(value))
    }
}

/// Format a color as `"R, G, B"`
pub fn rgb_text(color: Rgb888) -> RgbText {
    let mut s = String::new();
    let _ = write!(s, "{}, {}, {}", color.r(), color.g(), color.b());
    s
}

/// Map a temperature onto the default 10-80 °C scale
pub fn map_value(value: f32) -> RgbText {
    ColorScale::default().rgb_text(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_endpoints() {
        assert_eq!(map_value(10.0).as_str(), "0, 0, 255");
        assert_eq!(map_value(80.0).as_str(), "255, 0, 0");
    }

    #[test]
    fn test_midpoint_rounds_toward_cold() {
        assert_eq!(map_value(45.0).as_str(), "127, 0, 128");
    }

    #[test]
    fn test_out_of_range_clamps() {
        assert_eq!(map_value(-30.0).as_str(), "0, 0, 255");
        assert_eq!(map_value(250.0).as_str(), "255, 0, 0");
        assert_eq!(map_value(f32::NAN).as_str(), "0, 0, 255");
        assert_eq!(map_value(f32::INFINITY).as_str(), "255, 0, 0");
    }

    #[test]
    fn test_red_is_monotonic_and_blue_complements() {
        let scale = ColorScale::default();
        let mut previous = 0;
        for tenth in 0..=1000 {
            let value = tenth as f32 / 10.0;
            let color = scale.color(value);
            assert!(color.r() >= previous);
            assert_eq!(u16::from(color.r()) + u16::from(color.b()), 255);
            assert_eq!(color.g(), 0);
            previous = color.r();
        }
    }

    #[test]
    fn test_rounding_away_from_ties() {
        // 20 °C is 1/7 of the way: 36.43 rounds down, 30 °C is 72.86 and rounds up
        let scale = ColorScale::default();
        assert_eq!(scale.red_level(20.0), 36);
        assert_eq!(scale.red_level(30.0), 73);
    }

    #[test]
    fn test_degenerate_scale() {
        let scale = ColorScale::new(50.0, 50.0);
        assert!(!scale.is_valid());
        assert_eq!(scale.red_level(10.0), 0);
        assert_eq!(scale.red_level(60.0), 255);
    }
}
