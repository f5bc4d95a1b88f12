//! Gridline rendering for graph backgrounds
//!
//! Gridlines run horizontally across the drawing area, one per value step,
//! from the top of the axis downward. Positions are in percent of the
//! canvas height.
//!
//! When the value range is not a whole number of steps, lines keep their
//! true value positions and one unlabeled closing line marks the bottom edge
//! of the drawing area.

use core::fmt::Write;

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

use super::constants::{
    CLASS_ZERO_LINE, LABEL_EVERY_NTH_LINE, LABEL_FONT_SIZE_PERCENT, LABEL_OFFSET_PERCENT,
    MAX_AXIS_LABEL_LENGTH, STEP_COUNT_TOLERANCE, ZERO_LINE_TOLERANCE,
};
use super::svg::{self, Percent};
use super::viewport::GraphConfig;

/// One horizontal gridline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gridline {
    /// Vertical position in percent of the canvas height
    pub position_percent: f32,
    /// Axis value the line stands for
    pub value: f32,
    /// Whether a text label is drawn next to the line
    pub labeled: bool,
    /// Whether this is the zero-reference line
    pub zero: bool,
}

/// Number of value steps spanned by the axis, `(max - min) / step`
///
/// Returns `None` when the configuration has no drawable steps.
pub fn line_count(config: &GraphConfig) -> Option<f32> {
    let count = config.value_range() / config.value_step;
    (count.is_finite() && count > 0.0).then_some(count)
}

/// Compute gridline geometry, top line first
///
/// One line per step for `i = 0..=count`, spread over the whole drawing area.
pub fn gridlines(config: &GraphConfig) -> Vec<Gridline> {
    let Some(count) = line_count(config) else {
        return Vec::new();
    };

    // Snap counts that are whole up to float error, so the last line lands
    // exactly on the bottom edge
    let nearest = libm::roundf(count);
    let whole = nearest >= 1.0
        && libm::fabsf(count - nearest) <= STEP_COUNT_TOLERANCE * count.max(1.0);
    let (count, last) = if whole {
        (nearest, nearest as usize)
    } else {
        (count, libm::floorf(count) as usize)
    };

    let margin = config.margin_percent;
    let area = config.drawing_area_percent();
    let zero_slack = ZERO_LINE_TOLERANCE * config.value_step;

    let mut lines: Vec<Gridline> = (0..=last)
        .map(|i| {
            let value = config.value_max - i as f32 * config.value_step;
            Gridline {
                position_percent: margin + area * (i as f32 / count),
                value,
                labeled: i % LABEL_EVERY_NTH_LINE == 0,
                zero: libm::fabsf(value) <= zero_slack,
            }
        })
        .collect();

    // Partial final step: close the drawing area at its bottom edge
    if !whole {
        lines.push(Gridline {
            position_percent: 100.0 - margin,
            value: config.value_min,
            labeled: false,
            zero: libm::fabsf(config.value_min) <= zero_slack,
        });
    }

    lines
}

/// Append gridlines and their labels as SVG
pub(super) fn draw_grid(config: &GraphConfig, out: &mut String) {
    let left = Percent(config.margin_percent);
    let right = Percent(100.0 - config.margin_percent);
    let label_x = Percent(config.margin_percent + LABEL_OFFSET_PERCENT);

    for line in gridlines(config) {
        let y = Percent(line.position_percent);

        if line.labeled {
            let label = format_label(line.value, &config.label_suffix);
            let label_y = Percent(line.position_percent + LABEL_FONT_SIZE_PERCENT / 2.0);
            svg::text(out, label_x, label_y, &label, None);
        }

        let class = line.zero.then_some(CLASS_ZERO_LINE);
        svg::line(out, left, y, right, y, class);
    }
}

/// Format an axis value with its unit
///
/// Uses a fixed-capacity heapless String; a suffix too long to fit is
/// dropped rather than truncated mid-character.
fn format_label(value: f32, suffix: &str) -> heapless::String<MAX_AXIS_LABEL_LENGTH> {
    let value = svg::tidy(value);
    let mut s = heapless::String::new();
    if write!(s, "{}{}", value, suffix).is_err() {
        s.clear();
        let _ = write!(s, "{}", value);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heating_config() -> GraphConfig {
        GraphConfig::new(-20.0, 100.0, 10.0, "°C").unwrap()
    }

    #[test]
    fn test_line_count() {
        assert_eq!(line_count(&heating_config()), Some(12.0));
    }

    #[test]
    fn test_gridlines_cover_both_ends() {
        let lines = gridlines(&heating_config());
        assert_eq!(lines.len(), 13);

        assert_eq!(lines[0].position_percent, 10.0);
        assert_eq!(lines[0].value, 100.0);
        assert_eq!(lines[12].position_percent, 90.0);
        assert_eq!(lines[12].value, -20.0);
        assert_eq!(lines[6].position_percent, 50.0);
    }

    #[test]
    fn test_zero_reference_line() {
        let lines = gridlines(&heating_config());
        let zero: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.zero)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(zero, [10]);
        assert_eq!(lines[10].value, 0.0);
    }

    #[test]
    fn test_every_second_line_labeled() {
        let lines = gridlines(&heating_config());
        assert_eq!(lines.iter().filter(|l| l.labeled).count(), 7);
        assert!(lines[0].labeled);
        assert!(!lines[1].labeled);
    }

    #[test]
    fn test_partial_step_adds_closing_line() {
        let config = GraphConfig::new(0.0, 25.0, 10.0, "").unwrap();
        let lines = gridlines(&config);

        // 25 / 10 = 2.5 steps: lines at 25, 15, 5 plus the closing line at 0
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2].value, 5.0);
        assert_eq!(lines[3].position_percent, 90.0);
        assert!(!lines[3].labeled);
        assert!(lines[3].zero);
    }

    #[test]
    fn test_many_steps_cover_drawing_area() {
        let config = GraphConfig::new(0.0, 256.0, 1.0, "").unwrap();
        let lines = gridlines(&config);
        assert_eq!(lines.len(), 257);

        let last = lines[256];
        assert_eq!(last.position_percent, 90.0);
        assert_eq!(last.value, 0.0);
        assert!(last.zero);
        assert_eq!(lines[128].position_percent, 50.0);
    }

    #[test]
    fn test_fine_step_reaches_bottom_edge() {
        let config = GraphConfig::new(0.0, 100.0, 0.1, "").unwrap();
        let lines = gridlines(&config);
        assert_eq!(lines.len(), 1001);
        assert_eq!(lines[0].position_percent, 10.0);

        let last = lines[lines.len() - 1];
        assert_eq!(last.position_percent, 90.0);
        assert!(libm::fabsf(last.value) < 1e-3);
        assert!(last.zero);
        assert!(lines.windows(2).all(|w| w[0].position_percent < w[1].position_percent));
    }

    #[test]
    fn test_range_below_one_step() {
        let config = GraphConfig::new(0.0, 5.0, 10.0, "").unwrap();
        let lines = gridlines(&config);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].position_percent, 10.0);
        assert_eq!(lines[1].position_percent, 90.0);
        assert!(!lines[1].labeled);
    }

    #[test]
    fn test_degenerate_step_draws_nothing() {
        let config = GraphConfig {
            value_step: 0.0,
            ..GraphConfig::default()
        };
        assert!(gridlines(&config).is_empty());
    }

    #[test]
    fn test_svg_output() {
        let mut out = String::new();
        draw_grid(&heating_config(), &mut out);

        assert!(out.starts_with(r#"<text x="5%" y="11.5%">100°C</text>"#));
        assert!(out.contains(r#"<text x="5%" y="78.167%">0°C</text>"#));
        assert!(out.contains(r#"<line x1="10%" y1="76.667%" x2="90%" y2="76.667%" class="fat"/>"#));
        assert_eq!(out.matches("<line").count(), 13);
        assert_eq!(out.matches("<text").count(), 7);
    }

    #[test]
    fn test_format_label() {
        assert_eq!(format_label(-20.0, "°C").as_str(), "-20°C");
        assert_eq!(format_label(2.5, "").as_str(), "2.5");
        let long = "a very long unit suffix that does not fit";
        assert_eq!(format_label(40.0, long).as_str(), "40");
    }
}
