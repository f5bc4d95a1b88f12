//! Graph configuration and coordinate transformation
//!
//! Handles transformation between data space (sample index, temperature)
//! and canvas space (SVG user units, y growing downward).

extern crate alloc;
use alloc::string::String;

use serde::{Deserialize, Serialize};

use super::constants::{
    DEFAULT_CANVAS_HEIGHT_PX, DEFAULT_CANVAS_WIDTH_PX, DEFAULT_LABEL_SUFFIX,
    DEFAULT_MARGIN_PERCENT, DEFAULT_VALUE_MAX, DEFAULT_VALUE_MIN, DEFAULT_VALUE_STEP,
    MIN_VALUE_RANGE,
};
use super::series::DataPoint;
use super::{GraphError, GraphResult};

/// Value axis and canvas geometry of a graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Value at the bottom edge of the drawing area
    pub value_min: f32,
    /// Value at the top edge of the drawing area
    pub value_max: f32,
    /// Value distance between gridlines
    pub value_step: f32,
    /// Unit appended to gridline labels (e.g. "°C")
    pub label_suffix: String,
    /// Canvas width in SVG user units
    pub width_px: f32,
    /// Canvas height in SVG user units
    pub height_px: f32,
    /// Border reserved on each side, in percent of the canvas
    pub margin_percent: f32,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            value_min: DEFAULT_VALUE_MIN,
            value_max: DEFAULT_VALUE_MAX,
            value_step: DEFAULT_VALUE_STEP,
            label_suffix: String::from(DEFAULT_LABEL_SUFFIX),
            width_px: DEFAULT_CANVAS_WIDTH_PX,
            height_px: DEFAULT_CANVAS_HEIGHT_PX,
            margin_percent: DEFAULT_MARGIN_PERCENT,
        }
    }
}

impl GraphConfig {
    /// Create a configuration with the default canvas and margin
    pub fn new(
        value_min: f32,
        value_max: f32,
        value_step: f32,
        label_suffix: &str,
    ) -> GraphResult<Self> {
        let config = Self {
            value_min,
            value_max,
            value_step,
            label_suffix: String::from(label_suffix),
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the canvas size
    pub fn with_canvas(mut self, width_px: f32, height_px: f32) -> Self {
        self.width_px = width_px;
        self.height_px = height_px;
        self
    }

    /// Set the margin
    pub fn with_margin(mut self, margin_percent: f32) -> Self {
        self.margin_percent = margin_percent;
        self
    }

    /// Check the invariants the renderer relies on
    pub fn validate(&self) -> GraphResult<()> {
        if !self.value_min.is_finite()
            || !self.value_max.is_finite()
            || self.value_max <= self.value_min
        {
            return Err(GraphError::InvalidDataBounds);
        }
        if !self.value_step.is_finite() || self.value_step <= 0.0 {
            return Err(GraphError::InvalidStep);
        }
        if !(self.width_px.is_finite() && self.width_px > 0.0)
            || !(self.height_px.is_finite() && self.height_px > 0.0)
        {
            return Err(GraphError::InvalidCanvas);
        }
        if !(0.0..50.0).contains(&self.margin_percent) {
            return Err(GraphError::InvalidMargin {
                percent: self.margin_percent,
            });
        }
        Ok(())
    }

    /// Value range covered by the vertical axis
    pub fn value_range(&self) -> f32 {
        self.value_max - self.value_min
    }

    /// Share of the canvas (in percent) left for drawing on each axis
    pub fn drawing_area_percent(&self) -> f32 {
        100.0 - 2.0 * self.margin_percent
    }
}

/// Viewport for transforming data coordinates to canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    margin_x: f32,
    margin_y: f32,
    draw_width: f32,
    draw_height: f32,
    canvas_height: f32,
    value_min: f32,
    value_range: f32,
}

impl Viewport {
    /// Derive pixel geometry from a configuration
    pub fn new(config: &GraphConfig) -> Self {
        let draw_percent = config.drawing_area_percent();
        Self {
            margin_x: config.margin_percent * config.width_px / 100.0,
            margin_y: config.margin_percent * config.height_px / 100.0,
            draw_width: draw_percent * config.width_px / 100.0,
            draw_height: draw_percent * config.height_px / 100.0,
            canvas_height: config.height_px,
            value_min: config.value_min,
            value_range: config.value_range().max(MIN_VALUE_RANGE),
        }
    }

    /// Horizontal position of sample `index` out of `count`
    ///
    /// A lone sample sits at the horizontal center of the drawing area.
    pub fn x_for_index(&self, index: usize, count: usize) -> f32 {
        if count <= 1 {
            return self.margin_x + self.draw_width / 2.0;
        }
        self.margin_x + index as f32 / (count - 1) as f32 * self.draw_width
    }

    /// Vertical position of a value (values outside the axis are not clamped)
    pub fn y_for_value(&self, value: f32) -> f32 {
        let normalized = (value - self.value_min) / self.value_range;
        self.canvas_height - (self.margin_y + normalized * self.draw_height)
    }

    /// Transform one sample to canvas coordinates
    pub fn data_to_screen(&self, index: usize, count: usize, value: f32) -> DataPoint {
        DataPoint::new(self.x_for_index(index, count), self.y_for_value(value))
    }

    /// Left edge of the drawing area
    pub fn margin_x(&self) -> f32 {
        self.margin_x
    }

    /// Width of the drawing area
    pub fn draw_width(&self) -> f32 {
        self.draw_width
    }

    /// Height of the drawing area
    pub fn draw_height(&self) -> f32 {
        self.draw_height
    }
}
