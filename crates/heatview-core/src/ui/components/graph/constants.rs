//! Constants for graph rendering
//!
//! All magic numbers are defined here with descriptive names and units.
//! Defaults reproduce the layout of the deployed `graph.svg` skeleton.

/// Default canvas width in SVG user units
pub const DEFAULT_CANVAS_WIDTH_PX: f32 = 1200.0;

/// Default canvas height in SVG user units
pub const DEFAULT_CANVAS_HEIGHT_PX: f32 = 600.0;

/// Default border reserved on every side, in percent of the canvas
pub const DEFAULT_MARGIN_PERCENT: f32 = 10.0;

/// Default bottom of the value axis (°C)
pub const DEFAULT_VALUE_MIN: f32 = -20.0;

/// Default top of the value axis (°C)
pub const DEFAULT_VALUE_MAX: f32 = 100.0;

/// Default value distance between two gridlines (°C)
pub const DEFAULT_VALUE_STEP: f32 = 10.0;

/// Default unit appended to gridline labels
pub const DEFAULT_LABEL_SUFFIX: &str = "°C";

/// Only every n-th gridline carries a label
pub const LABEL_EVERY_NTH_LINE: usize = 2;

/// Horizontal label position relative to the left margin, in percent
pub const LABEL_OFFSET_PERCENT: f32 = -5.0;

/// Label font size in percent of the canvas height
///
/// Labels are shifted down by half of this to center them on their line.
pub const LABEL_FONT_SIZE_PERCENT: f32 = 3.0;

/// Radius of the per-sample circle markers
pub const MARKER_RADIUS_PX: f32 = 5.0;

/// Minimum value range used in coordinate math (prevents division by zero)
pub const MIN_VALUE_RANGE: f32 = 0.001;

/// Slack, relative to the step count, when deciding if range / step is a
/// whole number
pub const STEP_COUNT_TOLERANCE: f32 = 1e-4;

/// Relative slack (in steps) when deciding if a gridline sits at zero
pub const ZERO_LINE_TOLERANCE: f32 = 1e-4;

/// Decimal places kept when printing coordinates
pub const COORDINATE_DECIMALS: f32 = 1000.0;

/// Maximum length of formatted axis labels (characters)
pub const MAX_AXIS_LABEL_LENGTH: usize = 24;

/// Style class of the drawing-area background rectangle
pub const CLASS_DRAWING_AREA: &str = "drawingArea";

/// Style class of the zero-reference gridline
pub const CLASS_ZERO_LINE: &str = "fat";

/// Prefix of per-series style classes (`color0`, `color1`, ...)
pub const SERIES_CLASS_PREFIX: &str = "color";
