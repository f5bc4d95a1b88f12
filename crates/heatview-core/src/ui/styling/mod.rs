//! Styling for rendered telemetry
//!
//! Colors are emitted as bare `"R, G, B"` triples because the page skeletons
//! wrap them in `rgb(...)` themselves.

pub mod colors;

pub use colors::{
    ColorScale, NO_READING_RGB, RgbText, TEMPERATURE_COLOR_MAX, TEMPERATURE_COLOR_MIN, map_value,
    rgb_text,
};
