//! SVG graph rendering for temperature history
//!
//! This module turns the sliding sample windows into an inline SVG fragment
//! that is spliced into the `graph.svg` page skeleton. It supports:
//!
//! - A fixed vertical value axis with labeled horizontal gridlines
//! - A heavier zero-reference line
//! - Multiple overlaid series with one style class per series
//! - Degenerate input (empty series, single sample, zero-width range)
//!
//! # Coordinate System
//!
//! Gridlines are placed in percent of the canvas so the skeleton can scale
//! them freely. Series points are placed in canvas units with the origin at
//! the top left and y growing downward.
//!
//! # Examples
//!
//! ```ignore
//! use heatview_core::ui::components::graph::*;
//!
//! let mut graph = Graph::new(GraphConfig::default())?;
//! let svg = graph.render_graph(&[-20.0, 40.0, 100.0]);
//! assert!(svg.contains("<polyline"));
//! ```

use thiserror_no_std::Error;

// Module declarations
mod component;
pub mod constants;
mod grid;
pub mod series;
mod svg;
pub mod viewport;

// Re-export main types
pub use component::Graph;
pub use grid::{Gridline, gridlines, line_count};
pub use series::{DataPoint, SeriesSet, series_class};
pub use viewport::{GraphConfig, Viewport};

/// Error types for graph configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// Value axis is empty or inverted
    #[error("Invalid value range (min >= max)")]
    InvalidDataBounds,

    /// Gridline step is zero, negative or not finite
    #[error("Invalid value step: must be positive")]
    InvalidStep,

    /// Canvas has no drawable area
    #[error("Invalid canvas size")]
    InvalidCanvas,

    /// Margin leaves no room for the drawing area
    #[error("Invalid margin: {percent}% (must be in 0..50)")]
    InvalidMargin {
        /// The rejected margin
        percent: f32,
    },
}

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;
