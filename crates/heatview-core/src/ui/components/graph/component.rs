//! Main graph component
//!
//! The Graph owns its configuration and the SVG fragment produced by the
//! last render. Rendering is layered: drawing area → gridlines → series.

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

use log::debug;

use super::GraphResult;
use super::constants::{CLASS_DRAWING_AREA, MARKER_RADIUS_PX};
use super::grid::{Gridline, draw_grid, gridlines};
use super::series::{DataPoint, SeriesSet, series_class};
use super::svg::{self, Percent, Units};
use super::viewport::{GraphConfig, Viewport};

/// SVG graph renderer
pub struct Graph {
    /// Immutable axis and canvas configuration
    config: GraphConfig,
    /// Pixel mapping derived from `config`
    viewport: Viewport,
    /// Fragment accumulated since the last clear
    content: String,
}

impl Graph {
    /// Create a graph, validating the configuration
    pub fn new(config: GraphConfig) -> GraphResult<Self> {
        config.validate()?;
        let viewport = Viewport::new(&config);
        Ok(Self {
            config,
            viewport,
            content: String::new(),
        })
    }

    /// Axis and canvas configuration
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Pixel mapping in use
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Fragment rendered so far
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Discard previously rendered output
    pub fn clear(&mut self) {
        self.content.clear();
    }

    /// Gridline geometry for the configured axis
    pub fn gridlines(&self) -> Vec<Gridline> {
        gridlines(&self.config)
    }

    /// Append the drawing-area background and the labeled gridlines
    pub fn render_gridlines(&mut self) {
        let margin = Percent(self.config.margin_percent);
        let size = Percent(self.config.drawing_area_percent());
        svg::rect(
            &mut self.content,
            margin,
            margin,
            size,
            size,
            Some(CLASS_DRAWING_AREA),
        );
        draw_grid(&self.config, &mut self.content);
    }

    /// Canvas coordinates of a series, skipping non-finite samples
    pub fn points(&self, values: &[f32]) -> Vec<DataPoint> {
        let finite: Vec<f32> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.len() != values.len() {
            debug!(
                "Skipping {} non-finite samples",
                values.len() - finite.len()
            );
        }

        let count = finite.len();
        finite
            .iter()
            .enumerate()
            .map(|(i, &value)| self.viewport.data_to_screen(i, count, value))
            .collect()
    }

    /// Append one series: a marker per sample and a connecting polyline
    ///
    /// An empty series draws nothing.
    pub fn render_series(&mut self, values: &[f32], series_index: usize) {
        let points = self.points(values);
        if points.is_empty() {
            return;
        }

        let class = series_class(series_index);
        for point in &points {
            svg::circle(
                &mut self.content,
                Units(point.x),
                Units(point.y),
                Units(MARKER_RADIUS_PX),
                Some(class.as_str()),
            );
        }
        svg::polyline(&mut self.content, &points, Some(class.as_str()));
    }

    /// Render a complete graph and return the fragment
    ///
    /// Clears earlier output, draws the grid, then every series with its
    /// position as style index.
    pub fn render_graph<'a>(&mut self, series: impl Into<SeriesSet<'a>>) -> &str {
        let series = series.into();
        self.clear();
        self.render_gridlines();
        for (index, values) in series.iter().enumerate() {
            self.render_series(values, index);
        }
        debug!(
            "Rendered graph with {} series ({} bytes)",
            series.len(),
            self.content.len()
        );
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn graph() -> Graph {
        Graph::new(GraphConfig::default()).unwrap()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = GraphConfig {
            value_max: -20.0,
            ..GraphConfig::default()
        };
        assert!(Graph::new(config).is_err());
    }

    #[test]
    fn test_three_point_series() {
        let mut graph = graph();
        graph.render_series(&[-20.0, 40.0, 100.0], 0);

        let svg = graph.content();
        assert!(svg.contains(r#"<circle cx="120" cy="540" r="5" class="color0"/>"#));
        assert!(svg.contains(r#"<circle cx="600" cy="300" r="5" class="color0"/>"#));
        assert!(svg.contains(r#"<circle cx="1080" cy="60" r="5" class="color0"/>"#));
        assert!(svg.ends_with(r#"<polyline points="120,540 600,300 1080,60" class="color0"/>"#));
    }

    #[test]
    fn test_single_sample_is_finite() {
        let graph = graph();
        let points = graph.points(&[35.0]);
        assert_eq!(points.len(), 1);
        assert!(points[0].is_finite());
        assert_eq!(points[0].x, 600.0);
    }

    #[test]
    fn test_empty_series_draws_nothing() {
        let mut graph = graph();
        graph.render_series(&[], 3);
        assert!(graph.content().is_empty());
    }

    #[test]
    fn test_non_finite_samples_skipped() {
        let graph = graph();
        let points = graph.points(&[f32::NAN, 40.0, f32::INFINITY]);
        assert_eq!(points, vec![DataPoint::new(600.0, 300.0)]);
    }

    #[test]
    fn test_render_graph_single_series() {
        let mut graph = graph();
        let svg = graph.render_graph(&[20.0_f32, 30.0]);

        assert!(svg.starts_with(r#"<rect x="10%" y="10%" width="80%" height="80%" class="drawingArea"/>"#));
        assert_eq!(svg.matches("<polyline").count(), 1);
        assert!(svg.contains(r#"class="color0""#));
        assert!(!svg.contains(r#"class="color1""#));
    }

    #[test]
    fn test_render_graph_overlay() {
        let mut graph = graph();
        let series: Vec<Vec<f32>> = vec![vec![10.0, 12.0], vec![], vec![40.0]];
        let svg = graph.render_graph(&series);

        assert_eq!(svg.matches("<polyline").count(), 2);
        assert_eq!(svg.matches(r#"<circle"#).count(), 3);
        assert!(svg.contains(r#"class="color0""#));
        assert!(!svg.contains(r#"class="color1""#));
        assert!(svg.contains(r#"<circle cx="600" cy="300" r="5" class="color2"/>"#));
    }

    #[test]
    fn test_render_graph_clears_previous_output() {
        let mut graph = graph();
        let first = String::from(graph.render_graph(&[1.0_f32, 2.0, 3.0]));
        let second = String::from(graph.render_graph(&[1.0_f32, 2.0, 3.0]));
        assert_eq!(first, second);
    }
}
