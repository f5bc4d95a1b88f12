pub mod graph;

pub use graph::{DataPoint, Graph, GraphConfig, GraphError, GraphResult, Gridline, SeriesSet};
