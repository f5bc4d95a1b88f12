//! Data series types for graph rendering
//!
//! A series is one channel's sample window; its position in the input
//! selects the `color<N>` style class it is drawn with.

use core::fmt::Write;

extern crate alloc;
use alloc::vec::Vec;
use heapless::String;

use super::constants::SERIES_CLASS_PREFIX;

/// A single point in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    /// Horizontal position
    pub x: f32,
    /// Vertical position (grows downward)
    pub y: f32,
}

impl DataPoint {
    /// Create a new data point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Check that both coordinates are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Input of [`super::Graph::render_graph`]
///
/// A graph is drawn either from one flat sample sequence or from several
/// sequences overlaid on the same axes. Conversions exist for the common
/// shapes, so callers rarely name the variants.
#[derive(Debug, Clone)]
pub enum SeriesSet<'a> {
    /// One series, drawn with style index 0
    Single(&'a [f32]),
    /// Several series, style index = position
    Overlay(Vec<&'a [f32]>),
}

impl<'a> SeriesSet<'a> {
    /// Iterate the series in style index order
    pub fn iter(&self) -> impl Iterator<Item = &'a [f32]> + '_ {
        let (single, overlay) = match self {
            Self::Single(values) => (Some(*values), None),
            Self::Overlay(list) => (None, Some(list.iter().copied())),
        };
        single.into_iter().chain(overlay.into_iter().flatten())
    }

    /// Number of series
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Overlay(list) => list.len(),
        }
    }

    /// Check if there is nothing to draw
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> From<&'a [f32]> for SeriesSet<'a> {
    fn from(values: &'a [f32]) -> Self {
        Self::Single(values)
    }
}

impl<'a, const N: usize> From<&'a [f32; N]> for SeriesSet<'a> {
    fn from(values: &'a [f32; N]) -> Self {
        Self::Single(values.as_slice())
    }
}

impl<'a> From<&'a [Vec<f32>]> for SeriesSet<'a> {
    fn from(list: &'a [Vec<f32>]) -> Self {
        Self::Overlay(list.iter().map(Vec::as_slice).collect())
    }
}

impl<'a> From<&'a Vec<Vec<f32>>> for SeriesSet<'a> {
    fn from(list: &'a Vec<Vec<f32>>) -> Self {
        Self::from(list.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [heapless::Vec<f32, N>]> for SeriesSet<'a> {
    fn from(list: &'a [heapless::Vec<f32, N>]) -> Self {
        Self::Overlay(list.iter().map(|values| values.as_slice()).collect())
    }
}

impl<'a, const N: usize> From<&'a Vec<heapless::Vec<f32, N>>> for SeriesSet<'a> {
    fn from(list: &'a Vec<heapless::Vec<f32, N>>) -> Self {
        Self::from(list.as_slice())
    }
}

impl<'a> From<Vec<&'a [f32]>> for SeriesSet<'a> {
    fn from(list: Vec<&'a [f32]>) -> Self {
        Self::Overlay(list)
    }
}

/// Style class for a series index, e.g. `color2`
pub fn series_class(index: usize) -> String<16> {
    let mut s = String::new();
    let _ = write!(s, "{}{}", SERIES_CLASS_PREFIX, index);
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_flat_sequence_is_single_series() {
        let values: [f32; 3] = [1.0, 2.0, 3.0];
        let set = SeriesSet::from(&values);
        assert!(matches!(set, SeriesSet::Single(_)));
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().next(), Some(&values[..]));
    }

    #[test]
    fn test_nested_sequence_is_overlay() {
        let list: Vec<Vec<f32>> = vec![vec![1.0], vec![2.0, 3.0], vec![]];
        let set = SeriesSet::from(&list);
        assert!(matches!(set, SeriesSet::Overlay(_)));
        assert_eq!(set.len(), 3);

        let lengths: Vec<usize> = set.iter().map(<[f32]>::len).collect();
        assert_eq!(lengths, vec![1, 2, 0]);
    }

    #[test]
    fn test_series_class() {
        assert_eq!(series_class(0).as_str(), "color0");
        assert_eq!(series_class(5).as_str(), "color5");
    }
}
