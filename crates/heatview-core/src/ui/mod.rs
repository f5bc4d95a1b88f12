//! Rendering building blocks: SVG graph components and color styling

pub mod components;
pub mod styling;
