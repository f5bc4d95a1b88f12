//! Rendering configuration
//!
//! Deserializable with serde so a host can load it from any format it likes;
//! missing sections fall back to the deployed defaults.

use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

use crate::ui::components::{GraphConfig, GraphError};
use crate::ui::styling::ColorScale;

/// Errors raised while validating a [`Config`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The graph section is unusable
    #[error("Invalid graph configuration: {0}")]
    Graph(#[from] GraphError),

    /// The color scale is empty, inverted or not finite
    #[error("Invalid color scale: min {min} must be below max {max}")]
    ColorScale {
        /// Configured cold end
        min: f32,
        /// Configured hot end
        max: f32,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub graph: GraphConfig,
    pub colors: ColorScale,
}

impl Config {
    /// Check every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.graph.validate()?;
        if !self.colors.is_valid() {
            return Err(ConfigError::ColorScale {
                min: self.colors.min,
                max: self.colors.max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn test_graph_error_is_wrapped() {
        let mut config = Config::default();
        config.graph.value_step = -1.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::Graph(GraphError::InvalidStep))
        );
    }

    #[test]
    fn test_inverted_color_scale() {
        let config = Config {
            colors: ColorScale::new(80.0, 10.0),
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ColorScale {
                min: 80.0,
                max: 10.0
            })
        );
    }
}
