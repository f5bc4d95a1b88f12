// src/pages/page_manager.rs
//! Page manager with routing and variable dispatching.

extern crate alloc;
use alloc::string::String;

use log::debug;

use crate::config::{Config, ConfigError};
use crate::storage::TelemetryStore;
use crate::ui::components::Graph;
use crate::ui::styling::ColorScale;

use super::template::{TemplateVariables, fill_template};
use super::{graph_variables, home_variables, storage_variables};

/// Pages served by the monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageId {
    /// Any HTML page, wrapped in the shared header and footer
    Home,
    /// Storage tank drawing
    Storage,
    /// Temperature history graph
    Graph,
}

impl PageId {
    pub const ALL: [PageId; 3] = [Self::Home, Self::Storage, Self::Graph];

    /// Skeleton file the page is rendered from
    pub const fn template_name(self) -> &'static str {
        match self {
            Self::Home => "index.html",
            Self::Storage => "storage.svg",
            Self::Graph => "graph.svg",
        }
    }

    /// MIME type of the rendered page
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Home => "text/html",
            Self::Storage | Self::Graph => "image/svg+xml",
        }
    }

    /// Whether the body is wrapped in `header.html` / `footer.html`
    pub const fn uses_page_chrome(self) -> bool {
        matches!(self, Self::Home)
    }

    /// Route a request path
    ///
    /// `/` and every `*.html` path map to [`PageId::Home`].
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Self::Home),
            "/storage.svg" => Some(Self::Storage),
            "/graph.svg" => Some(Self::Graph),
            other if other.ends_with(".html") => Some(Self::Home),
            _ => None,
        }
    }
}

/// Renders pages from the current telemetry state.
pub struct PageManager {
    graph: Graph,
    colors: ColorScale,
}

impl PageManager {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            graph: Graph::new(config.graph.clone())?,
            colors: config.colors,
        })
    }

    /// Collect the variables of a page
    pub fn variables(&mut self, page: PageId, store: &TelemetryStore) -> TemplateVariables {
        match page {
            PageId::Home => home_variables(store),
            PageId::Storage => storage_variables(store, &self.colors),
            PageId::Graph => graph_variables(&mut self.graph, store),
        }
    }

    /// Fill a page skeleton with the current state
    pub fn render(&mut self, page: PageId, template: &str, store: &TelemetryStore) -> String {
        let variables = self.variables(page, store);
        debug!(" Rendering {:?} with {} variables", page, variables.len());
        fill_template(template, &variables)
    }

    /// The graph renderer
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Color scale of the storage drawing
    pub fn colors(&self) -> ColorScale {
        self.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensors::Channel;

    #[test]
    fn test_routing() {
        assert_eq!(PageId::from_path("/"), Some(PageId::Home));
        assert_eq!(PageId::from_path("/status.html"), Some(PageId::Home));
        assert_eq!(PageId::from_path("/graph.svg"), Some(PageId::Graph));
        assert_eq!(PageId::from_path("/style.css"), None);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = Config::default();
        config.colors.max = config.colors.min;
        assert!(PageManager::new(&config).is_err());
    }

    #[test]
    fn test_render_storage() {
        let mut manager = PageManager::new(&Config::default()).unwrap();
        let mut store = TelemetryStore::new();
        store.push(Channel::StorageTop, 10.0);

        let svg = manager.render(
            PageId::Storage,
            r#"<rect style="fill: rgb(__{{rgb_top}}__)"/><text>__{{temp_top}}__</text>"#,
            &store,
        );
        assert_eq!(
            svg,
            r#"<rect style="fill: rgb(0, 0, 255)"/><text>10</text>"#
        );
    }
}
