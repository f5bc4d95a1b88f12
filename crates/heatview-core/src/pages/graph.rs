//! History graph page

use crate::storage::TelemetryStore;
use crate::ui::components::Graph;

use super::template::TemplateVariables;

/// Variables of `graph.svg`
///
/// Renders every channel window as one overlaid series; `content` holds the
/// SVG fragment, the rest describe the canvas and axis it was drawn for.
pub fn graph_variables(graph: &mut Graph, store: &TelemetryStore) -> TemplateVariables {
    let snapshots = store.snapshots();
    let content = graph.render_graph(&snapshots);
    let mut variables = TemplateVariables::new().with("content", content);

    let config = graph.config();
    variables.insert("width", config.width_px);
    variables.insert("height", config.height_px);
    variables.insert("margin", config.margin_percent);
    variables.insert("value_min", config.value_min);
    variables.insert("value_max", config.value_max);
    variables.insert("label_suffix", &config.label_suffix);
    variables
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensors::Channel;
    use crate::ui::components::GraphConfig;

    #[test]
    fn test_graph_variables() {
        let mut graph = Graph::new(GraphConfig::default()).unwrap();
        let mut store = TelemetryStore::new();
        store.push(Channel::Outside, 4.0);
        store.push(Channel::Outside, 6.0);
        store.push(Channel::StorageBot, 30.0);

        let variables = graph_variables(&mut graph, &store);
        assert_eq!(variables.get("width"), Some("1200"));
        assert_eq!(variables.get("height"), Some("600"));
        assert_eq!(variables.get("margin"), Some("10"));
        assert_eq!(variables.get("value_min"), Some("-20"));
        assert_eq!(variables.get("label_suffix"), Some("°C"));

        let content = variables.get("content").unwrap();
        assert_eq!(content.matches("<polyline").count(), 2);
        assert!(content.contains(r#"class="color1""#));
        assert!(content.contains(r#"class="color4""#));
        assert!(!content.contains(r#"class="color0""#));
    }
}
