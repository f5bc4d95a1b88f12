//! Storage tank drawing: three layer temperatures and their fill colors

extern crate alloc;
use alloc::format;

use crate::sensors::Channel;
use crate::storage::TelemetryStore;
use crate::ui::styling::{ColorScale, NO_READING_RGB};

use super::format_reading;
use super::template::TemplateVariables;

/// Tank layers top to bottom with their variable suffix
const LAYERS: [(&str, Channel); 3] = [
    ("top", Channel::StorageTop),
    ("mid", Channel::StorageMid),
    ("bot", Channel::StorageBot),
];

/// Variables of `storage.svg`: `temp_<layer>` and `rgb_<layer>`
pub fn storage_variables(store: &TelemetryStore, colors: &ColorScale) -> TemplateVariables {
    let mut variables = TemplateVariables::new();
    for (layer, channel) in LAYERS {
        let latest = store.latest(channel);
        variables.insert(format!("temp_{layer}"), format_reading(latest));
        match latest {
            Some(value) => variables.insert(format!("rgb_{layer}"), colors.rgb_text(value)),
            None => variables.insert(format!("rgb_{layer}"), NO_READING_RGB),
        }
    }
    variables
}
