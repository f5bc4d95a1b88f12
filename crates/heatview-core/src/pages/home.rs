//! Index page: latest value of every channel plus the relay states

use crate::sensors::Channel;
use crate::storage::{Relay, TelemetryStore};

use super::format_reading;
use super::template::TemplateVariables;

/// Key of the burner relay state (`1` on, `0` off)
pub const BURNER_STATUS_KEY: &str = "burner_status";

/// Key of the pump relay state (`1` on, `0` off)
pub const PUMP_STATUS_KEY: &str = "pump_status";

/// Variables of the index page and every other HTML page
pub fn home_variables(store: &TelemetryStore) -> TemplateVariables {
    let relays = store.relays();
    let mut variables: TemplateVariables = Channel::ALL
        .iter()
        .map(|&channel| (channel.key(), format_reading(store.latest(channel))))
        .collect();

    variables.insert(BURNER_STATUS_KEY, u8::from(relays.get(Relay::Burner)));
    variables.insert(PUMP_STATUS_KEY, u8::from(relays.get(Relay::Pump)));
    variables
}
