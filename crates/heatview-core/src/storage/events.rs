use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Channel};

use crate::sensors::SensorReading;

/// Channel capacity for telemetry events
/// Set to 16 so one full tick of serial lines plus the CPU report fits twice
pub const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Output relays whose state is shown on the pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relay {
    /// Circulation pump
    Pump,
    /// Burner
    Burner,
}

/// Messages delivered from the I/O side into the [`super::TelemetryStore`]
///
/// Serial arrivals and the periodic tick run outside the core; they post
/// events here and the owner of the store drains them between renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TelemetryEvent {
    /// A validated sample arrived
    Sample(SensorReading),
    /// A relay was switched by the control surface
    ToggleRelay(Relay),
}

/// Bounded queue carrying [`TelemetryEvent`]s into the core
///
/// ```rust,ignore
/// static EVENTS: EventChannel = EventChannel::new();
///
/// EVENTS.try_send(TelemetryEvent::Sample(reading))?;
/// store.drain(&EVENTS);
/// ```
pub type EventChannel = Channel<CriticalSectionRawMutex, TelemetryEvent, EVENT_CHANNEL_CAPACITY>;
