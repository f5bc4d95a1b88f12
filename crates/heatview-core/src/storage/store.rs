//! Process-wide telemetry state

extern crate alloc;
use alloc::vec::Vec;

use log::{debug, info};

use crate::sensors::{CHANNEL_COUNT, Channel, SensorReading};

use super::events::{EventChannel, Relay, TelemetryEvent};
use super::{ChannelBuffer, Pushed, SAMPLE_WINDOW};

/// On/off state of the output relays
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelayState {
    /// Circulation pump running
    pub pump: bool,
    /// Burner firing
    pub burner: bool,
}

impl RelayState {
    /// Current state of one relay
    pub const fn get(&self, relay: Relay) -> bool {
        match relay {
            Relay::Pump => self.pump,
            Relay::Burner => self.burner,
        }
    }

    /// Flip a relay and return its new state
    pub fn toggle(&mut self, relay: Relay) -> bool {
        let state = match relay {
            Relay::Pump => &mut self.pump,
            Relay::Burner => &mut self.burner,
        };
        *state = !*state;
        *state
    }
}

/// Owner of every channel's sample window and the relay state
///
/// Created once at startup and passed by reference to whoever renders.
pub struct TelemetryStore {
    /// One window per channel, indexed by [`Channel::index`]
    channels: [ChannelBuffer; CHANNEL_COUNT],
    relays: RelayState,
    /// Samples accepted since startup
    total_samples: u64,
}

impl TelemetryStore {
    /// Create a store with empty windows and all relays off
    pub fn new() -> Self {
        Self {
            channels: core::array::from_fn(|_| ChannelBuffer::new()),
            relays: RelayState::default(),
            total_samples: 0,
        }
    }

    /// Append a raw value to a channel
    pub fn push(&mut self, channel: Channel, value: f32) {
        match self.channels[channel.index()].push(value) {
            Pushed::Ignored => return,
            Pushed::Evicted(evicted) => {
                debug!("{}: evicted {} from full window", channel.label(), evicted);
            }
            Pushed::Stored => {}
        }

        self.total_samples += 1;
        if self.total_samples == SAMPLE_WINDOW as u64 {
            info!("Telemetry store received its first {} samples", SAMPLE_WINDOW);
        }
    }

    /// Append a validated reading
    pub fn record(&mut self, reading: SensorReading) {
        self.push(reading.channel, reading.value);
    }

    /// Apply one event from the I/O side
    pub fn apply(&mut self, event: TelemetryEvent) {
        match event {
            TelemetryEvent::Sample(reading) => self.record(reading),
            TelemetryEvent::ToggleRelay(relay) => {
                let state = self.relays.toggle(relay);
                info!("{:?} switched {}", relay, if state { "on" } else { "off" });
            }
        }
    }

    /// Apply every event currently queued, returning how many were applied
    pub fn drain(&mut self, events: &EventChannel) -> usize {
        let mut applied = 0;
        while let Ok(event) = events.try_receive() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    /// Sample window of one channel
    pub fn buffer(&self, channel: Channel) -> &ChannelBuffer {
        &self.channels[channel.index()]
    }

    /// Newest sample of one channel
    pub fn latest(&self, channel: Channel) -> Option<f32> {
        self.buffer(channel).latest()
    }

    /// Snapshots of all channels in series order
    pub fn snapshots(&self) -> Vec<heapless::Vec<f32, SAMPLE_WINDOW>> {
        self.channels.iter().map(|buffer| buffer.snapshot()).collect()
    }

    /// Relay state
    pub fn relays(&self) -> RelayState {
        self.relays
    }

    /// Flip a relay and return its new state
    pub fn toggle_relay(&mut self, relay: Relay) -> bool {
        self.relays.toggle(relay)
    }

    /// Samples accepted since startup
    pub fn total_samples(&self) -> u64 {
        self.total_samples
    }
}

impl Default for TelemetryStore {
    fn default() -> Self {
        Self::new()
    }
}
