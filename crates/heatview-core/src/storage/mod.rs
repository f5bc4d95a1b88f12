//! In-memory telemetry storage
//!
//! Every channel keeps a short sliding window of its most recent samples.
//! Nothing is persisted: the window is all the history the graph ever shows.

pub mod events;
pub mod store;

use heapless::{Deque, Vec};
use log::debug;

pub use events::{EVENT_CHANNEL_CAPACITY, EventChannel, Relay, TelemetryEvent};
pub use store::{RelayState, TelemetryStore};

/// Number of samples kept per channel
pub const SAMPLE_WINDOW: usize = 20;

/// Sample window used for every telemetry channel
pub type ChannelBuffer = SampleBuffer<SAMPLE_WINDOW>;

/// Result of [`SampleBuffer::push`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pushed {
    /// Appended without eviction
    Stored,
    /// Appended after evicting the contained oldest sample
    Evicted(f32),
    /// Non-finite value, buffer untouched
    Ignored,
}

/// Fixed-capacity FIFO of samples, oldest first
///
/// Pushing into a full buffer evicts exactly one sample from the front.
/// Not synchronized: callers own the buffer from a single context.
#[derive(Debug, Clone)]
pub struct SampleBuffer<const N: usize> {
    samples: Deque<f32, N>,
}

impl<const N: usize> SampleBuffer<N> {
    /// Create an empty buffer
    pub fn new() -> Self {
        const { assert!(N > 0, "SampleBuffer needs a capacity of at least one") };
        Self {
            samples: Deque::new(),
        }
    }

    /// Append a sample, evicting the oldest one if the window is full
    ///
    /// Non-finite values are dropped and leave the buffer untouched.
    pub fn push(&mut self, value: f32) -> Pushed {
        if !value.is_finite() {
            debug!("Ignoring non-finite sample: {}", value);
            return Pushed::Ignored;
        }

        let evicted = if self.samples.is_full() {
            self.samples.pop_front()
        } else {
            None
        };

        // N > 0, so there is room after the eviction above
        let _ = self.samples.push_back(value);
        evicted.map_or(Pushed::Stored, Pushed::Evicted)
    }

    /// Copy of the current window in chronological order
    pub fn snapshot(&self) -> Vec<f32, N> {
        self.samples.iter().copied().collect()
    }

    /// Iterate samples oldest first
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.samples.iter().copied()
    }

    /// Most recent sample
    pub fn latest(&self) -> Option<f32> {
        self.samples.back().copied()
    }

    /// Number of samples currently held
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if no sample has arrived yet
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Check if the next push will evict
    pub fn is_full(&self) -> bool {
        self.samples.is_full()
    }

    /// Maximum number of samples held
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Drop all samples
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

impl<const N: usize> Default for SampleBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
