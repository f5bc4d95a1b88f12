//! Hardware-independent core library for heatview
//!
//! This crate contains the platform-agnostic logic of the heatview heating
//! monitor: per-channel sample windows, SVG graph rendering, temperature
//! color mapping, and placeholder templating of the served pages.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for the simulator and tests).
//!
//! Serial acquisition, GPIO, HTTP and file loading live outside this crate;
//! they feed validated [`sensors::SensorReading`]s in and take rendered
//! strings out.

#![no_std]

extern crate alloc;

pub mod config;
pub mod pages;
pub mod sensors;
pub mod storage;
pub mod ui;
