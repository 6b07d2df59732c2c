//! Pingmon - Live ICMP Reachability Monitor
//!
//! This crate provides the core functionality for the `pingmon` binary:
//! it continuously probes a fixed set of endpoints with ICMP echo requests,
//! keeps a bounded rolling history of outcomes per endpoint, and renders a
//! live, flicker-minimized terminal view showing recent history, latest
//! latency, and online/offline status per endpoint.
//!
//! # Architecture
//!
//! - [`probe`]: the [`Probe`] seam and the `surge-ping` backed [`IcmpProber`]
//! - [`history`]: bounded FIFO of per-round result symbols
//! - [`state`]: one [`EndpointState`] per monitored target
//! - [`round`]: fire-and-join probing rounds and the inter-round delay
//! - [`render`]: pure state-to-frame text rendering
//! - [`display`]: cursor-reposition vs full-clear frame placement
//! - [`monitor`]: the round/render/present loop

pub mod display;
pub mod history;
pub mod monitor;
pub mod probe;
pub mod render;
pub mod round;
pub mod state;

pub use display::Display;
pub use history::{HistoryBuffer, HistorySymbol, DEFAULT_HISTORY};
pub use monitor::{Monitor, MonitorError};
pub use probe::{resolve_host, IcmpProber, Probe, ProbeOutcome};
pub use render::{format_latency, render_frame, render_line};
pub use round::{round_delay, run_round, ROUND_PERIOD};
pub use state::{Endpoint, EndpointState};
