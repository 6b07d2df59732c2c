//! The monitoring loop.
//!
//! Owns the endpoint states for the process lifetime and drives the
//! round / render / present cycle until externally interrupted.

use std::io::{Stdout, Write};
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::display::Display;
use crate::probe::Probe;
use crate::render::render_frame;
use crate::round::run_round;
use crate::state::{Endpoint, EndpointState};

/// Fatal errors. Per-endpoint probe failures are not errors; they are
/// recorded as history symbols and the loop continues.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// An endpoint identity is neither a valid IP nor DNS-resolvable.
    #[error("failed to resolve endpoint '{host}': {source}")]
    Resolve {
        host: String,
        #[source]
        source: std::io::Error,
    },

    /// The ICMP transport could not be opened (usually missing privileges).
    #[error("failed to open ICMP socket: {0}")]
    Transport(std::io::Error),

    /// Writing a frame to the terminal failed.
    #[error("failed to write frame: {0}")]
    Display(#[from] std::io::Error),
}

/// Runs probing rounds against a fixed set of endpoints and keeps the
/// terminal view current.
pub struct Monitor<W: Write> {
    prober: Arc<dyn Probe>,
    states: Vec<EndpointState>,
    display: Display<W>,
}

impl Monitor<Stdout> {
    /// Monitor `endpoints` on stdout, keeping `capacity` results each.
    pub fn new(prober: Arc<dyn Probe>, endpoints: Vec<Endpoint>, capacity: usize) -> Self {
        Self::with_display(prober, endpoints, capacity, Display::stdout())
    }
}

impl<W: Write> Monitor<W> {
    pub fn with_display(
        prober: Arc<dyn Probe>,
        endpoints: Vec<Endpoint>,
        capacity: usize,
        display: Display<W>,
    ) -> Self {
        let states = endpoints
            .into_iter()
            .map(|endpoint| EndpointState::new(endpoint, capacity))
            .collect();
        Self {
            prober,
            states,
            display,
        }
    }

    pub fn states(&self) -> &[EndpointState] {
        &self.states
    }

    /// Run rounds until the surrounding task is cancelled.
    ///
    /// Each cycle: probe every endpoint, render, present, then sleep the
    /// scheduler's delay so the cadence stays near the round period.
    pub async fn run(mut self) -> Result<(), MonitorError> {
        loop {
            let delay = self.tick().await?;
            tokio::time::sleep(delay).await;
        }
    }

    /// One cycle of the loop: round, render, present.
    async fn tick(&mut self) -> Result<Duration, MonitorError> {
        let delay = run_round(&self.prober, &mut self.states).await;
        let frame = render_frame(&self.states);
        self.display.present(&frame)?;
        Ok(delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::ProbeOutcome;
    use std::net::{IpAddr, Ipv4Addr};

    struct AlwaysUp;

    #[async_trait::async_trait]
    impl Probe for AlwaysUp {
        async fn probe(&self, _addr: IpAddr) -> ProbeOutcome {
            ProbeOutcome::Success(12)
        }
    }

    fn endpoints() -> Vec<Endpoint> {
        vec![
            Endpoint::new("one", IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1))),
            Endpoint::new("two", IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2))),
        ]
    }

    #[test]
    fn test_states_created_in_startup_order() {
        let display = Display::with_capability(Vec::new(), true);
        let monitor = Monitor::with_display(Arc::new(AlwaysUp), endpoints(), 5, display);

        let states = monitor.states();
        assert_eq!(states.len(), 2);
        assert_eq!(states[0].endpoint.name, "one");
        assert_eq!(states[1].endpoint.name, "two");
        assert!(states.iter().all(|s| s.last_outcome.is_none()));
        assert!(states.iter().all(|s| s.history.capacity() == 5));
    }

    #[tokio::test]
    async fn test_tick_probes_renders_and_presents() {
        let display = Display::with_capability(Vec::new(), true);
        let mut monitor = Monitor::with_display(Arc::new(AlwaysUp), endpoints(), 5, display);

        let delay = monitor.tick().await.unwrap();

        assert_eq!(delay, Duration::from_millis(988));
        assert!(monitor.states().iter().all(EndpointState::is_healthy));
    }
}
