//! Per-endpoint monitoring state.

use std::net::IpAddr;

use crate::history::{HistoryBuffer, HistorySymbol};
use crate::probe::ProbeOutcome;

/// A monitored target: the identity supplied at startup plus the address it
/// resolved to. Created once, never mutated or removed during a run.
#[derive(Debug, Clone)]
pub struct Endpoint {
    /// Display name as given on the command line (hostname or IP).
    pub name: String,
    /// Address all probes for this endpoint are sent to.
    pub addr: IpAddr,
}

impl Endpoint {
    pub fn new(name: impl Into<String>, addr: IpAddr) -> Self {
        Self {
            name: name.into(),
            addr,
        }
    }
}

/// The mutable unit of truth for one endpoint.
///
/// Mutated once per round by the round scheduler, after every probe of that
/// round has settled; read-only for the renderer.
#[derive(Debug, Clone)]
pub struct EndpointState {
    pub endpoint: Endpoint,
    pub history: HistoryBuffer,
    pub last_outcome: Option<ProbeOutcome>,
}

impl EndpointState {
    /// Create the state for one endpoint with a pre-filled history.
    pub fn new(endpoint: Endpoint, capacity: usize) -> Self {
        Self {
            endpoint,
            history: HistoryBuffer::new(capacity),
            last_outcome: None,
        }
    }

    /// Record one settled round for this endpoint.
    pub fn record(&mut self, outcome: ProbeOutcome) {
        self.history.push(HistorySymbol::from(outcome));
        self.last_outcome = Some(outcome);
    }

    /// Whether the most recent probe succeeded. No data counts as unhealthy.
    pub fn is_healthy(&self) -> bool {
        self.last_outcome.is_some_and(ProbeOutcome::is_success)
    }
}
