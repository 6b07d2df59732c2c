//! One probing round across all endpoints.
//!
//! A round fires one probe per endpoint concurrently, waits for every probe
//! to settle, then updates all endpoint states at once. Outcomes are matched
//! to endpoints positionally: outcome `i` belongs to endpoint `i` of the
//! launch order. No error crosses this boundary; a probe task that does not
//! complete is classified as a failure for its endpoint only.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::probe::{Probe, ProbeOutcome};
use crate::state::EndpointState;

/// Target wall-clock period of one round.
pub const ROUND_PERIOD: Duration = Duration::from_millis(1000);

/// Execute exactly one probing round and update all endpoint states.
///
/// Returns the delay to sleep before the next round so the overall cadence
/// stays near [`ROUND_PERIOD`].
pub async fn run_round<P>(prober: &Arc<P>, states: &mut [EndpointState]) -> Duration
where
    P: Probe + ?Sized,
{
    // Fire all probes in endpoint order without waiting between starts.
    let handles: Vec<JoinHandle<ProbeOutcome>> = states
        .iter()
        .map(|state| {
            let prober = Arc::clone(prober);
            let addr = state.endpoint.addr;
            tokio::spawn(async move { prober.probe(addr).await })
        })
        .collect();

    // Barrier: every probe settles before any state is touched, so the
    // round's transition is atomic from the renderer's viewpoint.
    let mut outcomes = Vec::with_capacity(handles.len());
    for handle in handles {
        let outcome = match handle.await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(error = %e, "probe task did not complete");
                ProbeOutcome::Failure
            }
        };
        outcomes.push(outcome);
    }

    for (state, outcome) in states.iter_mut().zip(&outcomes) {
        state.record(*outcome);
    }

    round_delay(&outcomes)
}

/// Inter-round delay: the target period minus the slowest successful
/// round-trip of this round, floored at zero.
///
/// Latencies from timeouts and failures do not count; with no successes the
/// full period applies. The zero floor avoids a busy loop when the slowest
/// reply exceeds the period.
pub fn round_delay(outcomes: &[ProbeOutcome]) -> Duration {
    let slowest_ms = outcomes
        .iter()
        .filter_map(|outcome| outcome.rtt_ms())
        .max()
        .unwrap_or(0);
    ROUND_PERIOD.saturating_sub(Duration::from_millis(slowest_ms))
}
