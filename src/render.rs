//! Frame rendering.
//!
//! Pure functions from endpoint state to terminal text: the same state
//! always yields the same bytes. Each line is fixed-width so a repositioned
//! redraw fully overwrites the previous frame.

use crossterm::style::Stylize;

use crate::probe::ProbeOutcome;
use crate::state::EndpointState;

/// Format the latency segment, fixed width regardless of content.
///
/// `(  15ms)` for a 15 ms reply, capped at `(999+ms)` from one second up,
/// `(----ms)` when the last outcome was not a success.
pub fn format_latency(last_outcome: Option<ProbeOutcome>) -> String {
    match last_outcome {
        Some(ProbeOutcome::Success(ms)) if ms >= 1000 => "(999+ms)".to_string(),
        Some(ProbeOutcome::Success(ms)) => format!("({ms:>4}ms)"),
        _ => "(----ms)".to_string(),
    }
}

/// Render one endpoint's line: trailing history, latency, name with a
/// status-colored background (green when the last probe succeeded).
pub fn render_line(state: &EndpointState) -> String {
    let history: String = state
        .history
        .snapshot()
        .iter()
        .map(|symbol| symbol.as_char())
        .collect();
    let latency = format_latency(state.last_outcome);
    let name = state.endpoint.name.as_str();
    let name = if state.is_healthy() {
        name.on_green()
    } else {
        name.on_red()
    };
    format!("{history} {latency} {name}")
}

/// Render one full frame: one line per endpoint, in startup order.
pub fn render_frame(states: &[EndpointState]) -> String {
    let mut frame = String::new();
    for state in states {
        frame.push_str(&render_line(state));
        frame.push('\n');
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Endpoint;
    use std::net::{IpAddr, Ipv4Addr};

    fn state(name: &str) -> EndpointState {
        let endpoint = Endpoint::new(name, IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)));
        EndpointState::new(endpoint, 4)
    }

    #[test]
    fn test_latency_right_justified() {
        assert_eq!(format_latency(Some(ProbeOutcome::Success(15))), "(  15ms)");
        assert_eq!(format_latency(Some(ProbeOutcome::Success(7))), "(   7ms)");
        assert_eq!(format_latency(Some(ProbeOutcome::Success(999))), "( 999ms)");
    }

    #[test]
    fn test_latency_caps_at_one_second() {
        assert_eq!(format_latency(Some(ProbeOutcome::Success(1000))), "(999+ms)");
        assert_eq!(format_latency(Some(ProbeOutcome::Success(4321))), "(999+ms)");
    }

    #[test]
    fn test_latency_placeholder_without_success() {
        assert_eq!(format_latency(None), "(----ms)");
        assert_eq!(format_latency(Some(ProbeOutcome::Timeout)), "(----ms)");
        assert_eq!(format_latency(Some(ProbeOutcome::Failure)), "(----ms)");
    }

    #[test]
    fn test_line_layout() {
        let mut state = state("router");
        state.record(ProbeOutcome::Success(23));

        let line = render_line(&state);
        assert!(line.starts_with("...! (  23ms) "));
        assert!(line.contains("router"));
    }

    #[test]
    fn test_line_reflects_failed_rounds() {
        let mut state = state("router");
        state.record(ProbeOutcome::Timeout);
        state.record(ProbeOutcome::Failure);

        let line = render_line(&state);
        assert!(line.starts_with("..x? (----ms) "));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let mut a = state("a");
        a.record(ProbeOutcome::Success(3));
        let mut b = state("b");
        b.record(ProbeOutcome::Timeout);
        let states = vec![a, b];

        assert_eq!(render_frame(&states), render_frame(&states));
    }

    #[test]
    fn test_frame_has_one_line_per_endpoint_in_order() {
        let states = vec![state("first"), state("second"), state("third")];
        let frame = render_frame(&states);
        let lines: Vec<&str> = frame.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("first"));
        assert!(lines[1].contains("second"));
        assert!(lines[2].contains("third"));
    }
}
