//! Bounded rolling history of probe results.

use std::collections::VecDeque;

use crate::probe::ProbeOutcome;

/// Default number of results kept per endpoint.
pub const DEFAULT_HISTORY: usize = 50;

/// Single-character classification of one round's outcome for one endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistorySymbol {
    /// No round has produced a result for this slot yet.
    NoData,
    /// Echo reply received.
    Reply,
    /// No reply within the transport's window.
    TimedOut,
    /// Probe did not complete.
    Error,
}

impl HistorySymbol {
    pub const fn as_char(self) -> char {
        match self {
            Self::NoData => '.',
            Self::Reply => '!',
            Self::TimedOut => 'x',
            Self::Error => '?',
        }
    }
}

impl From<ProbeOutcome> for HistorySymbol {
    fn from(outcome: ProbeOutcome) -> Self {
        match outcome {
            ProbeOutcome::Success(_) => Self::Reply,
            ProbeOutcome::Timeout => Self::TimedOut,
            ProbeOutcome::Failure => Self::Error,
        }
    }
}

/// Fixed-capacity FIFO of history symbols, oldest first.
///
/// Pre-filled with [`HistorySymbol::NoData`] so the rendered width is stable
/// from the first frame; length therefore always equals capacity.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    symbols: VecDeque<HistorySymbol>,
    capacity: usize,
}

impl HistoryBuffer {
    pub fn new(capacity: usize) -> Self {
        let mut symbols = VecDeque::with_capacity(capacity + 1);
        symbols.extend(std::iter::repeat(HistorySymbol::NoData).take(capacity));
        Self { symbols, capacity }
    }

    /// Append one symbol, evicting from the front while over capacity.
    pub fn push(&mut self, symbol: HistorySymbol) {
        self.symbols.push_back(symbol);
        while self.symbols.len() > self.capacity {
            self.symbols.pop_front();
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The current symbols, oldest first.
    pub fn snapshot(&self) -> Vec<HistorySymbol> {
        self.symbols.iter().copied().collect()
    }
}
