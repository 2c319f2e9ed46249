#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One step of a solve, in the order it happened. Consumed only by external
/// visualization; the solver never reads these back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TraceEvent {
    /// A value placed, either by search or by cascading propagation.
    Assign { row: usize, col: usize, value: u8 },
    /// A branch abandoned at this cell; the snapshot was restored.
    Backtrack { row: usize, col: usize },
}

pub trait TraceSink {
    fn record(&mut self, event: TraceEvent);
}

/// Sink for callers that don't want tracing; recording compiles down to
/// nothing.
pub struct NoTrace;

impl TraceSink for NoTrace {
    fn record(&mut self, _event: TraceEvent) {}
}

/// Append-only ordered event log.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceLog {
    events: Vec<TraceEvent>,
}

impl TraceLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl TraceSink for TraceLog {
    fn record(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}
