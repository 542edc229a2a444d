//! Run lifecycle notifications
//!
//! Listeners hear about each run exactly twice: once when it starts and once
//! when it ends, whether it finished sorting or was cancelled by a reset.
//! Nothing a listener does can influence the run.

use crate::engine::{Algorithm, Direction};
use std::io::Write;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The producer was exhausted
    Sorted,
    /// A reset discarded the producer
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub algorithm: Algorithm,
    pub direction: Direction,
    pub len: usize,
    pub steps: usize,
    pub outcome: Outcome,
}

pub trait RunListener {
    fn run_started(&mut self, algorithm: Algorithm, direction: Direction, len: usize);
    fn run_completed(&mut self, summary: &RunSummary);
}

/// Logs run boundaries through `tracing`
#[derive(Debug, Default)]
pub struct TracingListener;

impl RunListener for TracingListener {
    fn run_started(&mut self, algorithm: Algorithm, direction: Direction, len: usize) {
        tracing::info!(%algorithm, %direction, len, "run started");
    }

    fn run_completed(&mut self, summary: &RunSummary) {
        match summary.outcome {
            Outcome::Sorted => tracing::info!(
                algorithm = %summary.algorithm,
                direction = %summary.direction,
                len = summary.len,
                steps = summary.steps,
                "run completed"
            ),
            Outcome::Cancelled => tracing::info!(
                algorithm = %summary.algorithm,
                steps = summary.steps,
                "run cancelled"
            ),
        }
    }
}

/// Rings the terminal bell when a run finishes sorting
pub struct BellListener<W: Write> {
    out: W,
}

impl<W: Write> BellListener<W> {
    pub fn new(out: W) -> Self {
        BellListener { out }
    }
}

impl<W: Write> RunListener for BellListener<W> {
    fn run_started(&mut self, _algorithm: Algorithm, _direction: Direction, _len: usize) {}

    fn run_completed(&mut self, summary: &RunSummary) {
        if summary.outcome != Outcome::Sorted {
            return;
        }
        // A broken output stream must not affect the run
        if let Err(e) = self.out.write_all(b"\x07").and_then(|_| self.out.flush()) {
            tracing::warn!(error = %e, "failed to ring bell");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bell_only_on_sorted() {
        let mut bell = BellListener::new(Vec::new());
        let mut summary = RunSummary {
            algorithm: Algorithm::Heap,
            direction: Direction::Ascending,
            len: 10,
            steps: 12,
            outcome: Outcome::Cancelled,
        };
        bell.run_completed(&summary);
        assert!(bell.out.is_empty());

        summary.outcome = Outcome::Sorted;
        bell.run_completed(&summary);
        assert_eq!(bell.out, b"\x07");
    }
}
