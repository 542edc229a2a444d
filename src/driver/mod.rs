//! Execution driver
//!
//! [`Driver`] owns the [`Sequence`], the current selections and at most one
//! active step producer. It is a small state machine:
//!
//! ```text
//!            start                tick (exhausted)
//!   Idle ───────────▶ Running ─────────────────▶ Complete
//!    ▲                  │  ▲ tick (one step)        │
//!    │                  └──┘                        │
//!    └───────── reset / resize ◀────────────────────┘
//! ```
//!
//! Selecting an algorithm, changing direction or resizing is rejected while a
//! run is active. Reset is always accepted and drops the producer on the spot;
//! the sequence is regenerated, so nothing needs to be rolled back.

pub mod listener;

use crate::config::Config;
use crate::engine::{Algorithm, Direction, Sorter, StepProducer, StepRecord};
use crate::sequence::{self, Sequence};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub use listener::{BellListener, Outcome, RunListener, RunSummary, TracingListener};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Complete,
}

/// Operations the command surface can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Select(Algorithm),
    SetDirection(Direction),
    Start,
    Reset,
    /// Grow or shrink the list by this many values
    Resize(isize),
}

/// Result of advancing the active run by one tick
#[derive(Debug, PartialEq, Eq)]
pub enum Tick<'a> {
    /// One mutation happened; the sequence already reflects it
    Stepped(&'a StepRecord),
    /// The producer had nothing left; the driver is now Complete
    Completed,
}

pub struct Driver {
    sequence: Sequence,
    size: usize,
    min_value: i32,
    max_value: i32,
    algorithm: Algorithm,
    direction: Direction,
    state: RunState,
    producer: Option<Sorter>,
    last_step: Option<StepRecord>,
    steps_taken: usize,
    rng: StdRng,
    listeners: Vec<Box<dyn RunListener>>,
}

impl Driver {
    /// Build an idle driver. The config is expected to be validated.
    pub fn new(config: &Config) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let sequence = match &config.values {
            Some(values) => Sequence::new(values.clone()),
            None => Sequence::random(config.size, config.min_value, config.max_value, &mut rng),
        };

        // A fixed list sets the size the first resize steps from
        let size = match &config.values {
            Some(values) => sequence::resized(values.len(), 0),
            None => config.size,
        };

        Driver {
            sequence,
            size,
            min_value: config.min_value,
            max_value: config.max_value,
            algorithm: config.algorithm,
            direction: config.direction,
            state: RunState::Idle,
            producer: None,
            last_step: None,
            steps_taken: 0,
            rng,
            listeners: Vec::new(),
        }
    }

    pub fn add_listener(&mut self, listener: Box<dyn RunListener>) {
        self.listeners.push(listener);
    }

    /// Dispatch a command. Returns `false` if it was rejected.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Select(algorithm) => self.select_algorithm(algorithm),
            Command::SetDirection(direction) => self.set_direction(direction),
            Command::Start => self.start(),
            Command::Reset => {
                self.reset();
                true
            }
            Command::Resize(delta) => self.resize(delta),
        }
    }

    pub fn select_algorithm(&mut self, algorithm: Algorithm) -> bool {
        if self.is_running() {
            tracing::debug!(%algorithm, "selection rejected while running");
            return false;
        }
        self.algorithm = algorithm;
        true
    }

    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.is_running() {
            tracing::debug!(%direction, "direction change rejected while running");
            return false;
        }
        self.direction = direction;
        true
    }

    /// Begin a run of the selected algorithm over the current sequence.
    ///
    /// A list shorter than two values has nothing to sort, so the run goes
    /// straight to Complete without producing a step.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }

        let len = self.sequence.len();
        self.producer = Some(self.algorithm.producer(self.direction, len));
        self.last_step = None;
        self.steps_taken = 0;
        self.state = RunState::Running;
        for listener in &mut self.listeners {
            listener.run_started(self.algorithm, self.direction, len);
        }

        if len < 2 {
            self.finish(Outcome::Sorted);
        }
        true
    }

    /// Drop any active run and install a fresh random list of the current size
    pub fn reset(&mut self) {
        if self.is_running() {
            self.finish(Outcome::Cancelled);
        }
        self.regenerate();
    }

    /// Change the list size by `delta`, clamped to the supported range
    pub fn resize(&mut self, delta: isize) -> bool {
        if self.is_running() {
            tracing::debug!(delta, "resize rejected while running");
            return false;
        }
        self.size = sequence::resized(self.size, delta);
        self.regenerate();
        true
    }

    /// Advance the active run by exactly one step.
    ///
    /// Panics if no run is active; callers check [`Driver::is_running`].
    pub fn tick(&mut self) -> Tick<'_> {
        assert!(
            self.state == RunState::Running,
            "tick called without an active run (state: {:?})",
            self.state
        );
        let producer = self
            .producer
            .as_mut()
            .expect("running driver always holds a producer");

        match producer.next_step(&mut self.sequence) {
            Some(step) => {
                self.steps_taken += 1;
                tracing::trace!(index = self.steps_taken, %step, "step");
                Tick::Stepped(self.last_step.insert(step))
            }
            None => {
                self.finish(Outcome::Sorted);
                Tick::Completed
            }
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.producer = None;
        self.last_step = None;
        self.state = match outcome {
            Outcome::Sorted => RunState::Complete,
            Outcome::Cancelled => RunState::Idle,
        };
        let summary = RunSummary {
            algorithm: self.algorithm,
            direction: self.direction,
            len: self.sequence.len(),
            steps: self.steps_taken,
            outcome,
        };
        for listener in &mut self.listeners {
            listener.run_completed(&summary);
        }
    }

    fn regenerate(&mut self) {
        self.sequence = Sequence::random(self.size, self.min_value, self.max_value, &mut self.rng);
        self.state = RunState::Idle;
        self.last_step = None;
        self.steps_taken = 0;
        tracing::debug!(size = self.size, "generated new list");
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// The step produced by the latest tick, if the run is still active
    pub fn last_step(&self) -> Option<&StepRecord> {
        self.last_step.as_ref()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Steps taken by the current or most recent run
    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }
}
