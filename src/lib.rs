//! # Introduction
//!
//! sortty runs classic sorting algorithms one mutation at a time and draws
//! every intermediate state as a bar chart in the terminal, using
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Input → Command → Driver → StepProducer → Sequence + StepRecord → Paint → TUI
//! ```
//!
//! 1. [`sequence`]: the list being sorted and its layout bounds.
//! 2. [`engine`]: seven resumable step producers (bubble, insertion,
//!    selection, merge, quick, cocktail shaker, heap), each yielding one
//!    [`engine::StepRecord`] per atomic mutation.
//! 3. [`driver`]: the Idle/Running/Complete state machine that advances the
//!    active producer once per tick and guards selections during a run.
//! 4. [`config`] and [`error`]: startup configuration and its validation.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use sortty::engine::{run_to_completion, Algorithm, Direction};
//! use sortty::sequence::Sequence;
//!
//! let mut seq = Sequence::new(vec![5, 3, 8, 1]);
//! let steps = run_to_completion(Algorithm::Bubble, Direction::Ascending, &mut seq);
//! assert_eq!(steps.len(), 4);
//! assert_eq!(seq.values(), &[1, 3, 5, 8]);
//! ```

pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod sequence;
pub mod ui;
