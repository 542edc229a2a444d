//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into these layers:
//!
//! - **[`app`]**: application state, event loop, step pacing
//! - **[`input`]**: key and mouse mapping to driver commands
//! - **[`paint`]**: paint instructions built from the sequence and latest step
//! - **[`panes`]**: stateless render functions (header, controls, bars, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Driver`] and
//! call [`App::run`] to start the event loop.
//!
//! [`Driver`]: crate::driver::Driver
//! [`App::run`]: app::App::run

pub mod app;
pub mod input;
pub mod paint;
pub mod panes;
pub mod theme;

pub use app::App;
