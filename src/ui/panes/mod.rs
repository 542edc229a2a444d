//! TUI pane rendering modules
//!
//! - [`header`]: title line and keyboard help
//! - [`controls`]: clickable buttons
//! - [`bars`]: the sequence as a bar chart
//! - [`status`]: status bar with run state and speed
//!
//! Each pane is a stateless render function over data the app hands in.

pub mod bars;
pub mod controls;
pub mod header;
pub mod status;

pub use bars::render_bars_pane;
pub use controls::render_controls;
pub use header::{render_header, HEADER_HEIGHT};
pub use status::{render_status_bar, StatusRenderData};
