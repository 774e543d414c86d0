//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`stack`]: The fixed buffer inside its stack frame
//! - [`heap`]: The dynamic buffer's block with a hex dump per element
//! - [`terminal`]: The captured report
//! - [`status`]: Status bar with keybindings and the base address distance
//! - `utils`: Shared block, scrolling and byte formatting helpers
//!
//! Each pane module exports a single `render_*` function that takes the
//! frame, its area, the data to draw and (for scrollable panes) a scroll
//! offset that the function clamps in place.

mod utils;

pub mod heap;
pub mod stack;
pub mod status;
pub mod terminal;

pub use heap::render_heap_pane;
pub use stack::render_stack_pane;
pub use status::render_status_bar;
pub use terminal::render_terminal_pane;
