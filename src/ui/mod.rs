//! Terminal viewer built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — viewer state, keyboard event loop, pane focus
//! - **[`panes`]** — stateless render functions for each visible pane (stack,
//!   heap, terminal, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point is [`App`]: construct it from a finished demo run and call
//! [`App::run`] to start the event loop.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
