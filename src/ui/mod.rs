//! Memory inspector built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** — inspector state, keyboard event loop, pane focus and selection
//! - **[`panes`]** — stateless render functions for each visible pane (locals,
//!   bytes, output, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//! - **[`session`]** — raw mode and alternate screen setup and teardown
//!
//! Construct an [`App`] from a [`Demo`] that has already run and call
//! [`run_inspector`] to take over the terminal and start the event loop.
//!
//! [`Demo`]: crate::demo::Demo
//! [`run_inspector`]: session::run_inspector

pub mod app;
pub mod panes;
pub mod session;
pub mod theme;

pub use app::App;
pub use session::run_inspector;
