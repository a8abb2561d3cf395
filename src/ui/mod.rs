//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — event loop, key handling, timer pumping and layout
//! - **[`panes`]** — stateless render functions for each visible pane (input, state
//!   diagram, string processing, stack, info, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Controller`] and
//! call [`App::run`] to start the event loop.
//!
//! [`Controller`]: crate::controller::Controller
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
