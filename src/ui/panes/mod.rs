//! TUI pane rendering modules
//!
//! Every pane is a stateless render function over values derived by the
//! controller. Nothing here mutates the walkthrough.
//!
//! # Pane Modules
//!
//! - [`input`]: prompt, length badge, text field and result banner
//! - [`diagram`]: the four-node state diagram
//! - [`tape`]: input characters with the active index highlighted
//! - [`stack`]: the conceptual stack
//! - [`info`]: how the automaton works
//! - [`status`]: status bar with keybindings and state indicator

pub mod diagram;
pub mod info;
pub mod input;
pub mod stack;
pub mod status;
pub mod tape;

pub use diagram::render_state_diagram;
pub use info::{info_height, render_info_pane};
pub use input::{render_input_pane, InputRenderData};
pub use stack::render_stack_pane;
pub use status::{render_status_bar, StatusRenderData};
pub use tape::render_tape_pane;
