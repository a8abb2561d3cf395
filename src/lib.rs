//! # Introduction
//!
//! `palindrome-nfa` walks a short string through a palindrome-checking
//! automaton: read forward while pushing onto a stack, then read backward
//! while popping and comparing. The walkthrough is animated in a terminal UI
//! built with [ratatui](https://docs.rs/ratatui), one step per timer tick.
//!
//! ## Pipeline
//!
//! ```text
//! keys → Controller (input, step, verdict, timer) → StepView → panes
//! ```
//!
//! 1. [`automaton`] — input filtering, the palindrome verdict and the pure
//!    step-to-state derivation ([`automaton::StepView`]).
//! 2. [`controller`] — owns the walkthrough state and the single animation
//!    timer.
//! 3. [`ui`] — ratatui-based TUI; not part of the stable library API.
//! 4. [`trace`] — the same walkthrough printed as text.
//! 5. [`config`], [`logging`], [`error`] — command-line surface.
//!
//! ## Limits
//!
//! Input is lowercase `a..=z` only, at most [`automaton::MAX_LENGTH`]
//! characters. States and transitions are fixed; this is not a general
//! automaton simulator.

pub mod automaton;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod trace;
pub mod ui;
