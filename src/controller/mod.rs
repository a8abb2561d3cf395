//! Walkthrough controller
//!
//! [`Controller`] owns the input string, the step counter, the verdict and the
//! animation timer. The animating flag is not a separate field: the
//! controller is animating exactly while it holds an [`AnimationTimer`], so
//! there can never be more than one timer and the flag can never go stale.
//!
//! Guards are no-ops rather than errors. While animating, input changes,
//! resets and repeated checks are ignored.

pub mod timer;

pub use timer::{AnimationTimer, DEFAULT_TICK_INTERVAL};

use crate::automaton::{self, input::sanitize_input, StepView, Verdict};
use std::time::{Duration, Instant};

/// An animation in progress
#[derive(Debug)]
struct Animation {
    timer: AnimationTimer,
    total_ticks: usize,
    verdict: Verdict,
}

#[derive(Debug)]
pub struct Controller {
    input: String,
    step: usize,
    result: Option<Verdict>,
    animation: Option<Animation>,
    tick_interval: Duration,
}

impl Controller {
    pub fn new(tick_interval: Duration) -> Self {
        Controller {
            input: String::new(),
            step: 0,
            result: None,
            animation: None,
            tick_interval,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn result(&self) -> Option<Verdict> {
        self.result
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether the Check control is enabled
    pub fn can_check(&self) -> bool {
        !self.input.is_empty() && !self.is_animating()
    }

    /// Whether the Reset control and the input field are enabled
    pub fn can_edit(&self) -> bool {
        !self.is_animating()
    }

    /// Ticks in a full walkthrough of the current input
    pub fn total_ticks(&self) -> usize {
        automaton::total_ticks(self.input.len())
    }

    /// Replace the input with the sanitized form of `raw`.
    ///
    /// Returns `false` when the value was ignored, either because an
    /// animation is running or because it is longer than
    /// [`MAX_LENGTH`](automaton::MAX_LENGTH) after filtering.
    pub fn set_input(&mut self, raw: &str) -> bool {
        if self.is_animating() {
            tracing::debug!("input ignored while animating");
            return false;
        }
        let Some(value) = sanitize_input(raw) else {
            tracing::debug!(raw, "input ignored, too long");
            return false;
        };

        tracing::debug!(input = %value, "input changed");
        self.input = value;
        self.result = None;
        self.step = 0;
        self.refresh_verdict();
        true
    }

    /// Append a typed character
    pub fn push_char(&mut self, c: char) -> bool {
        let mut raw = self.input.clone();
        raw.push(c);
        self.set_input(&raw)
    }

    /// Delete the last character
    pub fn pop_char(&mut self) -> bool {
        let mut raw = self.input.clone();
        if raw.pop().is_none() {
            return false;
        }
        self.set_input(&raw)
    }

    /// Publish the verdict for the current input without animating.
    ///
    /// Does nothing for empty input or while animating.
    pub fn refresh_verdict(&mut self) -> Option<Verdict> {
        if !self.input.is_empty() && !self.is_animating() {
            self.result = Some(Verdict::from_bool(automaton::check_palindrome(
                &self.input,
            )));
        }
        self.result
    }

    /// Begin the animated walkthrough.
    ///
    /// Returns `false` without touching any state when the input is empty or
    /// an animation is already running.
    pub fn start_check(&mut self, now: Instant) -> bool {
        if self.input.is_empty() {
            return false;
        }
        if self.is_animating() {
            tracing::debug!(step = self.step, "check ignored, already animating");
            return false;
        }

        let verdict = Verdict::from_bool(automaton::check_palindrome(&self.input));
        let total_ticks = self.total_ticks();
        tracing::info!(input = %self.input, total_ticks, "check started");

        self.step = 0;
        self.animation = Some(Animation {
            timer: AnimationTimer::start(self.tick_interval, now),
            total_ticks,
            verdict,
        });
        true
    }

    /// Advance the animation if its timer is due at `now`.
    ///
    /// Returns whether a tick fired.
    pub fn poll_timer(&mut self, now: Instant) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };
        if !animation.timer.fire(now) {
            return false;
        }

        self.step += 1;
        tracing::trace!(step = self.step, "tick");

        if self.step >= animation.total_ticks {
            let verdict = animation.verdict;
            self.animation = None;
            self.result = Some(verdict);
            tracing::info!(input = %self.input, ?verdict, "check finished");
        }
        true
    }

    /// Time until the next tick, if animating
    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        self.animation
            .as_ref()
            .map(|animation| animation.timer.remaining(now))
    }

    /// Clear input, verdict and step. Ignored while animating.
    pub fn reset(&mut self) -> bool {
        if self.is_animating() {
            return false;
        }
        tracing::debug!("reset");
        self.input.clear();
        self.result = None;
        self.step = 0;
        true
    }

    /// Derive the current frame of the visualization
    pub fn view(&self) -> StepView {
        StepView::derive(&self.input, self.step, self.is_animating())
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(500);

    fn controller_with(input: &str) -> Controller {
        let mut controller = Controller::new(INTERVAL);
        assert!(controller.set_input(input));
        controller
    }

    #[test]
    fn test_set_input_publishes_verdict() {
        let controller = controller_with("level");
        assert_eq!(controller.result(), Some(Verdict::Accept));

        let controller = controller_with("hello");
        assert_eq!(controller.result(), Some(Verdict::Reject));
    }

    #[test]
    fn test_empty_input_has_no_verdict() {
        let mut controller = controller_with("ab");
        assert!(controller.set_input(""));
        assert_eq!(controller.result(), None);
        assert!(!controller.can_check());
        assert!(!controller.start_check(Instant::now()));
        assert!(!controller.is_animating());
    }

    #[test]
    fn test_refresh_verdict_is_idempotent() {
        let mut controller = controller_with("abba");
        let first = controller.refresh_verdict();
        let second = controller.refresh_verdict();
        assert_eq!(first, Some(Verdict::Accept));
        assert_eq!(first, second);
    }

    #[test]
    fn test_over_long_input_is_ignored() {
        let mut controller = controller_with("abcdefg");
        assert!(!controller.push_char('h'));
        assert_eq!(controller.input(), "abcdefg");
    }

    #[test]
    fn test_pop_char() {
        let mut controller = controller_with("abc");
        assert!(controller.pop_char());
        assert_eq!(controller.input(), "ab");
        assert!(controller.pop_char());
        assert!(controller.pop_char());
        assert!(!controller.pop_char());
        assert_eq!(controller.result(), None);
    }

    #[test]
    fn test_animation_runs_to_completion() {
        let t0 = Instant::now();
        let mut controller = controller_with("aba");
        assert!(controller.start_check(t0));
        assert!(controller.is_animating());

        for k in 1..=7u32 {
            assert!(controller.poll_timer(t0 + INTERVAL * k));
            assert_eq!(controller.step(), k as usize);
        }
        assert!(!controller.is_animating());
        assert_eq!(controller.result(), Some(Verdict::Accept));
        assert!(!controller.poll_timer(t0 + INTERVAL * 8));
        assert_eq!(controller.step(), 7);
    }

    #[test]
    fn test_guards_while_animating() {
        let t0 = Instant::now();
        let mut controller = controller_with("ab");
        assert!(controller.start_check(t0));

        assert!(!controller.set_input("xyz"));
        assert!(!controller.push_char('c'));
        assert!(!controller.reset());
        assert_eq!(controller.input(), "ab");
        assert!(!controller.can_edit());
    }

    #[test]
    fn test_restart_while_animating_keeps_cadence() {
        let t0 = Instant::now();
        let mut controller = controller_with("abc");
        assert!(controller.start_check(t0));

        assert!(controller.poll_timer(t0 + INTERVAL));
        assert!(!controller.start_check(t0 + INTERVAL + Duration::from_millis(100)));
        assert!(!controller.poll_timer(t0 + INTERVAL + Duration::from_millis(200)));
        assert!(controller.poll_timer(t0 + INTERVAL * 2));
        assert_eq!(controller.step(), 2);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut controller = controller_with("noon");
        assert!(controller.reset());
        assert_eq!(controller.input(), "");
        assert_eq!(controller.result(), None);
        assert_eq!(controller.step(), 0);
    }

    #[test]
    fn test_next_tick_in() {
        let t0 = Instant::now();
        let mut controller = controller_with("a");
        assert_eq!(controller.next_tick_in(t0), None);
        controller.start_check(t0);
        assert_eq!(controller.next_tick_in(t0), Some(INTERVAL));
    }
}
