//! Step-indexed derivation of the automaton state
//!
//! Nothing here is stored between ticks. Every value is recomputed from
//! `(input, step, is_animating)`, so the conceptual stack is a slice of the
//! input rather than a structure that is pushed to and popped from.

use super::is_palindrome;

/// Automaton states, in walkthrough order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutomatonState {
    /// q0, nothing read yet
    Start,
    /// q1, reading forward and pushing
    Push,
    /// q2, reading backward, popping and comparing
    PopCompare,
    Accept,
    Reject,
}

impl AutomatonState {
    /// Derive the state for `step` on an input of `len` characters.
    ///
    /// `palindrome` only matters once the walkthrough is past `2 * len`.
    pub fn at(step: usize, len: usize, palindrome: bool) -> Self {
        if step == 0 {
            AutomatonState::Start
        } else if step <= len {
            AutomatonState::Push
        } else if step <= len * 2 {
            AutomatonState::PopCompare
        } else if palindrome {
            AutomatonState::Accept
        } else {
            AutomatonState::Reject
        }
    }

    /// Short label shown in the state diagram
    pub fn symbol(self) -> &'static str {
        match self {
            AutomatonState::Start => "q₀",
            AutomatonState::Push => "q₁",
            AutomatonState::PopCompare => "q₂",
            AutomatonState::Accept => "✓",
            AutomatonState::Reject => "✗",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AutomatonState::Start => "Start",
            AutomatonState::Push => "Push",
            AutomatonState::PopCompare => "Pop & Compare",
            AutomatonState::Accept => "Accept",
            AutomatonState::Reject => "Reject",
        }
    }
}

/// Index of the input character read at `step`, if any.
///
/// Counts up through the forward scan and back down through the backward
/// scan. Steps that fall outside the input (step 0, or past `2 * len`)
/// yield `None`.
pub fn processing_index(step: usize, len: usize) -> Option<usize> {
    let index = if step <= len {
        step.checked_sub(1)?
    } else {
        (len * 2).checked_sub(step)?
    };
    (index < len).then_some(index)
}

/// Characters on the conceptual stack at `step`, bottom first
pub fn stack_slice(chars: &[char], step: usize, state: AutomatonState) -> Vec<char> {
    let len = chars.len();
    let midpoint = len.div_ceil(2);

    match state {
        AutomatonState::Push => chars[..step.min(midpoint)].to_vec(),
        AutomatonState::PopCompare => {
            // After (step - len) pops from the top of the first half
            let popped = step.saturating_sub(len);
            chars[..midpoint.saturating_sub(popped)].to_vec()
        }
        AutomatonState::Start | AutomatonState::Accept | AutomatonState::Reject => Vec::new(),
    }
}

/// Everything the visualization needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    pub chars: Vec<char>,
    pub step: usize,
    pub state: AutomatonState,
    pub processing_index: Option<usize>,
    pub stack: Vec<char>,
    pub is_animating: bool,
}

impl StepView {
    pub fn derive(input: &str, step: usize, is_animating: bool) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let len = chars.len();
        let state = AutomatonState::at(step, len, is_palindrome(input));
        let stack = stack_slice(&chars, step, state);

        StepView {
            processing_index: processing_index(step, len),
            chars,
            step,
            state,
            stack,
            is_animating,
        }
    }

    pub fn midpoint(&self) -> usize {
        self.chars.len().div_ceil(2)
    }

    /// The character cell to highlight; only while the animation runs
    pub fn highlighted(&self) -> Option<usize> {
        if self.is_animating {
            self.processing_index
        } else {
            None
        }
    }

    pub fn subtitle(&self) -> &'static str {
        if self.is_animating {
            "Processing..."
        } else {
            "Current state visualization"
        }
    }

    pub fn stack_caption(&self) -> &'static str {
        match self.state {
            AutomatonState::Start => "",
            AutomatonState::Push => "Pushing characters...",
            AutomatonState::PopCompare => "Popping and comparing...",
            AutomatonState::Accept | AutomatonState::Reject => "Stack empty",
        }
    }
}
