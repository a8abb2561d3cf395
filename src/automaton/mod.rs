//! The palindrome automaton
//!
//! This module holds everything about the automaton that does not depend on a
//! terminal or a clock:
//!
//! - [`input`]: sanitizing raw text into the automaton's alphabet
//! - [`step`]: deriving the automaton state and the display slices from a step counter
//! - [`Verdict`]: the accept/reject outcome of a check
//!
//! # Phases
//!
//! For an input of length `L` the walkthrough has `2L + 1` ticks:
//!
//! ```text
//! step 0          q0  start
//! step 1..=L      q1  read forward, push
//! step L+1..=2L   q2  read backward, pop and compare
//! step > 2L           accept / reject
//! ```

pub mod input;
pub mod step;

pub use input::{filter_input, MAX_LENGTH};
pub use step::{AutomatonState, StepView};

/// Outcome of a palindrome check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Reject,
}

impl Verdict {
    pub fn from_bool(accepted: bool) -> Self {
        if accepted {
            Verdict::Accept
        } else {
            Verdict::Reject
        }
    }
}

/// Whether `s` reads the same forwards and backwards.
///
/// The empty string counts as a palindrome here; [`check_palindrome`] is the
/// bounded check used for verdicts.
pub fn is_palindrome(s: &str) -> bool {
    s.chars().eq(s.chars().rev())
}

/// The verdict check: empty or over-long input is never accepted
pub fn check_palindrome(s: &str) -> bool {
    let len = s.chars().count();
    if len == 0 || len > MAX_LENGTH {
        return false;
    }
    is_palindrome(s)
}

/// Number of timer ticks needed to walk an input of `len` characters
pub fn total_ticks(len: usize) -> usize {
    len * 2 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_palindrome_matches_reversal() {
        for s in ["a", "aa", "ab", "aba", "abca", "racecar", "level", "hello", "abcdcba"] {
            let reversed: String = s.chars().rev().collect();
            assert_eq!(check_palindrome(s), reversed == s, "input {:?}", s);
        }
    }

    #[test]
    fn test_check_palindrome_bounds() {
        assert!(!check_palindrome(""));
        assert!(is_palindrome(""));
        // Eight characters is past the limit even though it is a palindrome
        assert!(!check_palindrome("abcddcba"));
    }

    #[test]
    fn test_total_ticks() {
        assert_eq!(total_ticks(7), 15);
        assert_eq!(total_ticks(5), 11);
        assert_eq!(total_ticks(0), 1);
    }
}
