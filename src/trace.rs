//! Headless walkthrough
//!
//! Prints every step of the animation as one line of text, the same frames
//! the TUI would draw, followed by the verdict.

use crate::automaton::{self, StepView, Verdict};
use std::io::{self, Write};

/// One line describing `view`
pub fn format_step(view: &StepView) -> String {
    let reading = view
        .processing_index
        .and_then(|i| view.chars.get(i).map(|c| format!("{}@{}", c, i)))
        .unwrap_or_else(|| "-".to_string());
    let stack: String = view.stack.iter().collect();

    format!(
        "step {:>2}  {:<3} {:<14} read {:<4} stack [{}]",
        view.step,
        view.state.symbol(),
        view.state.label(),
        reading,
        stack
    )
}

/// Every frame of the walkthrough of `input`, step 0 through the final tick
pub fn walkthrough(input: &str) -> Vec<StepView> {
    (0..=automaton::total_ticks(input.len()))
        .map(|step| StepView::derive(input, step, true))
        .collect()
}

/// Write the walkthrough and the verdict to `out`
pub fn write_trace<W: Write>(out: &mut W, input: &str) -> io::Result<Verdict> {
    writeln!(out, "input \"{}\" ({} letters)", input, input.len())?;
    for view in walkthrough(input) {
        writeln!(out, "{}", format_step(&view))?;
    }

    let verdict = Verdict::from_bool(automaton::check_palindrome(input));
    match verdict {
        Verdict::Accept => writeln!(out, "Accepted! \"{}\" is a palindrome", input)?,
        Verdict::Reject => writeln!(out, "Rejected! \"{}\" is not a palindrome", input)?,
    }
    Ok(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::AutomatonState;

    #[test]
    fn test_walkthrough_length() {
        let frames = walkthrough("racecar");
        assert_eq!(frames.len(), 16);
        assert_eq!(frames[0].state, AutomatonState::Start);
        assert_eq!(frames[15].state, AutomatonState::Accept);
    }

    #[test]
    fn test_format_step() {
        let view = StepView::derive("abc", 2, true);
        let line = format_step(&view);
        assert!(line.contains("q₁"));
        assert!(line.contains("Push"));
        assert!(line.contains("b@1"));
        assert!(line.ends_with("stack [ab]"));
    }

    #[test]
    fn test_write_trace_reports_verdict() {
        let mut out = Vec::new();
        let verdict = write_trace(&mut out, "hello").unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(verdict, Verdict::Reject);
        assert!(text.starts_with("input \"hello\""));
        assert!(text.contains("Reject"));
        assert!(text.trim_end().ends_with("Rejected! \"hello\" is not a palindrome"));
    }
}
