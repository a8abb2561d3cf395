//! Explanation of how the automaton checks palindromes

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

const STEPS: [&str; 4] = [
    "Reading the input string forward while pushing characters onto a stack",
    "Non-deterministically guessing the middle of the string",
    "Reading the rest of the input while comparing with popped stack characters",
    "Accepting if all characters match (palindrome) or rejecting otherwise",
];

/// Borders plus horizontal padding
const FRAME_WIDTH: u16 = 4;
const BORDER_HEIGHT: u16 = 2;

fn info_lines() -> Vec<Line<'static>> {
    let text_style = Style::default().fg(DEFAULT_THEME.comment);
    let mut lines = vec![Line::from(Span::styled(
        "A Non-deterministic Finite Automaton (NFA) with reversal checks palindromes by:",
        text_style,
    ))];
    for (i, step) in STEPS.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}. ", i + 1), Style::default().fg(DEFAULT_THEME.primary)),
            Span::styled(*step, text_style),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled(
            "Example: ",
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "For \"racecar\", the NFA reads \"race\", guesses the middle 'c', \
             then verifies \"car\" matches the reversed \"rac\" from the stack.",
            text_style,
        ),
    ]));
    lines
}

/// Rows `text` takes when word-wrapped to `width` columns
fn wrapped_rows(text: &str, width: usize) -> usize {
    if width == 0 {
        return 1;
    }
    let mut rows = 1;
    let mut col = 0;
    for (i, word) in text.split(' ').enumerate() {
        let w = word.chars().count();
        let needed = if i == 0 { w } else { col + 1 + w };
        if needed <= width {
            col = needed;
        } else {
            // Words longer than a row are broken across rows
            let fresh = usize::from(i > 0);
            let extra = w.saturating_sub(1) / width;
            rows += fresh + extra;
            col = w - extra * width;
        }
    }
    rows
}

/// Height the pane needs at `width` to show every line
pub fn info_height(width: u16) -> u16 {
    let content_width = width.saturating_sub(FRAME_WIDTH) as usize;
    let rows: usize = info_lines()
        .iter()
        .map(|line| {
            let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            wrapped_rows(&text, content_width)
        })
        .sum();
    rows as u16 + BORDER_HEIGHT
}

pub fn render_info_pane(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" ℹ How NFA with Reversal Works ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::horizontal(1));

    let paragraph = Paragraph::new(info_lines())
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
