//! Conceptual stack rendering
//!
//! The stack is drawn top first, so the bottom of the stack sits at the
//! bottom of the list. Push-phase entries use the primary color, pop-phase
//! entries the accent color.

use crate::automaton::{AutomatonState, StepView};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Stack rows, top of the stack first
pub fn stack_rows(view: &StepView) -> Vec<String> {
    view.stack.iter().rev().map(|c| format!("│ {} │", c)).collect()
}

/// Render the stack pane
pub fn render_stack_pane(frame: &mut Frame, area: Rect, view: &StepView) {
    let block = Block::default()
        .title(" Stack (Conceptual) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let color = if view.state == AutomatonState::PopCompare {
        DEFAULT_THEME.accent
    } else {
        DEFAULT_THEME.primary
    };

    let entries = stack_rows(view);
    let visible_height = rows[0].height as usize;
    // Keep the bottom of the stack anchored to the bottom of the pane
    let padding = visible_height.saturating_sub(entries.len() + 1);

    let mut items: Vec<ListItem> = (0..padding).map(|_| ListItem::new("")).collect();
    let last = entries.len().saturating_sub(1);
    for (depth, entry) in entries.into_iter().enumerate() {
        let mut spans = vec![Span::styled(
            entry,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )];
        if depth == 0 {
            spans.push(Span::styled(" ← top", Style::default().fg(DEFAULT_THEME.comment)));
        } else if depth == last {
            spans.push(Span::styled(" ← bottom", Style::default().fg(DEFAULT_THEME.comment)));
        }
        items.push(ListItem::new(Line::from(spans)));
    }
    items.push(ListItem::new(Line::from(Span::styled(
        "└───┘",
        Style::default().fg(DEFAULT_THEME.border_normal),
    ))));

    frame.render_widget(List::new(items), rows[0]);

    let caption = Paragraph::new(view.stack_caption()).style(
        Style::default()
            .fg(DEFAULT_THEME.comment)
            .add_modifier(Modifier::ITALIC),
    );
    frame.render_widget(caption, rows[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_top_first() {
        let view = StepView::derive("level", 3, true);
        assert_eq!(view.stack, vec!['l', 'e', 'v']);
        assert_eq!(stack_rows(&view), vec!["│ v │", "│ e │", "│ l │"]);
    }

    #[test]
    fn test_start_has_no_rows() {
        let view = StepView::derive("level", 0, false);
        assert!(stack_rows(&view).is_empty());
        assert_eq!(view.stack_caption(), "");
    }
}
