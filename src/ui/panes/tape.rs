//! String processing pane: one cell per input character

use crate::automaton::StepView;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

const CELL_WIDTH: u16 = 5;

/// Render the input characters, highlighting the one being read
pub fn render_tape_pane(frame: &mut Frame, area: Rect, view: &StepView) {
    let block = Block::default()
        .title(" String Processing ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if view.chars.is_empty() {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .flex(Flex::Center)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(inner);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .flex(Flex::Center)
        .spacing(1)
        .constraints(vec![Constraint::Length(CELL_WIDTH); view.chars.len()])
        .split(rows[0]);

    let highlighted = view.highlighted();
    for (index, (c, cell)) in view.chars.iter().zip(cells.iter()).enumerate() {
        let active = highlighted == Some(index);
        let (border_style, border_type, text_style) = if active {
            (
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
                BorderType::Thick,
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .bg(DEFAULT_THEME.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                Style::default().fg(DEFAULT_THEME.border_normal),
                BorderType::Rounded,
                Style::default().fg(DEFAULT_THEME.fg).add_modifier(Modifier::BOLD),
            )
        };

        let paragraph = Paragraph::new(c.to_string())
            .style(text_style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(border_type)
                    .border_style(border_style),
            );
        frame.render_widget(paragraph, *cell);
    }

    // Index row under the cells, marking the midpoint
    let midpoint = view.midpoint();
    let marker = (0..view.chars.len())
        .map(|i| {
            if i + 1 == midpoint {
                format!("{:^width$}", "mid", width = CELL_WIDTH as usize)
            } else {
                format!("{:^width$}", i, width = CELL_WIDTH as usize)
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let marker = Paragraph::new(marker)
        .style(Style::default().fg(DEFAULT_THEME.comment))
        .alignment(Alignment::Center);
    frame.render_widget(marker, rows[1]);
}
