//! State diagram rendering
//!
//! Draws the four nodes `q0 → q1 → q2 → final` in a row and highlights the
//! node for the current [`AutomatonState`]. The final node shows `?` until the
//! walkthrough reaches it, then `✓` or `✗`.

use crate::automaton::AutomatonState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

const NODE_WIDTH: u16 = 9;
const LABEL_WIDTH: u16 = 15;
const ARROW_WIDTH: u16 = 5;

/// One node of the diagram as it should be drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramNode {
    pub symbol: &'static str,
    pub label: &'static str,
    pub active: bool,
    pub color: Color,
}

/// The four diagram nodes for `current`
pub fn diagram_nodes(current: AutomatonState) -> [DiagramNode; 4] {
    let final_node = match current {
        AutomatonState::Accept => DiagramNode {
            symbol: "✓",
            label: "Accept",
            active: true,
            color: DEFAULT_THEME.success,
        },
        AutomatonState::Reject => DiagramNode {
            symbol: "✗",
            label: "Reject",
            active: true,
            color: DEFAULT_THEME.error,
        },
        _ => DiagramNode {
            symbol: "?",
            label: "Final",
            active: false,
            color: DEFAULT_THEME.comment,
        },
    };

    [
        DiagramNode {
            symbol: AutomatonState::Start.symbol(),
            label: AutomatonState::Start.label(),
            active: current == AutomatonState::Start,
            color: DEFAULT_THEME.primary,
        },
        DiagramNode {
            symbol: AutomatonState::Push.symbol(),
            label: AutomatonState::Push.label(),
            active: current == AutomatonState::Push,
            color: DEFAULT_THEME.primary,
        },
        DiagramNode {
            symbol: AutomatonState::PopCompare.symbol(),
            label: AutomatonState::PopCompare.label(),
            active: current == AutomatonState::PopCompare,
            color: DEFAULT_THEME.accent,
        },
        final_node,
    ]
}

/// Render the state diagram into `area` (needs 4 rows)
pub fn render_state_diagram(frame: &mut Frame, area: Rect, current: AutomatonState) {
    let nodes = diagram_nodes(current);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .flex(Flex::Center)
        .constraints([
            Constraint::Length(LABEL_WIDTH),
            Constraint::Length(ARROW_WIDTH),
            Constraint::Length(LABEL_WIDTH),
            Constraint::Length(ARROW_WIDTH),
            Constraint::Length(LABEL_WIDTH),
            Constraint::Length(ARROW_WIDTH),
            Constraint::Length(LABEL_WIDTH),
        ])
        .split(area);

    for (i, node) in nodes.iter().enumerate() {
        render_node(frame, columns[i * 2], node);
        if i < nodes.len() - 1 {
            let arrow = Paragraph::new("\n ──▶")
                .style(Style::default().fg(DEFAULT_THEME.comment));
            frame.render_widget(arrow, columns[i * 2 + 1]);
        }
    }
}

fn render_node(frame: &mut Frame, area: Rect, node: &DiagramNode) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let circle = Layout::default()
        .direction(Direction::Horizontal)
        .flex(Flex::Center)
        .constraints([Constraint::Length(NODE_WIDTH)])
        .split(rows[0])[0];

    let (border_style, border_type) = if node.active {
        (
            Style::default().fg(node.color).add_modifier(Modifier::BOLD),
            BorderType::Thick,
        )
    } else {
        (
            Style::default().fg(DEFAULT_THEME.border_normal),
            BorderType::Rounded,
        )
    };

    let mut symbol_style = Style::default().add_modifier(Modifier::BOLD);
    symbol_style = if node.active {
        symbol_style.fg(node.color).bg(DEFAULT_THEME.highlight_bg)
    } else {
        symbol_style.fg(DEFAULT_THEME.fg)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);
    let symbol = Paragraph::new(node.symbol)
        .style(symbol_style)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(symbol, circle);

    let label_style = if node.active {
        Style::default().fg(node.color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.comment)
    };
    let label = Paragraph::new(node.label)
        .style(label_style)
        .alignment(Alignment::Center);
    frame.render_widget(label, rows[1]);
}
