//! Status bar rendering with keybindings and state indicators

use crate::automaton::Verdict;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub step: usize,
    pub total_ticks: usize,
    pub is_animating: bool,
    pub can_check: bool,
    pub can_reset: bool,
    pub result: Option<Verdict>,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let step_text = format!(" Step {}/{} ", data.step, data.total_ticks);
    let left_spans = vec![
        Span::styled(
            step_text,
            Style::default()
                .bg(if data.is_animating {
                    DEFAULT_THEME.accent
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.highlight_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(DEFAULT_THEME.highlight_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.highlight_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Disabled controls keep their slot but are greyed out
    let key_style = |enabled: bool| {
        if enabled {
            Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black)
        } else {
            Style::default()
                .bg(DEFAULT_THEME.highlight_bg)
                .fg(DEFAULT_THEME.comment)
                .add_modifier(Modifier::DIM)
        }
    };
    let desc_style = |enabled: bool| {
        let style = Style::default().bg(DEFAULT_THEME.highlight_bg);
        if enabled {
            style.fg(DEFAULT_THEME.fg)
        } else {
            style.fg(DEFAULT_THEME.comment).add_modifier(Modifier::DIM)
        }
    };
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.highlight_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" a-z ", key_style(data.can_reset)),
        Span::styled(" type ", desc_style(data.can_reset)),
        Span::styled("│", sep_style),
        Span::styled(" ↵ ", key_style(data.can_check)),
        Span::styled(" check ", desc_style(data.can_check)),
        Span::styled("│", sep_style),
        Span::styled(" ^R ", key_style(data.can_reset)),
        Span::styled(" reset ", desc_style(data.can_reset)),
        Span::styled("│", sep_style),
        Span::styled(" esc ", key_style(true)),
        Span::styled(" quit ", desc_style(true)),
    ];

    let indicator = if data.is_animating {
        Some((" ▶ ANIMATING ", DEFAULT_THEME.accent))
    } else {
        match data.result {
            Some(Verdict::Accept) => Some((" ACCEPT ", DEFAULT_THEME.success)),
            Some(Verdict::Reject) => Some((" REJECT ", DEFAULT_THEME.error)),
            None => None,
        }
    };
    if let Some((text, color)) = indicator {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            text,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.highlight_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
