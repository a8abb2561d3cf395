//! Input card: prompt, length badge, text field and result banner

use crate::automaton::{Verdict, MAX_LENGTH};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Data needed to render the input card
pub struct InputRenderData<'a> {
    pub input: &'a str,
    pub result: Option<Verdict>,
    pub is_animating: bool,
}

/// Text of the result banner, if one should be shown.
///
/// The banner is hidden while animating and when there is no verdict.
pub fn result_banner(data: &InputRenderData) -> Option<(Verdict, String)> {
    if data.is_animating {
        return None;
    }
    let verdict = data.result?;
    let text = match verdict {
        Verdict::Accept => format!("Accepted! \"{}\" is a palindrome", data.input),
        Verdict::Reject => format!("Rejected! \"{}\" is not a palindrome", data.input),
    };
    Some((verdict, text))
}

/// Render the input card
pub fn render_input_pane(frame: &mut Frame, area: Rect, data: InputRenderData) {
    let border_style = if data.is_animating {
        Style::default().fg(DEFAULT_THEME.border_normal)
    } else {
        Style::default()
            .fg(DEFAULT_THEME.border_active)
            .add_modifier(Modifier::BOLD)
    };

    let block = Block::default()
        .title(" Input ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let prompt = Line::from(vec![
        Span::styled(
            format!("Enter a string (a-z only, max {} characters): ", MAX_LENGTH),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        Span::styled(
            format!(" {}/{} ", data.input.len(), MAX_LENGTH),
            Style::default()
                .bg(DEFAULT_THEME.comment)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    // The field takes the verdict color, and dims while disabled
    let field_color = match data.result {
        Some(Verdict::Accept) => DEFAULT_THEME.success,
        Some(Verdict::Reject) => DEFAULT_THEME.error,
        None => DEFAULT_THEME.fg,
    };
    let field = if data.input.is_empty() {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                "e.g., racecar, level, a",
                Style::default()
                    .fg(DEFAULT_THEME.comment)
                    .add_modifier(Modifier::ITALIC),
            ),
        ])
    } else {
        let mut style = Style::default().fg(field_color).add_modifier(Modifier::BOLD);
        if data.is_animating {
            style = style.add_modifier(Modifier::DIM);
        }
        let mut spans = vec![
            Span::styled("> ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(data.input.to_string(), style),
        ];
        if !data.is_animating {
            spans.push(Span::styled("▏", Style::default().fg(DEFAULT_THEME.fg)));
        }
        Line::from(spans)
    };

    let mut lines = vec![prompt, Line::default(), field, Line::default()];

    if let Some((verdict, text)) = result_banner(&data) {
        let (icon, color) = match verdict {
            Verdict::Accept => ("✔ ", DEFAULT_THEME.success),
            Verdict::Reject => ("✘ ", DEFAULT_THEME.error),
        };
        lines.push(
            Line::from(vec![
                Span::styled(icon, Style::default().fg(color)),
                Span::styled(
                    text,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ])
            .alignment(Alignment::Center),
        );
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_hidden_while_animating() {
        let data = InputRenderData {
            input: "abba",
            result: Some(Verdict::Accept),
            is_animating: true,
        };
        assert_eq!(result_banner(&data), None);
    }

    #[test]
    fn test_banner_includes_input() {
        let data = InputRenderData {
            input: "hello",
            result: Some(Verdict::Reject),
            is_animating: false,
        };
        assert_eq!(
            result_banner(&data),
            Some((
                Verdict::Reject,
                "Rejected! \"hello\" is not a palindrome".to_string()
            ))
        );
    }

    #[test]
    fn test_no_banner_without_result() {
        let data = InputRenderData {
            input: "",
            result: None,
            is_animating: false,
        };
        assert_eq!(result_banner(&data), None);
    }
}
