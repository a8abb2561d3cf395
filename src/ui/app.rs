//! Main TUI application state and logic

use crate::automaton::{Verdict, MAX_LENGTH};
use crate::controller::Controller;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use super::panes::{
    info_height, render_info_pane, render_input_pane, render_stack_pane, render_state_diagram,
    render_status_bar, render_tape_pane, InputRenderData, StatusRenderData,
};
use super::theme::DEFAULT_THEME;

const HEADER_HEIGHT: u16 = 2;
const INPUT_HEIGHT: u16 = 7;
const STATUS_HEIGHT: u16 = 1;
/// Rows below which the info pane gives way to the visualization
const VISUALIZATION_MIN_HEIGHT: u16 = 17;

/// Longest the event loop waits for input before checking the timer again
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// The main application state
pub struct App {
    /// The walkthrough controller
    pub controller: Controller,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(controller: Controller) -> Self {
        App {
            controller,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let now = Instant::now();
            self.on_timer(now);

            // Wake up in time for the next tick
            let timeout = self
                .controller
                .next_tick_in(now)
                .map_or(POLL_INTERVAL, |left| left.min(POLL_INTERVAL));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key, Instant::now());
                    }
                }
            }
        }

        Ok(())
    }

    /// Drive the animation timer
    pub fn on_timer(&mut self, now: Instant) {
        if !self.controller.poll_timer(now) {
            return;
        }
        if self.controller.is_animating() {
            self.status_message = format!(
                "Processing \"{}\"...",
                self.controller.input()
            );
        } else {
            self.status_message = match self.controller.result() {
                Some(Verdict::Accept) => "Walkthrough complete: accepted".to_string(),
                Some(Verdict::Reject) => "Walkthrough complete: rejected".to_string(),
                None => "Walkthrough complete".to_string(),
            };
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
            }
            KeyCode::Char('r') if ctrl => {
                if self.controller.reset() {
                    self.status_message = "Reset".to_string();
                }
            }
            KeyCode::Enter => {
                if self.controller.start_check(now) {
                    self.status_message =
                        format!("Checking \"{}\"...", self.controller.input());
                }
            }
            KeyCode::Backspace => {
                if self.controller.pop_char() {
                    self.status_message = "Editing".to_string();
                }
            }
            KeyCode::Char(c) if !ctrl => {
                if !self.controller.can_edit() {
                    return;
                }
                if self.controller.push_char(c) {
                    self.status_message = "Editing".to_string();
                } else {
                    self.status_message =
                        format!("Input is limited to {} letters", MAX_LENGTH);
                }
            }
            _ => {}
        }
    }

    /// Render the UI
    ///
    /// The header, input card and status bar always keep their rows. The
    /// info pane is dropped first when the terminal is too short.
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();
        let show_visualization = !self.controller.input().is_empty();

        let fixed = HEADER_HEIGHT + INPUT_HEIGHT + STATUS_HEIGHT;
        let spare = size.height.saturating_sub(fixed);
        let wanted_info = info_height(size.width);
        let info_rows = if show_visualization {
            if spare >= VISUALIZATION_MIN_HEIGHT + wanted_info {
                wanted_info
            } else {
                0
            }
        } else {
            wanted_info.min(spare)
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(info_rows),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(size);

        render_header(frame, chunks[0]);

        render_input_pane(
            frame,
            chunks[1],
            InputRenderData {
                input: self.controller.input(),
                result: self.controller.result(),
                is_animating: self.controller.is_animating(),
            },
        );

        if show_visualization {
            self.render_visualization(frame, chunks[2]);
        }

        if info_rows > 0 {
            render_info_pane(frame, chunks[3]);
        }

        render_status_bar(
            frame,
            chunks[4],
            StatusRenderData {
                message: &self.status_message,
                step: self.controller.step(),
                total_ticks: self.controller.total_ticks(),
                is_animating: self.controller.is_animating(),
                can_check: self.controller.can_check(),
                can_reset: self.controller.can_edit(),
                result: self.controller.result(),
            },
        );
    }

    fn render_visualization(&self, frame: &mut Frame, area: Rect) {
        let view = self.controller.view();

        let border_style = if view.is_animating {
            Style::default()
                .fg(DEFAULT_THEME.border_active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.border_normal)
        };
        let block = Block::default()
            .title(" NFA State Diagram ")
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(4),
                Constraint::Length(if inner.height < VISUALIZATION_MIN_HEIGHT { 0 } else { 1 }),
                Constraint::Min(0),
            ])
            .split(inner);

        let subtitle = Paragraph::new(format!(" {}", view.subtitle()))
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(subtitle, rows[0]);

        render_state_diagram(frame, rows[1], view.state);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[3]);

        render_tape_pane(frame, bottom[0], &view);
        render_stack_pane(frame, bottom[1], &view);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Palindrome Checker",
            Style::default()
                .fg(DEFAULT_THEME.title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "NFA with Reversal - Accepts strings that read the same forwards and backwards",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    ];
    let header = Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(header, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode, now: Instant) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    fn type_text(app: &mut App, text: &str, now: Instant) {
        for c in text.chars() {
            press(app, KeyCode::Char(c), now);
        }
    }

    #[test]
    fn test_typing_filters_live() {
        let now = Instant::now();
        let mut app = App::new(Controller::default());
        type_text(&mut app, "Race1Car!", now);
        assert_eq!(app.controller.input(), "racecar");
    }

    #[test]
    fn test_typing_stops_at_limit() {
        let now = Instant::now();
        let mut app = App::new(Controller::default());
        type_text(&mut app, "abcdefgh", now);
        assert_eq!(app.controller.input(), "abcdefg");
        assert_eq!(app.status_message, "Input is limited to 7 letters");
    }

    #[test]
    fn test_enter_starts_and_typing_is_ignored() {
        let now = Instant::now();
        let mut app = App::new(Controller::default());
        type_text(&mut app, "abba", now);
        press(&mut app, KeyCode::Enter, now);
        assert!(app.controller.is_animating());

        type_text(&mut app, "x", now);
        press(&mut app, KeyCode::Backspace, now);
        assert_eq!(app.controller.input(), "abba");
    }

    #[test]
    fn test_ctrl_r_resets_and_esc_quits() {
        let now = Instant::now();
        let mut app = App::new(Controller::default());
        type_text(&mut app, "abc", now);
        app.handle_key_event(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL), now);
        assert_eq!(app.controller.input(), "");
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc, now);
        assert!(app.should_quit);
    }

    #[test]
    fn test_timer_reports_completion() {
        let t0 = Instant::now();
        let interval = Duration::from_millis(10);
        let mut app = App::new(Controller::new(interval));
        type_text(&mut app, "a", t0);
        press(&mut app, KeyCode::Enter, t0);

        app.on_timer(t0 + interval);
        assert!(app.controller.is_animating());
        app.on_timer(t0 + interval * 2);
        app.on_timer(t0 + interval * 3);
        assert!(!app.controller.is_animating());
        assert_eq!(app.status_message, "Walkthrough complete: accepted");
    }
}
