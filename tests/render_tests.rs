// Rendering the full app into an in-memory terminal

use palindrome_nfa::controller::Controller;
use palindrome_nfa::ui::App;
use ratatui::{backend::TestBackend, Terminal};
use std::time::{Duration, Instant};

fn draw(app: &App) -> String {
    draw_sized(app, 110, 45)
}

fn draw_sized(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal.draw(|f| app.render(f)).expect("draw");

    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn app_with(input: &str) -> App {
    let mut controller = Controller::new(Duration::from_millis(500));
    controller.set_input(input);
    App::new(controller)
}

#[test]
fn test_empty_input_has_no_visualization() {
    let screen = draw(&app_with(""));
    assert!(screen.contains("Palindrome Checker"));
    assert!(screen.contains("0/7"));
    assert!(!screen.contains("NFA State Diagram"));
    assert!(!screen.contains("Accepted!"));
}

#[test]
fn test_accept_banner_and_panel() {
    let screen = draw(&app_with("racecar"));
    assert!(screen.contains("7/7"));
    assert!(screen.contains("Accepted! \"racecar\" is a palindrome"));
    assert!(screen.contains("NFA State Diagram"));
    assert!(screen.contains("Stack (Conceptual)"));
}

#[test]
fn test_reject_banner() {
    let screen = draw(&app_with("hello"));
    assert!(screen.contains("Rejected! \"hello\" is not a palindrome"));
    assert!(screen.contains("REJECT"));
}

#[test]
fn test_banner_hidden_while_animating() {
    let t0 = Instant::now();
    let mut app = app_with("level");
    assert!(app.controller.start_check(t0));
    app.controller.poll_timer(t0 + Duration::from_millis(500));

    let screen = draw(&app);
    assert!(!screen.contains("Accepted!"));
    assert!(screen.contains("Processing..."));
    assert!(screen.contains("ANIMATING"));
    assert!(screen.contains("Pushing characters..."));
}

#[test]
fn test_info_pane_shows_whole_example() {
    let screen = draw(&app_with("racecar"));
    assert!(screen.contains("How NFA with Reversal Works"));
    assert!(screen.contains("from the stack."));
}

#[test]
fn test_small_terminal_keeps_input_card_while_animating() {
    let t0 = Instant::now();
    let mut app = app_with("racecar");
    assert!(app.controller.start_check(t0));
    for k in 1..=3u32 {
        app.controller.poll_timer(t0 + Duration::from_millis(500) * k);
    }

    let screen = draw_sized(&app, 80, 24);
    assert!(screen.contains("7/7"));
    assert!(screen.contains("> racecar"));
    assert!(screen.contains("NFA State Diagram"));
    // The info pane is the first to give way
    assert!(!screen.contains("How NFA with Reversal Works"));
}

#[test]
fn test_small_terminal_keeps_result_banner() {
    let screen = draw_sized(&app_with("racecar"), 80, 24);
    assert!(screen.contains("7/7"));
    assert!(screen.contains("> racecar"));
    assert!(screen.contains("Accepted! \"racecar\" is a palindrome"));
}

#[test]
fn test_small_terminal_without_input_shows_info() {
    let screen = draw_sized(&app_with(""), 80, 24);
    assert!(screen.contains("0/7"));
    assert!(screen.contains("How NFA with Reversal Works"));
    assert!(screen.contains("from the stack."));
}
