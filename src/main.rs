// palindrome-nfa: step through a palindrome-checking automaton

use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use palindrome_nfa::config::{Cli, Settings};
use palindrome_nfa::controller::Controller;
use palindrome_nfa::error::AppError;
use palindrome_nfa::{logging, trace, ui::App};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = match Cli::parse().into_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    logging::init(&settings)?;

    if settings.trace {
        let stdout = io::stdout();
        trace::write_trace(&mut stdout.lock(), &settings.input)?;
        return Ok(());
    }

    if let Err(err) = run_tui(&settings) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    Ok(())
}

fn run_tui(settings: &Settings) -> Result<(), AppError> {
    let mut controller = Controller::new(settings.tick_interval);
    if !settings.input.is_empty() {
        controller.set_input(&settings.input);
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(controller);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("exiting");
    res.map_err(AppError::from)
}
