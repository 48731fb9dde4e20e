//! TUI mode execution

use super::messages::{print_session_exit_success, print_session_starting};
use crate::error::AppError;
use crate::record::ChildRecord;
use crate::ui::{self, UIConfig};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};

type TuiTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Runs the application in TUI mode
///
/// This function handles:
/// 1. Terminal setup and cleanup
/// 2. UI application initialization and execution
///
/// The terminal is restored before any setup or UI loop error is returned.
pub async fn run_tui_mode(ui_config: UIConfig) -> Result<(), AppError> {
    print_session_starting("TUI");

    // Built before raw mode so a failure here leaves the terminal untouched
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let result = match enter_tui(&mut terminal) {
        Ok(()) => {
            let app = ui::App::new(ChildRecord::sample(), ui_config);
            ui::run(&mut terminal, app).await
        }
        Err(e) => Err(e),
    };

    let restored = restore_terminal(&mut terminal);
    result?;
    restored?;
    print_session_exit_success();

    Ok(())
}

fn enter_tui(terminal: &mut TuiTerminal) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(terminal.backend_mut(), EnterAlternateScreen, EnableMouseCapture)
}

/// Runs every cleanup step, even when an earlier one fails.
fn restore_terminal(terminal: &mut TuiTerminal) -> io::Result<()> {
    first_error([
        disable_raw_mode(),
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        ),
        terminal.show_cursor(),
    ])
}

/// Returns the first error of steps that have all already run.
fn first_error<const N: usize>(steps: [io::Result<()>; N]) -> io::Result<()> {
    steps.into_iter().collect()
}
