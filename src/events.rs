//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tracing::trace;

use crate::{
    animation::Playback,
    editor::{Direction, EditMode},
    types::{MainMenuItem, Screen},
    App,
};

/// Longest text accepted by the new maze prompt.
const SIZE_INPUT_LIMIT: usize = 9;

/// How long to wait for input before handing control back to the animation.
const POLL_TIMEOUT: Duration = Duration::from_millis(20);

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches them to the appropriate handler
/// functions based on the key pressed. It uses a short timeout so timed playback keeps running
/// while the user is idle.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(POLL_TIMEOUT)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code);
            }
        }
    }

    Ok(())
}

/// Dispatches a single key press for the current screen.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) {
    trace!(?code, screen = ?app.screen, "key pressed");

    match app.screen {
        Screen::Editor => {
            handle_editor_events(app, code);
            return;
        }
        Screen::NewMaze => {
            handle_size_prompt_events(app, code);
            return;
        }
        Screen::MainMenu(_) | Screen::StrategyMenu(_) | Screen::Results => {}
    }

    match code {
        KeyCode::Char('q') => app.exit = true,
        KeyCode::Char('j') | KeyCode::Down => handle_j_events(app),
        KeyCode::Char('k') | KeyCode::Up => handle_k_events(app),
        KeyCode::Char('l') | KeyCode::Enter => handle_l_events(app),
        KeyCode::Char('h') | KeyCode::Esc => handle_h_events(app),
        KeyCode::Char('c') if app.screen == Screen::Results => app.results.clear(),
        _ => {}
    }
}

/// Handles 'j' key press events for downward navigation.
///
/// This function processes the 'j' key press which is used for moving down in menus. The cursor
/// stays on the last entry once it is reached.
pub(crate) fn handle_j_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(item) => app.screen = Screen::MainMenu(item.next()),
        Screen::StrategyMenu(strategy) => app.screen = Screen::StrategyMenu(strategy.next()),
        Screen::Editor | Screen::Results | Screen::NewMaze => {}
    }
}

/// Handles 'k' key press events for upward navigation.
///
/// This function processes the 'k' key press which is used for moving up in menus. The cursor
/// stays on the first entry once it is reached.
pub(crate) fn handle_k_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(item) => app.screen = Screen::MainMenu(item.previous()),
        Screen::StrategyMenu(strategy) => app.screen = Screen::StrategyMenu(strategy.previous()),
        Screen::Editor | Screen::Results | Screen::NewMaze => {}
    }
}

/// Handles 'l' key press events for selection and forward navigation.
///
/// This function processes the 'l' key press which is used for selecting menu items and moving
/// forward in the application flow. In the strategy menu it makes the entry under the cursor the
/// active strategy without leaving the menu.
pub(crate) fn handle_l_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(MainMenuItem::EditMaze) => app.screen = Screen::Editor,
        Screen::MainMenu(MainMenuItem::Strategy) => {
            app.screen = Screen::StrategyMenu(app.strategy);
        }
        Screen::MainMenu(MainMenuItem::Results) => app.screen = Screen::Results,
        Screen::MainMenu(MainMenuItem::Quit) => app.exit = true,
        Screen::StrategyMenu(strategy) => app.select_strategy(strategy),
        Screen::Editor | Screen::Results | Screen::NewMaze => {}
    }
}

/// Handles 'h' key press events for backward navigation.
///
/// This function processes the 'h' key press which is used for returning to the main menu, with
/// the cursor left on the entry that led to the current screen.
pub(crate) fn handle_h_events(app: &mut App) {
    match app.screen {
        Screen::StrategyMenu(_) => app.screen = Screen::MainMenu(MainMenuItem::Strategy),
        Screen::Results => app.screen = Screen::MainMenu(MainMenuItem::Results),
        Screen::MainMenu(_) | Screen::Editor | Screen::NewMaze => {}
    }
}

/// Handles key presses on the editor screen.
///
/// Cursor movement takes over h/j/k/l here, so leaving the editor is bound to Esc.
fn handle_editor_events(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') => app.exit = true,
        KeyCode::Char('h') | KeyCode::Left => app.editor.move_cursor(Direction::Left),
        KeyCode::Char('j') | KeyCode::Down => app.editor.move_cursor(Direction::Down),
        KeyCode::Char('k') | KeyCode::Up => app.editor.move_cursor(Direction::Up),
        KeyCode::Char('l') | KeyCode::Right => app.editor.move_cursor(Direction::Right),
        KeyCode::Char('s') => app.editor.set_mode(EditMode::SetStart),
        KeyCode::Char('e') => app.editor.set_mode(EditMode::SetEnd),
        KeyCode::Char('w') => app.editor.set_mode(EditMode::ToggleWall),
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.clear_results();
            app.editor.apply_at_cursor();
        }
        KeyCode::Char('r') => app.solve(Playback::Timed),
        KeyCode::Char('n') => app.step(),
        KeyCode::Char('c') => app.clear_results(),
        KeyCode::Char('x') => app.open_size_prompt(),
        KeyCode::Esc => {
            app.clear_results();
            app.screen = Screen::MainMenu(MainMenuItem::EditMaze);
        }
        _ => {}
    }
}

/// Handles key presses on the new maze prompt.
///
/// Only digits and size separators are typed into the input; Enter confirms and Esc goes back to
/// the editor with the current maze untouched.
fn handle_size_prompt_events(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char(typed @ ('0'..='9' | 'x' | 'X' | ' ' | ','))
            if app.size_input.len() < SIZE_INPUT_LIMIT =>
        {
            app.size_input.push(typed);
        }
        KeyCode::Backspace => {
            let _ = app.size_input.pop();
        }
        KeyCode::Enter => app.confirm_size_prompt(),
        KeyCode::Esc => {
            app.size_error = None;
            app.screen = Screen::Editor;
        }
        _ => {}
    }
}
