//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use crate::{
    gesture::{self, DRAG_THRESHOLD},
    grid::Direction,
    types::{MainMenuItem, Screen},
    App,
};

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard and mouse events and dispatches them to the appropriate
/// handler. It uses a timeout to avoid blocking the UI, so expired toasts are cleared even when
/// the player stays idle.
///
/// # Errors
///
/// This function may return errors from polling or reading terminal events, or from mapping a
/// pointer position onto the maze.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key.code),
            Event::Mouse(mouse) => handle_mouse(app, mouse)?,
            _ => {}
        }
    }

    app.expire_toast();

    Ok(())
}

/// Maps movement keys to directions: vim keys, arrow keys and WASD.
const fn key_direction(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Char('k' | 'w') | KeyCode::Up => Some(Direction::Up),
        KeyCode::Char('j' | 's') | KeyCode::Down => Some(Direction::Down),
        KeyCode::Char('h' | 'a') | KeyCode::Left => Some(Direction::Left),
        KeyCode::Char('l' | 'd') | KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

/// Handles a key press.
///
/// `q` quits from every screen. The remaining keys depend on the current screen: menu navigation
/// in the main menu, movement and maze control in game.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) {
    if code == KeyCode::Char('q') {
        app.exit = true;
        return;
    }

    match app.screen {
        Screen::MainMenu(item) => handle_menu_key(app, item, code),
        Screen::InGame => handle_game_key(app, code),
    }
}

/// Handles key presses in the main menu.
fn handle_menu_key(app: &mut App, item: MainMenuItem, code: KeyCode) {
    match code {
        KeyCode::Char('j') | KeyCode::Down => app.screen = Screen::MainMenu(item.next()),
        KeyCode::Char('k') | KeyCode::Up => app.screen = Screen::MainMenu(item.previous()),
        KeyCode::Char('l') | KeyCode::Enter => match item {
            MainMenuItem::StartGame => app.screen = Screen::InGame,
            MainMenuItem::NewMaze => {
                app.session.regenerate();
                app.screen = Screen::InGame;
            }
            MainMenuItem::Quit => app.exit = true,
        },
        _ => {}
    }
}

/// Handles key presses on the in-game screen.
fn handle_game_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => app.screen = Screen::MainMenu(MainMenuItem::StartGame),
        KeyCode::Char('n') => app.session.regenerate(),
        _ => {
            if let Some(direction) = key_direction(code) {
                let _ = app.move_player(direction);
            }
        }
    }
}

/// Handles a mouse event.
///
/// Dragging with the left button on the in-game screen is read as a gesture: the pointer offset
/// from the center of the player's cell, in cell units, is classified into a direction and fed to
/// the session as a regular move. A plain press only starts the drag and never moves the player.
///
/// # Errors
///
/// This function may return errors if the player's position cannot be converted to screen
/// coordinates.
pub(crate) fn handle_mouse(app: &mut App, mouse: MouseEvent) -> Result<()> {
    if app.screen != Screen::InGame || mouse.kind != MouseEventKind::Drag(MouseButton::Left) {
        return Ok(());
    }
    let Some(area) = app.board_area.filter(|area| !area.is_empty()) else {
        return Ok(());
    };

    let dimensions = app.session.dimensions();
    let player = app.session.state().player();
    let cell_width = f64::from(area.width) / f64::from(u32::try_from(dimensions.columns())?);
    let cell_height = f64::from(area.height) / f64::from(u32::try_from(dimensions.rows())?);

    let center_x =
        f64::from(area.x) + (f64::from(u32::try_from(player.column)?) + 0.5) * cell_width;
    let center_y =
        f64::from(area.y) + (f64::from(u32::try_from(player.row)?) + 0.5) * cell_height;

    let dx = (f64::from(mouse.column) - center_x) / cell_width;
    let dy = (f64::from(mouse.row) - center_y) / cell_height;

    if let Some(direction) = gesture::classify(dx, dy, DRAG_THRESHOLD) {
        let _ = app.move_player(direction);
    }

    Ok(())
}
