//! Core application state and logic for the maze game.

use color_eyre::eyre::Result;
use rand::rngs::StdRng;
use ratatui::{layout::Rect, DefaultTerminal};

use crate::{
    config::Config,
    events,
    grid::Direction,
    session::{MoveReport, Session},
    toast::{Toast, SOLVED_MESSAGE},
    types::{MainMenuItem, Screen},
    ui,
};

/// Application state container for the maze game.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the game and Crossterm events will help writing to.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit the game but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    ///
    /// This field holds the current screen of the game. It is used to determine which screen to
    /// render and what actions to take based on user input.
    pub(crate) screen: Screen,
    /// The running game.
    ///
    /// This field holds the maze being played along with the random source every following maze
    /// is carved from.
    pub(crate) session: Session<StdRng>,
    /// Notification currently shown to the player, if any.
    pub(crate) toast: Option<Toast>,
    /// Terminal area the maze was drawn on during the last redraw.
    ///
    /// Pointer events are mapped back to maze cells through this area. It is `None` until the
    /// in-game screen has been rendered once.
    pub(crate) board_area: Option<Rect>,
}

impl App {
    /// Creates a new instance of the App structure from the start-up configuration.
    ///
    /// The first maze is carved right away, so the game is playable as soon as the player leaves
    /// the main menu.
    ///
    /// # Errors
    ///
    /// This function returns an error if the configured maze size is invalid.
    pub fn new(config: &Config) -> Result<Self> {
        let session = Session::new(config.dimensions()?, config.rng());

        Ok(Self {
            exit: false,
            screen: Screen::MainMenu(MainMenuItem::StartGame),
            session,
            toast: None,
            board_area: None,
        })
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and updates the application state. The loop continues until
    /// the exit condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ =
                terminal.try_draw(|frame| ui::draw(self, frame).map_err(std::io::Error::other))?;
            events::handle_events(self)?;
        }

        Ok(())
    }

    /// Forwards a move request to the session and raises the solved toast when the exit is
    /// reached.
    pub(crate) fn move_player(&mut self, direction: Direction) -> MoveReport {
        let report = self.session.attempt_move(direction);
        if matches!(report, MoveReport::Solved { .. }) {
            self.toast = Some(Toast::new(SOLVED_MESSAGE));
        }

        report
    }

    /// Drops the toast once it has been on screen long enough.
    pub(crate) fn expire_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::grid::Position;

    /// Creates an app playing a seeded 2x1 maze, whose only passage leads straight to the exit.
    fn create_test_app() -> App {
        let config = Config {
            columns: 2,
            rows: 1,
            seed: Some(5),
            ..Config::default()
        };
        App::new(&config).expect("2x1 is a valid maze size")
    }

    #[test]
    fn test_new_app_starts_in_main_menu() {
        let app = create_test_app();

        assert!(!app.exit);
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::StartGame));
        assert!(app.toast.is_none());
        assert!(app.board_area.is_none());
        assert_eq!(app.session.generation(), 1);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = Config {
            rows: 0,
            ..Config::default()
        };

        assert!(App::new(&config).is_err(), "zero rows must fail at start-up");
    }

    #[test]
    fn test_solving_raises_toast() {
        let mut app = create_test_app();

        let report = app.move_player(Direction::Right);

        assert_eq!(report, MoveReport::Solved { generation: 2 });
        assert_eq!(app.session.state().player(), Position::ORIGIN);
        assert_eq!(
            app.toast.as_ref().map(Toast::message),
            Some(SOLVED_MESSAGE)
        );
    }

    #[test]
    fn test_blocked_move_keeps_quiet() {
        let mut app = create_test_app();

        assert_eq!(app.move_player(Direction::Up), MoveReport::Blocked);
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_expire_toast() {
        let mut app = create_test_app();
        app.toast = Some(Toast::new(SOLVED_MESSAGE));
        app.expire_toast();
        assert!(app.toast.is_some(), "a fresh toast should survive a tick");

        app.toast = Some(Toast::with_lifetime(SOLVED_MESSAGE, Duration::ZERO));
        app.expire_toast();
        assert!(app.toast.is_none(), "an expired toast should be dropped");
    }
}
