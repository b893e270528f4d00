//! Type definitions and enums for the application state and navigation.

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the game. This is used to
/// determine which screen to render and what actions to take based on user input.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Main menu screen of the game.
    MainMenu(MainMenuItem),
    /// In-game screen where the maze is displayed and walked.
    InGame,
}

/// Main menu navigation options.
///
/// This enumeration holds the different items in the main menu, listed top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MainMenuItem {
    /// "Start Game" menu option, which resumes the maze being played.
    StartGame,
    /// "New Maze" menu option, which discards the current maze before playing.
    NewMaze,
    /// "Quit" menu option.
    Quit,
}

impl MainMenuItem {
    /// Every item in the order they are rendered.
    pub(crate) const ALL: [Self; 3] = [Self::StartGame, Self::NewMaze, Self::Quit];

    /// Returns the label rendered for the item.
    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::StartGame => "Start Game",
            Self::NewMaze => "New Maze",
            Self::Quit => "Quit",
        }
    }

    /// Returns the item below this one, staying put on the last item.
    #[must_use]
    pub(crate) const fn next(self) -> Self {
        match self {
            Self::StartGame => Self::NewMaze,
            Self::NewMaze | Self::Quit => Self::Quit,
        }
    }

    /// Returns the item above this one, staying put on the first item.
    #[must_use]
    pub(crate) const fn previous(self) -> Self {
        match self {
            Self::StartGame | Self::NewMaze => Self::StartGame,
            Self::Quit => Self::NewMaze,
        }
    }
}
