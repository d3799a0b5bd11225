//! Type definitions and enums for the application state and navigation.

use crate::solver::Strategy;

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the application. This is used
/// to determine which screen to render and what actions to take based on user input.
#[derive(Debug, PartialEq)]
pub(crate) enum Screen {
    /// Main menu screen.
    ///
    /// This variant represents the main menu, holding the item under the cursor.
    MainMenu(MainMenuItem),
    /// Strategy selection screen.
    ///
    /// This variant represents the strategy menu, holding the strategy under the cursor. The
    /// strategy actually used for solving is stored in the application state and only changes
    /// when the user confirms a selection.
    StrategyMenu(Strategy),
    /// Maze editing and solving screen.
    Editor,
    /// Table and chart of past runs.
    Results,
    /// Prompt asking for the size of a new blank maze.
    NewMaze,
}

/// Main menu navigation options.
///
/// This enumeration holds the different items in the main menu. It is used to determine which items
/// can the user select in the main menu.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum MainMenuItem {
    /// "Edit Maze" menu option.
    EditMaze,
    /// "Strategy" menu option.
    Strategy,
    /// "Results" menu option.
    Results,
    /// "Quit" menu option.
    Quit,
}

impl MainMenuItem {
    /// Every item, in the order they are listed on screen.
    pub(crate) const ALL: [Self; 4] = [Self::EditMaze, Self::Strategy, Self::Results, Self::Quit];

    /// Returns the text shown for the item.
    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::EditMaze => "Edit Maze",
            Self::Strategy => "Strategy",
            Self::Results => "Results",
            Self::Quit => "Quit",
        }
    }

    /// Returns the item below this one, staying on the last one.
    pub(crate) const fn next(self) -> Self {
        match self {
            Self::EditMaze => Self::Strategy,
            Self::Strategy => Self::Results,
            Self::Results | Self::Quit => Self::Quit,
        }
    }

    /// Returns the item above this one, staying on the first one.
    pub(crate) const fn previous(self) -> Self {
        match self {
            Self::EditMaze | Self::Strategy => Self::EditMaze,
            Self::Results => Self::Strategy,
            Self::Quit => Self::Results,
        }
    }
}

/// Generic menu type configuration.
///
/// This enumeration holds the different specifics particular to each generic menu type in the
/// application's interface. Generic here means they share enough features to be considered worth
/// joining together part of their functionality.
pub(crate) enum MenuType {
    /// Main menu configuration, holding its number of entries.
    MainMenu(u8),
    /// Strategy menu configuration, holding its number of entries.
    StrategyMenu(u8),
}

impl MenuType {
    /// Returns the string representation of the menu type.
    ///
    /// This function provides the display name for each menu variant, used as the title in the
    /// menu's border when rendering the interface.
    pub(crate) const fn repr(&self) -> &str {
        match self {
            Self::MainMenu(_) => "Main Menu",
            Self::StrategyMenu(_) => "Strategy",
        }
    }

    /// Returns the key hints shown at the bottom of the menu's border.
    pub(crate) const fn hints(&self) -> &str {
        match self {
            Self::MainMenu(_) => "(j) down / (k) up / (l) select",
            Self::StrategyMenu(_) => "(j) down / (k) up / (l) select / (h) return",
        }
    }

    /// Returns the width of the menu box in terminal cells, borders included.
    pub(crate) const fn width(&self) -> u16 {
        match self {
            Self::MainMenu(_) => 34,
            Self::StrategyMenu(_) => 48,
        }
    }

    /// Returns the numeric value stored by the menu type variant.
    ///
    /// This function provides access to the number of menu items for layout calculations, allowing
    /// the UI to properly size the menu containers.
    pub(crate) const fn value(&self) -> u8 {
        match self {
            Self::MainMenu(value) | Self::StrategyMenu(value) => *value,
        }
    }
}
