//! Core application state and logic for the maze editor.

use std::time::Instant;

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;
use tracing::{info, warn};

use crate::{
    animation::{AnimationManager, AnimationStep, Playback},
    config::{self, Config},
    editor::{CellState, GridEditor},
    events,
    results::{ResultsLog, RunRecord},
    solver::{self, Strategy},
    types::{MainMenuItem, Screen},
    ui,
};

/// Status message shown when a finished playback found no path.
pub(crate) const NO_PATH_MESSAGE: &str = "No path found";

/// Status message shown when stepping past the end of a playback.
pub(crate) const PLAYBACK_DONE_MESSAGE: &str = "Playback complete";

/// Application state container for the maze editor.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the interface and Crossterm events will help writing to.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    ///
    /// This field holds the current screen. It is used to determine which screen to render and
    /// what actions to take based on user input.
    pub(crate) screen: Screen,
    /// Editable maze grid.
    pub(crate) editor: GridEditor,
    /// Strategy used by the next solve.
    pub(crate) strategy: Strategy,
    /// Animation manager for search visualization.
    ///
    /// This field manages the playback of the last search, releasing its explored cells and then
    /// its path onto the editor grid.
    pub(crate) animation_manager: AnimationManager,
    /// Measurements of every solve since startup or the last clear.
    pub(crate) results: ResultsLog,
    /// One-line message shown in the editor info panel.
    pub(crate) status: Option<String>,
    /// Text typed in the new maze prompt.
    pub(crate) size_input: String,
    /// Reason the last typed size was rejected.
    pub(crate) size_error: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl App {
    /// Creates a new instance of the App structure from the runtime configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            exit: false,
            screen: Screen::MainMenu(MainMenuItem::EditMaze),
            editor: GridEditor::new(config.rows.into(), config.cols.into()),
            strategy: config.strategy,
            animation_manager: AnimationManager::new(config.visit_delay(), config.path_delay()),
            results: ResultsLog::default(),
            status: None,
            size_input: String::new(),
            size_error: None,
        }
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
        info!(strategy = %self.strategy, "application started");

        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame)
                    .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))
            })?;
            events::handle_events(self)?;
            self.tick();
        }

        info!(runs = self.results.records().len(), "application exiting");

        Ok(())
    }

    /// Changes the strategy used by the next solve.
    pub(crate) fn select_strategy(&mut self, strategy: Strategy) {
        if self.strategy != strategy {
            info!(%strategy, "strategy selected");
        }
        self.strategy = strategy;
    }

    /// Runs the selected strategy on the edited maze and queues its playback.
    ///
    /// The run is timed and recorded in the results log. Nothing happens, apart from a status
    /// message, while the start or the end cell is missing.
    pub(crate) fn solve(&mut self, playback: Playback) {
        self.animation_manager.clear();
        self.editor.clear_results();
        self.status = None;

        let (Some(start), Some(end)) = (self.editor.start(), self.editor.end()) else {
            warn!("solve requested without start and end");
            self.status = Some("Place a start and an end first".to_owned());
            return;
        };

        let grid = self.editor.passability();
        let started = Instant::now();
        let result = solver::solve(&grid, start, end, self.strategy);
        let record = RunRecord::new(self.strategy, &result, started.elapsed());

        info!(
            strategy = %self.strategy,
            path = record.path_cells,
            visited = record.visited_cells,
            nanos = record.elapsed_nanos(),
            "solve recorded"
        );

        self.results.record(record);
        self.animation_manager.load(result, self.strategy, playback);
    }

    /// Releases a single playback step, solving first when no stepped playback of the selected
    /// strategy is in progress.
    pub(crate) fn step(&mut self) {
        let stepping = self.animation_manager.playback() == Some(Playback::Stepped)
            && self.animation_manager.strategy() == Some(self.strategy);

        if stepping && self.animation_manager.remaining() == 0 {
            self.animation_manager.clear();
            self.status = Some(PLAYBACK_DONE_MESSAGE.to_owned());
            return;
        }

        if !stepping {
            self.solve(Playback::Stepped);
        }

        if let Some(step) = self.animation_manager.advance() {
            self.apply_step(step);
        }
        self.report_outcome();
    }

    /// Advances timed playback and reports the outcome once it finishes.
    pub(crate) fn tick(&mut self) {
        while let Some(step) = self.animation_manager.update() {
            self.apply_step(step);
        }
        self.report_outcome();
    }

    /// Abandons any playback and wipes the search marks off the grid.
    pub(crate) fn clear_results(&mut self) {
        self.animation_manager.clear();
        self.editor.clear_results();
        self.status = None;
    }

    /// Opens the new maze prompt, prefilled with the current size.
    pub(crate) fn open_size_prompt(&mut self) {
        self.size_input = format!("{}x{}", self.editor.rows(), self.editor.cols());
        self.size_error = None;
        self.screen = Screen::NewMaze;
    }

    /// Creates a blank maze of the typed size and returns to the editor.
    ///
    /// A size that does not parse or is out of range keeps the prompt open with the reason shown
    /// under the input, and the current maze untouched.
    pub(crate) fn confirm_size_prompt(&mut self) {
        match config::parse_dimensions(&self.size_input) {
            Ok((rows, cols)) => {
                self.new_maze(rows.into(), cols.into());
                self.size_error = None;
                self.screen = Screen::Editor;
            }
            Err(err) => {
                warn!(input = %self.size_input, %err, "maze size rejected");
                self.size_error = Some(err.to_string());
            }
        }
    }

    /// Replaces the maze with a blank one of the given size.
    pub(crate) fn new_maze(&mut self, rows: usize, cols: usize) {
        self.animation_manager.clear();
        self.editor = GridEditor::new(rows, cols);
        self.status = None;
        info!(rows, cols, "new blank maze");
    }

    /// Paints a released step onto the editor grid.
    fn apply_step(&mut self, step: AnimationStep) {
        match step {
            AnimationStep::Visit(cell) => self.editor.mark(cell, CellState::Visited),
            AnimationStep::Trace(cell) => self.editor.mark(cell, CellState::Path),
        }
    }

    /// Shows the failure message once a playback without path has drained.
    fn report_outcome(&mut self) {
        if self.animation_manager.take_outcome() == Some(false) {
            self.status = Some(NO_PATH_MESSAGE.to_owned());
        }
    }
}
