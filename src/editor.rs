//! Maze grid editing.
//!
//! This module holds the editable grid shown on the editor screen. Each cell carries a richer
//! state than the solver needs, which is collapsed into a passability grid right before solving.

use tracing::{debug, info};

use crate::solver::Coordinate;

/// Display state of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum CellState {
    /// Open floor.
    #[default]
    Empty,
    /// Impassable wall.
    Wall,
    /// Cell the search starts from.
    Start,
    /// Cell the search tries to reach.
    End,
    /// Cell explored by the last search.
    Visited,
    /// Cell on the path found by the last search.
    Path,
}

impl CellState {
    /// Returns whether the cell only carries the result of a previous search.
    pub(crate) const fn is_search_mark(self) -> bool {
        matches!(self, Self::Visited | Self::Path)
    }
}

/// Editing action applied when the user confirms at the cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum EditMode {
    /// Place the start cell.
    #[default]
    SetStart,
    /// Place the end cell.
    SetEnd,
    /// Flip an empty cell into a wall and back.
    ToggleWall,
}

impl EditMode {
    /// Returns the name shown in the editor status bar.
    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::SetStart => "Set start",
            Self::SetEnd => "Set end",
            Self::ToggleWall => "Toggle wall",
        }
    }
}

/// Cursor movement requested by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

impl Direction {
    /// Returns the `(row, col)` offset of the move.
    const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// Editable maze grid with a cursor and optional start and end cells.
#[derive(Clone, Debug)]
pub(crate) struct GridEditor {
    /// Cell states, indexed by row then column.
    cells: Vec<Vec<CellState>>,
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    cols: usize,
    /// Current start cell, if placed.
    start: Option<Coordinate>,
    /// Current end cell, if placed.
    end: Option<Coordinate>,
    /// Cell under the editing cursor.
    cursor: Coordinate,
    /// Action applied at the cursor.
    mode: EditMode,
}

impl GridEditor {
    /// Creates a blank grid of the given size with the cursor in the top-left corner.
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![vec![CellState::Empty; cols]; rows],
            rows,
            cols,
            start: None,
            end: None,
            cursor: Coordinate::default(),
            mode: EditMode::default(),
        }
    }

    /// Number of rows in the grid.
    pub(crate) const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the grid.
    pub(crate) const fn cols(&self) -> usize {
        self.cols
    }

    /// Current start cell.
    pub(crate) const fn start(&self) -> Option<Coordinate> {
        self.start
    }

    /// Current end cell.
    pub(crate) const fn end(&self) -> Option<Coordinate> {
        self.end
    }

    /// Cell under the cursor.
    pub(crate) const fn cursor(&self) -> Coordinate {
        self.cursor
    }

    /// Active edit mode.
    pub(crate) const fn mode(&self) -> EditMode {
        self.mode
    }

    /// Switches the edit mode.
    pub(crate) fn set_mode(&mut self, mode: EditMode) {
        debug!(mode = mode.label(), "edit mode changed");
        self.mode = mode;
    }

    /// Returns the state of `cell`, or [`None`] outside the grid.
    pub(crate) fn state(&self, cell: Coordinate) -> Option<CellState> {
        self.cells
            .get(cell.row)
            .and_then(|row| row.get(cell.col))
            .copied()
    }

    /// Overwrites the state of `cell`, ignoring cells outside the grid.
    fn set_state(&mut self, cell: Coordinate, state: CellState) {
        if let Some(slot) = self
            .cells
            .get_mut(cell.row)
            .and_then(|row| row.get_mut(cell.col))
        {
            *slot = state;
        }
    }

    /// Moves the cursor one cell, staying inside the grid.
    pub(crate) fn move_cursor(&mut self, direction: Direction) {
        if let Some(next) = self
            .cursor
            .offset(direction.delta())
            .filter(|next| next.row < self.rows && next.col < self.cols)
        {
            self.cursor = next;
        }
    }

    /// Applies the active edit mode at the cursor.
    ///
    /// Any marks left by a previous search are cleared first, since they no longer describe the
    /// edited maze.
    pub(crate) fn apply_at_cursor(&mut self) {
        self.clear_results();

        let cell = self.cursor;
        match self.mode {
            EditMode::SetStart => {
                if let Some(previous) = self.start.take() {
                    self.set_state(previous, CellState::Empty);
                }
                if self.end == Some(cell) {
                    self.end = None;
                }
                self.set_state(cell, CellState::Start);
                self.start = Some(cell);
                info!(%cell, "start placed");
            }
            EditMode::SetEnd => {
                if let Some(previous) = self.end.take() {
                    self.set_state(previous, CellState::Empty);
                }
                if self.start == Some(cell) {
                    self.start = None;
                }
                self.set_state(cell, CellState::End);
                self.end = Some(cell);
                info!(%cell, "end placed");
            }
            EditMode::ToggleWall => match self.state(cell) {
                Some(CellState::Empty) => self.set_state(cell, CellState::Wall),
                Some(CellState::Wall) => self.set_state(cell, CellState::Empty),
                _ => {}
            },
        }
    }

    /// Marks `cell` with the result of a search, leaving start, end and walls untouched.
    pub(crate) fn mark(&mut self, cell: Coordinate, state: CellState) {
        if matches!(self.state(cell), Some(CellState::Empty | CellState::Visited)) {
            self.set_state(cell, state);
        }
    }

    /// Removes every search mark, keeping walls, start and end.
    pub(crate) fn clear_results(&mut self) {
        for state in self.cells.iter_mut().flatten() {
            if state.is_search_mark() {
                *state = CellState::Empty;
            }
        }
    }

    /// Collapses the cell states into the grid consumed by the solver.
    ///
    /// Walls become `false`; every other state is traversable.
    pub(crate) fn passability(&self) -> Vec<Vec<bool>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|&state| state != CellState::Wall).collect())
            .collect()
    }

    /// Lists every cell currently in `state`, in row-major order.
    pub(crate) fn cells_in(&self, state: CellState) -> Vec<Coordinate> {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .filter(move |&(_, &cell)| cell == state)
                    .map(move |(col, _)| Coordinate::new(row, col))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Places a cell of the given mode at `cell` by moving the cursor there.
    fn place(editor: &mut GridEditor, mode: EditMode, cell: Coordinate) {
        editor.cursor = cell;
        editor.set_mode(mode);
        editor.apply_at_cursor();
    }

    #[test]
    fn test_new_grid_is_blank() {
        let editor = GridEditor::new(3, 4);

        assert_eq!(editor.rows(), 3);
        assert_eq!(editor.cols(), 4);
        assert_eq!(editor.start(), None);
        assert_eq!(editor.end(), None);
        assert_eq!(editor.mode(), EditMode::SetStart);
        assert_eq!(editor.cells_in(CellState::Empty).len(), 12);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut editor = GridEditor::new(2, 2);

        editor.move_cursor(Direction::Up);
        editor.move_cursor(Direction::Left);
        assert_eq!(editor.cursor(), Coordinate::new(0, 0));

        editor.move_cursor(Direction::Down);
        editor.move_cursor(Direction::Down);
        editor.move_cursor(Direction::Right);
        editor.move_cursor(Direction::Right);
        assert_eq!(editor.cursor(), Coordinate::new(1, 1));
    }

    #[test]
    fn test_moving_start_clears_previous_cell() {
        let mut editor = GridEditor::new(2, 2);

        place(&mut editor, EditMode::SetStart, Coordinate::new(0, 0));
        place(&mut editor, EditMode::SetStart, Coordinate::new(1, 1));

        assert_eq!(editor.start(), Some(Coordinate::new(1, 1)));
        assert_eq!(
            editor.state(Coordinate::new(0, 0)),
            Some(CellState::Empty)
        );
        assert_eq!(editor.state(Coordinate::new(1, 1)), Some(CellState::Start));
    }

    #[test]
    fn test_start_replaces_end_on_same_cell() {
        let mut editor = GridEditor::new(2, 2);

        place(&mut editor, EditMode::SetEnd, Coordinate::new(0, 1));
        place(&mut editor, EditMode::SetStart, Coordinate::new(0, 1));

        assert_eq!(editor.start(), Some(Coordinate::new(0, 1)));
        assert_eq!(editor.end(), None);
    }

    #[test]
    fn test_toggle_wall_only_affects_floor() {
        let mut editor = GridEditor::new(1, 3);

        place(&mut editor, EditMode::SetStart, Coordinate::new(0, 0));
        place(&mut editor, EditMode::ToggleWall, Coordinate::new(0, 1));
        assert_eq!(editor.state(Coordinate::new(0, 1)), Some(CellState::Wall));

        editor.apply_at_cursor();
        assert_eq!(editor.state(Coordinate::new(0, 1)), Some(CellState::Empty));

        place(&mut editor, EditMode::ToggleWall, Coordinate::new(0, 0));
        assert_eq!(editor.state(Coordinate::new(0, 0)), Some(CellState::Start));
    }

    #[test]
    fn test_passability_collapses_states() {
        let mut editor = GridEditor::new(2, 2);

        place(&mut editor, EditMode::SetStart, Coordinate::new(0, 0));
        place(&mut editor, EditMode::SetEnd, Coordinate::new(1, 1));
        place(&mut editor, EditMode::ToggleWall, Coordinate::new(0, 1));
        editor.mark(Coordinate::new(1, 0), CellState::Visited);

        assert_eq!(
            editor.passability(),
            vec![vec![true, false], vec![true, true]]
        );
    }

    #[test]
    fn test_marks_skip_endpoints_and_walls() {
        let mut editor = GridEditor::new(1, 4);

        place(&mut editor, EditMode::SetStart, Coordinate::new(0, 0));
        place(&mut editor, EditMode::ToggleWall, Coordinate::new(0, 1));
        for col in 0..4 {
            editor.mark(Coordinate::new(0, col), CellState::Visited);
        }
        editor.mark(Coordinate::new(0, 2), CellState::Path);

        assert_eq!(editor.state(Coordinate::new(0, 0)), Some(CellState::Start));
        assert_eq!(editor.state(Coordinate::new(0, 1)), Some(CellState::Wall));
        assert_eq!(editor.state(Coordinate::new(0, 2)), Some(CellState::Path));
        assert_eq!(editor.state(Coordinate::new(0, 3)), Some(CellState::Visited));
    }

    #[test]
    fn test_edits_clear_search_marks() {
        let mut editor = GridEditor::new(2, 2);

        editor.mark(Coordinate::new(1, 1), CellState::Path);
        place(&mut editor, EditMode::ToggleWall, Coordinate::new(0, 0));

        assert_eq!(editor.cells_in(CellState::Path), Vec::new());
        assert_eq!(editor.cells_in(CellState::Wall), vec![Coordinate::new(0, 0)]);
    }

    #[test]
    fn test_out_of_bounds_state_is_none() {
        let editor = GridEditor::new(1, 1);

        assert_eq!(editor.state(Coordinate::new(1, 0)), None);
        assert_eq!(editor.state(Coordinate::new(0, 1)), None);
    }
}
