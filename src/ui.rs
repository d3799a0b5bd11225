//! User interface rendering functions for all application screens.

use std::rc::Rc;

use color_eyre::eyre::Result;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    symbols::{self, Marker, DOT},
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        BarChart, Block, BorderType, Borders, Clear, Row, Table,
    },
    Frame,
};

use crate::{
    editor::CellState,
    solver::{Coordinate, Strategy},
    types::{MainMenuItem, MenuType, Screen},
    App,
};

/// Width of a single bar in the results chart.
const BAR_WIDTH: u16 = 5;

/// Space between two bars in the results chart.
const BAR_GAP: u16 = 1;

/// Cell states drawn on the maze canvas with their colors, bottom layer first.
const CELL_LAYERS: [(CellState, Color); 5] = [
    (CellState::Wall, Color::Green),
    (CellState::Visited, Color::Blue),
    (CellState::Path, Color::Red),
    (CellState::Start, Color::Yellow),
    (CellState::End, Color::Magenta),
];

/// Key hints shown on the editor info panel.
const EDITOR_HINTS: &str =
    "(s/e/w) mode / (space) apply / (r) run / (n) step / (c) clear / (x) new / (esc) menu";

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from data conversion failures.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    match &app.screen {
        Screen::MainMenu(item) => main_menu(frame, *item),
        Screen::StrategyMenu(cursor) => strategy_menu(frame, *cursor, app.strategy),
        Screen::Editor => editor(app, frame)?,
        Screen::Results => results(app, frame),
        Screen::NewMaze => size_prompt(app, frame),
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Returns a `width` by `height` rectangle centered in `area`, shrunk to fit if needed.
pub(crate) fn center(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);

    area
}

/// Renders the generic layout structure for the main and strategy menus.
///
/// This function creates the common layout and block structure used by both menus. The generic
/// part includes the centered positioning and border styling, while the specific menu content is
/// handled by the caller using the [`MenuType`] parameter.
pub(crate) fn init_menu(frame: &mut Frame, menu: MenuType) -> Rc<[Rect]> {
    let layout = center(frame.area(), menu.width(), u16::from(menu.value()) + 2);

    let block = Block::bordered()
        .title(menu.repr())
        .title_bottom(menu.hints())
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Max(1); menu.value().into()]).split(inner_space)
}

/// Renders the main menu screen with navigation options.
///
/// This function displays the main menu and highlights the currently selected option to provide
/// visual feedback for user navigation.
pub(crate) fn main_menu(frame: &mut Frame, item: MainMenuItem) {
    clear(frame);

    let inner_layout = init_menu(frame, MenuType::MainMenu(4));

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    for (&entry, &area) in MainMenuItem::ALL.iter().zip(inner_layout.iter()) {
        let style = if entry == item {
            active_content_style
        } else {
            content_style
        };

        frame.render_widget(Line::raw(entry.label()).centered().style(style), area);
    }
}

/// Renders the strategy menu.
///
/// The entry under the cursor is highlighted like in the main menu, while the strategy in use is
/// marked with a dot in front of its name.
pub(crate) fn strategy_menu(frame: &mut Frame, cursor: Strategy, active: Strategy) {
    clear(frame);

    let inner_layout = init_menu(frame, MenuType::StrategyMenu(5));

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    for (&strategy, &area) in Strategy::ALL.iter().zip(inner_layout.iter()) {
        let style = if strategy == cursor {
            active_content_style
        } else {
            content_style
        };
        let selector = if strategy == active { DOT } else { " " };

        let [selector_area, entry_area] =
            Layout::horizontal([Constraint::Length(2), Constraint::Fill(1)]).areas(area);

        frame.render_widget(Line::styled(selector, style).centered(), selector_area);
        frame.render_widget(Line::styled(strategy.label(), style).centered(), entry_area);
    }
}

/// Converts grid cells into canvas coordinates centered on the origin.
///
/// Rows grow downwards on the grid but upwards on the canvas, so the vertical axis is flipped.
///
/// # Errors
///
/// This function may return errors if a dimension or coordinate does not fit in a [`u16`].
pub(crate) fn transform_grid_to_screen_coords(
    cells: &[Coordinate],
    rows: usize,
    cols: usize,
) -> Result<Vec<(f64, f64)>> {
    let rows_n = f64::from(u16::try_from(rows)?);
    let cols_n = f64::from(u16::try_from(cols)?);

    cells
        .iter()
        .map(|cell| -> Result<(f64, f64)> {
            let screen_x = f64::from(u16::try_from(cell.col)?) - (cols_n - 1.) / 2.;
            let screen_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(cell.row)?);
            Ok((screen_x, screen_y))
        })
        .collect()
}

/// Returns the first index of a `visible`-long window over `len` items that keeps `focus` in view.
///
/// The window follows the focus around its middle and stops at both ends.
pub(crate) fn scroll_offset(focus: usize, len: usize, visible: usize) -> usize {
    focus
        .saturating_sub(visible / 2)
        .min(len.saturating_sub(visible))
}

/// Keeps the cells inside a `rows` by `cols` window starting at `origin`, relative to it.
fn cells_in_view(
    cells: Vec<Coordinate>,
    origin: Coordinate,
    rows: usize,
    cols: usize,
) -> Vec<Coordinate> {
    cells
        .into_iter()
        .filter_map(|cell| {
            let row = cell.row.checked_sub(origin.row).filter(|&row| row < rows)?;
            let col = cell.col.checked_sub(origin.col).filter(|&col| col < cols)?;
            Some(Coordinate::new(row, col))
        })
        .collect()
}

/// Renders the maze editor with the grid, the cursor and the info panel.
///
/// Grids larger than the terminal are shown through a window that scrolls with the cursor.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
pub(crate) fn editor(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let rows = app.editor.rows();
    let cols = app.editor.cols();
    let cursor = app.editor.cursor();

    let [maze_content_area, info_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(4)]).areas(frame.area());

    let maze_block = Block::bordered()
        .title(format!("Maze {rows}x{cols}"))
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);
    let layout = center(
        maze_content_area,
        u16::try_from(cols)?.saturating_add(2),
        u16::try_from(rows)?.saturating_add(2),
    );
    let space = maze_block.inner(layout);
    frame.render_widget(maze_block, layout);

    let view_rows = rows.min(space.height.into());
    let view_cols = cols.min(space.width.into());
    let origin = Coordinate::new(
        scroll_offset(cursor.row, rows, view_rows),
        scroll_offset(cursor.col, cols, view_cols),
    );

    let mut layers = Vec::with_capacity(CELL_LAYERS.len());
    for (state, color) in CELL_LAYERS {
        let visible = cells_in_view(app.editor.cells_in(state), origin, view_rows, view_cols);
        let coords = transform_grid_to_screen_coords(&visible, view_rows, view_cols)?;
        layers.push((coords, color));
    }
    let cursor_coords = transform_grid_to_screen_coords(
        &cells_in_view(vec![cursor], origin, view_rows, view_cols),
        view_rows,
        view_cols,
    )?;

    let maze = Canvas::default()
        .x_bounds([
            (-rounded_div::i32(space.width.into(), 2)).into(),
            (rounded_div::i32(space.width.into(), 2)).into(),
        ])
        .y_bounds([
            (-rounded_div::i32(space.height.into(), 2)).into(),
            (rounded_div::i32(space.height.into(), 2)).into(),
        ])
        .marker(Marker::Block)
        .paint(|ctx| {
            for (coords, color) in &layers {
                ctx.draw(&Points {
                    coords,
                    color: *color,
                });
                ctx.layer();
            }
            ctx.draw(&Points {
                coords: &cursor_coords,
                color: Color::White,
            });
        });

    frame.render_widget(maze, space);

    info_panel(app, frame, info_area);

    Ok(())
}

/// Renders the editor info panel: current settings, the status line and the color legend.
fn info_panel(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::bordered()
        .title(EDITOR_HINTS)
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);
    let inner_space = block.inner(area);
    frame.render_widget(block, area);

    let [settings_area, status_area, legend_area] = Layout::vertical([Constraint::Max(1); 3])
        .flex(Flex::Start)
        .areas(inner_space);

    let settings = format!(
        "Mode: {}  Strategy: {}  Cursor: {}",
        app.editor.mode().label(),
        app.strategy,
        app.editor.cursor()
    );
    frame.render_widget(Line::raw(settings).centered(), settings_area);

    let status = match (&app.status, app.results.records().last()) {
        (Some(message), _) => message.clone(),
        (None, Some(run)) => format!(
            "Last run: {}, path {} cells, visited {} cells, {} ns",
            run.strategy,
            run.path_cells,
            run.visited_cells,
            run.elapsed_nanos()
        ),
        (None, None) => String::new(),
    };
    frame.render_widget(
        Line::styled(status, Style::default().fg(Color::White)).centered(),
        status_area,
    );

    let mut legend = Vec::with_capacity(CELL_LAYERS.len() * 2);
    for (state, color) in CELL_LAYERS {
        legend.push(Span::styled(
            format!("{} ", symbols::block::FULL),
            Style::default().fg(color),
        ));
        legend.push(Span::raw(format!("{state:?}  ")));
    }
    frame.render_widget(Line::from(legend).centered(), legend_area);
}

/// Renders the prompt asking for the size of a new maze.
pub(crate) fn size_prompt(app: &App, frame: &mut Frame) {
    clear(frame);

    let layout = center(frame.area(), 48, 4);
    let block = Block::bordered()
        .title("New Maze")
        .title_bottom("(enter) create / (esc) cancel")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);
    let inner_space = block.inner(layout);
    frame.render_widget(block, layout);

    let [input_area, error_area] = Layout::vertical([Constraint::Max(1); 2]).areas(inner_space);

    frame.render_widget(
        Line::raw(format!("Rows x columns: {}_", app.size_input)).centered(),
        input_area,
    );
    if let Some(reason) = &app.size_error {
        frame.render_widget(
            Line::styled(reason.as_str(), Style::default().fg(Color::Red)).centered(),
            error_area,
        );
    }
}

/// Renders the results screen with a table of runs and a chart of their durations.
///
/// Only the most recent runs that fit on screen are shown.
pub(crate) fn results(app: &App, frame: &mut Frame) {
    clear(frame);

    let block = Block::bordered()
        .title("Results")
        .title_bottom("(c) clear / (h) return")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);
    let inner_space = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    if app.results.is_empty() {
        let [message_area] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(inner_space);
        frame.render_widget(Line::raw("No runs yet").centered(), message_area);
        return;
    }

    let [table_area, chart_area] =
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(inner_space);

    let records = app.results.records();

    let table_capacity = usize::from(table_area.height.saturating_sub(1));
    let rows = records
        .iter()
        .enumerate()
        .skip(records.len().saturating_sub(table_capacity))
        .map(|(idx, run)| {
            Row::new(vec![
                (idx + 1).to_string(),
                run.strategy.label().to_owned(),
                run.path_cells.to_string(),
                run.visited_cells.to_string(),
                run.elapsed_nanos().to_string(),
            ])
        });
    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(12),
        ],
    )
    .header(
        Row::new(vec!["Run", "Strategy", "Path", "Visited", "Time (ns)"])
            .style(Style::default().fg(Color::White).bg(Color::Green)),
    );
    frame.render_widget(table, table_area);

    let chart_capacity = usize::from(chart_area.width / (BAR_WIDTH + BAR_GAP)).max(1);
    let bars: Vec<(&str, u64)> = records
        .iter()
        .skip(records.len().saturating_sub(chart_capacity))
        .map(|run| (run.strategy.short_label(), run.elapsed_nanos()))
        .collect();
    let chart = BarChart::default()
        .block(
            Block::default()
                .title("Elapsed (ns)")
                .borders(Borders::TOP),
        )
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
        .bar_style(Style::default().fg(Color::Green))
        .value_style(Style::default().fg(Color::White).bg(Color::Green))
        .data(bars.as_slice());
    frame.render_widget(chart, chart_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{animation::Playback, editor::EditMode, Config};
    use ratatui::{backend::TestBackend, Terminal};

    /// Creates a small test app with instant playback.
    fn create_test_app() -> App {
        App::new(&Config {
            rows: 5,
            cols: 9,
            visit_delay_ms: 0,
            path_delay_ms: 0,
            ..Config::default()
        })
    }

    /// Creates a test terminal with known dimensions for UI testing.
    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).expect("failed to create test terminal")
    }

    /// Draws `app` and returns the rendered text.
    fn render(app: &App) -> String {
        let mut terminal = create_test_terminal();
        let _ = terminal
            .draw(|frame| {
                draw(app, frame).expect("drawing should succeed in test");
            })
            .expect("terminal drawing should succeed");

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_draw_main_menu() {
        let app = create_test_app();

        let screen = render(&app);

        for item in MainMenuItem::ALL {
            assert!(screen.contains(item.label()), "missing {}", item.label());
        }
        assert!(screen.contains("Main Menu"));
    }

    #[test]
    fn test_draw_strategy_menu_marks_active() {
        let mut app = create_test_app();
        app.strategy = Strategy::DepthFirst;
        app.screen = Screen::StrategyMenu(Strategy::BoundedRecursive);

        let screen = render(&app);

        for strategy in Strategy::ALL {
            assert!(screen.contains(strategy.label()), "missing {strategy}");
        }
        assert_eq!(screen.matches(DOT).count(), 1);
    }

    #[test]
    fn test_draw_editor() {
        let mut app = create_test_app();
        app.screen = Screen::Editor;
        app.editor.apply_at_cursor();
        app.editor.set_mode(EditMode::SetEnd);

        let screen = render(&app);

        assert!(screen.contains("Maze 5x9"));
        assert!(screen.contains("Mode: Set end"));
        assert!(screen.contains("Strategy: Breadth-first"));
        assert!(screen.contains("Cursor: (0, 0)"));
    }

    #[test]
    fn test_draw_editor_shows_status() {
        let mut app = create_test_app();
        app.screen = Screen::Editor;

        app.solve(Playback::Timed);
        let screen = render(&app);

        assert!(screen.contains("Place a start and an end first"));
    }

    /// Counts the cells painted with the cursor color.
    fn cursor_cells(app: &App) -> usize {
        let mut terminal = create_test_terminal();
        let _ = terminal
            .draw(|frame| {
                draw(app, frame).expect("drawing should succeed in test");
            })
            .expect("terminal drawing should succeed");

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .filter(|cell| cell.symbol() == symbols::block::FULL && cell.fg == Color::White)
            .count()
    }

    #[test]
    fn test_cursor_visible_on_grid_taller_than_terminal() {
        let mut app = create_test_app();
        app.editor = crate::editor::GridEditor::new(40, 20);
        app.screen = Screen::Editor;

        assert_eq!(cursor_cells(&app), 1, "cursor at the top-left corner");

        for _ in 0..39 {
            app.editor.move_cursor(crate::editor::Direction::Down);
        }
        assert_eq!(cursor_cells(&app), 1, "cursor on the last row");
    }

    #[test]
    fn test_cursor_visible_at_maximum_size() {
        let mut app = App::new(&Config {
            rows: 100,
            cols: 100,
            ..Config::default()
        });
        app.screen = Screen::Editor;

        for _ in 0..99 {
            app.editor.move_cursor(crate::editor::Direction::Down);
            app.editor.move_cursor(crate::editor::Direction::Right);
        }

        assert_eq!(cursor_cells(&app), 1);
    }

    #[test]
    fn test_scroll_offset_follows_focus() {
        assert_eq!(scroll_offset(0, 40, 18), 0);
        assert_eq!(scroll_offset(20, 40, 18), 11);
        assert_eq!(scroll_offset(39, 40, 18), 22);
        assert_eq!(scroll_offset(7, 10, 18), 0, "small grids never scroll");
    }

    #[test]
    fn test_draw_size_prompt() {
        let mut app = create_test_app();
        app.open_size_prompt();
        app.size_input = "0x4".to_owned();
        app.confirm_size_prompt();

        let screen = render(&app);

        assert!(screen.contains("New Maze"));
        assert!(screen.contains("Rows x columns: 0x4_"));
        assert!(screen.contains("rows must be between 1 and 100"));
    }

    #[test]
    fn test_draw_results_empty() {
        let mut app = create_test_app();
        app.screen = Screen::Results;

        let screen = render(&app);

        assert!(screen.contains("No runs yet"));
    }

    #[test]
    fn test_draw_results_with_runs() {
        let mut app = create_test_app();
        app.editor.apply_at_cursor();
        app.editor.set_mode(EditMode::SetEnd);
        app.editor.move_cursor(crate::editor::Direction::Right);
        app.editor.apply_at_cursor();
        app.solve(Playback::Timed);
        app.select_strategy(Strategy::DepthFirst);
        app.solve(Playback::Timed);
        app.screen = Screen::Results;

        let screen = render(&app);

        assert!(screen.contains("Visited"));
        assert!(screen.contains("Breadth-first"));
        assert!(screen.contains("Depth-first"));
        assert!(screen.contains("DFS"));
    }

    #[test]
    fn test_clear_function() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            clear(frame);
        });

        assert!(result.is_ok(), "clearing screen should succeed");
    }

    #[test]
    fn test_init_menu_sizes() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            let layout = init_menu(frame, MenuType::MainMenu(4));
            assert_eq!(layout.len(), 4, "main menu should have 4 items");
            let layout = init_menu(frame, MenuType::StrategyMenu(5));
            assert_eq!(layout.len(), 5, "strategy menu should have 5 items");
        });

        assert!(result.is_ok(), "initializing menus should succeed");
    }

    #[test]
    fn test_center_shrinks_to_area() {
        let area = Rect::new(0, 0, 10, 4);

        assert_eq!(center(area, 4, 2), Rect::new(3, 1, 4, 2));
        assert_eq!(center(area, 20, 8), area);
    }

    #[test]
    fn test_transform_grid_to_screen_coords() {
        let coords = transform_grid_to_screen_coords(
            &[Coordinate::new(0, 0), Coordinate::new(2, 2), Coordinate::new(1, 1)],
            3,
            3,
        )
        .expect("small grids convert");

        assert_eq!(coords, vec![(-1., 1.), (1., -1.), (0., 0.)]);
    }
}
