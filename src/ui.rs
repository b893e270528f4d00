//! User interface rendering functions for all application screens.

use std::rc::Rc;

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Line as WallLine, Points},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{
    grid::{Direction, Grid, Position},
    types::{MainMenuItem, Screen},
    App,
};

/// Width of a maze cell in terminal columns.
const CELL_WIDTH: u16 = 4;

/// Height of a maze cell in terminal rows.
const CELL_HEIGHT: u16 = 2;

/// Side of the square player and exit markers, as a fraction of a cell.
const MARKER_SIZE: f64 = 0.6;

/// Number of dots along each side of a marker.
const MARKER_DOTS: u32 = 8;

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from drawing operations or data conversion failures.
pub(crate) fn draw(app: &mut App, frame: &mut Frame) -> Result<()> {
    match app.screen {
        Screen::MainMenu(item) => main_menu(frame, item),
        Screen::InGame => in_game(app, frame)?,
    }

    if let Some(toast) = &app.toast {
        toast_popup(frame, toast.message())?;
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

/// Renders the layout structure of a menu and returns one area per entry.
///
/// The menu is centered on screen inside a rounded block titled `title`.
pub(crate) fn init_menu(frame: &mut Frame, title: &str, entries: u16) -> Rc<[Rect]> {
    let [_, space, _] = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
    ])
    .areas(frame.area());
    let [_, space, _] = Layout::horizontal([
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
    ])
    .areas(space);

    let [layout] = Layout::vertical([Constraint::Max(entries + 2)])
        .flex(Flex::Center)
        .areas(space);

    let block = Block::bordered()
        .title(title)
        .title_bottom("(j) down / (k) up / (l) select")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Max(1); entries.into()]).split(inner_space)
}

/// Renders the main menu screen with navigation options.
///
/// This function displays the main menu entries and highlights the currently selected one.
pub(crate) fn main_menu(frame: &mut Frame, item: MainMenuItem) {
    clear(frame);

    let entries = MainMenuItem::ALL;
    let inner_layout = init_menu(frame, "Main Menu", 3);

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    for (entry, area) in entries.into_iter().zip(inner_layout.iter()) {
        let style = if entry == item {
            active_content_style
        } else {
            content_style
        };
        frame.render_widget(Line::raw(entry.label()).centered().style(style), *area);
    }
}

/// Converts a maze coordinate into a canvas coordinate.
fn coordinate(value: usize) -> Result<f64> {
    Ok(f64::from(u32::try_from(value)?))
}

/// Builds one canvas line per wall still standing in the grid.
///
/// Canvas coordinates grow upwards, so row `r` of a maze with `n` rows spans from `n - r - 1` to
/// `n - r` on the vertical axis.
pub(crate) fn wall_lines(grid: &Grid) -> Result<Vec<WallLine>> {
    let rows = coordinate(grid.dimensions().rows())?;
    let mut lines = Vec::new();

    for position in grid.positions() {
        let cell = grid
            .cell(position)
            .ok_or_eyre("failed to retrieve cell while drawing walls")?;
        let left = coordinate(position.column)?;
        let top = rows - coordinate(position.row)?;
        let (right, bottom) = (left + 1., top - 1.);

        for side in Direction::ALL {
            if !cell.has_wall(side) {
                continue;
            }
            let (x1, y1, x2, y2) = match side {
                Direction::Up => (left, top, right, top),
                Direction::Right => (right, top, right, bottom),
                Direction::Down => (left, bottom, right, bottom),
                Direction::Left => (left, top, left, bottom),
            };
            lines.push(WallLine::new(x1, y1, x2, y2, Color::Blue));
        }
    }

    Ok(lines)
}

/// Builds the dots of a filled square marker centered on a cell.
pub(crate) fn marker(position: Position, rows: usize) -> Result<Vec<(f64, f64)>> {
    let center_x = coordinate(position.column)? + 0.5;
    let center_y = coordinate(rows)? - coordinate(position.row)? - 0.5;
    let step = MARKER_SIZE / f64::from(MARKER_DOTS);
    let origin = -MARKER_SIZE / 2.;

    Ok((0..=MARKER_DOTS)
        .flat_map(|column| {
            (0..=MARKER_DOTS).map(move |row| {
                (
                    center_x + origin + f64::from(column) * step,
                    center_y + origin + f64::from(row) * step,
                )
            })
        })
        .collect())
}

/// Renders the in-game screen with the maze, the player and the exit.
///
/// This function draws the maze on a [`Canvas`] sized to the grid, records the area it was drawn
/// on for pointer handling, and renders a tooltip with the controls and progress below it.
///
/// # Errors
///
/// This function may return errors if the maze is too large to be laid out on a terminal.
pub(crate) fn in_game(app: &mut App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let state = app.session.state();
    let dimensions = state.grid().dimensions();
    let width = u16::try_from(dimensions.columns())?
        .checked_mul(CELL_WIDTH)
        .ok_or_eyre("maze is too wide to be drawn")?;
    let height = u16::try_from(dimensions.rows())?
        .checked_mul(CELL_HEIGHT)
        .ok_or_eyre("maze is too tall to be drawn")?;

    // Maze area on top, tooltip at the bottom
    let [content_area, tooltip_full_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(frame.area());

    let [board_row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(content_area);
    let [board] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(board_row);
    let [tooltip_area] = Layout::horizontal([Constraint::Length(width.max(64))])
        .flex(Flex::Center)
        .areas(tooltip_full_area);

    // Pre-compute shapes to handle errors before closures
    let walls = wall_lines(state.grid())?;
    let exit = marker(state.exit(), dimensions.rows())?;
    let player = marker(state.player(), dimensions.rows())?;

    let maze = Canvas::default()
        .x_bounds([0., coordinate(dimensions.columns())?])
        .y_bounds([0., coordinate(dimensions.rows())?])
        .marker(Marker::Braille)
        .paint(|ctx| {
            for wall in &walls {
                ctx.draw(wall);
            }
            ctx.draw(&Points {
                coords: &exit,
                color: Color::Red,
            });
            ctx.draw(&Points {
                coords: &player,
                color: Color::Green,
            });
        });

    frame.render_widget(maze, board);

    let tooltip_block = Block::bordered()
        .title("(hjkl/arrows) move / (n) new maze / (esc) menu / (q) quit")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);
    let progress = Line::raw(format!(
        "maze {} / solved {}",
        app.session.generation(),
        app.session.solved()
    ))
    .centered();

    let tooltip_inner = tooltip_block.inner(tooltip_area);
    frame.render_widget(tooltip_block, tooltip_area);
    frame.render_widget(progress, tooltip_inner);

    app.board_area = Some(board);

    Ok(())
}

/// Renders a toast message in a small popup centered on screen.
///
/// # Errors
///
/// This function may return errors if the message is too long to be laid out on a terminal.
pub(crate) fn toast_popup(frame: &mut Frame, message: &str) -> Result<()> {
    let width = u16::try_from(message.len())?.saturating_add(4);

    let [row] = Layout::vertical([Constraint::Length(3)])
        .flex(Flex::Center)
        .areas(frame.area());
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);

    let block = Block::bordered()
        .style(Style::default().fg(Color::Yellow))
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);

    frame.render_widget(Clear, area);
    frame.render_widget(block, area);
    frame.render_widget(Line::raw(message).centered(), inner);

    Ok(())
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::{
        config::Config,
        grid::Dimensions,
        toast::{Toast, SOLVED_MESSAGE},
    };

    /// Creates a seeded app with the default maze size.
    fn create_test_app() -> App {
        let config = Config {
            seed: Some(12),
            ..Config::default()
        };
        App::new(&config).expect("default maze size is valid")
    }

    /// Creates a test terminal with known dimensions for UI testing.
    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 30);
        Terminal::new(backend).expect("failed to create test terminal")
    }

    /// Collects the rendered buffer into a single string.
    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_draw_main_menu() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing main menu should succeed");
        let text = screen_text(&terminal);
        assert!(text.contains("Start Game"), "menu should list Start Game");
        assert!(text.contains("New Maze"), "menu should list New Maze");
        assert!(text.contains("Quit"), "menu should list Quit");
    }

    #[test]
    fn test_draw_in_game_records_board() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.screen = Screen::InGame;

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing in-game screen should succeed");
        let board = app.board_area.expect("board area should be recorded");
        assert_eq!(board.width, 28, "7 columns of 4 terminal cells");
        assert_eq!(board.height, 20, "10 rows of 2 terminal cells");
        assert!(
            screen_text(&terminal).contains("maze 1 / solved 0"),
            "progress should be shown"
        );
    }

    #[test]
    fn test_draw_toast() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.screen = Screen::InGame;
        app.toast = Some(Toast::new(SOLVED_MESSAGE));

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing with a toast should succeed");
        assert!(
            screen_text(&terminal).contains(SOLVED_MESSAGE),
            "the toast message should be on screen"
        );
    }

    #[test]
    fn test_init_menu_entries() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            let layout = init_menu(frame, "Main Menu", 3);
            assert_eq!(layout.len(), 3, "main menu should have 3 items");
        });

        assert!(result.is_ok(), "initializing main menu should succeed");
    }

    #[test]
    fn test_wall_lines_of_closed_grid() {
        let grid = Grid::new(Dimensions::new(2, 3).expect("valid dimensions"));

        let lines = wall_lines(&grid).expect("walls should convert");

        assert_eq!(lines.len(), 24, "six closed cells with four walls each");
    }

    #[test]
    fn test_wall_lines_skip_open_walls() {
        let mut grid = Grid::new(Dimensions::new(2, 1).expect("valid dimensions"));
        grid.remove_wall(Position::ORIGIN, Direction::Right);

        let lines = wall_lines(&grid).expect("walls should convert");

        assert_eq!(lines.len(), 6, "the shared wall pair is not drawn");
    }

    #[test]
    fn test_marker_stays_inside_cell() {
        let dots = marker(Position::new(2, 0), 3).expect("marker should convert");

        assert_eq!(dots.len(), 81, "a 9 by 9 grid of dots");
        for (x, y) in dots {
            assert!((2.0..=3.0).contains(&x), "x {x} outside column 2");
            assert!((2.0..=3.0).contains(&y), "y {y} outside the top row");
        }
    }
}
