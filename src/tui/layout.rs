//! Screen layout and mouse hit-testing.
//!
//! The renderer and the mouse handler share one [`ScreenLayout`], so a
//! click always lands on exactly what was drawn there.

use derive_getters::Getters;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use tictactoe_rules::Position;
use tracing::instrument;

/// Width of one cell, borders included.
pub const CELL_WIDTH: u16 = 9;
/// Height of one cell, borders included.
pub const CELL_HEIGHT: u16 = 3;
/// Gap between neighbouring cells.
const CELL_GAP: u16 = 1;
const GRID_WIDTH: u16 = CELL_WIDTH * 3 + CELL_GAP * 2;
const GRID_HEIGHT: u16 = CELL_HEIGHT * 3;
const STATUS_WIDTH: u16 = 25;
const RESET_WIDTH: u16 = 16;
const CONTENT_WIDTH: u16 = 76;
/// Rows needed to show everything.
const CONTENT_HEIGHT: u16 = 2 + 1 + 3 + 1 + GRID_HEIGHT + 1 + 3 + 1 + 1;

/// Something a click can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// One of the nine cells.
    Cell(Position),
    /// The reset button.
    Reset,
}

/// Rectangles for every part of the screen.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ScreenLayout {
    /// Title and subtitle.
    header: Rect,
    /// Status indicator.
    status: Rect,
    /// The 3x3 grid.
    grid: Rect,
    /// Cells in row-major order.
    cells: [Rect; 9],
    /// Reset button.
    reset: Rect,
    /// Keyboard help and cursor label.
    help: Rect,
    /// Footer line.
    footer: Rect,
}

impl ScreenLayout {
    /// Lays out the screen inside `area`.
    #[instrument(level = "trace")]
    pub fn new(area: Rect) -> Self {
        let content = center_rect(
            area,
            area.width.min(CONTENT_WIDTH),
            area.height.min(CONTENT_HEIGHT),
        );

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),           // Title + subtitle
                Constraint::Length(1),
                Constraint::Length(3),           // Status
                Constraint::Length(1),
                Constraint::Length(GRID_HEIGHT), // Grid
                Constraint::Length(1),
                Constraint::Length(3),           // Reset
                Constraint::Length(1),           // Help
                Constraint::Length(1),           // Footer
            ])
            .split(content);

        let grid = center_rect(rows[4], GRID_WIDTH, GRID_HEIGHT);

        Self {
            header: rows[0],
            status: center_rect(rows[2], STATUS_WIDTH, 3),
            grid,
            cells: grid_cells(grid),
            reset: center_rect(rows[6], RESET_WIDTH, 3),
            help: rows[7],
            footer: rows[8],
        }
    }

    /// Rectangle of one cell.
    pub fn cell(&self, position: Position) -> Rect {
        self.cells[position.to_index()]
    }

    /// Finds what sits under the given terminal coordinates.
    #[instrument(level = "trace", skip(self))]
    pub fn hit(&self, column: u16, row: u16) -> Option<Target> {
        if contains(self.reset, column, row) {
            return Some(Target::Reset);
        }
        Position::ALL
            .into_iter()
            .find(|&pos| contains(self.cell(pos), column, row))
            .map(Target::Cell)
    }
}

fn grid_cells(grid: Rect) -> [Rect; 9] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(grid);

    let mut cells = [Rect::default(); 9];
    for (r, row) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(CELL_GAP),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(CELL_GAP),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(*row);
        for c in 0..3 {
            cells[r * 3 + c] = cols[c * 2];
        }
    }
    cells
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    rect.width > 0
        && rect.height > 0
        && column >= rect.x
        && column < rect.right()
        && row >= rect.y
        && row < rect.bottom()
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
