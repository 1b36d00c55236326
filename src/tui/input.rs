//! Keyboard and mouse input mapping.

use super::layout::{ScreenLayout, Target};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tictactoe_rules::Position;
use tracing::{instrument, trace};

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place the current mark on a cell.
    Play(Position),
    /// Place the current mark on the cursor cell.
    PlayCursor,
    /// Move the keyboard cursor.
    MoveCursor(Direction),
    /// Start a new game.
    Reset,
    /// Leave the application.
    Quit,
}

/// Moves cursor one step, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Maps a terminal event to an action.
///
/// Mouse clicks are resolved against `layout`, the layout of the last
/// drawn frame; without one, clicks are ignored.
#[instrument(level = "trace", skip(layout))]
pub fn action_for(event: &Event, layout: Option<&ScreenLayout>) -> Option<Action> {
    let action = match event {
        Event::Key(key) => key_action(key),
        Event::Mouse(mouse) => layout.and_then(|layout| mouse_action(mouse, layout)),
        _ => None,
    };
    trace!(?action, "Mapped event");
    action
}

fn key_action(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
        (_, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) => Some(Action::Quit),
        (_, KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char('n') | KeyCode::Char('N')) => {
            Some(Action::Reset)
        }
        (_, KeyCode::Char(c @ '1'..='9')) => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Action::Play),
        (_, KeyCode::Enter | KeyCode::Char(' ')) => Some(Action::PlayCursor),
        (_, KeyCode::Up | KeyCode::Char('k')) => Some(Action::MoveCursor(Direction::Up)),
        (_, KeyCode::Down | KeyCode::Char('j')) => Some(Action::MoveCursor(Direction::Down)),
        (_, KeyCode::Left | KeyCode::Char('h')) => Some(Action::MoveCursor(Direction::Left)),
        (_, KeyCode::Right | KeyCode::Char('l')) => Some(Action::MoveCursor(Direction::Right)),
        _ => None,
    }
}

fn mouse_action(mouse: &MouseEvent, layout: &ScreenLayout) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match layout.hit(mouse.column, mouse.row)? {
            Target::Cell(pos) => Some(Action::Play(pos)),
            Target::Reset => Some(Action::Reset),
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_cursor_moves_within_grid() {
        assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Right), Position::BottomRight);
    }

    #[test]
    fn test_digits_map_to_one_based_cells() {
        assert_eq!(
            action_for(&key(KeyCode::Char('1')), None),
            Some(Action::Play(Position::TopLeft))
        );
        assert_eq!(
            action_for(&key(KeyCode::Char('9')), None),
            Some(Action::Play(Position::BottomRight))
        );
        assert_eq!(action_for(&key(KeyCode::Char('0')), None), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(action_for(&key(KeyCode::Char('q')), None), Some(Action::Quit));
        assert_eq!(action_for(&key(KeyCode::Esc), None), Some(Action::Quit));
        assert_eq!(action_for(&key(KeyCode::Char('r')), None), Some(Action::Reset));
        assert_eq!(action_for(&key(KeyCode::Enter), None), Some(Action::PlayCursor));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(action_for(&ctrl_c, None), Some(Action::Quit));
    }

    #[test]
    fn test_key_release_ignored() {
        let mut release = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(action_for(&Event::Key(release), None), None);
    }

    #[test]
    fn test_clicks_resolve_through_layout() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 30));
        let cell = layout.cell(Position::Center);
        assert_eq!(
            action_for(&click(cell.x + 1, cell.y + 1), Some(&layout)),
            Some(Action::Play(Position::Center))
        );
        let reset = *layout.reset();
        assert_eq!(
            action_for(&click(reset.x + 1, reset.y + 1), Some(&layout)),
            Some(Action::Reset)
        );
        assert_eq!(action_for(&click(0, 0), Some(&layout)), None);
        assert_eq!(action_for(&click(cell.x + 1, cell.y + 1), None), None);
    }
}
