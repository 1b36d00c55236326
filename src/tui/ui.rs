//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tictactoe_rules::{Player, Position};

use super::layout::ScreenLayout;
use super::view::{
    CellView, FOOTER, GRID_LABEL, GameView, RESET_CAPTION, SUBTITLE, StatusTone, TITLE,
};
use crate::theme::Palette;

/// Renders the whole screen from a view.
///
/// `cursor` is the keyboard cursor cell; its accessible label is shown in
/// the help line.
pub fn draw(
    frame: &mut Frame,
    view: &GameView,
    layout: &ScreenLayout,
    palette: &Palette,
    cursor: Position,
) {
    let background =
        Block::default().style(Style::default().bg(palette.background).fg(palette.text));
    frame.render_widget(background, frame.area());

    draw_header(frame, *layout.header(), palette);
    draw_status(frame, *layout.status(), view, palette);
    for cell in view.cells() {
        let pos = *cell.position();
        draw_cell(frame, layout.cell(pos), cell, palette, pos == cursor, *view.read_only());
    }
    draw_reset(frame, *layout.reset(), palette);
    draw_help(frame, *layout.help(), view, palette, cursor);

    let footer = Paragraph::new(FOOTER)
        .style(Style::default().fg(palette.text).add_modifier(Modifier::DIM))
        .alignment(Alignment::Center);
    frame.render_widget(footer, *layout.footer());
}

fn draw_header(frame: &mut Frame, area: Rect, palette: &Palette) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(palette.primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(palette.text))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn draw_status(frame: &mut Frame, area: Rect, view: &GameView, palette: &Palette) {
    let accent = match view.tone() {
        StatusTone::Turn => palette.primary,
        StatusTone::Win => palette.secondary,
        StatusTone::Draw => palette.text,
    };

    let status = Paragraph::new(view.status_text().as_str())
        .style(Style::default().fg(accent).bg(palette.surface).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(accent)),
        );
    frame.render_widget(status, area);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    cell: &CellView,
    palette: &Palette,
    is_cursor: bool,
    read_only: bool,
) {
    let (text, mut style) = match cell.mark() {
        None => (
            cell.position().number().to_string(),
            Style::default().fg(palette.text).add_modifier(Modifier::DIM),
        ),
        Some(Player::X) => (
            "X".to_string(),
            Style::default().fg(palette.primary).add_modifier(Modifier::BOLD),
        ),
        Some(Player::O) => (
            "O".to_string(),
            Style::default().fg(palette.error).add_modifier(Modifier::BOLD),
        ),
    };

    // Finished games keep marks visible but hide the move hints.
    let text = if read_only && cell.mark().is_none() {
        String::new()
    } else {
        text
    };

    let mut surface = palette.surface;
    if *cell.winning() {
        surface = palette.secondary;
        style = style.fg(palette.surface);
    }

    let (border_type, border_color) = if is_cursor && !read_only {
        (BorderType::Thick, palette.primary)
    } else {
        (BorderType::Rounded, palette.text)
    };
    let mut border_style = Style::default().fg(border_color);
    if !cell.interactive() && !cell.winning() {
        border_style = border_style.add_modifier(Modifier::DIM);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(text, style)))
        .alignment(Alignment::Center)
        .style(Style::default().bg(surface))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style),
        );
    frame.render_widget(paragraph, area);
}

fn draw_reset(frame: &mut Frame, area: Rect, palette: &Palette) {
    let button = Paragraph::new(RESET_CAPTION)
        .style(
            Style::default()
                .fg(palette.primary)
                .bg(palette.surface)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.primary)),
        );
    frame.render_widget(button, area);
}

fn draw_help(frame: &mut Frame, area: Rect, view: &GameView, palette: &Palette, cursor: Position) {
    let focus = if *view.read_only() {
        format!("{} (read-only)", GRID_LABEL)
    } else {
        view.cell(cursor).label().clone()
    };

    let help = Paragraph::new(Line::from(vec![
        Span::styled(focus, Style::default().fg(palette.primary)),
        Span::styled(
            " | 1-9/click: play | R: reset | Q: quit",
            Style::default().fg(palette.text).add_modifier(Modifier::DIM),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use tictactoe_rules::Game;

    fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render(game: &Game, cursor: Position) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let view = GameView::from_snapshot(&game.snapshot());
        terminal
            .draw(|frame| {
                let layout = ScreenLayout::new(frame.area());
                draw(frame, &view, &layout, &Palette::default(), cursor);
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_fresh_game_screen() {
        let screen = render(&Game::new(), Position::Center);
        assert!(screen.contains(TITLE));
        assert!(screen.contains(SUBTITLE));
        assert!(screen.contains("Current turn: X"));
        assert!(screen.contains(RESET_CAPTION));
        assert!(screen.contains(FOOTER));
        assert!(screen.contains("Cell 5, empty"));
    }

    #[test]
    fn test_marks_and_winner_rendered() {
        let mut game = Game::new();
        for i in [0, 4, 1, 5, 2] {
            game.apply_move_at(i);
        }
        let screen = render(&game, Position::TopLeft);
        assert!(screen.contains("Winner: X"));
        assert!(screen.contains("Tic Tac Toe grid (read-only)"));
        assert!(!screen.contains("Current turn"));
    }

    #[test]
    fn test_winning_cells_use_highlight() {
        let mut game = Game::new();
        for i in [0, 4, 1, 5, 2] {
            game.apply_move_at(i);
        }
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let view = GameView::from_snapshot(&game.snapshot());
        let palette = Palette::default();
        let mut layout = None;
        terminal
            .draw(|frame| {
                let l = ScreenLayout::new(frame.area());
                draw(frame, &view, &l, &palette, Position::TopLeft);
                layout = Some(l);
            })
            .unwrap();
        let layout = layout.unwrap();
        let buffer = terminal.backend().buffer();

        let centre = |pos: Position| {
            let r = layout.cell(pos);
            (r.x + r.width / 2, r.y + r.height / 2)
        };
        let (x, y) = centre(Position::TopCenter);
        assert_eq!(buffer[(x, y)].symbol(), "X");
        assert_eq!(buffer[(x, y)].bg, palette.secondary);
        let (x, y) = centre(Position::Center);
        assert_eq!(buffer[(x, y)].symbol(), "O");
        assert_eq!(buffer[(x, y)].bg, palette.surface);
    }
}
