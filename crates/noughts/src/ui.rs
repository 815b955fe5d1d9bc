//! Stateless UI rendering for tic-tac-toe.

use noughts_core::{GRID, GameStatus, Player, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::layout::{BoardLayout, RESTART_LABEL};

/// Draws the board and HUD, returning the geometry used so clicks can be
/// mapped back onto it.
pub fn draw(frame: &mut Frame, app: &App) -> BoardLayout {
    let area = frame.area();
    let (cell_width, cell_height) = app.cell_size();
    let layout = BoardLayout::new(area, cell_width, cell_height);

    if layout.board().y > area.y {
        let title = Paragraph::new("Tic-Tac-Toe")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(title, Rect::new(area.x, area.y, area.width, 1));
    }

    draw_board(frame, &layout, app);
    draw_hud(frame, &layout, app);

    layout
}

fn draw_board(frame: &mut Frame, layout: &BoardLayout, app: &App) {
    let game = app.game();
    let winning_line = game.status().winning_line();
    let cursor = app.cursor();

    for row in 0..GRID {
        for col in 0..GRID {
            let Some(area) = layout.cell(row, col) else {
                continue;
            };

            // Grid lines: right edge on the first two columns, bottom edge
            // on the first two rows.
            let mut borders = Borders::NONE;
            if col < GRID - 1 {
                borders |= Borders::RIGHT;
            }
            if row < GRID - 1 {
                borders |= Borders::BOTTOM;
            }

            let highlighted = winning_line.is_some_and(|line| line.contains(row, col));
            let selected = !game.is_over() && cursor.row == row && cursor.col == col;
            let background = if highlighted {
                Style::default().bg(Color::Red)
            } else if selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            let block = Block::default()
                .borders(borders)
                .border_style(Style::default().fg(Color::White))
                .style(background);
            frame.render_widget(block, area);

            let square = game.board().get(row, col).unwrap_or_default();
            let (symbol, style) = match square {
                Square::Occupied(Player::X) => (
                    "X".to_string(),
                    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                ),
                Square::Occupied(Player::O) => (
                    "O".to_string(),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
                Square::Empty if app.show_cell_numbers() => (
                    (row * GRID + col + 1).to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Square::Empty => (String::new(), Style::default()),
            };
            let style = if highlighted {
                style.fg(Color::White)
            } else {
                style
            };

            let glyph = Paragraph::new(Line::from(Span::styled(symbol, style)))
                .alignment(Alignment::Center);
            frame.render_widget(glyph, glyph_area(area));
        }
    }
}

/// The one-line strip a mark is centered in, left of the right grid line.
fn glyph_area(cell: Rect) -> Rect {
    Rect::new(
        cell.x,
        cell.y + cell.height.saturating_sub(1) / 2,
        cell.width.saturating_sub(1).max(1),
        cell.height.min(1),
    )
    .intersection(cell)
}

fn draw_hud(frame: &mut Frame, layout: &BoardLayout, app: &App) {
    let game = app.game();
    let status_style = match game.status() {
        GameStatus::InProgress => Style::default().fg(Color::Yellow),
        GameStatus::Won { .. } => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        GameStatus::Draw => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
    };
    let status = Paragraph::new(game.status_message())
        .style(status_style)
        .alignment(Alignment::Center);
    frame.render_widget(status, *layout.status());

    let restart = Paragraph::new(RESTART_LABEL).style(
        Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::UNDERLINED),
    );
    frame.render_widget(restart, *layout.restart());
}
