use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};

use crate::config::{GLYPH_CELL, PALETTE};
use crate::game::{GameStatus, Snapshot};
use crate::snake::Position;
use crate::ui::hud::{HUD_HEIGHT, render_hud};
use crate::ui::menu::{render_game_over_message, render_stalled_message};

/// Renders the full game frame from an immutable snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot, cell_columns: u16) {
    let area = frame.area();
    let [board_row, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(HUD_HEIGHT)]).areas(area);

    let board = board_area(board_row, snapshot, cell_columns);
    let buffer = frame.buffer_mut();

    draw_checkerboard(buffer, board, snapshot, cell_columns);
    for apple in &snapshot.apples {
        fill_cell(buffer, board, snapshot, cell_columns, *apple, PALETTE.apple);
    }
    for segment in &snapshot.snake {
        fill_cell(buffer, board, snapshot, cell_columns, *segment, PALETTE.snake);
    }

    render_hud(frame, hud_area, snapshot);

    match snapshot.status {
        GameStatus::GameOver => render_game_over_message(frame, board),
        GameStatus::Stalled => render_stalled_message(frame, board),
        GameStatus::Playing => {}
    }
}

/// Centers the board in `area`, clipping it when the terminal is too small.
fn board_area(area: Rect, snapshot: &Snapshot, cell_columns: u16) -> Rect {
    let width = snapshot
        .grid
        .width
        .saturating_mul(cell_columns)
        .min(area.width);
    let height = snapshot.grid.height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn draw_checkerboard(buffer: &mut Buffer, board: Rect, snapshot: &Snapshot, cell_columns: u16) {
    for y in 0..i32::from(snapshot.grid.height) {
        for x in 0..i32::from(snapshot.grid.width) {
            let color = if (x + y) % 2 == 0 {
                PALETTE.board_light
            } else {
                PALETTE.board_dark
            };
            fill_cell(buffer, board, snapshot, cell_columns, Position::new(x, y), color);
        }
    }
}

fn fill_cell(
    buffer: &mut Buffer,
    board: Rect,
    snapshot: &Snapshot,
    cell_columns: u16,
    position: Position,
    color: Color,
) {
    let Some((x, y)) = logical_to_terminal(board, snapshot, cell_columns, position) else {
        return;
    };

    let style = Style::new().fg(color).bg(color);
    for column in 0..cell_columns {
        let x = x.saturating_add(column);
        if x >= board.right() {
            break;
        }
        buffer.set_string(x, y, GLYPH_CELL, style);
    }
}

fn logical_to_terminal(
    board: Rect,
    snapshot: &Snapshot,
    cell_columns: u16,
    position: Position,
) -> Option<(u16, u16)> {
    if !position.is_within_bounds(snapshot.grid) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.saturating_mul(cell_columns);
    let y_offset = u16::try_from(position.y).ok()?;

    let x = board.x.saturating_add(x_offset);
    let y = board.y.saturating_add(y_offset);
    if x >= board.right() || y >= board.bottom() {
        return None;
    }

    Some((x, y))
}
