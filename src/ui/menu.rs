use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::config::PALETTE;

pub const GAME_OVER_MESSAGE: &str = "Game Over! Press R to Restart";

pub const STALLED_MESSAGE: &str = "Board full! Press R to Restart";

/// Draws the collision message across the middle of the board.
pub fn render_game_over_message(frame: &mut Frame<'_>, board: Rect) {
    render_banner(frame, board, GAME_OVER_MESSAGE);
}

/// Draws the board-full message across the middle of the board.
pub fn render_stalled_message(frame: &mut Frame<'_>, board: Rect) {
    render_banner(frame, board, STALLED_MESSAGE);
}

fn render_banner(frame: &mut Frame<'_>, board: Rect, message: &str) {
    let banner = centered_row(board, message);
    frame.render_widget(Clear, banner);
    frame.render_widget(
        Paragraph::new(Line::from(message.to_owned()))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(PALETTE.message)
                    .add_modifier(Modifier::BOLD),
            ),
        banner,
    );
}

/// One-row rect wide enough for `message` plus a column of padding on each
/// side, centered in `area` and clipped to it.
fn centered_row(area: Rect, message: &str) -> Rect {
    let wanted = u16::try_from(message.width().saturating_add(2)).unwrap_or(u16::MAX);
    let width = wanted.min(area.width);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + area.height / 2,
        width,
        height: area.height.min(1),
    }
}
