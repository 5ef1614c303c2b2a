use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::PALETTE;
use crate::game::Snapshot;

/// Rows reserved below the board.
pub const HUD_HEIGHT: u16 = 2;

const KEY_HELP: &str = "[WASD]/[arrows] steer  [B] autopilot  [R] restart  [Q] quit";

/// Renders the status and key-help rows.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot) {
    let [status_row, help_row] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(status_line(snapshot)).alignment(Alignment::Center),
        status_row,
    );
    frame.render_widget(
        Paragraph::new(Line::from(KEY_HELP))
            .alignment(Alignment::Center)
            .style(Style::default().fg(PALETTE.hud)),
        help_row,
    );
}

fn status_line(snapshot: &Snapshot) -> Line<'static> {
    let muted = Style::default().fg(PALETTE.hud);
    let value = Style::default().add_modifier(Modifier::BOLD);
    let autopilot = if snapshot.autopilot { "on" } else { "off" };

    Line::from(vec![
        Span::styled("Score ", muted),
        Span::styled(snapshot.score.to_string(), value),
        Span::styled("  Length ", muted),
        Span::styled(snapshot.snake.len().to_string(), value),
        Span::styled("  Autopilot ", muted),
        Span::styled(autopilot, value),
    ])
}
