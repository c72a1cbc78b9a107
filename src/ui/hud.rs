//! Outlined text drawn over the play field.

use crate::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::game::ToothGuardGame;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

// Text anchors in logical pixels
const TEXT_X: i32 = 40;
const HEALTH_Y: i32 = 10;
const MESSAGE_Y: i32 = 70;
const GAME_OVER_Y: i32 = SCREEN_HEIGHT / 2 - 50;
const PROMPT_Y: i32 = SCREEN_HEIGHT / 2 + 20;

/// Health counter, last catch message and the music indicator.
pub fn render_hud(frame: &mut Frame, area: Rect, game: &ToothGuardGame, now_playing: Option<&str>) {
    draw_outlined(frame, area, &format!("Health: {}", game.health), HEALTH_Y);

    if let Some(message) = &game.message {
        // Keep the message off the health row on short terminals
        let health_row = logical_row(area, HEALTH_Y);
        let row = logical_row(area, MESSAGE_Y).max(health_row + 1);
        draw_outlined_at_row(frame, area, message, row);
    }

    if let Some(track) = now_playing {
        let label = format!(" ♪ {} ", track);
        let width = label.chars().count() as u16;
        if width < area.width {
            let rect = Rect::new(area.x + area.width - width - 1, area.y, width, 1);
            let span = Span::styled(
                label,
                Style::default().fg(Color::White).bg(Color::Rgb(40, 40, 60)),
            );
            frame.render_widget(Paragraph::new(span), rect);
        }
    }
}

/// Fixed two-line game-over text.
pub fn render_game_over(frame: &mut Frame, area: Rect) {
    draw_outlined(frame, area, "Bad food destroyed your health.", GAME_OVER_Y);

    let title_row = logical_row(area, GAME_OVER_Y);
    let row = logical_row(area, PROMPT_Y).max(title_row + 1);
    draw_outlined_at_row(frame, area, "Press R to Retry or ESC to Quit", row);
}

fn logical_row(area: Rect, y: i32) -> u16 {
    (y as f64 / SCREEN_HEIGHT as f64 * area.height as f64) as u16
}

fn draw_outlined(frame: &mut Frame, area: Rect, text: &str, y: i32) {
    draw_outlined_at_row(frame, area, text, logical_row(area, y));
}

/// Dark bold text on a light band, the terminal stand-in for an outline.
fn draw_outlined_at_row(frame: &mut Frame, area: Rect, text: &str, row: u16) {
    if row >= area.height {
        return;
    }
    let col = (TEXT_X as f64 / SCREEN_WIDTH as f64 * area.width as f64) as u16;
    let padded = format!(" {} ", text);
    let width = (padded.chars().count() as u16).min(area.width.saturating_sub(col));
    if width == 0 {
        return;
    }

    let span = Span::styled(
        padded,
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD),
    );
    let rect = Rect::new(area.x + col, area.y + row, width, 1);
    frame.render_widget(Paragraph::new(span), rect);
}
