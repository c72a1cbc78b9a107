pub mod hud;
pub mod playfield;

use crate::assets::{Sprite, SpriteCache};
use crate::game::{GameStatus, ToothGuardGame};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Smallest terminal the scene is drawn in.
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 12;

/// Art the renderer draws with.
pub struct Scene<'a, S> {
    pub background: &'a Sprite,
    pub player: &'a Sprite,
    pub foods: &'a SpriteCache<S>,
    /// Track name while the music is on.
    pub now_playing: Option<&'a str>,
}

/// Draw one frame of the game.
pub fn draw<S>(frame: &mut Frame, game: &ToothGuardGame, scene: &Scene<S>) {
    let area = frame.size();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(frame, area);
        return;
    }

    playfield::render_playfield(frame, area, game, scene);

    match game.status {
        GameStatus::Playing => hud::render_hud(frame, area, game, scene.now_playing),
        GameStatus::GameOver => hud::render_game_over(frame, area),
    }
}

fn render_too_small(frame: &mut Frame, area: Rect) {
    let text = format!("Terminal too small (need {}x{})", MIN_WIDTH, MIN_HEIGHT);
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
