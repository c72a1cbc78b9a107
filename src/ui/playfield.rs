//! Half-block rasteriser for the play field.
//!
//! Each terminal cell shows two vertical pixels with `▀`: the foreground is
//! the upper pixel, the background the lower one. Every pixel is mapped back
//! into the logical 1400×800 screen and coloured from the topmost sprite
//! covering it.

use super::Scene;
use crate::assets::Sprite;
use crate::constants::{PLAYER_SPRITE_HEIGHT, PLAYER_SPRITE_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::game::{Category, FoodItem, GameStatus, Rect as WorldRect, ToothGuardGame};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const UPPER_HALF: char = '▀';

// Shown where the background image is transparent
const BACKDROP: (u8, u8, u8) = (20, 24, 40);

/// Render background, falling foods and the player into `area`.
///
/// On the game-over screen only the background is drawn.
pub fn render_playfield<S>(frame: &mut Frame, area: Rect, game: &ToothGuardGame, scene: &Scene<S>) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let px_w = SCREEN_WIDTH as f64 / area.width as f64;
    let px_h = SCREEN_HEIGHT as f64 / (area.height as f64 * 2.0);
    let show_sprites = game.status == GameStatus::Playing;

    let lines: Vec<Line> = (0..area.height)
        .map(|row| {
            let mut spans: Vec<Span> = Vec::new();
            let mut current_fg = Color::Reset;
            let mut current_bg = Color::Reset;
            let mut current_text = String::new();

            for col in 0..area.width {
                let lx = (col as f64 + 0.5) * px_w;
                let upper_y = (row as f64 * 2.0 + 0.5) * px_h;
                let lower_y = (row as f64 * 2.0 + 1.5) * px_h;

                let fg = rgb(pixel_at(lx, upper_y, game, scene, show_sprites));
                let bg = rgb(pixel_at(lx, lower_y, game, scene, show_sprites));

                if (fg != current_fg || bg != current_bg) && !current_text.is_empty() {
                    spans.push(Span::styled(
                        std::mem::take(&mut current_text),
                        Style::default().fg(current_fg).bg(current_bg),
                    ));
                }
                current_fg = fg;
                current_bg = bg;
                current_text.push(UPPER_HALF);
            }
            if !current_text.is_empty() {
                spans.push(Span::styled(
                    current_text,
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Colour of the logical point (`x`, `y`).
fn pixel_at<S>(
    x: f64,
    y: f64,
    game: &ToothGuardGame,
    scene: &Scene<S>,
    show_sprites: bool,
) -> (u8, u8, u8) {
    if show_sprites {
        // Player is drawn last, so it wins
        let player_art = WorldRect::new(
            game.player.rect.x,
            game.player.rect.y,
            PLAYER_SPRITE_WIDTH,
            PLAYER_SPRITE_HEIGHT,
        );
        if let Some(color) = sample_in(scene.player, &player_art, x, y) {
            return color;
        }

        for food in game.foods.iter().rev() {
            if let Some(color) = food_pixel(food, scene, x, y) {
                return color;
            }
        }
    }

    scene
        .background
        .sample(x / SCREEN_WIDTH as f64, y / SCREEN_HEIGHT as f64)
        .unwrap_or(BACKDROP)
}

fn food_pixel<S>(food: &FoodItem, scene: &Scene<S>, x: f64, y: f64) -> Option<(u8, u8, u8)> {
    if !food.rect.contains_point(x, y) {
        return None;
    }
    match scene.foods.get(food.kind) {
        Some(sprite) => sample_in(sprite, &food.rect, x, y),
        // Never drawn without art in practice; tint by category
        None => Some(match food.kind.category() {
            Category::Good => (60, 180, 75),
            Category::Bad => (200, 50, 50),
        }),
    }
}

/// Sample `sprite` stretched over `rect`, if (`x`, `y`) falls inside.
fn sample_in(sprite: &Sprite, rect: &WorldRect, x: f64, y: f64) -> Option<(u8, u8, u8)> {
    if !rect.contains_point(x, y) {
        return None;
    }
    let u = (x - rect.x as f64) / rect.w as f64;
    let v = (y - rect.y as f64) / rect.h as f64;
    sprite.sample(u, v)
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{FsAssets, SpriteCache};
    use crate::game::FoodKind;

    fn scene<'a>(
        background: &'a Sprite,
        player: &'a Sprite,
        foods: &'a SpriteCache<FsAssets>,
    ) -> Scene<'a, FsAssets> {
        Scene {
            background,
            player,
            foods,
            now_playing: None,
        }
    }

    #[test]
    fn test_background_fills_empty_space() {
        let background = Sprite::solid(2, 2, [1, 2, 3, 255]);
        let player = Sprite::solid(2, 2, [9, 9, 9, 255]);
        let foods = SpriteCache::new(FsAssets::new("unused"));
        let game = ToothGuardGame::new();

        let color = pixel_at(10.0, 10.0, &game, &scene(&background, &player, &foods), true);
        assert_eq!(color, (1, 2, 3));
    }

    #[test]
    fn test_transparent_background_uses_backdrop() {
        let background = Sprite::solid(2, 2, [1, 2, 3, 0]);
        let player = Sprite::solid(2, 2, [9, 9, 9, 255]);
        let foods = SpriteCache::new(FsAssets::new("unused"));
        let game = ToothGuardGame::new();

        let color = pixel_at(10.0, 10.0, &game, &scene(&background, &player, &foods), true);
        assert_eq!(color, BACKDROP);
    }

    #[test]
    fn test_player_drawn_over_food() {
        let background = Sprite::solid(2, 2, [1, 2, 3, 255]);
        let player = Sprite::solid(2, 2, [9, 9, 9, 255]);
        let foods = SpriteCache::new(FsAssets::new("unused"));
        let mut game = ToothGuardGame::new();
        game.push_food(FoodKind::Soda, game.player.rect.x);
        game.foods[0].rect.y = game.player.rect.y;

        let x = game.player.rect.x as f64 + 10.0;
        let y = game.player.rect.y as f64 + 10.0;
        let color = pixel_at(x, y, &game, &scene(&background, &player, &foods), true);
        assert_eq!(color, (9, 9, 9));
    }

    #[test]
    fn test_food_without_art_is_tinted() {
        let background = Sprite::solid(2, 2, [1, 2, 3, 255]);
        let player = Sprite::solid(2, 2, [9, 9, 9, 255]);
        let foods = SpriteCache::new(FsAssets::new("unused"));
        let mut game = ToothGuardGame::new();
        game.push_food(FoodKind::Milk, 0);

        let color = pixel_at(50.0, 50.0, &game, &scene(&background, &player, &foods), true);
        assert_eq!(color, (60, 180, 75));
    }

    #[test]
    fn test_game_over_hides_sprites() {
        let background = Sprite::solid(2, 2, [1, 2, 3, 255]);
        let player = Sprite::solid(2, 2, [9, 9, 9, 255]);
        let foods = SpriteCache::new(FsAssets::new("unused"));
        let game = ToothGuardGame::new();

        let x = game.player.rect.x as f64 + 10.0;
        let y = game.player.rect.y as f64 + 10.0;
        let color = pixel_at(x, y, &game, &scene(&background, &player, &foods), false);
        assert_eq!(color, (1, 2, 3));
    }
}
