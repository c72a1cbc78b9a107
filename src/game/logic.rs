//! Tooth Guard game logic: spawning, movement, catches, retry.

use super::catalog::{Category, FoodKind};
use super::types::{GameStatus, ToothGuardGame};
use crate::assets::FoodSprites;
use crate::constants::{
    FOOD_SIZE, FRAME_MS, MAX_FRAME_DT_MS, SCREEN_HEIGHT, SCREEN_WIDTH, SPAWN_INTERVAL_MS,
    STARTING_HEALTH,
};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, warn};

/// UI-agnostic input for one loop iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Left arrow held.
    pub left: bool,
    /// Right arrow held.
    pub right: bool,
    /// R pressed (honoured on the game-over screen only).
    pub retry: bool,
    /// Esc pressed (honoured on the game-over screen only).
    pub escape: bool,
    /// Window-close signal; ends the loop in any state.
    pub quit: bool,
}

/// Something that happened during a tick, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Spawned { id: u64, kind: FoodKind },
    /// The kind's sprite could not be loaded, so nothing was spawned.
    SpawnSkipped { kind: FoodKind },
    Caught {
        id: u64,
        kind: FoodKind,
        category: Category,
        health: i32,
    },
    /// Health ran out; `kind` is the food that drained the last point.
    GameOver { kind: FoodKind },
    Retried,
}

/// Result of one call to [`tick_game`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickResult {
    pub events: Vec<GameEvent>,
    /// The run loop should exit.
    pub quit: bool,
}

/// Advance the game by `dt_ms` of wall-clock time.
///
/// While playing, spawns happen every [`SPAWN_INTERVAL_MS`] and movement is
/// stepped in fixed [`FRAME_MS`] frames. On the game-over screen only retry
/// and escape are read. Quit ends the loop from either state.
pub fn tick_game<R: Rng, S: FoodSprites>(
    game: &mut ToothGuardGame,
    dt_ms: u64,
    input: &FrameInput,
    rng: &mut R,
    sprites: &mut S,
) -> TickResult {
    let mut result = TickResult::default();

    if input.quit {
        result.quit = true;
        return result;
    }

    match game.status {
        GameStatus::Playing => {
            // Clamp dt so a stall does not replay a burst of frames
            let dt_ms = dt_ms.min(MAX_FRAME_DT_MS);

            game.spawn_accumulator_ms += dt_ms;
            while game.spawn_accumulator_ms >= SPAWN_INTERVAL_MS {
                game.spawn_accumulator_ms -= SPAWN_INTERVAL_MS;
                spawn_food(game, rng, sprites, &mut result);
            }

            game.frame_accumulator_ms += dt_ms;
            while game.frame_accumulator_ms >= FRAME_MS {
                game.frame_accumulator_ms -= FRAME_MS;
                step_frame(game, input, &mut result);

                if !game.is_playing() {
                    break;
                }
            }
        }
        GameStatus::GameOver => {
            if input.retry {
                retry(game);
                result.events.push(GameEvent::Retried);
            } else if input.escape {
                result.quit = true;
            }
        }
    }

    result
}

/// Spawn one random food at the top edge, unless its sprite is unavailable.
pub fn spawn_food<R: Rng, S: FoodSprites>(
    game: &mut ToothGuardGame,
    rng: &mut R,
    sprites: &mut S,
    result: &mut TickResult,
) {
    let kind = *FoodKind::ALL
        .choose(rng)
        .unwrap_or(&FoodKind::ALL[0]);
    let x = rng.gen_range(0..=SCREEN_WIDTH - FOOD_SIZE);

    if let Err(err) = sprites.prepare(kind) {
        warn!(food = kind.label(), error = %err, "skipping spawn");
        result.events.push(GameEvent::SpawnSkipped { kind });
        return;
    }

    let id = game.push_food(kind, x);
    debug!(id, food = kind.label(), x, "spawned food");
    result.events.push(GameEvent::Spawned { id, kind });
}

/// Single fixed-length frame: move, fall, catch, cull.
fn step_frame(game: &mut ToothGuardGame, input: &FrameInput, result: &mut TickResult) {
    game.frame_count += 1;

    // 1. Player movement
    game.player.step(input.left, input.right);

    // 2. Gravity
    for food in &mut game.foods {
        food.fall();
    }

    // 3. Catches, in spawn order. Each caught food is removed at once.
    let player_rect = game.player.rect;
    let mut index = 0;
    while index < game.foods.len() {
        if !game.is_playing() {
            break;
        }
        if game.foods[index].rect.intersects(&player_rect) {
            let food = game.foods.remove(index);
            resolve_catch(game, food.id, food.kind, result);
        } else {
            index += 1;
        }
    }

    // 4. Drop anything that fell past the bottom edge
    game.foods.retain(|food| food.rect.y < SCREEN_HEIGHT);
}

/// Apply one catch to health and the message line.
fn resolve_catch(game: &mut ToothGuardGame, id: u64, kind: FoodKind, result: &mut TickResult) {
    let category = kind.category();
    game.health += category.health_delta();
    game.message = Some(kind.catch_message());

    info!(food = kind.label(), health = game.health, "caught food");
    result.events.push(GameEvent::Caught {
        id,
        kind,
        category,
        health: game.health,
    });

    if category == Category::Bad && game.health <= 0 {
        game.status = GameStatus::GameOver;
        game.message = Some(kind.destruction_message());
        info!(food = kind.label(), "health depleted, game over");
        result.events.push(GameEvent::GameOver { kind });
    }
}

/// Start a fresh round from any state.
pub fn retry(game: &mut ToothGuardGame) {
    game.foods.clear();
    game.health = STARTING_HEALTH;
    game.status = GameStatus::Playing;
    game.message = None;
    game.player.reset();
    game.spawn_accumulator_ms = 0;
    game.frame_accumulator_ms = 0;
    game.frame_count = 0;
    info!("round restarted");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetError;
    use crate::constants::{PLAYER_START_X, PLAYER_Y};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::path::PathBuf;

    struct AllSprites;

    impl FoodSprites for AllSprites {
        fn prepare(&mut self, _kind: FoodKind) -> Result<(), AssetError> {
            Ok(())
        }
    }

    struct NoSprites;

    impl FoodSprites for NoSprites {
        fn prepare(&mut self, kind: FoodKind) -> Result<(), AssetError> {
            Err(AssetError::Missing {
                path: PathBuf::from(kind.file_name()),
            })
        }
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    /// Put a food directly on the player so the next frame catches it.
    fn drop_on_player(game: &mut ToothGuardGame, kind: FoodKind) -> u64 {
        let id = game.push_food(kind, game.player.rect.x);
        game.foods.last_mut().unwrap().rect.y = PLAYER_Y;
        id
    }

    fn one_frame(game: &mut ToothGuardGame, input: &FrameInput) -> TickResult {
        tick_game(game, FRAME_MS, input, &mut rng(), &mut AllSprites)
    }

    #[test]
    fn test_bad_catch_from_full_health() {
        let mut game = ToothGuardGame::new();
        drop_on_player(&mut game, FoodKind::Soda);

        let result = one_frame(&mut game, &FrameInput::default());

        assert_eq!(game.health, 4);
        assert_eq!(game.status, GameStatus::Playing);
        assert_eq!(game.message.as_deref(), Some("Soda: Enamel erosion (-1)"));
        assert!(game.foods.is_empty());
        assert!(matches!(
            result.events[0],
            GameEvent::Caught {
                category: Category::Bad,
                health: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_good_catch_raises_health() {
        let mut game = ToothGuardGame::new();
        drop_on_player(&mut game, FoodKind::Guava);

        one_frame(&mut game, &FrameInput::default());

        assert_eq!(game.health, 6);
        assert_eq!(
            game.message.as_deref(),
            Some("Vitamin C: Reduces gingival inflammation (+1)")
        );
    }

    #[test]
    fn test_last_point_ends_round() {
        let mut game = ToothGuardGame::new();
        game.health = 1;
        drop_on_player(&mut game, FoodKind::Cookie);

        let result = one_frame(&mut game, &FrameInput::default());

        assert_eq!(game.health, 0);
        assert_eq!(game.status, GameStatus::GameOver);
        assert_eq!(
            game.message.as_deref(),
            Some("Cookie destroyed your health. Game Over!")
        );
        assert_eq!(
            result.events.last(),
            Some(&GameEvent::GameOver {
                kind: FoodKind::Cookie
            })
        );
    }

    #[test]
    fn test_no_catches_after_game_over_in_same_frame() {
        let mut game = ToothGuardGame::new();
        game.health = 1;
        drop_on_player(&mut game, FoodKind::Chocolate);
        drop_on_player(&mut game, FoodKind::Milk);

        one_frame(&mut game, &FrameInput::default());

        assert_eq!(game.health, 0);
        assert_eq!(game.status, GameStatus::GameOver);
        assert_eq!(game.foods.len(), 1);
    }

    #[test]
    fn test_food_counted_once() {
        let mut game = ToothGuardGame::new();
        let id = drop_on_player(&mut game, FoodKind::Milk);

        let mut caught = 0;
        for _ in 0..30 {
            let result = one_frame(&mut game, &FrameInput::default());
            caught += result
                .events
                .iter()
                .filter(|e| matches!(e, GameEvent::Caught { id: got, .. } if *got == id))
                .count();
        }

        assert_eq!(caught, 1);
        assert_eq!(game.health, 6);
    }

    #[test]
    fn test_food_falls_each_frame() {
        let mut game = ToothGuardGame::new();
        game.push_food(FoodKind::Meat, 0);

        one_frame(&mut game, &FrameInput::default());
        one_frame(&mut game, &FrameInput::default());

        assert_eq!(game.foods[0].rect.y, 10);
    }

    #[test]
    fn test_offscreen_food_is_culled() {
        let mut game = ToothGuardGame::new();
        game.push_food(FoodKind::Meat, 0);
        game.foods[0].rect.y = SCREEN_HEIGHT - 3;

        one_frame(&mut game, &FrameInput::default());

        assert!(game.foods.is_empty());
        assert_eq!(game.health, 5);
    }

    #[test]
    fn test_spawn_every_second() {
        let mut game = ToothGuardGame::new();
        let mut rng = rng();
        let input = FrameInput::default();

        // 990ms: nothing yet
        for _ in 0..99 {
            tick_game(&mut game, 10, &input, &mut rng, &mut AllSprites);
        }
        assert!(game.foods.is_empty());

        let result = tick_game(&mut game, 10, &input, &mut rng, &mut AllSprites);
        assert!(matches!(result.events[0], GameEvent::Spawned { .. }));
        assert_eq!(game.foods.len(), 1);
        assert!(game.foods[0].rect.x >= 0 && game.foods[0].rect.x <= SCREEN_WIDTH - FOOD_SIZE);
    }

    #[test]
    fn test_missing_sprite_skips_spawn() {
        let mut game = ToothGuardGame::new();
        let mut result = TickResult::default();

        spawn_food(&mut game, &mut rng(), &mut NoSprites, &mut result);

        assert!(game.foods.is_empty());
        assert!(matches!(result.events[0], GameEvent::SpawnSkipped { .. }));
        assert!(game.is_playing());
    }

    #[test]
    fn test_large_dt_is_clamped() {
        let mut game = ToothGuardGame::new();
        let input = FrameInput {
            right: true,
            ..FrameInput::default()
        };

        tick_game(&mut game, 10_000, &input, &mut rng(), &mut AllSprites);

        // 100ms at 16ms/frame = 6 frames
        assert_eq!(game.frame_count, 6);
        assert_eq!(game.player.rect.x, PLAYER_START_X + 60);
        assert!(game.foods.is_empty());
    }

    #[test]
    fn test_no_spawns_during_game_over() {
        let mut game = ToothGuardGame::new();
        game.status = GameStatus::GameOver;

        for _ in 0..50 {
            tick_game(&mut game, 100, &FrameInput::default(), &mut rng(), &mut AllSprites);
        }

        assert!(game.foods.is_empty());
        assert_eq!(game.spawn_accumulator_ms, 0);
    }

    #[test]
    fn test_movement_ignored_during_game_over() {
        let mut game = ToothGuardGame::new();
        game.status = GameStatus::GameOver;
        let input = FrameInput {
            left: true,
            ..FrameInput::default()
        };

        tick_game(&mut game, 100, &input, &mut rng(), &mut AllSprites);

        assert_eq!(game.player.rect.x, PLAYER_START_X);
    }

    #[test]
    fn test_retry_from_game_over() {
        let mut game = ToothGuardGame::new();
        game.status = GameStatus::GameOver;
        game.health = 0;
        game.player.rect.x = 0;
        game.message = Some("x".to_string());
        game.push_food(FoodKind::Soda, 0);
        let input = FrameInput {
            retry: true,
            ..FrameInput::default()
        };

        let result = one_frame(&mut game, &input);

        assert_eq!(result.events, vec![GameEvent::Retried]);
        assert_eq!(game.health, 5);
        assert!(game.foods.is_empty());
        assert!(game.message.is_none());
        assert_eq!(game.status, GameStatus::Playing);
        assert_eq!(game.player.rect.x, PLAYER_START_X);
    }

    #[test]
    fn test_retry_ignored_while_playing() {
        let mut game = ToothGuardGame::new();
        game.health = 3;
        let input = FrameInput {
            retry: true,
            ..FrameInput::default()
        };

        let result = one_frame(&mut game, &input);

        assert!(!result.events.contains(&GameEvent::Retried));
        assert_eq!(game.health, 3);
    }

    #[test]
    fn test_escape_quits_only_from_game_over() {
        let mut game = ToothGuardGame::new();
        let input = FrameInput {
            escape: true,
            ..FrameInput::default()
        };

        assert!(!one_frame(&mut game, &input).quit);

        game.status = GameStatus::GameOver;
        assert!(one_frame(&mut game, &input).quit);
    }

    #[test]
    fn test_quit_from_any_state() {
        let input = FrameInput {
            quit: true,
            ..FrameInput::default()
        };

        let mut game = ToothGuardGame::new();
        assert!(one_frame(&mut game, &input).quit);

        game.status = GameStatus::GameOver;
        assert!(one_frame(&mut game, &input).quit);
    }
}
