//! Tooth Guard data structures.

use super::catalog::FoodKind;
use crate::constants::{
    FOOD_FALL_SPEED, FOOD_SIZE, PLAYER_HEIGHT, PLAYER_START_X, PLAYER_STEP, PLAYER_WIDTH,
    PLAYER_Y, SCREEN_WIDTH, STARTING_HEALTH,
};

/// Axis-aligned rectangle in logical screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Strict overlap: rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.x as f64
            && x < self.right() as f64
            && y >= self.y as f64
            && y < self.bottom() as f64
    }
}

/// Current phase of the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// The tooth fairy. Only `x` changes during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub rect: Rect,
}

impl Player {
    pub fn new() -> Self {
        Self {
            rect: Rect::new(PLAYER_START_X, PLAYER_Y, PLAYER_WIDTH, PLAYER_HEIGHT),
        }
    }

    /// Highest x that keeps the hitbox on screen.
    pub const MAX_X: i32 = SCREEN_WIDTH - PLAYER_WIDTH;

    /// Move one frame's step in the held directions, staying on screen.
    pub fn step(&mut self, left: bool, right: bool) {
        let mut x = self.rect.x;
        if left {
            x -= PLAYER_STEP;
        }
        if right {
            x += PLAYER_STEP;
        }
        self.rect.x = x.clamp(0, Self::MAX_X);
    }

    pub fn reset(&mut self) {
        self.rect.x = PLAYER_START_X;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A food falling towards the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodItem {
    /// Unique per round; lets callers tell items apart after removal.
    pub id: u64,
    pub kind: FoodKind,
    pub rect: Rect,
    /// Pixels per frame, downward.
    pub speed: i32,
}

impl FoodItem {
    pub fn new(id: u64, kind: FoodKind, x: i32) -> Self {
        Self {
            id,
            kind,
            rect: Rect::new(x, 0, FOOD_SIZE, FOOD_SIZE),
            speed: FOOD_FALL_SPEED,
        }
    }

    pub fn fall(&mut self) {
        self.rect.y += self.speed;
    }
}

/// Main game state. Owned by the run loop and mutated only by the logic module.
#[derive(Debug, Clone)]
pub struct ToothGuardGame {
    pub status: GameStatus,
    pub health: i32,
    pub player: Player,
    /// Foods currently on screen, in spawn order.
    pub foods: Vec<FoodItem>,
    /// Result of the last catch, or the destruction notice.
    pub message: Option<String>,

    // Timing
    /// Milliseconds since the last spawn.
    pub spawn_accumulator_ms: u64,
    /// Sub-frame time not yet stepped.
    pub frame_accumulator_ms: u64,
    /// Total frames stepped this round.
    pub frame_count: u64,

    pub next_food_id: u64,
}

impl ToothGuardGame {
    pub fn new() -> Self {
        Self {
            status: GameStatus::Playing,
            health: STARTING_HEALTH,
            player: Player::new(),
            foods: Vec::new(),
            message: None,
            spawn_accumulator_ms: 0,
            frame_accumulator_ms: 0,
            frame_count: 0,
            next_food_id: 0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// Put a new food of `kind` at the top edge and return its id.
    pub fn push_food(&mut self, kind: FoodKind, x: i32) -> u64 {
        let id = self.next_food_id;
        self.next_food_id += 1;
        self.foods.push(FoodItem::new(id, kind, x));
        id
    }
}

impl Default for ToothGuardGame {
    fn default() -> Self {
        Self::new()
    }
}
