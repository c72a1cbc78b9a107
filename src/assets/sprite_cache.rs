//! Food sprites, loaded the first time each kind spawns.

use super::{AssetError, AssetSource, Sprite};
use crate::constants::FOOD_SIZE;
use crate::game::FoodKind;
use std::collections::HashMap;
use tracing::debug;

/// Spawn-time access to food sprites.
pub trait FoodSprites {
    /// Make sure `kind` can be drawn. An error means this spawn is skipped.
    fn prepare(&mut self, kind: FoodKind) -> Result<(), AssetError>;
}

/// Caches decoded food sprites. Failed loads are not cached, so a file that
/// appears later is picked up on the next spawn of that kind.
pub struct SpriteCache<S> {
    source: S,
    sprites: HashMap<FoodKind, Sprite>,
}

impl<S> SpriteCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            sprites: HashMap::new(),
        }
    }

    pub fn get(&self, kind: FoodKind) -> Option<&Sprite> {
        self.sprites.get(&kind)
    }
}

impl<S: AssetSource> FoodSprites for SpriteCache<S> {
    fn prepare(&mut self, kind: FoodKind) -> Result<(), AssetError> {
        if self.sprites.contains_key(&kind) {
            return Ok(());
        }
        let sprite = self
            .source
            .load_image(kind.file_name(), FOOD_SIZE, FOOD_SIZE)?;
        debug!(food = kind.label(), "cached food sprite");
        self.sprites.insert(kind, sprite);
        Ok(())
    }
}
