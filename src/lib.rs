//! Tooth Guard - a terminal arcade game about feeding your teeth well.
//!
//! This module exposes the game logic for testing and for the binary.

pub mod assets;
pub mod audio;
pub mod build_info;
pub mod constants;
pub mod game;
pub mod input;
pub mod logging;
pub mod terminal;
pub mod ui;

pub use assets::{AssetError, FsAssets, LoadedAssets, SpriteCache};
pub use game::{tick_game, FrameInput, GameEvent, GameStatus, ToothGuardGame};
