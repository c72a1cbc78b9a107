//! Tooth Guard game state and rules.
//!
//! Food falls from the top of the screen; the tooth fairy catches it. Healthy
//! foods raise health, sugary ones lower it, and the round ends when health
//! runs out. Everything here is terminal-agnostic: rendering and audio react
//! to the events returned by [`tick_game`].

pub mod catalog;
pub mod logic;
pub mod types;

pub use catalog::{Category, FoodKind};
pub use logic::*;
pub use types::*;
