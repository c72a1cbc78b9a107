// Logical screen (all game coordinates live in this space)
pub const SCREEN_WIDTH: i32 = 1400;
pub const SCREEN_HEIGHT: i32 = 800;

// Player hitbox and sprite
pub const PLAYER_WIDTH: i32 = 100;
pub const PLAYER_HEIGHT: i32 = 100;
pub const PLAYER_SPRITE_WIDTH: i32 = 170;
pub const PLAYER_SPRITE_HEIGHT: i32 = 150;
pub const PLAYER_START_X: i32 = SCREEN_WIDTH / 2;
pub const PLAYER_Y: i32 = SCREEN_HEIGHT - 170;
pub const PLAYER_STEP: i32 = 10;

// Falling food
pub const FOOD_SIZE: i32 = 100;
pub const FOOD_FALL_SPEED: i32 = 5;

// Health
pub const STARTING_HEALTH: i32 = 5;

// Timing
pub const SPAWN_INTERVAL_MS: u64 = 1000;
pub const FRAME_MS: u64 = 16; // ~60 FPS
pub const MAX_FRAME_DT_MS: u64 = 100;

// Terminals without key-release reporting. A first press holds until the
// keyboard's auto-repeat delay has passed; after that each repeat holds for
// the shorter window.
pub const KEY_FIRST_HOLD_MS: u64 = 500;
pub const KEY_HOLD_MS: u64 = 150;

// Logical pixels per stored sprite texel
pub const SPRITE_TEXEL: u32 = 5;

// Asset file names, resolved next to the executable
pub const BACKGROUND_FILE: &str = "bgg2.png";
pub const PLAYER_FILE: &str = "toofairy.png";
pub const MUSIC_FILE: &str = "guitar.mp3";
pub const SUCCESS_CUE_FILE: &str = "correct-156911.mp3";
pub const BUZZER_CUE_FILE: &str = "buzzer.mp3";
