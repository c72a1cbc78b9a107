//! Startup asset loading.
//!
//! Images are decoded with the `image` crate and downsampled into [`Sprite`]s
//! small enough to sample per terminal cell. Sounds are only located: playback
//! is left to the audio backend. Every required file is checked up front by
//! [`load_required`], which returns an error instead of exiting so callers
//! decide how to fail.

mod sprite_cache;

pub use sprite_cache::{FoodSprites, SpriteCache};

use crate::constants::{
    BACKGROUND_FILE, BUZZER_CUE_FILE, MUSIC_FILE, PLAYER_FILE, PLAYER_SPRITE_HEIGHT,
    PLAYER_SPRITE_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH, SPRITE_TEXEL, SUCCESS_CUE_FILE,
};
use image::imageops::FilterType;
use image::DynamicImage;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset file not found: {}", .path.display())]
    Missing { path: PathBuf },

    #[error("could not decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl AssetError {
    pub fn path(&self) -> &Path {
        match self {
            AssetError::Missing { path } | AssetError::Decode { path, .. } => path.as_path(),
        }
    }
}

/// An RGBA image stored at reduced resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA texels.
    pub pixels: Vec<[u8; 4]>,
}

impl Sprite {
    /// Downsample `image` for drawing at `width`×`height` logical pixels.
    pub fn from_image(image: &DynamicImage, width: i32, height: i32) -> Self {
        let texel_w = (width.max(1) as u32 / SPRITE_TEXEL).max(1);
        let texel_h = (height.max(1) as u32 / SPRITE_TEXEL).max(1);
        let scaled = image
            .resize_exact(texel_w, texel_h, FilterType::Triangle)
            .to_rgba8();

        Self {
            width: texel_w,
            height: texel_h,
            pixels: scaled.pixels().map(|p| p.0).collect(),
        }
    }

    /// Uniform sprite, handy as a stand-in when no art is available.
    pub fn solid(width: u32, height: u32, color: [u8; 4]) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; (width * height) as usize],
        }
    }

    /// Colour at normalised coordinates (`u`, `v` in `[0, 1)`).
    ///
    /// Returns `None` for mostly transparent texels and out-of-range input.
    pub fn sample(&self, u: f64, v: f64) -> Option<(u8, u8, u8)> {
        if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) || self.pixels.is_empty() {
            return None;
        }
        let x = ((u * self.width as f64) as u32).min(self.width - 1);
        let y = ((v * self.height as f64) as u32).min(self.height - 1);
        let [r, g, b, a] = self.pixels[(y * self.width + x) as usize];
        (a >= 128).then_some((r, g, b))
    }
}

/// Where images and sounds come from.
pub trait AssetSource {
    /// Load and downsample an image drawn at `width`×`height` logical pixels.
    fn load_image(&self, name: &str, width: i32, height: i32) -> Result<Sprite, AssetError>;

    /// Resolve a sound file, failing if it does not exist.
    fn locate_sound(&self, name: &str) -> Result<PathBuf, AssetError>;
}

/// Assets read from a directory on disk.
#[derive(Debug, Clone)]
pub struct FsAssets {
    root: PathBuf,
}

impl FsAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn existing_file(&self, name: &str) -> Result<PathBuf, AssetError> {
        let path = self.root.join(name);
        if path.is_file() {
            Ok(path)
        } else {
            Err(AssetError::Missing { path })
        }
    }
}

impl AssetSource for FsAssets {
    fn load_image(&self, name: &str, width: i32, height: i32) -> Result<Sprite, AssetError> {
        let path = self.existing_file(name)?;
        let image = image::open(&path).map_err(|source| AssetError::Decode {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), w = image.width(), h = image.height(), "decoded image");
        Ok(Sprite::from_image(&image, width, height))
    }

    fn locate_sound(&self, name: &str) -> Result<PathBuf, AssetError> {
        self.existing_file(name)
    }
}

/// Paths of the three sounds the game plays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundBank {
    pub music: PathBuf,
    pub success: PathBuf,
    pub buzzer: PathBuf,
}

impl SoundBank {
    /// File name of the background track, for the HUD.
    pub fn track_name(&self) -> String {
        self.music
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Everything the game needs before the loop starts.
#[derive(Debug, Clone)]
pub struct LoadedAssets {
    pub background: Sprite,
    pub player: Sprite,
    pub sounds: SoundBank,
}

/// Load every required asset, stopping at the first one that is missing.
///
/// Food sprites are not required here; they load on first spawn.
pub fn load_required<S: AssetSource>(source: &S) -> Result<LoadedAssets, AssetError> {
    let background = source.load_image(BACKGROUND_FILE, SCREEN_WIDTH, SCREEN_HEIGHT)?;
    let sounds = SoundBank {
        music: source.locate_sound(MUSIC_FILE)?,
        success: source.locate_sound(SUCCESS_CUE_FILE)?,
        buzzer: source.locate_sound(BUZZER_CUE_FILE)?,
    };
    let player = source.load_image(PLAYER_FILE, PLAYER_SPRITE_WIDTH, PLAYER_SPRITE_HEIGHT)?;

    info!("required assets loaded");
    Ok(LoadedAssets {
        background,
        player,
        sounds,
    })
}

/// Directory holding the executable, where assets are expected.
pub fn default_asset_dir() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine executable directory",
        )
    })
}
