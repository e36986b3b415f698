//! Sprite catalog: named images and named animation frame sequences
//!
//! The catalog is loaded once and shared read-only by every tile on the
//! board. Lookups never fail; a missing name simply means "do not draw".

use crate::io::error::{GridError, Result};
use image::RgbaImage;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A named RGBA image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    name: String,
    image: RgbaImage,
}

impl Sprite {
    /// Wrap an image under a catalog name
    pub fn new(name: impl Into<String>, image: RgbaImage) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }

    /// Catalog name of the sprite
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pixel data of the sprite
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }
}

/// Name to sprite mapping plus name to animation frame mapping
#[derive(Debug, Clone, Default)]
pub struct SpriteCatalog {
    sprites: HashMap<String, Sprite>,
    animations: HashMap<String, Vec<Sprite>>,
}

impl SpriteCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every sprite and animation under a directory
    ///
    /// Each `*.png` directly inside `dir` becomes a sprite keyed by its file
    /// stem. Each subdirectory becomes an animation keyed by the directory
    /// name, its `*.png` files sorted by name forming the frames.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The directory or one of its subdirectories cannot be read
    /// - A PNG file cannot be decoded
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let mut catalog = Self::new();

        for path in list_entries(dir)? {
            if path.is_dir() {
                let Some(name) = file_stem(&path) else {
                    continue;
                };
                let mut frames = Vec::new();
                for frame_path in list_entries(&path)? {
                    if is_png(&frame_path) {
                        let frame_name = file_stem(&frame_path).unwrap_or_default();
                        frames.push(Sprite::new(frame_name, load_rgba(&frame_path)?));
                    }
                }
                if !frames.is_empty() {
                    catalog.insert_animation(name, frames);
                }
            } else if let Some(name) = file_stem(&path).filter(|_| is_png(&path)) {
                catalog.insert(name, load_rgba(&path)?);
            }
        }

        tracing::info!(
            sprites = catalog.sprites.len(),
            animations = catalog.animations.len(),
            dir = %dir.display(),
            "loaded sprite catalog"
        );
        Ok(catalog)
    }

    /// Register an image under a name, replacing any previous entry
    pub fn insert(&mut self, name: impl Into<String>, image: RgbaImage) {
        let name = name.into();
        self.sprites.insert(name.clone(), Sprite::new(name, image));
    }

    /// Register an animation under a name, replacing any previous entry
    pub fn insert_animation(&mut self, name: impl Into<String>, frames: Vec<Sprite>) {
        self.animations.insert(name.into(), frames);
    }

    /// Look up a sprite by name
    pub fn get(&self, name: &str) -> Option<&Sprite> {
        let sprite = self.sprites.get(name);
        if sprite.is_none() {
            tracing::trace!(name, "sprite not in catalog");
        }
        sprite
    }

    /// Look up the frames of an animation by name
    pub fn animation(&self, name: &str) -> Option<&[Sprite]> {
        self.animations.get(name).map(Vec::as_slice)
    }

    /// Number of sprites (animations not included)
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// Whether the catalog holds no sprites
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

// Sorted so frame order and load order are deterministic
fn list_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| GridError::FileSystem {
        path: dir.to_path_buf(),
        operation: "read directory",
        source: e,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| GridError::FileSystem {
            path: dir.to_path_buf(),
            operation: "read directory entry",
            source: e,
        })?;
        paths.push(entry.path());
    }
    paths.sort();
    Ok(paths)
}

fn is_png(path: &Path) -> bool {
    path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("png")
}

fn file_stem(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}

fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|e| GridError::SpriteLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgba8())
}
