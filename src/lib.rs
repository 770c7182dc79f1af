//! # Visual TileMap Layers
//!
//! Extra scrolling tile layers drawn on top of (or beneath) a game engine's
//! main tilemap, each at its own z-index and with a visibility toggle.
//!
//! The engine itself stays external: layers talk to it through the small
//! contracts in [`traits`] (render host, tile source, screen). Reference
//! implementations of those contracts live in [`rendering`] and [`tiles`]
//! so the crate can be driven headless.

pub mod blocks;
pub mod core;
pub mod layers;
pub mod prelude;
pub mod rendering;
pub mod spatial;
pub mod tiles;
pub mod traits;
pub use crate::core::constants;

// Re-export public API
pub use core::config::{LayerConfig, LayerProfile};

pub use layers::{
    base::{Renderable, VisualTileMapLayer},
    manager::LayerRegistry,
};

pub use rendering::{camera::Camera, pipeline::RenderList};

#[cfg(feature = "software")]
pub use rendering::context::ImageScreen;

pub use spatial::culling::TileWindow;

pub use tiles::source::{TileIndex, TileMapData};

pub use traits::{Drawable, RenderHost, RenderableId, Screen, TileImage, TileSource};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, LayerError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum LayerError {
    #[error("Unknown renderable: {0}")]
    UnknownRenderable(RenderableId),

    #[error("Invalid tile size: tile {index} is {width}x{height}, expected {expected}x{expected}")]
    InvalidTileSize {
        index: usize,
        width: u32,
        height: u32,
        expected: u32,
    },

    #[error("Tile map error: {0}")]
    TileMap(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[cfg(feature = "software")]
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Error type alias for convenience
pub type Error = LayerError;
