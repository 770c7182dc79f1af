//! Prelude module for common tilemap layer types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use visual_tilemap_layers::prelude::*;`

pub use crate::core::{
    config::{LayerConfig, LayerProfile},
    constants::MAIN_TILEMAP_Z_INDEX,
};

pub use crate::layers::{
    base::{Renderable, VisualTileMapLayer},
    manager::LayerRegistry,
};

pub use crate::blocks::*;

pub use crate::rendering::{
    camera::Camera,
    context::{DrawCommand, RenderContext},
    pipeline::RenderList,
};

#[cfg(feature = "software")]
pub use crate::rendering::context::ImageScreen;

pub use crate::spatial::culling::TileWindow;

pub use crate::tiles::source::{TileIndex, TileMapData};

pub use crate::traits::{Drawable, RenderHost, RenderableId, Screen, TileImage, TileSource};

pub use crate::{LayerError, Result};

pub use std::rc::Rc;
