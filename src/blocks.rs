//! Free-function surface for block-based scripting front-ends
//!
//! Block editors bind to plain functions rather than methods, so every layer
//! operation is mirrored here. The registry and host are passed explicitly.
//!
//! Remember the main tilemap sits at [`MAIN_TILEMAP_Z_INDEX`] (-1): a higher
//! z-index draws later, on top of it.
//!
//! [`MAIN_TILEMAP_Z_INDEX`]: crate::core::constants::MAIN_TILEMAP_Z_INDEX

use crate::{
    core::config::LayerConfig,
    layers::{base::VisualTileMapLayer, manager::LayerRegistry},
    traits::{RenderHost, Screen, TileSource},
    Result,
};
use std::rc::Rc;

/// Add a tracked layer showing `tilemap` at `z_index`.
pub fn add_visual_tilemap_layer<T, S, H>(
    registry: &mut LayerRegistry<T>,
    host: &mut H,
    tilemap: Rc<T>,
    z_index: i32,
) where
    T: TileSource + 'static,
    S: Screen<T::Image> + ?Sized,
    H: RenderHost<S> + ?Sized,
{
    registry.add(host, tilemap, z_index);
}

/// Remove ALL tracked layers at `z_index`. Returns how many were removed.
pub fn remove_visual_tilemap_layers<T, S, H>(
    registry: &mut LayerRegistry<T>,
    host: &mut H,
    z_index: i32,
) -> Result<usize>
where
    T: TileSource + 'static,
    S: ?Sized,
    H: RenderHost<S> + ?Sized,
{
    registry.remove_all_at_z_index(host, z_index)
}

/// Create a visible layer and return it to the caller to manage. It is not
/// tracked by any registry.
pub fn create_visual_tilemap_layer<T, S, H>(
    host: &mut H,
    tilemap: Rc<T>,
    z_index: i32,
) -> VisualTileMapLayer<T>
where
    T: TileSource + 'static,
    S: Screen<T::Image> + ?Sized,
    H: RenderHost<S> + ?Sized,
{
    VisualTileMapLayer::with_config(host, tilemap, z_index, &LayerConfig::default())
}

pub fn visual_tilemap_layer_tilemap<T: TileSource>(layer: &VisualTileMapLayer<T>) -> Rc<T> {
    layer.tilemap()
}

pub fn set_visual_tilemap_layer_tilemap<T: TileSource>(
    layer: &mut VisualTileMapLayer<T>,
    tilemap: Rc<T>,
) {
    layer.set_tilemap(tilemap);
}

pub fn visual_tilemap_layer_z_index<T: TileSource>(layer: &VisualTileMapLayer<T>) -> i32 {
    layer.z_index()
}

pub fn set_visual_tilemap_layer_z_index<T, S, H>(
    layer: &mut VisualTileMapLayer<T>,
    host: &mut H,
    z_index: i32,
) -> Result<()>
where
    T: TileSource,
    S: ?Sized,
    H: RenderHost<S> + ?Sized,
{
    layer.set_z_index(host, z_index)
}

pub fn visual_tilemap_layer_visibility<T: TileSource>(layer: &VisualTileMapLayer<T>) -> bool {
    layer.is_visible()
}

pub fn set_visual_tilemap_layer_visibility<T: TileSource>(
    layer: &mut VisualTileMapLayer<T>,
    visible: bool,
) {
    layer.set_visible(visible);
}

pub fn destroy_visual_tilemap_layer<T, S, H>(
    layer: VisualTileMapLayer<T>,
    host: &mut H,
) -> Result<()>
where
    T: TileSource,
    S: ?Sized,
    H: RenderHost<S> + ?Sized,
{
    layer.destroy(host)
}
