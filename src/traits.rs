//! Contracts between overlay layers and the host engine
//!
//! The host owns the frame loop, the screen and the tile data. Layers only
//! see these traits, so any engine that can satisfy them can carry overlays.

use crate::{rendering::camera::Camera, tiles::source::TileIndex, Result};
use std::rc::Rc;

/// Handle to one entry in a host's render list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RenderableId(pub u64);

impl std::fmt::Display for RenderableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An image that can be blitted as a single tile.
pub trait TileImage {
    fn width(&self) -> u32;

    fn height(&self) -> u32;
}

/// Grid of tile indices plus an indexed palette of tile images.
///
/// All images of one source are expected to be squares of the same size;
/// layers read the size from tile 0.
pub trait TileSource {
    type Image: TileImage;

    /// Tile index stored at `(col, row)`. Coordinates outside the grid are
    /// resolved by the source's own edge policy.
    fn tile(&self, col: i32, row: i32) -> TileIndex;

    /// Image for a tile index.
    fn tile_image(&self, index: TileIndex) -> &Self::Image;
}

/// Drawing surface for one frame
pub trait Screen<I: ?Sized> {
    /// Blit `image` with its top-left corner at `(x, y)`, skipping
    /// transparent pixels. Parts outside the surface are clipped.
    fn draw_transparent_image(&mut self, image: &I, x: i32, y: i32);
}

/// Something the host draws once per frame.
///
/// The host asks `is_visible` before every frame and only calls `draw` when
/// it returns `true`. Both read the drawable's state at call time.
pub trait Drawable<S: ?Sized> {
    fn is_visible(&self) -> bool;

    fn draw(&self, screen: &mut S, camera: &Camera);
}

/// The host's per-frame render list.
///
/// Entries are drawn in ascending z order each frame; entries sharing a z
/// are drawn in registration order.
pub trait RenderHost<S: ?Sized> {
    /// Add a drawable at `z`. It takes part in the next frame.
    fn register(&mut self, z: i32, drawable: Rc<dyn Drawable<S>>) -> RenderableId;

    /// Move an entry to a new z.
    fn set_z(&mut self, id: RenderableId, z: i32) -> Result<()>;

    /// Remove an entry. Its drawable is never called again.
    fn release(&mut self, id: RenderableId) -> Result<()>;
}
