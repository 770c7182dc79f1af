//! The overlay layer itself
//!
//! A [`VisualTileMapLayer`] is split in two halves. The half the caller holds
//! carries the renderable record (`id` and `z`). The half the host holds is a
//! shared [`Drawable`] that reads the current tile source and visibility
//! every frame. Setters on the caller's half update the shared state, and
//! z changes are forwarded to the host.

use crate::{
    core::{
        config::LayerConfig,
        constants::{DEFAULT_OVERSCAN, MAX_OVERSCAN},
    },
    rendering::camera::Camera,
    spatial::culling::TileWindow,
    traits::{Drawable, RenderHost, RenderableId, Screen, TileImage, TileSource},
    Result,
};
use std::{cell::RefCell, rc::Rc};

/// A layer's entry in the host render list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Renderable {
    pub id: RenderableId,
    pub z: i32,
}

struct LayerState<T> {
    tilemap: Rc<T>,
    visible: bool,
    overscan: u32,
}

/// The host-facing half of a layer
struct SharedLayer<T> {
    state: RefCell<LayerState<T>>,
}

impl<T, S> Drawable<S> for SharedLayer<T>
where
    T: TileSource,
    S: Screen<T::Image> + ?Sized,
{
    fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }

    fn draw(&self, screen: &mut S, camera: &Camera) {
        let state = self.state.borrow();
        let tilemap = state.tilemap.as_ref();

        // Every tile of a source shares tile 0's size
        let tile_size = tilemap.tile_image(0).width();
        let Some(window) = TileWindow::compute(camera, tile_size, state.overscan) else {
            log::warn!("tile source has zero-width tiles, skipping layer");
            return;
        };

        for (col, row) in window.cells() {
            let image = tilemap.tile_image(tilemap.tile(col, row));
            let (x, y) = window.screen_position(col, row);
            screen.draw_transparent_image(image, x, y);
        }

        log::trace!(
            "drew {} tiles for rows {:?} cols {:?}",
            window.len(),
            window.rows(),
            window.cols()
        );
    }
}

/// A scrolling tile layer drawn at its own z-index over the host's tilemap
///
/// The layer is part of the host render list from construction until
/// [`destroy`](Self::destroy). Dropping it without destroying it leaves it
/// registered, and the host keeps drawing it.
pub struct VisualTileMapLayer<T> {
    shared: Rc<SharedLayer<T>>,
    renderable: Renderable,
}

impl<T: TileSource + 'static> VisualTileMapLayer<T> {
    /// Create a layer and register it with `host` at `z_index`
    pub fn new<S, H>(host: &mut H, tilemap: Rc<T>, z_index: i32, visible: bool) -> Self
    where
        S: Screen<T::Image> + ?Sized,
        H: RenderHost<S> + ?Sized,
    {
        Self::register(host, tilemap, z_index, visible, DEFAULT_OVERSCAN)
    }

    /// Create a layer taking visibility and overscan from `config`.
    /// An overscan outside `1..=MAX_OVERSCAN` is clamped into range.
    pub fn with_config<S, H>(
        host: &mut H,
        tilemap: Rc<T>,
        z_index: i32,
        config: &LayerConfig,
    ) -> Self
    where
        S: Screen<T::Image> + ?Sized,
        H: RenderHost<S> + ?Sized,
    {
        Self::register(host, tilemap, z_index, config.default_visible, config.overscan)
    }

    fn register<S, H>(
        host: &mut H,
        tilemap: Rc<T>,
        z_index: i32,
        visible: bool,
        overscan: u32,
    ) -> Self
    where
        S: Screen<T::Image> + ?Sized,
        H: RenderHost<S> + ?Sized,
    {
        let clamped = overscan.clamp(1, MAX_OVERSCAN);
        if clamped != overscan {
            log::warn!(
                "overscan {} out of range, using {} (allowed 1..={})",
                overscan,
                clamped,
                MAX_OVERSCAN
            );
        }
        let overscan = clamped;

        let shared = Rc::new(SharedLayer {
            state: RefCell::new(LayerState {
                tilemap,
                visible,
                overscan,
            }),
        });

        let drawable: Rc<dyn Drawable<S>> = shared.clone();
        let id = host.register(z_index, drawable);
        log::debug!(
            "created visual tilemap layer {} at z {} (visible: {})",
            id,
            z_index,
            visible
        );

        Self {
            shared,
            renderable: Renderable { id, z: z_index },
        }
    }
}

impl<T> VisualTileMapLayer<T> {
    pub fn z_index(&self) -> i32 {
        self.renderable.z
    }

    /// The layer's entry in the host render list
    pub fn renderable(&self) -> Renderable {
        self.renderable
    }

    pub fn id(&self) -> RenderableId {
        self.renderable.id
    }
}

impl<T: TileSource> VisualTileMapLayer<T> {
    /// Tile source currently drawn by this layer
    pub fn tilemap(&self) -> Rc<T> {
        Rc::clone(&self.shared.state.borrow().tilemap)
    }

    /// Swap the tile source; takes effect on the next frame
    pub fn set_tilemap(&mut self, tilemap: Rc<T>) {
        self.shared.state.borrow_mut().tilemap = tilemap;
    }

    /// Move the layer to a new z-index. The host re-sorts its draw order; the
    /// layer is not re-registered.
    pub fn set_z_index<S, H>(&mut self, host: &mut H, z_index: i32) -> Result<()>
    where
        S: ?Sized,
        H: RenderHost<S> + ?Sized,
    {
        host.set_z(self.renderable.id, z_index)?;
        self.renderable.z = z_index;
        Ok(())
    }

    pub fn is_visible(&self) -> bool {
        self.shared.state.borrow().visible
    }

    /// Show or hide the layer from the next frame on
    pub fn set_visible(&mut self, visible: bool) {
        self.shared.state.borrow_mut().visible = visible;
    }

    pub fn overscan(&self) -> u32 {
        self.shared.state.borrow().overscan
    }

    /// Remove the layer from the host render list. Its draw callback is never
    /// invoked again.
    pub fn destroy<S, H>(self, host: &mut H) -> Result<()>
    where
        S: ?Sized,
        H: RenderHost<S> + ?Sized,
    {
        host.release(self.renderable.id)?;
        log::debug!(
            "destroyed visual tilemap layer {} at z {}",
            self.renderable.id,
            self.renderable.z
        );
        Ok(())
    }
}

impl<T> std::fmt::Debug for VisualTileMapLayer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.shared.state.borrow();
        f.debug_struct("VisualTileMapLayer")
            .field("renderable", &self.renderable)
            .field("visible", &state.visible)
            .field("overscan", &state.overscan)
            .finish_non_exhaustive()
    }
}
