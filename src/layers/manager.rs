use crate::{
    core::config::LayerConfig,
    layers::base::VisualTileMapLayer,
    traits::{RenderHost, Screen, TileSource},
    Result,
};
use std::rc::Rc;

/// Tracks layers created through the convenience [`add`](Self::add) path so
/// they can later be removed in bulk by z-index.
///
/// Insertion order has no effect on drawing; the host orders layers by
/// their z-index. Layers built with [`create_managed`](Self::create_managed)
/// or [`VisualTileMapLayer::new`] are never tracked here.
pub struct LayerRegistry<T> {
    /// Tracked layers, in insertion order
    layers: Vec<VisualTileMapLayer<T>>,
    /// Defaults for layers this registry creates
    config: LayerConfig,
}

impl<T: TileSource + 'static> LayerRegistry<T> {
    pub fn new() -> Self {
        Self {
            layers: Vec::new(),
            config: LayerConfig::default(),
        }
    }

    /// Registry whose layers take their defaults from `config`. The config
    /// is validated first.
    pub fn with_config(config: LayerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            layers: Vec::new(),
            config,
        })
    }

    pub fn config(&self) -> &LayerConfig {
        &self.config
    }

    /// Create a layer at `z_index` and keep track of it
    pub fn add<S, H>(&mut self, host: &mut H, tilemap: Rc<T>, z_index: i32)
    where
        S: Screen<T::Image> + ?Sized,
        H: RenderHost<S> + ?Sized,
    {
        let layer = VisualTileMapLayer::with_config(host, tilemap, z_index, &self.config);
        self.layers.push(layer);
    }

    /// Create a layer and hand it to the caller without tracking it. The
    /// caller is responsible for destroying it.
    pub fn create_managed<S, H>(
        &self,
        host: &mut H,
        tilemap: Rc<T>,
        z_index: i32,
    ) -> VisualTileMapLayer<T>
    where
        S: Screen<T::Image> + ?Sized,
        H: RenderHost<S> + ?Sized,
    {
        VisualTileMapLayer::with_config(host, tilemap, z_index, &self.config)
    }

    /// Destroy every tracked layer currently at `z_index` and stop tracking
    /// it. Layers at other z-indices are left alone.
    ///
    /// Each layer's z-index is read once. Every matching layer is released
    /// even if an earlier release fails; the first failure is returned.
    pub fn remove_all_at_z_index<S, H>(&mut self, host: &mut H, z_index: i32) -> Result<usize>
    where
        S: ?Sized,
        H: RenderHost<S> + ?Sized,
    {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.layers)
            .into_iter()
            .partition(|layer| layer.z_index() == z_index);
        self.layers = kept;

        let count = removed.len();
        let mut first_error = None;
        for layer in removed {
            if let Err(e) = layer.destroy(host) {
                log::warn!("failed to destroy layer at z {}: {}", z_index, e);
                first_error.get_or_insert(e);
            }
        }
        log::debug!("removed {} layers at z {}", count, z_index);

        match first_error {
            Some(e) => Err(e),
            None => Ok(count),
        }
    }
}

impl<T> LayerRegistry<T> {
    /// Gets the number of tracked layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Checks if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Tracked layers in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &VisualTileMapLayer<T>> {
        self.layers.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut VisualTileMapLayer<T>> {
        self.layers.iter_mut()
    }

    /// Z-index of every tracked layer, in insertion order
    pub fn z_indices(&self) -> Vec<i32> {
        self.layers.iter().map(|layer| layer.renderable().z).collect()
    }
}

impl<T: TileSource + 'static> Default for LayerRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
