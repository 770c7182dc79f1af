pub mod base;
pub mod manager;

pub use base::{Renderable, VisualTileMapLayer};
pub use manager::LayerRegistry;
