//! Engine-wide constants, mostly taken from the arcade host the overlays were
//! first written for.

/// Z-index of the host's main tilemap. Overlays below it draw under the map,
/// overlays above it draw over it.
pub const MAIN_TILEMAP_Z_INDEX: i32 = -1;

/// Extra tile rows and columns drawn past the viewport so a partially
/// scrolled edge tile is never left blank.
pub const DEFAULT_OVERSCAN: u32 = 1;

/// Largest overscan a config may ask for.
pub const MAX_OVERSCAN: u32 = 64;

/// Default square tile size in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 16;

/// Arcade screen size in pixels.
pub const SCREEN_WIDTH: u32 = 160;
pub const SCREEN_HEIGHT: u32 = 120;
