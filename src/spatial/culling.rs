use crate::{core::constants::DEFAULT_OVERSCAN, rendering::camera::Camera};
use std::ops::Range;

/// Block of tiles a layer has to draw for one frame.
///
/// Rows cover `top_row..bottom_row` and columns `left_col..right_col`. The
/// whole block is shifted up and left by the sub-tile scroll offsets so it
/// slides smoothly instead of snapping to tile boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileWindow {
    pub top_row: i32,
    pub bottom_row: i32,
    pub left_col: i32,
    pub right_col: i32,
    /// Vertical scroll position inside the top row, in `0..tile_size`
    pub top_offset: i32,
    /// Horizontal scroll position inside the left column, in `0..tile_size`
    pub left_offset: i32,
    pub tile_size: i32,
}

impl TileWindow {
    /// Compute the window for `camera` over square tiles of `tile_size`
    /// pixels, padded by `overscan` extra rows and columns.
    ///
    /// Returns `None` for a zero tile size. Negative offsets use floored
    /// division so the window still starts at or above the screen edge.
    pub fn compute(camera: &Camera, tile_size: u32, overscan: u32) -> Option<Self> {
        if tile_size == 0 {
            return None;
        }

        let size = i32::try_from(tile_size).unwrap_or(i32::MAX);
        let rows = camera.screen_height.div_ceil(tile_size).saturating_add(overscan);
        let cols = camera.screen_width.div_ceil(tile_size).saturating_add(overscan);

        let top_row = camera.draw_offset_y.div_euclid(size);
        let left_col = camera.draw_offset_x.div_euclid(size);

        // Near the edge of the i32 world the window is cut short instead of wrapping
        Some(Self {
            top_row,
            bottom_row: top_row.saturating_add(i32::try_from(rows).unwrap_or(i32::MAX)),
            left_col,
            right_col: left_col.saturating_add(i32::try_from(cols).unwrap_or(i32::MAX)),
            top_offset: camera.draw_offset_y.rem_euclid(size),
            left_offset: camera.draw_offset_x.rem_euclid(size),
            tile_size: size,
        })
    }

    pub fn rows(&self) -> Range<i32> {
        self.top_row..self.bottom_row
    }

    pub fn cols(&self) -> Range<i32> {
        self.left_col..self.right_col
    }

    /// Every `(col, row)` of the window, top to bottom then left to right
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let cols = self.cols();
        self.rows()
            .flat_map(move |row| cols.clone().map(move |col| (col, row)))
    }

    /// Screen position of the top-left pixel of tile `(col, row)`
    pub fn screen_position(&self, col: i32, row: i32) -> (i32, i32) {
        let size = i64::from(self.tile_size);
        let x = (i64::from(col) - i64::from(self.left_col)) * size - i64::from(self.left_offset);
        let y = (i64::from(row) - i64::from(self.top_row)) * size - i64::from(self.top_offset);
        (clamp_to_i32(x), clamp_to_i32(y))
    }

    /// Number of tiles in the window
    pub fn len(&self) -> usize {
        self.rows().len() * self.cols().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the drawn tiles reach every pixel of a `width` x `height` screen
    pub fn covers(&self, width: u32, height: u32) -> bool {
        let (left, top) = self.screen_position(self.left_col, self.top_row);
        let (right, bottom) = self.screen_position(self.right_col, self.bottom_row);
        left <= 0 && top <= 0 && right >= width as i32 && bottom >= height as i32
    }
}

fn clamp_to_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Tile window with the default overscan
pub fn tile_window(camera: &Camera, tile_size: u32) -> Option<TileWindow> {
    TileWindow::compute(camera, tile_size, DEFAULT_OVERSCAN)
}
