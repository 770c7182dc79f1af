use crate::{
    traits::{TileImage, TileSource},
    LayerError, Result,
};

/// Index into a tileset. Index 0 is the tileset's first image, which the host
/// engine also uses as the "empty" tile.
pub type TileIndex = usize;

/// Fixed-size grid of tile indices plus the tileset they point into.
///
/// Cells outside the grid read as tile 0, matching the host engine's edge
/// policy for tilemaps.
#[derive(Debug, Clone)]
pub struct TileMapData<I> {
    columns: u32,
    rows: u32,
    tiles: Vec<TileIndex>,
    tileset: Vec<I>,
    tile_size: u32,
}

impl<I: TileImage> TileMapData<I> {
    /// Build a map from row-major `tiles`. Every tileset image must be a
    /// square of the same size, and every index must point into the tileset.
    pub fn new(columns: u32, rows: u32, tiles: Vec<TileIndex>, tileset: Vec<I>) -> Result<Self> {
        let Some(first) = tileset.first() else {
            return Err(LayerError::TileMap("tileset is empty".to_string()));
        };
        let tile_size = first.width();

        for (index, image) in tileset.iter().enumerate() {
            if image.width() != tile_size || image.height() != tile_size {
                return Err(LayerError::InvalidTileSize {
                    index,
                    width: image.width(),
                    height: image.height(),
                    expected: tile_size,
                });
            }
        }

        let expected = columns as usize * rows as usize;
        if tiles.len() != expected {
            return Err(LayerError::TileMap(format!(
                "{}x{} map needs {} tiles, got {}",
                columns,
                rows,
                expected,
                tiles.len()
            )));
        }

        if let Some(bad) = tiles.iter().find(|&&index| index >= tileset.len()) {
            return Err(LayerError::TileMap(format!(
                "tile index {} is outside a tileset of {}",
                bad,
                tileset.len()
            )));
        }

        Ok(Self {
            columns,
            rows,
            tiles,
            tileset,
            tile_size,
        })
    }

    /// Map with every cell set to `index`
    pub fn filled(columns: u32, rows: u32, index: TileIndex, tileset: Vec<I>) -> Result<Self> {
        let tiles = vec![index; columns as usize * rows as usize];
        Self::new(columns, rows, tiles, tileset)
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Side length of every tile in pixels
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn tileset_len(&self) -> usize {
        self.tileset.len()
    }

    pub fn is_outside(&self, col: i32, row: i32) -> bool {
        col < 0 || row < 0 || col >= self.columns as i32 || row >= self.rows as i32
    }

    /// Overwrite one cell. Cells outside the map and unknown indices are
    /// rejected.
    pub fn set_tile(&mut self, col: i32, row: i32, index: TileIndex) -> Result<()> {
        if self.is_outside(col, row) {
            return Err(LayerError::TileMap(format!(
                "({}, {}) is outside the {}x{} map",
                col, row, self.columns, self.rows
            )));
        }
        if index >= self.tileset.len() {
            return Err(LayerError::TileMap(format!(
                "tile index {} is outside a tileset of {}",
                index,
                self.tileset.len()
            )));
        }

        let cell = self.cell(col, row);
        self.tiles[cell] = index;
        Ok(())
    }

    fn cell(&self, col: i32, row: i32) -> usize {
        row as usize * self.columns as usize + col as usize
    }
}

impl<I: TileImage> TileSource for TileMapData<I> {
    type Image = I;

    fn tile(&self, col: i32, row: i32) -> TileIndex {
        if self.is_outside(col, row) {
            return 0;
        }
        self.tiles[self.cell(col, row)]
    }

    fn tile_image(&self, index: TileIndex) -> &I {
        // Indices are checked on the way in; anything else is the empty tile.
        self.tileset.get(index).unwrap_or(&self.tileset[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Swatch {
        size: u32,
        height: u32,
        id: u8,
    }

    fn swatch(size: u32, id: u8) -> Swatch {
        Swatch {
            size,
            height: size,
            id,
        }
    }

    impl TileImage for Swatch {
        fn width(&self) -> u32 {
            self.size
        }

        fn height(&self) -> u32 {
            self.height
        }
    }

    #[test]
    fn test_lookup_and_edges() {
        let map = TileMapData::new(
            2,
            2,
            vec![0, 1, 2, 1],
            vec![swatch(8, 0), swatch(8, 1), swatch(8, 2)],
        )
        .unwrap();

        assert_eq!(map.tile_size(), 8);
        assert_eq!((map.columns(), map.rows()), (2, 2));
        assert_eq!(map.tileset_len(), 3);
        assert_eq!(map.tile(1, 0), 1);
        assert_eq!(map.tile(0, 1), 2);
        assert_eq!(map.tile_image(map.tile(0, 1)).id, 2);

        // Outside the grid reads as the empty tile
        assert_eq!(map.tile(-1, 0), 0);
        assert_eq!(map.tile(2, 1), 0);
        assert_eq!(map.tile(0, 5), 0);
    }

    #[test]
    fn test_non_uniform_tileset_rejected() {
        let result = TileMapData::new(1, 1, vec![0], vec![swatch(16, 0), swatch(8, 1)]);
        assert!(matches!(
            result,
            Err(LayerError::InvalidTileSize {
                index: 1,
                expected: 16,
                ..
            })
        ));

        let tall = Swatch {
            size: 16,
            height: 32,
            id: 0,
        };
        assert!(TileMapData::new(1, 1, vec![0], vec![tall]).is_err());
    }

    #[test]
    fn test_bad_shapes_rejected() {
        let empty: Vec<Swatch> = Vec::new();
        assert!(TileMapData::new(1, 1, vec![0], empty).is_err());
        assert!(TileMapData::new(2, 2, vec![0; 3], vec![swatch(8, 0)]).is_err());
        assert!(TileMapData::new(1, 1, vec![4], vec![swatch(8, 0)]).is_err());
    }

    #[test]
    fn test_set_tile() {
        let mut map = TileMapData::filled(3, 3, 0, vec![swatch(8, 0), swatch(8, 1)]).unwrap();
        map.set_tile(2, 1, 1).unwrap();
        assert_eq!(map.tile(2, 1), 1);

        assert!(map.set_tile(3, 0, 1).is_err());
        assert!(map.set_tile(0, 0, 9).is_err());
        assert_eq!(map.tile(0, 0), 0);
    }
}
