//! Layered tile identifier storage.

use tilewalk_core::{TileCoord, TileId};

use crate::MapError;

/// Stacked, same-shaped layers of tile identifiers backed by one flat buffer.
///
/// Layer `l` occupies `tiles[l * width * height..(l + 1) * width * height]`
/// and stores its cells in row-major order. The grid is immutable once built;
/// switching maps replaces it wholesale.
#[derive(Clone, Debug, PartialEq)]
pub struct TileGrid {
    width: u32,
    height: u32,
    tile_size: f32,
    layer_count: usize,
    tiles: Vec<TileId>,
}

impl TileGrid {
    /// Creates a grid from the flat identifier buffer exported by the map editor.
    ///
    /// Returns an error when `data` does not split into whole layers of
    /// `width * height` tiles or when `tile_size` is not a positive number.
    pub fn new(width: u32, height: u32, tile_size: f32, data: Vec<u32>) -> Result<Self, MapError> {
        if !tile_size.is_finite() || tile_size <= 0.0 {
            return Err(MapError::InvalidTileSize { tile_size });
        }

        let mismatch = MapError::LayerMismatch {
            len: data.len(),
            width,
            height,
        };
        let layer_len = usize::try_from(u64::from(width) * u64::from(height))
            .map_err(|_| mismatch.clone())?;

        let layer_count = if layer_len == 0 {
            if !data.is_empty() {
                return Err(mismatch);
            }
            0
        } else {
            if data.len() % layer_len != 0 {
                return Err(mismatch);
            }
            data.len() / layer_len
        };

        Ok(Self {
            width,
            height,
            tile_size,
            layer_count,
            tiles: data.into_iter().map(TileId::new).collect(),
        })
    }

    /// Number of tile columns.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of tile rows.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Edge length of a single square tile in pixels.
    #[must_use]
    pub const fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Number of stacked layers.
    #[must_use]
    pub const fn layer_count(&self) -> usize {
        self.layer_count
    }

    /// Width of the unscaled grid in pixels.
    #[must_use]
    pub fn pixel_width(&self) -> f32 {
        self.width as f32 * self.tile_size
    }

    /// Height of the unscaled grid in pixels.
    #[must_use]
    pub fn pixel_height(&self) -> f32 {
        self.height as f32 * self.tile_size
    }

    /// Reports whether `tile` lies within `[0, width) x [0, height)`.
    #[must_use]
    pub fn contains(&self, tile: TileCoord) -> bool {
        self.index(tile).is_some()
    }

    /// Non-empty identifiers stacked at `tile`, bottom layer first.
    ///
    /// Out-of-bounds tiles yield nothing.
    pub fn tile_ids_at(&self, tile: TileCoord) -> impl Iterator<Item = TileId> + '_ {
        self.layer_ids_at(tile).filter(|id| !id.is_empty())
    }

    /// Identifier stored by every layer at `tile`, empty cells included.
    pub fn layer_ids_at(&self, tile: TileCoord) -> impl Iterator<Item = TileId> + '_ {
        let index = self.index(tile);
        let layer_len = self.layer_len();
        let layers = if index.is_some() { self.layer_count } else { 0 };

        (0..layers).filter_map(move |layer| {
            let offset = layer * layer_len + index?;
            self.tiles.get(offset).copied()
        })
    }

    /// Identifier painted on the highest layer at `tile`, or [`TileId::EMPTY`].
    ///
    /// This answers "what is visible here", not "can this be entered";
    /// collision always considers every layer.
    #[must_use]
    pub fn top_tile_id_at(&self, tile: TileCoord) -> TileId {
        self.tile_ids_at(tile).last().unwrap_or(TileId::EMPTY)
    }

    /// Every in-bounds tile in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = TileCoord> {
        let width = i32::try_from(self.width).unwrap_or(i32::MAX);
        let height = i32::try_from(self.height).unwrap_or(i32::MAX);
        (0..height).flat_map(move |y| (0..width).map(move |x| TileCoord::new(x, y)))
    }

    fn layer_len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    fn index(&self, tile: TileCoord) -> Option<usize> {
        let column = u32::try_from(tile.x()).ok()?;
        let row = u32::try_from(tile.y()).ok()?;
        if column >= self.width || row >= self.height {
            return None;
        }

        let width = usize::try_from(self.width).ok()?;
        let row = usize::try_from(row).ok()?;
        let column = usize::try_from(column).ok()?;
        row.checked_mul(width)?.checked_add(column)
    }
}
