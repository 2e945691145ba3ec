#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system mapping display pixels to tiles and back.
//!
//! The grid is drawn with a uniform "contain" fit: scaled by the largest
//! factor that keeps the whole grid visible and centered in the viewport, with
//! letterbox bars filling the rest. Every conversion recomputes the fit from
//! the viewport it is given, so layout changes never leave a stale scale.

use glam::Vec2;
use tilewalk_core::{TileCoord, Viewport};
use tilewalk_world::TileGrid;

/// Tile reported for every pixel when the viewport has no drawable area.
///
/// It lies outside every grid, so downstream bounds checks reject it.
pub const COLLAPSED_TILE: TileCoord = TileCoord::new(-1, -1);

/// Letterbox transform placing a grid inside a viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainFit {
    scale: f32,
    offset: Vec2,
    grid_size: Vec2,
    tile_size: f32,
}

impl ContainFit {
    /// Computes the fit of `grid` into `viewport`.
    #[must_use]
    pub fn new(grid: &TileGrid, viewport: Viewport) -> Self {
        let grid_size = Vec2::new(grid.pixel_width(), grid.pixel_height());
        let scale = if grid_size.x <= 0.0 || grid_size.y <= 0.0 {
            1.0
        } else {
            (viewport.width() / grid_size.x).min(viewport.height() / grid_size.y)
        };
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            0.0
        };
        let offset = (viewport.size() - grid_size * scale) * 0.5;

        Self {
            scale,
            offset,
            grid_size,
            tile_size: grid.tile_size(),
        }
    }

    /// Uniform factor applied to grid pixels; zero when the viewport has no area.
    #[must_use]
    pub const fn scale(&self) -> f32 {
        self.scale
    }

    /// Top-left corner of the scaled grid within the viewport.
    #[must_use]
    pub const fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Size of the grid once scaled into the viewport.
    #[must_use]
    pub fn grid_size(&self) -> Vec2 {
        self.grid_size * self.scale
    }

    /// Reports whether `pixel` falls on the grid rather than the letterbox.
    #[must_use]
    pub fn contains_pixel(&self, pixel: Vec2) -> bool {
        let max = self.offset + self.grid_size();
        self.scale > 0.0
            && pixel.x >= self.offset.x
            && pixel.y >= self.offset.y
            && pixel.x < max.x
            && pixel.y < max.y
    }

    /// Tile under `pixel`. Pixels on the letterbox resolve to out-of-range tiles.
    #[must_use]
    pub fn pixel_to_tile(&self, pixel: Vec2) -> TileCoord {
        if self.scale <= 0.0 {
            return COLLAPSED_TILE;
        }

        let local = (pixel - self.offset) / self.scale / self.tile_size;
        TileCoord::new(local.x.floor() as i32, local.y.floor() as i32)
    }

    /// Display position of the center of `tile`.
    #[must_use]
    pub fn tile_to_pixel(&self, tile: TileCoord) -> Vec2 {
        let corner = Vec2::new(tile.x() as f32, tile.y() as f32) * self.tile_size;
        self.offset + (corner + Vec2::splat(self.tile_size * 0.5)) * self.scale
    }
}

/// Tile under `pixel` when `grid` is contain-fitted into `viewport`.
#[must_use]
pub fn pixel_to_tile(grid: &TileGrid, pixel: Vec2, viewport: Viewport) -> TileCoord {
    ContainFit::new(grid, viewport).pixel_to_tile(pixel)
}

/// Display position of the center of `tile` when `grid` is contain-fitted into `viewport`.
#[must_use]
pub fn tile_to_pixel(grid: &TileGrid, tile: TileCoord, viewport: Viewport) -> Vec2 {
    ContainFit::new(grid, viewport).tile_to_pixel(tile)
}
