//! Errors raised while assembling map data.

use thiserror::Error;

/// Reasons a tile map may be rejected at construction time.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MapError {
    /// The flat tile buffer does not split into whole layers.
    #[error(
        "tile data of length {len} does not split into layers of {width}x{height} tiles"
    )]
    LayerMismatch {
        /// Length of the rejected tile buffer.
        len: usize,
        /// Width of the grid in tiles.
        width: u32,
        /// Height of the grid in tiles.
        height: u32,
    },
    /// Tiles must have a finite, positive edge length.
    #[error("tile size must be a finite positive number (received {tile_size})")]
    InvalidTileSize {
        /// Provided tile size that failed validation.
        tile_size: f32,
    },
}
