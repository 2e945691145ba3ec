//! Human-readable views of map collision data for debugging map authoring.

use std::fmt;

use tilewalk_core::{TileCoord, TileFlags, TileId};

use crate::{passability, TileFlagTable, TileGrid};

/// Character rendered for tiles that can be entered.
pub const PASSABLE_GLYPH: char = '.';
/// Character rendered for tiles that refuse entry.
pub const BLOCKED_GLYPH: char = '#';

/// Collision summary for a single tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileReport {
    /// Tile described by the report.
    pub tile: TileCoord,
    /// Identifier visible on top of the stack.
    pub top_tile: TileId,
    /// Identifier stored by each layer, bottom layer first.
    pub layers: Vec<TileId>,
    /// Union of every layer's flags.
    pub flags: TileFlags,
    /// Whether the tile can be entered.
    pub passable: bool,
}

impl fmt::Display for TileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tile ({}, {}) top={} flags={:#06x} {}",
            self.tile.x(),
            self.tile.y(),
            self.top_tile.get(),
            self.flags.bits(),
            if self.passable { "passable" } else { "blocked" }
        )?;
        let layers: Vec<String> = self.layers.iter().map(|id| id.get().to_string()).collect();
        write!(f, " layers=[{}]", layers.join(", "))
    }
}

/// Summarises the collision state of `tile`.
#[must_use]
pub fn describe_tile(grid: &TileGrid, flags: &TileFlagTable, tile: TileCoord) -> TileReport {
    TileReport {
        tile,
        top_tile: grid.top_tile_id_at(tile),
        layers: grid.layer_ids_at(tile).collect(),
        flags: passability::composite_flags(grid, flags, tile),
        passable: passability::is_passable(grid, flags, tile),
    }
}

/// Renders the grid as one line per row of [`PASSABLE_GLYPH`] / [`BLOCKED_GLYPH`].
#[must_use]
pub fn passability_map(grid: &TileGrid, flags: &TileFlagTable) -> String {
    let width = grid.width() as usize;
    let mut out = String::with_capacity((width + 1) * grid.height() as usize);

    for tile in grid.coords() {
        out.push(if passability::is_passable(grid, flags, tile) {
            PASSABLE_GLYPH
        } else {
            BLOCKED_GLYPH
        });
        if tile.x() as usize + 1 == width {
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passability_map_marks_blocked_tiles() {
        let grid = TileGrid::new(4, 2, 48.0, vec![0, 1, 0, 0, 0, 0, 0, 1]).expect("valid grid");
        let flags = TileFlagTable::from_raw([0, 0x0f]);
        assert_eq!(passability_map(&grid, &flags), ".#..\n...#\n");
    }

    #[test]
    fn passability_map_of_empty_grid_is_empty() {
        let grid = TileGrid::new(0, 0, 48.0, Vec::new()).expect("valid grid");
        assert!(passability_map(&grid, &TileFlagTable::default()).is_empty());
    }

    #[test]
    fn describe_tile_reports_every_layer() {
        let grid = TileGrid::new(1, 1, 48.0, vec![4, 0, 5]).expect("valid grid");
        let flags = TileFlagTable::from_raw([0, 0, 0, 0, 0x10, 0x02]);
        let report = describe_tile(&grid, &flags, TileCoord::new(0, 0));

        assert_eq!(report.top_tile, TileId::new(5));
        assert_eq!(
            report.layers,
            vec![TileId::new(4), TileId::EMPTY, TileId::new(5)]
        );
        assert_eq!(report.flags, TileFlags::PASSABLE | TileFlags::BLOCK_LEFT);
        assert!(!report.passable);
        assert_eq!(
            report.to_string(),
            "tile (0, 0) top=5 flags=0x0012 blocked layers=[4, 0, 5]"
        );
    }
}
