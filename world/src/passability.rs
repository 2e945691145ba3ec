//! Collision queries compositing every layer of a grid.
//!
//! Layers combine by union: a tile is only walkable when no layer objects to
//! it, and an edge is sealed when any layer seals it. Out-of-bounds tiles can
//! neither be entered nor left.

use tilewalk_core::{Direction, TileCoord, TileFlags};
use tracing::warn;

use crate::{TileFlagTable, TileGrid};

/// Reports whether `tile` can be entered.
#[must_use]
pub fn is_passable(grid: &TileGrid, flags: &TileFlagTable, tile: TileCoord) -> bool {
    if !grid.contains(tile) {
        return false;
    }

    !grid.tile_ids_at(tile).any(|id| flags.flag_of(id).blocks_entry())
}

/// Reports whether leaving `tile` in `direction` is forbidden.
#[must_use]
pub fn is_direction_blocked(
    grid: &TileGrid,
    flags: &TileFlagTable,
    tile: TileCoord,
    direction: Direction,
) -> bool {
    if !grid.contains(tile) {
        return true;
    }

    grid.tile_ids_at(tile).any(|id| flags.flag_of(id).blocks(direction))
}

/// Reports whether a single cardinal step from `from` to `to` is allowed.
///
/// The destination must be enterable and the edge crossed when leaving
/// `from` must be open. Offsets other than a single cardinal step are
/// rejected.
#[must_use]
pub fn can_step_to(
    grid: &TileGrid,
    flags: &TileFlagTable,
    from: TileCoord,
    to: TileCoord,
) -> bool {
    let (dx, dy) = from.delta_to(to);
    let Some(direction) = Direction::from_offset(dx, dy) else {
        warn!(?from, ?to, "rejected step that is not a single cardinal move");
        return false;
    };

    is_passable(grid, flags, to) && !is_direction_blocked(grid, flags, from, direction)
}

/// Union of the flags contributed by every layer at `tile`.
///
/// A cell with nothing painted on any layer decodes like an empty identifier,
/// to [`TileFlags::PASSABLE`]. Out-of-bounds tiles report every directional bit.
#[must_use]
pub fn composite_flags(grid: &TileGrid, flags: &TileFlagTable, tile: TileCoord) -> TileFlags {
    if !grid.contains(tile) {
        return TileFlags::DIRECTIONAL;
    }

    grid.tile_ids_at(tile)
        .map(|id| flags.flag_of(id))
        .reduce(|acc, flag| acc | flag)
        .unwrap_or(TileFlags::PASSABLE)
}
