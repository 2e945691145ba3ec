#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system redirecting taps on obstacles to a nearby enterable tile.

use tilewalk_core::TileCoord;
use tilewalk_world::{passability, TileFlagTable, TileGrid};
use tracing::debug;

/// Largest Chebyshev distance searched around the requested tile.
pub const SEARCH_RADIUS: i32 = 5;

/// Closest tile to `target` that is in bounds, passable, and not occupied.
///
/// Rings of increasing radius are scanned row by row, so ties resolve to the
/// upper-left-most candidate. When nothing qualifies within
/// [`SEARCH_RADIUS`] the original target is returned unchanged, and callers
/// must be prepared for it to be blocked.
#[must_use]
pub fn find_nearest_passable<F>(
    grid: &TileGrid,
    flags: &TileFlagTable,
    target: TileCoord,
    is_occupied: F,
) -> TileCoord
where
    F: Fn(TileCoord) -> bool,
{
    let available =
        |tile: TileCoord| passability::is_passable(grid, flags, tile) && !is_occupied(tile);

    if available(target) {
        return target;
    }

    for radius in 1..=SEARCH_RADIUS {
        if let Some(tile) = ring(target, radius).find(|&tile| available(tile)) {
            debug!(?target, ?tile, radius, "redirected to nearest passable tile");
            return tile;
        }
    }

    debug!(?target, "no passable tile within search radius");
    target
}

/// Cells whose Chebyshev distance from `center` equals `radius`, in row-major order.
fn ring(center: TileCoord, radius: i32) -> impl Iterator<Item = TileCoord> {
    let span = radius.unsigned_abs();
    (-radius..=radius)
        .flat_map(move |dy| {
            (-radius..=radius).map(move |dx| {
                TileCoord::new(center.x().saturating_add(dx), center.y().saturating_add(dy))
            })
        })
        .filter(move |tile| tile.chebyshev_distance(center) == span)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_enumerates_perimeter_row_major() {
        let cells: Vec<_> = ring(TileCoord::new(0, 0), 1).collect();
        assert_eq!(
            cells,
            vec![
                TileCoord::new(-1, -1),
                TileCoord::new(0, -1),
                TileCoord::new(1, -1),
                TileCoord::new(-1, 0),
                TileCoord::new(1, 0),
                TileCoord::new(-1, 1),
                TileCoord::new(0, 1),
                TileCoord::new(1, 1),
            ]
        );
    }

    #[test]
    fn ring_sizes_match_perimeter_length() {
        for radius in 1..=SEARCH_RADIUS {
            assert_eq!(ring(TileCoord::new(3, 3), radius).count(), (8 * radius) as usize);
        }
    }
}
