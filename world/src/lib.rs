#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative map state for the tilewalk engine.
//!
//! A [`TileMap`] pairs the layered [`TileGrid`] with the [`TileFlagTable`]
//! that decodes its identifiers. Both are immutable once built; switching maps
//! constructs a new pair and swaps it into an [`ActiveMap`] handle so readers
//! never observe a half-replaced map.

use std::sync::{Arc, PoisonError, RwLock};

use tilewalk_core::{Direction, TileCoord};
use tracing::info;

pub mod diagnostics;
mod error;
mod flags;
mod grid;
pub mod passability;

pub use diagnostics::TileReport;
pub use error::MapError;
pub use flags::TileFlagTable;
pub use grid::TileGrid;

/// Grid and flag table describing a single playable map.
#[derive(Clone, Debug, PartialEq)]
pub struct TileMap {
    grid: TileGrid,
    flags: TileFlagTable,
}

impl TileMap {
    /// Pairs an already-built grid with its flag table.
    #[must_use]
    pub fn new(grid: TileGrid, flags: TileFlagTable) -> Self {
        Self { grid, flags }
    }

    /// Builds a map straight from the exported tile buffer and raw flag values.
    pub fn from_raw(
        width: u32,
        height: u32,
        tile_size: f32,
        data: Vec<u32>,
        flags: impl IntoIterator<Item = u16>,
    ) -> Result<Self, MapError> {
        let grid = TileGrid::new(width, height, tile_size, data)?;
        Ok(Self::new(grid, TileFlagTable::from_raw(flags)))
    }

    /// Layered tile identifiers of the map.
    #[must_use]
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Flag table decoding the map's identifiers.
    #[must_use]
    pub fn flags(&self) -> &TileFlagTable {
        &self.flags
    }

    /// Reports whether `tile` can be entered.
    #[must_use]
    pub fn is_passable(&self, tile: TileCoord) -> bool {
        passability::is_passable(&self.grid, &self.flags, tile)
    }

    /// Reports whether leaving `tile` in `direction` is forbidden.
    #[must_use]
    pub fn is_direction_blocked(&self, tile: TileCoord, direction: Direction) -> bool {
        passability::is_direction_blocked(&self.grid, &self.flags, tile, direction)
    }

    /// Reports whether a single cardinal step from `from` to `to` is allowed.
    #[must_use]
    pub fn can_step_to(&self, from: TileCoord, to: TileCoord) -> bool {
        passability::can_step_to(&self.grid, &self.flags, from, to)
    }

    /// Collision summary for `tile`.
    #[must_use]
    pub fn describe_tile(&self, tile: TileCoord) -> TileReport {
        diagnostics::describe_tile(&self.grid, &self.flags, tile)
    }

    /// Text rendering of which tiles can be entered.
    #[must_use]
    pub fn passability_map(&self) -> String {
        diagnostics::passability_map(&self.grid, &self.flags)
    }
}

/// Shared handle to the map currently in play.
///
/// Queries take a [`snapshot`](Self::snapshot) and keep using it even if the
/// map is switched underneath them; a switch is a single pointer swap.
#[derive(Debug)]
pub struct ActiveMap {
    current: RwLock<Arc<TileMap>>,
}

impl ActiveMap {
    /// Creates a handle with `map` in play.
    #[must_use]
    pub fn new(map: TileMap) -> Self {
        Self {
            current: RwLock::new(Arc::new(map)),
        }
    }

    /// Map currently in play.
    #[must_use]
    pub fn snapshot(&self) -> Arc<TileMap> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Puts `map` in play and returns the map it replaced.
    pub fn replace(&self, map: TileMap) -> Arc<TileMap> {
        info!(
            width = map.grid().width(),
            height = map.grid().height(),
            layers = map.grid().layer_count(),
            "switching active map"
        );
        let next = Arc::new(map);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, next)
    }
}
