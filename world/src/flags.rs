//! Lookup table decoding tile identifiers into collision flags.

use tilewalk_core::{TileFlags, TileId};

/// Read-only mapping from tile identifier to collision flags.
///
/// Identifiers that are zero or fall past the end of the table decode to
/// [`TileFlags::PASSABLE`], so unknown tiles never block movement.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TileFlagTable {
    flags: Vec<TileFlags>,
}

impl TileFlagTable {
    /// Builds a table from the raw 16-bit values exported with the tileset,
    /// indexed by tile identifier.
    #[must_use]
    pub fn from_raw(values: impl IntoIterator<Item = u16>) -> Self {
        Self {
            flags: values.into_iter().map(TileFlags::from_bits_retain).collect(),
        }
    }

    /// Flags stored for `tile`, or the passable default.
    #[must_use]
    pub fn flag_of(&self, tile: TileId) -> TileFlags {
        if tile.is_empty() {
            return TileFlags::PASSABLE;
        }

        usize::try_from(tile.get())
            .ok()
            .and_then(|index| self.flags.get(index))
            .copied()
            .unwrap_or(TileFlags::PASSABLE)
    }
}
