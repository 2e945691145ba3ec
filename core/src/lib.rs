#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the tilewalk navigation engine.
//!
//! This crate defines the value types that connect the map data held by the
//! world crate, the pure systems that answer coordinate and movement queries,
//! and the adapters that feed them viewport sizes and tap positions. Every
//! type here is plain data: systems never retain these values between calls.

use std::collections::HashSet;

use bitflags::bitflags;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Edge length in pixels of the tiles authored for the shipped maps.
pub const DEFAULT_TILE_SIZE: f32 = 48.0;

/// Location of a single tile expressed as signed column and row indices.
///
/// Coordinates are signed because screen positions outside the letterboxed
/// grid legitimately resolve to negative or out-of-range tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileCoord {
    x: i32,
    y: i32,
}

impl TileCoord {
    /// Creates a new tile coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Zero-based column index of the tile.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Zero-based row index of the tile.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Returns the neighbouring tile reached by moving one step in `direction`.
    #[must_use]
    pub fn neighbor(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Signed offset from `self` to `other`.
    #[must_use]
    pub fn delta_to(self, other: TileCoord) -> (i32, i32) {
        (
            other.x.saturating_sub(self.x),
            other.y.saturating_sub(self.y),
        )
    }

    /// Computes the Chebyshev (ring) distance between two tile coordinates.
    #[must_use]
    pub fn chebyshev_distance(self, other: TileCoord) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

/// Identifier of a tile image within a map's tileset.
///
/// The value zero is reserved for "no tile" and never blocks anything.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TileId(u32);

impl TileId {
    /// Identifier used by layers that have nothing painted at a cell.
    pub const EMPTY: TileId = TileId(0);

    /// Creates a new tile identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Reports whether the identifier is the reserved empty value.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// Cardinal movement directions on the tile grid.
///
/// Rows grow downward, matching screen space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    Up,
    /// Movement toward increasing row indices.
    Down,
    /// Movement toward decreasing column indices.
    Left,
    /// Movement toward increasing column indices.
    Right,
}

impl Direction {
    /// Every direction in a stable order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit tile offset travelled by a single step in this direction.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Resolves a unit offset back into a direction.
    ///
    /// Diagonal, zero, and multi-tile offsets have no direction.
    #[must_use]
    pub const fn from_offset(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Self::Up),
            (0, 1) => Some(Self::Down),
            (-1, 0) => Some(Self::Left),
            (1, 0) => Some(Self::Right),
            _ => None,
        }
    }

    /// Direction pointing the other way along the same axis.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Flag bit that seals the tile edge crossed when leaving in this direction.
    #[must_use]
    pub const fn block_flag(self) -> TileFlags {
        match self {
            Self::Down => TileFlags::BLOCK_DOWN,
            Self::Left => TileFlags::BLOCK_LEFT,
            Self::Right => TileFlags::BLOCK_RIGHT,
            Self::Up => TileFlags::BLOCK_UP,
        }
    }
}

bitflags! {
    /// Per-tile collision flags decoded from the map's flag table.
    ///
    /// Bits 0-3 seal individual tile edges; a tile with any of them set can
    /// not be entered. The remaining bits carry authoring metadata that the
    /// engine preserves but does not interpret.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TileFlags: u16 {
        /// Leaving the tile downward is forbidden.
        const BLOCK_DOWN = 1 << 0;
        /// Leaving the tile to the left is forbidden.
        const BLOCK_LEFT = 1 << 1;
        /// Leaving the tile to the right is forbidden.
        const BLOCK_RIGHT = 1 << 2;
        /// Leaving the tile upward is forbidden.
        const BLOCK_UP = 1 << 3;
        /// Legacy marker written by the map editor for walkable tiles.
        const PASSABLE = 1 << 4;

        /// Union of the four directional blocking bits.
        const DIRECTIONAL = Self::BLOCK_DOWN.bits()
            | Self::BLOCK_LEFT.bits()
            | Self::BLOCK_RIGHT.bits()
            | Self::BLOCK_UP.bits();

        const _ = !0;
    }
}

impl TileFlags {
    /// Reports whether a tile carrying these flags refuses entry.
    #[must_use]
    pub const fn blocks_entry(self) -> bool {
        self.intersects(Self::DIRECTIONAL)
    }

    /// Reports whether leaving a tile carrying these flags in `direction` is sealed.
    #[must_use]
    pub const fn blocks(self, direction: Direction) -> bool {
        self.contains(direction.block_flag())
    }
}

/// Display area that the grid is letterboxed into.
///
/// Viewports are supplied fresh with every query and never cached.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    /// Creates a new viewport descriptor measured in pixels.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width of the viewport in pixels.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Height of the viewport in pixels.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Viewport extent as a vector.
    #[must_use]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Single tile-to-tile movement produced by the path planner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathStep {
    /// Tile entered by the step.
    pub tile: TileCoord,
    /// Display position of the tile's center under the planning viewport.
    pub pixel: Vec2,
}

/// Ordered sequence of steps leading away from a start tile.
///
/// The start tile itself is never part of the path.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    steps: Vec<PathStep>,
}

impl Path {
    /// Creates a path from pre-computed steps.
    #[must_use]
    pub fn from_steps(steps: Vec<PathStep>) -> Self {
        Self { steps }
    }

    /// Steps in the order they should be walked.
    #[must_use]
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// Number of steps contained in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Reports whether the path contains no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterator over the tiles entered by the path.
    pub fn tiles(&self) -> impl Iterator<Item = TileCoord> + '_ {
        self.steps.iter().map(|step| step.tile)
    }

    /// Final tile reached by the path, if it contains any step.
    #[must_use]
    pub fn destination(&self) -> Option<TileCoord> {
        self.steps.last().map(|step| step.tile)
    }
}

/// Caller-owned set of tiles that are temporarily occupied, e.g. by other agents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OccupiedTiles {
    tiles: HashSet<TileCoord>,
}

impl OccupiedTiles {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports whether the tile is occupied.
    #[must_use]
    pub fn contains(&self, tile: TileCoord) -> bool {
        self.tiles.contains(&tile)
    }
}

impl FromIterator<TileCoord> for OccupiedTiles {
    fn from_iter<I: IntoIterator<Item = TileCoord>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, TileCoord, TileFlags, TileId, Viewport};
    use serde::{de::DeserializeOwned, Serialize};

    #[test]
    fn chebyshev_distance_uses_longest_axis() {
        let origin = TileCoord::new(2, 2);
        assert_eq!(origin.chebyshev_distance(TileCoord::new(5, 3)), 3);
        assert_eq!(origin.chebyshev_distance(TileCoord::new(0, 6)), 4);
    }

    #[test]
    fn offsets_round_trip_through_from_offset() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.offset();
            assert_eq!(Direction::from_offset(dx, dy), Some(direction));
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn from_offset_rejects_non_unit_offsets() {
        assert_eq!(Direction::from_offset(0, 0), None);
        assert_eq!(Direction::from_offset(1, 1), None);
        assert_eq!(Direction::from_offset(2, 0), None);
        assert_eq!(Direction::from_offset(0, -3), None);
    }

    #[test]
    fn block_flags_follow_authored_bit_order() {
        assert_eq!(Direction::Down.block_flag().bits(), 0b0001);
        assert_eq!(Direction::Left.block_flag().bits(), 0b0010);
        assert_eq!(Direction::Right.block_flag().bits(), 0b0100);
        assert_eq!(Direction::Up.block_flag().bits(), 0b1000);
    }

    #[test]
    fn legacy_passable_bit_does_not_block() {
        let flags = TileFlags::PASSABLE;
        assert!(!flags.blocks_entry());
        assert!(Direction::ALL.iter().all(|&direction| !flags.blocks(direction)));
    }

    #[test]
    fn any_directional_bit_blocks_entry() {
        for direction in Direction::ALL {
            assert!(direction.block_flag().blocks_entry());
        }
        let flags = TileFlags::from_bits_retain(0x0021);
        assert!(flags.blocks_entry());
        assert!(flags.blocks(Direction::Down));
        assert!(!flags.blocks(Direction::Up));
    }

    #[test]
    fn neighbor_saturates_at_coordinate_limits() {
        let edge = TileCoord::new(i32::MAX, i32::MIN);
        assert_eq!(edge.neighbor(Direction::Right), edge);
        assert_eq!(edge.neighbor(Direction::Up), edge);
    }

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn value_types_round_trip_through_bincode() {
        assert_round_trip(&TileCoord::new(-3, 17));
        assert_round_trip(&TileId::new(421));
        assert_round_trip(&Direction::Left);
        assert_round_trip(&Viewport::new(390.0, 844.0));
    }
}
