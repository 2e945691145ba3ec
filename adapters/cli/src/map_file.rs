use std::{error::Error, fmt};

use serde::Deserialize;
use tilewalk_core::DEFAULT_TILE_SIZE;
use tilewalk_world::{MapError, TileMap};

/// Map exported by the level editor: a flat tile buffer plus its flag table.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub(crate) struct MapFile {
    /// Number of tile columns.
    width: u32,
    /// Number of tile rows.
    height: u32,
    /// Edge length of a tile in pixels.
    #[serde(default = "default_tile_size")]
    tile_size: f32,
    /// Tile identifiers of every layer, one layer after another.
    data: Vec<u32>,
    /// Flag value for each tile identifier.
    #[serde(default)]
    flags: Vec<u16>,
}

fn default_tile_size() -> f32 {
    DEFAULT_TILE_SIZE
}

impl MapFile {
    /// Parses a map from its JSON representation.
    pub(crate) fn parse(json: &str) -> Result<Self, MapFileError> {
        serde_json::from_str(json).map_err(MapFileError::InvalidJson)
    }

    /// Validates the layer layout and builds the in-memory map.
    pub(crate) fn into_map(self) -> Result<TileMap, MapFileError> {
        TileMap::from_raw(self.width, self.height, self.tile_size, self.data, self.flags)
            .map_err(MapFileError::InvalidMap)
    }
}

/// Errors that can occur while decoding a map file.
#[derive(Debug)]
pub(crate) enum MapFileError {
    /// The file is not valid map JSON.
    InvalidJson(serde_json::Error),
    /// The decoded map violates the grid layout rules.
    InvalidMap(MapError),
}

impl fmt::Display for MapFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidJson(error) => write!(f, "could not parse map file: {error}"),
            Self::InvalidMap(error) => write!(f, "map file describes an invalid map: {error}"),
        }
    }
}

impl Error for MapFileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidJson(error) => Some(error),
            Self::InvalidMap(error) => Some(error),
        }
    }
}
