use tilewalk_core::{Direction, TileCoord};
use tilewalk_world::{passability, TileFlagTable, TileGrid, TileMap};

const FLOOR: u32 = 1;
const CRATE: u32 = 2;
const SOUTH_RAIL: u32 = 3;

fn flag_table() -> TileFlagTable {
    // Slot zero is never consulted; 0x10 is the editor's legacy walkable bit.
    TileFlagTable::from_raw([0x00, 0x10, 0x0f, 0x01])
}

fn open_floor_with_overlay(width: u32, height: u32, overlay: &[(i32, i32, u32)]) -> TileMap {
    let cells = (width * height) as usize;
    let mut data = vec![FLOOR; cells];
    data.extend(std::iter::repeat(0).take(cells));
    for &(x, y, id) in overlay {
        data[cells + (y as u32 * width + x as u32) as usize] = id;
    }
    let grid = TileGrid::new(width, height, 48.0, data).expect("valid grid");
    TileMap::new(grid, flag_table())
}

#[test]
fn single_overlay_obstacle_blocks_only_its_tile() {
    let map = open_floor_with_overlay(5, 5, &[(2, 2, CRATE)]);

    for y in 0..5 {
        for x in 0..5 {
            let tile = TileCoord::new(x, y);
            assert_eq!(
                map.is_passable(tile),
                tile != TileCoord::new(2, 2),
                "unexpected passability at ({x}, {y})"
            );
        }
    }
}

#[test]
fn obstacle_on_lower_layer_is_not_hidden_by_floor_on_top() {
    let mut data = vec![FLOOR; 4];
    data[3] = CRATE;
    data.extend([FLOOR; 4]);
    let grid = TileGrid::new(2, 2, 48.0, data).expect("valid grid");
    let map = TileMap::new(grid, flag_table());

    assert_eq!(map.grid().top_tile_id_at(TileCoord::new(1, 1)).get(), FLOOR);
    assert!(!map.is_passable(TileCoord::new(1, 1)));
}

#[test]
fn out_of_bounds_tiles_are_sealed() {
    let map = open_floor_with_overlay(3, 2, &[]);
    let outside = [
        TileCoord::new(-1, 0),
        TileCoord::new(0, -1),
        TileCoord::new(3, 0),
        TileCoord::new(0, 2),
        TileCoord::new(i32::MIN, i32::MAX),
    ];

    for tile in outside {
        assert!(!map.is_passable(tile));
        for direction in Direction::ALL {
            assert!(map.is_direction_blocked(tile, direction));
        }
    }
}

#[test]
fn one_way_rail_blocks_leaving_downward_only() {
    let map = open_floor_with_overlay(3, 3, &[(1, 1, SOUTH_RAIL)]);
    let rail = TileCoord::new(1, 1);

    assert!(map.is_direction_blocked(rail, Direction::Down));
    assert!(!map.is_direction_blocked(rail, Direction::Up));
    assert!(!map.is_direction_blocked(rail, Direction::Left));
    assert!(!map.is_direction_blocked(rail, Direction::Right));

    assert!(!map.can_step_to(rail, TileCoord::new(1, 2)));
    assert!(map.can_step_to(rail, TileCoord::new(0, 1)));
}

#[test]
fn cannot_step_into_blocked_tile_from_open_tile() {
    let map = open_floor_with_overlay(3, 1, &[(2, 0, CRATE)]);
    assert!(map.can_step_to(TileCoord::new(0, 0), TileCoord::new(1, 0)));
    assert!(!map.can_step_to(TileCoord::new(1, 0), TileCoord::new(2, 0)));
    assert!(!map.can_step_to(TileCoord::new(0, 0), TileCoord::new(-1, 0)));
}

#[test]
fn diagonal_steps_fail_closed() {
    let map = open_floor_with_overlay(3, 3, &[]);
    assert!(!passability::can_step_to(
        map.grid(),
        map.flags(),
        TileCoord::new(0, 0),
        TileCoord::new(1, 1),
    ));
}

#[test]
fn map_without_layers_is_open_everywhere_in_bounds() {
    let grid = TileGrid::new(2, 2, 48.0, Vec::new()).expect("valid grid");
    let map = TileMap::new(grid, TileFlagTable::default());
    assert!(map.is_passable(TileCoord::new(1, 1)));
    assert_eq!(map.passability_map(), "..\n..\n");
}
