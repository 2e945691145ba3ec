#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic greedy walker that turns a tap into tile-by-tile steps.
//!
//! The planner is not a shortest-path search. Each step heads
//! along the axis with the larger remaining distance, falls back to the other
//! axis, then sidesteps, then backs off, and takes the first move the map
//! allows. Walkers therefore visibly slide along walls toward the tap and
//! stop where the greedy rule has nowhere left to go.

use glam::Vec2;
use tilewalk_core::{Direction, Path, PathStep, TileCoord, Viewport};
use tilewalk_system_coordinates::ContainFit;
use tilewalk_system_nearest_passable::find_nearest_passable;
use tilewalk_world::{passability, TileFlagTable, TileGrid, TileMap};
use tracing::debug;

/// Maximum number of steps a single plan may contain.
pub const PATH_STEP_LIMIT: usize = 100;

/// Plans the walk from the tile under `start` toward the tile under `goal`.
///
/// `is_occupied` marks tiles blocked only for this query, such as tiles held
/// by other walkers. A dead end truncates the path where the walker got
/// stuck; reaching the goal or [`PATH_STEP_LIMIT`] ends it normally. The
/// returned steps carry tile centers computed under `viewport`.
#[must_use]
pub fn plan_path<F>(
    grid: &TileGrid,
    flags: &TileFlagTable,
    start: Vec2,
    goal: Vec2,
    viewport: Viewport,
    is_occupied: F,
) -> Path
where
    F: Fn(TileCoord) -> bool,
{
    let fit = ContainFit::new(grid, viewport);
    let start = fit.pixel_to_tile(start);
    let goal = fit.pixel_to_tile(goal);
    walk(grid, flags, &fit, start, goal, &is_occupied)
}

/// Outcome of routing a walker toward a tap.
#[derive(Clone, Debug, PartialEq)]
pub struct TapRoute {
    /// Tile directly under the tap.
    pub tapped: TileCoord,
    /// Tile the walker heads for once obstacles around the tap are avoided.
    pub target: TileCoord,
    /// Steps toward `target`.
    pub path: Path,
}

/// Resolves a tap into a destination and plans the walk there.
///
/// Taps landing on obstacles or occupied tiles are redirected to the nearest
/// enterable tile before planning.
#[must_use]
pub fn route_to_tap<F>(
    map: &TileMap,
    start: Vec2,
    tap: Vec2,
    viewport: Viewport,
    is_occupied: F,
) -> TapRoute
where
    F: Fn(TileCoord) -> bool,
{
    let fit = ContainFit::new(map.grid(), viewport);
    let tapped = fit.pixel_to_tile(tap);
    let target = find_nearest_passable(map.grid(), map.flags(), tapped, &is_occupied);
    let start = fit.pixel_to_tile(start);
    let path = walk(map.grid(), map.flags(), &fit, start, target, &is_occupied);

    TapRoute {
        tapped,
        target,
        path,
    }
}

fn walk<F>(
    grid: &TileGrid,
    flags: &TileFlagTable,
    fit: &ContainFit,
    start: TileCoord,
    goal: TileCoord,
    is_occupied: &F,
) -> Path
where
    F: Fn(TileCoord) -> bool,
{
    let mut steps = Vec::new();
    let mut current = start;

    while steps.len() < PATH_STEP_LIMIT {
        if current == goal {
            return Path::from_steps(steps);
        }

        let (dx, dy) = current.delta_to(goal);
        let next = preferred_directions(dx, dy)
            .into_iter()
            .map(|direction| current.neighbor(direction))
            .find(|&tile| {
                passability::can_step_to(grid, flags, current, tile) && !is_occupied(tile)
            });

        let Some(next) = next else {
            debug!(?start, ?goal, stuck_at = ?current, "path planning hit a dead end");
            return Path::from_steps(steps);
        };

        steps.push(PathStep {
            tile: next,
            pixel: fit.tile_to_pixel(next),
        });
        current = next;
    }

    if current != goal {
        debug!(?start, ?goal, "path planning reached the step limit");
    }
    Path::from_steps(steps)
}

/// Candidate directions for one step toward a goal offset by `(dx, dy)`.
///
/// The dominant axis goes first, with ties going to the horizontal axis,
/// followed by the other axis, then the other axis reversed, then the
/// dominant axis reversed.
fn preferred_directions(dx: i32, dy: i32) -> [Direction; 4] {
    let horizontal = if dx < 0 { Direction::Left } else { Direction::Right };
    let vertical = if dy < 0 { Direction::Up } else { Direction::Down };

    let (primary, secondary) = if dx.unsigned_abs() >= dy.unsigned_abs() {
        (horizontal, vertical)
    } else {
        (vertical, horizontal)
    };

    [primary, secondary, secondary.opposite(), primary.opposite()]
}
