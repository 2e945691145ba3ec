#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter for inspecting tilewalk maps while authoring them.

mod map_file;

use std::{fmt::Write as _, fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use glam::Vec2;
use tilewalk_core::{OccupiedTiles, Path, TileCoord, Viewport};
use tilewalk_system_coordinates::ContainFit;
use tilewalk_system_path_planning::{plan_path, route_to_tap};
use tilewalk_world::TileMap;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::map_file::MapFile;

/// Inspect collision and movement on a tile map.
#[derive(Debug, Parser)]
#[command(name = "tilewalk", version)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Print the passability map, one line per row.
    Dump {
        /// Path to the JSON map file.
        #[arg(long)]
        map: PathBuf,
    },
    /// Describe the tile under a display pixel.
    Inspect {
        #[command(flatten)]
        view: ViewArgs,
        /// Display pixel as `X,Y`.
        #[arg(long, value_parser = parse_point)]
        pixel: Vec2,
    },
    /// Plan a walk between two display pixels.
    Path {
        #[command(flatten)]
        view: ViewArgs,
        /// Start pixel as `X,Y`.
        #[arg(long, value_parser = parse_point)]
        from: Vec2,
        /// Goal pixel as `X,Y`.
        #[arg(long, value_parser = parse_point)]
        to: Vec2,
        /// Tile held by another walker, as `X,Y`. May be repeated.
        #[arg(long, value_parser = parse_tile)]
        occupied: Vec<TileCoord>,
    },
    /// Resolve a tap, steering around obstacles, and plan the walk there.
    Route {
        #[command(flatten)]
        view: ViewArgs,
        /// Start pixel as `X,Y`.
        #[arg(long, value_parser = parse_point)]
        from: Vec2,
        /// Tapped pixel as `X,Y`.
        #[arg(long, value_parser = parse_point)]
        tap: Vec2,
        /// Tile held by another walker, as `X,Y`. May be repeated.
        #[arg(long, value_parser = parse_tile)]
        occupied: Vec<TileCoord>,
    },
}

#[derive(Debug, Args)]
struct ViewArgs {
    /// Path to the JSON map file.
    #[arg(long)]
    map: PathBuf,
    /// Display size as `WIDTHxHEIGHT`.
    #[arg(long, value_parser = parse_viewport)]
    viewport: Viewport,
}

/// Entry point for the tilewalk command-line interface.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    print!("{}", run(cli.command)?);
    Ok(())
}

fn run(command: CliCommand) -> Result<String> {
    match command {
        CliCommand::Dump { map } => Ok(load_map(&map)?.passability_map()),
        CliCommand::Inspect { view, pixel } => {
            let map = load_map(&view.map)?;
            let fit = ContainFit::new(map.grid(), view.viewport);
            let tile = fit.pixel_to_tile(pixel);
            let mut out = format!("{}\n", map.describe_tile(tile));
            if !fit.contains_pixel(pixel) {
                out.push_str("pixel lies on the letterbox outside the grid\n");
            }
            Ok(out)
        }
        CliCommand::Path {
            view,
            from,
            to,
            occupied,
        } => {
            let map = load_map(&view.map)?;
            let occupied: OccupiedTiles = occupied.into_iter().collect();
            let path = plan_path(map.grid(), map.flags(), from, to, view.viewport, |tile| {
                occupied.contains(tile)
            });
            Ok(format_path(&path))
        }
        CliCommand::Route {
            view,
            from,
            tap,
            occupied,
        } => {
            let map = load_map(&view.map)?;
            let occupied: OccupiedTiles = occupied.into_iter().collect();
            let route = route_to_tap(&map, from, tap, view.viewport, |tile| {
                occupied.contains(tile)
            });
            let mut out = format!(
                "tapped ({}, {}) -> target ({}, {})\n",
                route.tapped.x(),
                route.tapped.y(),
                route.target.x(),
                route.target.y()
            );
            out.push_str(&format_path(&route.path));
            Ok(out)
        }
    }
}

fn load_map(path: &std::path::Path) -> Result<TileMap> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read map file {}", path.display()))?;
    let map = MapFile::parse(&json)
        .and_then(MapFile::into_map)
        .with_context(|| format!("failed to load map file {}", path.display()))?;
    info!(
        path = %path.display(),
        width = map.grid().width(),
        height = map.grid().height(),
        layers = map.grid().layer_count(),
        "loaded map"
    );
    Ok(map)
}

fn format_path(path: &Path) -> String {
    if path.is_empty() {
        return String::from("no movement\n");
    }

    let mut out = String::new();
    for (index, step) in path.steps().iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}: tile ({}, {}) at ({:.1}, {:.1})",
            index + 1,
            step.tile.x(),
            step.tile.y(),
            step.pixel.x,
            step.pixel.y
        );
    }
    out
}

fn parse_viewport(value: &str) -> Result<Viewport, String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{value}'"))?;
    let width = parse_number::<f32>(width, value)?;
    let height = parse_number::<f32>(height, value)?;
    Ok(Viewport::new(width, height))
}

fn parse_point(value: &str) -> Result<Vec2, String> {
    let (x, y) = split_pair(value)?;
    Ok(Vec2::new(parse_number(x, value)?, parse_number(y, value)?))
}

fn parse_tile(value: &str) -> Result<TileCoord, String> {
    let (x, y) = split_pair(value)?;
    Ok(TileCoord::new(parse_number(x, value)?, parse_number(y, value)?))
}

fn split_pair(value: &str) -> Result<(&str, &str), String> {
    value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{value}'"))
}

fn parse_number<T: std::str::FromStr>(part: &str, value: &str) -> Result<T, String> {
    part.trim()
        .parse()
        .map_err(|_| format!("could not parse '{part}' in '{value}'"))
}
