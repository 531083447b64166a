use std::{fs, path::PathBuf, process::ExitCode};

use bevy_trading_floor::prelude::*;
use clap::{Parser, Subcommand};
use thiserror::Error;

/// Inspect a trading floor config without starting the engine
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to a `*.floor.ron` file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the desk placements, in row-major order
    Layout {
        /// Override the number of rows
        #[arg(long)]
        rows: Option<u32>,
        /// Override the number of columns
        #[arg(long)]
        cols: Option<u32>,
        /// Override the spacing between desks
        #[arg(long)]
        spacing: Option<f32>,
    },
    /// Print every shape of the scene description
    Scene,
    /// Feed a sequence of locomotion states to the animation selector and
    /// print the resulting directives
    Trace {
        /// States to feed, any of `idle`, `run`, `sprint`, `fall`, `sprint-fall`
        #[arg(required = true)]
        states: Vec<String>,
        /// Clips that exist in the character's animation set. Defaults to the
        /// names of the config's clip map.
        #[arg(long, value_delimiter = ',')]
        clips: Option<Vec<String>>,
    },
}

#[derive(Debug, Error)]
enum InspectError {
    #[error("Could not read {0}: {1}")]
    Io(PathBuf, std::io::Error),
    #[error("Could not parse {0}: {1}")]
    Ron(PathBuf, ron::error::SpannedError),
    #[error(transparent)]
    InvalidGrid(#[from] InvalidGridConfigError),
    #[error("Unknown locomotion state \"{0}\"")]
    UnknownState(String),
}

fn load_config(path: Option<&PathBuf>) -> Result<TradingFloorConfig, InspectError> {
    let Some(path) = path else {
        return Ok(TradingFloorConfig::default());
    };
    let text = fs::read_to_string(path).map_err(|e| InspectError::Io(path.clone(), e))?;
    TradingFloorConfig::from_ron(&text).map_err(|e| InspectError::Ron(path.clone(), e))
}

fn parse_state(name: &str) -> Result<LocomotionState, InspectError> {
    match name {
        "idle" => Ok(LocomotionState::IDLE),
        "run" => Ok(LocomotionState::moving(false)),
        "sprint" => Ok(LocomotionState::moving(true)),
        "fall" => Ok(LocomotionState::IDLE.airborne()),
        "sprint-fall" => Ok(LocomotionState::moving(true).airborne()),
        _ => Err(InspectError::UnknownState(name.to_string())),
    }
}

fn print_layout(grid: &GridConfig) -> Result<(), InspectError> {
    let placements = grid.placements()?;
    let extent = grid.extent();
    println!(
        "{} x {} desks, spacing {}, extent {} x {}",
        grid.rows, grid.cols, grid.spacing, extent.x, extent.y
    );
    for placement in placements {
        let p = placement.position;
        println!("{}\t({}, {}, {})", placement.key("desk"), p.x, p.y, p.z);
    }
    Ok(())
}

fn print_scene(config: &TradingFloorConfig) -> Result<(), InspectError> {
    let scene = config.scene()?;
    for shape in &scene.shapes {
        let t = shape.transform.translation;
        let geometry = match shape.geometry {
            ShapeGeometry::Cuboid { size } => {
                format!("cuboid {} x {} x {}", size.x, size.y, size.z)
            }
            ShapeGeometry::Plane { size } => format!("plane {} x {}", size.x, size.y),
        };
        println!(
            "{}\t{}\tat ({:.2}, {:.2}, {:.2}){}",
            shape.label,
            geometry,
            t.x,
            t.y,
            t.z,
            if shape.hover.is_some() { "\thoverable" } else { "" }
        );
    }
    println!(
        "{} shapes, {} hover groups",
        scene.shapes.len(),
        scene.hover_groups.len()
    );
    Ok(())
}

fn print_trace(
    config: &TradingFloorConfig,
    states: &[String],
    clips: Option<Vec<String>>,
) -> Result<(), InspectError> {
    let library = clips.unwrap_or_else(|| {
        LocomotionClip::ALL
            .iter()
            .map(|clip| config.clips.name_of(*clip).to_string())
            .collect()
    });
    let mut selector = config.animation_selector();

    for name in states {
        let state = parse_state(name)?;
        match selector.select(&state, &library) {
            Ok(directive) => {
                let transition = match &directive.transition {
                    Some(t) => match &t.from {
                        Some(from) => format!(
                            "crossfade {from} -> {} over {}s",
                            t.to, t.blend_duration_seconds
                        ),
                        None => format!("start {}", t.to),
                    },
                    None => "no transition".to_string(),
                };
                println!(
                    "{name}\t{}\trate {}\t{transition}",
                    directive.target_clip, directive.playback_rate
                );
            }
            Err(error) => println!("{name}\twarning: {error}"),
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), InspectError> {
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Command::Layout {
            rows,
            cols,
            spacing,
        } => {
            let grid = GridConfig {
                rows: rows.unwrap_or(config.desk_grid.rows),
                cols: cols.unwrap_or(config.desk_grid.cols),
                spacing: spacing.unwrap_or(config.desk_grid.spacing),
            };
            print_layout(&grid)
        }
        Command::Scene => print_scene(&config),
        Command::Trace { states, clips } => print_trace(&config, &states, clips),
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}
