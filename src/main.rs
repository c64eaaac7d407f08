//! Snapshot tool: run the geometry engine against a JSON board snapshot.
//!
//! Reads `{ "items": [{ "id", "x", "y", "width", "height" }, ...] }` from a
//! file (or stdin when no path is given) and prints the engine's answer as
//! JSON on stdout. Logs go to stderr.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use lightboard_geometry::auto_layout::seed_positions;
use lightboard_geometry::config::{CanvasConfig, ConfigError};
use lightboard_geometry::geom::{Point, PositionedItem};
use lightboard_geometry::placement::place_item;
use lightboard_geometry::recalibrate::recalibrate_button_positions;


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read snapshot: {0}")]
    Io(#[from] io::Error),
    #[error("invalid snapshot JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("invalid canvas config: {0}")]
    Config(#[from] ConfigError),
    #[error("layout of {items} items cannot fit a {width}x{height} canvas")]
    Infeasible { items: usize, width: f64, height: f64 },
}

#[derive(Parser, Debug)]
#[command(name = "lightboard-geometry", about = "Canvas geometry engine snapshot tool")]
struct Cli {
    /// Snapshot file; stdin when omitted.
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Overrides `CANVAS_WIDTH` from the environment.
    #[arg(long)]
    canvas_width: Option<f64>,

    /// Overrides `CANVAS_HEIGHT` from the environment.
    #[arg(long)]
    canvas_height: Option<f64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shift the snapshot back inside the canvas bounds.
    Recalibrate,
    /// Find a position for a new item of the given size.
    Place {
        #[arg(long)]
        width: f64,
        #[arg(long)]
        height: f64,
    },
    /// Seed grid positions for `count` items with no saved position.
    AutoLayout {
        #[arg(long)]
        count: usize,
    },
}

#[derive(Debug, Default, Deserialize)]
struct Snapshot {
    #[serde(default)]
    items: Vec<PositionedItem>,
}

#[derive(Debug, Serialize)]
struct AutoLayoutOutput {
    positions: Vec<Point>,
}

fn main() {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "snapshot tool failed");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = CanvasConfig::from_env();
    if let Some(width) = cli.canvas_width {
        config.canvas_width = width;
    }
    if let Some(height) = cli.canvas_height {
        config.canvas_height = height;
    }
    config.validate()?;

    let output = match cli.command {
        Command::Recalibrate => {
            let snapshot = read_snapshot(cli.input.as_ref())?;
            let result = recalibrate_button_positions(&snapshot.items, config.canvas_width, config.canvas_height)
                .ok_or(CliError::Infeasible {
                    items: snapshot.items.len(),
                    width: config.canvas_width,
                    height: config.canvas_height,
                })?;
            serde_json::to_string_pretty(&result)?
        }
        Command::Place { width, height } => {
            let snapshot = read_snapshot(cli.input.as_ref())?;
            let existing: Vec<_> = snapshot.items.iter().map(|item| item.rect).collect();
            let placement = place_item(&existing, &config.placement_request(width, height));
            serde_json::to_string_pretty(&placement)?
        }
        Command::AutoLayout { count } => {
            let positions = seed_positions(&vec![None; count], config.canvas_width, config.canvas_height);
            serde_json::to_string_pretty(&AutoLayoutOutput { positions })?
        }
    };

    println!("{output}");
    Ok(())
}

fn read_snapshot(path: Option<&PathBuf>) -> Result<Snapshot, CliError> {
    let mut raw = String::new();
    match path {
        Some(path) => {
            BufReader::new(File::open(path)?).read_to_string(&mut raw)?;
        }
        None => {
            io::stdin().read_to_string(&mut raw)?;
        }
    }
    if raw.trim().is_empty() {
        return Ok(Snapshot::default());
    }
    Ok(serde_json::from_str(&raw)?)
}
