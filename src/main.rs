//! Farm grid runner (default binary).
//!
//! Uses crossterm for input and the terminal render backend for output. Log
//! output goes to a file because the terminal is in raw alternate-screen mode
//! while the farm is running; set `RUST_LOG` to change the level.

use std::fmt::Write as _;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info};

use farm_grid::core::{tend, FarmSnapshot, Farmer, Grid};
use farm_grid::input::{button_for_key, should_quit, EdgeDetector, KeyTracker};
use farm_grid::mesh::{FrameMeshes, MeshBuilder, MeshLayout, RenderBackend};
use farm_grid::term::TerminalBackend;
use farm_grid::types::{
    FarmAction, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, MAX_GRID_SIDE, TICK_MS,
};

#[derive(Debug, Parser)]
#[command(name = "farm-grid", version, about = "Walk a farmer around a tile grid and tend crops")]
struct Args {
    /// Grid width in tiles
    #[arg(
        long,
        default_value_t = DEFAULT_GRID_WIDTH,
        value_parser = clap::value_parser!(i32).range(1..=MAX_GRID_SIDE as i64)
    )]
    width: i32,

    /// Grid height in tiles
    #[arg(
        long,
        default_value_t = DEFAULT_GRID_HEIGHT,
        value_parser = clap::value_parser!(i32).range(1..=MAX_GRID_SIDE as i64)
    )]
    height: i32,

    /// Gap between cells, in normalized device units
    #[arg(long, default_value_t = 0.0)]
    gap: f32,

    /// Where log output is written
    #[arg(long, default_value = "farm-grid.log")]
    log_file: PathBuf,

    /// Print the final farm state as JSON on exit
    #[arg(long)]
    print_snapshot: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_file)?;

    let mut grid = Grid::new(args.width, args.height).context("cannot create farm grid")?;
    let mut farmer = Farmer::new(&grid);
    let builder = MeshBuilder::new(MeshLayout::default().with_gap(args.gap));
    check_gap(args.gap, builder.cell_size(&grid))?;
    info!("farm {}x{} ready", grid.width(), grid.height());

    let mut backend = TerminalBackend::new();
    backend.enter()?;

    let result = run(&mut backend, &mut grid, &mut farmer, &builder);

    // Always try to restore terminal state.
    let _ = backend.exit();
    result?;

    if args.print_snapshot {
        let snap = FarmSnapshot::capture(&grid, &farmer);
        println!("{}", serde_json::to_string_pretty(&snap)?);
    }
    info!("farm closed with farmer at ({}, {})", farmer.x(), farmer.y());
    Ok(())
}

/// The gap must leave every cell with a visible interior.
fn check_gap(gap: f32, (cell_w, cell_h): (f32, f32)) -> Result<()> {
    let limit = cell_w.min(cell_h);
    if !gap.is_finite() || gap < 0.0 {
        bail!("--gap must be a non-negative number, got {}", gap);
    }
    if gap >= limit {
        bail!("--gap {} is not smaller than the cell size {}", gap, limit);
    }
    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(
    backend: &mut TerminalBackend,
    grid: &mut Grid,
    farmer: &mut Farmer,
    builder: &MeshBuilder,
) -> Result<()> {
    let started = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    let mut keys = KeyTracker::new();
    let mut edges = EdgeDetector::new();
    let mut meshes = FrameMeshes::default();
    let mut status = String::new();

    loop {
        // Render.
        let tile = grid.tile(farmer.x(), farmer.y())?;
        status.clear();
        write!(
            status,
            " ({}, {}) {}/{}  arrows/wasd move  space tend  q quit ",
            farmer.x(),
            farmer.y(),
            tile.terrain.as_str(),
            tile.growth.as_str()
        )?;
        backend.set_status(&status);
        builder.build_into(grid, farmer.position(), &mut meshes);
        backend.present(&meshes)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    let now_ms = started.elapsed().as_millis() as u64;
                    match key.kind {
                        KeyEventKind::Press | KeyEventKind::Repeat => {
                            if should_quit(key) {
                                return Ok(());
                            }
                            if let Some(button) = button_for_key(key.code) {
                                keys.handle_press(button, now_ms);
                            }
                        }
                        KeyEventKind::Release => {
                            if let Some(button) = button_for_key(key.code) {
                                keys.handle_release(button);
                            }
                        }
                    }
                }
                Event::Resize(w, h) => {
                    debug!("resize event {}x{}", w, h);
                    backend.invalidate();
                }
                _ => {}
            }
        }

        // Tick: poll buttons once and apply press transitions.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let now_ms = started.elapsed().as_millis() as u64;
            for action in edges.update(keys.poll(now_ms)) {
                apply_action(action, grid, farmer)?;
            }
        }
    }
}

fn apply_action(action: FarmAction, grid: &mut Grid, farmer: &mut Farmer) -> Result<()> {
    match action {
        FarmAction::Move(direction) => {
            farmer.move_dir(direction);
        }
        FarmAction::Tend => {
            tend(grid, farmer.x(), farmer.y())?;
        }
    }
    Ok(())
}
