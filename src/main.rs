//! Breakout entry point
//!
//! Headless driver: builds a session, feeds it scripted or autopilot input on
//! a fixed cadence and prints text frames.

use std::path::PathBuf;
use std::thread::sleep;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use breakout::renderer::render;
use breakout::sim::{Autopilot, Script, TickInput, tick};
use breakout::{GameConfig, Session};

#[derive(Debug, Parser)]
#[command(name = "breakout", about = "Run a Breakout session in the terminal")]
struct Args {
    /// JSON config file (missing keys use the defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON script of timed input events
    #[arg(long)]
    script: Option<PathBuf>,

    /// Maximum number of ticks to simulate
    #[arg(long, default_value_t = 2_000)]
    ticks: u64,

    /// Let the built-in autopilot steer the paddle
    #[arg(long)]
    autopilot: bool,

    /// Sleep for the configured tick interval between ticks
    #[arg(long)]
    realtime: bool,

    /// Print a frame every N ticks (0 prints only the final frame)
    #[arg(long, default_value_t = 0)]
    frame_every: u64,

    /// Text frame width in characters
    #[arg(long, default_value_t = 40)]
    columns: usize,

    /// Text frame height in characters
    #[arg(long, default_value_t = 30)]
    rows: usize,

    /// Write the default config to this path and exit
    #[arg(long)]
    write_config: Option<PathBuf>,
}

fn main() -> Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    let args = Args::parse();

    if let Some(path) = &args.write_config {
        GameConfig::default()
            .save(path)
            .with_context(|| format!("writing config to {}", path.display()))?;
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    let script = match &args.script {
        Some(path) => Script::load(path)
            .with_context(|| format!("loading script from {}", path.display()))?,
        None => Script::default(),
    };

    let interval = Duration::from_millis(config.tick_interval_ms);
    let mut session = Session::with_config(config)?;
    let mut cursor = script.cursor();
    let mut autopilot = args.autopilot.then(Autopilot::new);

    log::info!(
        "Running up to {} ticks (autopilot: {}, scripted events: {})",
        args.ticks,
        args.autopilot,
        script.events.len()
    );

    while session.time_ticks() < args.ticks && session.is_in_play() {
        let mut input: TickInput = cursor.input_at(session.time_ticks());
        if let Some(pilot) = autopilot.as_mut() {
            input.events.extend(pilot.next_input(&session).events);
        }
        tick(&mut session, &input);

        if args.frame_every > 0 && session.time_ticks() % args.frame_every == 0 {
            println!("tick {}", session.time_ticks());
            print!("{}", render(&session, args.columns, args.rows));
        }
        if args.realtime {
            sleep(interval);
        }
    }

    let snapshot = session.snapshot();
    print!("{}", render(&session, args.columns, args.rows));
    println!(
        "tick {} | {:?} | bricks destroyed {}/{} | fingerprint {:016x}",
        snapshot.tick,
        snapshot.phase,
        snapshot.destroyed_count(),
        snapshot.destroyed.len(),
        snapshot.fingerprint()
    );
    Ok(())
}
