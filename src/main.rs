mod app;
mod camera;
mod event;
mod gamestate;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use sylva_geom::Viewport;
use sylva_world::{StepMode, WorldGen, WorldGenParams, WorldSeed, load_params_from_path};

use crate::app::App;
use crate::camera::ScrollPattern;

const TICKS_PER_SECOND: u32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum StepArg {
    Tile,
    Track,
}

impl From<StepArg> for StepMode {
    fn from(v: StepArg) -> Self {
        match v {
            StepArg::Tile => StepMode::Tile,
            StepArg::Track => StepMode::Track,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sylva", about = "Headless streamed side-scroller world generator")]
struct Args {
    /// World seed; random when omitted
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i32>,

    /// Worldgen config (TOML)
    #[arg(long, default_value = "assets/worldgen/worldgen.toml")]
    config: PathBuf,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 500)]
    ticks: u64,

    /// Camera speed in pixels per second
    #[arg(long, default_value_t = 250.0)]
    speed: f32,

    #[arg(long, value_enum, default_value_t = ScrollPattern::Right)]
    pattern: ScrollPattern,

    /// Viewport size as WIDTHxHEIGHT
    #[arg(long, default_value = "1024x600", value_parser = parse_viewport)]
    viewport: Viewport,

    /// Overrides the config's window stepping mode
    #[arg(long, value_enum)]
    step: Option<StepArg>,

    /// Also write the log to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Pace ticks in real time instead of running flat out
    #[arg(long)]
    realtime: bool,
}

fn parse_viewport(s: &str) -> Result<Viewport, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w: u32 = w.trim().parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let h: u32 = h.trim().parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    if w == 0 || h == 0 {
        return Err("viewport dimensions must be positive".to_string());
    }
    Ok(Viewport::new(w as f32, h as f32))
}

fn init_logging(log_file: Option<&Path>) {
    let Some(path) = log_file else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        return;
    };
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        LevelFilter::Info,
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    match File::create(path) {
        Ok(f) => loggers.push(WriteLogger::new(
            LevelFilter::Debug,
            simplelog::Config::default(),
            f,
        )),
        Err(e) => eprintln!("cannot open log file {}: {e}", path.display()),
    }
    if let Err(e) = CombinedLogger::init(loggers) {
        eprintln!("logger already initialised: {e}");
    }
}

fn load_params(path: &Path) -> WorldGenParams {
    match load_params_from_path(path) {
        Ok(p) => {
            log::info!("loaded worldgen config from {}", path.display());
            p
        }
        Err(e) => {
            log::warn!(
                "worldgen config {} unusable ({}); using defaults",
                path.display(),
                e
            );
            WorldGenParams::default()
        }
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.log_file.as_deref());

    let mut params = load_params(&args.config);
    if let Some(step) = args.step {
        params.step_mode = step.into();
    }
    let seed = WorldSeed(args.seed.unwrap_or_else(rand::random::<i32>));
    log::info!(
        "seed={} viewport={}x{} tile={} step={:?}",
        seed.0,
        args.viewport.width,
        args.viewport.height,
        params.tile_size,
        params.step_mode
    );

    let world = WorldGen::new(seed, params, args.viewport);
    let mut app = App::new(world, args.pattern, args.speed);
    app.bootstrap();

    let dt = 1.0 / TICKS_PER_SECOND as f32;
    let frame = Duration::from_secs_f32(dt);
    let started = Instant::now();
    for _ in 0..args.ticks {
        let t0 = Instant::now();
        app.step(dt);
        if args.realtime {
            if let Some(rest) = frame.checked_sub(t0.elapsed()) {
                std::thread::sleep(rest);
            }
        }
    }
    let elapsed = started.elapsed();

    let summary = app.summary();
    log::info!(
        "ran {} ticks in {:.1} ms ({:.0} ticks/s)",
        summary.ticks,
        elapsed.as_secs_f64() * 1000.0,
        summary.ticks as f64 / elapsed.as_secs_f64().max(1e-9)
    );
    println!("{summary}");
}
