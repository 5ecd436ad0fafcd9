use clap::{Parser, ValueEnum};
use glint_renderer::CameraControl;
use log::LevelFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// One camera movement step, named like the keys that drive it interactively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WalkStep {
    Forward,
    Back,
    Left,
    Right,
    TurnLeft,
    TurnRight,
    LookUp,
    LookDown,
    Rise,
    Sink,
}

impl From<WalkStep> for CameraControl {
    fn from(step: WalkStep) -> Self {
        match step {
            WalkStep::Forward => CameraControl::Forward,
            WalkStep::Back => CameraControl::Back,
            WalkStep::Left => CameraControl::StrafeLeft,
            WalkStep::Right => CameraControl::StrafeRight,
            WalkStep::TurnLeft => CameraControl::TurnLeft,
            WalkStep::TurnRight => CameraControl::TurnRight,
            WalkStep::LookUp => CameraControl::LookUp,
            WalkStep::LookDown => CameraControl::LookDown,
            WalkStep::Rise => CameraControl::Rise,
            WalkStep::Sink => CameraControl::Sink,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "glint")]
#[command(about = "Monte Carlo sphere path tracer")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value = "500")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "500")]
    pub height: u32,

    /// Full-frame passes to average (accumulated in full precision, then
    /// quantized to 8 bits once)
    #[arg(long, short = 's', default_value = "100")]
    pub samples: u32,

    /// Bounce budget per camera ray
    #[arg(long, default_value = "10")]
    pub max_depth: u32,

    /// RNG seed; omit for a fresh random render
    #[arg(long)]
    pub seed: Option<u64>,

    /// Single-bounce albedo preview instead of the full trace
    #[arg(long)]
    pub preview: bool,

    #[arg(short, long, default_value = "output.png")]
    pub output: String,

    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Camera step applied before rendering (repeatable, in order)
    #[arg(long, value_enum)]
    pub walk: Vec<WalkStep>,
}
