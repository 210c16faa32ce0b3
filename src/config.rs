use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "artviz", version, about = "Seeded generative art renderer (flow-field particles & orbit-trap fractals)")]
pub struct Config {
    #[arg(long, value_enum, default_value_t = Mode::Flow)]
    pub mode: Mode,

    #[arg(long, default_value_t = 960)]
    pub width: u32,

    #[arg(long, default_value_t = 540)]
    pub height: u32,

    #[arg(long, default_value_t = 1000)]
    pub steps: u32,

    #[arg(long, default_value_t = 60000)]
    pub particles: u32,

    #[arg(long, default_value_t = 300)]
    pub iters: u32,

    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    #[arg(long, default_value_t = 0.75)]
    pub strength: f32,

    #[arg(long)]
    pub out: Option<PathBuf>,

    #[arg(long)]
    pub png: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub ascii: bool,

    #[arg(long)]
    pub ascii_width: Option<u16>,

    #[arg(long, default_value_t = false)]
    pub require_png: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Flow,
    Orbit,
}
