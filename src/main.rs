use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let cfg = artviz::config::Config::parse();
    artviz::app::run(cfg)
}
