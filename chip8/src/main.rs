use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;

use chip8_core::constants::CYCLES_PER_FRAME;
use chip8_core::Target;

mod keymap;
mod run;

/// Run a CHIP-8, SUPER-CHIP or XO-CHIP program
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the program image
    rom: PathBuf,

    /// Machine variant to emulate
    #[arg(short, long, default_value = "xo-chip")]
    target: Target,

    /// Instructions executed per 60 Hz frame
    #[arg(short, long, default_value_t = CYCLES_PER_FRAME,
          value_parser = clap::value_parser!(u32).range(1..))]
    cycles: u32,

    /// Window pixels per display pixel
    #[arg(short, long, default_value_t = 8)]
    scale: u32,

    /// Seed for the random number opcode
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    run::run(args)
}
