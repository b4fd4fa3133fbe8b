use std::fs::File;
use std::io::BufReader;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use chip8_core::constants::FRAMES_PER_SECOND;
use chip8_core::Chip8;
use chip8_display::Display;

use crate::keymap::keymap;
use crate::Args;

pub fn run(args: Args) -> Result<()> {
    let mut chip8 = match args.seed {
        Some(seed) => Chip8::with_seed(args.target, seed),
        None => Chip8::new(args.target),
    };

    // Load ROM
    let file = File::open(&args.rom)
        .with_context(|| format!("unable to open ROM {}", args.rom.display()))?;
    let mut reader = BufReader::new(file);
    chip8
        .load_program(&mut reader)
        .with_context(|| format!("unable to load ROM {}", args.rom.display()))?;

    // Get SDL2 context
    let sdl = sdl2::init().map_err(anyhow::Error::msg)?;
    let title = format!("Chip-8 ({})", chip8.target());
    let mut display = Display::new(&sdl, &title, args.scale).map_err(anyhow::Error::msg)?;
    let mut events = sdl.event_pump().map_err(anyhow::Error::msg)?;

    log::info!(
        "running {} at {} cycles per frame",
        chip8.target(),
        args.cycles
    );

    let frame_time = Duration::from_secs(1) / FRAMES_PER_SECOND;

    'event: loop {
        let frame_start = Instant::now();

        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        chip8.set_key(kc, true)?;
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        chip8.set_key(kc, false)?;
                    }
                }
                _ => continue,
            };
        }

        // Update state
        chip8.run_cycles(args.cycles)?;
        if chip8.tick_timers() {
            log::trace!("beep");
        }

        // If the frame changed, render it
        if let Some(frame) = chip8.take_frame() {
            display.render(frame).map_err(anyhow::Error::msg)?;
        }

        if chip8.has_exited() {
            log::info!("program exited");
            break;
        }

        // Handle timing
        let elapsed = frame_start.elapsed();
        if frame_time > elapsed {
            std::thread::sleep(frame_time - elapsed);
        }
    }

    Ok(())
}
