use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use soft8080_lib::Machine;

/// headless arcade board driver
/// Loads the four ROM images from the given directory and runs the
/// machine frame by frame until the frame budget is reached or CTRL-C
/// is pressed, then dumps the processor state.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct CommandLineArguments {
    /// Directory holding the ROM set (invaders.h g f e)
    rom_dir: PathBuf,

    /// Stop after this many frames
    #[arg(short, long)]
    frames: Option<usize>,

    /// DIP switch byte, hexadecimal (example: "03")
    #[arg(short, long, default_value = "00")]
    dip_switches: String,
}

fn parse_hex_byte(input: &str) -> Result<u8> {
    let bytes = hex::decode(input)
        .with_context(|| format!("could not parse hexadecimal byte '{}'", input))?;
    anyhow::ensure!(bytes.len() == 1, "expected exactly one byte, got '{}'", input);

    Ok(bytes[0])
}

fn main() -> Result<()> {
    let parameters = CommandLineArguments::parse();
    let mut machine = Machine::new(&parameters.rom_dir)?;
    machine.ports.dip_switches = parse_hex_byte(&parameters.dip_switches)?;

    let interrupted = Arc::new(AtomicBool::new(false));
    let rmtint = interrupted.clone();
    ctrlc::set_handler(move || {
        rmtint.store(true, Ordering::SeqCst);
    })?;

    while !interrupted.load(Ordering::Relaxed) {
        machine.run_frame()?;
        if let Some(frames) = parameters.frames {
            if machine.frame_count() >= frames {
                break;
            }
        }
    }

    println!("ran {} frames", machine.frame_count());
    println!("{:?}", machine.registers);

    Ok(())
}
