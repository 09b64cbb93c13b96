use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use soft8080_lib::memory::ChunkKind;
use soft8080_lib::{Memory, MemoryParserIterator};

/// 8080 disassembler
/// The given binary files are concatenated in order and decoded from
/// the origin address, one printed line per instruction. Bytes that do
/// not decode to a documented opcode come out as .DB lines.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct CommandLineArguments {
    /// Binary files to disassemble, concatenated in the given order
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Load & start address, hexadecimal (example: "0100")
    #[arg(short, long, default_value = "0000")]
    org: String,
}

fn parse_hex_address(input: &str) -> Result<usize> {
    let bytes = hex::decode(input)
        .with_context(|| format!("could not parse hexadecimal address '{}'", input))?;
    let mut addr: usize = 0;

    for byte in bytes {
        addr = addr << 8 | byte as usize;
    }

    Ok(addr)
}

fn main() -> Result<()> {
    let parameters = CommandLineArguments::parse();
    let origin = parse_hex_address(&parameters.org)?;
    let mut program: Vec<u8> = vec![];

    for filepath in &parameters.files {
        let mut data = fs::read(filepath)
            .with_context(|| format!("could not read file '{}'", filepath.display()))?;
        program.append(&mut data);
    }

    let mut memory = Memory::new(program.len());
    memory.add_chunk("PRG", ChunkKind::Rom, origin, 0x0000, program.len())?;
    memory.load_store(0x0000, &program)?;

    for line in MemoryParserIterator::new(origin, &memory) {
        println!("{}", line);
    }

    Ok(())
}
