mod cpu_instruction;
mod machine;
pub mod memory;
mod ports;
mod processing_unit;
mod registers;

pub use cpu_instruction::{CPUInstruction, LogLine, MicrocodeError, INIT_VECTOR_ADDR};
pub use machine::{
    CabinetPorts, Machine, MachineError, CPU_CLOCK_HZ, CYCLES_PER_FRAME, CYCLES_PER_SCANLINE,
    FRAMES_PER_SECOND, MID_SCREEN_SCANLINE, ROM_FILES, ROM_FILE_SIZE, SCREEN_HEIGHT, VRAM_ADDR,
    VRAM_SIZE,
};
pub use memory::AddressableIO;
pub use memory::MemoryMap as Memory;
pub use ports::{NullPorts, PortIO, ShiftRegister};
pub use processing_unit::*;
pub use registers::Registers;
