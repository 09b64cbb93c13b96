mod cpu_instruction;
pub mod microcode;

pub const INIT_VECTOR_ADDR: usize = 0x0000;

pub use self::cpu_instruction::{CPUInstruction, LogLine};
pub use self::microcode::MicrocodeError;
