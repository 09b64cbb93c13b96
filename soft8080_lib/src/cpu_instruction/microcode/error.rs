use crate::memory;
use std::error;
use std::fmt;

#[derive(Debug)]
pub enum MicrocodeError {
    // ↓ when a memory access fails during the microcode operation
    Memory(memory::MemoryError),
    // ↓ instruction address & opcode byte
    UnimplementedOpcode(usize, u8),
}

pub type Result<T> = std::result::Result<T, MicrocodeError>;

impl fmt::Display for MicrocodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MicrocodeError::Memory(e) => {
                write!(f, "memory error during microcode operation: {}", e)
            }
            MicrocodeError::UnimplementedOpcode(addr, opcode) => write!(
                f,
                "unimplemented opcode 0x{:02X} at address 0x{:04X}",
                opcode, addr
            ),
        }
    }
}

impl error::Error for MicrocodeError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

impl std::convert::From<memory::MemoryError> for MicrocodeError {
    fn from(err: memory::MemoryError) -> MicrocodeError {
        MicrocodeError::Memory(err)
    }
}
