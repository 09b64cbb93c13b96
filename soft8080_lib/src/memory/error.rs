use std::error;
use std::fmt;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum MemoryError {
    Unmapped(usize),            // machine address, no chunk covers it
    ReadOnly(usize),            // machine address, write into a ROM chunk
    ChunkOverlap(usize),        // machine address claimed by two chunks of different kinds
    StoreOverflow(usize, usize), // physical end of the chunk, store size
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MemoryError::Unmapped(addr) => {
                write!(f, "No memory mapped at address 0x{:04X}.", addr)
            }
            MemoryError::ReadOnly(addr) => write!(
                f,
                "Could not WRITE at address 0x{:04X}, this memory is read-only.",
                addr
            ),
            MemoryError::ChunkOverlap(addr) => write!(
                f,
                "Conflicting memory mappings at address 0x{:04X}.",
                addr
            ),
            MemoryError::StoreOverflow(end, store_len) => write!(
                f,
                "Chunk extends to physical offset 0x{:04X} but the backing store holds {} bytes.",
                end, store_len
            ),
        }
    }
}

impl error::Error for MemoryError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}
