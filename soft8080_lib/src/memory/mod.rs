mod chunk;
mod error;
mod memory_map;

pub use chunk::{Chunk, ChunkKind};
pub use error::MemoryError;
pub use memory_map::MemoryMap;

pub const MEMMAX: usize = 65535;

pub fn little_endian(bytes: Vec<u8>) -> usize {
    let mut addr: usize = 0;

    for byte in bytes.iter().rev() {
        addr = addr << 8 | (*byte as usize);
    }

    addr
}

/*
 * AddressableIO
 * this trait defines the interface for all memory systems
 */
pub trait AddressableIO {
    fn read(&self, addr: usize, len: usize) -> Result<Vec<u8>, MemoryError>;
    fn write(&mut self, location: usize, data: &[u8]) -> Result<(), MemoryError>;
    fn get_size(&self) -> usize;
}
