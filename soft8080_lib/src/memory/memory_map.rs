use super::*;
use std::cmp;

/*
 * The memory map is a flat physical backing store exposed to the bus
 * through an ordered list of chunks. Resolution is first match wins, so
 * the mapping order is the mapping priority. Two chunks may alias the
 * same physical bytes under different machine addresses (RAM mirror).
 */
#[derive(Debug, Default)]
pub struct MemoryMap {
    store: Vec<u8>,
    chunks: Vec<Chunk>,
}

impl MemoryMap {
    pub fn new(store_len: usize) -> MemoryMap {
        MemoryMap {
            store: vec![0x00; store_len],
            chunks: vec![],
        }
    }

    /// 64 KiB of plain RAM, the whole address space writable.
    pub fn new_with_ram() -> MemoryMap {
        let mut memory = MemoryMap::new(MEMMAX + 1);
        memory
            .chunks
            .push(Chunk::new("RAM", ChunkKind::Ram, 0x0000, 0x0000, MEMMAX + 1));

        memory
    }

    pub fn add_chunk(
        &mut self,
        name: &str,
        kind: ChunkKind,
        start: usize,
        offset: usize,
        len: usize,
    ) -> Result<(), MemoryError> {
        if offset + len > self.store.len() {
            return Err(MemoryError::StoreOverflow(offset + len, self.store.len()));
        }

        for chunk in self.chunks.iter() {
            let overlap = start < chunk.start + chunk.len && chunk.start < start + len;
            if overlap && chunk.kind != kind {
                return Err(MemoryError::ChunkOverlap(cmp::max(start, chunk.start)));
            }
        }
        self.chunks.push(Chunk::new(name, kind, start, offset, len));

        Ok(())
    }

    /*
     * Fill the physical store directly, bypassing the chunk table. This
     * is how ROM images get their content at build time, since the bus
     * rejects writes through a Rom chunk.
     */
    pub fn load_store(&mut self, offset: usize, data: &[u8]) -> Result<(), MemoryError> {
        if offset + data.len() > self.store.len() {
            return Err(MemoryError::StoreOverflow(
                offset + data.len(),
                self.store.len(),
            ));
        }
        self.store[offset..offset + data.len()].copy_from_slice(data);

        Ok(())
    }

    pub fn get_chunks_info(&self) -> Vec<String> {
        let mut output: Vec<String> = vec![];

        for chunk in self.chunks.iter() {
            output.push(format!("#{}: {:?}", output.len(), chunk));
        }

        output
    }

    fn resolve(&self, addr: usize) -> Option<&Chunk> {
        self.chunks.iter().find(|chunk| chunk.contains(addr))
    }
}

impl AddressableIO for MemoryMap {
    fn read(&self, addr: usize, len: usize) -> Result<Vec<u8>, MemoryError> {
        let mut results: Vec<u8> = vec![];

        for machine_addr in addr..addr + len {
            match self.resolve(machine_addr) {
                Some(chunk) => results.push(self.store[chunk.translate(machine_addr)]),
                None => return Err(MemoryError::Unmapped(machine_addr)),
            }
        }

        Ok(results)
    }

    fn write(&mut self, location: usize, data: &[u8]) -> Result<(), MemoryError> {
        for (index, byte) in data.iter().enumerate() {
            let machine_addr = location + index;
            match self.resolve(machine_addr) {
                Some(chunk) => {
                    if chunk.kind == ChunkKind::Rom {
                        return Err(MemoryError::ReadOnly(machine_addr));
                    }
                    let store_offset = chunk.translate(machine_addr);
                    self.store[store_offset] = *byte;
                }
                None => return Err(MemoryError::Unmapped(machine_addr)),
            }
        }

        Ok(())
    }

    fn get_size(&self) -> usize {
        MEMMAX + 1
    }
}
