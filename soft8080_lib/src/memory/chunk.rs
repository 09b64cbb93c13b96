use std::fmt;

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum ChunkKind {
    Rom,
    Ram,
}

/*
 * A chunk maps a machine address range onto a slice of the physical
 * backing store. Several chunks may point at the same physical bytes,
 * which is how the hardware's RAM mirror is expressed.
 */
pub struct Chunk {
    pub name: String,
    pub kind: ChunkKind,
    pub start: usize,
    pub offset: usize,
    pub len: usize,
}

impl Chunk {
    pub fn new(name: &str, kind: ChunkKind, start: usize, offset: usize, len: usize) -> Chunk {
        Chunk {
            name: name.to_owned(),
            kind,
            start,
            offset,
            len,
        }
    }

    pub fn contains(&self, addr: usize) -> bool {
        addr >= self.start && addr < self.start + self.len
    }

    /// machine address → physical store offset, valid only when `contains` holds
    pub fn translate(&self, addr: usize) -> usize {
        self.offset + (addr - self.start)
    }
}

impl fmt::Debug for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Chunk {:<12} ({:?}), address range=#0x{:04X} → #0x{:04X}, store offset=#0x{:04X}",
            self.name,
            self.kind,
            self.start,
            self.start + self.len - 1,
            self.offset,
        )
    }
}
