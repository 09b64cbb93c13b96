/*
 * PortIO
 * the IN & OUT instructions talk to an 8 bit port space that is
 * entirely separate from the memory bus. The board hardware hangs off
 * this trait; the interpreter core only ever sees the trait object.
 */
pub trait PortIO {
    fn port_in(&mut self, port: u8) -> u8 {
        let _ = port;
        0x00
    }

    fn port_out(&mut self, port: u8, byte: u8) {
        let _ = (port, byte);
    }
}

/// bare CPU with nothing wired to the ports, reads return 0
#[derive(Debug, Default)]
pub struct NullPorts;

impl PortIO for NullPorts {}

/*
 * The Midway external shift register. Writing a byte shifts the 16 bit
 * value right by 8 and installs the byte as the new high half; reading
 * returns 8 bits taken `offset` positions below the top.
 */
#[derive(Debug, Default)]
pub struct ShiftRegister {
    value: u16,
    offset: u8,
}

impl ShiftRegister {
    pub fn fill(&mut self, byte: u8) {
        self.value = (self.value >> 8) | ((byte as u16) << 8);
    }

    pub fn set_offset(&mut self, byte: u8) {
        self.offset = byte & 0x07;
    }

    pub fn result(&self) -> u8 {
        ((self.value >> (8 - self.offset)) & 0xff) as u8
    }
}
