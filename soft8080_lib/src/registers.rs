use super::memory::MemoryMap as Memory;
use super::memory::{AddressableIO, MemoryError, MEMMAX};
use std::fmt;

/*
 * 8080 registers
 * accumulator + six 8 bit general purpose registers organized as the
 * three 16 bit pairs BC, DE & HL; the first register of each pair holds
 * the most significant byte.
 * status flags register:
 * bit 7: Sign flag
 * bit 6: Zero flag
 * bit 5: always 0
 * bit 4: Auxiliary carry flag
 * bit 3: always 0
 * bit 2: Parity flag
 * bit 1: always 1
 * bit 0: Carry flag
 *
 * command pointer: 16 bit address register
 * stack pointer: 16 bit address register, grows downward.
 */
const STATUS_FIXED_ONES: u8 = 0b0000_0010;
const STATUS_FLAG_MASK: u8 = 0b1101_0101;

#[derive(Clone)]
pub struct Registers {
    pub accumulator: u8,
    pub register_b: u8,
    pub register_c: u8,
    pub register_d: u8,
    pub register_e: u8,
    pub register_h: u8,
    pub register_l: u8,
    status_register: u8,
    pub command_pointer: usize,
    pub stack_pointer: usize,
    pub interrupt_enabled: bool,
    pub halted: bool,
}

impl Registers {
    pub fn new(init_address: usize) -> Registers {
        Registers {
            accumulator: 0x00,
            register_b: 0x00,
            register_c: 0x00,
            register_d: 0x00,
            register_e: 0x00,
            register_h: 0x00,
            register_l: 0x00,
            status_register: STATUS_FIXED_ONES,
            command_pointer: init_address,
            stack_pointer: 0x0000,
            interrupt_enabled: false,
            halted: false,
        }
    }

    pub fn initialize(&mut self, init_address: usize) {
        *self = Registers::new(init_address);
    }

    /*
     * the status register is exchanged with the memory during PUSH PSW &
     * POP PSW so the packed byte layout above must round trip exactly.
     * The fixed bits are enforced on every unpack.
     */
    pub fn get_status_register(&self) -> u8 {
        (self.status_register & STATUS_FLAG_MASK) | STATUS_FIXED_ONES
    }

    pub fn set_status_register(&mut self, byte: u8) {
        self.status_register = (byte & STATUS_FLAG_MASK) | STATUS_FIXED_ONES;
    }

    pub fn stack_push(
        &mut self,
        memory: &mut Memory,
        byte: u8,
    ) -> std::result::Result<(), MemoryError> {
        self.stack_pointer = self.stack_pointer.wrapping_sub(1) & MEMMAX;
        memory.write(self.stack_pointer, &[byte])
    }

    pub fn stack_pull(&mut self, memory: &Memory) -> std::result::Result<u8, MemoryError> {
        let byte = memory.read(self.stack_pointer, 1)?[0];
        self.stack_pointer = (self.stack_pointer + 1) & MEMMAX;

        Ok(byte)
    }

    pub fn get_bc(&self) -> usize {
        (self.register_b as usize) << 8 | self.register_c as usize
    }

    pub fn set_bc(&mut self, word: usize) {
        self.register_b = (word >> 8) as u8;
        self.register_c = word as u8;
    }

    pub fn get_de(&self) -> usize {
        (self.register_d as usize) << 8 | self.register_e as usize
    }

    pub fn set_de(&mut self, word: usize) {
        self.register_d = (word >> 8) as u8;
        self.register_e = word as u8;
    }

    pub fn get_hl(&self) -> usize {
        (self.register_h as usize) << 8 | self.register_l as usize
    }

    pub fn set_hl(&mut self, word: usize) {
        self.register_h = (word >> 8) as u8;
        self.register_l = word as u8;
    }

    pub fn s_flag_is_set(&self) -> bool {
        self.status_register & 0b10000000 == 0b10000000
    }

    pub fn z_flag_is_set(&self) -> bool {
        self.status_register & 0b01000000 == 0b01000000
    }

    pub fn ac_flag_is_set(&self) -> bool {
        self.status_register & 0b00010000 == 0b00010000
    }

    pub fn p_flag_is_set(&self) -> bool {
        self.status_register & 0b00000100 == 0b00000100
    }

    pub fn c_flag_is_set(&self) -> bool {
        self.status_register & 0b00000001 == 0b00000001
    }

    pub fn set_s_flag(&mut self, flag: bool) {
        if flag {
            self.status_register |= 0b10000000;
        } else {
            self.status_register &= 0b01111111;
        }
    }

    pub fn set_z_flag(&mut self, flag: bool) {
        if flag {
            self.status_register |= 0b01000000;
        } else {
            self.status_register &= 0b10111111;
        }
    }

    pub fn set_ac_flag(&mut self, flag: bool) {
        if flag {
            self.status_register |= 0b00010000;
        } else {
            self.status_register &= 0b11101111;
        }
    }

    pub fn set_p_flag(&mut self, flag: bool) {
        if flag {
            self.status_register |= 0b00000100;
        } else {
            self.status_register &= 0b11111011;
        }
    }

    pub fn set_c_flag(&mut self, flag: bool) {
        if flag {
            self.status_register |= 0b00000001;
        } else {
            self.status_register &= 0b11111110;
        }
    }

    /// Zero, Sign & Parity are pure functions of the result byte.
    pub fn set_zsp_flags(&mut self, byte: u8) {
        self.set_z_flag(byte == 0);
        self.set_s_flag(byte & 0x80 != 0);
        self.set_p_flag(byte.count_ones() % 2 == 0);
    }

    pub fn format_status(&self) -> String {
        format!(
            "{}{}{}{}{}",
            if self.s_flag_is_set() { "S" } else { "s" },
            if self.z_flag_is_set() { "Z" } else { "z" },
            if self.ac_flag_is_set() { "A" } else { "a" },
            if self.p_flag_is_set() { "P" } else { "p" },
            if self.c_flag_is_set() { "C" } else { "c" },
        )
    }
}

impl fmt::Debug for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Registers [A:0x{:02x}, BC:0x{:04x}, DE:0x{:04x}, HL:0x{:04x} | SP:0x{:04x} CP:0x{:04x} | {} | INTE:{} HLT:{}]",
            self.accumulator,
            self.get_bc(),
            self.get_de(),
            self.get_hl(),
            self.stack_pointer,
            self.command_pointer,
            self.format_status(),
            if self.interrupt_enabled { 1 } else { 0 },
            if self.halted { 1 } else { 0 },
        )
    }
}
