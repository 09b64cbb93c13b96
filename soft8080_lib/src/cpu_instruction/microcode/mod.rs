use crate::cpu_instruction::{CPUInstruction, LogLine};
use crate::memory::{little_endian, AddressableIO, MemoryMap as Memory};
use crate::ports::PortIO;
use crate::registers::Registers;

mod error;
pub use error::{MicrocodeError, Result};

mod adc;
mod add;
mod ana;
mod call;
mod cma;
mod cmc;
mod cmp;
mod daa;
mod dad;
mod dcr;
mod dcx;
mod di;
mod ei;
mod hlt;
mod inr;
mod input;
mod inx;
mod jmp;
mod lda;
mod ldax;
mod lhld;
mod lxi;
mod mov;
mod mvi;
mod nop;
mod ora;
mod output;
mod pchl;
mod pop;
mod push;
mod ret;
mod rotate;
mod rst;
mod sbb;
mod shld;
mod sphl;
mod sta;
mod stax;
mod stc;
mod sub;
mod xchg;
mod xra;
mod xthl;

pub use adc::{aci, adc};
pub use add::{add, adi};
pub use ana::{ana, ani};
pub use call::{call, call_if};
pub use cma::cma;
pub use cmc::cmc;
pub use cmp::{cmp, cpi};
pub use daa::daa;
pub use dad::dad;
pub use dcr::dcr;
pub use dcx::dcx;
pub use di::di;
pub use ei::ei;
pub use hlt::hlt;
pub use inr::inr;
pub use input::input;
pub use inx::inx;
pub use jmp::{jmp, jmp_if};
pub use lda::lda;
pub use ldax::ldax;
pub use lhld::lhld;
pub use lxi::lxi;
pub use mov::mov;
pub use mvi::mvi;
pub use nop::nop;
pub use ora::{ora, ori};
pub use output::output;
pub use pchl::pchl;
pub use pop::pop;
pub use push::push;
pub use ret::{ret, ret_if};
pub use rotate::{ral, rar, rlc, rrc};
pub use rst::rst;
pub use sbb::{sbb, sbi};
pub use shld::shld;
pub use sphl::sphl;
pub use sta::sta;
pub use stax::stax;
pub use stc::stc;
pub use sub::{sub, sui};
pub use xchg::xchg;
pub use xra::{xra, xri};
pub use xthl::xthl;

/*
 * Register selectors follow the opcode encoding: B C D E H L M A where
 * M is the byte addressed by HL. Register pair selectors: BC DE HL SP.
 */
pub(crate) fn register_name(selector: u8) -> &'static str {
    match selector & 0x07 {
        0 => "B",
        1 => "C",
        2 => "D",
        3 => "E",
        4 => "H",
        5 => "L",
        6 => "M",
        _ => "A",
    }
}

pub(crate) fn read_register(
    memory: &Memory,
    registers: &Registers,
    selector: u8,
) -> Result<u8> {
    let byte = match selector & 0x07 {
        0 => registers.register_b,
        1 => registers.register_c,
        2 => registers.register_d,
        3 => registers.register_e,
        4 => registers.register_h,
        5 => registers.register_l,
        6 => memory.read(registers.get_hl(), 1)?[0],
        _ => registers.accumulator,
    };

    Ok(byte)
}

pub(crate) fn write_register(
    memory: &mut Memory,
    registers: &mut Registers,
    selector: u8,
    byte: u8,
) -> Result<()> {
    match selector & 0x07 {
        0 => registers.register_b = byte,
        1 => registers.register_c = byte,
        2 => registers.register_d = byte,
        3 => registers.register_e = byte,
        4 => registers.register_h = byte,
        5 => registers.register_l = byte,
        6 => memory.write(registers.get_hl(), &[byte])?,
        _ => registers.accumulator = byte,
    }

    Ok(())
}

pub(crate) fn pair_name(selector: u8) -> &'static str {
    match selector & 0x03 {
        0 => "B",
        1 => "D",
        2 => "H",
        _ => "SP",
    }
}

pub(crate) fn read_pair(registers: &Registers, selector: u8) -> usize {
    match selector & 0x03 {
        0 => registers.get_bc(),
        1 => registers.get_de(),
        2 => registers.get_hl(),
        _ => registers.stack_pointer,
    }
}

pub(crate) fn write_pair(registers: &mut Registers, selector: u8, word: usize) {
    match selector & 0x03 {
        0 => registers.set_bc(word),
        1 => registers.set_de(word),
        2 => registers.set_hl(word),
        _ => registers.stack_pointer = word & 0xffff,
    }
}

pub(crate) fn condition_name(selector: u8) -> &'static str {
    match selector & 0x07 {
        0 => "NZ",
        1 => "Z",
        2 => "NC",
        3 => "C",
        4 => "PO",
        5 => "PE",
        6 => "P",
        _ => "M",
    }
}

pub(crate) fn condition_is_met(selector: u8, registers: &Registers) -> bool {
    match selector & 0x07 {
        0 => !registers.z_flag_is_set(),
        1 => registers.z_flag_is_set(),
        2 => !registers.c_flag_is_set(),
        3 => registers.c_flag_is_set(),
        4 => !registers.p_flag_is_set(),
        5 => registers.p_flag_is_set(),
        6 => !registers.s_flag_is_set(),
        _ => registers.s_flag_is_set(),
    }
}

/*
 * ALU cores shared by the register, memory & immediate forms. The
 * caller decides whether the result lands in the accumulator (CMP
 * computes flags only).
 */
pub(crate) fn add_and_set_flags(registers: &mut Registers, byte: u8, carry_in: bool) -> u8 {
    let carry = u8::from(carry_in);
    let sum = registers.accumulator as u16 + byte as u16 + carry as u16;
    let result = sum as u8;
    registers.set_zsp_flags(result);
    registers.set_c_flag(sum > 0xff);
    registers.set_ac_flag((registers.accumulator & 0x0f) + (byte & 0x0f) + carry > 0x0f);

    result
}

// AC is set when there is NO borrow out of bit 3, matching the silicon
pub(crate) fn subtract_and_set_flags(registers: &mut Registers, byte: u8, borrow_in: bool) -> u8 {
    let borrow = u8::from(borrow_in);
    let result = registers
        .accumulator
        .wrapping_sub(byte)
        .wrapping_sub(borrow);
    registers.set_zsp_flags(result);
    registers.set_c_flag((registers.accumulator as u16) < byte as u16 + borrow as u16);
    registers.set_ac_flag(
        (registers.accumulator & 0x0f) as i16 - (byte & 0x0f) as i16 - borrow as i16 >= 0,
    );

    result
}
