use super::*;

/*
 * Decimal adjust after a BCD addition. Each nibble above 9 (or flagged
 * by AC/C) gets a +6 correction, the carry out of the high nibble
 * sticks in C.
 */
pub fn daa(
    _memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let byte = registers.accumulator;
    let mut correction: u8 = 0;
    let mut carry = registers.c_flag_is_set();

    if byte & 0x0f > 0x09 || registers.ac_flag_is_set() {
        correction |= 0x06;
    }
    if byte > 0x99 || carry {
        correction |= 0x60;
        carry = true;
    }
    registers.set_ac_flag((byte & 0x0f) + (correction & 0x0f) > 0x0f);
    registers.accumulator = byte.wrapping_add(correction);
    registers.set_zsp_flags(registers.accumulator);
    registers.set_c_flag(carry);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[A=0x{:02x}][S={}]",
            registers.accumulator,
            registers.format_status()
        ),
    ))
}
